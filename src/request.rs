//! Explicit request context handed to [`Router::match_request`](crate::Router::match_request).
//!
//! The web layer fills this in from whatever server it runs on; the router
//! never reads process-wide state.

use http::Method;

/// Form field name conventionally used to tunnel `PUT`/`DELETE` through `POST`.
pub const METHOD_OVERRIDE_FIELD: &str = "_method";

/// Method, URI and the few request details that influence routing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    method: Method,
    uri: String,
    form_method: Option<String>,
    script_dir: Option<String>,
}

impl RequestContext {
    pub fn new(method: Method, uri: impl Into<String>) -> Self {
        Self {
            method,
            uri: uri.into(),
            form_method: None,
            script_dir: None,
        }
    }

    /// Value of the [`METHOD_OVERRIDE_FIELD`] form field, if the request had one.
    #[must_use]
    pub fn with_form_method(mut self, value: impl Into<String>) -> Self {
        self.form_method = Some(value.into());
        self
    }

    /// Directory the front controller is served from; stripped from the path.
    #[must_use]
    pub fn with_script_dir(mut self, dir: impl Into<String>) -> Self {
        self.script_dir = Some(dir.into());
        self
    }

    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// The method used for routing.
    ///
    /// A `POST` whose override field upper-cases to `PUT` or `DELETE` is
    /// routed as that verb. Any other override value is ignored.
    #[must_use]
    pub fn effective_method(&self) -> Method {
        if self.method == Method::POST {
            if let Some(value) = &self.form_method {
                match value.trim().to_ascii_uppercase().as_str() {
                    "PUT" => return Method::PUT,
                    "DELETE" => return Method::DELETE,
                    _ => {}
                }
            }
        }
        self.method.clone()
    }

    /// The URI path without query string or script directory.
    ///
    /// The script directory is only stripped on a segment boundary: `/app`
    /// is removed from `/app/x` but not from `/application/x`.
    #[must_use]
    pub fn path(&self) -> &str {
        let path = match self.uri.find('?') {
            Some(pos) => &self.uri[..pos],
            None => &self.uri,
        };
        let dir = match self.script_dir.as_deref() {
            Some(dir) => dir.trim_end_matches('/'),
            None => return path,
        };
        if dir.is_empty() {
            return path;
        }
        match path.strip_prefix(dir) {
            Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
            _ => path,
        }
    }
}
