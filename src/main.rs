use routekit::cli::run_cli;
use routekit::logging::init_logging;
use routekit::runtime_config::RuntimeConfig;

fn main() {
    let config = RuntimeConfig::from_env();
    if let Err(err) = init_logging(&config) {
        eprintln!("warning: {err}");
    }

    if let Err(err) = run_cli() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
