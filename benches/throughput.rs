use criterion::{criterion_group, criterion_main, Criterion};
use http::Method;
use routekit::{Parameters, RouterConfig};
use std::hint::black_box;

fn example_config() -> &'static str {
    r#"
base_path: /api
routes:
  root:
    route: /
    _controller: RootController::index
    methods: GET
  animals:
    route: /zoo/animals
    _controller: AnimalController::list
    methods: [GET, POST]
  animal:
    route: /zoo/animals/:id
    _controller: AnimalController::show
    methods: [GET, PUT, PATCH, DELETE]
    filters:
      ":id": '(\d+)'
  animal_toy:
    route: /zoo/animals/:id/toys/:toy_id
    _controller: ToyController::show
    methods: GET
  habitat_section:
    route: /zoo/:category/animals/:id/habitats/:habitat_id/sections/:section_id
    _controller: HabitatController::section
    methods: GET
  item_batch:
    route: /inventory/:warehouse_id/feeds/:feed_id/items/:item_id/batches/:batch_id
    _controller: InventoryController::batch
    methods: POST
  complex:
    route: /complex/:a/:b/:c/:d/:e/:f/:g/:h/:i
    _controller: ComplexController::many
    methods: GET
"#
}

fn bench_route_throughput(c: &mut Criterion) {
    let config = RouterConfig::from_yaml_str(example_config()).expect("valid config");
    let router = routekit::parse_config(&config).expect("valid routes");
    c.bench_function("route_match", |b| {
        let test_paths = [
            (Method::GET, "/api/zoo/animals/123"),
            (Method::GET, "/api/zoo/animals/123/toys/456"),
            (Method::GET, "/api/zoo/cats/animals/123/habitats/88/sections/5"),
            (Method::POST, "/api/inventory/1/feeds/2/items/3/batches/4"),
            (Method::GET, "/api/complex/1/2/3/4/5/6/7/8/9"),
            (Method::GET, "/api/does/not/exist"),
        ];
        b.iter(|| {
            for (method, path) in test_paths.iter() {
                let res = router.route(method, path);
                black_box(&res);
            }
        })
    });
}

fn bench_generate(c: &mut Criterion) {
    let config = RouterConfig::from_yaml_str(example_config()).expect("valid config");
    let router = routekit::parse_config(&config).expect("valid routes");
    let params: Parameters = [
        ("category", "cats"),
        ("id", "123"),
        ("habitat_id", "88"),
        ("section_id", "5"),
    ]
    .into_iter()
    .collect();
    c.bench_function("generate", |b| {
        b.iter(|| black_box(router.generate("habitat_section", &params)))
    });
}

criterion_group!(benches, bench_route_throughput, bench_generate);
criterion_main!(benches);
