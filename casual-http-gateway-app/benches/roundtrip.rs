use axum::{
    body::Body,
    http::{Request, header},
};
use casual_http::CasualContentType;
use casual_http_gateway_app::demo_services::{ECHO, register_demo_services};
use casual_tokio_http_server::{GatewayConfig, HttpGatewayServer};
use criterion::{Criterion, criterion_group, criterion_main};
use futures::{StreamExt, stream::FuturesUnordered};
use std::hint::black_box;
use tokio::runtime::Runtime;
use tower::ServiceExt;

fn echo_request() -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(format!("/casual/{ECHO}"))
        .header(header::CONTENT_TYPE, CasualContentType::JSON)
        .body(Body::from(r#"{"values":[1.0,2.0,3.0]}"#))
        .unwrap()
}

fn bench_roundtrip(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();

    let server = HttpGatewayServer::builder(&GatewayConfig::default()).build();
    register_demo_services(server.endpoint().as_ref()).unwrap();
    let router = server.router();

    c.bench_function("local_echo_roundtrip_futures_unordered_batch_10", |b| {
        b.to_async(&rt).iter(|| async {
            let mut tasks = FuturesUnordered::new();

            for _ in 0..10 {
                tasks.push(router.clone().oneshot(echo_request()));
            }

            let mut results = Vec::with_capacity(10);
            while let Some(res) = tasks.next().await {
                results.push(res.unwrap().status());
            }

            black_box(results);
        });
    });

    c.bench_function("local_echo_roundtrip_singles", |b| {
        b.to_async(&rt).iter(|| async {
            let res = router.clone().oneshot(echo_request()).await;
            black_box(res.unwrap().status());
        });
    });
}

criterion_group!(benches, bench_roundtrip);
criterion_main!(benches);
