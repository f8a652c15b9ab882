use dispatcher::assembler::assemble;
use dispatcher::engine::{dispatch_all, DispatchMode};
use dispatcher::error::RenderError;
use dispatcher::partition::partition;
use dispatcher::{render, render_local};
use shared::errors::ConfigError;
use shared::models::canvas::CanvasSpec;
use shared::networking::endpoint::Endpoint;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

fn spawn_workers(ports: &[u16]) -> Vec<Endpoint> {
    ports
        .iter()
        .map(|&port| {
            let endpoint = Endpoint::new("127.0.0.1".to_string(), port);
            let server = worker::start_worker(&endpoint).expect("failed to bind worker");
            actix_web::rt::spawn(server);
            endpoint
        })
        .collect()
}

#[actix_web::test]
async fn sequential_and_pooled_dispatch_agree() {
    let endpoints = spawn_workers(&[46131, 46132]);
    let spec = CanvasSpec::new(64, 64, -2.0, 2.0, -2.0, 2.0, 64, 16).unwrap();
    let tiles = partition(&spec);

    let sequential = dispatch_all(&spec, &tiles, &endpoints, DispatchMode::Sequential)
        .await
        .unwrap();
    let pooled = dispatch_all(&spec, &tiles, &endpoints, DispatchMode::Pooled)
        .await
        .unwrap();

    assert_eq!(sequential.len(), tiles.len());
    assert_eq!(pooled.len(), tiles.len());

    // Pooled completion order is free to differ; the assembled grids
    // must not, and both must match the in-process reference.
    let reference = render_local(&spec);
    assert_eq!(assemble(&spec, &sequential), reference);
    assert_eq!(assemble(&spec, &pooled), reference);
}

#[actix_web::test]
async fn distributed_render_reproduces_the_reference_canvas() {
    let endpoints = spawn_workers(&[46133]);
    let spec = CanvasSpec::new(8, 8, -2.0, 2.0, -2.0, 2.0, 64, 4).unwrap();
    assert_eq!(partition(&spec).len(), 4);

    let grid = render(&spec, &endpoints, DispatchMode::Pooled).await.unwrap();
    // c = -2-2i escapes before the first squaring, giving intensity 255.
    assert_eq!(grid.get(0, 0), 255);
    // Pixel (4,4) maps near the plane origin and stays bounded.
    assert_eq!(grid.get(4, 4), 0);
}

#[actix_web::test]
async fn a_worker_survives_a_malformed_request() {
    let endpoints = spawn_workers(&[46134]);

    let mut stream = TcpStream::connect(endpoints[0].to_string()).await.unwrap();
    stream
        .write_all(b"GET /64/8/8 HTTP/1.1\r\nHost: test\r\nConnection: close\r\n\r\n")
        .await
        .unwrap();
    stream.flush().await.unwrap();
    let response = shared::networking::read_response(&mut stream).await.unwrap();
    assert_eq!(response.status, 400);

    // The same worker still serves complete jobs.
    let spec = CanvasSpec::new(8, 8, -2.0, 2.0, -2.0, 2.0, 64, 4).unwrap();
    let grid = render(&spec, &endpoints, DispatchMode::Sequential)
        .await
        .unwrap();
    assert_eq!(grid.get(0, 0), 255);
}

#[actix_web::test]
async fn an_empty_endpoint_list_is_a_configuration_error() {
    let spec = CanvasSpec::new(8, 8, -2.0, 2.0, -2.0, 2.0, 64, 4).unwrap();
    let tiles = partition(&spec);

    let outcome = dispatch_all(&spec, &tiles, &[], DispatchMode::Pooled).await;
    assert!(matches!(
        outcome,
        Err(RenderError::Config(ConfigError::NoEndpoints))
    ));
}

#[actix_web::test]
async fn an_unreachable_endpoint_is_a_transport_error() {
    let spec = CanvasSpec::new(8, 8, -2.0, 2.0, -2.0, 2.0, 64, 4).unwrap();
    let tiles = partition(&spec);
    // Nothing listens on this port.
    let endpoints = vec![Endpoint::new("127.0.0.1".to_string(), 46199)];

    let sequential = dispatch_all(&spec, &tiles, &endpoints, DispatchMode::Sequential).await;
    assert!(matches!(sequential, Err(RenderError::Transport(_))));

    let pooled = dispatch_all(&spec, &tiles, &endpoints, DispatchMode::Pooled).await;
    assert!(matches!(pooled, Err(RenderError::Transport(_))));
}
