use casual_http::{BufferType, ServiceBuffer};
use casual_tokio_http_server::{GatewayConfig, HttpGatewayServer, LocalServiceEndpointInterface};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

#[tokio::test]
async fn test_serves_over_tcp_until_shutdown() {
    let server = HttpGatewayServer::builder(&GatewayConfig::default()).build();
    server
        .endpoint()
        .register("greet", |request| async move {
            let name = String::from_utf8_lossy(request.service_buffer().bytes()).into_owned();
            Ok(ServiceBuffer::of(
                BufferType::XOctet,
                format!("hello {name}"),
            ))
        })
        .unwrap();
    let server = Arc::new(server);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let serving = tokio::spawn({
        let server = server.clone();
        async move {
            server
                .serve_with_shutdown(listener, async {
                    let _ = shutdown_rx.await;
                })
                .await
        }
    });

    let mut stream = TcpStream::connect(addr).await.unwrap();
    let request = "POST /casual/greet HTTP/1.1\r\n\
                   Host: localhost\r\n\
                   Content-Type: application/casual-x-octet\r\n\
                   Content-Length: 5\r\n\
                   Connection: close\r\n\
                   \r\n\
                   world";
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).await.unwrap();
    let raw = String::from_utf8(raw).unwrap();

    assert!(raw.starts_with("HTTP/1.1 200"), "unexpected response: {raw}");
    assert!(
        raw.to_ascii_lowercase()
            .contains("content-type: application/casual-x-octet"),
        "unexpected response: {raw}"
    );
    assert!(raw.ends_with("hello world"), "unexpected response: {raw}");

    shutdown_tx.send(()).unwrap();
    let served_on = serving.await.unwrap().unwrap();
    assert_eq!(served_on, addr);
    assert!(server.pool().is_closed());
}
