use casual_http::{BufferType, ErrorState, ServiceBuffer, ServiceCallRequestMessage};
use casual_service_endpoint::{
    LocalServiceEndpoint, LocalServiceEndpointInterface, ServiceCallWorkCreator, WorkerPool,
    error::WorkError,
};
use futures::future::join_all;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

fn octet_request(service_name: &str, body: Vec<u8>) -> ServiceCallRequestMessage {
    ServiceCallRequestMessage::new(service_name, ServiceBuffer::of(BufferType::XOctet, body))
}

#[tokio::test]
async fn test_pool_never_exceeds_its_size() {
    let running = Arc::new(AtomicUsize::new(0));
    let peak = Arc::new(AtomicUsize::new(0));

    let endpoint = LocalServiceEndpoint::new();
    endpoint
        .register("slow", {
            let running = running.clone();
            let peak = peak.clone();
            move |request| {
                let running = running.clone();
                let peak = peak.clone();
                async move {
                    let now = running.fetch_add(1, Ordering::SeqCst) + 1;
                    peak.fetch_max(now, Ordering::SeqCst);
                    tokio::time::sleep(Duration::from_millis(20)).await;
                    running.fetch_sub(1, Ordering::SeqCst);
                    Ok(request.service_buffer().clone())
                }
            }
        })
        .unwrap();

    let pool = WorkerPool::new(2);
    let handles: Vec<_> = (0..6)
        .map(|i| {
            let request = octet_request("slow", vec![i]);
            pool.submit(endpoint.create(request.correlation_id(), request))
                .unwrap()
        })
        .collect();

    for reply in join_all(handles.into_iter().map(|h| h.join())).await {
        assert_eq!(reply.unwrap().error(), ErrorState::Ok);
    }
    assert!(peak.load(Ordering::SeqCst) <= 2);
    assert_eq!(pool.available(), 2);
}

#[tokio::test]
async fn test_concurrent_work_units_stay_isolated() {
    let endpoint = Arc::new(LocalServiceEndpoint::new());
    endpoint
        .register("tag", |request| async move {
            // Reply with the correlation id the request was built with, after
            // yielding so that units interleave on the runtime.
            tokio::task::yield_now().await;
            Ok(ServiceBuffer::of(
                BufferType::CString,
                request.correlation_id().to_string(),
            ))
        })
        .unwrap();

    let pool = WorkerPool::new(4);
    let calls = (0..32).map(|_| {
        let endpoint = endpoint.clone();
        let pool = pool.clone();
        async move {
            let request = octet_request("tag", Vec::new());
            let correlation_id = request.correlation_id();
            let reply = pool
                .submit(endpoint.create(correlation_id, request))
                .unwrap()
                .join()
                .await
                .unwrap();
            (correlation_id, reply)
        }
    });

    for (correlation_id, reply) in join_all(calls).await {
        assert_eq!(reply.correlation_id(), correlation_id);
        let body = reply.service_buffer().unwrap().bytes().clone();
        assert_eq!(body, correlation_id.to_string().as_bytes());
    }
}

#[tokio::test]
async fn test_closed_pool_rejects_submissions() {
    let endpoint = LocalServiceEndpoint::new();
    let pool = WorkerPool::new(1);
    pool.close();

    let request = octet_request("any", Vec::new());
    let result = pool.submit(endpoint.create(request.correlation_id(), request));
    assert!(matches!(result, Err(WorkError::PoolClosed)));
}

#[tokio::test]
async fn test_join_timeout_reports_stall_and_frees_slot() {
    let endpoint = LocalServiceEndpoint::new();
    endpoint
        .register("hang", |_request| async move {
            std::future::pending::<()>().await;
            unreachable!()
        })
        .unwrap();

    let pool = WorkerPool::new(1);
    let request = octet_request("hang", Vec::new());
    let correlation_id = request.correlation_id();
    let handle = pool.submit(endpoint.create(correlation_id, request)).unwrap();

    let result = handle.join_timeout(Duration::from_millis(50)).await;
    match result {
        Err(WorkError::Stalled {
            correlation_id: stalled,
            waited,
        }) => {
            assert_eq!(stalled, correlation_id);
            assert_eq!(waited, Duration::from_millis(50));
        }
        other => panic!("expected a stall, got {other:?}"),
    }

    // The aborted unit gives its slot back.
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert_eq!(pool.available(), 1);
}

#[test]
fn test_submit_outside_runtime_fails() {
    let endpoint = LocalServiceEndpoint::new();
    let pool = WorkerPool::default();
    let request = octet_request("any", Vec::new());
    let result = pool.submit(endpoint.create(request.correlation_id(), request));
    assert!(matches!(result, Err(WorkError::Submit(_))));
}
