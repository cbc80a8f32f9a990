use casual_http::{BufferType, ErrorState, ServiceBuffer, ServiceCallRequestMessage};
use casual_service_endpoint::{
    FnRegistryLookup, LocalServiceEndpoint, LocalServiceEndpointInterface,
    ServiceCallWorkCreator, ServiceRegistryLookup,
    error::{EndpointError, ServiceFailure},
};
use std::sync::Arc;
use uuid::Uuid;

fn json_request(service_name: &str, body: &'static str) -> ServiceCallRequestMessage {
    ServiceCallRequestMessage::new(service_name, ServiceBuffer::of(BufferType::Json, body))
}

#[test]
fn test_handler_registration() {
    let endpoint = LocalServiceEndpoint::new();
    let first = endpoint.register("echo", |request| async move {
        Ok(request.service_buffer().clone())
    });
    assert!(first.is_ok());

    let second = endpoint.register("echo", |request| async move {
        Ok(request.service_buffer().clone())
    });
    assert!(matches!(second, Err(EndpointError::AlreadyRegistered(name)) if name == "echo"));
}

#[test]
fn test_locality_follows_registration() {
    let endpoint = LocalServiceEndpoint::new();
    assert!(!endpoint.is_local("echo"));

    endpoint
        .register("echo", |request| async move {
            Ok(request.service_buffer().clone())
        })
        .unwrap();
    assert!(endpoint.is_local("echo"));
    assert!(!endpoint.is_local("ECHO"));

    assert!(endpoint.deregister("echo"));
    assert!(!endpoint.deregister("echo"));
    assert!(!endpoint.is_local("echo"));
}

#[test]
fn test_fn_registry_lookup() {
    let lookup: Arc<dyn ServiceRegistryLookup> =
        Arc::new(FnRegistryLookup(|name: &str| name.starts_with("local.")));
    assert!(lookup.is_local("local.echo"));
    assert!(!lookup.is_local("remote.echo"));
}

#[tokio::test]
async fn test_work_success_echoes_buffer() {
    let endpoint = LocalServiceEndpoint::new();
    endpoint
        .register("echo", |request| async move {
            Ok(request.service_buffer().clone())
        })
        .unwrap();

    let request = json_request("echo", r#"{"x":1}"#);
    let correlation_id = request.correlation_id();
    let reply = endpoint.create(correlation_id, request).run().await;

    assert_eq!(reply.correlation_id(), correlation_id);
    assert_eq!(reply.error(), ErrorState::Ok);
    let buffer = reply.service_buffer().unwrap();
    assert_eq!(buffer.buffer_type(), Ok(BufferType::Json));
    assert_eq!(&buffer.bytes()[..], br#"{"x":1}"#);
}

#[tokio::test]
async fn test_work_service_failure_keeps_diagnostics() {
    let endpoint = LocalServiceEndpoint::new();
    endpoint
        .register("validate", |_request| async move {
            Err(ServiceFailure::fail(Some(ServiceBuffer::of(
                BufferType::CString,
                "field 'id' missing",
            )))
            .into())
        })
        .unwrap();

    let reply = endpoint
        .create(Uuid::new_v4(), json_request("validate", "{}"))
        .run()
        .await;

    assert_eq!(reply.error(), ErrorState::TpeSvcFail);
    assert_eq!(
        reply.service_buffer(),
        Some(&ServiceBuffer::of(BufferType::CString, "field 'id' missing"))
    );
}

#[tokio::test]
async fn test_work_generic_error_is_service_error() {
    let endpoint = LocalServiceEndpoint::new();
    endpoint
        .register("broken", |_request| async move { Err("database unreachable".into()) })
        .unwrap();

    let reply = endpoint
        .create(Uuid::new_v4(), json_request("broken", "{}"))
        .run()
        .await;

    assert_eq!(reply.error(), ErrorState::TpeSvcErr);
    assert!(reply.service_buffer().is_none());
}

#[tokio::test]
async fn test_work_for_removed_service_is_no_entry() {
    let endpoint = LocalServiceEndpoint::new();
    let reply = endpoint
        .create(Uuid::new_v4(), json_request("gone", "{}"))
        .run()
        .await;

    assert_eq!(reply.error(), ErrorState::TpeNoEnt);
    assert!(reply.service_buffer().is_none());
}

#[tokio::test]
async fn test_work_failure_with_ok_state_is_service_failure() {
    let endpoint = LocalServiceEndpoint::new();
    endpoint
        .register("contradict", |_request| async move {
            Err(ServiceFailure::new(
                ErrorState::Ok,
                Some(ServiceBuffer::of(BufferType::CString, "diag")),
            )
            .into())
        })
        .unwrap();

    let reply = endpoint
        .create(Uuid::new_v4(), json_request("contradict", "{}"))
        .run()
        .await;

    assert_eq!(reply.error(), ErrorState::TpeSvcFail);
    assert_eq!(
        reply.service_buffer(),
        Some(&ServiceBuffer::of(BufferType::CString, "diag"))
    );
}
