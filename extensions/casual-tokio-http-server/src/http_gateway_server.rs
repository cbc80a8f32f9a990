use crate::{
    CasualService, ExceptionHandler, GatewayConfig, LoggingExceptionHandler, ServiceRouter,
    handlers::{LocalRequestHandler, RemoteRequestHandler},
    service_request_handler,
};
use axum::{Router, routing::post};
use casual_service_caller::{NoEntryCaller, ServiceCaller};
use casual_service_endpoint::{
    LocalServiceEndpoint, ServiceCallWorkCreator, ServiceRegistryLookup, WorkerPool,
};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::{TcpListener, ToSocketAddrs};

/// An HTTP server exposing casual services under `/casual/{service_name}`.
pub struct HttpGatewayServer {
    endpoint: Arc<LocalServiceEndpoint>,
    service: Arc<CasualService>,
    pool: WorkerPool,
}

impl HttpGatewayServer {
    /// A gateway whose local services are registered on [`Self::endpoint`] and
    /// whose remote calls go through `service_caller`.
    pub fn new(config: &GatewayConfig, service_caller: Arc<dyn ServiceCaller>) -> Self {
        Self::builder(config).service_caller(service_caller).build()
    }

    pub fn builder(config: &GatewayConfig) -> HttpGatewayServerBuilder {
        HttpGatewayServerBuilder {
            config: config.clone(),
            endpoint: None,
            registry: None,
            work_creator: None,
            service_caller: None,
            exception_handler: None,
            pool: None,
        }
    }

    /// Returns the endpoint local services are registered on.
    pub fn endpoint(&self) -> Arc<LocalServiceEndpoint> {
        self.endpoint.clone()
    }

    pub fn pool(&self) -> &WorkerPool {
        &self.pool
    }

    /// The routes of the gateway, ready to be served or nested.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/casual/{service_name}", post(service_request_handler))
            .with_state(self.service.clone())
    }

    /// Binds to an address and starts the gateway.
    pub async fn serve<A: ToSocketAddrs>(self, addr: A) -> Result<SocketAddr, axum::BoxError> {
        let listener = TcpListener::bind(addr).await?;
        Arc::new(self).serve_with_listener(listener).await
    }

    /// Starts the gateway on a specific host and port.
    pub async fn serve_on(self, host: &str, port: u16) -> Result<SocketAddr, axum::BoxError> {
        self.serve(format!("{host}:{port}")).await
    }

    /// Starts the gateway with a pre-bound `TcpListener`, e.g. one bound to
    /// an ephemeral port.
    pub async fn serve_with_listener(
        self: Arc<Self>,
        listener: TcpListener,
    ) -> Result<SocketAddr, axum::BoxError> {
        self.serve_with_shutdown(listener, std::future::pending())
            .await
    }

    /// Like [`Self::serve_with_listener`], but returns once `signal`
    /// completes and in-flight requests have drained. The worker pool is
    /// closed afterwards.
    pub async fn serve_with_shutdown<S>(
        self: Arc<Self>,
        listener: TcpListener,
        signal: S,
    ) -> Result<SocketAddr, axum::BoxError>
    where
        S: Future<Output = ()> + Send + 'static,
    {
        let address = listener.local_addr()?;
        tracing::info!("Gateway running on {:?}", address);
        let served = axum::serve(listener, self.router())
            .with_graceful_shutdown(signal)
            .await;
        self.pool.close();
        tracing::info!("Gateway on {:?} stopped", address);
        served?;
        Ok(address)
    }
}

/// Assembles a gateway, filling in anything not set with the defaults:
/// a fresh [`LocalServiceEndpoint`] as registry and work creator,
/// [`NoEntryCaller`] for remote calls and [`LoggingExceptionHandler`].
pub struct HttpGatewayServerBuilder {
    config: GatewayConfig,
    endpoint: Option<Arc<LocalServiceEndpoint>>,
    registry: Option<Arc<dyn ServiceRegistryLookup>>,
    work_creator: Option<Arc<dyn ServiceCallWorkCreator>>,
    service_caller: Option<Arc<dyn ServiceCaller>>,
    exception_handler: Option<Arc<dyn ExceptionHandler>>,
    pool: Option<WorkerPool>,
}

impl HttpGatewayServerBuilder {
    pub fn endpoint(mut self, endpoint: Arc<LocalServiceEndpoint>) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Overrides the locality decision, which otherwise asks the endpoint.
    pub fn registry(mut self, registry: Arc<dyn ServiceRegistryLookup>) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn work_creator(mut self, work_creator: Arc<dyn ServiceCallWorkCreator>) -> Self {
        self.work_creator = Some(work_creator);
        self
    }

    pub fn service_caller(mut self, service_caller: Arc<dyn ServiceCaller>) -> Self {
        self.service_caller = Some(service_caller);
        self
    }

    pub fn exception_handler(mut self, exception_handler: Arc<dyn ExceptionHandler>) -> Self {
        self.exception_handler = Some(exception_handler);
        self
    }

    pub fn pool(mut self, pool: WorkerPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn build(self) -> HttpGatewayServer {
        let config = self.config;
        let endpoint = self
            .endpoint
            .unwrap_or_else(|| Arc::new(LocalServiceEndpoint::new()));
        let registry = self
            .registry
            .unwrap_or_else(|| endpoint.clone() as Arc<dyn ServiceRegistryLookup>);
        let work_creator = self
            .work_creator
            .unwrap_or_else(|| endpoint.clone() as Arc<dyn ServiceCallWorkCreator>);
        let pool = self
            .pool
            .unwrap_or_else(|| WorkerPool::new(config.worker_pool_size));

        let service = CasualService {
            router: ServiceRouter::new(registry),
            work_creator,
            service_caller: self
                .service_caller
                .unwrap_or_else(|| Arc::new(NoEntryCaller)),
            exception_handler: self
                .exception_handler
                .unwrap_or_else(|| Arc::new(LoggingExceptionHandler)),
            local_request_handler: LocalRequestHandler::new(
                pool.clone(),
                config.local_call_timeout(),
                config.max_request_body_bytes,
            ),
            remote_request_handler: RemoteRequestHandler::new(config.max_request_body_bytes),
        };

        HttpGatewayServer {
            endpoint,
            service: Arc::new(service),
            pool,
        }
    }
}
