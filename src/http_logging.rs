use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Instant;

use http::{Request, Response};
use tower::{Layer, Service};
use tracing::{info, warn};

/// Logs one line per HTTP request with method, path, status and duration.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpLoggingLayer;

impl<S> Layer<S> for HttpLoggingLayer {
    type Service = HttpLoggingService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        HttpLoggingService { inner }
    }
}

#[derive(Clone, Debug)]
pub struct HttpLoggingService<S> {
    inner: S,
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for HttpLoggingService<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>> + Clone + Send + 'static,
    S::Future: Send,
    ReqBody: Send + 'static,
    ResBody: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        let start = Instant::now();
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        // Take the service that was driven to readiness, leave a fresh clone behind
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);
        Box::pin(async move {
            let result = inner.call(req).await;
            let duration_ms = start.elapsed().as_millis();

            match &result {
                Ok(response) if response.status().is_server_error() => warn!(
                    http.method = %method,
                    http.path = %path,
                    http.status = response.status().as_u16(),
                    duration_ms = %duration_ms,
                    "HTTP request failed"
                ),
                Ok(response) => info!(
                    http.method = %method,
                    http.path = %path,
                    http.status = response.status().as_u16(),
                    duration_ms = %duration_ms,
                    "HTTP request completed"
                ),
                Err(_) => warn!(
                    http.method = %method,
                    http.path = %path,
                    http.status = "error",
                    duration_ms = %duration_ms,
                    "HTTP request errored"
                ),
            }

            result
        })
    }
}
