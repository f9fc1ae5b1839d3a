//! Connection accounting for graceful shutdown.
//!
//! Wraps the make-service handed to `axum::serve`: each accepted connection
//! gets a ticket that stays alive until the last clone of its per-connection
//! service is dropped.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use tower::Service;

use crate::api::shutdown::ShutdownManager;

pub struct ConnectionCounter<M> {
    inner: M,
    shutdown: Arc<ShutdownManager>,
}

impl<M> ConnectionCounter<M> {
    pub fn new(inner: M, shutdown: Arc<ShutdownManager>) -> Self {
        Self { inner, shutdown }
    }
}

impl<M: Clone> Clone for ConnectionCounter<M> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            shutdown: self.shutdown.clone(),
        }
    }
}

impl<M, T> Service<T> for ConnectionCounter<M>
where
    M: Service<T> + Send,
    M::Future: Send + 'static,
    M::Response: Send + 'static,
{
    type Response = TrackedService<M::Response>;
    type Error = M::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, target: T) -> Self::Future {
        let ticket = Arc::new(ConnectionTicket::issue(self.shutdown.clone()));
        let fut = self.inner.call(target);

        Box::pin(async move {
            let service = fut.await?;
            Ok(TrackedService {
                inner: service,
                _ticket: ticket,
            })
        })
    }
}

/// Counts one open connection until dropped.
struct ConnectionTicket {
    shutdown: Arc<ShutdownManager>,
}

impl ConnectionTicket {
    fn issue(shutdown: Arc<ShutdownManager>) -> Self {
        shutdown.increment_connections();
        Self { shutdown }
    }
}

impl Drop for ConnectionTicket {
    fn drop(&mut self) {
        self.shutdown.decrement_connections();
    }
}

/// Per-connection service. Clones share one ticket.
#[derive(Clone)]
pub struct TrackedService<S> {
    inner: S,
    _ticket: Arc<ConnectionTicket>,
}

impl<S, Req> Service<Req> for TrackedService<S>
where
    S: Service<Req>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Req) -> Self::Future {
        self.inner.call(req)
    }
}
