//! Transport port

use std::future::Future;
use std::sync::Arc;

use qltest_domain::{OutgoingRequest, Settled};

/// Port for sending a query to the endpoint.
///
/// Implementations never fail: a non-2xx status, a timeout or a network
/// error all settle as `Err(TransportFailure)`.
pub trait Transport: Send + Sync {
    /// POSTs `request.body` to `request.url` and settles the result.
    fn post(&self, request: &OutgoingRequest) -> impl Future<Output = Settled> + Send;
}

impl<T: Transport> Transport for Arc<T> {
    fn post(&self, request: &OutgoingRequest) -> impl Future<Output = Settled> + Send {
        (**self).post(request)
    }
}
