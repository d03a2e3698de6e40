//! Infrastructure adapters

mod reqwest_transport;

pub use reqwest_transport::{
    DEFAULT_TIMEOUT_MS, DEFAULT_USER_AGENT, ReqwestTransport, TransportError,
};
