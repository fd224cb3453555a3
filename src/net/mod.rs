//! Network layer: authenticated HTTP wrapper, endpoint functions, and the
//! wire/domain types they exchange with the REST backend.

pub mod api;
pub mod http;
pub mod types;
