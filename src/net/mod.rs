//! Generation-service protocol: wire types, the HTTP call, and response
//! normalization.

pub mod api;
pub mod response;
pub mod types;
