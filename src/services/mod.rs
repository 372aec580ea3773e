//! API Services
//!
//! Frontend bindings to the feedback server's REST API, organized by domain.

mod http;
mod posts;
mod roadmap;
#[cfg(test)]
pub mod memory;

pub use http::ApiClient;
pub use posts::get_post;
pub use roadmap::*;
