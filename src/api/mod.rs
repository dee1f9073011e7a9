//! API layer - HTTP surface of the application.
//!
//! Handlers, the JWT middleware, the validated-JSON extractor, route
//! assembly, the OpenAPI document, and the shared application state.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

pub use openapi::ApiDoc;
pub use routes::create_router;
pub use state::AppState;
