#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod adapter;
pub mod bootstrap;
pub mod envelope;
pub mod router;
pub mod routes;
pub mod serverless;
pub mod state;

// Re-export primary types
pub use adapter::{CanonicalRequest, RouteKind};
pub use bootstrap::{ServerConfig, bootstrap, start_server};
pub use envelope::Envelope;
pub use router::handle;
pub use routes::create_router;
pub use serverless::{EventResponse, ServerlessEvent, handle_event, handle_route_event};
pub use state::{AppContext, AppState};
