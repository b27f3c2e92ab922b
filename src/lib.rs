//! Click-to-greet wiring: read a name from the page, ask the backend actor
//! to `greet` it, and show the reply.

pub mod actor;
pub mod config;
pub mod errors;
pub mod handler;
pub mod page;

pub use actor::{ActorCall, ActorClient, GreetRequest, GreetResponse, Greeter, GREET_METHOD};
pub use config::ElementIds;
pub use errors::{ActorError, ConfigError, HandlerError, PageError};
pub use handler::GreetingHandler;
pub use page::{ClickListener, MemoryPage, Page};
