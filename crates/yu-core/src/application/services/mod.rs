//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the
//! high-level workflows behind each subcommand.

pub mod compose_service;
pub mod discovery;
pub mod executor;
pub mod scaffold_service;

pub use compose_service::ComposeService;
pub use discovery::ServiceDiscovery;
pub use executor::Executor;
pub use scaffold_service::ScaffoldService;
