//! Stratus Resource Providers
//!
//! Translates declarative resource documents into sequences of calls
//! against the emulated cloud services. Each provider implements the
//! create / read / update / delete lifecycle contract; an external
//! orchestrator drives the operations and polls `read` until convergence.

pub mod client;
pub mod document;
pub mod naming;
pub mod progress;
pub mod registry;
pub mod request;
pub mod resources;

pub use client::{EmulatorIamClient, IamApi};
pub use progress::{OperationStatus, ProgressEvent};
pub use registry::ProviderRegistry;
pub use request::{ClientFactory, ResourceRequest};
pub use resources::ResourceProvider;
