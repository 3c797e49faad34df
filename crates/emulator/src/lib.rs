//! Stratus Emulator
//!
//! In-memory emulations of the cloud services the resource providers
//! reconcile against. Each service owns its own state behind a lock; there
//! is no persistence and no network surface. The emulated APIs enforce the
//! same integrity rules as their real counterparts (duplicate-name
//! rejection, detach-before-delete, tag targets must exist) so provider
//! behavior can be exercised faithfully.

pub mod config;
pub mod events;
pub mod iam;

pub use config::EmulatorConfig;
pub use events::EventsService;
pub use iam::{IamService, InstanceProfile};
