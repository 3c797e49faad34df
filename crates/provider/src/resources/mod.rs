//! Resource provider implementations
//!
//! Each resource type implements the four-operation lifecycle contract.
//! Providers are stateless: the external service is the only source of
//! truth, and every invocation works purely from the request it is handed.

pub mod instance_profile;

use async_trait::async_trait;
use stratus_common::Result;

use crate::progress::ProgressEvent;
use crate::request::ResourceRequest;

/// The lifecycle contract every resource provider obeys.
///
/// Operations perform no retry, no backoff and no rollback; errors from the
/// external API surface unmodified to the orchestrator, which owns
/// re-invocation and convergence polling.
#[async_trait]
pub trait ResourceProvider: Send + Sync {
    /// Resource type name, e.g. `AWS::IAM::InstanceProfile`
    fn type_name(&self) -> &'static str;

    /// Create the resource described by the request's desired state.
    ///
    /// Resolves the primary identifier (caller-supplied, else a
    /// deterministic default) and returns it in the model rather than
    /// mutating the desired state.
    async fn create(&self, request: &ResourceRequest) -> Result<ProgressEvent>;

    /// Fetch the live external state for drift detection.
    async fn read(&self, request: &ResourceRequest) -> Result<ProgressEvent>;

    /// Update the resource. Create-only properties must be rejected.
    async fn update(&self, request: &ResourceRequest) -> Result<ProgressEvent>;

    /// Delete the resource identified by the previous state.
    async fn delete(&self, request: &ResourceRequest) -> Result<ProgressEvent>;
}
