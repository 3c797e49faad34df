//! Lifecycle operation requests

use std::sync::Arc;
use stratus_common::{Error, Result};

use crate::client::IamApi;
use crate::document::Document;

/// Service clients handed to every provider invocation.
///
/// Providers pick the client they need off this bundle rather than owning
/// connections themselves, which keeps them stateless between invocations.
pub struct ClientFactory {
    pub iam: Arc<dyn IamApi>,
}

impl ClientFactory {
    pub fn new(iam: Arc<dyn IamApi>) -> Self {
        Self { iam }
    }
}

/// Everything a provider gets for one lifecycle operation.
///
/// `desired_state` is what the resource should look like after
/// reconciliation; `previous_state` is the last-applied model and is only
/// present for read, update and delete.
pub struct ResourceRequest {
    pub desired_state: Document,
    pub previous_state: Option<Document>,
    pub stack_name: String,
    pub logical_resource_id: String,
    pub clients: Arc<ClientFactory>,
}

impl ResourceRequest {
    pub fn new(
        desired_state: Document,
        stack_name: impl Into<String>,
        logical_resource_id: impl Into<String>,
        clients: Arc<ClientFactory>,
    ) -> Self {
        Self {
            desired_state,
            previous_state: None,
            stack_name: stack_name.into(),
            logical_resource_id: logical_resource_id.into(),
            clients,
        }
    }

    pub fn with_previous_state(mut self, previous_state: Document) -> Self {
        self.previous_state = Some(previous_state);
        self
    }

    /// Previous state, required by read, update and delete.
    pub fn previous_state(&self) -> Result<&Document> {
        self.previous_state.as_ref().ok_or_else(|| {
            Error::InvalidRequest("operation requires a previous state".to_string())
        })
    }
}
