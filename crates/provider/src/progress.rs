//! Lifecycle operation results

use serde::{Deserialize, Serialize};

use crate::document::Document;

/// Outcome of a single lifecycle operation invocation.
///
/// `InProgress` tells the orchestrator to keep polling via `read` until the
/// resource converges; `Success` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationStatus {
    InProgress,
    Success,
    Failed,
}

/// Status plus the resource-model snapshot produced by the operation.
///
/// The model is always a fresh document: providers never write generated
/// fields back into the caller's desired state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressEvent {
    pub status: OperationStatus,
    pub resource_model: Document,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ProgressEvent {
    pub fn in_progress(resource_model: Document) -> Self {
        Self {
            status: OperationStatus::InProgress,
            resource_model,
            message: None,
        }
    }

    pub fn success(resource_model: Document) -> Self {
        Self {
            status: OperationStatus::Success,
            resource_model,
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}
