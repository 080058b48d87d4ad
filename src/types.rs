/// Shared serializable output types for all commands.
///
/// These types are what gets written to stdout — either as JSON or rendered
/// as a table. They are decoupled from the API wire types.
use serde::{Deserialize, Serialize};

use crate::api::{View, ViewId};
use crate::definition::{ActionError, MembershipChange};

/// A content view in list output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewOutput {
    /// Server id.
    pub id: ViewId,
    /// Unique label within the organization.
    pub label: String,
    /// Display name.
    pub name: String,
}

impl From<&View> for ViewOutput {
    fn from(view: &View) -> Self {
        Self {
            id: view.id,
            label: view.label.clone(),
            name: view.name.clone(),
        }
    }
}

/// Result of `add-view` / `remove-view`.
#[derive(Debug, Clone, Serialize)]
pub struct MembershipOutput {
    /// Organization name.
    pub org: String,
    /// Definition label.
    pub definition: String,
    /// Definition id.
    pub definition_id: u64,
    /// Label of the view that was added or removed.
    pub view: String,
    /// Id of the view that was added or removed.
    pub view_id: ViewId,
    /// `add` or `remove`.
    pub change: MembershipChange,
    /// The complete view id list submitted (or that would be, on `--dry-run`).
    pub views: Vec<ViewId>,
    /// Whether this was a dry-run (no update performed).
    pub dry_run: bool,
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (snake_case).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Missing option names, for usage errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing: Option<Vec<String>>,
}

impl ErrorOutput {
    /// Construct from an `ActionError`.
    #[must_use]
    pub fn from_action_error(err: &ActionError) -> Self {
        let missing = match err {
            ActionError::Usage { missing } => {
                Some(missing.iter().map(|m| (*m).to_owned()).collect())
            }
            _ => None,
        };
        Self {
            ok: false,
            error: ErrorDetail {
                code: err.code().to_owned(),
                message: err.to_string(),
                missing,
            },
        }
    }
}
