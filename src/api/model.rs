/// Wire types returned by the content view definition endpoints.
use serde::{Deserialize, Serialize};

/// Numeric identifier of a content view.
pub type ViewId = u64;

/// A content view definition as returned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    pub id: u64,
    pub label: String,
    #[serde(default)]
    pub name: String,
}

/// A content view. Definitions reference views by id; they do not own them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct View {
    pub id: ViewId,
    pub label: String,
    pub name: String,
}

/// Entities looked up by label.
pub trait Labeled {
    fn label(&self) -> &str;
}

impl Labeled for Definition {
    fn label(&self) -> &str {
        &self.label
    }
}

impl Labeled for View {
    fn label(&self) -> &str {
        &self.label
    }
}

/// Request body for replacing a definition's component views.
#[derive(Debug, Serialize)]
pub(crate) struct UpdateViewsBody<'a> {
    pub views: &'a [ViewId],
}
