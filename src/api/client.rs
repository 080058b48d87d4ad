/// The collaborator seam between commands and the content management server.
use super::errors::ApiError;
use super::model::{Definition, View, ViewId};

/// Operations the content view commands need from the server.
///
/// Lookups return `Ok(None)` when nothing matches; `Err` is reserved for
/// transport or server failures so callers can tell the two apart.
pub trait ContentViewApi {
    /// Find a content view definition by label within an organization.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    fn find_definition(&self, org: &str, label: &str) -> Result<Option<Definition>, ApiError>;

    /// Find a content view by label within an organization.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    fn find_view(&self, org: &str, label: &str) -> Result<Option<View>, ApiError>;

    /// List the component views of a definition, in server order.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    fn list_views(&self, definition_id: u64) -> Result<Vec<View>, ApiError>;

    /// Replace the component views of a definition.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the server rejects the update.
    fn update_views(&self, definition_id: u64, views: &[ViewId]) -> Result<(), ApiError>;
}
