/// Lookup resolution: turn org/label pairs into server entities or a data error.
use tracing::debug;

use super::errors::ActionError;
use crate::api::{ContentViewApi, Definition, View};

/// Resolve a content view definition by label.
///
/// # Errors
///
/// - `ActionError::DefinitionNotFound` — no definition has this label
/// - `ActionError::Remote` — the lookup request failed
pub fn resolve_definition<A>(api: &A, org: &str, label: &str) -> Result<Definition, ActionError>
where
    A: ContentViewApi + ?Sized,
{
    debug!(org, label, "resolving content view definition");
    api.find_definition(org, label)?
        .ok_or_else(|| ActionError::DefinitionNotFound {
            org: org.to_owned(),
            label: label.to_owned(),
        })
}

/// Resolve a content view by label.
///
/// # Errors
///
/// - `ActionError::ViewNotFound` — no view has this label
/// - `ActionError::Remote` — the lookup request failed
pub fn resolve_view<A>(api: &A, org: &str, label: &str) -> Result<View, ActionError>
where
    A: ContentViewApi + ?Sized,
{
    debug!(org, label, "resolving content view");
    api.find_view(org, label)?
        .ok_or_else(|| ActionError::ViewNotFound {
            org: org.to_owned(),
            label: label.to_owned(),
        })
}
