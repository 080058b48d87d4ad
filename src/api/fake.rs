/// In-memory `ContentViewApi` that records every call, for command tests.
use std::cell::RefCell;

use super::client::ContentViewApi;
use super::errors::ApiError;
use super::model::{Definition, View, ViewId};

/// A recorded call against [`FakeApi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    FindDefinition { org: String, label: String },
    FindView { org: String, label: String },
    ListViews(u64),
    UpdateViews(u64, Vec<ViewId>),
}

/// Canned server state; each `fail_*` switch makes that request error out.
pub struct FakeApi {
    pub definition: Option<Definition>,
    pub view: Option<View>,
    pub members: Vec<View>,
    pub fail_find_definition: bool,
    pub fail_find_view: bool,
    pub fail_list_views: bool,
    pub reject_update: bool,
    calls: RefCell<Vec<Call>>,
}

/// Build a `View` fixture.
pub fn view(id: ViewId, label: &str, name: &str) -> View {
    View {
        id,
        label: label.to_owned(),
        name: name.to_owned(),
    }
}

/// Build a `Definition` fixture.
pub fn definition(id: u64, label: &str) -> Definition {
    Definition {
        id,
        label: label.to_owned(),
        name: format!("Definition {label}"),
    }
}

impl FakeApi {
    pub fn new(definition: Option<Definition>, view: Option<View>, members: Vec<View>) -> Self {
        Self {
            definition,
            view,
            members,
            fail_find_definition: false,
            fail_find_view: false,
            fail_list_views: false,
            reject_update: false,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn list_calls(&self) -> Vec<u64> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::ListViews(id) => Some(id),
                _ => None,
            })
            .collect()
    }

    pub fn update_calls(&self) -> Vec<(u64, Vec<ViewId>)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::UpdateViews(id, views) => Some((id, views)),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn unavailable(path: String) -> ApiError {
        ApiError::Status {
            status: 503,
            url: path,
            body: "Service Unavailable".to_owned(),
        }
    }
}

impl ContentViewApi for FakeApi {
    fn find_definition(&self, org: &str, label: &str) -> Result<Option<Definition>, ApiError> {
        self.record(Call::FindDefinition {
            org: org.to_owned(),
            label: label.to_owned(),
        });
        if self.fail_find_definition {
            return Err(Self::unavailable(format!(
                "/api/organizations/{org}/content_view_definitions/"
            )));
        }
        Ok(self.definition.clone())
    }

    fn find_view(&self, org: &str, label: &str) -> Result<Option<View>, ApiError> {
        self.record(Call::FindView {
            org: org.to_owned(),
            label: label.to_owned(),
        });
        if self.fail_find_view {
            return Err(Self::unavailable(format!(
                "/api/organizations/{org}/content_views/"
            )));
        }
        Ok(self.view.clone())
    }

    fn list_views(&self, definition_id: u64) -> Result<Vec<View>, ApiError> {
        self.record(Call::ListViews(definition_id));
        if self.fail_list_views {
            return Err(Self::unavailable(format!(
                "/api/content_view_definitions/{definition_id}/content_views"
            )));
        }
        Ok(self.members.clone())
    }

    fn update_views(&self, definition_id: u64, views: &[ViewId]) -> Result<(), ApiError> {
        self.record(Call::UpdateViews(definition_id, views.to_vec()));
        if self.reject_update {
            return Err(ApiError::Status {
                status: 422,
                url: format!("/api/content_view_definitions/{definition_id}/content_views"),
                body: "cannot contain products, or repositories if it contains views".to_owned(),
            });
        }
        Ok(())
    }
}
