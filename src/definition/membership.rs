/// Membership changes: compute a definition's new component view list.
use serde::Serialize;

use crate::api::{View, ViewId};

/// Whether a view is being added to or removed from a definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MembershipChange {
    Add,
    Remove,
}

/// Compute the id list to submit for `current` after applying `change` with `target`.
///
/// - `Add` appends `target.id` to the existing ids. It does not skip a view
///   already present under the same name; the server is left to reject it.
/// - `Remove` drops every member whose `name` equals `target.name`, so the
///   match is by name rather than id. Removing an absent name is a no-op.
///
/// Order of the remaining members is preserved. `current` is not modified.
#[must_use]
pub fn apply_change(current: &[View], target: &View, change: MembershipChange) -> Vec<ViewId> {
    match change {
        MembershipChange::Add => current
            .iter()
            .map(|v| v.id)
            .chain(std::iter::once(target.id))
            .collect(),
        MembershipChange::Remove => current
            .iter()
            .filter(|v| v.name != target.name)
            .map(|v| v.id)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::view;

    fn members() -> Vec<View> {
        vec![
            view(1, "view1", "View 1"),
            view(2, "view2", "View 2"),
            view(3, "view3", "View 3"),
        ]
    }

    #[test]
    fn test_add_appends_target_last() {
        let current = vec![view(1, "view1", "View 1")];
        let target = view(2, "view2", "View 2");
        assert_eq!(apply_change(&current, &target, MembershipChange::Add), vec![1, 2]);
    }

    #[test]
    fn test_add_to_empty_definition() {
        let target = view(9, "view9", "View 9");
        assert_eq!(apply_change(&[], &target, MembershipChange::Add), vec![9]);
    }

    #[test]
    fn test_quirk_add_does_not_dedup_existing_member() {
        let current = members();
        let target = current[0].clone();
        assert_eq!(
            apply_change(&current, &target, MembershipChange::Add),
            vec![1, 2, 3, 1]
        );
    }

    #[test]
    fn test_remove_by_name_preserves_order() {
        let current = members();
        let target = view(2, "view2", "View 2");
        assert_eq!(
            apply_change(&current, &target, MembershipChange::Remove),
            vec![1, 3]
        );
    }

    #[test]
    fn test_remove_matches_name_not_id() {
        let current = members();
        // Same name as member 3, different id and label.
        let target = view(42, "other-label", "View 3");
        assert_eq!(
            apply_change(&current, &target, MembershipChange::Remove),
            vec![1, 2]
        );
    }

    #[test]
    fn test_remove_absent_name_is_noop() {
        let current = members();
        let target = view(7, "view7", "View 7");
        assert_eq!(
            apply_change(&current, &target, MembershipChange::Remove),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_remove_is_idempotent() {
        let current = members();
        let target = view(2, "view2", "View 2");
        let once = apply_change(&current, &target, MembershipChange::Remove);
        let remaining: Vec<View> = current.into_iter().filter(|v| once.contains(&v.id)).collect();
        let twice = apply_change(&remaining, &target, MembershipChange::Remove);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_input_is_not_modified() {
        let current = members();
        let snapshot = current.clone();
        let _ = apply_change(&current, &view(2, "view2", "View 2"), MembershipChange::Remove);
        let _ = apply_change(&current, &view(4, "view4", "View 4"), MembershipChange::Add);
        assert_eq!(current, snapshot);
    }
}
