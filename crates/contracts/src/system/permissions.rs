//! Permission grids: one row per (user, target), saved row by row.

use crate::domain::a001_client_type::aggregate::ClientTypePermission;
use crate::domain::common::EntityId;
use serde::{Deserialize, Serialize};

/// Access of a user to a branch (`/branch/permission`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchPermission {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    pub user_id: EntityId,
    pub branch_id: EntityId,
    #[serde(default)]
    pub can_view: bool,
    #[serde(default)]
    pub can_operate: bool,
}

impl BranchPermission {
    pub fn empty(user_id: EntityId, branch_id: EntityId) -> Self {
        Self {
            id: None,
            user_id,
            branch_id,
            can_view: false,
            can_operate: false,
        }
    }
}

/// Row of a permission grid.
pub trait PermissionRow: Clone + PartialEq {
    fn new_empty(user_id: EntityId, target_id: EntityId) -> Self;
    fn user_id(&self) -> EntityId;
    fn target_id(&self) -> EntityId;
    fn grants_nothing(&self) -> bool;
}

impl PermissionRow for BranchPermission {
    fn new_empty(user_id: EntityId, target_id: EntityId) -> Self {
        Self::empty(user_id, target_id)
    }

    fn user_id(&self) -> EntityId {
        self.user_id
    }

    fn target_id(&self) -> EntityId {
        self.branch_id
    }

    fn grants_nothing(&self) -> bool {
        !self.can_view && !self.can_operate
    }
}

impl PermissionRow for ClientTypePermission {
    fn new_empty(user_id: EntityId, target_id: EntityId) -> Self {
        Self::empty(user_id, target_id)
    }

    fn user_id(&self) -> EntityId {
        self.user_id
    }

    fn target_id(&self) -> EntityId {
        self.client_type_id
    }

    fn grants_nothing(&self) -> bool {
        !self.can_view && !self.can_create && !self.can_edit && !self.can_delete
    }
}

/// One row per target for `user_id`: stored grants, empty rows for the rest.
pub fn build_grid<P: PermissionRow>(
    user_id: EntityId,
    target_ids: &[EntityId],
    stored: &[P],
) -> Vec<P> {
    target_ids
        .iter()
        .map(|target| {
            stored
                .iter()
                .find(|p| p.user_id() == user_id && p.target_id() == *target)
                .cloned()
                .unwrap_or_else(|| P::new_empty(user_id, *target))
        })
        .collect()
}

/// Grid for a response loaded for `user_id`, or `None` when the selection has
/// since moved to another user and the response must be dropped.
pub fn grid_for_selection<P: PermissionRow>(
    selected: Option<EntityId>,
    user_id: EntityId,
    target_ids: &[EntityId],
    stored: &[P],
) -> Option<Vec<P>> {
    (selected == Some(user_id)).then(|| build_grid(user_id, target_ids, stored))
}

/// What saving an edited row requires.
#[derive(Debug, Clone, PartialEq)]
pub enum GridChange<P> {
    Create(P),
    Update(P),
    Delete(P),
}

impl<P: PermissionRow> GridChange<P> {
    pub fn row(&self) -> &P {
        match self {
            GridChange::Create(p) | GridChange::Update(p) | GridChange::Delete(p) => p,
        }
    }
}

/// Rows of `edited` that differ from `original`, paired by position.
///
/// A new row that grants nothing needs no request; a stored row cleared of
/// all rights is deleted.
pub fn diff_grid<P>(original: &[P], edited: &[P], id_of: impl Fn(&P) -> Option<EntityId>) -> Vec<GridChange<P>>
where
    P: PermissionRow,
{
    original
        .iter()
        .zip(edited)
        .filter(|(before, after)| before != after)
        .filter_map(|(_, after)| match id_of(after) {
            None if after.grants_nothing() => None,
            None => Some(GridChange::Create(after.clone())),
            Some(_) if after.grants_nothing() => Some(GridChange::Delete(after.clone())),
            Some(_) => Some(GridChange::Update(after.clone())),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_fills_missing_targets() {
        let stored = vec![BranchPermission {
            id: Some(9),
            user_id: 1,
            branch_id: 2,
            can_view: true,
            can_operate: false,
        }];
        let grid = build_grid(1, &[1, 2, 3], &stored);
        assert_eq!(grid.len(), 3);
        assert_eq!(grid[0], BranchPermission::empty(1, 1));
        assert_eq!(grid[1].id, Some(9));
    }

    #[test]
    fn late_grid_for_previous_user_is_dropped() {
        let stored = vec![BranchPermission {
            id: Some(9),
            user_id: 1,
            branch_id: 2,
            can_view: true,
            can_operate: true,
        }];
        // User 1 was loading when the admin picked user 2.
        assert_eq!(grid_for_selection(Some(2), 1, &[1, 2], &stored), None);
        assert_eq!(grid_for_selection::<BranchPermission>(None, 1, &[1, 2], &stored), None);

        let grid = grid_for_selection(Some(1), 1, &[1, 2], &stored).unwrap();
        assert!(grid.iter().all(|row| row.user_id == 1));
        assert!(grid[1].can_operate);
    }

    #[test]
    fn diff_classifies_changes() {
        let stored = vec![BranchPermission {
            id: Some(9),
            user_id: 1,
            branch_id: 2,
            can_view: true,
            can_operate: false,
        }];
        let original = build_grid(1, &[1, 2, 3], &stored);
        let mut edited = original.clone();
        edited[0].can_view = true;
        edited[1].can_view = false;
        edited[2].can_operate = true;
        edited[2].can_operate = false;

        let changes = diff_grid(&original, &edited, |p| p.id);
        assert_eq!(changes.len(), 2);
        assert!(matches!(&changes[0], GridChange::Create(p) if p.branch_id == 1));
        assert!(matches!(&changes[1], GridChange::Delete(p) if p.id == Some(9)));
    }

    #[test]
    fn client_type_rows_update() {
        let stored = vec![ClientTypePermission {
            id: Some(4),
            can_view: true,
            ..ClientTypePermission::empty(1, 5)
        }];
        let original = build_grid(1, &[5], &stored);
        let mut edited = original.clone();
        edited[0].can_edit = true;
        let changes = diff_grid(&original, &edited, |p| p.id);
        assert_eq!(changes.len(), 1);
        assert!(matches!(&changes[0], GridChange::Update(p) if p.can_edit));
        assert_eq!(changes[0].row().target_id(), 5);
    }
}
