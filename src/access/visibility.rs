use uuid::Uuid;

use entity::note::Category;

use super::category::allowed_categories;
use super::role::RoleSet;

/// The parts of a note the visibility rule looks at.
pub trait VisibleNote {
    fn category(&self) -> Category;
    fn created_by(&self) -> Uuid;
    fn assigned_to(&self) -> &[Uuid];
}

/// A director sees everything on the movie. Anyone else needs both the
/// category permission and to be the note's creator or one of its assignees.
pub fn can_view<N: VisibleNote>(user_id: Uuid, roles: &RoleSet, note: &N) -> bool {
    if roles.is_director() {
        return true;
    }
    let participant = note.created_by() == user_id || note.assigned_to().contains(&user_id);
    participant && allowed_categories(roles).contains(&note.category())
}

/// Filters `notes` (all notes of one movie) down to what `user_id` may see.
/// Input order is preserved.
pub fn visible_notes<N: VisibleNote>(user_id: Uuid, roles: &RoleSet, notes: Vec<N>) -> Vec<N> {
    if roles.is_director() {
        return notes;
    }
    if roles.is_empty() {
        return Vec::new();
    }
    notes.into_iter().filter(|n| can_view(user_id, roles, n)).collect()
}
