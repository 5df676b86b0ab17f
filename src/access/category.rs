use std::collections::BTreeSet;

use entity::note::Category;

use super::role::{Role, RoleSet};

impl Role {
    /// Note categories this role may author and view.
    pub fn categories(self) -> &'static [Category] {
        use Category::*;
        match self {
            Role::Director => &[Rezija, Gluma, Snimanje, Montaza, Scenografija, Scenario],
            Role::Actor => &[Gluma, Scenario],
            Role::Cinematographer => &[Snimanje, Scenografija, Scenario],
            Role::SetDesigner => &[Scenografija, Scenario],
            Role::Editor => &[Montaza, Snimanje, Scenario],
        }
    }
}

/// Union of the categories of every role in the set. Empty for an empty set.
pub fn allowed_categories(roles: &RoleSet) -> BTreeSet<Category> {
    roles.roles().flat_map(|r| r.categories().iter().copied()).collect()
}

pub fn can_author(roles: &RoleSet, category: Category) -> bool {
    roles.is_director() || allowed_categories(roles).contains(&category)
}
