use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

use entity::user_role_film;

/// Crew role held on a movie. Stored as its number in the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum Role {
    Director,
    Actor,
    Cinematographer,
    SetDesigner,
    Editor,
}

impl Role {
    /// Order used to pick the one role that drives navigation and theming.
    pub const MAIN_ROLE_PRIORITY: [Role; 5] = [
        Role::Director,
        Role::Editor,
        Role::Cinematographer,
        Role::Actor,
        Role::SetDesigner,
    ];

    pub fn number(self) -> i32 {
        match self {
            Role::Director => 1,
            Role::Actor => 2,
            Role::Cinematographer => 3,
            Role::SetDesigner => 4,
            Role::Editor => 5,
        }
    }
}

impl TryFrom<i32> for Role {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Role::Director),
            2 => Ok(Role::Actor),
            3 => Ok(Role::Cinematographer),
            4 => Ok(Role::SetDesigner),
            5 => Ok(Role::Editor),
            other => Err(format!("unknown role {other}, expected 1..=5")),
        }
    }
}

impl From<Role> for i32 {
    fn from(role: Role) -> Self {
        role.number()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Director => "director",
            Role::Actor => "actor",
            Role::Cinematographer => "cinematographer",
            Role::SetDesigner => "set designer",
            Role::Editor => "editor",
        };
        write!(f, "{name}")
    }
}

/// One resolved credit: the role plus the character for actors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleGrant {
    pub role: Role,
    pub character: Option<String>,
}

/// Every role a user holds on one movie. Empty means no access at all,
/// never "role 0 with default permissions".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleSet {
    grants: Vec<RoleGrant>,
}

impl RoleSet {
    pub fn new(grants: impl IntoIterator<Item = RoleGrant>) -> Self {
        let mut set = RoleSet::default();
        for grant in grants {
            if !set.grants.contains(&grant) {
                set.grants.push(grant);
            }
        }
        set
    }

    /// Build from raw ledger rows. Rows with a role number outside 1..=5 are
    /// skipped.
    pub fn from_rows<'a>(rows: impl IntoIterator<Item = &'a user_role_film::Model>) -> Self {
        Self::new(rows.into_iter().filter_map(|row| match Role::try_from(row.role) {
            Ok(role) => Some(RoleGrant { role, character: row.character.clone() }),
            Err(e) => {
                warn!("Skipping ledger row {}: {}", row.id, e);
                None
            }
        }))
    }

    pub fn is_empty(&self) -> bool {
        self.grants.is_empty()
    }

    pub fn contains(&self, role: Role) -> bool {
        self.grants.iter().any(|g| g.role == role)
    }

    pub fn is_director(&self) -> bool {
        self.contains(Role::Director)
    }

    pub fn roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.grants.iter().map(|g| g.role)
    }

    pub fn grants(&self) -> &[RoleGrant] {
        &self.grants
    }

    pub fn main_role(&self) -> Option<Role> {
        Role::MAIN_ROLE_PRIORITY.into_iter().find(|r| self.contains(*r))
    }

    /// `main_role` as its ledger number, 0 when the set is empty.
    pub fn main_role_number(&self) -> i32 {
        self.main_role().map(Role::number).unwrap_or(0)
    }

    /// The grant backing the main role, so its character can be shown.
    pub fn main_grant(&self) -> Option<&RoleGrant> {
        let main = self.main_role()?;
        self.grants.iter().find(|g| g.role == main)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(roles: &[i32]) -> RoleSet {
        RoleSet::new(roles.iter().map(|n| RoleGrant {
            role: Role::try_from(*n).unwrap(),
            character: None,
        }))
    }

    #[test]
    fn main_role_follows_fixed_priority() {
        assert_eq!(set(&[2, 4]).main_role_number(), 2);
        assert_eq!(set(&[4, 2]).main_role_number(), 2);
        assert_eq!(set(&[2, 3]).main_role_number(), 3);
        assert_eq!(set(&[3, 5]).main_role_number(), 5);
        assert_eq!(set(&[5, 1]).main_role_number(), 1);
        assert_eq!(set(&[4]).main_role_number(), 4);
    }

    #[test]
    fn empty_set_has_main_role_zero() {
        let empty = RoleSet::default();
        assert!(empty.is_empty());
        assert_eq!(empty.main_role(), None);
        assert_eq!(empty.main_role_number(), 0);
    }

    #[test]
    fn duplicate_rows_collapse() {
        let grant = RoleGrant { role: Role::Actor, character: Some("Hamlet".into()) };
        let roles = RoleSet::new(vec![grant.clone(), grant.clone()]);
        assert_eq!(roles.grants().len(), 1);
    }

    #[test]
    fn same_role_with_two_characters_is_kept_twice() {
        let roles = RoleSet::new(vec![
            RoleGrant { role: Role::Actor, character: Some("Hamlet".into()) },
            RoleGrant { role: Role::Actor, character: Some("Ghost".into()) },
        ]);
        assert_eq!(roles.grants().len(), 2);
        assert_eq!(roles.main_grant().unwrap().character.as_deref(), Some("Hamlet"));
    }

    #[test]
    fn role_numbers_round_trip_and_reject_out_of_range() {
        for n in 1..=5 {
            assert_eq!(Role::try_from(n).unwrap().number(), n);
        }
        assert!(Role::try_from(0).is_err());
        assert!(Role::try_from(6).is_err());
    }

    #[test]
    fn role_serializes_as_number() {
        assert_eq!(serde_json::to_string(&Role::Editor).unwrap(), "5");
        let parsed: Role = serde_json::from_str("3").unwrap();
        assert_eq!(parsed, Role::Cinematographer);
        assert!(serde_json::from_str::<Role>("9").is_err());
    }
}
