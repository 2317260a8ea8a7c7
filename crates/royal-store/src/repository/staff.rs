//! # Staff Repository
//!
//! The staff roster: add, edit, activate/deactivate and remove members.

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::repository::matches_query;
use royal_core::validation::{normalize_search_query, validate_name};
use royal_core::{StaffMember, StaffRole, StaffStatus};

/// Input for a new staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStaffMember {
    pub name: String,
    pub role: StaffRole,
    #[serde(default)]
    pub status: StaffStatus,
}

/// Search criteria for the roster. Unset criteria match everyone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffFilter {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub role: Option<StaffRole>,
    #[serde(default)]
    pub status: Option<StaffStatus>,
}

#[derive(Debug, Clone, Default)]
pub struct StaffRepository {
    members: Vec<StaffMember>,
}

impl StaffRepository {
    pub fn new(members: Vec<StaffMember>) -> Self {
        StaffRepository { members }
    }

    pub fn list(&self) -> &[StaffMember] {
        &self.members
    }

    pub fn get(&self, id: &str) -> Option<&StaffMember> {
        self.members.iter().find(|m| m.id == id)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Number of members currently on the active roster.
    pub fn active_count(&self) -> usize {
        self.members
            .iter()
            .filter(|m| m.status == StaffStatus::Active)
            .count()
    }

    /// Appends a member to the end of the roster.
    pub fn add(&mut self, input: NewStaffMember) -> StoreResult<StaffMember> {
        validate_name("name", &input.name)?;

        let member = StaffMember {
            id: format!("s{}", Uuid::new_v4().simple()),
            name: input.name.trim().to_string(),
            role: input.role,
            status: input.status,
        };

        debug!(id = %member.id, role = %member.role, "Adding staff member");
        self.members.push(member.clone());
        Ok(member)
    }

    pub fn update(&mut self, member: StaffMember) -> StoreResult<StaffMember> {
        validate_name("name", &member.name)?;

        let slot = self
            .members
            .iter_mut()
            .find(|m| m.id == member.id)
            .ok_or_else(|| StoreError::not_found("Staff member", &member.id))?;

        *slot = StaffMember {
            name: member.name.trim().to_string(),
            ..member
        };
        debug!(id = %slot.id, "Updated staff member");
        Ok(slot.clone())
    }

    /// Switches a member between Active and Inactive.
    pub fn toggle_status(&mut self, id: &str) -> StoreResult<StaffMember> {
        let member = self
            .members
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| StoreError::not_found("Staff member", id))?;

        member.status = member.status.toggled();
        debug!(id = %id, status = ?member.status, "Toggled staff status");
        Ok(member.clone())
    }

    /// Removes a member and returns it.
    pub fn delete(&mut self, id: &str) -> StoreResult<StaffMember> {
        let index = self
            .members
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| StoreError::not_found("Staff member", id))?;

        debug!(id = %id, "Deleting staff member");
        Ok(self.members.remove(index))
    }

    pub fn search(&self, filter: &StaffFilter) -> StoreResult<Vec<StaffMember>> {
        let query = normalize_search_query(&filter.query)?;

        Ok(self
            .members
            .iter()
            .filter(|m| matches_query(&m.name, &query))
            .filter(|m| filter.role.map_or(true, |r| m.role == r))
            .filter(|m| filter.status.map_or(true, |s| m.status == s))
            .cloned()
            .collect())
    }

    /// Distinct roles on the roster, in order of first appearance.
    ///
    /// Feeds the role dropdown on the staff screen.
    pub fn roles(&self) -> Vec<StaffRole> {
        let mut roles = Vec::new();
        for member in &self.members {
            if !roles.contains(&member.role) {
                roles.push(member.role);
            }
        }
        roles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: &str, name: &str, role: StaffRole, status: StaffStatus) -> StaffMember {
        StaffMember {
            id: id.to_string(),
            name: name.to_string(),
            role,
            status,
        }
    }

    fn repo() -> StaffRepository {
        StaffRepository::new(vec![
            member("s1", "Ali Khan", StaffRole::Chef, StaffStatus::Active),
            member("s2", "Sarah Ahmed", StaffRole::Waiter, StaffStatus::Active),
            member("s4", "Ayesha Imran", StaffRole::Cashier, StaffStatus::Inactive),
            member("s5", "Bilal Hassan", StaffRole::Chef, StaffStatus::Active),
            member("s8", "Nadia Khan", StaffRole::Host, StaffStatus::Active),
        ])
    }

    #[test]
    fn test_add_appends_and_trims() {
        let mut repo = repo();
        let added = repo
            .add(NewStaffMember {
                name: "  Hamza Ali ".to_string(),
                role: StaffRole::Waiter,
                status: StaffStatus::Active,
            })
            .unwrap();

        assert_eq!(added.name, "Hamza Ali");
        assert_eq!(repo.list().last().unwrap().id, added.id);
    }

    #[test]
    fn test_add_requires_name() {
        let mut repo = repo();
        let result = repo.add(NewStaffMember {
            name: "   ".to_string(),
            role: StaffRole::Waiter,
            status: StaffStatus::Active,
        });
        assert!(matches!(result, Err(StoreError::Validation(_))));
        assert_eq!(repo.len(), 5);
    }

    #[test]
    fn test_toggle_status_round_trip() {
        let mut repo = repo();
        assert_eq!(repo.active_count(), 4);

        let toggled = repo.toggle_status("s1").unwrap();
        assert_eq!(toggled.status, StaffStatus::Inactive);
        assert_eq!(repo.active_count(), 3);

        repo.toggle_status("s1").unwrap();
        assert_eq!(repo.get("s1").unwrap().status, StaffStatus::Active);
    }

    #[test]
    fn test_delete() {
        let mut repo = repo();
        let removed = repo.delete("s2").unwrap();
        assert_eq!(removed.name, "Sarah Ahmed");
        assert!(repo.get("s2").is_none());

        assert!(matches!(repo.delete("s2"), Err(StoreError::NotFound { .. })));
    }

    #[test]
    fn test_update_unknown_member() {
        let mut repo = repo();
        let ghost = member("s99", "Ghost", StaffRole::Host, StaffStatus::Active);
        assert!(matches!(repo.update(ghost), Err(StoreError::NotFound { .. })));
    }

    #[test]
    fn test_search_combines_filters() {
        let repo = repo();

        let khans = repo
            .search(&StaffFilter {
                query: "khan".to_string(),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(khans.len(), 2);

        let chefs = repo
            .search(&StaffFilter {
                query: "khan".to_string(),
                role: Some(StaffRole::Chef),
                status: None,
            })
            .unwrap();
        assert_eq!(chefs.len(), 1);
        assert_eq!(chefs[0].id, "s1");

        let inactive = repo
            .search(&StaffFilter {
                status: Some(StaffStatus::Inactive),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(inactive.len(), 1);
        assert_eq!(inactive[0].id, "s4");
    }

    #[test]
    fn test_roles_are_distinct_in_first_seen_order() {
        assert_eq!(
            repo().roles(),
            vec![StaffRole::Chef, StaffRole::Waiter, StaffRole::Cashier, StaffRole::Host]
        );
    }
}
