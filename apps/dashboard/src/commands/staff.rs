//! # Staff Commands

use royal_core::{StaffMember, StaffRole};
use royal_store::{NewStaffMember, StaffFilter};
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::state::StoreState;

pub fn list_staff(store: &StoreState) -> ApiResult<Vec<StaffMember>> {
    debug!("list_staff command");
    store.read(|s| s.staff().list().to_vec())
}

pub fn get_staff_member(store: &StoreState, id: &str) -> ApiResult<StaffMember> {
    debug!(id = %id, "get_staff_member command");
    store
        .read(|s| s.staff().get(id).cloned())?
        .ok_or_else(|| ApiError::not_found("Staff member", id))
}

pub fn search_staff(store: &StoreState, filter: &StaffFilter) -> ApiResult<Vec<StaffMember>> {
    debug!(query = %filter.query, role = ?filter.role, status = ?filter.status, "search_staff command");
    Ok(store.read(|s| s.staff().search(filter))??)
}

/// Roles present on the roster, for the filter dropdown.
pub fn list_staff_roles(store: &StoreState) -> ApiResult<Vec<StaffRole>> {
    debug!("list_staff_roles command");
    store.read(|s| s.staff().roles())
}

pub fn add_staff(store: &StoreState, input: NewStaffMember) -> ApiResult<StaffMember> {
    debug!(name = %input.name, role = %input.role, "add_staff command");
    Ok(store.write(|s| s.staff_mut().add(input))??)
}

pub fn update_staff(store: &StoreState, member: StaffMember) -> ApiResult<StaffMember> {
    debug!(id = %member.id, "update_staff command");
    Ok(store.write(|s| s.staff_mut().update(member))??)
}

pub fn toggle_staff_status(store: &StoreState, id: &str) -> ApiResult<StaffMember> {
    debug!(id = %id, "toggle_staff_status command");
    Ok(store.write(|s| s.staff_mut().toggle_status(id))??)
}

pub fn delete_staff(store: &StoreState, id: &str) -> ApiResult<StaffMember> {
    debug!(id = %id, "delete_staff command");
    Ok(store.write(|s| s.staff_mut().delete(id))??)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use royal_core::StaffStatus;
    use royal_store::Store;

    fn store() -> StoreState {
        StoreState::new(Store::seeded().unwrap())
    }

    #[test]
    fn test_add_and_delete() {
        let store = store();
        let added = add_staff(
            &store,
            NewStaffMember {
                name: "Hamza Ali".to_string(),
                role: StaffRole::Waiter,
                status: StaffStatus::Active,
            },
        )
        .unwrap();
        assert_eq!(list_staff(&store).unwrap().len(), 9);

        delete_staff(&store, &added.id).unwrap();
        let err = delete_staff(&store, &added.id).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_roles_and_search() {
        let store = store();
        assert_eq!(list_staff_roles(&store).unwrap().len(), 6);

        let inactive = search_staff(
            &store,
            &StaffFilter {
                status: Some(StaffStatus::Inactive),
                ..Default::default()
            },
        )
        .unwrap();
        let names: Vec<_> = inactive.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Ayesha Imran", "Fatima Zahra"]);
    }

    #[test]
    fn test_toggle_status() {
        let store = store();
        let member = toggle_staff_status(&store, "s4").unwrap();
        assert_eq!(member.status, StaffStatus::Active);
        assert_eq!(get_staff_member(&store, "s4").unwrap().status, StaffStatus::Active);
    }
}
