//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use community_core::forms::Role;
use community_core::ClientConfig;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::session;

/// Top-level pages
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Register,
    Login,
    Volunteer,
    Organization,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Page currently shown
    pub page: Page,
    /// Identifier scoping the volunteer dashboard
    pub volunteer_id: String,
    /// Identifier scoping the organization dashboard
    pub organization_id: String,
    /// Message carried over a page switch, shown once by the next page
    pub notice: Option<String>,
}

impl AppState {
    /// Identifiers from the previous session, else the configured defaults
    pub fn restore(config: &ClientConfig) -> Self {
        Self {
            volunteer_id: session::load_volunteer_id().unwrap_or_else(|| config.default_volunteer_id.clone()),
            organization_id: session::load_organization_id()
                .unwrap_or_else(|| config.default_organization_id.clone()),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_navigate(store: &AppStore, page: Page) {
    store.page().set(page);
}

/// Leave a message for the next page and switch to it
pub fn store_navigate_with_notice(store: &AppStore, page: Page, notice: String) {
    store.notice().set(Some(notice));
    store.page().set(page);
}

/// Take the pending notice, if any
pub fn store_take_notice(store: &AppStore) -> Option<String> {
    let notice = store.notice().get_untracked();
    if notice.is_some() {
        store.notice().set(None);
    }
    notice
}

/// Remember who signed in. Without an identifier from the server the
/// current one is kept.
pub fn store_sign_in(store: &AppStore, role: Role, id: Option<String>) {
    match role {
        Role::Volunteer => {
            let id = id.unwrap_or_else(|| store.volunteer_id().get_untracked());
            session::save_volunteer_id(&id);
            store.volunteer_id().set(id);
        }
        Role::Organization => {
            let id = id.unwrap_or_else(|| store.organization_id().get_untracked());
            session::save_organization_id(&id);
            store.organization_id().set(id);
        }
    }
}

/// Dashboard page for a role
pub fn dashboard_for(role: Role) -> Page {
    match role {
        Role::Volunteer => Page::Volunteer,
        Role::Organization => Page::Organization,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_survives_one_page_switch() {
        Owner::new().with(|| {
            let store = Store::new(AppState::default());

            store_navigate_with_notice(&store, Page::Login, "Registered successfully!".into());

            assert_eq!(store.page().get_untracked(), Page::Login);
            assert_eq!(store_take_notice(&store).as_deref(), Some("Registered successfully!"));
            assert_eq!(store_take_notice(&store), None);
        });
    }

    #[test]
    fn test_dashboard_for_role() {
        assert_eq!(dashboard_for(Role::Volunteer), Page::Volunteer);
        assert_eq!(dashboard_for(Role::Organization), Page::Organization);
    }
}
