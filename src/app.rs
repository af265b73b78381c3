//! Community Connect App
//!
//! Navbar plus one page at a time, switched through the store.

use community_core::ClientConfig;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{LoginForm, Navbar, OrganizationDashboard, RegisterForm, VolunteerDashboard};
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields, Page};

#[component]
pub fn App() -> impl IntoView {
    let config = ClientConfig::default().with_api_base_url(option_env!("COMMUNITY_API_URL"));
    log::info!("using API at {}", config.api_base_url);

    let store = Store::new(AppState::restore(&config));
    provide_context(store);
    provide_context(AppContext::new(config));

    let page = move || match store.page().get() {
        Page::Register => view! { <RegisterForm /> }.into_any(),
        Page::Login => view! { <LoginForm /> }.into_any(),
        Page::Volunteer => {
            let volunteer_id = store.volunteer_id().get();
            view! { <VolunteerDashboard volunteer_id=volunteer_id /> }.into_any()
        }
        Page::Organization => {
            let organization_id = store.organization_id().get();
            view! { <OrganizationDashboard organization_id=organization_id /> }.into_any()
        }
    };

    view! {
        <Navbar />
        <main class="app-container">{page}</main>
    }
}
