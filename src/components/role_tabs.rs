//! Volunteer / Organization switch used by the register and login pages.

use community_core::forms::Role;
use leptos::prelude::*;

#[component]
pub fn RoleTabs(role: RwSignal<Role>) -> impl IntoView {
    view! {
        <div class="tabs">
            {[Role::Volunteer, Role::Organization].into_iter().map(|option| {
                view! {
                    <button
                        type="button"
                        class=move || if role.get() == option { "tab active" } else { "tab" }
                        on:click=move |_| role.set(option)
                    >
                        {option.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
