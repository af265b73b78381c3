//! Registration Page
//!
//! Volunteer and organization sign-up behind role tabs.

use community_core::forms::{
    self, toggle_choice, FieldErrors, OrganizationRegistrationForm, Role, VolunteerRegistrationForm,
    REGISTRATION_LANGUAGES, REGISTRATION_SKILLS,
};
use community_core::{ApiError, CommunityApi};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::feedback::{FieldError, Notice, NoticeBox};
use super::role_tabs::RoleTabs;
use crate::context::use_app_context;
use crate::store::{store_navigate_with_notice, use_app_store, Page};

const REGISTERED_FALLBACK: &str = "Registered successfully!";

fn registration_failed(err: &ApiError) -> Notice {
    Notice::Error(format!("Error: {}", err.user_message(&err.to_string())))
}

#[component]
pub fn RegisterForm() -> impl IntoView {
    let api = use_app_context().api;
    let store = use_app_store();
    let role = RwSignal::new(Role::Volunteer);
    let volunteer = RwSignal::new(VolunteerRegistrationForm::default());
    let organization = RwSignal::new(OrganizationRegistrationForm::default());
    let errors = RwSignal::new(FieldErrors::new());
    let notice = RwSignal::new(None::<Notice>);

    // Feedback belongs to the tab it was produced on
    Effect::new(move |_| {
        role.track();
        errors.set(FieldErrors::new());
        notice.set(None);
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        notice.set(None);
        let api = api.clone();

        match role.get_untracked() {
            Role::Volunteer => match volunteer.with_untracked(|form| form.validate()) {
                Err(found) => errors.set(found),
                Ok(payload) => {
                    errors.set(FieldErrors::new());
                    spawn_local(async move {
                        match api.register_volunteer(&payload).await {
                            Ok(ack) => {
                                volunteer.try_set(VolunteerRegistrationForm::default());
                                store_navigate_with_notice(&store, Page::Login, ack.or(REGISTERED_FALLBACK));
                            }
                            Err(err) => {
                                log::error!("volunteer registration failed: {}", err);
                                notice.try_set(Some(registration_failed(&err)));
                            }
                        }
                    });
                }
            },
            Role::Organization => {
                let organization_id = forms::organization_id(js_sys::Math::random());
                match organization.with_untracked(|form| form.validate(&organization_id)) {
                    Err(found) => errors.set(found),
                    Ok(payload) => {
                        errors.set(FieldErrors::new());
                        log::info!("registering organization {}", organization_id);
                        spawn_local(async move {
                            match api.register_organization(&payload).await {
                                Ok(ack) => {
                                    organization.try_set(OrganizationRegistrationForm::default());
                                    store_navigate_with_notice(&store, Page::Login, ack.or(REGISTERED_FALLBACK));
                                }
                                Err(err) => {
                                    log::error!("organization registration failed: {}", err);
                                    notice.try_set(Some(registration_failed(&err)));
                                }
                            }
                        });
                    }
                }
            }
        }
    };

    let volunteer_fields = move || {
        view! {
            <input
                type="text"
                placeholder="Full Name"
                prop:value=move || volunteer.with(|f| f.name.clone())
                on:input=move |ev| volunteer.update(|f| f.name = event_target_value(&ev))
            />
            <FieldError errors=errors field="name" />
            <input
                type="email"
                placeholder="Email"
                prop:value=move || volunteer.with(|f| f.email.clone())
                on:input=move |ev| volunteer.update(|f| f.email = event_target_value(&ev))
            />
            <FieldError errors=errors field="email" />
            <input
                type="password"
                placeholder="Password"
                prop:value=move || volunteer.with(|f| f.password.clone())
                on:input=move |ev| volunteer.update(|f| f.password = event_target_value(&ev))
            />
            <FieldError errors=errors field="password" />
            <input
                type="text"
                placeholder="Availability (e.g. Weekends)"
                prop:value=move || volunteer.with(|f| f.availability.clone())
                on:input=move |ev| volunteer.update(|f| f.availability = event_target_value(&ev))
            />
            <FieldError errors=errors field="availability" />
            <input
                type="text"
                placeholder="Location"
                prop:value=move || volunteer.with(|f| f.location.clone())
                on:input=move |ev| volunteer.update(|f| f.location = event_target_value(&ev))
            />
            <FieldError errors=errors field="location" />

            <fieldset class="choice-group">
                <legend>"Skills"</legend>
                {REGISTRATION_SKILLS.iter().copied().map(|skill| view! {
                    <label class="choice">
                        <input
                            type="checkbox"
                            prop:checked=move || volunteer.with(|f| f.skills.iter().any(|s| s == skill))
                            on:change=move |_| volunteer.update(|f| toggle_choice(&mut f.skills, skill))
                        />
                        {skill}
                    </label>
                }).collect_view()}
            </fieldset>

            <fieldset class="choice-group">
                <legend>"Languages"</legend>
                {REGISTRATION_LANGUAGES.iter().copied().map(|language| view! {
                    <label class="choice">
                        <input
                            type="checkbox"
                            prop:checked=move || volunteer.with(|f| f.languages.iter().any(|l| l == language))
                            on:change=move |_| volunteer.update(|f| toggle_choice(&mut f.languages, language))
                        />
                        {language}
                    </label>
                }).collect_view()}
            </fieldset>
        }
    };

    let organization_fields = move || {
        view! {
            <input
                type="text"
                placeholder="Organization Name"
                prop:value=move || organization.with(|f| f.org_name.clone())
                on:input=move |ev| organization.update(|f| f.org_name = event_target_value(&ev))
            />
            <FieldError errors=errors field="org_name" />
            <input
                type="email"
                placeholder="Email"
                prop:value=move || organization.with(|f| f.email.clone())
                on:input=move |ev| organization.update(|f| f.email = event_target_value(&ev))
            />
            <FieldError errors=errors field="email" />
            <input
                type="password"
                placeholder="Password"
                prop:value=move || organization.with(|f| f.password.clone())
                on:input=move |ev| organization.update(|f| f.password = event_target_value(&ev))
            />
            <FieldError errors=errors field="password" />
            <input
                type="tel"
                placeholder="Contact Number"
                prop:value=move || organization.with(|f| f.contact.clone())
                on:input=move |ev| organization.update(|f| f.contact = event_target_value(&ev))
            />
            <FieldError errors=errors field="contact" />
            <input
                type="text"
                placeholder="Address"
                prop:value=move || organization.with(|f| f.address.clone())
                on:input=move |ev| organization.update(|f| f.address = event_target_value(&ev))
            />
            <FieldError errors=errors field="address" />
        }
    };

    view! {
        <div class="form-card">
            <h2>"Register"</h2>
            <RoleTabs role=role />
            <NoticeBox notice=notice />
            <form class="stacked-form" on:submit=submit>
                {move || match role.get() {
                    Role::Volunteer => volunteer_fields().into_any(),
                    Role::Organization => organization_fields().into_any(),
                }}
                <button type="submit" class="primary-btn">
                    {move || format!("Register as {}", role.get().label())}
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_failure_prefers_server_text() {
        let rejected = ApiError::Status {
            status: 409,
            message: Some("Email already registered".into()),
        };
        assert_eq!(registration_failed(&rejected), Notice::Error("Error: Email already registered".into()));

        let offline = ApiError::Transport("network down".into());
        assert_eq!(
            registration_failed(&offline),
            Notice::Error("Error: request failed: network down".into())
        );
    }
}
