//! Login Page
//!
//! On success the welcome message stays up briefly before the matching
//! dashboard opens.

use community_core::api::LoginOutcome;
use community_core::forms::{FieldErrors, LoginForm as LoginFields, LoginRequest, Role};
use community_core::{ApiError, CommunityApi};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::feedback::{FieldError, Notice, NoticeBox};
use super::role_tabs::RoleTabs;
use crate::context::use_app_context;
use crate::store::{dashboard_for, store_navigate, store_sign_in, store_take_notice, use_app_store};

const REDIRECT_DELAY_MS: u32 = 1_500;
const INVALID_CREDENTIALS: &str = "Invalid credentials. Please try again.";
const LOGIN_FAILED: &str = "Login failed. Please check your credentials and try again.";

fn login_notice(result: &Result<LoginOutcome, ApiError>, name: &str) -> Notice {
    match result {
        Ok(outcome) if outcome.success => {
            Notice::Success(format!("Logged in successfully. Welcome {}!", name))
        }
        Ok(outcome) => Notice::Error(outcome.message.clone().unwrap_or_else(|| INVALID_CREDENTIALS.to_string())),
        Err(_) => Notice::Error(LOGIN_FAILED.to_string()),
    }
}

#[component]
pub fn LoginForm() -> impl IntoView {
    let api = use_app_context().api;
    let store = use_app_store();
    let role = RwSignal::new(Role::Volunteer);
    let form = RwSignal::new(LoginFields::default());
    let errors = RwSignal::new(FieldErrors::new());
    let notice = RwSignal::new(store_take_notice(&store).map(Notice::Success));

    Effect::new(move |_| {
        let selected = role.get();
        form.update(|f| f.role = selected);
        errors.set(FieldErrors::new());
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        notice.set(None);

        let (request, name) = match form.with_untracked(|f| f.validate().map(|r| (r, f.display_name().to_string()))) {
            Ok(valid) => valid,
            Err(found) => {
                errors.set(found);
                return;
            }
        };
        errors.set(FieldErrors::new());

        let api = api.clone();
        spawn_local(async move {
            let (signed_in_as, result) = match &request {
                LoginRequest::Volunteer(login) => (Role::Volunteer, api.login_volunteer(login).await),
                LoginRequest::Organization(login) => (Role::Organization, api.login_organization(login).await),
            };
            if let Err(err) = &result {
                log::error!("login request failed: {}", err);
            }
            notice.try_set(Some(login_notice(&result, &name)));

            let Ok(outcome) = result else { return };
            if !outcome.success {
                return;
            }
            let id = match signed_in_as {
                Role::Volunteer => outcome.volunteer_id,
                Role::Organization => outcome.organization_id,
            };
            store_sign_in(&store, signed_in_as, id);

            TimeoutFuture::new(REDIRECT_DELAY_MS).await;
            store_navigate(&store, dashboard_for(signed_in_as));
        });
    };

    view! {
        <div class="form-card">
            <h2>"Login"</h2>
            <RoleTabs role=role />
            <NoticeBox notice=notice />
            <form class="stacked-form" on:submit=submit>
                {move || match role.get() {
                    Role::Volunteer => view! {
                        <input
                            type="text"
                            placeholder="Volunteer Name"
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                        <FieldError errors=errors field="name" />
                    }.into_any(),
                    Role::Organization => view! {
                        <input
                            type="text"
                            placeholder="Organization Name"
                            prop:value=move || form.with(|f| f.org_name.clone())
                            on:input=move |ev| form.update(|f| f.org_name = event_target_value(&ev))
                        />
                        <FieldError errors=errors field="org_name" />
                    }.into_any(),
                }}
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                />
                <FieldError errors=errors field="email" />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || form.with(|f| f.password.clone())
                    on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                />
                <FieldError errors=errors field="password" />
                <button type="submit" class="primary-btn">"Login"</button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(success: bool, message: Option<&str>) -> Result<LoginOutcome, ApiError> {
        Ok(LoginOutcome {
            success,
            message: message.map(str::to_string),
            ..Default::default()
        })
    }

    #[test]
    fn test_login_notice_welcomes_by_name() {
        assert_eq!(
            login_notice(&outcome(true, None), "Asha"),
            Notice::Success("Logged in successfully. Welcome Asha!".into())
        );
    }

    #[test]
    fn test_login_notice_rejection_prefers_server_message() {
        assert_eq!(
            login_notice(&outcome(false, Some("Wrong password")), "Asha"),
            Notice::Error("Wrong password".into())
        );
        assert_eq!(login_notice(&outcome(false, None), "Asha"), Notice::Error(INVALID_CREDENTIALS.into()));
    }

    #[test]
    fn test_login_notice_request_failure() {
        let failed = Err(ApiError::Transport("offline".into()));
        assert_eq!(login_notice(&failed, "Asha"), Notice::Error(LOGIN_FAILED.into()));
    }
}
