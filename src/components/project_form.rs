//! Post a New Project
//!
//! Organization-side form. Identifier and start date are filled in on
//! submit.

use community_core::forms::{self, FieldErrors, ProjectForm as ProjectFields};
use community_core::CommunityApi;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::feedback::{FieldError, Notice, NoticeBox};
use crate::context::use_app_context;

fn today() -> String {
    let timestamp = String::from(js_sys::Date::new_0().to_iso_string());
    forms::iso_date(&timestamp).to_string()
}

/// The section that owns the callback may be gone by the time the POST
/// answers; returns whether anyone was still listening.
fn notify_posted(on_posted: Callback<()>) -> bool {
    on_posted.try_run(()).is_some()
}

#[component]
pub fn ProjectForm(
    organization_id: String,
    /// Fired after the server accepted the project
    #[prop(into)]
    on_posted: Callback<()>,
) -> impl IntoView {
    let api = use_app_context().api;
    let form = RwSignal::new(ProjectFields::default());
    let errors = RwSignal::new(FieldErrors::new());
    let notice = RwSignal::new(None::<Notice>);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        notice.set(None);

        let project_id = forms::project_id(js_sys::Math::random());
        let payload = match form.with_untracked(|f| f.validate(&organization_id, &project_id, &today())) {
            Ok(payload) => payload,
            Err(found) => {
                errors.set(found);
                return;
            }
        };
        errors.set(FieldErrors::new());

        let api = api.clone();
        spawn_local(async move {
            match api.register_project(&payload).await {
                Ok(_) => {
                    log::info!("posted project {}", payload.project.project_id);
                    notice.try_set(Some(Notice::Success("Project posted successfully!".into())));
                    form.try_set(ProjectFields::default());
                    if !notify_posted(on_posted) {
                        log::debug!("project form closed before the post finished");
                    }
                }
                Err(err) => {
                    log::error!("posting project failed: {}", err);
                    notice.try_set(Some(Notice::Error("Error posting project.".into())));
                }
            }
        });
    };

    view! {
        <section class="dashboard-section">
            <h3>"Post a New Project"</h3>
            <NoticeBox notice=notice />
            <form class="stacked-form" on:submit=submit>
                <input
                    type="text"
                    placeholder="Project Title"
                    prop:value=move || form.with(|f| f.title.clone())
                    on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                />
                <FieldError errors=errors field="title" />
                <textarea
                    placeholder="Project Description"
                    prop:value=move || form.with(|f| f.description.clone())
                    on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                ></textarea>
                <FieldError errors=errors field="description" />
                <input
                    type="text"
                    placeholder="Skills Required (comma separated)"
                    prop:value=move || form.with(|f| f.skills_required.clone())
                    on:input=move |ev| form.update(|f| f.skills_required = event_target_value(&ev))
                />
                <FieldError errors=errors field="skills_required" />
                <input
                    type="number"
                    min="0"
                    placeholder="Volunteer Capacity"
                    prop:value=move || form.with(|f| f.capacity.clone())
                    on:input=move |ev| form.update(|f| f.capacity = event_target_value(&ev))
                />
                <FieldError errors=errors field="capacity" />
                <input
                    type="text"
                    placeholder="Location"
                    prop:value=move || form.with(|f| f.location.clone())
                    on:input=move |ev| form.update(|f| f.location = event_target_value(&ev))
                />
                <FieldError errors=errors field="location" />
                <button type="submit" class="primary-btn">"Post Project"</button>
            </form>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_notify_posted_survives_closed_section() {
        let root = Owner::new();
        let section = root.child();
        let calls = Arc::new(AtomicUsize::new(0));
        let on_posted = section.with({
            let calls = calls.clone();
            move || {
                Callback::new(move |_: ()| {
                    calls.fetch_add(1, Ordering::SeqCst);
                })
            }
        });

        assert!(notify_posted(on_posted));
        section.cleanup();
        assert!(!notify_posted(on_posted));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
