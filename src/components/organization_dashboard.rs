//! Organization Dashboard
//!
//! Three sections: posting form, posted projects, applicants per project.
//! The two data sections keep the snapshot fresh through a refresh loop
//! that only runs while one of them is shown.

use community_core::{ApplicationReconciler, ProjectRoster, ReconcilerState, RefreshLoop};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::applicant_table::ApplicantTable;
use super::project_form::ProjectForm;
use super::project_list::ProjectList;
use crate::context::use_app_context;
use crate::format::status_label;
use crate::timer::BrowserTimer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Post,
    Projects,
    Applicants,
}

impl Section {
    const ALL: [Section; 3] = [Section::Post, Section::Projects, Section::Applicants];

    fn label(self) -> &'static str {
        match self {
            Section::Post => "Post Project",
            Section::Projects => "Posted Projects",
            Section::Applicants => "View Applicants",
        }
    }

    fn polls(self) -> bool {
        !matches!(self, Section::Post)
    }
}

#[component]
pub fn OrganizationDashboard(organization_id: String) -> impl IntoView {
    let ctx = use_app_context();
    let reconciler = match ApplicationReconciler::new(ctx.api.clone(), organization_id.clone()) {
        Ok(reconciler) => reconciler,
        Err(err) => {
            log::error!("organization dashboard: {}", err);
            return view! { <p class="error-box">"Log in as an organization to see your dashboard."</p> }
                .into_any();
        }
    };

    let section = RwSignal::new(Section::Post);
    let state = RwSignal::new(ReconcilerState::default());
    let interval = ctx.config.refresh_interval;
    let refresh = StoredValue::new(RefreshLoop::new(BrowserTimer, interval));

    let pass = move || {
        let reconciler = reconciler.clone();
        async move {
            let result = reconciler.reconcile().await;
            if state.try_update(|s| s.record(result)).is_none() {
                log::debug!("dashboard closed before the pass finished");
            }
        }
    };

    Effect::new({
        let pass = pass.clone();
        move |_| {
            let active = section.get().polls();
            let task = refresh.try_update_value(|refresh| refresh.set_active(active, pass.clone()));
            if let Some(Some(task)) = task {
                log::debug!("polling every {:?}", interval);
                spawn_local(task);
            }
        }
    });

    on_cleanup(move || {
        refresh.try_update_value(|refresh| refresh.deactivate());
    });

    let on_posted = {
        let pass = pass.clone();
        move |_: ()| spawn_local(pass())
    };

    view! {
        <div class="dashboard">
            <h2>"Organization Dashboard"</h2>
            <div class="tabs">
                {Section::ALL.into_iter().map(|option| view! {
                    <button
                        type="button"
                        class=move || if section.get() == option { "tab active" } else { "tab" }
                        on:click=move |_| section.set(option)
                    >
                        {option.label()}
                    </button>
                }).collect_view()}
            </div>

            {move || match section.get() {
                Section::Post => view! {
                    <ProjectForm organization_id=organization_id.clone() on_posted=on_posted.clone() />
                }.into_any(),
                Section::Projects => view! {
                    <section class="dashboard-section">
                        <h3>"Your Projects"</h3>
                        {move || view! { <ProjectList projects=state.with(|s| s.snapshot.projects.clone()) /> }}
                    </section>
                }.into_any(),
                Section::Applicants => view! {
                    <section class="dashboard-section">
                        <h3>"Applicants"</h3>
                        {move || {
                            let rosters = state.with(|s| s.snapshot.rosters.clone());
                            if rosters.is_empty() {
                                view! { <p class="empty-state">"No applicants found for your projects."</p> }.into_any()
                            } else {
                                rosters.into_iter().map(|roster| view! { <RosterCard roster=roster /> }).collect_view().into_any()
                            }
                        }}
                    </section>
                }.into_any(),
            }}
        </div>
    }
    .into_any()
}

#[component]
fn RosterCard(roster: ProjectRoster) -> impl IntoView {
    let headline = format!("{} ({} filled)", status_label(roster.status()), roster.fill_label());
    view! {
        <div class="detailed-card">
            <h4>{roster.project.title.clone()}</h4>
            <p class="roster-status">{headline}</p>
            <ApplicantTable applicants=roster.applicants />
        </div>
    }
}
