//! Volunteer Dashboard
//!
//! Filterable project list with per-project hours and apply, plus a summary
//! of the volunteer's own applications.

use community_core::filter::SKILL_FILTER_OPTIONS;
use community_core::tracker::HOURS_OPTIONS;
use community_core::{ApplicationTracker, Project, RowState, TrackerState};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::format::{or_placeholder, parse_hours, status_label};

#[component]
pub fn VolunteerDashboard(volunteer_id: String) -> impl IntoView {
    let ctx = use_app_context();
    let tracker = match ApplicationTracker::new(ctx.api, volunteer_id) {
        Ok(tracker) => tracker,
        Err(err) => {
            log::error!("volunteer dashboard: {}", err);
            return view! { <p class="error-box">"Log in as a volunteer to see available projects."</p> }
                .into_any();
        }
    };
    let state = RwSignal::new(TrackerState::default());

    // Load projects and this volunteer's applications once on mount
    Effect::new({
        let tracker = tracker.clone();
        move |_| {
            let tracker = tracker.clone();
            spawn_local(async move {
                match tracker.load().await {
                    Ok(snapshot) => {
                        log::debug!(
                            "loaded {} projects, {} applied",
                            snapshot.projects.len(),
                            snapshot.applied.len()
                        );
                        state.try_update(|s| s.load(snapshot));
                    }
                    Err(err) => log::error!("failed to load volunteer dashboard: {}", err),
                }
            });
        }
    });

    let on_apply = Callback::new(move |project_id: String| {
        let prepared = state.try_update(|s| s.begin_apply(tracker.volunteer_id(), &project_id));
        let application = match prepared {
            Some(Ok(application)) => application,
            Some(Err(err)) => {
                log::debug!("apply to {} refused: {}", project_id, err);
                return;
            }
            None => return,
        };
        let tracker = tracker.clone();
        spawn_local(async move {
            let result = tracker.submit(&application).await;
            if let Err(err) = &result {
                log::error!("application to {} failed: {}", project_id, err);
            }
            state.try_update(|s| s.finish_apply(&project_id, result));
        });
    });

    view! {
        <div class="dashboard">
            <h2>"Available Projects"</h2>
            <div class="filters">
                <input
                    type="text"
                    placeholder="Filter by location"
                    prop:value=move || state.with(|s| s.filter().location.clone())
                    on:input=move |ev| state.update(|s| s.set_location_filter(event_target_value(&ev)))
                />
                <select
                    prop:value=move || state.with(|s| s.filter().skill.clone())
                    on:change=move |ev| state.update(|s| s.set_skill_filter(event_target_value(&ev)))
                >
                    <option value="">"All Skills"</option>
                    {SKILL_FILTER_OPTIONS.iter().copied().map(|skill| view! {
                        <option value=skill>{skill}</option>
                    }).collect_view()}
                </select>
            </div>

            <Show
                when=move || state.with(|s| !s.visible_projects().is_empty())
                fallback=|| view! { <p class="empty-state">"No matching projects found."</p> }
            >
                <ul class="project-list">
                    <For
                        each=move || state.with(|s| s.visible_projects())
                        key=|project| project.project_id.clone()
                        children=move |project| view! { <ProjectCard project=project state=state on_apply=on_apply /> }
                    />
                </ul>
            </Show>

            {move || {
                let summary = state.with(|s| s.applied_summary());
                (!summary.is_empty()).then(|| view! {
                    <section class="applied-section">
                        <h3>"Your Applications"</h3>
                        <ul>
                            {summary.into_iter().map(|(label, hours)| view! {
                                <li>{format!("{} - ⏱️ {} hrs", label, hours)}</li>
                            }).collect_view()}
                        </ul>
                    </section>
                })
            }}
        </div>
    }
    .into_any()
}

#[component]
fn ProjectCard(project: Project, state: RwSignal<TrackerState>, on_apply: Callback<String>) -> impl IntoView {
    let id = StoredValue::new(project.project_id.clone());
    let row = move || state.with(|s| id.with_value(|id| s.row(id)));
    let skills = project.skills_label();

    let hours_control = move || match row() {
        RowState::Pending { hours } => view! {
            <span class="applied-hours">"⏱️ Applied for " <strong>{hours}</strong> " hours"</span>
        }
        .into_any(),
        RowState::NotApplied { selected_hours } => view! {
            <select
                prop:value=selected_hours.map(|h| h.to_string()).unwrap_or_default()
                on:change=move |ev| {
                    let hours = parse_hours(&event_target_value(&ev));
                    state.update(|s| id.with_value(|id| s.select_hours(id, hours)));
                }
            >
                <option value="">"--Choose--"</option>
                {HOURS_OPTIONS.iter().map(|hours| view! {
                    <option value=hours.to_string()>{format!("{} hours", hours)}</option>
                }).collect_view()}
            </select>
        }
        .into_any(),
        RowState::Submitting => view! { <span class="applied-hours">"Submitting..."</span> }.into_any(),
    };

    view! {
        <li class="project-card">
            <h4>{project.title.clone()}</h4>
            <p>{project.description.clone()}</p>
            <p><strong>"Location: "</strong>{or_placeholder(&project.location, "Not specified").to_string()}</p>
            <p><strong>"Skills Required: "</strong>{or_placeholder(&skills, "None").to_string()}</p>
            <p><strong>"Status: "</strong>{status_label(project.status)}</p>
            <div class="hours-select">
                <label>"Select Hours: "</label>
                {hours_control}
            </div>
            <button
                class="apply-btn"
                disabled=move || !row().can_apply()
                on:click=move |_| on_apply.run(id.get_value())
            >
                {move || if matches!(row(), RowState::Pending { .. }) { "Applied" } else { "Apply" }}
            </button>
            {move || {
                state
                    .with(|s| id.with_value(|id| s.error_for(id).map(str::to_string)))
                    .map(|message| view! { <p class="error-text">{message}</p> })
            }}
        </li>
    }
}
