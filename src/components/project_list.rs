//! Posted projects table with the server-reported status.

use community_core::Project;
use leptos::prelude::*;

use crate::format::{or_placeholder, status_label};

#[component]
pub fn ProjectList(projects: Vec<Project>) -> impl IntoView {
    if projects.is_empty() {
        return view! { <p class="empty-state">"No projects found for this organization."</p> }.into_any();
    }

    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Title"</th>
                    <th>"Description"</th>
                    <th>"Skills Required"</th>
                    <th>"Start Date"</th>
                    <th>"Capacity"</th>
                    <th>"Location"</th>
                    <th>"Status"</th>
                </tr>
            </thead>
            <tbody>
                {projects.into_iter().map(|project| {
                    let skills = project.skills_label();
                    view! {
                        <tr>
                            <td>{project.project_id.clone()}</td>
                            <td>{project.title.clone()}</td>
                            <td>{project.description.clone()}</td>
                            <td>{or_placeholder(&skills, "None").to_string()}</td>
                            <td>{or_placeholder(&project.start_date, "N/A").to_string()}</td>
                            <td>{project.capacity_label()}</td>
                            <td>{or_placeholder(&project.location, "Not specified").to_string()}</td>
                            <td>{status_label(project.status)}</td>
                        </tr>
                    }
                }).collect_view()}
            </tbody>
        </table>
    }
    .into_any()
}
