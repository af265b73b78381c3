//! Applicants for one project.

use community_core::ApplicantRow;
use leptos::prelude::*;

#[component]
pub fn ApplicantTable(applicants: Vec<ApplicantRow>) -> impl IntoView {
    if applicants.is_empty() {
        return view! { <p class="empty-state">"No applicants yet."</p> }.into_any();
    }

    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Volunteer Name"</th>
                    <th>"Email"</th>
                    <th>"Skills"</th>
                    <th>"Location"</th>
                    <th>"Languages"</th>
                    <th>"Availability"</th>
                    <th>"Hours"</th>
                </tr>
            </thead>
            <tbody>
                {applicants.into_iter().map(|row| view! {
                    <tr>
                        <td>{row.volunteer_name}</td>
                        <td>{row.email}</td>
                        <td>{row.skills}</td>
                        <td>{row.location}</td>
                        <td>{row.languages}</td>
                        <td>{row.availability}</td>
                        <td>{row.hours}</td>
                    </tr>
                }).collect_view()}
            </tbody>
        </table>
    }
    .into_any()
}
