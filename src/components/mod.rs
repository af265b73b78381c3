//! UI Components
//!
//! Pages and the pieces they share.

mod applicant_table;
mod feedback;
mod login_form;
mod navbar;
mod organization_dashboard;
mod project_form;
mod project_list;
mod register_form;
mod role_tabs;
mod volunteer_dashboard;

pub use login_form::LoginForm;
pub use navbar::Navbar;
pub use organization_dashboard::OrganizationDashboard;
pub use register_form::RegisterForm;
pub use volunteer_dashboard::VolunteerDashboard;
