mod auth;
mod dashboard;
mod home;
mod recruiter;

pub use auth::Auth;
pub use dashboard::{DashboardHome, DashboardJobs, DashboardProfile, DashboardSettings};
pub use home::Home;
pub use recruiter::{
    RecruiterAnalytics, RecruiterCandidates, RecruiterCompany, RecruiterInterviews,
    RecruiterJobCreate, RecruiterJobEdit, RecruiterJobs, RecruiterOverview, RecruiterSettings,
};
