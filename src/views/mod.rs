pub mod dashboard;
pub mod setup;
pub mod shared;

pub use dashboard::DashboardView;
pub use setup::SetupView;
