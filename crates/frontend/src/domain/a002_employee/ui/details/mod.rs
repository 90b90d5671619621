//! Employee Details UI Module
//!
//! - view_model.rs: ViewModel with load/save/cancel commands
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::EmployeeDetails;
pub use view_model::EmployeeDetailsViewModel;
