//! Café Details UI Module
//!
//! MVVM split:
//! - view_model.rs: ViewModel with load/save/cancel commands
//! - view.rs: Leptos component (pure UI)
//! - logo.rs: logo file picker and its size rule

mod logo;
mod view;
mod view_model;

pub use view::CafeDetails;
pub use view_model::CafeDetailsViewModel;
