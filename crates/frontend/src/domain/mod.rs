//! Records managed by the console, one module per aggregate:
//! `api.rs` for the gateway calls, `ui/` for the pages.

pub mod a001_cafe;
pub mod a002_employee;
