pub mod a001_cafe;
pub mod a002_employee;
pub mod common;
