pub mod gender;

pub use gender::{Gender, UnknownGender};
