// ABOUTME: BMI algorithms: the weight/height formula and WHO classification
// ABOUTME: Both are pure functions with no shared state

/// BMI formula with input validation
pub mod bmi;

/// WHO category classification
pub mod classification;

pub use bmi::{assess, calculate_bmi};
pub use classification::get_category;
