// Intake: parse the submitted form and enforce the two required inputs.

pub mod form;
pub mod validation;
