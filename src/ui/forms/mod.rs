//! Form rendering module
//!
//! - `field_renderer`: bordered field boxes with error display
//! - `registration_form`: the registration form view

mod field_renderer;
mod registration_form;

pub use registration_form::draw_registration;
