pub mod action;
pub mod handler;

pub use action::Action;
pub use handler::handle_input;
