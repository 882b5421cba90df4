pub mod renderer;
pub mod surface;

pub use renderer::ui;
