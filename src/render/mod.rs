pub mod renderer;

pub use renderer::{ControlStatus, Renderer};
