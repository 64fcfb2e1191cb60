pub mod error;
pub mod inspector;
pub mod render;
pub mod target;

pub use error::InspectError;
pub use inspector::FormInspector;
pub use render::{Payload, Rendered, render};
pub use target::Target;
