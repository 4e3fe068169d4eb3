pub mod color;
pub mod constants;
pub mod error;
pub mod morph;
pub mod placement;
pub mod points;
pub mod progress;
pub mod registry;
pub mod sampling;
pub mod scene;
pub mod topper;
pub mod transform;

pub use color::*;
pub use constants::*;
pub use error::{Result, SceneError};
pub use morph::*;
pub use placement::*;
pub use points::*;
pub use progress::*;
pub use registry::*;
pub use sampling::*;
pub use scene::*;
pub use topper::*;
pub use transform::*;
