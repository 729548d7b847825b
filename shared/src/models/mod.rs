//! Domain models for the Rain Tomorrow prediction app

mod assets;
mod builder;
mod classifier;
mod features;
mod forecast;
mod observation;

pub use assets::*;
pub use builder::*;
pub use classifier::*;
pub use features::*;
pub use forecast::*;
pub use observation::*;
