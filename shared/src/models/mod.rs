//! Domain models for the CropSense advisory platform

mod analysis;
mod crop;
mod soil;
mod weather;

pub use analysis::*;
pub use crop::*;
pub use soil::*;
pub use weather::*;
