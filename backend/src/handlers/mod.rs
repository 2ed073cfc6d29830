//! HTTP handlers

mod crop_health;
mod health;
mod soil;
mod weather;

pub use crop_health::*;
pub use health::*;
pub use soil::*;
pub use weather::*;
