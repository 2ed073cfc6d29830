//! External API integrations

pub mod advice;
pub mod weather;

pub use advice::AdviceClient;
pub use weather::WeatherClient;
