//! Core library for the `citycast` weather viewer.
//!
//! This crate defines:
//! - Configuration handling (API key, endpoints, city list)
//! - The provider client fetching current weather
//! - The view-state machine driving what gets rendered
//! - Text rendering of the weather card
//!
//! It is used by `citycast-cli`, but can also be reused by other binaries or services.

pub mod city;
pub mod config;
pub mod format;
pub mod model;
pub mod provider;
pub mod view;

pub use city::{CityOption, default_cities, filter_cities};
pub use config::Config;
pub use format::{clock_time, condition_glyph, render};
pub use model::{CurrentConditions, TempScale};
pub use provider::{FetchError, OpenWeather, WeatherProvider, provider_from_config};
pub use view::{ViewState, WeatherView};
