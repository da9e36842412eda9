//! Host integration for mtrack.
//!
//! This crate connects the track validator in [`mtrack_core`] to a camera
//! driver running inside a host control framework:
//!
//! - [`params`] maps host parameter names and indices onto track arrays
//! - [`multitrack`] holds the per-camera state and answers readout queries
//! - [`attributes`] publishes the validated tracks as frame attributes
//! - [`config`] loads initial settings from TOML
//!
//! Validation messages are reported through the [`log`] facade at warning
//! level whenever a write changes the layout.

pub mod attributes;
pub mod config;
pub mod consts;
pub mod errors;
pub mod multitrack;
pub mod params;

// re-exports
pub use self::attributes::{AttributeSink, TrackAttribute};
pub use self::config::{MultiTrackConfig, load_config};
pub use self::errors::MultiTrackError;
pub use self::multitrack::MultiTrack;
pub use self::params::{TrackParamName, TrackParams};
