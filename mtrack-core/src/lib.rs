//! Core library for mtrack: validation of multi-track readout regions.
//!
//! A multi-track readout splits the Y axis of a 2-D sensor into several
//! tracks, each a run of rows that is read out and optionally binned. The
//! user enters three arrays (track starts, track ends and binning factors)
//! which may be incomplete, overlapping or out of range. This crate turns
//! them into a layout the hardware can actually be given:
//!
//! - every track lies inside the sensor and after the track before it
//! - every track's binning factor divides its size
//! - every correction made along the way is reported as a message
//!
//! Validation never fails. Bad input is always coerced into some usable
//! layout and the message log says what was changed.
//!
//! ## Quick Start
//!
//! ```rust
//! use mtrack_core::{Region, TrackArray, TrackValidator};
//!
//! let mut validator = TrackValidator::new(100);
//! validator.set_user_array(TrackArray::Start, vec![0, 40]);
//! validator.set_user_array(TrackArray::End, vec![9, 49]);
//! validator.set_user_array(TrackArray::Bin, vec![4]);
//!
//! // track 1 is truncated to a multiple of its binning, track 2 is fully binned
//! assert_eq!(validator.region(0), Some(Region::new(0, 8, 4)));
//! assert_eq!(validator.region(1), Some(Region::new(40, 10, 10)));
//! assert_eq!(validator.total_data_height(), 3);
//! assert_eq!(validator.messages().len(), 1);
//! ```

pub mod errors;
pub mod messages;
pub mod models;
pub mod policy;
pub mod validate;
pub mod validator;

// re-exports
pub use self::errors::TrackError;
pub use self::messages::MessageLog;
pub use self::models::{Region, TrackArray, UserTracks, Validation};
pub use self::policy::{BinningLimit, StandardPolicy, UniformBinning, ValidationPolicy};
pub use self::validate::validate_tracks;
pub use self::validator::TrackValidator;
