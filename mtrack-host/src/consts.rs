//! Constants shared with the host framework.
//!
//! This module defines the parameter names the host registers for the three
//! track arrays, along with defaults used when nothing else is configured.

// Host parameter names

/// Parameter name for the array of track start rows.
pub const CCD_MULTI_TRACK_START: &str = "CCD_MULTI_TRACK_START";

/// Parameter name for the array of track end rows (inclusive).
pub const CCD_MULTI_TRACK_END: &str = "CCD_MULTI_TRACK_END";

/// Parameter name for the array of track binning factors.
pub const CCD_MULTI_TRACK_BIN: &str = "CCD_MULTI_TRACK_BIN";

// Defaults

/// Sensor height assumed until the driver reports the real one.
pub const DEFAULT_MAX_SIZE_Y: usize = 1024;

/// Prefix of the per-track attribute names, e.g. `ROI1start`.
pub const DEFAULT_ATTRIBUTE_PREFIX: &str = "ROI";
