//! Multi-track support for a camera driver.
//!
//! [`MultiTrack`] is the object a driver embeds. It receives array writes
//! from the host, keeps the validated layout, and answers the readout
//! questions the driver asks when it programs the hardware.

use std::sync::Arc;

use log::{info, warn};

use mtrack_core::{MessageLog, Region, TrackArray, TrackValidator, Validation, ValidationPolicy};

use crate::attributes::{AttributeSink, store_track_attributes};
use crate::config::MultiTrackConfig;
use crate::consts::{DEFAULT_ATTRIBUTE_PREFIX, DEFAULT_MAX_SIZE_Y};
use crate::errors::MultiTrackError;
use crate::params::TrackParams;

///
/// Multi-track state of one camera.
///
/// # Examples
///
/// ```rust
/// use mtrack_host::{MultiTrack, TrackParams};
///
/// # fn main() -> Result<(), mtrack_host::MultiTrackError> {
/// let mut tracks = MultiTrack::new(TrackParams::new(10, 11, 12));
/// tracks.set_max_size(256);
/// tracks.write_int32_array(10, &[0, 100])?;
/// tracks.write_int32_array(11, &[15, 131])?;
///
/// assert_eq!(tracks.size(), 2);
/// assert_eq!(tracks.track_end(1), 131);
/// assert_eq!(tracks.total_data_height(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct MultiTrack {
    params: TrackParams,
    validator: TrackValidator,
    attribute_prefix: String,
}

impl MultiTrack {
    pub fn new(params: TrackParams) -> Self {
        Self::from_validator(params, TrackValidator::new(DEFAULT_MAX_SIZE_Y))
    }

    /// Use a stricter validation policy than the standard one.
    pub fn with_policy<P: ValidationPolicy + 'static>(params: TrackParams, policy: P) -> Self {
        Self::from_validator(
            params,
            TrackValidator::with_policy(DEFAULT_MAX_SIZE_Y, policy),
        )
    }

    fn from_validator(params: TrackParams, validator: TrackValidator) -> Self {
        MultiTrack {
            params,
            validator,
            attribute_prefix: DEFAULT_ATTRIBUTE_PREFIX.to_string(),
        }
    }

    /// Create from a configuration, validating its initial tracks once.
    pub fn from_config(params: TrackParams, config: &MultiTrackConfig) -> Self {
        let mut multi_track = Self::from_validator(params, TrackValidator::new(config.max_size_y));
        multi_track.attribute_prefix = config.attribute_prefix.clone();
        if multi_track.validator.set_user_tracks(config.tracks.clone()) {
            multi_track.log_messages();
        }
        multi_track
    }

    pub fn set_attribute_prefix(&mut self, prefix: impl Into<String>) {
        self.attribute_prefix = prefix.into();
    }

    /// Set the Y size of the sensor and re-validate.
    pub fn set_max_size(&mut self, max_size_y: usize) {
        info!("Multi-track sensor height set to {} rows", max_size_y);
        self.validator.set_max_extent(max_size_y);
        self.log_messages();
    }

    ///
    /// Handle an integer array written by the host.
    ///
    /// Returns whether the array changed. A write to a parameter that is not
    /// one of the three track arrays is an error and changes nothing.
    ///
    pub fn write_int32_array(
        &mut self,
        reason: i32,
        values: &[i32],
    ) -> Result<bool, MultiTrackError> {
        let which = self
            .params
            .resolve(reason)
            .ok_or(MultiTrackError::UnknownParameter(reason))?;
        Ok(self.write_array(which, values))
    }

    /// Replace one track array; returns whether it changed.
    pub fn write_array(&mut self, which: TrackArray, values: &[i32]) -> bool {
        let changed = self.validator.set_user_array(which, values.to_vec());
        if changed {
            self.log_messages();
        }
        changed
    }

    fn log_messages(&self) {
        for message in self.validator.messages() {
            warn!("MultiTrack: {}", message);
        }
    }

    pub fn params(&self) -> TrackParams {
        self.params
    }

    pub fn validator(&self) -> &TrackValidator {
        &self.validator
    }

    /// Number of validated tracks.
    pub fn size(&self) -> usize {
        self.validator.region_count()
    }

    pub fn valid_tracks(&self) -> Vec<Region> {
        self.validator.regions().to_vec()
    }

    pub fn validation_messages(&self) -> &MessageLog {
        self.validator.messages()
    }

    /// The current layout and messages as one consistent value.
    pub fn snapshot(&self) -> Arc<Validation> {
        self.validator.snapshot()
    }

    /// Rows after binning of one track, 0 for an unknown track.
    pub fn data_height(&self, track: usize) -> usize {
        self.validator.data_height(track)
    }

    /// Rows after binning of all tracks.
    pub fn total_data_height(&self) -> usize {
        self.validator.total_data_height()
    }

    /// Publish the start/end/bin attributes of every validated track.
    pub fn store_track_attributes<S: AttributeSink + ?Sized>(&self, sink: &mut S) {
        store_track_attributes(sink, &self.attribute_prefix, self.validator.regions());
    }

    // Per-track accessors for drivers that program one track at a time.
    // Unknown tracks read as a single unbinned row at 0.

    pub fn param_start(&self) -> i32 {
        self.params.start
    }

    pub fn param_end(&self) -> i32 {
        self.params.end
    }

    pub fn param_bin(&self) -> i32 {
        self.params.bin
    }

    pub fn track_start(&self, track: usize) -> usize {
        self.validator.region(track).map_or(0, |r| r.offset)
    }

    pub fn track_end(&self, track: usize) -> usize {
        self.validator.region(track).map_or(0, |r| r.end())
    }

    pub fn track_height(&self, track: usize) -> usize {
        self.validator.region(track).map_or(1, |r| r.size)
    }

    pub fn track_bin(&self, track: usize) -> usize {
        self.validator.region(track).map_or(1, |r| r.binning)
    }
}
