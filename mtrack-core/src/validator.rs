//! Stateful owner of the user arrays and their validated layout.

use std::fmt;
use std::sync::Arc;

use crate::messages::MessageLog;
use crate::models::{Region, TrackArray, UserTracks, Validation};
use crate::policy::{StandardPolicy, ValidationPolicy};

///
/// Holds the user-entered track arrays and the sensor height, and keeps a
/// validated layout derived from them.
///
/// Every change to the inputs rebuilds the layout from scratch and swaps it
/// in as a new [`Arc<Validation>`], so a caller that took a
/// [`snapshot`](TrackValidator::snapshot) before the change keeps seeing the
/// complete old layout.
///
/// The validator does no locking of its own; the host serialises access.
///
pub struct TrackValidator {
    max_extent: usize,
    tracks: UserTracks,
    policy: Box<dyn ValidationPolicy>,
    validation: Arc<Validation>,
}

impl TrackValidator {
    /// Create a validator using the standard policy.
    pub fn new(max_extent: usize) -> Self {
        Self::with_policy(max_extent, StandardPolicy)
    }

    /// Create a validator with a custom (usually stricter) policy.
    pub fn with_policy<P: ValidationPolicy + 'static>(max_extent: usize, policy: P) -> Self {
        let mut validator = TrackValidator {
            max_extent,
            tracks: UserTracks::default(),
            policy: Box::new(policy),
            validation: Arc::new(Validation::default()),
        };
        validator.validate();
        validator
    }

    pub fn max_extent(&self) -> usize {
        self.max_extent
    }

    ///
    /// Set the sensor height and re-validate.
    ///
    /// Always re-validates, even when the height is unchanged.
    ///
    pub fn set_max_extent(&mut self, max_extent: usize) {
        self.max_extent = max_extent;
        self.validate();
    }

    pub fn user_array(&self, which: TrackArray) -> &[i32] {
        self.tracks.get(which)
    }

    pub fn user_tracks(&self) -> &UserTracks {
        &self.tracks
    }

    ///
    /// Replace one of the user arrays.
    ///
    /// Returns `true` if the array changed, in which case the layout has
    /// been rebuilt. Writing the same values again leaves the layout and
    /// its messages untouched.
    ///
    pub fn set_user_array(&mut self, which: TrackArray, values: Vec<i32>) -> bool {
        let changed = self.tracks.replace(which, values);
        if changed {
            self.validate();
        }
        changed
    }

    /// Replace all three arrays at once, validating a single time.
    pub fn set_user_tracks(&mut self, tracks: UserTracks) -> bool {
        if self.tracks == tracks {
            return false;
        }
        self.tracks = tracks;
        self.validate();
        true
    }

    /// Rebuild the layout and messages from the current inputs.
    pub fn validate(&mut self) {
        let validation = self.policy.validate(&self.tracks, self.max_extent);
        self.validation = Arc::new(validation);
    }

    /// The current layout; unaffected by later changes to the validator.
    pub fn snapshot(&self) -> Arc<Validation> {
        Arc::clone(&self.validation)
    }

    pub fn region_count(&self) -> usize {
        self.validation.len()
    }

    pub fn region(&self, index: usize) -> Option<Region> {
        self.validation.region(index).copied()
    }

    pub fn regions(&self) -> &[Region] {
        &self.validation.regions
    }

    /// Output rows of one track after binning, 0 for an unknown track.
    pub fn data_height(&self, index: usize) -> usize {
        self.validation.data_height(index)
    }

    /// Output rows of all tracks after binning.
    pub fn total_data_height(&self) -> usize {
        self.validation.total_data_height()
    }

    /// Messages from the most recent validation pass.
    pub fn messages(&self) -> &MessageLog {
        &self.validation.messages
    }
}

impl fmt::Debug for TrackValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrackValidator")
            .field("max_extent", &self.max_extent)
            .field("tracks", &self.tracks)
            .field("validation", &self.validation)
            .finish()
    }
}
