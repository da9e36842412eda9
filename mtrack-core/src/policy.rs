//! Pluggable validation policies.
//!
//! A camera that needs stricter track constraints than the standard pass
//! provides its own [`ValidationPolicy`]. Stricter policies run the standard
//! pass first and then apply extra passes over its result. The extra passes
//! only ever shrink sizes or binning, so the ordering and bounds guarantees
//! of the standard pass still hold.

use crate::models::{UserTracks, Validation};
use crate::validate::validate_tracks;

pub trait ValidationPolicy: Send + Sync {
    /// Turn the user arrays into a validated layout.
    ///
    /// The provided implementation is the standard pass.
    fn validate(&self, tracks: &UserTracks, max_extent: usize) -> Validation {
        validate_tracks(tracks, max_extent)
    }
}

/// The standard pass with no extra constraints.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardPolicy;

impl ValidationPolicy for StandardPolicy {}

///
/// Caps the binning factor of every track.
///
/// Tracks binned above the limit are rebinned at the limit and their size is
/// reduced to a multiple of it.
///
#[derive(Debug, Clone, Copy)]
pub struct BinningLimit {
    pub max_binning: usize,
}

impl BinningLimit {
    pub fn new(max_binning: usize) -> Self {
        BinningLimit {
            max_binning: max_binning.max(1),
        }
    }
}

impl ValidationPolicy for BinningLimit {
    fn validate(&self, tracks: &UserTracks, max_extent: usize) -> Validation {
        let mut validation = validate_tracks(tracks, max_extent);
        let limit = self.max_binning.max(1);

        for (i, region) in validation.regions.iter_mut().enumerate() {
            if region.binning <= limit {
                continue;
            }
            let size = region.size - region.size % limit;
            validation.messages.push(format!(
                "Track {} binning ({}) above limit ({}), using {} with size {}",
                i + 1,
                region.binning,
                limit,
                limit,
                size
            ));
            region.binning = limit;
            region.size = size;
        }

        validation
    }
}

///
/// Forces every track onto the binning of the first track.
///
/// A track that is too small for that binning is fully binned instead.
///
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformBinning;

impl ValidationPolicy for UniformBinning {
    fn validate(&self, tracks: &UserTracks, max_extent: usize) -> Validation {
        let mut validation = validate_tracks(tracks, max_extent);
        let Some(first) = validation.regions.first().copied() else {
            return validation;
        };
        let binning = first.binning;

        for (i, region) in validation.regions.iter_mut().enumerate().skip(1) {
            if region.binning == binning {
                continue;
            }
            if region.size >= binning {
                let size = region.size - region.size % binning;
                validation.messages.push(format!(
                    "Track {} binning ({}) differs from track 1 ({}), using {} with size {}",
                    i + 1,
                    region.binning,
                    binning,
                    binning,
                    size
                ));
                region.binning = binning;
                region.size = size;
            } else if region.binning != region.size {
                validation.messages.push(format!(
                    "Track {} size ({}) smaller than track 1 binning ({}), using {}",
                    i + 1,
                    region.size,
                    binning,
                    region.size
                ));
                region.binning = region.size;
            }
        }

        validation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Region;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn tracks() -> UserTracks {
        UserTracks::new(vec![0, 20, 40], vec![11, 35, 42], vec![4, 8, 1])
    }

    #[rstest]
    fn test_standard_policy_matches_standard_pass(tracks: UserTracks) {
        assert_eq!(
            StandardPolicy.validate(&tracks, 100),
            validate_tracks(&tracks, 100)
        );
    }

    #[rstest]
    fn test_binning_limit(tracks: UserTracks) {
        let result = BinningLimit::new(3).validate(&tracks, 100);
        assert_eq!(
            result.regions,
            vec![
                Region::new(0, 12, 3),
                Region::new(20, 15, 3),
                Region::new(40, 3, 1),
            ]
        );
        assert_eq!(result.messages.len(), 2);
        assert_eq!(
            result.messages[0],
            "Track 1 binning (4) above limit (3), using 3 with size 12"
        );
    }

    #[rstest]
    fn test_binning_limit_of_zero_acts_as_one(tracks: UserTracks) {
        let result = BinningLimit::new(0).validate(&tracks, 100);
        assert!(result.regions.iter().all(|r| r.binning == 1));
    }

    #[rstest]
    fn test_uniform_binning(tracks: UserTracks) {
        let result = UniformBinning.validate(&tracks, 100);
        assert_eq!(
            result.regions,
            vec![
                Region::new(0, 12, 4),
                Region::new(20, 16, 4),
                Region::new(40, 3, 3),
            ]
        );
        assert_eq!(result.messages.len(), 2);
        assert!(result.messages[1].contains("smaller than track 1 binning (4)"));
    }

    #[rstest]
    fn test_uniform_binning_without_tracks() {
        let result = UniformBinning.validate(&UserTracks::default(), 100);
        assert!(result.is_empty());
    }
}
