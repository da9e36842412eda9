#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::messages::MessageLog;
use crate::models::region::Region;

///
/// Result of one validation pass: the regions to read out and every
/// corrective action that was needed to get there.
///
/// A `Validation` is never modified after it is built; a new pass produces
/// a new value.
///
#[derive(Eq, PartialEq, Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Validation {
    pub regions: Vec<Region>,
    pub messages: MessageLog,
}

impl Validation {
    pub fn new(regions: Vec<Region>, messages: MessageLog) -> Self {
        Validation { regions, messages }
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn region(&self, index: usize) -> Option<&Region> {
        self.regions.get(index)
    }

    /// Output rows of one track after binning, 0 for an unknown track.
    pub fn data_height(&self, index: usize) -> usize {
        self.regions.get(index).map_or(0, Region::data_height)
    }

    /// Output rows of all tracks after binning.
    pub fn total_data_height(&self) -> usize {
        self.regions.iter().map(Region::data_height).sum()
    }
}
