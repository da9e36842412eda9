use std::fmt::{self, Display};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::TrackError;

/// Selects one of the three user-entered track arrays.
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TrackArray {
    Start,
    End,
    Bin,
}

impl TrackArray {
    pub const ALL: [TrackArray; 3] = [TrackArray::Start, TrackArray::End, TrackArray::Bin];

    pub fn as_str(&self) -> &'static str {
        match self {
            TrackArray::Start => "start",
            TrackArray::End => "end",
            TrackArray::Bin => "bin",
        }
    }
}

impl FromStr for TrackArray {
    type Err = TrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "start" => Ok(TrackArray::Start),
            "end" => Ok(TrackArray::End),
            "bin" | "binning" => Ok(TrackArray::Bin),
            _ => Err(TrackError::UnknownArray(s.to_string())),
        }
    }
}

impl Display for TrackArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

///
/// The raw arrays as entered by the user.
///
/// The three arrays are independent: the number of tracks is the length of
/// `start`, a track without an `end` entry is a single row, and a track
/// without a `bin` entry is fully binned.
///
#[derive(Eq, PartialEq, Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UserTracks {
    #[cfg_attr(feature = "serde", serde(default))]
    pub start: Vec<i32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub end: Vec<i32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub bin: Vec<i32>,
}

impl UserTracks {
    pub fn new(start: Vec<i32>, end: Vec<i32>, bin: Vec<i32>) -> Self {
        UserTracks { start, end, bin }
    }

    pub fn get(&self, which: TrackArray) -> &[i32] {
        match which {
            TrackArray::Start => &self.start,
            TrackArray::End => &self.end,
            TrackArray::Bin => &self.bin,
        }
    }

    ///
    /// Replace one array wholesale.
    ///
    /// Returns `true` when the new values differ from the old ones.
    ///
    pub fn replace(&mut self, which: TrackArray, values: Vec<i32>) -> bool {
        let slot = match which {
            TrackArray::Start => &mut self.start,
            TrackArray::End => &mut self.end,
            TrackArray::Bin => &mut self.bin,
        };
        if *slot == values {
            return false;
        }
        *slot = values;
        true
    }

    /// Number of requested tracks (the length of the start array).
    pub fn len(&self) -> usize {
        self.start.len()
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_empty()
    }
}
