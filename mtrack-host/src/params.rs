//! Mapping between host parameter identifiers and track arrays.
//!
//! The host addresses parameters by name when registering them and by an
//! integer index ("reason") when writing them. Both are converted into a
//! [`TrackArray`] here, at the boundary, and never passed further in.

use mtrack_core::TrackArray;

use crate::consts::{CCD_MULTI_TRACK_BIN, CCD_MULTI_TRACK_END, CCD_MULTI_TRACK_START};
use crate::errors::MultiTrackError;

/// Host parameter names of the track arrays.
pub trait TrackParamName: Sized {
    fn param_name(&self) -> &'static str;

    fn from_param_name(name: &str) -> Result<Self, MultiTrackError>;
}

impl TrackParamName for TrackArray {
    fn param_name(&self) -> &'static str {
        match self {
            TrackArray::Start => CCD_MULTI_TRACK_START,
            TrackArray::End => CCD_MULTI_TRACK_END,
            TrackArray::Bin => CCD_MULTI_TRACK_BIN,
        }
    }

    fn from_param_name(name: &str) -> Result<Self, MultiTrackError> {
        match name {
            CCD_MULTI_TRACK_START => Ok(TrackArray::Start),
            CCD_MULTI_TRACK_END => Ok(TrackArray::End),
            CCD_MULTI_TRACK_BIN => Ok(TrackArray::Bin),
            _ => Err(MultiTrackError::UnknownParameterName(name.to_string())),
        }
    }
}

///
/// Parameter indices the host assigned to the three track arrays.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackParams {
    pub start: i32,
    pub end: i32,
    pub bin: i32,
}

impl TrackParams {
    pub fn new(start: i32, end: i32, bin: i32) -> Self {
        TrackParams { start, end, bin }
    }

    ///
    /// Build the table from a lookup of parameter indices by name, e.g. the
    /// host's own parameter list.
    ///
    pub fn from_lookup<F>(mut lookup: F) -> Result<Self, MultiTrackError>
    where
        F: FnMut(&str) -> Option<i32>,
    {
        let mut index = |which: TrackArray| {
            let name = which.param_name();
            lookup(name)
                .ok_or_else(|| MultiTrackError::UnknownParameterName(name.to_string()))
        };
        Ok(TrackParams {
            start: index(TrackArray::Start)?,
            end: index(TrackArray::End)?,
            bin: index(TrackArray::Bin)?,
        })
    }

    pub fn index(&self, which: TrackArray) -> i32 {
        match which {
            TrackArray::Start => self.start,
            TrackArray::End => self.end,
            TrackArray::Bin => self.bin,
        }
    }

    /// The track array a parameter index refers to, if any.
    pub fn resolve(&self, reason: i32) -> Option<TrackArray> {
        TrackArray::ALL
            .into_iter()
            .find(|&which| self.index(which) == reason)
    }
}
