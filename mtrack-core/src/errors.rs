use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TrackError {
    #[error("Unknown track array: {0} (expected one of start, end, bin)")]
    UnknownArray(String),
}
