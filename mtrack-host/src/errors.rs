use thiserror::Error;

#[derive(Error, Debug)]
pub enum MultiTrackError {
    #[error("Parameter {0} is not a multi-track parameter")]
    UnknownParameter(i32),

    #[error("Unknown multi-track parameter name: {0}")]
    UnknownParameterName(String),

    #[error("Invalid multi-track configuration: {0}")]
    InvalidConfig(#[from] toml::de::Error),
}
