use derive_more::{Display, Error};

/// Failures of the nearest parking lookup.
#[derive(Debug, Display, Error, Clone, PartialEq)]
pub enum LookupError {
    /// The dataset could not be read or is not a list of records.
    #[display("parking data unavailable: {_0}")]
    DataUnavailable(#[error(not(source))] String),
    /// The query coordinate is outside the geographic range.
    #[display("invalid query coordinate: ({latitude}, {longitude})")]
    InvalidQuery { latitude: f64, longitude: f64 },
}
