use thiserror::Error;

/// Errors raised while configuring domains or manipulating coded vectors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A parameter name, value, or referenced domain label was rejected
    #[error("invalid parameter {name} = {value:?}: {reason}")]
    InvalidParameter {
        name: String,
        value: String,
        reason: String,
    },

    /// A code that does not belong to the domain it was used with
    #[error("code {code} is not valid: {reason}")]
    Domain { code: f32, reason: String },

    /// A string that does not name any value of the domain
    #[error("{value:?} is not a value of this domain")]
    EncodingMiss { value: String },

    /// Position outside a vector
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Classified insertion on a vector that has no classifications attached
    #[error("no classification vector attached")]
    MissingClassification,

    /// Streams and classifications would no longer be coindexed
    #[error("{streams} streams cannot be paired with {classifications} classifications")]
    LengthMismatch {
        streams: usize,
        classifications: usize,
    },

    /// Handle that does not belong to the schema it was used with
    #[error("no domain with id {0}")]
    UnknownDomain(usize),
}

impl Error {
    pub(crate) fn invalid_parameter(
        name: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn domain(code: f32, reason: impl Into<String>) -> Self {
        Self::Domain {
            code,
            reason: reason.into(),
        }
    }
}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_message() {
        let err = Error::invalid_parameter("ordered", "maybe", "ordered can only be true or false");
        assert_eq!(
            err.to_string(),
            "invalid parameter ordered = \"maybe\": ordered can only be true or false"
        );
    }

    #[test]
    fn test_length_mismatch_message() {
        let err = Error::LengthMismatch {
            streams: 3,
            classifications: 2,
        };
        assert_eq!(
            err.to_string(),
            "3 streams cannot be paired with 2 classifications"
        );
    }
}
