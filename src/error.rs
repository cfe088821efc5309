use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that can be returned
pub enum Error {
    /// Error reading wordfile
    #[error("Wordfile \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// Neither the primary nor the fallback wordfile could be loaded
    #[error("No dictionary available: \"{primary}\" and fallback \"{fallback}\" both failed")]
    DictionaryUnavailable { primary: String, fallback: String },

    /// Error deserializing bincoded wordfile
    #[cfg(feature = "bincode")]
    #[error("Wordfile {0} could not be deserialized")]
    WordfileDeserializeError(String),

    /// Token can not be encoded
    #[error("Encoder: invalid token '{0}'")]
    EncodeInvalidToken(String),

    /// The requested game mode is not supported
    #[error("Invalid mode \"{0}\" (expect \"scrabble\" or \"wwf\")")]
    InvalidMode(String),

    /// The board pattern could not be parsed
    #[error("Malformed board constraint \"{pattern}\": {reason}")]
    MalformedConstraint { pattern: String, reason: String },
}
