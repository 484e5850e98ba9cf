use thiserror::Error;

/// Errors raised while generating artifacts.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The plugin parameter string could not be understood.
    #[error("invalid plugin parameter: {0}")]
    InvalidParameter(String),

    /// A field references a type that is not declared anywhere.
    #[error("unresolved type reference `{reference}` in field `{field}` of message `{message}`")]
    UnresolvedReference {
        reference: String,
        field: String,
        message: String,
    },

    /// Artifact content could not be produced.
    #[error("cannot format `{message}`: {reason}")]
    Format { message: String, reason: String },

    /// Two annotated messages map to the same artifact name.
    #[error("artifact `{artifact}` for message `{message}` was already generated")]
    DuplicateArtifact { artifact: String, message: String },

    /// Generation for one target file failed.
    #[error("Failed to convert {file}: {source}")]
    Conversion {
        file: String,
        #[source]
        source: Box<GenerateError>,
    },
}

impl GenerateError {
    /// Create an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter(message.into())
    }

    /// Wrap this error as the failure of `file`.
    pub fn in_file(self, file: impl Into<String>) -> Self {
        Self::Conversion {
            file: file.into(),
            source: Box::new(self),
        }
    }
}
