use thiserror::Error;

/// An unsupported extension owner error.
///
/// Raised when an extension is accessed on an object that it does not apply to.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{extension} extension does not apply to type '{type_name}'")]
pub struct ExtensionTypeError {
    extension: &'static str,
    type_name: String,
}

impl ExtensionTypeError {
    /// Create a new [`ExtensionTypeError`].
    #[must_use]
    pub fn new(extension: &'static str, type_name: impl Into<String>) -> Self {
        Self {
            extension,
            type_name: type_name.into(),
        }
    }

    /// Return the name of the extension.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        self.extension
    }

    /// Return the type name of the rejected owner.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }
}

/// An undeclared extension error.
///
/// Raised when the declaring object of an owner does not list the schema URI of an extension in its `stac_extensions`.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("extension schema URI {schema_uri} is not declared in stac_extensions")]
pub struct ExtensionNotImplementedError {
    schema_uri: &'static str,
}

impl ExtensionNotImplementedError {
    /// Create a new [`ExtensionNotImplementedError`].
    #[must_use]
    pub const fn new(schema_uri: &'static str) -> Self {
        Self { schema_uri }
    }

    /// Return the schema URI that is not declared.
    #[must_use]
    pub const fn schema_uri(&self) -> &'static str {
        self.schema_uri
    }
}

/// An extension access error.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ExtensionError {
    /// The extension does not apply to the owner.
    #[error(transparent)]
    Type(#[from] ExtensionTypeError),
    /// The extension is not declared by the owner.
    #[error(transparent)]
    NotImplemented(#[from] ExtensionNotImplementedError),
}

/// A field decoding error.
///
/// Raised when reading a field whose JSON value does not have the expected shape.
#[derive(Debug, Error)]
pub enum FieldDecodeError {
    /// A required field is absent.
    #[error("required field {key} is missing")]
    Missing {
        /// The field key.
        key: &'static str,
    },
    /// A field is present but invalid.
    #[error("field {key} is invalid: {source}")]
    Invalid {
        /// The field key.
        key: &'static str,
        /// The underlying decoding error.
        source: serde_json::Error,
    },
}

impl FieldDecodeError {
    /// Return the key of the field that failed to decode.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Missing { key } | Self::Invalid { key, .. } => key,
        }
    }
}
