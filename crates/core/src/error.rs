use serde::Serialize;

/// Reasons a candidate value is rejected before it reaches storage.
///
/// Messages are the user-facing Turkish strings; [`ValidationError::kind`] gives a stable,
/// language-independent discriminant for callers that localise on their own.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Geçersiz alan adı: {0}")]
    InvalidFieldName(String),
    #[error("{0}")]
    InvalidType(String),
    #[error("{0}")]
    OutOfRange(String),
    #[error("{0}")]
    InvalidFormat(String),
    #[error("{0}")]
    TemporalConstraintViolation(String),
    #[error("{0}")]
    InvalidEnumMember(String),
    #[error("{0}")]
    LengthConstraintViolation(String),
    #[error("Zorunlu alan eksik: {0}")]
    MissingField(String),
}

/// Payload-free discriminant of a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidFieldName,
    InvalidType,
    OutOfRange,
    InvalidFormat,
    TemporalConstraintViolation,
    InvalidEnumMember,
    LengthConstraintViolation,
    MissingField,
}

impl ErrorKind {
    /// Snake-case name, identical to the serialised form.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidFieldName => "invalid_field_name",
            ErrorKind::InvalidType => "invalid_type",
            ErrorKind::OutOfRange => "out_of_range",
            ErrorKind::InvalidFormat => "invalid_format",
            ErrorKind::TemporalConstraintViolation => "temporal_constraint_violation",
            ErrorKind::InvalidEnumMember => "invalid_enum_member",
            ErrorKind::LengthConstraintViolation => "length_constraint_violation",
            ErrorKind::MissingField => "missing_field",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::InvalidFieldName(_) => ErrorKind::InvalidFieldName,
            ValidationError::InvalidType(_) => ErrorKind::InvalidType,
            ValidationError::OutOfRange(_) => ErrorKind::OutOfRange,
            ValidationError::InvalidFormat(_) => ErrorKind::InvalidFormat,
            ValidationError::TemporalConstraintViolation(_) => {
                ErrorKind::TemporalConstraintViolation
            }
            ValidationError::InvalidEnumMember(_) => ErrorKind::InvalidEnumMember,
            ValidationError::LengthConstraintViolation(_) => ErrorKind::LengthConstraintViolation,
            ValidationError::MissingField(_) => ErrorKind::MissingField,
        }
    }

    /// The user-facing message.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

/// Errors raised while resolving [`crate::ValidatorConfig`] at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be a positive integer, got '{value}'")]
    InvalidValue { name: &'static str, value: String },
    #[error("{0} must be greater than zero")]
    ZeroLength(&'static str),
}
