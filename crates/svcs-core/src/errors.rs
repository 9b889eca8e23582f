use thiserror::Error;

/// Result type alias using SvcsError
pub type Result<T> = std::result::Result<T, SvcsError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every error raised by svcs is classified into one of these kinds. Each
/// kind maps to a stable error code usable in tests and scripted callers.
///
/// Kinds split into two families: user errors, which are reported as a
/// short message and leave the process exit status untouched, and fatal
/// errors, which abort the current operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // User errors
    InvalidInput,
    MissingMessage,
    MissingFingerprint,
    InvalidPath,
    FileNotFound,
    CommitNotFound,
    MissingIdentity,

    // Integration/IO
    Io,
    Serialization,
    Corrupted,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::MissingMessage => "ERR_MISSING_MESSAGE",
            ExErrorKind::MissingFingerprint => "ERR_MISSING_FINGERPRINT",
            ExErrorKind::InvalidPath => "ERR_INVALID_PATH",
            ExErrorKind::FileNotFound => "ERR_FILE_NOT_FOUND",
            ExErrorKind::CommitNotFound => "ERR_COMMIT_NOT_FOUND",
            ExErrorKind::MissingIdentity => "ERR_MISSING_IDENTITY",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Corrupted => "ERR_CORRUPTED",
        }
    }

    /// Whether this kind is reported to the user rather than treated as fatal
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            ExErrorKind::InvalidInput
                | ExErrorKind::MissingMessage
                | ExErrorKind::MissingFingerprint
                | ExErrorKind::InvalidPath
                | ExErrorKind::FileNotFound
                | ExErrorKind::CommitNotFound
                | ExErrorKind::MissingIdentity
        )
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus optional context
/// (operation, working-tree path, fingerprint) for diagnostics.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    path: Option<String>,
    fingerprint: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            fingerprint: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add path context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add fingerprint context
    pub fn with_fingerprint(mut self, fingerprint: impl Into<String>) -> Self {
        self.fingerprint = Some(fingerprint.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Whether this error is reported to the user rather than treated as fatal
    pub fn is_user_error(&self) -> bool {
        self.kind.is_user_error()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the path context, if any
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Get the fingerprint context, if any
    pub fn fingerprint(&self) -> Option<&str> {
        self.fingerprint.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        if let Some(fingerprint) = &self.fingerprint {
            write!(f, " (fingerprint: {})", fingerprint)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain error taxonomy for svcs operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SvcsError {
    /// Commit was requested without a message
    #[error("Commit message was not passed")]
    MessageMissing,

    /// Checkout was requested without a commit fingerprint
    #[error("Commit fingerprint was not passed")]
    FingerprintMissing,

    /// A path cannot be tracked (absolute, escapes the working tree, ...)
    #[error("Invalid tracked path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    /// No file exists at the given working-tree path
    #[error("Can't find file: {path}")]
    FileNotFound { path: String },

    /// No snapshot exists for the given fingerprint
    #[error("Commit does not exist: {fingerprint}")]
    CommitNotFound { fingerprint: String },

    /// The commit path needs an author but none is configured
    #[error("Identity not configured: no username set")]
    IdentityNotConfigured,

    /// A username was supplied but is blank
    #[error("Username cannot be empty")]
    EmptyUsername,

    /// Reading or writing a working-tree file failed
    #[error("IO error on {path}: {message}")]
    Io { path: String, message: String },
}

impl SvcsError {
    /// Build an IO error for a path
    pub fn io(path: impl AsRef<std::path::Path>, err: &std::io::Error) -> Self {
        SvcsError::Io {
            path: path.as_ref().display().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<SvcsError> for ExError {
    fn from(err: SvcsError) -> Self {
        let message = err.to_string();
        match err {
            SvcsError::MessageMissing => ExError::new(ExErrorKind::MissingMessage),
            SvcsError::FingerprintMissing => ExError::new(ExErrorKind::MissingFingerprint),
            SvcsError::InvalidPath { path, .. } => {
                ExError::new(ExErrorKind::InvalidPath).with_path(path)
            }
            SvcsError::FileNotFound { path } => {
                ExError::new(ExErrorKind::FileNotFound).with_path(path)
            }
            SvcsError::CommitNotFound { fingerprint } => {
                ExError::new(ExErrorKind::CommitNotFound).with_fingerprint(fingerprint)
            }
            SvcsError::IdentityNotConfigured => ExError::new(ExErrorKind::MissingIdentity),
            SvcsError::EmptyUsername => ExError::new(ExErrorKind::InvalidInput),
            SvcsError::Io { path, .. } => ExError::new(ExErrorKind::Io).with_path(path),
        }
        .with_message(message)
    }
}
