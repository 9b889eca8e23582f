//! Identity seam for the commit path.
//!
//! The commit path never reads configuration directly; it asks an
//! `IdentitySource` for the author name. The store's config file is the
//! production implementation, `StaticIdentity` serves embedders and tests.

use crate::errors::ExError;

/// Source of the author recorded on each commit.
pub trait IdentitySource {
    /// The configured author, or `None` if no identity is configured.
    ///
    /// Blank names count as not configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying configuration cannot be read.
    fn author(&self) -> Result<Option<String>, ExError>;
}

/// Identity fixed at construction time.
///
/// # Example
/// ```
/// use svcs_core::identity::{IdentitySource, StaticIdentity};
///
/// let identity = StaticIdentity::new("alice");
/// assert_eq!(identity.author().unwrap().as_deref(), Some("alice"));
/// assert_eq!(StaticIdentity::anonymous().author().unwrap(), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity {
    name: Option<String>,
}

impl StaticIdentity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// An identity source with no configured author.
    pub fn anonymous() -> Self {
        Self { name: None }
    }
}

impl IdentitySource for StaticIdentity {
    fn author(&self) -> Result<Option<String>, ExError> {
        Ok(self
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string))
    }
}
