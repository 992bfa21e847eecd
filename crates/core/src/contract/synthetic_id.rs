//! Synthetic identifiers for dry-run creates
//!
//! In dry-run mode nothing reaches the remote platform, yet every created
//! record must still carry an `id`. The id is the configured prefix followed
//! by a content digest, so dry-run ids are stable across runs and can be
//! told apart from ids the platform assigns.
//!
//! ## Layout
//!
//! ```text
//! id = <prefix digits> <digest mod 10^w, zero-padded to w digits>
//! w  = 18 - len(prefix)
//! ```
//!
//! Eighteen digits always fit in an `i64`, the platform's id type, so a
//! simulated id can be fed back as a foreign key (e.g. a LICA `lineItemId`).
//!
//! ## Validation
//!
//! Prefixes must:
//! - Be 1-6 characters
//! - Contain only ASCII digits
//! - Not start with `0` (it would vanish from the integer)

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// Maximum number of digits in an id prefix
pub const MAX_ID_PREFIX_LEN: usize = 6;

/// Total decimal digits of every synthetic id
const ID_DIGITS: u32 = 18;

/// Validated digit string prepended to every synthetic id
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IdPrefix(String);

impl IdPrefix {
    /// Create a prefix, validating the input
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the prefix is empty, longer than
    /// [`MAX_ID_PREFIX_LEN`], has a leading zero or contains anything but
    /// ASCII digits.
    pub fn new(prefix: impl Into<String>) -> Result<Self> {
        let prefix = prefix.into();
        if prefix.is_empty() {
            return Err(Error::config("dry-run id prefix cannot be empty"));
        }
        if prefix.len() > MAX_ID_PREFIX_LEN {
            return Err(Error::config(format!(
                "dry-run id prefix too long: {} digits (max {})",
                prefix.len(),
                MAX_ID_PREFIX_LEN
            )));
        }
        if let Some((position, c)) = prefix.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            return Err(Error::config(format!(
                "invalid character '{c}' at position {position} in dry-run id prefix (digits only)"
            )));
        }
        if prefix.starts_with('0') {
            return Err(Error::config("dry-run id prefix cannot start with '0'"));
        }
        Ok(IdPrefix(prefix))
    }

    /// The prefix digits
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of digest digits that follow this prefix
    pub fn digest_width(&self) -> u32 {
        ID_DIGITS - self.0.len() as u32
    }
}

impl fmt::Display for IdPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for IdPrefix {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        IdPrefix::new(value)
    }
}

impl From<IdPrefix> for String {
    fn from(prefix: IdPrefix) -> Self {
        prefix.0
    }
}

/// Identifier assigned to a simulated record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SyntheticId(u64);

impl SyntheticId {
    /// Compose an id from a prefix and a content digest
    pub fn new(prefix: &IdPrefix, digest: u64) -> Self {
        let scale = 10u64.pow(prefix.digest_width());
        // The prefix is at most 6 validated digits, so this cannot fail.
        let head: u64 = prefix.as_str().parse().unwrap_or(0);
        SyntheticId(head * scale + digest % scale)
    }

    /// The numeric id
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// Whether this id carries the given prefix
    pub fn has_prefix(&self, prefix: &IdPrefix) -> bool {
        let text = self.0.to_string();
        text.len() == ID_DIGITS as usize && text.starts_with(prefix.as_str())
    }
}

impl fmt::Display for SyntheticId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<SyntheticId> for serde_json::Value {
    fn from(id: SyntheticId) -> Self {
        serde_json::Value::from(id.0)
    }
}
