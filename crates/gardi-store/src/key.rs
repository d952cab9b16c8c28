//! Document addressing: collections, key triples, and segment validation.
//!
//! User and id segments come straight from request paths, so they are
//! validated here -- before any filesystem path is built -- and rejected if
//! they could escape the partition directory. Validation never rewrites a
//! segment into a sanitized form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};

/// A fixed, named partition of the document space.
///
/// Collections are closed: they are referenced at runtime but never created
/// or deleted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    /// Reusable sheet definitions.
    Schemas,
    /// Filled-in sheets created from a schema.
    Instances,
}

impl Collection {
    /// The directory name of this collection.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Schemas => "schemas",
            Self::Instances => "instances",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Collection {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "schemas" => Ok(Self::Schemas),
            "instances" => Ok(Self::Instances),
            other => Err(StoreError::InvalidSegment {
                segment: other.to_string(),
                reason: "unknown collection".into(),
            }),
        }
    }
}

/// The (collection, user, id) triple addressing one stored document.
///
/// Construction validates the user and id segments, so a `DocumentKey` that
/// exists always resolves to a path inside its partition directory.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DocumentKey {
    collection: Collection,
    user: String,
    id: String,
}

impl DocumentKey {
    /// Build a key, validating both free-form segments.
    pub fn new(
        collection: Collection,
        user: impl Into<String>,
        id: impl Into<String>,
    ) -> StoreResult<Self> {
        let user = user.into();
        let id = id.into();
        validate_segment(&user)?;
        validate_segment(&id)?;
        Ok(Self {
            collection,
            user,
            id,
        })
    }

    pub fn collection(&self) -> Collection {
        self.collection
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for DocumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.collection, self.user, self.id)
    }
}

/// Validate a single user or id path segment.
///
/// Segments must name exactly one file or directory entry: no separators, no
/// parent-directory sequences, no leading dot (reserved for temp and hidden
/// files), no NUL.
pub fn validate_segment(segment: &str) -> StoreResult<()> {
    let reject = |reason: &str| {
        Err(StoreError::InvalidSegment {
            segment: segment.to_string(),
            reason: reason.into(),
        })
    };

    if segment.is_empty() {
        return reject("must not be empty");
    }
    if segment.contains('/') || segment.contains('\\') {
        return reject("must not contain a path separator");
    }
    if segment.contains("..") {
        return reject("must not contain '..'");
    }
    if segment.starts_with('.') {
        return reject("must not start with '.'");
    }
    if segment.contains('\0') {
        return reject("must not contain NUL");
    }
    Ok(())
}
