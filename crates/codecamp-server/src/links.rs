//! Canonical resource URL derivation
//!
//! A pure function from resource identity to the authoritative path
//! returned in `Location` headers. Independent of the routing layer so
//! it can be unit-tested and reused by any handler.

use thiserror::Error;

/// A resource for which a canonical URL can be derived
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource<'a> {
    Camp { moniker: &'a str },
    Talk { moniker: &'a str, id: i32 },
}

/// Errors from canonical URL derivation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LinkError {
    #[error("Moniker is required and cannot be empty")]
    EmptyMoniker,

    #[error("Moniker '{0}' cannot be used in a URL")]
    InvalidMoniker(String),
}

/// Derive the canonical path for a resource
///
/// Monikers must form a single path segment: ASCII letters, digits,
/// hyphens, and underscores.
pub fn canonical_url(resource: Resource<'_>) -> Result<String, LinkError> {
    match resource {
        Resource::Camp { moniker } => {
            validate_moniker(moniker)?;
            Ok(format!("/api/camps/{}", moniker))
        },
        Resource::Talk { moniker, id } => {
            validate_moniker(moniker)?;
            Ok(format!("/api/camps/{}/talks/{}", moniker, id))
        },
    }
}

/// Check that a moniker can appear as a path segment
pub fn validate_moniker(moniker: &str) -> Result<(), LinkError> {
    if moniker.is_empty() {
        return Err(LinkError::EmptyMoniker);
    }

    if !moniker
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(LinkError::InvalidMoniker(moniker.to_string()));
    }

    Ok(())
}
