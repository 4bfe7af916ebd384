//! License selection against a catalog of available license files.

use crate::domain::error::DomainError;
use std::str::FromStr;

// ── LicenseRequest ────────────────────────────────────────────────────────────

/// The user's license selection.
///
/// Empty input and the literal `"None"` are the no-license sentinel; the
/// whole installation step becomes a no-op for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LicenseRequest {
    Skip,
    Named(String),
}

impl FromStr for LicenseRequest {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s == "None" {
            Ok(Self::Skip)
        } else {
            Ok(Self::Named(s.to_string()))
        }
    }
}

// ── catalog resolution ────────────────────────────────────────────────────────

/// Outcome of resolving a requested identifier against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The canonical catalog identifier to install.
    pub name: String,
    /// Whether a case-insensitive correction was applied.
    pub corrected: bool,
}

/// Resolve `requested` against the catalog's identifiers.
///
/// Exact match wins. Otherwise the first case-insensitive match is used and
/// flagged as corrected. No match at all fails with an error that enumerates
/// the whole catalog (sorted, so the message is deterministic).
pub fn resolve(requested: &str, available: &[String]) -> Result<Resolution, DomainError> {
    if available.iter().any(|lic| lic == requested) {
        return Ok(Resolution {
            name: requested.to_string(),
            corrected: false,
        });
    }

    if let Some(hit) = available
        .iter()
        .find(|lic| lic.eq_ignore_ascii_case(requested))
    {
        return Ok(Resolution {
            name: hit.clone(),
            corrected: true,
        });
    }

    let mut catalog: Vec<String> = available.to_vec();
    catalog.sort();
    Err(DomainError::LicenseNotAvailable {
        requested: requested.to_string(),
        available: catalog,
    })
}

// ── tests ─────────────────────────────────────────────────────────────────────
