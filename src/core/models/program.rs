//! Program codes derived from student identifiers

use crate::core::AuditError;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Department prefix (2-3 letters) followed by the program digit, at the start of an identifier
static IDENTIFIER_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z]{2,3})([0-9])").expect("identifier pattern is a valid regex")
});

/// Department/program code such as `CS1` that selects a requirement-table row
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProgramCode(String);

impl ProgramCode {
    /// Derive the program code from a student identifier (e.g. `cs1190123` → `CS1`)
    ///
    /// # Errors
    /// Returns `AuditError::InvalidIdentifier` when the identifier does not start
    /// with a 2-3 letter department prefix followed by a digit
    pub fn detect(identifier: &str) -> Result<Self, AuditError> {
        let trimmed = identifier.trim();
        IDENTIFIER_PREFIX
            .captures(trimmed)
            .map(|caps| Self(format!("{}{}", &caps[1], &caps[2]).to_ascii_uppercase()))
            .ok_or_else(|| AuditError::InvalidIdentifier {
                identifier: identifier.to_string(),
            })
    }

    /// Wrap a code known to be well formed (compiled-in tables)
    pub(crate) fn from_static(code: &'static str) -> Self {
        Self(code.to_string())
    }

    /// The code as an uppercase string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Department part of the code (e.g. `CS` for `CS1`)
    #[must_use]
    pub fn department(&self) -> &str {
        &self.0[..self.0.len() - 1]
    }
}

impl FromStr for ProgramCode {
    type Err = AuditError;

    /// Parse a bare program code. The whole input must be the code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = Self::detect(s)?;
        if code.as_str().eq_ignore_ascii_case(s.trim()) {
            Ok(code)
        } else {
            Err(AuditError::InvalidIdentifier {
                identifier: s.to_string(),
            })
        }
    }
}

impl fmt::Display for ProgramCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_from_kerberos_id() {
        let code = ProgramCode::detect("cs123456").unwrap();
        assert_eq!(code.as_str(), "CS1");
        assert_eq!(code.department(), "CS");
    }

    #[test]
    fn detects_three_letter_prefix() {
        assert_eq!(ProgramCode::detect("mtx5190001").unwrap().as_str(), "MTX5");
        assert_eq!(ProgramCode::detect("  ee3180555 ").unwrap().as_str(), "EE3");
    }

    #[test]
    fn rejects_identifiers_without_a_prefix() {
        for bad in ["", "123456", "c1234", "abcd1234", "2019CS10123"] {
            assert!(
                matches!(
                    ProgramCode::detect(bad),
                    Err(AuditError::InvalidIdentifier { .. })
                ),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn parses_bare_codes_only() {
        assert_eq!("me1".parse::<ProgramCode>().unwrap().as_str(), "ME1");
        assert!("me1190001".parse::<ProgramCode>().is_err());
    }
}
