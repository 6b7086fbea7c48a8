use std::fmt;
use thiserror::Error;

/// Number of digits in a DoD ID.
pub const IDENTIFIER_LEN: usize = 6;

/// Why a candidate DoD ID was rejected.
///
/// All variants display the same operator-facing message; the variant is kept
/// for logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    #[error("DoD ID must be 6 digits.")]
    Empty,
    #[error("DoD ID must be 6 digits.")]
    WrongLength(usize),
    #[error("DoD ID must be 6 digits.")]
    NonDigit(char),
}

/// A validated six-digit DoD ID.
///
/// The original text is kept verbatim, leading zeros included.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(String);

impl Identifier {
    /// Validate a candidate ID: ASCII decimal digits only, exactly 6 characters.
    pub fn parse(candidate: &str) -> Result<Self, IdentifierError> {
        if candidate.is_empty() {
            return Err(IdentifierError::Empty);
        }
        if let Some(c) = candidate.chars().find(|c| !c.is_ascii_digit()) {
            return Err(IdentifierError::NonDigit(c));
        }
        // All ASCII at this point, so bytes == chars
        if candidate.len() != IDENTIFIER_LEN {
            return Err(IdentifierError::WrongLength(candidate.len()));
        }
        Ok(Self(candidate.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for Identifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifier() {
        let id = Identifier::parse("123456").unwrap();
        assert_eq!(id.as_str(), "123456");
    }

    #[test]
    fn test_leading_zeros_preserved() {
        let id = Identifier::parse("000042").unwrap();
        assert_eq!(id.to_string(), "000042");
    }

    #[test]
    fn test_too_short() {
        assert_eq!(
            Identifier::parse("12345"),
            Err(IdentifierError::WrongLength(5))
        );
    }

    #[test]
    fn test_too_long() {
        assert_eq!(
            Identifier::parse("1234567"),
            Err(IdentifierError::WrongLength(7))
        );
    }

    #[test]
    fn test_non_digit() {
        assert_eq!(
            Identifier::parse("12a456"),
            Err(IdentifierError::NonDigit('a'))
        );
        assert!(Identifier::parse("-12345").is_err());
        assert!(Identifier::parse(" 12345").is_err());
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        // Arabic-Indic digits are numeric but not ASCII
        assert!(Identifier::parse("١٢٣٤٥٦").is_err());
    }

    #[test]
    fn test_empty() {
        assert_eq!(Identifier::parse(""), Err(IdentifierError::Empty));
    }

    #[test]
    fn test_error_message() {
        let err = Identifier::parse("abc").unwrap_err();
        assert_eq!(err.to_string(), "DoD ID must be 6 digits.");
    }

    #[test]
    fn test_from_str() {
        let id: Identifier = "654321".parse().unwrap();
        assert_eq!(id.as_ref(), "654321");
    }
}
