//! The email address that identifies the owner of sources, destinations, banks and transactions.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::Error;

/// An email address supplied by the identity provider.
///
/// All reads and writes are scoped to a single owner email.
///
/// Deserializing goes through [Email::new], so invalid addresses are rejected.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct Email(String);

impl Email {
    /// Create and validate an email address.
    ///
    /// Surrounding whitespace is removed.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::InvalidEmail] if `raw_email` is empty or has no '@'.
    pub fn new(raw_email: &str) -> Result<Self, Error> {
        let email = raw_email.trim();

        if !email.is_empty() && email.contains('@') {
            Ok(Self(email.to_owned()))
        } else {
            Err(Error::InvalidEmail(raw_email.to_owned()))
        }
    }

    /// Create a new `Email` without any validation.
    ///
    /// Intended for values that were validated before being stored, e.g. rows read back from the database.
    pub fn new_unchecked(raw_email: &str) -> Self {
        Self(raw_email.to_owned())
    }
}

impl TryFrom<String> for Email {
    type Error = Error;

    fn try_from(raw_email: String) -> Result<Self, Self::Error> {
        Self::new(&raw_email)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod email_tests {
    use crate::{Error, email::Email};

    #[test]
    fn create_email_success() {
        let email = Email::new("  budi@contoh.id ");

        assert_eq!(email.map(|email| email.to_string()), Ok("budi@contoh.id".to_owned()));
    }

    #[test]
    fn create_email_fails_with_no_at_symbol() {
        let email = Email::new("budi.contoh.id");

        assert_eq!(email, Err(Error::InvalidEmail("budi.contoh.id".to_owned())));
    }

    #[test]
    fn create_email_fails_on_whitespace() {
        assert!(matches!(Email::new(" \t"), Err(Error::InvalidEmail(_))));
    }

    #[test]
    fn deserialize_validates_and_trims() {
        let email: Email = serde_json::from_str(r#"" budi@contoh.id ""#).unwrap();

        assert_eq!(email, Email::new_unchecked("budi@contoh.id"));
    }

    #[test]
    fn deserialize_rejects_invalid_email() {
        let got = serde_json::from_str::<Email>(r#""bukan-email""#);

        assert!(got.is_err(), "got {got:?}");
    }

    #[test]
    fn serializes_as_plain_string() {
        let email = Email::new("budi@contoh.id").unwrap();

        assert_eq!(serde_json::to_string(&email).unwrap(), r#""budi@contoh.id""#);
    }
}
