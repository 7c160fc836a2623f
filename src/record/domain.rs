//! Core domain types for the named records a transaction can refer to.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{Error, email::Email};

/// The kinds of named record a user can create.
///
/// Sources and destinations are the endpoints money moves between, banks
/// are the accounts that hold it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    /// Where money came from (sumber).
    Source,
    /// Where money went to (tujuan).
    Destination,
    /// A bank account.
    Bank,
}

impl RecordKind {
    /// The database table that stores records of this kind.
    pub(crate) fn table_name(self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Destination => "destination",
            Self::Bank => "bank",
        }
    }

    /// Whether a new record must have a name that is unique for its owner.
    ///
    /// Only sources and destinations are checked, they are used as filter facets.
    pub fn requires_unique_name(self) -> bool {
        matches!(self, Self::Source | Self::Destination)
    }

    /// The kind with its first letter capitalised, for the start of a sentence.
    pub fn title(self) -> &'static str {
        match self {
            Self::Source => "Source",
            Self::Destination => "Destination",
            Self::Bank => "Bank",
        }
    }
}

impl Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.table_name())
    }
}

/// A validated, non-empty record name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct RecordName(String);

impl RecordName {
    /// Create a name for a record of type `kind`.
    ///
    /// Leading and trailing whitespace is removed.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyRecordName] if `name` is empty or only whitespace.
    pub fn new(name: &str, kind: RecordKind) -> Result<Self, Error> {
        let name = name.trim();

        if name.is_empty() {
            Err(Error::EmptyRecordName(kind))
        } else {
            Ok(Self(name.to_owned()))
        }
    }

    /// Create a record name without validation.
    ///
    /// The caller should ensure that the string is not empty.
    ///
    /// This function has `_unchecked` in the name but is not `unsafe`, because if the non-empty invariant is violated it will cause incorrect behaviour but not affect memory safety.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_owned())
    }

    /// Compare two names ignoring case, e.g. "Gaji" and "gaji" are the same name.
    pub fn eq_ignore_case(&self, other: &str) -> bool {
        self.0.to_lowercase() == other.to_lowercase()
    }
}

impl AsRef<str> for RecordName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for RecordName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Database identifier for a source, destination or bank.
pub type RecordId = i64;

/// A source, destination or bank owned by a single user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct NamedRecord {
    pub id: RecordId,
    pub name: RecordName,
    /// The owner of the record.
    pub email: Email,
}

/// Where money came from.
pub type Source = NamedRecord;
/// Where money went to.
pub type Destination = NamedRecord;
/// A bank account, its balance is derived from its transactions.
pub type Bank = NamedRecord;

/// Find a record in `existing` whose name matches `name` ignoring case.
pub fn find_duplicate<'a>(name: &RecordName, existing: &'a [NamedRecord]) -> Option<&'a NamedRecord> {
    existing
        .iter()
        .find(|record| record.name.eq_ignore_case(name.as_ref()))
}
