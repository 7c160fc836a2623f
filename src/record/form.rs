//! The single field form for adding a source, destination or bank.
//!
//! Submitting goes through these steps:
//! 1. the name is validated locally, an empty name or (for sources and
//!    destinations) a name that already exists is rejected without asking
//!    for confirmation,
//! 2. the user confirms the addition,
//! 3. the write is awaited,
//! 4. the user is told whether it worked.

use crate::{
    Error,
    alert::{Alert, Notifier},
    record::{NamedRecord, RecordKind, RecordName, RecordStore, find_duplicate},
};

/// The text of a confirm-then-proceed dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub title: String,
    pub body: String,
    pub confirm_label: String,
    pub cancel_label: String,
}

impl ConfirmPrompt {
    /// The prompt shown before adding a record of type `kind`.
    pub fn add_record(kind: RecordKind) -> Self {
        Self {
            title: "Confirm Addition".to_owned(),
            body: format!("Are you sure you want to add this {kind}?"),
            confirm_label: "Add".to_owned(),
            cancel_label: "Cancel".to_owned(),
        }
    }
}

/// Asks the user to confirm an action.
pub trait ConfirmGate {
    /// Show `prompt` and return `true` if the user chose to proceed.
    fn confirm(&mut self, prompt: &ConfirmPrompt) -> bool;
}

impl<F> ConfirmGate for F
where
    F: FnMut(&ConfirmPrompt) -> bool,
{
    fn confirm(&mut self, prompt: &ConfirmPrompt) -> bool {
        self(prompt)
    }
}

/// The state of the form for adding one kind of record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRecordForm {
    kind: RecordKind,
    input: String,
    loading: bool,
}

impl CreateRecordForm {
    /// Create an empty form for records of type `kind`.
    pub fn new(kind: RecordKind) -> Self {
        Self {
            kind,
            input: String::new(),
            loading: false,
        }
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    /// The current contents of the name field.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, value: &str) {
        value.clone_into(&mut self.input);
    }

    /// Whether a submission is in flight. The form should be disabled while this is `true`.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Check the name field against the records the user already has.
    ///
    /// `existing` is only consulted for kinds that require unique names.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::EmptyRecordName] if the field is empty or only whitespace,
    /// - or [Error::DuplicateRecordName] if a record in `existing` has the same name ignoring case.
    pub fn validate(&self, existing: &[NamedRecord]) -> Result<RecordName, Error> {
        let name = RecordName::new(&self.input, self.kind)?;

        if self.kind.requires_unique_name() && find_duplicate(&name, existing).is_some() {
            return Err(Error::DuplicateRecordName(self.kind, name.to_string()));
        }

        Ok(name)
    }

    /// Validate, confirm and write the record in the name field.
    ///
    /// Every outcome except cancellation is reported through `notifier`.
    /// Validation errors never reach `gate` or `store`. The write is awaited
    /// before the input is cleared and success is reported.
    ///
    /// Returns `Ok(None)` if the user cancelled at the confirmation prompt.
    ///
    /// # Errors
    /// Returns the validation error or the error from `store`.
    pub async fn submit<G, S, N>(
        &mut self,
        existing: &[NamedRecord],
        gate: &mut G,
        store: &S,
        notifier: &mut N,
    ) -> Result<Option<NamedRecord>, Error>
    where
        G: ConfirmGate,
        S: RecordStore,
        N: Notifier,
    {
        let name = match self.validate(existing) {
            Ok(name) => name,
            Err(error) => {
                notifier.show(error.to_alert());
                return Err(error);
            }
        };

        if !gate.confirm(&ConfirmPrompt::add_record(self.kind)) {
            tracing::debug!("user cancelled adding {} \"{name}\"", self.kind);
            return Ok(None);
        }

        self.loading = true;
        let result = store.create_record(self.kind, name).await;
        self.loading = false;

        match result {
            Ok(record) => {
                tracing::info!("created {} {} \"{}\"", self.kind, record.id, record.name);
                self.input.clear();
                notifier.show(Alert::success(
                    "Success",
                    &format!("{} added successfully", self.kind.title()),
                ));
                Ok(Some(record))
            }
            Err(error @ Error::DuplicateRecordName(_, _)) => {
                notifier.show(error.to_alert());
                Err(error)
            }
            Err(error) => {
                tracing::error!("could not create {}: {error}", self.kind);
                notifier.show(Alert::error(
                    "Error",
                    &format!("Could not add the {}. Try again later.", self.kind),
                ));
                Err(error)
            }
        }
    }
}


#[cfg(test)]
mod submit_tests {
    use std::cell::{Cell, RefCell};

    use rusqlite::Connection;

    use crate::{
        Error,
        alert::{Alert, Severity},
        email::Email,
        record::{
            ConfirmPrompt, CreateRecordForm, NamedRecord, RecordKind, RecordName, RecordStore,
        },
    };

    /// A store that records every write and optionally fails.
    struct FakeStore {
        writes: RefCell<Vec<(RecordKind, RecordName)>>,
        fail: bool,
        next_id: Cell<i64>,
    }

    impl FakeStore {
        fn new() -> Self {
            Self {
                writes: RefCell::new(Vec::new()),
                fail: false,
                next_id: Cell::new(1),
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::new()
            }
        }

        fn write_count(&self) -> usize {
            self.writes.borrow().len()
        }
    }

    impl RecordStore for FakeStore {
        async fn create_record(
            &self,
            kind: RecordKind,
            name: RecordName,
        ) -> Result<NamedRecord, Error> {
            self.writes.borrow_mut().push((kind, name.clone()));

            if self.fail {
                return Err(Error::SqlError(rusqlite::Error::InvalidQuery));
            }

            let id = self.next_id.get();
            self.next_id.set(id + 1);

            Ok(NamedRecord {
                id,
                name,
                email: Email::new_unchecked("budi@contoh.id"),
            })
        }
    }

    fn existing_source(name: &str) -> Vec<NamedRecord> {
        vec![NamedRecord {
            id: 7,
            name: RecordName::new_unchecked(name),
            email: Email::new_unchecked("budi@contoh.id"),
        }]
    }

    #[tokio::test]
    async fn creates_record_after_confirmation() {
        let store = FakeStore::new();
        let mut alerts: Vec<Alert> = Vec::new();
        let mut prompts = Vec::new();
        let mut gate = |prompt: &ConfirmPrompt| {
            prompts.push(prompt.clone());
            true
        };
        let mut form = CreateRecordForm::new(RecordKind::Source);
        form.set_input(" Gaji ");

        let got = form.submit(&[], &mut gate, &store, &mut alerts).await;

        let record = got.expect("submit failed").expect("want a record");
        assert_eq!(record.name.as_ref(), "Gaji");
        assert_eq!(prompts, [ConfirmPrompt::add_record(RecordKind::Source)]);
        assert_eq!(store.write_count(), 1);
        assert_eq!(form.input(), "");
        assert!(!form.is_loading());
        assert_eq!(
            alerts,
            [Alert::success("Success", "Source added successfully")]
        );
    }

    #[tokio::test]
    async fn duplicate_is_rejected_without_prompt_or_write() {
        let store = FakeStore::new();
        let mut alerts: Vec<Alert> = Vec::new();
        let mut prompt_count = 0;
        let mut gate = |_: &ConfirmPrompt| {
            prompt_count += 1;
            true
        };
        let mut form = CreateRecordForm::new(RecordKind::Source);
        form.set_input("Gaji");

        let got = form
            .submit(&existing_source("gaji"), &mut gate, &store, &mut alerts)
            .await;

        assert_eq!(
            got,
            Err(Error::DuplicateRecordName(
                RecordKind::Source,
                "Gaji".to_owned()
            ))
        );
        assert_eq!(prompt_count, 0);
        assert_eq!(store.write_count(), 0);
        assert_eq!(form.input(), "Gaji");
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].severity, Severity::Error);
    }

    #[tokio::test]
    async fn empty_name_is_rejected_without_prompt_or_write() {
        let store = FakeStore::new();
        let mut alerts: Vec<Alert> = Vec::new();
        let mut gate = |_: &ConfirmPrompt| -> bool { panic!("should not prompt") };
        let mut form = CreateRecordForm::new(RecordKind::Bank);

        let got = form.submit(&[], &mut gate, &store, &mut alerts).await;

        assert_eq!(got, Err(Error::EmptyRecordName(RecordKind::Bank)));
        assert_eq!(store.write_count(), 0);
        assert_eq!(alerts.len(), 1);
        assert!(alerts[0].is_error());
    }

    #[tokio::test]
    async fn cancelling_does_not_write_or_notify() {
        let store = FakeStore::new();
        let mut alerts: Vec<Alert> = Vec::new();
        let mut gate = |_: &ConfirmPrompt| false;
        let mut form = CreateRecordForm::new(RecordKind::Destination);
        form.set_input("Warung");

        let got = form.submit(&[], &mut gate, &store, &mut alerts).await;

        assert_eq!(got, Ok(None));
        assert_eq!(store.write_count(), 0);
        assert!(alerts.is_empty());
        assert_eq!(form.input(), "Warung");
    }

    #[tokio::test]
    async fn store_failure_keeps_input_and_reports_error() {
        let store = FakeStore::failing();
        let mut alerts: Vec<Alert> = Vec::new();
        let mut gate = |_: &ConfirmPrompt| true;
        let mut form = CreateRecordForm::new(RecordKind::Bank);
        form.set_input("BCA");

        let got = form.submit(&[], &mut gate, &store, &mut alerts).await;

        assert!(matches!(got, Err(Error::SqlError(_))));
        assert_eq!(store.write_count(), 1);
        assert_eq!(form.input(), "BCA");
        assert!(!form.is_loading());
        assert_eq!(
            alerts,
            [Alert::error(
                "Error",
                "Could not add the bank. Try again later."
            )]
        );
    }

    #[tokio::test]
    async fn duplicate_from_database_is_reported() {
        use std::sync::{Arc, Mutex};

        use crate::{
            db::initialize,
            record::{SqliteRecordStore, create_record},
        };

        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();
        let owner = Email::new("budi@contoh.id").unwrap();
        create_record(
            RecordKind::Source,
            RecordName::new_unchecked("gaji"),
            &owner,
            &connection,
        )
        .unwrap();
        let store = SqliteRecordStore::new(Arc::new(Mutex::new(connection)), owner);
        let mut alerts: Vec<Alert> = Vec::new();
        let mut gate = |_: &ConfirmPrompt| true;
        let mut form = CreateRecordForm::new(RecordKind::Source);
        form.set_input("Gaji");

        // The caller's list of existing sources is stale, so the database catches the duplicate.
        let got = form.submit(&[], &mut gate, &store, &mut alerts).await;

        assert_eq!(
            got,
            Err(Error::DuplicateRecordName(
                RecordKind::Source,
                "Gaji".to_owned()
            ))
        );
        assert_eq!(alerts.len(), 1);
        assert!(alerts[0].message.contains("already exists"));
    }
}
