use std::error::Error;
use std::path::Path;
use std::process::exit;
use std::sync::{Arc, Mutex};

use clap::Parser;
use rusqlite::Connection;
use time::{Duration, OffsetDateTime};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use saldo_rs::{
    Email,
    alert::LogNotifier,
    initialize_db,
    record::{
        ConfirmPrompt, CreateRecordForm, NamedRecord, RecordId, RecordKind, SqliteRecordStore,
    },
    transaction::{Transaction, TransactionKind, create_transaction},
};

/// A utility for creating a test database for saldo_rs.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,

    /// The owner of the generated records and transactions.
    #[arg(long, short, default_value = "budi@contoh.id")]
    email: String,
}

/// Create and populate a database for manual testing.
#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_logging();

    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        Some(extension) if !extension.is_empty() => {}
        _ => {
            eprintln!("Output path must include a file extension (e.g., 'saldo.db').");
            exit(1);
        }
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    let email = Email::new(&args.email)?;

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating sources, destinations and banks...");

    let store = SqliteRecordStore::new(Arc::new(Mutex::new(conn)), email.clone());
    let mut records = Vec::new();

    let salary = add_record(RecordKind::Source, "Gaji", &store, &mut records).await?;
    let family = add_record(RecordKind::Source, "Keluarga", &store, &mut records).await?;
    let shop = add_record(RecordKind::Destination, "Warung", &store, &mut records).await?;
    let market = add_record(RecordKind::Destination, "Pasar", &store, &mut records).await?;
    let electricity = add_record(RecordKind::Destination, "Listrik", &store, &mut records).await?;
    let bca = add_record(RecordKind::Bank, "BCA", &store, &mut records).await?;
    let mandiri = add_record(RecordKind::Bank, "Mandiri", &store, &mut records).await?;

    println!("Creating transactions...");

    let conn = store
        .db_connection
        .lock()
        .map_err(|_| saldo_rs::Error::DatabaseLockError)?;

    let today = OffsetDateTime::now_utc().date();
    let mut count = 0;

    for month in 0..3 {
        let start = today - Duration::days(30 * month);

        let transactions = [
            Transaction::build(TransactionKind::Income, 7_500_000.0, start, "Gaji bulanan")
                .source_id(Some(salary))
                .bank_id(Some(bca)),
            Transaction::build(
                TransactionKind::Income,
                500_000.0,
                start - Duration::days(3),
                "Kiriman orang tua",
            )
            .source_id(Some(family)),
            Transaction::build(
                TransactionKind::Expense,
                350_000.0,
                start - Duration::days(5),
                "Token listrik",
            )
            .destination_id(Some(electricity))
            .bank_id(Some(mandiri)),
            Transaction::build(
                TransactionKind::Expense,
                1_250_000.0,
                start - Duration::days(7),
                "Belanja bulanan",
            )
            .destination_id(Some(market))
            .bank_id(Some(bca)),
        ];

        for transaction in transactions {
            create_transaction(transaction, &email, &conn)?;
            count += 1;
        }

        for day in 0..10 {
            let transaction = Transaction::build(
                TransactionKind::Expense,
                25_000.0 + 5_000.0 * day as f64,
                start - Duration::days(day),
                "Makan siang",
            )
            .destination_id(Some(shop));

            create_transaction(transaction, &email, &conn)?;
            count += 1;
        }
    }

    println!("Created {count} transactions for {email}.");
    println!("Success!");

    Ok(())
}

fn setup_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Add a record through the same form a user fills in, confirming straight away.
async fn add_record(
    kind: RecordKind,
    name: &str,
    store: &SqliteRecordStore,
    records: &mut Vec<NamedRecord>,
) -> Result<RecordId, Box<dyn Error>> {
    let mut form = CreateRecordForm::new(kind);
    form.set_input(name);

    let mut confirm = |_: &ConfirmPrompt| true;
    let record = form
        .submit(records, &mut confirm, store, &mut LogNotifier)
        .await?
        .ok_or_else(|| format!("adding the {kind} \"{name}\" was cancelled"))?;

    let id = record.id;
    records.push(record);

    Ok(id)
}
