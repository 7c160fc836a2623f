use std::{error::Error, path::PathBuf};

use clap::{Parser, ValueEnum};
use rusqlite::Connection;
use serde::Serialize;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use saldo_rs::{
    Email,
    balance::{OwnerBalances, owner_balances},
    config::TableConfig,
    currency::format_rupiah,
    filter::{AccountFilter, KindFilter},
    initialize_db,
    pagination::{PageIndicator, PageSize},
    record::get_all_banks,
    table::{SortColumn, SortDirection, SortState, TableAction, TableState, TableView},
    timezone::local_today,
    transaction::{
        TransactionKind, get_all_bank_transactions, get_oldest_transaction_date, get_transactions,
    },
};

/// Print the transactions of one owner as a filtered, sorted and paged table,
/// followed by the bank balances of every owner.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the application SQLite database.
    #[arg(long)]
    db_path: String,

    /// The email of the owner whose transactions are shown.
    #[arg(long)]
    email: String,

    /// Only show transactions mentioning this text.
    #[arg(long)]
    search: Option<String>,

    /// Only show transactions whose description contains this text.
    #[arg(long)]
    description: Option<String>,

    /// INCOME, EXPENSE (or PEMASUKAN, PENGELUARAN), or SEMUA for both.
    #[arg(long, default_value = "SEMUA")]
    kind: String,

    #[arg(long, value_enum, default_value_t = AccountArg::All)]
    account: AccountArg,

    /// Only show transactions from this source. May be repeated.
    #[arg(long, conflicts_with = "destination")]
    source: Vec<String>,

    /// Only show transactions to this destination. May be repeated.
    #[arg(long)]
    destination: Vec<String>,

    /// Only show amounts greater than this.
    #[arg(long, default_value_t = 0.0)]
    above: f64,

    /// Only show amounts less than this.
    #[arg(long, default_value_t = 0.0)]
    below: f64,

    /// Only show amounts equal to this.
    #[arg(long, default_value_t = 0.0)]
    equal: f64,

    #[arg(long, value_enum, default_value_t = SortArg::No)]
    sort: SortArg,

    /// Sort in descending order.
    #[arg(long)]
    desc: bool,

    #[arg(long, default_value_t = 1)]
    page: usize,

    /// One of 10, 15, 25, 50, 75 or 100.
    #[arg(long)]
    page_size: Option<usize>,

    /// File path to a JSON table config.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print JSON instead of a table.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AccountArg {
    All,
    Bank,
    Cash,
}

impl From<AccountArg> for AccountFilter {
    fn from(account: AccountArg) -> Self {
        match account {
            AccountArg::All => AccountFilter::All,
            AccountArg::Bank => AccountFilter::Bank,
            AccountArg::Cash => AccountFilter::Cash,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortArg {
    No,
    Date,
    Description,
    Kind,
    Source,
    Destination,
    Amount,
    Bank,
}

impl From<SortArg> for SortColumn {
    fn from(sort: SortArg) -> Self {
        match sort {
            SortArg::No => SortColumn::No,
            SortArg::Date => SortColumn::Date,
            SortArg::Description => SortColumn::Description,
            SortArg::Kind => SortColumn::Kind,
            SortArg::Source => SortColumn::Source,
            SortArg::Destination => SortColumn::Destination,
            SortArg::Amount => SortColumn::Amount,
            SortArg::Bank => SortColumn::Bank,
        }
    }
}

#[derive(Serialize)]
struct Report<'a> {
    table: TableView<'a>,
    owners: Vec<OwnerBalances>,
}

fn main() -> Result<(), Box<dyn Error>> {
    setup_logging();

    let args = Args::parse();

    let email = Email::new(&args.email)?;
    let config = match &args.config {
        Some(path) => TableConfig::load(path)?,
        None => TableConfig::default(),
    };

    let connection = Connection::open(&args.db_path)?;
    initialize_db(&connection)?;

    let transactions = get_transactions(&email, &connection)?;
    let oldest = get_oldest_transaction_date(&email, &connection)?;
    let today = local_today(&config.timezone)?;
    tracing::info!(
        "Loaded {} transactions for {email}, today is {today}",
        transactions.len()
    );

    let table = TableState::for_dates(oldest, today, &config);
    let table = actions_from_args(&args)?
        .into_iter()
        .fold(table, TableState::apply);
    let view = table.view(&transactions);

    let banks = get_all_banks(&connection)?;
    let bank_transactions = get_all_bank_transactions(&connection)?;
    let owners = owner_balances(&banks, &bank_transactions);

    if args.json {
        let report = Report {
            table: view,
            owners,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_table(&view);
        println!();
        print_owner_balances(&owners);
    }

    Ok(())
}

fn setup_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Turn the command line filters into table actions.
///
/// The page is set last since every other action goes back to the first page.
fn actions_from_args(args: &Args) -> Result<Vec<TableAction>, saldo_rs::Error> {
    let kind = if args.kind.trim().eq_ignore_ascii_case("SEMUA") {
        KindFilter::All
    } else {
        KindFilter::Only(args.kind.parse::<TransactionKind>()?)
    };

    let direction = if args.desc {
        SortDirection::Desc
    } else {
        SortDirection::Asc
    };

    let mut actions = vec![
        TableAction::SetKind(kind),
        TableAction::SetAccount(args.account.into()),
        TableAction::SetAmountAbove(args.above),
        TableAction::SetAmountBelow(args.below),
        TableAction::SetAmountEqual(args.equal),
    ];

    if let Some(search) = &args.search {
        actions.push(TableAction::SetSearch(search.clone()));
    }

    if let Some(description) = &args.description {
        actions.push(TableAction::SetDescription(description.clone()));
    }

    actions.extend(args.source.iter().cloned().map(TableAction::ToggleSource));
    actions.extend(
        args.destination
            .iter()
            .cloned()
            .map(TableAction::ToggleDestination),
    );

    actions.push(TableAction::SetSort(SortState::new(args.sort.into(), direction)));

    if let Some(page_size) = args.page_size {
        actions.push(TableAction::SetPageSize(PageSize::new(page_size)?));
    }

    actions.push(TableAction::SetPage(args.page));

    Ok(actions)
}

fn print_table(view: &TableView) {
    println!(
        "{:>4}  {:<10}  {:<7}  {:<24}  {:<16}  {:<16}  {:>16}",
        "No", "Tanggal", "Jenis", "Keterangan", "Sumber", "Tujuan", "Nominal"
    );

    for row in &view.rows {
        println!(
            "{:>4}  {:<10}  {:<7}  {:<24}  {:<16}  {:<16}  {:>16}",
            row.no,
            row.date.to_string(),
            row.kind.as_str(),
            row.description,
            row.source.as_deref().unwrap_or("-"),
            row.destination.as_deref().unwrap_or("-"),
            format_rupiah(row.signed_amount()),
        );
    }

    if view.rows.is_empty() {
        println!("Tidak ada transaksi.");
    }

    println!();
    println!(
        "{} transactions, page {} of {} ({} per page)",
        view.total_records,
        view.page,
        view.page_count,
        view.page_size.get()
    );

    let links: Vec<String> = view
        .indicators
        .iter()
        .map(|indicator| match indicator {
            PageIndicator::Page(page) => page.to_string(),
            PageIndicator::CurrentPage(page) => format!("[{page}]"),
            PageIndicator::Ellipsis => "...".to_owned(),
            PageIndicator::Back(_) => "<".to_owned(),
            PageIndicator::Next(_) => ">".to_owned(),
        })
        .collect();

    if !links.is_empty() {
        println!("{}", links.join(" "));
    }

    println!("Saldo: {}", format_rupiah(view.total_balance));
}

fn print_owner_balances(owners: &[OwnerBalances]) {
    for owner in owners {
        println!("{}", owner.email);

        for bank in &owner.banks {
            println!(
                "  {:<20}  {:>16}",
                bank.bank.name.as_ref(),
                format_rupiah(bank.balance)
            );
        }

        println!("  {:<20}  {:>16}", "Total", format_rupiah(owner.total_balance));
    }
}
