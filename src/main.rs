use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use kwanza_cli::cli::{
    handle_audit_command, handle_budget_command, handle_debt_command, handle_export_command,
    handle_goal_command, handle_loan_command, handle_report_command, handle_transaction_command,
    AuditArgs, BudgetCommands, DebtCommands, ExportCommands, GoalCommands, LoanArgs,
    ReportCommands, Session, TransactionCommands,
};
use kwanza_cli::config::{FinancePaths, Settings};
use kwanza_cli::state::FinanceState;
use kwanza_cli::storage::Storage;

#[derive(Parser)]
#[command(
    name = "kwanza",
    author = "Kaylee Beyene",
    version,
    about = "Terminal personal-finance tracker",
    long_about = "kwanza tracks income and expenses, category budgets, savings goals \
                  and debts, and turns them into summaries and reports from the \
                  command line."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory and default settings
    Init,

    /// Show paths and settings, or change a setting
    Config {
        #[command(subcommand)]
        action: Option<ConfigCommands>,
    },

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Savings goal commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Debt tracking commands
    #[command(subcommand)]
    Debt(DebtCommands),

    /// Loan payment calculator
    Loan(LoanArgs),

    /// Reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export data
    #[command(subcommand)]
    Export(ExportCommands),

    /// Show recent changes from the audit log
    Audit(AuditArgs),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Set a setting, e.g. `series_months 12` or `log_level debug`
    Set { key: String, value: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = FinancePaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("kwanza_cli={}", settings.log_level)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let command = match cli.command {
        Some(command) => command,
        None => {
            println!("kwanza - personal finance from the terminal");
            println!();
            println!("Run 'kwanza --help' for usage information.");
            return Ok(());
        }
    };

    match command {
        Commands::Init => {
            println!("Initializing kwanza at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            let storage = Storage::new(paths.clone())?;
            if !paths.finance_file().exists() {
                storage.save_snapshot(&FinanceState::default())?;
            }
            tracing::info!(path = %paths.base_dir().display(), "initialized");
            println!("Initialization complete!");
            println!();
            println!("Run 'kwanza transaction add' to record your first transaction.");
        }
        Commands::Config { action } => {
            if let Some(ConfigCommands::Set { key, value }) = action {
                settings.set(&key, &value)?;
                settings.save(&paths)?;
                println!("Set {} = {}", key, value);
                return Ok(());
            }

            println!("kwanza Configuration");
            println!("====================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Exports:          {}", paths.exports_dir().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!("Initialized:      {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  currency.locale          {}", settings.currency.locale);
            println!("  currency.code            {}", settings.currency.code);
            println!("  currency.symbol          {}", settings.currency.symbol);
            println!(
                "  currency.fraction_digits {}",
                settings.currency.fraction_digits
            );
            println!("  series_months            {}", settings.series_months);
            println!("  user_id                  {}", settings.user_id);
            println!("  log_level                {}", settings.log_level);
        }
        Commands::Transaction(cmd) => {
            let mut session = Session::open(paths, settings)?;
            handle_transaction_command(&mut session, cmd)?;
        }
        Commands::Budget(cmd) => {
            let mut session = Session::open(paths, settings)?;
            handle_budget_command(&mut session, cmd)?;
        }
        Commands::Goal(cmd) => {
            let mut session = Session::open(paths, settings)?;
            handle_goal_command(&mut session, cmd)?;
        }
        Commands::Debt(cmd) => {
            let mut session = Session::open(paths, settings)?;
            handle_debt_command(&mut session, cmd)?;
        }
        Commands::Loan(args) => {
            let session = Session::open(paths, settings)?;
            handle_loan_command(&session, args)?;
        }
        Commands::Report(cmd) => {
            let session = Session::open(paths, settings)?;
            handle_report_command(&session, cmd)?;
        }
        Commands::Export(cmd) => {
            let session = Session::open(paths, settings)?;
            handle_export_command(&session, cmd)?;
        }
        Commands::Audit(args) => {
            let session = Session::open(paths, settings)?;
            handle_audit_command(&session, args)?;
        }
    }

    Ok(())
}
