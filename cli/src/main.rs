mod chart;
mod report;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use teaestate_core::service::payment::compute_payment_for_labels;
use teaestate_core::time::{check_range, format_date};
use teaestate_core::{
    expand_names, parse_human_date, AnalysisUseCase, AppConfig, DailyDraft, DailyRecordService, FileRosterRepository,
    FileSheetRepository,
};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "teaestate")]
#[command(about = "Daily work, payment and weather records for a tea estate", long_about = None)]
struct Cli {
    /// Directory holding the roster and daily sheets
    #[arg(long, global = true, env = "TEAESTATE_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Compute one task's payment (usage: payment --period 7.30-4.30 --work-type Tea_Plucking --amount 22)
    Payment {
        #[arg(long)]
        period: String,
        #[arg(long)]
        work_type: String,
        #[arg(long, default_value_t = 0)]
        amount: u32,
    },
    /// Print an empty draft for a day, to be filled in and submitted
    Draft {
        /// Date (YYYY-MM-DD, today, yesterday, -3d, mon, ...)
        #[arg(default_value = "today")]
        date: String,
    },
    /// Commit a draft file and store it as that day's sheet
    Submit {
        /// Path to a draft JSON file
        draft: PathBuf,
    },
    /// Show one day's sheet
    Show {
        #[arg(default_value = "today")]
        date: String,
    },
    /// Weather, worker and section progress over a date range
    Analyze {
        #[arg(long, default_value = "som")]
        from: String,
        #[arg(long, default_value = "today")]
        to: String,
        /// Worker name or code (repeatable, default: whole roster)
        #[arg(long = "worker")]
        workers: Vec<String>,
        /// Section name or code (repeatable, default: every section)
        #[arg(long = "section")]
        sections: Vec<String>,
    },
    /// Chart average temperature and humidity over a date range
    Chart {
        #[arg(long, default_value = "som")]
        from: String,
        #[arg(long, default_value = "today")]
        to: String,
    },
}

fn init_tracing() {
    let use_json = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string()) == "json";

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "warn,teaestate=info,teaestate_core=info".into());

    // stdout is reserved for tables
    if use_json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn resolve_range(from: &str, to: &str, today: NaiveDate) -> Result<(NaiveDate, NaiveDate)> {
    let start = parse_human_date(from, today).with_context(|| format!("Invalid --from '{}'", from))?;
    let end = parse_human_date(to, today).with_context(|| format!("Invalid --to '{}'", to))?;
    check_range(start, end)?;
    Ok((start, end))
}

// Only commands that read or write sheets create the sheet directory.
fn sheet_service(config: &AppConfig) -> Result<DailyRecordService<FileSheetRepository>> {
    Ok(DailyRecordService::new(FileSheetRepository::new(config.sheets_dir())?))
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = AppConfig::resolve(cli.data_dir)?;
    debug!(data_dir = %config.data_dir.display(), "configuration resolved");

    let rosters = FileRosterRepository::new(config.roster_path());
    let today = Local::now().date_naive();

    match cli.command {
        Commands::Payment {
            period,
            work_type,
            amount,
        } => {
            let payment = compute_payment_for_labels(&period, &work_type, amount);
            println!("{} / {} / {} kg: Rs {}", period, work_type, amount, payment);
        }
        Commands::Draft { date } => {
            let date = parse_human_date(&date, today)?;
            let draft = DailyDraft::new(date, &rosters.load()?);
            println!("{}", serde_json::to_string_pretty(&draft)?);
        }
        Commands::Submit { draft } => {
            let content = fs::read_to_string(&draft).with_context(|| format!("Failed to read {}", draft.display()))?;
            let draft: DailyDraft =
                serde_json::from_str(&content).with_context(|| format!("Failed to parse draft {}", draft.display()))?;
            let record = sheet_service(&config)?.submit(draft)?;
            println!("Saved sheet {}", record.sheet_name());
            report::show_day(&record);
        }
        Commands::Show { date } => {
            let date = parse_human_date(&date, today)?;
            match sheet_service(&config)?.get_record(date)? {
                Some(record) => report::show_day(&record),
                None => println!("No data for {}.", format_date(date)),
            }
        }
        Commands::Analyze {
            from,
            to,
            workers,
            sections,
        } => {
            let (start, end) = resolve_range(&from, &to, today)?;
            let roster = rosters.load()?;
            let workers = expand_names(&workers, &roster.workers)?;
            let sections = expand_names(&sections, &roster.sections)?;

            let service = sheet_service(&config)?;
            let report = AnalysisUseCase::new(service.repository()).analyze(start, end, &workers, &sections)?;
            report::show_analysis(&report);
        }
        Commands::Chart { from, to } => {
            let (start, end) = resolve_range(&from, &to, today)?;
            let service = sheet_service(&config)?;
            let no_names: [&str; 0] = [];
            let report = AnalysisUseCase::new(service.repository()).analyze(start, end, &no_names, &no_names)?;
            chart::run(report.weather, report.missing_dates.len())?;
        }
    }
    Ok(())
}
