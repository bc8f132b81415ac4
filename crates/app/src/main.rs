mod batch;

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use progression_core::{Credit, CreditTuple};
use services::{
    AppServices, BatchSession, ProgressionApi, ProgressionConfig, ReportExporter,
    SingleSubmission, SubmissionPhase,
};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Parser)]
#[command(name = "progression")]
#[command(about = "University progression calculator")]
struct Cli {
    /// Base URL of the progression calculator
    #[arg(long, global = true, env = "PROGRESSION_API_BASE_URL")]
    api_base_url: Option<String>,
    /// Directory the downloaded report is written to
    #[arg(long, global = true, env = "PROGRESSION_REPORT_DIR")]
    report_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the desktop app (default)
    Ui,
    /// Calculate one outcome
    Calculate {
        #[arg(long, default_value_t = Credit::default())]
        pass: Credit,
        #[arg(long, default_value_t = Credit::default())]
        defer: Credit,
        #[arg(long, default_value_t = Credit::default())]
        fail: Credit,
    },
    /// Submit every `pass,defer,fail` row of a file and summarise the outcomes
    Batch {
        /// CSV file, one student per line
        file: PathBuf,
        /// Also write Progression.txt to the report directory
        #[arg(long)]
        export: bool,
    },
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn progression(&self) -> Arc<dyn ProgressionApi> {
        self.services.progression()
    }

    fn report_exporter(&self) -> Arc<ReportExporter> {
        self.services.report_exporter()
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_services(cli: &Cli) -> Result<AppServices> {
    let mut config = ProgressionConfig::from_env().context("invalid calculator configuration")?;
    if let Some(base_url) = cli.api_base_url.as_deref() {
        config = config
            .with_base_url(base_url)
            .context("invalid --api-base-url")?;
    }
    let exporter = cli
        .report_dir
        .clone()
        .map_or_else(ReportExporter::from_env, ReportExporter::new);
    let services = AppServices::new_http(config, exporter)?;
    info!(
        base_url = %services.config().base_url(),
        timeout_ms = services.config().timeout().as_millis(),
        "calculator configured"
    );
    Ok(services)
}

fn launch_ui(services: AppServices) {
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("University Progression Calculator")
            .with_always_on_top(false),
    );

    info!("launching desktop window");
    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
}

async fn run_calculate(services: &AppServices, credits: CreditTuple) -> Result<ExitCode> {
    let api = services.progression();
    let mut submission = SingleSubmission::new();
    match submission.submit(api.as_ref(), credits).await? {
        SubmissionPhase::Succeeded(outcome) => {
            println!("Outcome: {outcome}");
            Ok(ExitCode::SUCCESS)
        }
        SubmissionPhase::Failed(message) => {
            eprintln!("Error: {message}");
            Ok(ExitCode::FAILURE)
        }
        SubmissionPhase::Idle | SubmissionPhase::Submitting => Ok(ExitCode::FAILURE),
    }
}

async fn run_batch(services: &AppServices, file: &Path, export: bool) -> Result<ExitCode> {
    let input = std::fs::File::open(file)
        .with_context(|| format!("failed to open {}", file.display()))?;
    let rows = batch::read_credit_rows(input)?;

    let api = services.progression();
    let mut session = BatchSession::new();
    let mut failures = 0_usize;
    for credits in rows {
        match session.submit(api.as_ref(), credits).await? {
            SubmissionPhase::Succeeded(outcome) => println!("{outcome} - {credits}"),
            SubmissionPhase::Failed(message) => {
                failures += 1;
                eprintln!("Error: {message} ({credits})");
            }
            SubmissionPhase::Idle | SubmissionPhase::Submitting => {}
        }
    }

    let histogram = session.histogram();
    println!();
    for bar in histogram.bars() {
        let count = usize::try_from(bar.count).unwrap_or(usize::MAX);
        println!(
            "{:<10} {:>3} {}",
            bar.category.short_label(),
            bar.count,
            "*".repeat(count)
        );
    }
    println!("{} outcomes in total.", histogram.total_records());

    if export {
        let path = services.report_exporter().export(session.records())?;
        println!("Report written to {}", path.display());
    }

    Ok(if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn run() -> Result<ExitCode> {
    // Missing .env is fine; real environment variables still apply.
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    init_tracing();

    let services = build_services(&cli)?;
    let command = cli.command.unwrap_or(Command::Ui);

    if matches!(command, Command::Ui) {
        launch_ui(services);
        return Ok(ExitCode::SUCCESS);
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    runtime.block_on(async {
        match command {
            Command::Calculate { pass, defer, fail } => {
                run_calculate(&services, CreditTuple::new(pass, defer, fail)).await
            }
            Command::Batch { file, export } => run_batch(&services, &file, export).await,
            Command::Ui => Ok(ExitCode::SUCCESS),
        }
    })
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            // At this layer (binary glue), printing once is fine.
            eprintln!("{err:#}");
            ExitCode::from(2)
        }
    }
}
