use clap::Parser;

mod headless;

#[derive(Parser)]
#[command(name = "fitpro", about = "FitPro — fitness companion for the terminal")]
struct Cli {
    /// Write debug logs to /tmp/fitpro-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,

    /// Run one search and print the results instead of starting the TUI.
    #[arg(long, requires = "query")]
    headless: bool,

    /// Query to run in headless mode.
    #[arg(long)]
    query: Option<String>,

    /// Maximum number of results to print in headless mode.
    #[arg(long)]
    limit: Option<usize>,

    /// Output format for headless mode.
    #[arg(long, value_enum, default_value_t = headless::OutputFormat::Raw)]
    format: headless::OutputFormat,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/fitpro-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("fitpro debug log started — tail -f /tmp/fitpro-debug.log");
    }

    if cli.headless {
        // `requires` guarantees the query flag is present here.
        let query = cli.query.unwrap_or_default();
        let limit = cli.limit.unwrap_or(fitpro_core::search::DEFAULT_RESULT_LIMIT);
        return headless::run(&query, limit, cli.format, &mut std::io::stdout());
    }

    fitpro_tui::run()
}
