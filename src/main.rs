use clap::{Args, Parser, Subcommand};
use nimbus::{server, Config, ElsQuery, TextBuffer};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "nimbus", about = "Nimbus: equidistant letter sequence search")]
struct Cli {
    /// Config file to use instead of ~/.config/nimbus/config.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Corpus text file. Overrides `[corpus] path`.
    #[arg(long, global = true)]
    corpus: Option<PathBuf>,

    /// Use the corpus as-is instead of stripping non-letters.
    #[arg(long, global = true)]
    raw: bool,

    /// Write debug logs to /tmp/nimbus-debug.log (tail -f to inspect).
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Locate a term at a fixed skip and print the matrix around it.
    Search {
        term: String,
        #[arg(long)]
        skip: i64,
        #[command(flatten)]
        output: OutputArgs,
        /// Also list every start index at this skip.
        #[arg(long)]
        all: bool,
    },
    /// Try every skip in a range, smallest first.
    Scan {
        term: String,
        /// Smallest skip to try. Defaults to `[search] min_skip`.
        #[arg(long)]
        min: Option<i64>,
        /// Largest skip to try. Defaults to `[search] max_skip`.
        #[arg(long)]
        max: Option<i64>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Serve the HTTP API.
    Serve {
        /// Address to bind. Defaults to `[server] bind`.
        #[arg(long)]
        bind: Option<String>,
    },
    /// Browse matrices interactively.
    View {
        term: Option<String>,
        #[arg(long)]
        skip: Option<i64>,
    },
}

#[derive(Args)]
struct OutputArgs {
    /// Matrix edge length (odd). Defaults to `[matrix] size`.
    #[arg(long)]
    size: Option<usize>,
    /// Print the report as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.debug) {
        eprintln!("error: {e:#}");
        return ExitCode::from(2);
    }

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "nimbus failed");
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "config unavailable, using defaults");
            Config::defaults()
        }),
    };

    match cli.command {
        Command::Search { term, skip, output, all } => {
            let corpus = load_corpus(cli.corpus, cli.raw, &config)?;
            let mut query = ElsQuery::new(term).skip(skip).all(all);
            query.size = output.size;
            report(&corpus, &query, &config, output.json)
        }
        Command::Scan { term, min, max, output } => {
            let corpus = load_corpus(cli.corpus, cli.raw, &config)?;
            let query = ElsQuery {
                min_skip: min,
                max_skip: max,
                size: output.size,
                ..ElsQuery::new(term)
            };
            report(&corpus, &query, &config, output.json)
        }
        Command::Serve { bind } => {
            let corpus = load_corpus(cli.corpus, cli.raw, &config)?;
            let bind = bind.unwrap_or_else(|| config.server.bind.clone());
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server::serve(server::AppState::new(corpus, config), &bind))?;
            Ok(ExitCode::SUCCESS)
        }
        Command::View { term, skip } => {
            let corpus = load_corpus(cli.corpus, cli.raw, &config)?;
            nimbus_tui::run(corpus, config, term, skip)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Print a report; exit code 1 signals "not found".
fn report(corpus: &TextBuffer, query: &ElsQuery, config: &Config, json: bool) -> anyhow::Result<ExitCode> {
    let report = nimbus::run_query(corpus, query, config)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.to_string().trim_end());
    }
    Ok(if report.found { ExitCode::SUCCESS } else { ExitCode::from(1) })
}

fn load_corpus(flag: Option<PathBuf>, raw: bool, config: &Config) -> anyhow::Result<TextBuffer> {
    let path = flag
        .or_else(|| config.corpus.path.clone())
        .ok_or_else(|| anyhow::anyhow!("no corpus given: pass --corpus or set [corpus] path"))?;
    let normalise = config.corpus.normalize && !raw;
    Ok(nimbus::corpus::load(&path, normalise)?)
}

fn init_logging(debug: bool) -> anyhow::Result<()> {
    if debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/nimbus-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("nimbus debug log started, tail -f /tmp/nimbus-debug.log");
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .init();
    }
    Ok(())
}
