use std::fmt;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use cipher_core::model::{Mapping, QuizMode};
use services::{AnswerService, HttpAnswerConfig, HttpAnswerService, LocalAnswerService, QuizController};
use tracing_subscriber::EnvFilter;
use ui::{QuizVm, TerminalApp, TerminalConfig};

const DEFAULT_ADDR: &str = "127.0.0.1:5000";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidAddr { raw: String },
    InvalidUrl { raw: String },
    InvalidFeedbackMs { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidAddr { raw } => write!(f, "invalid --addr value: {raw}"),
            ArgsError::InvalidUrl { raw } => write!(f, "invalid --url value: {raw}"),
            ArgsError::InvalidFeedbackMs { raw } => write!(f, "invalid --feedback-ms value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- play    [--url <base_url>] [--no-shuffle] [--reverse] [--feedback-ms <ms>]");
    eprintln!("  cargo run -p app -- serve   [--addr <host:port>] [--no-shuffle] [--reverse]");
    eprintln!("  cargo run -p app -- mapping");
    eprintln!();
    eprintln!("Without --url, play runs against an in-process answer service.");
    eprintln!("--reverse shows Al Bhed letters and asks for the English ones.");
    eprintln!("Defaults for serve:");
    eprintln!("  --addr {DEFAULT_ADDR}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  CIPHER_QUIZ_URL, CIPHER_QUIZ_TIMEOUT_SECS, CIPHER_QUIZ_ADDR, CIPHER_QUIZ_SHUFFLE, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Play,
    Serve,
    Mapping,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "play" => Some(Self::Play),
            "serve" => Some(Self::Serve),
            "mapping" => Some(Self::Mapping),
            _ => None,
        }
    }
}

fn shuffle_from_env() -> bool {
    std::env::var("CIPHER_QUIZ_SHUFFLE")
        .map(|value| !matches!(value.trim().to_ascii_lowercase().as_str(), "0" | "false" | "no"))
        .unwrap_or(true)
}

#[derive(Debug)]
struct PlayArgs {
    remote: Option<HttpAnswerConfig>,
    shuffle: bool,
    mode: QuizMode,
    feedback_delay: Duration,
}

#[derive(Debug)]
struct ServeArgs {
    addr: SocketAddr,
    shuffle: bool,
    mode: QuizMode,
}

impl PlayArgs {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut remote = HttpAnswerConfig::from_env();
        let mut shuffle = shuffle_from_env();
        let mut mode = QuizMode::default();
        let mut feedback_delay = ui::terminal::DEFAULT_FEEDBACK_DELAY;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--url" => {
                    let value = require_value(args, "--url")?;
                    let trimmed = value.trim();
                    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
                        return Err(ArgsError::InvalidUrl { raw: value });
                    }
                    let timeout = remote.as_ref().map_or(
                        Some(services::http_answer_service::DEFAULT_TIMEOUT),
                        |config| config.timeout,
                    );
                    remote = Some(HttpAnswerConfig::new(trimmed).with_timeout(timeout));
                }
                "--no-shuffle" => shuffle = false,
                "--reverse" => mode = QuizMode::AlBhedToEnglish,
                "--feedback-ms" => {
                    let value = require_value(args, "--feedback-ms")?;
                    let ms: u64 = value
                        .trim()
                        .parse()
                        .map_err(|_| ArgsError::InvalidFeedbackMs { raw: value.clone() })?;
                    feedback_delay = Duration::from_millis(ms);
                }
                "-h" | "--help" => {
                    print_usage();
                    std::process::exit(0);
                }
                other => return Err(ArgsError::UnknownArg(other.to_string())),
            }
        }

        Ok(Self {
            remote,
            shuffle,
            mode,
            feedback_delay,
        })
    }
}

impl ServeArgs {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let raw_addr = std::env::var("CIPHER_QUIZ_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.into());
        let mut addr = parse_addr(raw_addr)?;
        let mut shuffle = shuffle_from_env();
        let mut mode = QuizMode::default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--addr" => addr = parse_addr(require_value(args, "--addr")?)?,
                "--no-shuffle" => shuffle = false,
                "--reverse" => mode = QuizMode::AlBhedToEnglish,
                "-h" | "--help" => {
                    print_usage();
                    std::process::exit(0);
                }
                other => return Err(ArgsError::UnknownArg(other.to_string())),
            }
        }

        Ok(Self {
            addr,
            shuffle,
            mode,
        })
    }
}

fn parse_addr(raw: String) -> Result<SocketAddr, ArgsError> {
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidAddr { raw })
}

async fn play(args: PlayArgs) -> Result<(), Box<dyn std::error::Error>> {
    let service: Arc<dyn AnswerService> = match args.remote {
        Some(config) => {
            tracing::info!(url = %config.base_url, mode = %args.mode, "using remote answer service");
            Arc::new(HttpAnswerService::new(config.with_mode(args.mode))?)
        }
        None => Arc::new(
            LocalAnswerService::default()
                .with_shuffle(args.shuffle)
                .with_mode(args.mode),
        ),
    };

    let mut vm = QuizVm::new(QuizController::new(service));
    let input = tokio::io::BufReader::new(tokio::io::stdin());
    let config = TerminalConfig {
        feedback_delay: args.feedback_delay,
    };
    let mut terminal = TerminalApp::new(input, tokio::io::stdout(), Mapping::al_bhed(), config);
    terminal.run(&mut vm).await?;
    Ok(())
}

async fn serve(args: ServeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let listener = tokio::net::TcpListener::bind(args.addr).await?;
    let answers = LocalAnswerService::default()
        .with_shuffle(args.shuffle)
        .with_mode(args.mode);
    let state = server::AppState::new(answers);
    server::serve(listener, state).await?;
    Ok(())
}

fn print_mapping() {
    for row in ui::vm::map_mapping_rows(&Mapping::al_bhed()) {
        match row.right {
            Some(right) => println!(
                "{} -> {}    {} -> {}",
                row.left.source, row.left.cipher, right.source, right.cipher
            ),
            None => println!("{} -> {}", row.left.source, row.left.cipher),
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    let cmd = match argv.first().map(String::as_str) {
        None => Command::Play,
        Some(first) if first.starts_with('-') => Command::Play,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with('-') {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let report = |e: ArgsError| {
        eprintln!("{e}");
        print_usage();
        e
    };

    match cmd {
        Command::Play => play(PlayArgs::parse(&mut iter).map_err(report)?).await,
        Command::Serve => serve(ServeArgs::parse(&mut iter).map_err(report)?).await,
        Command::Mapping => {
            if let Some(extra) = iter.next() {
                return Err(report(ArgsError::UnknownArg(extra)).into());
            }
            print_mapping();
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
