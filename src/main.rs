// try - jump into a scratch folder, or make a new one
//
// Main entry point. Parses args and dispatches to handlers. Only the final
// `cd` line goes to stdout; everything else goes to stderr.

use std::env;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tryscratch_lib::{
    core::{selector, Launcher, MatchState, QueryCleaner},
    shell::{cd_directive, snippet, Shell, ShellDetector},
    ui, Config, Database, Result, TryError,
};

/// Log filter, e.g. `TRY_LOG=debug`
const LOG_ENV: &str = "TRY_LOG";

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();

    if args.is_empty() {
        print_usage();
        return ExitCode::FAILURE;
    }

    let result = match args[0].as_str() {
        "init" => handle_init(&args[1..]),
        "--stats" => handle_stats().await,
        "version" | "-V" | "--version" => {
            eprintln!("try v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        "help" | "-h" | "--help" => {
            print_usage();
            Ok(())
        }
        // Everything after `--` is a query, even `init`
        "--" => handle_query(&args[1..]).await,
        _ => handle_query(&args).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e.user_message());
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn handle_query(args: &[String]) -> Result<()> {
    let query = QueryCleaner::new().from_args(args);

    let config = Config::from_env()?;
    config.ensure_base_dir()?;

    let db = Arc::new(Database::new(&config.db_path).await?);
    let launcher = Launcher::new(Arc::clone(&db), &config.base_dir);
    let mut strategy = selector::for_terminal();

    let result = launcher.resolve(&query, strategy.as_mut()).await;
    db.close().await;
    let resolved = result?;

    if resolved.state == MatchState::SingleMatch {
        eprintln!("{}", ui::folder_notice(&resolved.folder, config.color));
    }
    debug!(path = %resolved.path().display(), created = resolved.created, "emitting directive");

    // The one line the shell function evaluates
    println!("{}", cd_directive(resolved.path()));

    Ok(())
}

fn handle_init(args: &[String]) -> Result<()> {
    let shell = match args.first() {
        Some(name) => Shell::from_name(name)
            .ok_or_else(|| TryError::Config(format!("Unsupported shell: {}", name)))?,
        None => ShellDetector::detect().unwrap_or(Shell::Bash),
    };

    print!("{}", snippet(shell));
    Ok(())
}

async fn handle_stats() -> Result<()> {
    let config = Config::from_env()?;
    config.ensure_base_dir()?;

    let db = Database::new(&config.db_path).await?;
    let stats = db.stats().await;
    db.close().await;
    let stats = stats?;

    eprintln!("\ntry status");
    eprintln!("{}", "=".repeat(60));
    eprintln!("  Base directory: {}", config.base_dir.display());
    eprintln!("  Database:       {}", db.path().display());
    eprintln!("  Folders:        {}", stats.total_folders);
    eprintln!("  Total opens:    {}", stats.total_opens);
    eprintln!("{}", "=".repeat(60));

    Ok(())
}

fn print_usage() {
    eprintln!(
        r#"try v{} - scratch folders you can find again

USAGE:
    try <query...>         Open the best-matching folder, or create <date>-<query>
    try -- <query...>      Same, for queries that look like commands
    try init [shell]       Print shell integration (bash, zsh, fish)
    try --stats            Show where folders live and how many there are
    try version            Show version
    try help               Show this help

SETUP:
    bash/zsh:  eval "$(command try init)"      in ~/.bashrc or ~/.zshrc
    fish:      command try init fish | source  in ~/.config/fish/config.fish

ENVIRONMENT:
    TRY_PATH   Base directory (default: ~/try)
    TRY_LOG    Log filter, e.g. debug (default: warn)
"#,
        env!("CARGO_PKG_VERSION")
    );
}
