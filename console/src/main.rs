// inventory_console/src/main.rs

use anyhow::Context;
use clap::Parser;
use inventory_console::terminal::{read_line, StdinConfirmer, TerminalNotifier};
use inventory_console::{
  FilePreferenceStore, Flow, HttpProductApi, MemoryPreferenceStore, PreferenceStore, ProductConsole, Shell,
};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Browse and edit products on an inventory server", long_about = None)]
struct Cli {
  /// Base URL of the inventory server
  #[arg(long, env = "INVENTORY_API_URL", default_value = "http://127.0.0.1:8080")]
  api_url: String,

  /// Where the last-used category is remembered between sessions
  #[arg(long, env = "INVENTORY_PREFS", default_value = ".inventory-console.json")]
  prefs: PathBuf,

  /// Keep preferences for this session only
  #[arg(long)]
  no_persist: bool,

  /// Answer "yes" to every confirmation prompt
  #[arg(short, long)]
  yes: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
  dotenvy::dotenv().ok(); // Load .env file if present
  let cli = Cli::parse();

  // Logs go to stderr so they never interleave with the table on stdout.
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .with_writer(std::io::stderr)
    .init();

  let api = HttpProductApi::new(&cli.api_url).context("Failed to build HTTP client")?;
  let preferences: Arc<dyn PreferenceStore> = if cli.no_persist {
    Arc::new(MemoryPreferenceStore::new())
  } else {
    Arc::new(FilePreferenceStore::new(&cli.prefs))
  };
  tracing::info!(api_url = %api.base_url(), "Starting inventory console.");

  let console = ProductConsole::new(
    Arc::new(api),
    Arc::new(StdinConfirmer::new(cli.yes)),
    Arc::new(TerminalNotifier),
    preferences,
  );
  let mut shell = Shell::new(console);
  let mut stdout = std::io::stdout();

  shell.start(&mut stdout).await?;
  loop {
    write!(stdout, "> ")?;
    stdout.flush()?;
    let Some(line) = read_line()? else {
      break;
    };
    if shell.handle_line(&line, &mut stdout).await? == Flow::Quit {
      break;
    }
  }
  Ok(())
}
