use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sift", version, about = "A keyboard-driven terminal todo list")]
struct Cli {
    /// Data directory holding tasks.json and logs.json (default: current directory)
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Append to debug.log instead of truncating it on startup
    #[arg(long)]
    append_log: bool,
}

fn main() {
    let cli = Cli::parse();
    let dir = cli.dir.unwrap_or_else(|| PathBuf::from("."));

    init_debug_log(&dir, cli.append_log);

    if let Err(e) = sift::tui::run(&dir) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Route tracing output to debug.log in the data directory.
/// Failure to open the file just means no debug log.
fn init_debug_log(dir: &std::path::Path, append: bool) {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(append)
        .truncate(!append)
        .open(dir.join("debug.log"));

    if let Ok(file) = file {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Arc::new(file))
            .with_ansi(false)
            .init();
    }
}
