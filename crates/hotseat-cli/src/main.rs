//! `hotseat` - two-player chess on one terminal.

use clap::Parser;
use hotseat_cli::app::App;
use hotseat_cli::config::Config;
use hotseat_core::Color;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Two players, one board, one keyboard.
#[derive(Parser)]
#[command(name = "hotseat")]
#[command(about = "Two-player chess on a shared terminal")]
struct Args {
    /// Config file to use instead of searching for hotseat.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Let Black make the first move
    #[arg(long)]
    black_first: bool,

    /// Reject moves that leave your own king in check
    #[arg(long)]
    forbid_self_check: bool,

    /// Turn the board toward the player to move
    #[arg(long)]
    flip: bool,

    /// JSON file holding the running score
    #[arg(long)]
    score_file: Option<PathBuf>,
}

impl Args {
    /// Command line flags override the file.
    fn apply(&self, config: &mut Config) {
        if self.black_first {
            config.rules.first_to_move = Color::Black;
        }
        if self.forbid_self_check {
            config.rules.forbid_self_check = true;
        }
        if self.flip {
            config.display.flip_board = true;
        }
        if let Some(path) = &self.score_file {
            config.display.score_file = path.clone();
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    args.apply(&mut config);
    tracing::debug!(?config, "starting");

    let mut app = App::new(&config)?;
    let stdin = std::io::stdin();
    app.run(stdin.lock(), std::io::stdout())
}
