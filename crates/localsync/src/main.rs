use std::io;
use std::path::PathBuf;

use clap::Parser;
use localsync::app::{App, PresenceTask, localsync_home};
use localsync::domain::presence::PresenceSimulator;
use localsync::infra::logging;
use localsync::infra::seed::WorkspaceSeed;
use tracing::info;

#[derive(Parser)]
#[command(name = "localsync", version)]
#[command(about = "Terminal editor screen for a mock LocalSync Studio workspace", long_about = None)]
struct Cli {
    /// JSON fixture with the project tree, default file and collaborators
    #[arg(long, value_name = "PATH")]
    seed: Option<PathBuf>,

    /// Log file location, defaults to `~/.localsync/localsync.log`
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Keep collaborator cursors still
    #[arg(long)]
    no_presence: bool,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let log_path = cli
        .log_file
        .unwrap_or_else(|| logging::default_log_path(&localsync_home()));
    logging::init(&log_path)?;

    let seed = match &cli.seed {
        Some(path) => WorkspaceSeed::load(path).map_err(io::Error::other)?,
        None => WorkspaceSeed::builtin(),
    };
    info!(
        seed = ?cli.seed,
        files = seed.files.len(),
        collaborators = seed.collaborators.len(),
        "starting localsync"
    );

    let mut app = App::new(seed);
    let presence = (!cli.no_presence)
        .then(|| PresenceTask::spawn(app.collaborators(), PresenceSimulator::from_entropy()));

    let result = localsync::runtime::run(&mut app).await;

    if let Some(presence) = presence {
        presence.shutdown().await;
    }
    info!("localsync exited");

    result
}
