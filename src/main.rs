use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use artistscope::{cli, config, error, logging};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Default log filter, overridden by RUST_LOG
    #[clap(long, global = true, default_value = "info,tower_http=info")]
    log_level: String,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the web application
    Serve(ServeOptions),

    /// Search artists by name
    Search(SearchOptions),

    /// List the albums of an artist
    Albums(AlbumsOptions),

    /// List the tracks of an album
    Tracks(TracksOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ServeOptions {
    /// Address to bind, overrides SERVER_ADDRESS
    #[clap(long)]
    pub addr: Option<std::net::SocketAddr>,

    /// Open the landing page in the default browser
    #[clap(long)]
    pub open: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// Artist name to search for
    pub term: String,
}

#[derive(Parser, Debug, Clone)]
pub struct AlbumsOptions {
    /// Spotify artist id
    pub artist_id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct TracksOptions {
    /// Spotify album id
    pub album_id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Command::Completions(opt) = &cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    if let Err(e) = logging::init_tracing(&cli.log_level) {
        error!("Invalid log level {}. Err: {}", cli.log_level, e);
    }

    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let mut settings = match config::Settings::from_env() {
        Ok(s) => s,
        Err(e) => error!(
            "Invalid configuration: {}\n Put the values in {} or export them.",
            e,
            config::env_file_path().display()
        ),
    };

    match cli.command {
        Command::Serve(opt) => {
            if let Some(addr) = opt.addr {
                settings.server_addr = addr;
            }
            cli::serve(settings, opt.open).await
        }
        Command::Search(opt) => cli::search(settings, opt.term).await,
        Command::Albums(opt) => cli::albums(settings, opt.artist_id).await,
        Command::Tracks(opt) => cli::tracks(settings, opt.album_id).await,
        Command::Completions(_) => {}
    }
}
