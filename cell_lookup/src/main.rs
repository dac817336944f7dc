use cell_lookup::{
    cli::{search, settings, Msg},
    Settings,
};
use clap::Parser;
use std::path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, clap::Subcommand)]
pub enum Cmd {
    Search(search::Cmd),
    Settings(settings::Cmd),
}

impl Cmd {
    pub async fn run(self, settings: Settings) -> anyhow::Result<Msg> {
        match self {
            Self::Search(cmd) => cmd.run(&settings).await,
            Self::Settings(cmd) => cmd.run(&settings),
        }
    }
}

#[derive(Debug, clap::Parser)]
#[clap(version = env!("CARGO_PKG_VERSION"))]
#[clap(about = "Cell location lookup by phone number and date")]
pub struct Cli {
    /// Optional configuration file to use. If present the toml file at the
    /// given path will be loaded. Environment variables can override the
    /// settings in the given file.
    #[clap(short = 'c')]
    config: Option<path::PathBuf>,

    #[clap(subcommand)]
    cmd: Cmd,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<Msg> {
        let settings = Settings::new(self.config)?;

        tracing_subscriber::registry()
            .with(tracing_subscriber::EnvFilter::new(&settings.log))
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();

        self.cmd.run(settings).await
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let msg = cli.run().await?;
    if msg.is_error() {
        eprintln!("{msg}");
        std::process::exit(1);
    }
    println!("{msg}");
    Ok(())
}
