use clap::Parser;
use tracing_subscriber::EnvFilter;

use smashing_wallpaper::Opt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let opt = Opt::parse();

    smashing_wallpaper::run(opt).await
}
