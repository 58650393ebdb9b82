use anyhow::{Context, Result};
use todotable::config::Config;
use todotable::{logger, ui};

fn print_usage() {
    println!("Usage: todotable [--config <path>] [--generate-config]");
}

#[tokio::main]
async fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let mut config_path = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--generate-config" => {
                let path = Config::get_default_config_path()?;
                return Config::generate_default_config(path);
            }
            "--config" => {
                let path = args.next().context("--config requires a path")?;
                config_path = Some(path);
            }
            "-h" | "--help" => {
                print_usage();
                return Ok(());
            }
            other => {
                print_usage();
                anyhow::bail!("Unknown argument: {}", other);
            }
        }
    }

    let config = match config_path {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };

    logger::init(&config.logging)?;
    log::info!("Starting todotable {}", env!("CARGO_PKG_VERSION"));

    ui::run_app(&config).await?;

    Ok(())
}
