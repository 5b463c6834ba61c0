// src/bin/cli.rs
use seek_dash::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    seek_dash::log::init();
    cli::run()
}
