use clap::Parser;
use color_eyre::eyre::Result;
use std::io;

use composer_changelogs::{cli, command, config::Config, error::ChangelogsError};

fn initialize_logger(debug: bool) -> Result<(), ChangelogsError> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("composer_changelogs")
        .build();

    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli_args = cli::Args::parse();

    initialize_logger(cli_args.debug)?;

    let config = Config::load(cli_args.config.as_deref())?;

    command::execute(cli_args.command, &config, io::stdout().lock())?;

    Ok(())
}
