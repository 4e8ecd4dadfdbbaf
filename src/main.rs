//! yt-summarize CLI entry point

use std::process::ExitCode;

use clap::Parser;

use yt_summarize::cli::{
    app::{load_merged_config, resolve_options, run_summarize, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    logging::init_logging,
    presenter::Presenter,
};
use yt_summarize::domain::config::{AppConfig, ObsidianConfig};
use yt_summarize::domain::video::VideoId;
use yt_summarize::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let presenter = Presenter::new();

    // Handle subcommands
    if let Some(Commands::Config { action }) = cli.command {
        let store = XdgConfigStore::new();
        if let Err(e) = handle_config_command(action, &store, &presenter).await {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        return ExitCode::SUCCESS;
    }

    let Some(reference) = cli.video else {
        presenter.error("Missing video URL or ID");
        return ExitCode::from(EXIT_USAGE_ERROR);
    };

    let video_id = match reference.parse::<VideoId>() {
        Ok(id) => id,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    // Build CLI config from args
    let cli_config = AppConfig {
        api_key: None, // API key comes from env/file only
        language: cli.language,
        save: if cli.no_obsidian { Some(false) } else { None },
        obsidian: Some(ObsidianConfig {
            api_key: None,
            port: cli.port,
            folder: cli.folder,
        }),
    };

    let config = load_merged_config(cli_config).await;

    run_summarize(resolve_options(video_id, &config)).await
}
