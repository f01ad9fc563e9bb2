#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
mod algolia;
mod arg_parse;
mod common;
mod config;
mod render;
mod sender;

use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::algolia::prelude::SearchFetcher;
use crate::arg_parse::CmdArgs;
use crate::common::prelude::RunOutcome;
use crate::config::AppConfig;

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let Ok(args) = CmdArgs::parse(std::env::args().collect()) else {
        return ExitCode::from(2);
    };

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "refusing to run with incomplete configuration");
            return ExitCode::from(2);
        }
    };

    let sender = config.get_sender(args.dry_run);
    let fetcher = SearchFetcher::new(args.get_strategy());

    match fetcher.run(&sender, args.send_empty).await {
        RunOutcome::Sent(count) => {
            info!(count, "run finished, digest sent");
            ExitCode::SUCCESS
        }
        RunOutcome::Empty => {
            info!("run finished, nothing to send");
            ExitCode::SUCCESS
        }
        RunOutcome::FetchFailed | RunOutcome::DeliveryFailed => ExitCode::from(1),
    }
}
