mod aspect;
mod client;
mod config;
mod constants;
mod error;
mod files;
mod history;
mod images;
mod overlay;
mod print_help;
mod record;
mod session;
mod utils;

use crate::client::GeminiClient;
use crate::config::GeminiConfig;
use crate::print_help::print_help;
use crate::utils::{parse_args, process_command};
use std::{env, error::Error};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.iter().any(|arg| arg == "-help" || arg == "-h") {
        print_help();
        return Ok(());
    }

    let (command, options) = parse_args(&args)?;
    let client = GeminiClient::new(GeminiConfig::from_env())?;
    let config = client.config();
    log::debug!(
        "Using {} at {} (quality {:?}, image {:?}, timeout {:?})",
        config.model,
        config.base_url,
        config.quality_placement,
        config.image_placement,
        config.timeout
    );

    process_command(&client, command, &options).await
}
