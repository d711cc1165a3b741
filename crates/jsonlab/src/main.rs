use std::time::Duration;

use crate::prelude::*;
use crate::prelude::println;
use clap::Parser;
use jsonlab_core::resource::DEFAULT_BASE_URL;

mod callbacks;
mod demo;
mod display;
mod error;
mod fetch;
mod prelude;
mod promises;
mod sequential;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Fetch posts, comments, users and todos from a REST API and rank them using callbacks, deferred values and sequential async/await"
)]
pub struct App {
    #[command(subcommand)]
    pub command: Option<SubCommands>,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Base endpoint serving /posts, /comments, /users and /todos
    #[clap(long, env = "JSONLAB_BASE_URL", global = true, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Delay between demo parts, in milliseconds
    #[clap(long, env = "JSONLAB_PAUSE_MS", global = true, default_value = "1000")]
    pause_ms: u64,

    /// Output as JSON, one line per section
    #[clap(long, global = true)]
    json: bool,

    /// Whether to display additional information.
    #[clap(long, env = "JSONLAB_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, clap::Subcommand)]
pub enum SubCommands {
    /// Part A: posts and comments reported through callbacks
    Callbacks,

    /// Part B: users and todos as deferred values
    Promises,

    /// Part C: all four collections one after another
    Sequential,

    /// Run parts A, B and C (default)
    All,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();
    let global = app.global;

    let api = fetch::Api::new(global.base_url.clone());

    if global.verbose {
        println!("API Base: {}", api.base_url());
        println!();
    }

    match app.command.unwrap_or(SubCommands::All) {
        SubCommands::Callbacks => {
            demo::drain(callbacks::launch(&api, global.json)).await;
            Ok(())
        }
        SubCommands::Promises => {
            demo::drain(promises::launch(&api, global.json)).await;
            Ok(())
        }
        SubCommands::Sequential => sequential::report(&api, global.json)
            .await
            .wrap_err("Sequential batch failed"),
        SubCommands::All => {
            demo::run_all(&api, Duration::from_millis(global.pause_ms), global.json).await
        }
    }
}
