use std::time::Duration;

use crate::fetch::Api;
use crate::prelude::*;
use crate::prelude::{eprintln, println};
use futures::future::join_all;
use tokio::task::JoinHandle;

const BANNER: &str = "Laboratory Work 4 - HTTP Protocol and Async Rust";

/// Run parts A, B and C in order, pausing between them
///
/// Parts A and B are only launched: the demo moves on after the pause whether
/// or not their units have settled. Anything still in flight is awaited at the
/// very end so no output is lost when the process exits.
pub async fn run_all(api: &Api, pause: Duration, json: bool) -> Result<()> {
    if !json {
        println!("{BANNER}");
        println!("{}\n", "=".repeat(BANNER.len()));
        println!("PART A - CALLBACKS");
    }

    let mut pending = crate::callbacks::launch(api, json);
    tokio::time::sleep(pause).await;

    if !json {
        println!("PART B - PROMISES");
    }

    pending.extend(crate::promises::launch(api, json));
    tokio::time::sleep(pause).await;

    if !json {
        println!("PART C - ASYNC/AWAIT");
    }

    if let Err(err) = crate::sequential::report(api, json).await {
        eprintln!("Error in async/await: {err}");
    }

    if !json {
        println!("\nLaboratory work completed successfully!");
        println!("All requests have been processed.");
    }

    drain(pending).await;

    Ok(())
}

/// Wait for launched units so their reports reach the terminal
pub async fn drain(pending: Vec<JoinHandle<()>>) {
    for joined in join_all(pending).await {
        if let Err(err) = joined {
            log::warn!("Unit did not finish reporting: {err}");
        }
    }
}
