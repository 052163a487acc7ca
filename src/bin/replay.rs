//! Headless driver which replays a traversal of the default tree, logging every step.
//!
//! ```text
//! bst-replay [ORDER] [+KEY | -KEY]...
//! ```
//! `ORDER` is one of `preorder`, `inorder` or `postorder` and defaults to `inorder`. Every `+KEY` inserts a key into the tree before the replay, every `-KEY` removes one. Timings are read from `REPLAY_TICK_MS` and `REPLAY_LINGER_MS`.

#[macro_use]
extern crate tracing;

use bst_replay::{parse_key, PlaybackConfig, Scheduler, Session, TraversalOrder};
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let order = match args.first() {
        Some(arg) if !arg.starts_with(&['+', '-'][..]) => Some(arg.parse::<TraversalOrder>()?),
        _ => None,
    };
    if order.is_some() {
        args.remove(0);
    }
    let order = order.unwrap_or(TraversalOrder::Inorder);

    let mut session = Session::<i64>::with_default_tree();
    for arg in args {
        if let Some(key) = arg.strip_prefix('+') {
            if let Err(err) = session.insert(parse_key(key)?) {
                warn!(error = %err, key, "skipping insertion");
            }
        } else if let Some(key) = arg.strip_prefix('-') {
            session.remove(&parse_key(key)?)?;
        } else {
            return Err(format!("unexpected argument {:?}, expected +KEY or -KEY", arg).into());
        }
    }
    info!(keys = ?session.traverse(TraversalOrder::Inorder), "tree ready");

    let config = PlaybackConfig::from_env();
    let scheduler = Scheduler::new(session, config);
    let handle = scheduler.play(order).await?;
    let outcome = handle.join().await?;
    info!(?outcome, "done");
    Ok(())
}
