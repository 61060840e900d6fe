//! Interactive terminal session for tuning and exporting heightmaps.
//!
//! Commands are read line by line. Parameter edits trigger a debounced
//! regeneration; each generated heightmap is written as a preview thumbnail
//! and can be exported at full resolution.

pub mod command;
pub mod config;
pub mod controls;
pub mod debounce;
pub mod errors;
pub mod session;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

pub use command::Command;
pub use config::StudioConfig;
pub use errors::{Result, StudioError};
pub use session::{Flow, Session};

/// Runs a session until `quit` or end of input.
///
/// Command errors are reported and the session keeps going; only input
/// failures end it early.
///
/// Generation is serial: each render runs to completion on the task that
/// drives this loop, and no new command is read meanwhile. Run it on a
/// current-thread runtime so a long render cannot starve other workers.
pub async fn run_session<R>(config: StudioConfig, input: R) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let (mut session, mut updates) = Session::new(config);
    session.update_now()?;

    let mut lines = input.lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                let outcome = Command::parse(&line).and_then(|command| match command {
                    Some(command) => session.handle(command),
                    None => Ok(Flow::Continue),
                });
                match outcome {
                    Ok(Flow::Continue) => {}
                    Ok(Flow::Quit) => break,
                    Err(e) => {
                        tracing::warn!("{e}");
                        eprintln!("error: {e}");
                    }
                }
            }
            Some(update) = updates.recv() => {
                if let Err(e) = session.apply(update) {
                    tracing::error!("Regeneration failed: {e}");
                }
            }
        }
    }

    // A delivered snapshot is only applied if nothing newer happened since.
    if let Ok(update) = updates.try_recv() {
        session.apply(update)?;
    }
    session.flush()?;
    tracing::info!("Session finished");
    Ok(())
}
