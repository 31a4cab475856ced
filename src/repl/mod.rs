//! REPL Module
//!
//! The interactive command loop: read a line, parse it, run the command,
//! print the outcome.

pub mod command;
pub mod input;
pub mod session;

use std::future::{self, Future};
use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{info, warn};

use crate::error::Result;

pub use command::{clean_input, Command, COMMANDS};
pub use input::{stdin_lines, LineSource};
pub use session::{Flow, Pagination, Session};

/// Prompt printed before each line of input.
pub const PROMPT: &str = "Pokedex > ";

/// Runs the command loop over `input` until `exit` or end of input.
pub async fn run<R, W>(session: &mut Session, input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    run_until(session, input.lines(), out, future::pending::<()>()).await
}

/// Runs the command loop until `exit`, end of input, or `shutdown` completes.
///
/// `shutdown` is raced against both waiting for input and running a
/// command, so an in-flight request is abandoned when it fires. Command
/// failures are printed to `out` and the loop continues; only I/O errors on
/// `input` or `out` end it early.
pub async fn run_until<L, W, S>(
    session: &mut Session,
    mut input: L,
    out: &mut W,
    shutdown: S,
) -> Result<()>
where
    L: LineSource,
    W: Write,
    S: Future,
{
    tokio::pin!(shutdown);

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let line = tokio::select! {
            line = input.next_line() => line?,
            _ = &mut shutdown => {
                info!("Shutdown requested while waiting for input");
                writeln!(out)?;
                return Ok(());
            }
        };
        let Some(line) = line else {
            writeln!(out)?;
            return Ok(());
        };

        let words = clean_input(&line);
        if words.is_empty() {
            continue;
        }

        let command = match Command::parse(&words) {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "{}", e)?;
                continue;
            }
        };

        let outcome = tokio::select! {
            outcome = session.execute(command, out) => Some(outcome),
            _ = &mut shutdown => None,
        };

        match outcome {
            None => {
                info!("Shutdown requested while running {:?}", words[0]);
                writeln!(out)?;
                return Ok(());
            }
            Some(Ok(Flow::Exit)) => return Ok(()),
            Some(Ok(Flow::Continue)) => {}
            Some(Err(e)) => {
                warn!("Command {:?} failed: {}", words[0], e);
                writeln!(out, "{}", e)?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tokio::io::BufReader;

    use crate::api::PokeApiClient;
    use crate::cache::ResponseCache;
    use crate::config::Config;

    fn session() -> Session {
        let config = Config {
            api_base_url: "http://127.0.0.1:9".to_string(),
            ..Config::default()
        };
        let cache = ResponseCache::new(Duration::from_secs(300)).unwrap();
        let client = PokeApiClient::new(&config, cache).unwrap();
        Session::with_rng(client, StdRng::seed_from_u64(3))
    }

    #[tokio::test]
    async fn test_shutdown_while_waiting_for_input() {
        let mut session = session();
        // Writer half kept alive so the reader never sees end of input
        let (_writer, reader) = tokio::io::duplex(64);
        let mut out = Vec::new();

        let result = tokio::time::timeout(
            Duration::from_secs(1),
            run_until(
                &mut session,
                BufReader::new(reader).lines(),
                &mut out,
                tokio::time::sleep(Duration::from_millis(50)),
            ),
        )
        .await
        .expect("loop should return once shutdown fires");

        result.unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Pokedex > \n");
    }

    #[tokio::test]
    async fn test_shutdown_with_open_channel() {
        let mut session = session();
        let (tx, rx) = tokio::sync::mpsc::channel::<std::io::Result<String>>(4);
        tx.send(Ok("pokedex".to_string())).await.unwrap();
        let mut out = Vec::new();

        tokio::time::timeout(
            Duration::from_secs(1),
            run_until(
                &mut session,
                rx,
                &mut out,
                tokio::time::sleep(Duration::from_millis(50)),
            ),
        )
        .await
        .expect("loop should return once shutdown fires")
        .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Pokedex > Your Pokedex is empty\nPokedex > \n"
        );
        drop(tx);
    }

    #[tokio::test]
    async fn test_end_of_input_ends_loop() {
        let mut session = session();
        let mut out = Vec::new();

        run(&mut session, "fly\n".as_bytes(), &mut out).await.unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Pokedex > Unknown command\nPokedex > \n"
        );
    }
}
