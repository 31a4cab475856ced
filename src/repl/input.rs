//! Line input
//!
//! Sources of input lines for the command loop.

use std::future::Future;
use std::io::{self, BufRead};
use std::thread;

use tokio::io::{AsyncBufRead, Lines};
use tokio::sync::mpsc;
use tracing::debug;

/// Lines buffered between the stdin reader thread and the loop.
const STDIN_BUFFER: usize = 16;

/// Something the command loop can pull lines from.
///
/// `Ok(None)` means end of input.
pub trait LineSource {
    fn next_line(&mut self) -> impl Future<Output = io::Result<Option<String>>>;
}

impl<R: AsyncBufRead + Unpin> LineSource for Lines<R> {
    fn next_line(&mut self) -> impl Future<Output = io::Result<Option<String>>> {
        Lines::next_line(self)
    }
}

impl LineSource for mpsc::Receiver<io::Result<String>> {
    fn next_line(&mut self) -> impl Future<Output = io::Result<Option<String>>> {
        async move { self.recv().await.transpose() }
    }
}

/// Reads stdin on a dedicated OS thread and forwards each line.
///
/// The blocking read lives outside the runtime, so the process can exit
/// while a read is still pending. The thread ends at end of input or once
/// the receiver is dropped.
pub fn stdin_lines() -> mpsc::Receiver<io::Result<String>> {
    let (tx, rx) = mpsc::channel(STDIN_BUFFER);

    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            if tx.blocking_send(line).is_err() {
                break;
            }
        }
        debug!("Stdin reader finished");
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncBufReadExt;

    #[tokio::test]
    async fn test_reader_lines() {
        let mut lines = AsyncBufReadExt::lines("map\nexplore area\n".as_bytes());

        assert_eq!(LineSource::next_line(&mut lines).await.unwrap(), Some("map".to_string()));
        assert_eq!(
            LineSource::next_line(&mut lines).await.unwrap(),
            Some("explore area".to_string())
        );
        assert_eq!(LineSource::next_line(&mut lines).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_channel_lines() {
        let (tx, mut rx) = mpsc::channel(4);
        tx.send(Ok("help".to_string())).await.unwrap();
        tx.send(Err(io::Error::other("broken pipe"))).await.unwrap();
        drop(tx);

        assert_eq!(rx.next_line().await.unwrap(), Some("help".to_string()));
        assert!(rx.next_line().await.is_err());
        assert_eq!(rx.next_line().await.unwrap(), None);
    }
}
