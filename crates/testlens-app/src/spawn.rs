//! Background task spawning for async operations

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use testlens_core::SourceLocator;
use testlens_runner::{load, LoadSource};

use crate::message::Message;

/// Load the result set in the background.
///
/// Sends exactly one [`Message::LoadComplete`] or [`Message::LoadFailed`].
pub fn spawn_loader(
    source: LoadSource,
    locator: SourceLocator,
    msg_tx: mpsc::Sender<Message>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let message = match load(source, locator).await {
            Ok(records) => {
                info!("Load finished with {} tests", records.len());
                Message::LoadComplete(records)
            }
            Err(e) => {
                if e.is_fatal() {
                    error!("Load failed: {}", e);
                } else {
                    warn!("Load failed: {}", e);
                }
                Message::LoadFailed(e.to_string())
            }
        };
        let _ = msg_tx.send(message).await;
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_loader_sends_results_once() {
        let mut log = NamedTempFile::new().unwrap();
        writeln!(log, r#"{{"Action":"output","Test":"TestA","Output":"a_test.go:3: bad\n"}}"#).unwrap();
        writeln!(log, r#"{{"Action":"fail","Test":"TestA"}}"#).unwrap();
        writeln!(log, r#"{{"Action":"pass","Test":"TestB"}}"#).unwrap();

        let (tx, mut rx) = mpsc::channel(4);
        spawn_loader(
            LoadSource::File(log.path().to_path_buf()),
            SourceLocator::default(),
            tx,
        )
        .await
        .unwrap();

        match rx.recv().await {
            Some(Message::LoadComplete(records)) => {
                assert_eq!(records.len(), 2);
                assert_eq!(records.failed_count(), 1);
            }
            other => panic!("unexpected message: {other:?}"),
        }
        // Sender dropped after the single handoff
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_loader_reports_missing_input() {
        let (tx, mut rx) = mpsc::channel(4);
        spawn_loader(
            LoadSource::File("/definitely/not/here.jsonl".into()),
            SourceLocator::default(),
            tx,
        )
        .await
        .unwrap();

        match rx.recv().await {
            Some(Message::LoadFailed(error)) => assert!(error.contains("here.jsonl")),
            other => panic!("unexpected message: {other:?}"),
        }
    }
}
