// Delivery flow: one greeting text, then each existing file as a separate
// attachment message, in a fixed order.

use chrono::Local;
use std::path::Path;
use thiserror::Error;

use crate::modules::notifier::greeting;
use crate::modules::notifier::ports::{ChatApi, ChatApiError};

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error(transparent)]
    Chat(#[from] ChatApiError),

    #[error("No files sent.")]
    NothingDelivered,
}

/// Sends the greeting, then attempts the timesheet and the invoice file.
/// Counts only attachments the remote accepted. Zero accepted attachments is
/// a failure even when the greeting went through.
pub async fn notify(
    api: &dyn ChatApi,
    xlsx_path: &Path,
    docx_path: &Path,
) -> Result<usize, NotifyError> {
    api.send_text(&greeting::compose(Local::now())).await?;

    let mut delivered = 0;
    for path in [xlsx_path, docx_path] {
        if path.exists() && api.send_document(path).await? {
            delivered += 1;
        }
    }

    if delivered == 0 {
        return Err(NotifyError::NothingDelivered);
    }
    Ok(delivered)
}

#[cfg(test)]
mod notify_tests {
    use super::*;
    use crate::modules::notifier::test_support::RecordingChat;
    use rstest::rstest;
    use std::path::PathBuf;

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_when_no_attachment_file_exists() {
        let chat = RecordingChat::accepting();
        let result = notify(
            &chat,
            &PathBuf::from("missing.xlsx"),
            &PathBuf::from("missing.docx"),
        )
        .await;

        assert!(matches!(result, Err(NotifyError::NothingDelivered)));
        // The greeting still went out before the failure was decided.
        assert_eq!(chat.texts().len(), 1);
        assert!(chat.documents().is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_count_both_attachments_when_both_files_exist() {
        let dir = tempfile::tempdir().expect("expected a temp dir");
        let xlsx = dir.path().join("ts.xlsx");
        let docx = dir.path().join("invoice.docx");
        std::fs::write(&xlsx, b"sheet").unwrap();
        std::fs::write(&docx, b"doc").unwrap();

        let chat = RecordingChat::accepting();
        let delivered = notify(&chat, &xlsx, &docx)
            .await
            .expect("expected the delivery to succeed");

        assert_eq!(delivered, 2);
        assert_eq!(chat.documents(), vec![xlsx, docx]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_skip_the_file_that_does_not_exist() {
        let dir = tempfile::tempdir().expect("expected a temp dir");
        let xlsx = dir.path().join("ts.xlsx");
        std::fs::write(&xlsx, b"sheet").unwrap();

        let chat = RecordingChat::accepting();
        let delivered = notify(&chat, &xlsx, &dir.path().join("missing.docx"))
            .await
            .expect("expected the delivery to succeed");

        assert_eq!(delivered, 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_when_the_remote_rejects_every_attachment() {
        let dir = tempfile::tempdir().expect("expected a temp dir");
        let xlsx = dir.path().join("ts.xlsx");
        std::fs::write(&xlsx, b"sheet").unwrap();

        let chat = RecordingChat::rejecting();
        let result = notify(&chat, &xlsx, &dir.path().join("missing.docx")).await;

        assert!(matches!(result, Err(NotifyError::NothingDelivered)));
    }
}
