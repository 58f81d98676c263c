//! Upload job controller behaviour.

mod test_utils;

use scriptoria_core::UploadFile;
use scriptoria_error::{RemoteError, ScriptoriaErrorKind, SessionErrorKind, ValidationErrorKind};
use scriptoria_session::{Phase, Workspace};
use std::sync::Arc;
use std::time::Duration;
use test_utils::{Call, ExtractBehavior, MockGateway};

fn pdf(name: &str, size: usize) -> UploadFile {
    UploadFile::new(name, Some("application/pdf".to_string()), vec![b'%'; size])
}

#[tokio::test]
async fn test_pdf_upload_replaces_idea() {
    let text = "A".repeat(500);
    let gateway = Arc::new(MockGateway::new().with_extract(ExtractBehavior::Succeed(text.clone())));
    let workspace = Workspace::new(gateway.clone());
    let mut progress = workspace.subscribe_progress();

    let extracted = workspace.upload(pdf("treatment.pdf", 1000)).await.unwrap();

    assert_eq!(extracted, text);
    assert_eq!(workspace.story_idea(), text);
    assert_eq!(workspace.uploaded_file_name().as_deref(), Some("treatment.pdf"));
    assert_eq!(workspace.phase(), Phase::Idle);
    assert_eq!(
        gateway.calls(),
        vec![Call::Extract {
            file_name: "treatment.pdf".to_string(),
            bytes: 1000,
        }]
    );

    let seen = gateway.progress_seen();
    assert_eq!(seen.first(), Some(&0));
    assert_eq!(seen.last(), Some(&100));
    assert!(seen.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(*progress.borrow_and_update(), 0);
    assert_eq!(workspace.upload_progress(), 0);
}

#[tokio::test]
async fn test_unsupported_file_rejected_before_gateway() {
    let gateway = Arc::new(MockGateway::new());
    let workspace = Workspace::new(gateway.clone());

    let err = workspace
        .upload(UploadFile::new("notes.txt", Some("text/plain".to_string()), b"hi".to_vec()))
        .await
        .unwrap_err();

    match err.kind() {
        ScriptoriaErrorKind::Validation(v) => {
            assert!(matches!(v.kind, ValidationErrorKind::UnsupportedFileType(_)))
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(workspace.phase(), Phase::Idle);
    assert_eq!(gateway.call_count(), 0);
}

#[tokio::test]
async fn test_word_documents_accepted_by_suffix() {
    let gateway = Arc::new(MockGateway::new());
    let workspace = Workspace::new(gateway.clone());

    let file = UploadFile::new("Treatment.DOCX", None, vec![1; 42]);
    workspace.upload(file).await.unwrap();

    assert_eq!(gateway.call_count(), 1);
}

#[tokio::test]
async fn test_failed_extraction_keeps_idea() {
    let gateway = Arc::new(MockGateway::new().with_extract(ExtractBehavior::Fail(
        RemoteError::new("Text extraction failed").with_detail("Encrypted PDF"),
    )));
    let workspace = Workspace::new(gateway);
    workspace.set_story_idea("my own idea");

    let err = workspace.upload(pdf("locked.pdf", 300)).await.unwrap_err();

    match err.kind() {
        ScriptoriaErrorKind::Extraction(e) => assert_eq!(e.message, "Encrypted PDF"),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(workspace.story_idea(), "my own idea");
    assert!(workspace.uploaded_file_name().is_none());
    assert_eq!(workspace.phase(), Phase::Idle);
    assert_eq!(workspace.upload_progress(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_upload_excludes_generation_and_second_upload() {
    let gateway = Arc::new(MockGateway::new().with_delay(Duration::from_secs(5)));
    let workspace = Workspace::new(gateway.clone());
    workspace.set_story_idea("A lighthouse keeper hears voices in the fog.");

    let handle = tokio::spawn({
        let workspace = workspace.clone();
        async move { workspace.upload(pdf("first.pdf", 250)).await }
    });
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert_eq!(workspace.phase(), Phase::Uploading);

    let err = workspace.upload(pdf("second.pdf", 10)).await.unwrap_err();
    match err.kind() {
        ScriptoriaErrorKind::Session(e) => assert_eq!(e.kind, SessionErrorKind::UploadInFlight),
        other => panic!("unexpected error: {other}"),
    }
    let err = workspace.generate().await.unwrap_err();
    match err.kind() {
        ScriptoriaErrorKind::Session(e) => assert_eq!(e.kind, SessionErrorKind::UploadInFlight),
        other => panic!("unexpected error: {other}"),
    }

    handle.await.unwrap().unwrap();
    assert_eq!(workspace.uploaded_file_name().as_deref(), Some("first.pdf"));
    assert_eq!(gateway.call_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_extraction_overwrites_edits_made_during_upload() {
    let gateway = Arc::new(
        MockGateway::new()
            .with_delay(Duration::from_secs(2))
            .with_extract(ExtractBehavior::Succeed("From the file.".to_string())),
    );
    let workspace = Workspace::new(gateway);

    let handle = tokio::spawn({
        let workspace = workspace.clone();
        async move { workspace.upload(pdf("draft.pdf", 100)).await }
    });
    tokio::time::sleep(Duration::from_millis(10)).await;
    workspace.set_story_idea("typed while uploading");

    handle.await.unwrap().unwrap();
    assert_eq!(workspace.story_idea(), "From the file.");
}

#[tokio::test(start_paused = true)]
async fn test_dropped_upload_returns_to_idle() {
    let gateway = Arc::new(MockGateway::new().with_delay(Duration::from_secs(5)));
    let workspace = Workspace::new(gateway);

    let result =
        tokio::time::timeout(Duration::from_secs(1), workspace.upload(pdf("slow.pdf", 500))).await;
    assert!(result.is_err());

    assert_eq!(workspace.phase(), Phase::Idle);
    assert_eq!(workspace.upload_progress(), 0);
    assert!(workspace.story_idea().is_empty());
}
