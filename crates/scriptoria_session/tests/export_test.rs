//! Export job controller and its recovery policy.

mod test_utils;

use scriptoria_core::FieldPath;
use scriptoria_error::{RemoteError, ScriptoriaErrorKind, SessionErrorKind};
use scriptoria_session::{Phase, Workspace, WorkspaceSettings};
use std::sync::Arc;
use std::time::Duration;
use test_utils::{Call, ExportBehavior, MockGateway};

const IDEA: &str = "A lighthouse keeper hears voices in the fog.";

async fn ready_workspace(gateway: Arc<MockGateway>, dir: &tempfile::TempDir) -> Workspace {
    let settings = WorkspaceSettings::builder()
        .output_dir(dir.path())
        .build()
        .unwrap();
    let workspace = Workspace::with_settings(gateway, settings);
    workspace.set_story_idea(IDEA);
    workspace.generate().await.unwrap();
    workspace
}

#[tokio::test]
async fn test_export_rejected_unless_ready() {
    let gateway = Arc::new(MockGateway::new());
    let workspace = Workspace::new(gateway.clone());

    let err = workspace.export().await.unwrap_err();

    match err.kind() {
        ScriptoriaErrorKind::Session(e) => {
            assert_eq!(e.kind, SessionErrorKind::NotReady("idle".to_string()))
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(gateway.call_count(), 0);
}

#[tokio::test]
async fn test_export_writes_named_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let gateway = Arc::new(MockGateway::new());
    let workspace = ready_workspace(gateway.clone(), &dir).await;

    let artifact = workspace.export().await.unwrap();

    assert_eq!(artifact.file_name(), "The_Keeper.pdf");
    assert_eq!(artifact.path(), &dir.path().join("The_Keeper.pdf"));
    assert!(!artifact.recovered());
    assert_eq!(std::fs::read(artifact.path()).unwrap(), b"%PDF-1.4 mock");
    assert_eq!(workspace.phase(), Phase::Ready);
    assert_eq!(
        gateway.calls().last(),
        Some(&Call::Export {
            title: "The Keeper".to_string()
        })
    );
}

#[tokio::test]
async fn test_failed_call_with_body_still_produces_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let gateway = Arc::new(MockGateway::new().with_export(ExportBehavior::Fail(
        RemoteError::new("Server returned: 500 Internal Server Error")
            .with_status(500)
            .with_body(b"%PDF-1.4 partial".to_vec()),
    )));
    let workspace = ready_workspace(gateway, &dir).await;

    let artifact = workspace.export().await.unwrap();

    assert!(artifact.recovered());
    assert_eq!(std::fs::read(artifact.path()).unwrap(), b"%PDF-1.4 partial");
    assert_eq!(workspace.phase(), Phase::Ready);
    assert!(workspace.last_error().is_none());
}

#[tokio::test]
async fn test_failed_call_without_body_is_export_error() {
    let dir = tempfile::tempdir().unwrap();
    let gateway = Arc::new(MockGateway::new().with_export(ExportBehavior::Fail(
        RemoteError::new("Export request failed: connection reset").with_body(Vec::new()),
    )));
    let workspace = ready_workspace(gateway, &dir).await;

    let err = workspace.export().await.unwrap_err();

    match err.kind() {
        ScriptoriaErrorKind::Export(e) => {
            assert_eq!(e.message, "Export request failed: connection reset")
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(workspace.phase(), Phase::Ready);
    assert!(!dir.path().join("The_Keeper.pdf").exists());
    assert!(workspace.last_error().is_some());
}

#[tokio::test]
async fn test_export_uses_open_draft() {
    let dir = tempfile::tempdir().unwrap();
    let gateway = Arc::new(MockGateway::new());
    let workspace = ready_workspace(gateway.clone(), &dir).await;
    workspace.begin_edit().unwrap();
    workspace.set_field(&FieldPath::Title, "Fog Line").unwrap();

    let artifact = workspace.export().await.unwrap();

    assert_eq!(artifact.file_name(), "Fog_Line.pdf");
    assert_eq!(workspace.document().unwrap().title(), "The Keeper");
    assert!(workspace.is_editing());
}

#[tokio::test(start_paused = true)]
async fn test_export_runs_alongside_generation() {
    let dir = tempfile::tempdir().unwrap();
    let gateway = Arc::new(MockGateway::new().with_delay(Duration::from_secs(3)));
    let workspace = ready_workspace(gateway.clone(), &dir).await;

    let export = tokio::spawn({
        let workspace = workspace.clone();
        async move { workspace.export().await }
    });
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert_eq!(workspace.phase(), Phase::Exporting);

    workspace.set_story_idea("An astronaut wakes up alone on a drifting station.");
    let generation = tokio::spawn({
        let workspace = workspace.clone();
        async move { workspace.generate().await }
    });
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert_eq!(workspace.phase(), Phase::Generating);
    assert!(workspace.document().is_none());

    let artifact = export.await.unwrap().unwrap();
    assert_eq!(artifact.file_name(), "The_Keeper.pdf");
    assert_eq!(workspace.phase(), Phase::Generating);

    generation.await.unwrap().unwrap();
    assert_eq!(workspace.phase(), Phase::Ready);
}
