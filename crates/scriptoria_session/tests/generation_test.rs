//! Generation job controller and runtime ticker behaviour.

mod test_utils;

use scriptoria_core::Tab;
use scriptoria_error::{
    RemoteError, ScriptoriaErrorKind, SessionErrorKind, ValidationErrorKind,
};
use scriptoria_session::{Phase, Workspace};
use std::sync::Arc;
use std::time::Duration;
use test_utils::{Call, GenerateBehavior, MockGateway, RecordingListener};

const IDEA_25: &str = "Fog hides a ghost ship!!!";

#[tokio::test]
async fn test_thriller_idea_generates_document() {
    assert_eq!(IDEA_25.chars().count(), 25);
    let gateway = Arc::new(MockGateway::new());
    let workspace = Workspace::new(gateway.clone());
    workspace.set_story_idea(IDEA_25);
    workspace.add_genre("Thriller").unwrap();

    let document = workspace.generate().await.unwrap();

    assert_eq!(document.title(), "The Keeper");
    assert_eq!(workspace.phase(), Phase::Ready);
    assert_eq!(workspace.active_tab(), Tab::Outline);
    assert_eq!(workspace.document(), Some(document));
    assert_eq!(
        gateway.calls(),
        vec![Call::Generate {
            story_idea: IDEA_25.to_string(),
            genre: "Thriller".to_string(),
        }]
    );
}

#[tokio::test]
async fn test_short_idea_never_reaches_gateway() {
    let gateway = Arc::new(MockGateway::new());
    let workspace = Workspace::new(gateway.clone());
    workspace.set_story_idea("short");

    let err = workspace.generate().await.unwrap_err();

    match err.kind() {
        ScriptoriaErrorKind::Validation(v) => {
            assert_eq!(v.kind, ValidationErrorKind::IdeaTooShort { chars: 5, min: 20 })
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(workspace.phase(), Phase::Idle);
    assert_eq!(gateway.call_count(), 0);
}

#[tokio::test]
async fn test_idea_is_trimmed_and_default_genre_used() {
    let gateway = Arc::new(MockGateway::new());
    let workspace = Workspace::new(gateway.clone());
    workspace.set_story_idea(format!("   {}   ", IDEA_25));

    workspace.generate().await.unwrap();

    assert_eq!(
        gateway.calls(),
        vec![Call::Generate {
            story_idea: IDEA_25.to_string(),
            genre: "Drama".to_string(),
        }]
    );
}

#[tokio::test(start_paused = true)]
async fn test_ticker_counts_while_in_flight_and_stops() {
    let gateway = Arc::new(MockGateway::new().with_delay(Duration::from_millis(3500)));
    let workspace = Workspace::new(gateway);
    workspace.set_story_idea(IDEA_25);
    let mut elapsed = workspace.subscribe_elapsed();

    workspace.generate().await.unwrap();
    assert_eq!(workspace.elapsed_seconds(), 3);
    assert_eq!(*elapsed.borrow_and_update(), 3);

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(workspace.elapsed_seconds(), 3);
    assert!(!elapsed.has_changed().unwrap());
}

#[tokio::test(start_paused = true)]
async fn test_ticker_restarts_from_zero() {
    let gateway = Arc::new(MockGateway::new().with_delay(Duration::from_millis(2500)));
    let workspace = Workspace::new(gateway);
    workspace.set_story_idea(IDEA_25);

    workspace.generate().await.unwrap();
    assert_eq!(workspace.elapsed_seconds(), 2);

    let handle = tokio::spawn({
        let workspace = workspace.clone();
        async move { workspace.generate().await }
    });
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert_eq!(workspace.elapsed_seconds(), 0);

    handle.await.unwrap().unwrap();
    assert_eq!(workspace.elapsed_seconds(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_ticker_stops_on_failure() {
    let gateway = Arc::new(
        MockGateway::new()
            .with_delay(Duration::from_millis(1500))
            .with_generate(GenerateBehavior::Fail(RemoteError::new("timed out"))),
    );
    let workspace = Workspace::new(gateway);
    workspace.set_story_idea(IDEA_25);

    assert!(workspace.generate().await.is_err());
    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(workspace.elapsed_seconds(), 1);
}

#[tokio::test]
async fn test_failure_prefers_structured_detail() {
    let gateway = Arc::new(MockGateway::new().with_generate(GenerateBehavior::Fail(
        RemoteError::new("Server returned: 500 Internal Server Error")
            .with_status(500)
            .with_detail("GROQ_API_KEY not found"),
    )));
    let workspace = Workspace::new(gateway);
    workspace.set_story_idea(IDEA_25);

    let err = workspace.generate().await.unwrap_err();

    match err.kind() {
        ScriptoriaErrorKind::Generation(e) => assert_eq!(e.message, "GROQ_API_KEY not found"),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(workspace.phase(), Phase::Idle);
    assert!(workspace.document().is_none());
    assert_eq!(workspace.last_error().as_deref(), Some("GROQ_API_KEY not found"));
}

#[tokio::test]
async fn test_failure_falls_back_to_transport_message() {
    let gateway = Arc::new(MockGateway::new().with_generate(GenerateBehavior::Fail(
        RemoteError::new("Generation request failed: connection refused"),
    )));
    let workspace = Workspace::new(gateway);
    workspace.set_story_idea(IDEA_25);

    let err = workspace.generate().await.unwrap_err();
    assert_eq!(
        err.user_message(),
        "Generation request failed: connection refused"
    );
}

#[tokio::test(start_paused = true)]
async fn test_second_submission_rejected_without_disturbing_first() {
    let gateway = Arc::new(MockGateway::new().with_delay(Duration::from_secs(5)));
    let workspace = Workspace::new(gateway.clone());
    workspace.set_story_idea(IDEA_25);

    let handle = tokio::spawn({
        let workspace = workspace.clone();
        async move { workspace.generate().await }
    });
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert_eq!(workspace.phase(), Phase::Generating);

    let err = workspace.generate().await.unwrap_err();
    match err.kind() {
        ScriptoriaErrorKind::Session(e) => assert_eq!(e.kind, SessionErrorKind::GenerationInFlight),
        other => panic!("unexpected error: {other}"),
    }
    let pdf = scriptoria_core::UploadFile::new("draft.pdf", None, vec![1; 10]);
    let err = workspace.upload(pdf).await.unwrap_err();
    match err.kind() {
        ScriptoriaErrorKind::Session(e) => assert_eq!(e.kind, SessionErrorKind::GenerationInFlight),
        other => panic!("unexpected error: {other}"),
    }

    let document = handle.await.unwrap().unwrap();
    assert_eq!(document.title(), "The Keeper");
    assert_eq!(workspace.phase(), Phase::Ready);
    assert_eq!(gateway.call_count(), 1);
}

#[tokio::test]
async fn test_new_generation_replaces_ready_document() {
    let gateway = Arc::new(MockGateway::new());
    let workspace = Workspace::new(gateway.clone());
    workspace.set_story_idea(IDEA_25);
    workspace.generate().await.unwrap();
    workspace.set_tab(Tab::Sound);
    workspace.begin_edit().unwrap();

    workspace.add_genre("Horror").unwrap();
    let document = workspace.generate().await.unwrap();

    assert_eq!(document.screenplay.genre.as_deref(), Some("Horror"));
    assert_eq!(workspace.active_tab(), Tab::Outline);
    assert!(!workspace.is_editing());
    assert_eq!(gateway.call_count(), 2);
}

#[tokio::test]
async fn test_listener_receives_generated_story() {
    let workspace = Workspace::new(Arc::new(MockGateway::new()));
    let listener = Arc::new(RecordingListener::default());
    workspace.add_listener(listener.clone());
    workspace.set_story_idea(IDEA_25);
    workspace.add_genre("Thriller").unwrap();

    let document = workspace.generate().await.unwrap();

    let saved = listener.saved();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].story_idea(), IDEA_25);
    assert_eq!(saved[0].genre(), "Thriller");
    assert_eq!(saved[0].document(), &document);
}

#[tokio::test(start_paused = true)]
async fn test_reset_orphans_in_flight_generation() {
    let gateway = Arc::new(MockGateway::new().with_delay(Duration::from_secs(5)));
    let workspace = Workspace::new(gateway);
    workspace.set_story_idea(IDEA_25);

    let handle = tokio::spawn({
        let workspace = workspace.clone();
        async move { workspace.generate().await }
    });
    tokio::time::sleep(Duration::from_millis(2100)).await;
    assert_eq!(workspace.elapsed_seconds(), 2);

    workspace.reset();
    assert_eq!(workspace.phase(), Phase::Idle);
    assert_eq!(workspace.elapsed_seconds(), 0);
    assert!(workspace.story_idea().is_empty());

    let err = handle.await.unwrap().unwrap_err();
    match err.kind() {
        ScriptoriaErrorKind::Session(e) => assert_eq!(e.kind, SessionErrorKind::Abandoned),
        other => panic!("unexpected error: {other}"),
    }
    assert!(workspace.document().is_none());
    assert_eq!(workspace.phase(), Phase::Idle);
    assert_eq!(workspace.elapsed_seconds(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_dropped_generation_settles_session() {
    let gateway = Arc::new(MockGateway::new().with_delay(Duration::from_secs(5)));
    let workspace = Workspace::new(gateway);
    workspace.set_story_idea(IDEA_25);

    let result = tokio::time::timeout(Duration::from_millis(1500), workspace.generate()).await;
    assert!(result.is_err());

    assert_eq!(workspace.phase(), Phase::Idle);
    assert_eq!(workspace.elapsed_seconds(), 1);
    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(workspace.elapsed_seconds(), 1);
    assert!(workspace.generate().await.is_ok());
}
