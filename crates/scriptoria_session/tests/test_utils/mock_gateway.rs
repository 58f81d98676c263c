//! Mock gateway for session tests.

use async_trait::async_trait;
use scriptoria_core::{Act, Character, Document, Scene, UploadFile};
use scriptoria_error::{RemoteError, ScriptoriaResult};
use scriptoria_interface::{
    Extraction, GenerateRequest, HealthStatus, ScriptoriaGateway, UploadProgress,
};
use scriptoria_session::{StoredStory, StoryListener};
use std::sync::Mutex;
use std::time::Duration;

/// A gateway call as the mock saw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Extract { file_name: String, bytes: usize },
    Generate { story_idea: String, genre: String },
    Export { title: String },
}

/// How `generate` answers.
#[derive(Debug, Clone)]
pub enum GenerateBehavior {
    /// Return [`sample_document`] tagged with the requested genre
    Succeed,
    /// Fail with the given error
    Fail(RemoteError),
}

/// How `extract` answers.
#[derive(Debug, Clone)]
pub enum ExtractBehavior {
    /// Stream the body in 100-byte chunks, then return the text
    Succeed(String),
    /// Fail with the given error
    Fail(RemoteError),
}

/// How `export_pdf` answers.
#[derive(Debug, Clone)]
pub enum ExportBehavior {
    /// Return the bytes
    Succeed(Vec<u8>),
    /// Fail with the given error
    Fail(RemoteError),
}

/// Scripted gateway that records every call.
pub struct MockGateway {
    generate: GenerateBehavior,
    extract: ExtractBehavior,
    export: ExportBehavior,
    delay: Duration,
    calls: Mutex<Vec<Call>>,
    progress_seen: Mutex<Vec<u8>>,
}

impl Default for MockGateway {
    fn default() -> Self {
        Self {
            generate: GenerateBehavior::Succeed,
            extract: ExtractBehavior::Succeed("Extracted story idea text.".to_string()),
            export: ExportBehavior::Succeed(b"%PDF-1.4 mock".to_vec()),
            delay: Duration::from_millis(1),
            calls: Mutex::new(Vec::new()),
            progress_seen: Mutex::new(Vec::new()),
        }
    }
}

#[allow(dead_code)]
impl MockGateway {
    /// A gateway where everything succeeds quickly.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call sleeps this long before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_generate(mut self, behavior: GenerateBehavior) -> Self {
        self.generate = behavior;
        self
    }

    pub fn with_extract(mut self, behavior: ExtractBehavior) -> Self {
        self.extract = behavior;
        self
    }

    pub fn with_export(mut self, behavior: ExportBehavior) -> Self {
        self.export = behavior;
        self
    }

    /// Calls received so far.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of calls received so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Progress percentages published while the last upload streamed.
    pub fn progress_seen(&self) -> Vec<u8> {
        self.progress_seen.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ScriptoriaGateway for MockGateway {
    async fn extract(
        &self,
        file: &UploadFile,
        progress: &UploadProgress,
    ) -> ScriptoriaResult<Extraction> {
        self.record(Call::Extract {
            file_name: file.file_name().clone(),
            bytes: file.len(),
        });
        let mut seen = vec![progress.percent()];
        for chunk in file.bytes().chunks(100) {
            progress.advance(chunk.len() as u64);
            seen.push(progress.percent());
        }
        *self.progress_seen.lock().unwrap() = seen;
        tokio::time::sleep(self.delay).await;

        match &self.extract {
            ExtractBehavior::Succeed(text) => {
                progress.finish();
                Ok(Extraction::new(text.clone(), text.len()))
            }
            ExtractBehavior::Fail(err) => Err(err.clone().into()),
        }
    }

    async fn generate(&self, request: &GenerateRequest) -> ScriptoriaResult<Document> {
        self.record(Call::Generate {
            story_idea: request.story_idea().clone(),
            genre: request.genre().clone(),
        });
        tokio::time::sleep(self.delay).await;

        match &self.generate {
            GenerateBehavior::Succeed => {
                let mut document = sample_document();
                document.screenplay.genre = Some(request.genre().clone());
                Ok(document)
            }
            GenerateBehavior::Fail(err) => Err(err.clone().into()),
        }
    }

    async fn export_pdf(&self, document: &Document) -> ScriptoriaResult<Vec<u8>> {
        self.record(Call::Export {
            title: document.title().to_string(),
        });
        tokio::time::sleep(self.delay).await;

        match &self.export {
            ExportBehavior::Succeed(bytes) => Ok(bytes.clone()),
            ExportBehavior::Fail(err) => Err(err.clone().into()),
        }
    }

    async fn health(&self) -> ScriptoriaResult<HealthStatus> {
        Ok(HealthStatus {
            status: "healthy".to_string(),
            message: "mock".to_string(),
            ai_configured: true,
        })
    }

    fn gateway_name(&self) -> &'static str {
        "mock"
    }
}

/// Listener that keeps every saved story.
#[derive(Default)]
pub struct RecordingListener {
    saved: Mutex<Vec<StoredStory>>,
}

#[allow(dead_code)]
impl RecordingListener {
    pub fn saved(&self) -> Vec<StoredStory> {
        self.saved.lock().unwrap().clone()
    }
}

impl StoryListener for RecordingListener {
    fn story_saved(&self, story: &StoredStory) {
        self.saved.lock().unwrap().push(story.clone());
    }
}

/// A two-act document with one character and two scenes.
pub fn sample_document() -> Document {
    let mut doc = Document::default();
    doc.screenplay.title = "The Keeper".to_string();
    doc.screenplay.logline = "A lighthouse keeper hears voices in the fog.".to_string();
    doc.screenplay.main_characters = vec!["Mara".to_string()];
    for (key, title) in [("act1", "Arrival"), ("act2", "Voices")] {
        doc.screenplay.three_act_structure.insert(
            key.to_string(),
            Act {
                title: title.to_string(),
                description: format!("{} unfolds.", title),
                key_events: vec![format!("{} begins", title), format!("{} ends", title)],
            },
        );
    }
    doc.characters.push(Character {
        name: "Mara".to_string(),
        role: "Keeper".to_string(),
        arc: "Doubt to faith".to_string(),
        traits: vec!["stubborn".to_string(), "curious".to_string()],
    });
    for (number, location) in [(1, "Lighthouse"), (4, "Cliffs")] {
        doc.scenes.push(Scene {
            scene_number: number,
            location: location.to_string(),
            time_of_day: "Night".to_string(),
            action: "Fog rolls in.".to_string(),
            characters: vec!["Mara".to_string()],
            duration: None,
        });
    }
    doc
}
