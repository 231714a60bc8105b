use crate::aspect::Preset;
use crate::client::GeminiClient;
use crate::constants::{DEFAULT_HEIGHT, DEFAULT_PROMPT_LABEL, DEFAULT_WIDTH};
use crate::error::ImageError;
use crate::files::to_data_uri;
use crate::history;
use crate::record::{GeneratedImage, ImageKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppStatus {
    Idle,
    Processing,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Nothing to send, or a request is already running.
    Skipped,
    Generated(GeneratedImage),
    Failed(String),
}

/// The form: inputs, the current result and the results so far.
#[derive(Debug)]
pub struct Session {
    pub prompt: String,
    pub width: u32,
    pub height: u32,
    pub uploaded_image: Option<String>,
    pub current: Option<GeneratedImage>,
    pub error: Option<String>,
    pub status: AppStatus,
    pub history: Vec<GeneratedImage>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            uploaded_image: None,
            current: None,
            error: None,
            status: AppStatus::Idle,
            history: Vec::new(),
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    pub fn set_dimensions(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    pub fn apply_preset(&mut self, preset: Preset) {
        self.set_dimensions(preset.width, preset.height);
    }

    /// The preset matching the current dimensions, if any.
    pub fn active_preset(&self) -> Option<Preset> {
        crate::aspect::PRESETS
            .iter()
            .copied()
            .find(|p| p.width == self.width && p.height == self.height)
    }

    pub async fn attach_image(&mut self, path: &str) -> Result<(), ImageError> {
        let data_uri = to_data_uri(path).await?;
        self.attach_data_uri(data_uri);
        Ok(())
    }

    pub fn attach_data_uri(&mut self, data_uri: impl Into<String>) {
        self.uploaded_image = Some(data_uri.into());
    }

    pub fn clear_image(&mut self) {
        self.uploaded_image = None;
    }

    pub fn can_submit(&self) -> bool {
        self.status == AppStatus::Idle
            && (!self.prompt.trim().is_empty() || self.uploaded_image.is_some())
    }

    pub async fn submit(&mut self, client: &GeminiClient) -> SubmitOutcome {
        if !self.can_submit() {
            return SubmitOutcome::Skipped;
        }

        self.current = None;
        self.status = AppStatus::Processing;
        self.error = None;

        let result = client
            .generate(
                &self.prompt,
                self.width,
                self.height,
                self.uploaded_image.as_deref(),
            )
            .await;

        let outcome = match result {
            Ok(url) => {
                let prompt = if self.prompt.trim().is_empty() {
                    DEFAULT_PROMPT_LABEL.to_string()
                } else {
                    self.prompt.clone()
                };
                let kind = if self.uploaded_image.is_some() {
                    ImageKind::Edit
                } else {
                    ImageKind::Generation
                };
                let image = GeneratedImage::new(url, prompt, kind);

                self.current = Some(image.clone());
                self.history.push(image.clone());
                self.prompt.clear();
                self.uploaded_image = None;
                SubmitOutcome::Generated(image)
            }
            Err(e) => {
                let message = e.to_string();
                self.error = Some(message.clone());
                SubmitOutcome::Failed(message)
            }
        };

        self.status = AppStatus::Idle;
        outcome
    }

    pub fn reset(&mut self) {
        self.prompt.clear();
        self.uploaded_image = None;
        self.current = None;
        self.error = None;
    }

    /// Shows a past result again. `index` is 1-based.
    pub fn select(&mut self, index: usize) -> Option<&GeneratedImage> {
        let image = history::select(&self.history, index)?.clone();
        self.current = Some(image);
        self.current.as_ref()
    }
}
