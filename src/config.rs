use crate::constants::{
    API_KEY_FALLBACK_VAR, API_KEY_VAR, BASE_URL_VAR, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS,
    GEMINI_API_URL, IMAGE_PLACEMENT_VAR, MODEL_VAR, QUALITY_INSTRUCTION,
    QUALITY_INSTRUCTION_VAR, QUALITY_PLACEMENT_VAR, TIMEOUT_VAR,
};
use std::env;
use std::time::Duration;

/// Where the quality instruction goes relative to the user's prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityPlacement {
    Suffix,
    Prefix,
}

impl QualityPlacement {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "suffix" => Some(QualityPlacement::Suffix),
            "prefix" => Some(QualityPlacement::Prefix),
            _ => None,
        }
    }
}

/// Where an uploaded image goes relative to the text part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImagePlacement {
    BeforeText,
    AfterText,
}

impl ImagePlacement {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "before" => Some(ImagePlacement::BeforeText),
            "after" => Some(ImagePlacement::AfterText),
            _ => None,
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub quality_instruction: String,
    pub quality_placement: QualityPlacement,
    pub image_placement: ImagePlacement,
    pub timeout: Duration,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        GeminiConfig {
            api_key: None,
            base_url: GEMINI_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            quality_instruction: QUALITY_INSTRUCTION.to_string(),
            quality_placement: QualityPlacement::Suffix,
            image_placement: ImagePlacement::BeforeText,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl GeminiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let mut config = Self::new();

        let api_key =
            non_empty_var(API_KEY_VAR).or_else(|| non_empty_var(API_KEY_FALLBACK_VAR));
        if let Some(api_key) = api_key {
            config = config.with_api_key(api_key);
        }
        if let Some(base_url) = non_empty_var(BASE_URL_VAR) {
            config = config.with_base_url(base_url);
        }
        if let Some(model) = non_empty_var(MODEL_VAR) {
            config = config.with_model(model);
        }
        if let Some(instruction) = non_empty_var(QUALITY_INSTRUCTION_VAR) {
            config = config.with_quality_instruction(instruction);
        }
        if let Some(value) = non_empty_var(QUALITY_PLACEMENT_VAR) {
            match QualityPlacement::parse(&value) {
                Some(placement) => config = config.with_quality_placement(placement),
                None => log::warn!(
                    "Ignoring {}={}: expected prefix or suffix",
                    QUALITY_PLACEMENT_VAR,
                    value
                ),
            }
        }
        if let Some(value) = non_empty_var(IMAGE_PLACEMENT_VAR) {
            match ImagePlacement::parse(&value) {
                Some(placement) => config = config.with_image_placement(placement),
                None => log::warn!(
                    "Ignoring {}={}: expected before or after",
                    IMAGE_PLACEMENT_VAR,
                    value
                ),
            }
        }
        if let Some(value) = non_empty_var(TIMEOUT_VAR) {
            match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config = config.with_timeout(Duration::from_secs(secs)),
                _ => log::warn!(
                    "Ignoring {}={}: expected a positive number of seconds",
                    TIMEOUT_VAR,
                    value
                ),
            }
        }
        config
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_quality_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.quality_instruction = instruction.into();
        self
    }

    pub fn with_quality_placement(mut self, placement: QualityPlacement) -> Self {
        self.quality_placement = placement;
        self
    }

    pub fn with_image_placement(mut self, placement: ImagePlacement) -> Self {
        self.image_placement = placement;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn generate_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}
