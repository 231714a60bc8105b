use crate::aspect::AspectRatio;
use crate::config::{GeminiConfig, ImagePlacement, QualityPlacement};
use crate::constants::{API_KEY_HEADER, RESULT_DATA_URI_PREFIX};
use crate::error::GenerationError;
use crate::files::split_data_uri;
use crate::images::{
    GeminiApiResponse, GeminiImageRequestBody, GenerationConfig, ImageConfig, InlineData, Part,
    RequestContent, ResponsePart,
};
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE},
    Client,
};

/// Finish reasons that mean the output was withheld by a safety filter.
pub const BLOCKED_FINISH_REASONS: [&str; 6] = [
    "SAFETY",
    "IMAGE_SAFETY",
    "PROHIBITED_CONTENT",
    "IMAGE_PROHIBITED_CONTENT",
    "BLOCKLIST",
    "SPII",
];

/// Everything one generation call sends, before wire encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub prompt_text: String,
    pub image: Option<InlineData>,
    pub aspect_ratio: AspectRatio,
}

impl GenerationRequest {
    pub fn into_body(self, placement: ImagePlacement) -> GeminiImageRequestBody {
        let text = Part::Text(self.prompt_text);
        let parts = match (self.image, placement) {
            (Some(image), ImagePlacement::BeforeText) => vec![Part::InlineData(image), text],
            (Some(image), ImagePlacement::AfterText) => vec![text, Part::InlineData(image)],
            (None, _) => vec![text],
        };

        GeminiImageRequestBody {
            contents: vec![RequestContent { parts }],
            generation_config: GenerationConfig {
                image_config: ImageConfig {
                    aspect_ratio: self.aspect_ratio,
                },
            },
        }
    }
}

pub fn augment_prompt(prompt: &str, instruction: &str, placement: QualityPlacement) -> String {
    let prompt = prompt.trim();
    if prompt.is_empty() {
        return instruction.to_string();
    }
    match placement {
        QualityPlacement::Suffix => format!("{}. {}", prompt, instruction),
        QualityPlacement::Prefix => format!("{} {}", instruction, prompt),
    }
}

/// `image` may be a full data URI or bare base64; the prefix is stripped
/// and its mime type kept.
pub fn build_generation_request(
    config: &GeminiConfig,
    prompt: &str,
    aspect_ratio: AspectRatio,
    image: Option<&str>,
) -> GenerationRequest {
    let image = image.map(|payload| {
        let (mime_type, data) = split_data_uri(payload);
        InlineData { mime_type, data }
    });

    GenerationRequest {
        prompt_text: augment_prompt(prompt, &config.quality_instruction, config.quality_placement),
        image,
        aspect_ratio,
    }
}

pub fn is_blocked_reason(reason: &str) -> bool {
    BLOCKED_FINISH_REASONS.contains(&reason)
}

/// Returns the first inline image of the first candidate as a PNG data URI.
pub fn extract_image(response: GeminiApiResponse) -> Result<String, GenerationError> {
    let candidate = match response.candidates.and_then(|c| c.into_iter().next()) {
        Some(candidate) => candidate,
        None => {
            let block_reason = response.prompt_feedback.and_then(|f| f.block_reason);
            return Err(match block_reason {
                Some(reason) => GenerationError::Blocked { reason },
                None => GenerationError::NoResponse,
            });
        }
    };

    if let Some(reason) = candidate.finish_reason.as_deref() {
        if is_blocked_reason(reason) {
            return Err(GenerationError::Blocked {
                reason: reason.to_string(),
            });
        }
    }

    let parts = candidate
        .content
        .and_then(|content| content.parts)
        .unwrap_or_default();

    if let Some(inline) = parts.iter().find_map(|part| part.inline_data.as_ref()) {
        return Ok(format!("{}{}", RESULT_DATA_URI_PREFIX, inline.data));
    }

    if let Some(reply) = reply_text(&parts) {
        log::warn!("Model answered without an image: {}", reply);
    }
    Err(GenerationError::NoImageData)
}

/// Text parts of a reply joined together, e.g. a refusal sent instead of an image.
pub fn reply_text(parts: &[ResponsePart]) -> Option<String> {
    let text: Vec<&str> = parts
        .iter()
        .filter_map(|part| part.text.as_deref())
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect();
    if text.is_empty() {
        None
    } else {
        Some(text.join(" "))
    }
}

pub fn build_headers(api_key: Option<&str>) -> Result<HeaderMap, GenerationError> {
    let api_key = api_key.ok_or(GenerationError::MissingApiKey)?;
    let mut headers = HeaderMap::new();
    headers.insert(
        HeaderName::from_static(API_KEY_HEADER),
        HeaderValue::from_str(api_key).map_err(|e| GenerationError::Transport(e.to_string()))?,
    );
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}

pub struct GeminiClient {
    http: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, GenerationError> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// One round trip: pick the aspect ratio, send, extract the image.
    pub async fn generate(
        &self,
        prompt: &str,
        width: u32,
        height: u32,
        image: Option<&str>,
    ) -> Result<String, GenerationError> {
        let aspect_ratio = AspectRatio::closest(width as f64, height as f64);
        let request = build_generation_request(&self.config, prompt, aspect_ratio, image);
        let kind = if request.image.is_some() { "edit" } else { "generation" };
        log::info!(
            "Requesting {} from {} ({}x{} -> {})",
            kind,
            self.config.model,
            width,
            height,
            aspect_ratio
        );

        let result = self
            .send(request.into_body(self.config.image_placement))
            .await
            .and_then(extract_image);

        if let Err(e) = &result {
            log::error!("Gemini API error: {:?}", e);
        }
        result
    }

    async fn send(&self, body: GeminiImageRequestBody) -> Result<GeminiApiResponse, GenerationError> {
        let headers = build_headers(self.config.api_key.as_deref())?;
        let response = self
            .http
            .post(self.config.generate_url())
            .headers(headers)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GenerationError::Transport(format!(
                "HTTP {}: {}",
                status, message
            )));
        }

        let api_response = response.json::<GeminiApiResponse>().await?;
        log::debug!(
            "Received {} candidate(s)",
            api_response.candidates.as_ref().map_or(0, Vec::len)
        );
        Ok(api_response)
    }
}
