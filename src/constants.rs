pub const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-image";
pub const API_KEY_HEADER: &str = "x-goog-api-key";
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const API_KEY_FALLBACK_VAR: &str = "API_KEY";
pub const BASE_URL_VAR: &str = "GEMINI_BASE_URL";
pub const MODEL_VAR: &str = "GEMINI_MODEL";
pub const QUALITY_INSTRUCTION_VAR: &str = "GEMINI_QUALITY_INSTRUCTION";
pub const QUALITY_PLACEMENT_VAR: &str = "GEMINI_QUALITY_PLACEMENT";
pub const IMAGE_PLACEMENT_VAR: &str = "GEMINI_IMAGE_PLACEMENT";
pub const TIMEOUT_VAR: &str = "GEMINI_TIMEOUT_SECS";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

pub const QUALITY_INSTRUCTION: &str =
    "High resolution, professional quality, detailed, cinematic lighting.";
pub const DEFAULT_PROMPT_LABEL: &str = "Professional generation";
pub const DEFAULT_MIME_TYPE: &str = "image/png";
pub const RESULT_DATA_URI_PREFIX: &str = "data:image/png;base64,";

pub const DEFAULT_WIDTH: u32 = 1080;
pub const DEFAULT_HEIGHT: u32 = 1920;
pub const DOWNLOAD_PREFIX: &str = "filex";

pub const CMD_EDIT: &str = "e";
pub const CMD_INTERACTIVE: &str = "i";
