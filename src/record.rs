use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageKind {
    Generation,
    Edit,
}

impl fmt::Display for ImageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageKind::Generation => f.write_str("generation"),
            ImageKind::Edit => f.write_str("edit"),
        }
    }
}

/// One successful result. Lives in memory until reset or exit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedImage {
    pub id: Uuid,
    pub url: String,
    pub prompt: String,
    pub timestamp: DateTime<Utc>,
    pub kind: ImageKind,
}

impl GeneratedImage {
    pub fn new(url: String, prompt: String, kind: ImageKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            url,
            prompt,
            timestamp: Utc::now(),
            kind,
        }
    }

    pub fn short_id(&self) -> String {
        self.id.to_string().chars().take(8).collect()
    }
}
