use serde::{Serialize, Serializer};
use std::fmt;

/// Aspect ratios the image endpoint accepts, in tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AspectRatio {
    Square,
    Portrait3x4,
    Landscape4x3,
    Portrait9x16,
    Landscape16x9,
}

impl AspectRatio {
    pub const ALL: [AspectRatio; 5] = [
        AspectRatio::Square,
        AspectRatio::Portrait3x4,
        AspectRatio::Landscape4x3,
        AspectRatio::Portrait9x16,
        AspectRatio::Landscape16x9,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Portrait3x4 => "3:4",
            AspectRatio::Landscape4x3 => "4:3",
            AspectRatio::Portrait9x16 => "9:16",
            AspectRatio::Landscape16x9 => "16:9",
        }
    }

    pub fn value(&self) -> f64 {
        match self {
            AspectRatio::Square => 1.0,
            AspectRatio::Portrait3x4 => 3.0 / 4.0,
            AspectRatio::Landscape4x3 => 4.0 / 3.0,
            AspectRatio::Portrait9x16 => 9.0 / 16.0,
            AspectRatio::Landscape16x9 => 16.0 / 9.0,
        }
    }

    /// Nearest supported ratio to `width / height`. Earlier entries of
    /// [`AspectRatio::ALL`] win ties.
    pub fn closest(width: f64, height: f64) -> AspectRatio {
        let ratio = width / height;
        let mut closest = AspectRatio::ALL[0];
        let mut min_diff = (ratio - closest.value()).abs();

        for candidate in AspectRatio::ALL {
            let diff = (ratio - candidate.value()).abs();
            if diff < min_diff {
                min_diff = diff;
                closest = candidate;
            }
        }

        closest
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AspectRatio {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Dimension shortcuts offered next to the width/height fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub label: &'static str,
    pub width: u32,
    pub height: u32,
}

pub const PRESETS: [Preset; 4] = [
    Preset { label: "1:1", width: 1080, height: 1080 },
    Preset { label: "9:16", width: 1080, height: 1920 },
    Preset { label: "16:9", width: 1920, height: 1080 },
    Preset { label: "4:5", width: 1080, height: 1350 },
];

pub fn find_preset(label: &str) -> Option<Preset> {
    PRESETS.iter().copied().find(|p| p.label == label.trim())
}

/// Parses `1080x1920`. `X` and `*` are accepted as separators too.
pub fn parse_size(input: &str) -> Option<(u32, u32)> {
    let (w, h) = input.trim().split_once(|c: char| c == 'x' || c == 'X' || c == '*')?;
    let width: u32 = w.trim().parse().ok()?;
    let height: u32 = h.trim().parse().ok()?;
    if width == 0 || height == 0 {
        return None;
    }
    Some((width, height))
}
