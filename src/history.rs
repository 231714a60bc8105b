use crate::record::{GeneratedImage, ImageKind};
use colored::Colorize;

const PROMPT_PREVIEW_CHARS: usize = 48;

fn preview(prompt: &str) -> String {
    let mut short: String = prompt.chars().take(PROMPT_PREVIEW_CHARS).collect();
    if prompt.chars().count() > PROMPT_PREVIEW_CHARS {
        short.push('…');
    }
    short
}

/// One line per record, oldest first. Empty history renders nothing.
pub fn render(history: &[GeneratedImage]) -> Vec<String> {
    history
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let kind = match item.kind {
                ImageKind::Generation => item.kind.to_string().green(),
                ImageKind::Edit => item.kind.to_string().magenta(),
            };
            format!(
                "{:>3}. [{}] {} {} {}",
                i + 1,
                kind,
                item.short_id().dimmed(),
                item.timestamp.format("%H:%M:%S"),
                preview(&item.prompt)
            )
        })
        .collect()
}

pub fn print_history(history: &[GeneratedImage]) {
    if history.is_empty() {
        return;
    }
    println!("{:━^60}", " Archive ".yellow());
    for line in render(history) {
        println!("{}", line);
    }
}

pub fn select(history: &[GeneratedImage], index: usize) -> Option<&GeneratedImage> {
    index.checked_sub(1).and_then(|i| history.get(i))
}
