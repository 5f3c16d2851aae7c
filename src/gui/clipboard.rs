//! Clipboard access for the URL field

use arboard::Clipboard;

/// Read the clipboard and keep only its first non-empty line, trimmed
pub fn paste_url() -> Result<String, String> {
    let mut clipboard =
        Clipboard::new().map_err(|e| format!("Failed to access clipboard: {}", e))?;

    let content = clipboard
        .get_text()
        .map_err(|e| format!("Failed to read clipboard: {}", e))?;

    first_line(&content).ok_or_else(|| "Clipboard is empty".to_string())
}

fn first_line(content: &str) -> Option<String> {
    content
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}
