//! Download filename generation

use regex::Regex;

/// Maximum length of the sanitized title portion
const MAX_TITLE_LEN: usize = 30;

/// Build the local filename for a downloaded sample video.
///
/// The title is sanitized to `[A-Za-z0-9]` (everything else becomes `_`)
/// and truncated, then combined with a unix timestamp so repeated
/// downloads of the same video do not collide.
pub fn download_filename(title: &str, unix_secs: i64) -> String {
    let invalid_chars = Regex::new(r"[^A-Za-z0-9]").unwrap();
    let mut safe_title = invalid_chars.replace_all(title, "_").to_string();

    // All-ASCII after sanitization, so byte truncation is safe
    if safe_title.len() > MAX_TITLE_LEN {
        safe_title.truncate(MAX_TITLE_LEN);
    }

    format!("SaveSora_{}_{}.mp4", safe_title, unix_secs)
}
