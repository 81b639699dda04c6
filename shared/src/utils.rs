use chrono::NaiveDate;

/// Lowercase the text and strip everything that is not alphanumeric or whitespace.
pub fn normalize_text(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}

/// Count how many of `keywords` occur in `text`, case-insensitively.
pub fn keyword_overlap<S: AsRef<str>>(text: &str, keywords: &[S]) -> usize {
    let haystack = text.to_lowercase();
    keywords
        .iter()
        .filter(|k| haystack.contains(&k.as_ref().to_lowercase()))
        .count()
}

/// Render a `YYYY-MM-DD` date for display; anything else passes through unchanged.
pub fn format_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%B %d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}
