/// Text used for the root section when nothing else labels it.
pub const HOME_LABEL: &str = "Home";

/// Turns a raw path segment into a display label: trims whitespace and
/// underscores, folds runs of `-`, `_` and whitespace into one space, and
/// capitalizes a leading lowercase letter.
pub fn humanize(text: &str) -> String {
    let trimmed = text.trim_matches(|ch: char| ch.is_whitespace() || ch == '_');
    let mut output = String::with_capacity(trimmed.len());
    let mut in_separator = false;

    for ch in trimmed.chars() {
        if ch == '-' || ch == '_' || ch.is_whitespace() {
            if !in_separator {
                output.push(' ');
                in_separator = true;
            }
            continue;
        }
        in_separator = false;
        output.push(ch);
    }

    if let Some(first) = output.chars().next()
        && first.is_ascii_lowercase()
    {
        output.replace_range(..1, &first.to_ascii_uppercase().to_string());
    }

    output
}
