/// Canonicalize text for skill matching.
///
/// Lowercases the input, drops every ASCII punctuation character, and collapses
/// runs of whitespace (including newlines, tabs and the ASCII information
/// separators `\x1c`..=`\x1f`) into single spaces with no leading or trailing
/// whitespace.
///
/// # Examples
///
/// ```
/// use resume_matcher::core::normalize::normalize;
///
/// assert_eq!(normalize("Python, ML!"), "python ml");
/// assert_eq!(normalize("  Data\n\tAnalysis  "), "data analysis");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    let stripped: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect();

    stripped
        .split(is_separator)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}
