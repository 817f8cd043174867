//! Line-oriented heuristics over markdown text.

use regex::{Regex, RegexSet};
use std::sync::LazyLock;

/// Longest description kept, in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 100;

const ELLIPSIS: &str = "...";

static H1_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#\s+(.+)$").unwrap());

/// Textual shapes that suggest a command takes arguments.
static ARGUMENT_PATTERNS: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new([
        r"\[.+?\]",   // [arg]
        r"\{.+?\}",   // {arg}
        r"\$\d+",     // $1, $2
        r"\$\{.+?\}", // ${arg}
        r"<.+?>",     // <arg>
        r"--\w+",     // --flag
        r"-\w\s",     // -f
    ])
    .unwrap()
});

/// Text of the first level-1 heading (`# Title`), trimmed.
pub fn first_heading(content: &str) -> Option<&str> {
    content.lines().find_map(|line| {
        H1_PATTERN
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim())
            .filter(|text| !text.is_empty())
    })
}

/// First non-empty line, trimmed, that does not start with any of
/// `skip_prefixes`.
pub fn first_text_line<'a>(content: &'a str, skip_prefixes: &[&str]) -> Option<&'a str> {
    content
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !skip_prefixes.iter().any(|p| line.starts_with(p)))
}

/// Cut `text` to [`DESCRIPTION_MAX_CHARS`], replacing the tail with `...`.
pub fn truncate_description(text: &str) -> String {
    if text.chars().count() <= DESCRIPTION_MAX_CHARS {
        return text.to_string();
    }
    let kept: String = text
        .chars()
        .take(DESCRIPTION_MAX_CHARS - ELLIPSIS.len())
        .collect();
    format!("{kept}{ELLIPSIS}")
}

/// Description of a markdown artifact: the first H1, else the first plain
/// text line, truncated.
pub fn describe(content: &str) -> Option<String> {
    first_heading(content)
        .or_else(|| first_text_line(content, &["#", "<!--"]))
        .map(truncate_description)
}

/// Heuristic: does the text look like it documents arguments?
pub fn has_argument_markers(content: &str) -> bool {
    ARGUMENT_PATTERNS.is_match(content)
}
