//! Front-matter block extraction for markdown files.

/// Locates the `---`-delimited metadata block at the top of a markdown file.
pub struct FrontmatterParser;

impl FrontmatterParser {
    /// Split content into the front-matter block and the body after it.
    ///
    /// The first line must be `---` (trailing whitespace allowed); the block
    /// ends at the next line that starts with `---`.
    fn split(content: &str) -> Option<(&str, &str)> {
        let after_open = content.strip_prefix("---")?;
        let newline = after_open.find('\n')?;
        if !after_open[..newline].trim().is_empty() {
            return None;
        }

        let inner = &after_open[newline + 1..];
        let close = inner.find("\n---")?;
        let block = &inner[..close];

        let closing_line = &inner[close + 1..];
        let body = closing_line
            .find('\n')
            .map_or("", |idx| &closing_line[idx + 1..]);

        Some((block, body))
    }

    /// Extract the front-matter block, without its delimiter lines.
    ///
    /// # Example
    /// ```
    /// use cc_explorer::parser::FrontmatterParser;
    /// let content = "---\nname: test\n---\n# Content";
    /// assert_eq!(FrontmatterParser::extract(content), Some("name: test"));
    /// ```
    pub fn extract(content: &str) -> Option<&str> {
        Self::split(content).map(|(block, _)| block)
    }

    /// Content after the front-matter block, or the whole content if there
    /// is none.
    pub fn body(content: &str) -> &str {
        Self::split(content).map_or(content, |(_, body)| body)
    }
}
