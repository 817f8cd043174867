//! Content parsing helpers used by the metadata extractors.
//!
//! - Front-matter blocks (sub-agent definitions)
//! - Markdown headings, first lines and argument markers (commands, sub-agents)
//! - JSON validity (settings files)

pub mod frontmatter;
pub mod json;
pub mod markdown;

pub use frontmatter::FrontmatterParser;
pub use json::JsonParser;
pub use markdown::{
    DESCRIPTION_MAX_CHARS, describe, first_heading, first_text_line, has_argument_markers,
    truncate_description,
};
