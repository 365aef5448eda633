//! Frontmatter codec for `SKILL.md` / `AGENT.md` documents.
//!
//! A spec document is a YAML block fenced by `---` lines followed by a free
//! text body:
//!
//! ```text
//! ---
//! name: code-review
//! description: Reviews a diff for correctness.
//! allowed-tools: Read Grep
//! ---
//! Body text, loaded only on demand.
//! ```

pub mod fields;

use crate::error::FrontmatterError;
use crate::resource::{CapabilityResource, Resource, ResourceKind};
use crate::types::SourceType;
use serde_yaml::{Mapping, Value};
use std::io::BufRead;
use std::path::PathBuf;

const DELIMITER: &str = "---";

/// Key holding the tool allowlist.
pub const ALLOWED_TOOLS_KEY: &str = "allowed-tools";

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == DELIMITER
}

/// Split a document into `(frontmatter, body)`.
///
/// The frontmatter is trimmed; the body has leading blank lines and trailing
/// whitespace removed.
pub fn split(document: &str) -> Result<(&str, &str), FrontmatterError> {
    let document = document.strip_prefix('\u{feff}').unwrap_or(document);
    let mut lines = document.split_inclusive('\n');

    match lines.next() {
        Some(first) if is_delimiter(first) => {}
        _ => return Err(FrontmatterError::MissingOpeningDelimiter),
    }

    let start = document.find('\n').map_or(document.len(), |i| i + 1);
    let mut offset = start;
    for line in lines {
        if is_delimiter(line) {
            let frontmatter = document[start..offset].trim();
            let body = trim_blank_lines(&document[offset + line.len()..]);
            return Ok((frontmatter, body));
        }
        offset += line.len();
    }

    Err(FrontmatterError::MissingClosingDelimiter)
}

fn trim_blank_lines(text: &str) -> &str {
    let mut start = 0;
    for line in text.split_inclusive('\n') {
        if !line.trim().is_empty() {
            break;
        }
        start += line.len();
    }
    text[start..].trim_end()
}

/// Read only the frontmatter block from a reader, stopping at the closing
/// delimiter so the body is never buffered.
pub fn read_frontmatter<R: BufRead>(mut reader: R) -> Result<String, FrontmatterError> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    let first = line.strip_prefix('\u{feff}').unwrap_or(&line);
    if !is_delimiter(first) {
        return Err(FrontmatterError::MissingOpeningDelimiter);
    }

    let mut frontmatter = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Err(FrontmatterError::MissingClosingDelimiter);
        }
        if is_delimiter(&line) {
            break;
        }
        frontmatter.push_str(&line);
    }

    Ok(frontmatter.trim().to_string())
}

/// Decode a frontmatter block into a resource with an empty body.
///
/// The returned resource carries `SourceType::Programmatic` and no directory
/// until the caller records where it came from.
pub fn decode_metadata_only<K: ResourceKind>(
    frontmatter: &str,
) -> Result<Resource<K>, FrontmatterError> {
    let fields = parse_mapping(frontmatter)?;

    let name = fields::string(&fields, "name").ok_or(FrontmatterError::MissingField("name"))?;
    let description = fields::string(&fields, "description")
        .ok_or(FrontmatterError::MissingField("description"))?;

    Ok(CapabilityResource {
        name,
        description,
        allowed_tools: fields::token_list(&fields, ALLOWED_TOOLS_KEY),
        extension: K::decode_extension(&fields),
        source: SourceType::Programmatic,
        directory: PathBuf::new(),
        raw_frontmatter: frontmatter.to_string(),
        body: String::new(),
    })
}

/// Decode a whole document, body included.
pub fn decode_full<K: ResourceKind>(document: &str) -> Result<Resource<K>, FrontmatterError> {
    let (frontmatter, body) = split(document)?;
    let mut resource = decode_metadata_only::<K>(frontmatter)?;
    resource.body = body.to_string();
    Ok(resource)
}

fn parse_mapping(frontmatter: &str) -> Result<Mapping, FrontmatterError> {
    if frontmatter.trim().is_empty() {
        return Err(FrontmatterError::MissingField("name"));
    }
    match serde_yaml::from_str::<Value>(frontmatter)? {
        Value::Mapping(fields) => Ok(fields),
        Value::Null => Err(FrontmatterError::MissingField("name")),
        _ => Err(FrontmatterError::NotAMapping),
    }
}
