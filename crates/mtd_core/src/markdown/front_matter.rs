//! YAML front-matter codec.
//!
//! # Responsibility
//! - Encode a flat front-matter record plus free-text body into a single
//!   `---` delimited blob, and decode it back.
//!
//! # Invariants
//! - String-valued header fields are emitted double-quoted, uniformly, as a
//!   post-pass over the serialized mapping rather than a property of the
//!   YAML emitter.
//! - One blank line separates the closing delimiter from the body on
//!   encode; decode strips exactly that one line.
//! - A text without both delimiters, or with a header that is not key/value
//!   YAML, fails to decode instead of degrading.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_yaml::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

const OPEN: &str = "---\n";
const CLOSE: &str = "\n---\n";

pub type FrontMatterResult<T> = Result<T, FrontMatterError>;

/// Malformed front matter, on either codec direction.
#[derive(Debug)]
pub enum FrontMatterError {
    /// No opening/closing `---` delimiter pair was found.
    MissingDelimiters,
    /// The header block is not YAML matching the expected record.
    InvalidHeader(serde_yaml::Error),
    /// The record serialized to something other than a flat key/value map.
    NonMappingHeader,
}

impl Display for FrontMatterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingDelimiters => {
                write!(f, "malformed front matter: missing `---` delimiters")
            }
            Self::InvalidHeader(err) => write!(f, "malformed front matter: {err}"),
            Self::NonMappingHeader => {
                write!(f, "malformed front matter: header is not a key/value mapping")
            }
        }
    }
}

impl Error for FrontMatterError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidHeader(err) => Some(err),
            Self::MissingDelimiters | Self::NonMappingHeader => None,
        }
    }
}

/// Decoded pair of typed header and free-text body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document<T> {
    pub front_matter: T,
    pub body: String,
}

/// Encodes a front-matter record and body as `---\n<yaml>---\n\n<body>\n`.
///
/// # Errors
/// - `NonMappingHeader` when the record is not a flat mapping.
/// - `InvalidHeader` when the record cannot be serialized.
pub fn encode<T: Serialize>(front_matter: &T, body: &str) -> FrontMatterResult<String> {
    let value = serde_yaml::to_value(front_matter).map_err(FrontMatterError::InvalidHeader)?;
    let mapping = value.as_mapping().ok_or(FrontMatterError::NonMappingHeader)?;

    let mut out = String::from(OPEN);
    for (key, field) in mapping {
        let key = key.as_str().ok_or(FrontMatterError::NonMappingHeader)?;
        out.push_str(key);
        out.push_str(": ");
        out.push_str(&render_scalar(field)?);
        out.push('\n');
    }
    out.push_str("---\n");

    // Blank separator line so the closing delimiter never touches body text;
    // round-tripped files must stay parseable by other front-matter tools.
    out.push('\n');
    out.push_str(body);
    if !body.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}

/// Decodes a delimited blob into its typed header and body.
///
/// The single blank line `encode` inserts after the closing delimiter is
/// stripped; the rest of the body is returned verbatim.
///
/// # Errors
/// - `MissingDelimiters` when no `---` block opens the text or it never
///   closes.
/// - `InvalidHeader` when the header does not parse into the record type.
pub fn decode<T: DeserializeOwned>(text: &str) -> FrontMatterResult<Document<T>> {
    let rest = text
        .strip_prefix(OPEN)
        .ok_or(FrontMatterError::MissingDelimiters)?;
    let (header, body) = split_close(rest)?;
    let front_matter = serde_yaml::from_str(header).map_err(FrontMatterError::InvalidHeader)?;
    let body = body.strip_prefix('\n').unwrap_or(body);
    Ok(Document {
        front_matter,
        body: body.to_string(),
    })
}

fn split_close(rest: &str) -> FrontMatterResult<(&str, &str)> {
    if let Some(body) = rest.strip_prefix("---\n") {
        return Ok(("", body));
    }
    if rest == "---" {
        return Ok(("", ""));
    }
    if let Some(pos) = rest.find(CLOSE) {
        return Ok((&rest[..pos + 1], &rest[pos + CLOSE.len()..]));
    }
    if let Some(header) = rest.strip_suffix("\n---") {
        return Ok((header, ""));
    }
    Err(FrontMatterError::MissingDelimiters)
}

fn render_scalar(value: &Value) -> FrontMatterResult<String> {
    match value {
        Value::String(text) => Ok(quote_double(text)),
        other => {
            let rendered = serde_yaml::to_string(other).map_err(FrontMatterError::InvalidHeader)?;
            Ok(rendered.trim_end().to_string())
        }
    }
}

fn quote_double(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for c in text.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            other => quoted.push(other),
        }
    }
    quoted.push('"');
    quoted
}
