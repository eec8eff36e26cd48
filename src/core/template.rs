//! Line templates
//!
//! A transport's `log_format` is a plain string with tokens:
//!
//! | token            | replaced with                                 |
//! |------------------|-----------------------------------------------|
//! | `{time}`         | timestamp rendered by the transport           |
//! | `{level}`        | level label (plain or colour-wrapped)         |
//! | `{name}`         | logger name                                   |
//! | `{content}`      | space-joined message values                   |
//! | `{fileName}`     | basename of the calling source file           |
//! | `{lineNumber}`   | line of the call                              |
//! | `{functionName}` | enclosing function of the call                |
//! | `{columnNumber}` | column of the call                            |
//!
//! Substitution is literal and replaces only the first occurrence of each
//! token. Tokens are substituted in the order `{time}`, `{content}`,
//! `{name}`, the call-site tokens, then `{level}`; a token appearing inside an
//! earlier substitution is therefore replaced too. Unknown tokens are left as
//! they are.

use super::call_site::CallSite;
use super::log_level::LoggerLevel;

pub const TIME: &str = "{time}";
pub const LEVEL: &str = "{level}";
pub const NAME: &str = "{name}";
pub const CONTENT: &str = "{content}";
pub const FILE_NAME: &str = "{fileName}";
pub const LINE_NUMBER: &str = "{lineNumber}";
pub const FUNCTION_NAME: &str = "{functionName}";
pub const COLUMN_NUMBER: &str = "{columnNumber}";

/// Default line layout of every transport.
pub const DEFAULT_LOG_FORMAT: &str = "{time} | {level} | {name} | {content}";

/// The two variants of one substituted line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    pub raw: String,
    pub formatted: String,
}

/// Inputs shared by every token of one line.
#[derive(Debug, Clone, Copy)]
pub struct LineParts<'a> {
    pub time: &'a str,
    pub level: LoggerLevel,
    pub name: &'a str,
    pub content: &'a str,
    pub call_site: Option<&'a CallSite>,
}

fn replace_first(line: String, token: &str, value: &str) -> String {
    if line.contains(token) {
        line.replacen(token, value, 1)
    } else {
        line
    }
}

/// Substitute every token except `{level}`.
pub fn substitute(template: &str, parts: &LineParts<'_>) -> String {
    let mut line = template.to_string();
    line = replace_first(line, TIME, parts.time);
    line = replace_first(line, CONTENT, parts.content);
    line = replace_first(line, NAME, parts.name);

    if let Some(site) = parts.call_site {
        if let Some(file) = &site.file_name {
            line = replace_first(line, FILE_NAME, file);
        }
        if let Some(number) = site.line_number {
            line = replace_first(line, LINE_NUMBER, &number.to_string());
        }
        if let Some(function) = &site.function_name {
            line = replace_first(line, FUNCTION_NAME, function);
        }
        if let Some(number) = site.column_number {
            line = replace_first(line, COLUMN_NUMBER, &number.to_string());
        }
    }

    line
}

/// Substitute the whole template, producing the raw and formatted variants.
pub fn render(template: &str, parts: &LineParts<'_>) -> RenderedLine {
    let line = substitute(template, parts);
    let raw = line.replacen(LEVEL, parts.level.label(), 1);
    let formatted = line.replacen(LEVEL, &parts.level.colored_label(), 1);
    RenderedLine { raw, formatted }
}
