// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! DEF statement preprocessor
//!
//! Splits DEF content into logical statements by:
//! - Removing comments (# character when preceded by whitespace)
//! - Merging physical lines until the terminating semicolon
//! - Remembering which physical lines each statement came from, so the
//!   statement can later be replaced in place

/// Inclusive range of physical lines (0-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpan {
    pub first: usize,
    pub last: usize,
}

impl LineSpan {
    pub fn new(first: usize, last: usize) -> Self {
        Self { first, last }
    }

    pub fn contains(&self, line: usize) -> bool {
        self.first <= line && line <= self.last
    }
}

/// One logical statement with its physical line span
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub text: String,
    pub span: LineSpan,
}

impl Statement {
    /// Leading identifier, so `DIEAREA(0 0)` still yields `DIEAREA`
    pub fn keyword(&self) -> Option<&str> {
        let end = self
            .text
            .find(|c: char| !(c.is_alphanumeric() || c == '_'))
            .unwrap_or(self.text.len());
        (end > 0).then(|| &self.text[..end])
    }
}

#[derive(Debug, Default)]
pub struct PreprocessedDef {
    pub statements: Vec<Statement>,
}

impl PreprocessedDef {
    /// First statement whose leading identifier is `keyword`
    pub fn find(&self, keyword: &str) -> Option<&Statement> {
        self.statements
            .iter()
            .find(|s| s.keyword() == Some(keyword))
    }

    /// Prefix a message with the original line number(s) of a statement
    pub fn format_error(statement: &Statement, message: &str) -> String {
        let LineSpan { first, last } = statement.span;
        if first == last {
            format!("Line {}: {}", first + 1, message)
        } else {
            format!("Lines {}-{}: {}", first + 1, last + 1, message)
        }
    }
}

/// Split DEF content into logical statements
///
/// A statement ends at a line containing `;`, at a standalone `END`/`DESIGN`
/// line, at a blank line, or at end of input.
pub fn preprocess(content: &str) -> PreprocessedDef {
    let mut result = PreprocessedDef::default();
    let mut current = String::new();
    let mut first = 0;
    let mut last_line = 0;

    for (i, raw) in content.lines().enumerate() {
        last_line = i;
        let trimmed = remove_comment(raw).trim();

        if trimmed.is_empty() {
            if !current.is_empty() {
                result.statements.push(Statement {
                    text: std::mem::take(&mut current),
                    span: LineSpan::new(first, i - 1),
                });
            }
            continue;
        }

        if current.is_empty() {
            first = i;
        } else {
            current.push(' ');
        }
        current.push_str(trimmed);

        let is_end_statement = trimmed.starts_with("END ")
            || trimmed == "END"
            || trimmed.starts_with("DESIGN ");

        if trimmed.contains(';') || is_end_statement {
            result.statements.push(Statement {
                text: std::mem::take(&mut current),
                span: LineSpan::new(first, i),
            });
        }
    }

    if !current.trim().is_empty() {
        result.statements.push(Statement {
            text: current,
            span: LineSpan::new(first, last_line),
        });
    }

    result
}

/// Strip a trailing comment, `#` only counts at line start or after a space/tab
fn remove_comment(line: &str) -> &str {
    match find_comment_start(line) {
        Some(pos) => &line[..pos],
        None => line,
    }
}

fn find_comment_start(line: &str) -> Option<usize> {
    let bytes = line.as_bytes();
    (0..bytes.len())
        .find(|&i| bytes[i] == b'#' && (i == 0 || bytes[i - 1] == b' ' || bytes[i - 1] == b'\t'))
}
