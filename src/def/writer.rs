// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use std::fs;
use std::path::Path;

use log::info;

use super::reader::DefDocument;
use crate::error::DefError;

impl DefDocument {
    /// Content with the DIEAREA lines replaced by a single `statement` line
    ///
    /// All other lines, including their terminators, are kept as they were.
    pub fn with_die_area(&self, statement: &str) -> String {
        let span = self.die_area_span;
        let mut output = String::with_capacity(self.content.len() + statement.len());

        for (i, line) in self.content.split_inclusive('\n').enumerate() {
            if i < span.first || i > span.last {
                output.push_str(line);
            } else if i == span.last {
                output.push_str(statement);
                output.push_str(line_ending(line));
            }
        }
        output
    }
}

fn line_ending(line: &str) -> &str {
    if line.ends_with("\r\n") {
        "\r\n"
    } else if line.ends_with('\n') {
        "\n"
    } else {
        ""
    }
}

/// Write DEF text to `path`
pub fn write_def<P: AsRef<Path>>(path: P, content: &str) -> Result<(), DefError> {
    let path = path.as_ref();
    fs::write(path, content).map_err(|e| DefError::io(path, e))?;
    info!("[SAVE] Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_single_line() {
        let doc = DefDocument::parse(
            "VERSION 5.8 ;\nDIEAREA ( 0 0 ) ( 10 10 ) ;\nEND DESIGN\n".to_string(),
        )
        .unwrap();
        let out = doc.with_die_area("DIEAREA ( 0 0 ) ( 20 20 ) ;");
        assert_eq!(
            out,
            "VERSION 5.8 ;\nDIEAREA ( 0 0 ) ( 20 20 ) ;\nEND DESIGN\n"
        );
    }

    #[test]
    fn test_replace_multi_line_keeps_crlf() {
        let doc = DefDocument::parse(
            "VERSION 5.8 ;\r\nDIEAREA ( 0 0 )\r\n  ( 10 10 ) ;\r\nEND DESIGN".to_string(),
        )
        .unwrap();
        let out = doc.with_die_area("DIEAREA ( 1 1 ) ( 9 9 ) ;");
        assert_eq!(
            out,
            "VERSION 5.8 ;\r\nDIEAREA ( 1 1 ) ( 9 9 ) ;\r\nEND DESIGN"
        );
    }

    #[test]
    fn test_replace_last_line_without_newline() {
        let doc = DefDocument::parse("DIEAREA ( 0 0 ) ( 10 10 ) ;".to_string()).unwrap();
        assert_eq!(doc.with_die_area("DIEAREA ( 0 0 ) ( 5 5 ) ;"), "DIEAREA ( 0 0 ) ( 5 5 ) ;");
    }
}
