use crate::CliResult;
use clap::{ArgGroup, Args};
use lambda_stubs_core::{ResolvedTarget, SignatureResolver};
use lambda_stubs_java::{JavaResolver, JavaSite};
use std::path::PathBuf;

/// A Java file and a position in it.
#[derive(Args, Debug, Clone)]
#[command(group(ArgGroup::new("position").required(true).args(["offset", "line"])))]
pub struct CursorArgs {
    /// Java source file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
    /// Byte offset of the cursor
    #[arg(long)]
    pub offset: Option<usize>,
    /// 1-based line of the cursor
    #[arg(long, requires = "column")]
    pub line: Option<usize>,
    /// 1-based column of the cursor, in characters
    #[arg(long, requires = "line")]
    pub column: Option<usize>,
}

impl CursorArgs {
    pub fn at_offset(file: impl Into<PathBuf>, offset: usize) -> Self {
        Self {
            file: file.into(),
            offset: Some(offset),
            line: None,
            column: None,
        }
    }

    /// Reads the file and resolves the cursor to a byte offset in it.
    pub fn load(&self) -> CliResult<(String, usize)> {
        let source = std::fs::read_to_string(&self.file)
            .map_err(|e| format!("Cannot read {}: {}", self.file.display(), e))?;
        let offset = match (self.offset, self.line, self.column) {
            (Some(offset), _, _) if offset <= source.len() && source.is_char_boundary(offset) => {
                offset
            }
            (Some(offset), _, _) => {
                return Err(format!(
                    "Offset {} is not a character boundary in {} ({} bytes)",
                    offset,
                    self.file.display(),
                    source.len()
                )
                .into());
            }
            (None, Some(line), Some(column)) => line_col_to_offset(&source, line, column)
                .ok_or_else(|| {
                    format!("{}:{}:{} is outside the file", self.file.display(), line, column)
                })?,
            _ => return Err("Either --offset or --line and --column is required".into()),
        };
        Ok((source, offset))
    }

    /// Loads the file and resolves the lambda site under the cursor.
    pub fn resolve(
        &self,
        resolver: &JavaResolver,
    ) -> CliResult<(String, Option<ResolvedTarget<JavaSite>>)> {
        let (source, offset) = self.load()?;
        let target = resolver.resolve(&source, offset)?;
        Ok((source, target))
    }
}

/// Byte offset of a 1-based line and character column. A column one past
/// the last character addresses the end of the line.
pub fn line_col_to_offset(content: &str, line: usize, column: usize) -> Option<usize> {
    let line_idx = line.checked_sub(1)?;
    let col_idx = column.checked_sub(1)?;

    let mut offset = 0;
    for (i, l) in content.split_inclusive('\n').enumerate() {
        if i == line_idx {
            let text = l.trim_end_matches(['\n', '\r']);
            return text
                .char_indices()
                .map(|(b, _)| b)
                .chain(std::iter::once(text.len()))
                .nth(col_idx)
                .map(|b| offset + b);
        }
        offset += l.len();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_count_characters() {
        let content = "class A {\n  // \u{00e9}t\u{00e9}\n  Runnable r;\n}";
        assert_eq!(line_col_to_offset(content, 1, 1), Some(0));
        assert_eq!(line_col_to_offset(content, 2, 7), Some(10 + 7));
        assert_eq!(line_col_to_offset(content, 3, 13), Some(content.find(';').unwrap()));
    }

    #[test]
    fn end_of_line_is_addressable() {
        let content = "ab\r\ncd";
        assert_eq!(line_col_to_offset(content, 1, 3), Some(2));
        assert_eq!(line_col_to_offset(content, 1, 4), None);
        assert_eq!(line_col_to_offset(content, 2, 3), Some(6));
    }

    #[test]
    fn zero_and_missing_lines_are_rejected() {
        assert_eq!(line_col_to_offset("a", 0, 1), None);
        assert_eq!(line_col_to_offset("a", 1, 0), None);
        assert_eq!(line_col_to_offset("a", 2, 1), None);
    }
}
