use tower_lsp::lsp_types::{Position, Range, TextDocumentContentChangeEvent, Url};

/// Lightweight container for document state
#[derive(Debug, Clone)]
pub struct Document {
    pub content: String,
    pub language_id: String,
    pub version: i32,
}

impl Document {
    pub fn new(content: String, language_id: String, version: i32) -> Self {
        Self {
            content,
            language_id,
            version,
        }
    }

    pub fn is_java(&self, uri: &Url) -> bool {
        self.language_id == "java" || uri.path().ends_with(".java")
    }

    /// Returns the document after applying `changes` in order.
    ///
    /// A change without a range replaces the whole text.
    pub fn apply_changes(&self, changes: &[TextDocumentContentChangeEvent], version: i32) -> Self {
        let mut content = self.content.clone();
        for change in changes {
            match change.range {
                Some(range) => {
                    let start = offset_at(&content, range.start);
                    let end = offset_at(&content, range.end).max(start);
                    content.replace_range(start..end, &change.text);
                }
                None => content = change.text.clone(),
            }
        }
        Self::new(content, self.language_id.clone(), version)
    }
}

/// Byte offset of an LSP position (UTF-16 columns), clamped to the text.
pub fn offset_at(text: &str, position: Position) -> usize {
    let mut line = 0;
    let mut offset = 0;
    let mut chars = text.chars().peekable();

    while line < position.line as usize {
        match chars.next() {
            Some(c) => {
                offset += c.len_utf8();
                if c == '\n' {
                    line += 1;
                } else if c == '\r' {
                    if chars.next_if_eq(&'\n').is_some() {
                        offset += 1;
                    }
                    line += 1;
                }
            }
            None => return offset,
        }
    }

    let mut utf16_count = 0;
    while utf16_count < position.character as usize {
        match chars.next() {
            Some(c) if c != '\n' && c != '\r' => {
                utf16_count += c.len_utf16();
                offset += c.len_utf8();
            }
            _ => break,
        }
    }
    offset
}

/// LSP position of a byte offset.
pub fn position_at(text: &str, offset: usize) -> Position {
    let mut line = 0u32;
    let mut character = 0u32;
    for (i, c) in text.char_indices() {
        if i >= offset {
            break;
        }
        match c {
            '\n' => {
                line += 1;
                character = 0;
            }
            '\r' if text[i + 1..].starts_with('\n') => {}
            '\r' => {
                line += 1;
                character = 0;
            }
            _ => character += c.len_utf16() as u32,
        }
    }
    Position { line, character }
}

pub fn range_of(text: &str, start: usize, end: usize) -> Range {
    Range {
        start: position_at(text, start),
        end: position_at(text, end),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf16_columns_map_to_byte_offsets() {
        let text = "a\n\u{1F600}x = 1;\r\nend";
        let emoji_line = Position {
            line: 1,
            character: 2,
        };
        assert_eq!(offset_at(text, emoji_line), 6);
        assert_eq!(position_at(text, 6), emoji_line);

        let after_crlf = offset_at(
            text,
            Position {
                line: 2,
                character: 1,
            },
        );
        assert_eq!(&text[after_crlf..], "nd");
        assert_eq!(position_at(text, after_crlf).line, 2);
    }

    #[test]
    fn positions_past_the_end_clamp() {
        let text = "ab\ncd";
        assert_eq!(
            offset_at(
                text,
                Position {
                    line: 0,
                    character: 40
                }
            ),
            2
        );
        assert_eq!(
            offset_at(
                text,
                Position {
                    line: 9,
                    character: 0
                }
            ),
            text.len()
        );
    }

    #[test]
    fn incremental_changes_apply_in_order() {
        let doc = Document::new("Runnable r;\n".to_string(), "java".to_string(), 1);
        let changes = vec![
            TextDocumentContentChangeEvent {
                range: Some(Range {
                    start: Position {
                        line: 0,
                        character: 10,
                    },
                    end: Position {
                        line: 0,
                        character: 10,
                    },
                }),
                range_length: None,
                text: " = null".to_string(),
            },
            TextDocumentContentChangeEvent {
                range: Some(Range {
                    start: Position {
                        line: 0,
                        character: 0,
                    },
                    end: Position {
                        line: 0,
                        character: 8,
                    },
                }),
                range_length: None,
                text: "Callable<String>".to_string(),
            },
        ];
        let updated = doc.apply_changes(&changes, 2);
        assert_eq!(updated.content, "Callable<String> r = null;\n");
        assert_eq!(updated.version, 2);

        let full = updated.apply_changes(
            &[TextDocumentContentChangeEvent {
                range: None,
                range_length: None,
                text: "class A {}".to_string(),
            }],
            3,
        );
        assert_eq!(full.content, "class A {}");
    }
}
