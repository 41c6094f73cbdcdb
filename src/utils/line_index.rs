//! Byte offset to line/column conversion

use crate::models::finding::Position;

/// Precomputed line starts for one source text
#[derive(Debug, Clone)]
pub struct LineIndex<'s> {
    source: &'s str,
    line_starts: Vec<usize>,
}

impl<'s> LineIndex<'s> {
    pub fn new(source: &'s str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self {
            source,
            line_starts,
        }
    }

    /// 1-based line and column (in characters) of a byte offset
    ///
    /// Offsets past the end clamp to the end of the source.
    pub fn position(&self, offset: u32) -> Position {
        let mut offset = (offset as usize).min(self.source.len());
        while !self.source.is_char_boundary(offset) {
            offset -= 1;
        }

        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let line_start = self.line_starts[line];

        Position {
            line: line + 1,
            column: self.source[line_start..offset].chars().count() + 1,
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions() {
        let index = LineIndex::new("const a = 1;\nconst b = 2;\n");
        assert_eq!(index.position(0), Position { line: 1, column: 1 });
        assert_eq!(index.position(6), Position { line: 1, column: 7 });
        assert_eq!(index.position(13), Position { line: 2, column: 1 });
        assert_eq!(index.position(19), Position { line: 2, column: 7 });
        assert_eq!(index.line_count(), 3);
    }

    #[test]
    fn test_multibyte_columns() {
        let source = "const é = 'ü'; const x = 1;";
        let index = LineIndex::new(source);
        let offset = source.find("const x").unwrap() as u32;
        assert_eq!(index.position(offset), Position { line: 1, column: 16 });
    }

    #[test]
    fn test_offset_past_end_clamps() {
        let index = LineIndex::new("ab\ncd");
        assert_eq!(index.position(100), Position { line: 2, column: 3 });
    }
}
