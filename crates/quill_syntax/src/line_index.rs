use rustc_hash::FxHashMap;
use text_size::TextSize;

/// Maps offsets in a text to zero-based line/column positions. Columns are
/// counted in UTF-16 code units, which is what editors expect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineIndex {
    /// Offset of the first character of every line
    line_starts: Vec<TextSize>,

    /// Non-ASCII characters per line, relative to the start of the line
    wide_chars: FxHashMap<u32, Vec<WideChar>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineCol {
    pub line: u32,
    pub col_utf16: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct WideChar {
    start: TextSize,
    end: TextSize,
}

impl WideChar {
    /// The number of bytes minus the number of UTF-16 code units.
    fn surplus(self) -> u32 {
        let utf8_len = u32::from(self.end - self.start);
        let utf16_len = if utf8_len == 4 { 2 } else { 1 };
        utf8_len - utf16_len
    }
}

impl LineIndex {
    pub fn new(text: &str) -> LineIndex {
        let mut line_starts = vec![TextSize::from(0)];
        let mut wide_chars = FxHashMap::default();
        let mut current_line = Vec::new();
        let mut line_start = TextSize::from(0);

        for (offset, c) in text.char_indices() {
            let offset = TextSize::from(offset as u32);
            if c == '\n' {
                if !current_line.is_empty() {
                    wide_chars.insert(line_starts.len() as u32 - 1, std::mem::take(&mut current_line));
                }
                line_start = offset + TextSize::of(c);
                line_starts.push(line_start);
            } else if !c.is_ascii() {
                current_line.push(WideChar {
                    start: offset - line_start,
                    end: offset - line_start + TextSize::of(c),
                });
            }
        }
        if !current_line.is_empty() {
            wide_chars.insert(line_starts.len() as u32 - 1, current_line);
        }

        LineIndex {
            line_starts,
            wide_chars,
        }
    }

    /// Returns the offset of the first character of the line that contains
    /// `offset`.
    pub fn line_start(&self, offset: TextSize) -> TextSize {
        self.line_starts[self.line_of(offset)]
    }

    /// Returns the line and column at the given offset.
    pub fn line_col(&self, offset: TextSize) -> LineCol {
        let line = self.line_of(offset);
        let col = offset - self.line_starts[line];
        let surplus: u32 = self
            .wide_chars
            .get(&(line as u32))
            .into_iter()
            .flatten()
            .take_while(|c| c.end <= col)
            .map(|c| c.surplus())
            .sum();

        LineCol {
            line: line as u32,
            col_utf16: u32::from(col) - surplus,
        }
    }

    /// Returns the offset of the given line and column.
    pub fn offset(&self, line_col: LineCol) -> TextSize {
        let mut col = line_col.col_utf16;
        if let Some(chars) = self.wide_chars.get(&line_col.line) {
            for c in chars {
                if col > u32::from(c.start) {
                    col += c.surplus();
                } else {
                    break;
                }
            }
        }
        self.line_starts[line_col.line as usize] + TextSize::from(col)
    }

    fn line_of(&self, offset: TextSize) -> usize {
        self.line_starts.partition_point(|&start| start <= offset) - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_col(line: u32, col_utf16: u32) -> LineCol {
        LineCol { line, col_utf16 }
    }

    #[test]
    fn ascii_positions() {
        let index = LineIndex::new("hello\nworld");
        assert_eq!(index.line_col(0.into()), line_col(0, 0));
        assert_eq!(index.line_col(5.into()), line_col(0, 5));
        assert_eq!(index.line_col(6.into()), line_col(1, 0));
        assert_eq!(index.line_col(8.into()), line_col(1, 2));
        assert_eq!(index.line_start(9.into()), TextSize::from(6));
        assert_eq!(index.line_start(5.into()), TextSize::from(0));
    }

    #[test]
    fn utf16_columns() {
        // `é` is two bytes but a single UTF-16 unit, `𝕏` is four bytes and two units.
        let text = "a\né = 𝕏.b";
        let index = LineIndex::new(text);
        let dot = TextSize::from(text.find('.').unwrap() as u32);
        assert_eq!(index.line_col(dot), line_col(1, 6));
        assert_eq!(index.offset(line_col(1, 6)), dot);
        assert_eq!(index.offset(line_col(1, 0)), TextSize::from(2));
    }
}
