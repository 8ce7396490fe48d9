/// Editable text with a character-based cursor.
///
/// Backs the editor body as well as the single-line search, terminal and
/// new-item inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    /// Cursor position measured in Unicode scalar values from the start.
    pub cursor: usize,
    text: String,
}

/// Spaces inserted for a tab key press in the editor body.
const TAB_WIDTH: usize = 2;

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an input state from existing text with the cursor at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();

        Self { cursor, text }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Drains and returns the text buffer, then resets the cursor to `0`.
    pub fn take_text(&mut self) -> String {
        self.cursor = 0;

        std::mem::take(&mut self.text)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn insert_char(&mut self, ch: char) {
        let byte_offset = self.byte_offset();
        self.text.insert(byte_offset, ch);
        self.cursor += 1;
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    /// Inserts spaces up to the next indentation stop.
    pub fn insert_tab(&mut self) {
        let (_, column) = self.cursor_line_column();
        let width = TAB_WIDTH - column % TAB_WIDTH;
        let byte_offset = self.byte_offset();
        self.text.insert_str(byte_offset, &" ".repeat(width));
        self.cursor += width;
    }

    /// Deletes the character immediately before the cursor.
    pub fn delete_backward(&mut self) {
        if self.cursor == 0 {
            return;
        }

        let start = self.byte_offset_at(self.cursor - 1);
        let end = self.byte_offset();
        self.text.replace_range(start..end, "");
        self.cursor -= 1;
    }

    /// Deletes the character at the cursor position.
    pub fn delete_forward(&mut self) {
        if self.cursor >= self.char_count() {
            return;
        }

        let start = self.byte_offset();
        let end = self.byte_offset_at(self.cursor + 1);
        self.text.replace_range(start..end, "");
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    /// Moves the cursor to the previous line, keeping the column when the
    /// line is long enough.
    pub fn move_up(&mut self) {
        let (line, column) = self.cursor_line_column();
        if line == 0 {
            self.cursor = 0;

            return;
        }

        self.cursor = self.position_at(line - 1, column);
    }

    /// Moves the cursor to the next line, keeping the column when the line
    /// is long enough.
    pub fn move_down(&mut self) {
        let (line, column) = self.cursor_line_column();
        if line + 1 >= self.line_count() {
            self.cursor = self.char_count();

            return;
        }

        self.cursor = self.position_at(line + 1, column);
    }

    /// Moves the cursor to the start of its line.
    pub fn move_line_start(&mut self) {
        let (line, _) = self.cursor_line_column();
        self.cursor = self.position_at(line, 0);
    }

    /// Moves the cursor to the end of its line.
    pub fn move_line_end(&mut self) {
        let (line, _) = self.cursor_line_column();
        self.cursor = self.position_at(line, usize::MAX);
    }

    /// Returns the zero-based `(line, column)` of the cursor.
    pub fn cursor_line_column(&self) -> (usize, usize) {
        let mut line = 0;
        let mut column = 0;

        for ch in self.text.chars().take(self.cursor) {
            if ch == '\n' {
                line += 1;
                column = 0;
            } else {
                column += 1;
            }
        }

        (line, column)
    }

    pub fn line_count(&self) -> usize {
        self.text.chars().filter(|&ch| ch == '\n').count() + 1
    }

    /// Character index of `column` on `line`, clamped to the line length.
    fn position_at(&self, line: usize, column: usize) -> usize {
        let mut line_start = 0;

        for (index, text_line) in self.text.split('\n').enumerate() {
            let line_len = text_line.chars().count();
            if index == line {
                return line_start + column.min(line_len);
            }
            line_start += line_len + 1;
        }

        self.char_count()
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_offset(&self) -> usize {
        self.byte_offset_at(self.cursor)
    }

    fn byte_offset_at(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map_or(self.text.len(), |(index, _)| index)
    }
}
