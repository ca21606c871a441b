//! Single-line text entry backing the "new task" field.

use unicode_segmentation::UnicodeSegmentation;

/// Uncommitted text of the entry field.
///
/// The cursor counts grapheme clusters, so a combining sequence or an emoji
/// with modifiers is moved over and deleted as one unit.
#[derive(Debug, Default, Clone)]
pub(super) struct InputField {
    buffer: String,
    cursor: usize,
}

impl InputField {
    pub(super) fn value(&self) -> &str {
        &self.buffer
    }

    pub(super) const fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Cursor position in grapheme clusters.
    #[cfg(test)]
    pub(super) const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Text to the left of the cursor.
    pub(super) fn before_cursor(&self) -> &str {
        &self.buffer[..self.byte_offset(self.cursor)]
    }

    fn grapheme_count(&self) -> usize {
        self.buffer.graphemes(true).count()
    }

    /// Byte offset of the grapheme at `index` (or the end of the buffer).
    fn byte_offset(&self, index: usize) -> usize {
        self.buffer
            .grapheme_indices(true)
            .nth(index)
            .map_or(self.buffer.len(), |(offset, _)| offset)
    }

    pub(super) fn insert(&mut self, ch: char) {
        let offset = self.byte_offset(self.cursor);
        let before = self.grapheme_count();
        self.buffer.insert(offset, ch);
        // A combining mark merges into the previous cluster instead of adding one.
        let added = self.grapheme_count().saturating_sub(before);
        self.cursor += added;
    }

    pub(super) fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let start = self.byte_offset(self.cursor - 1);
        let end = self.byte_offset(self.cursor);
        self.buffer.replace_range(start..end, "");
        self.cursor -= 1;
    }

    pub(super) fn delete(&mut self) {
        if self.cursor >= self.grapheme_count() {
            return;
        }
        let start = self.byte_offset(self.cursor);
        let end = self.byte_offset(self.cursor + 1);
        self.buffer.replace_range(start..end, "");
    }

    pub(super) const fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub(super) fn move_right(&mut self) {
        if self.cursor < self.grapheme_count() {
            self.cursor += 1;
        }
    }

    pub(super) const fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub(super) fn move_end(&mut self) {
        self.cursor = self.grapheme_count();
    }

    /// Hand over the typed text and leave the field empty.
    pub(super) fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> InputField {
        let mut field = InputField::default();
        for ch in text.chars() {
            field.insert(ch);
        }
        field
    }

    #[test]
    fn typing_appends_at_cursor() {
        let field = typed("abc");
        assert_eq!(field.value(), "abc");
        assert_eq!(field.cursor(), 3);
    }

    #[test]
    fn insert_in_the_middle() {
        let mut field = typed("ac");
        field.move_left();
        field.insert('b');
        assert_eq!(field.value(), "abc");
        assert_eq!(field.cursor(), 2);
    }

    #[test]
    fn backspace_and_delete_respect_bounds() {
        let mut field = typed("ab");
        field.delete();
        assert_eq!(field.value(), "ab");

        field.move_home();
        field.backspace();
        assert_eq!(field.value(), "ab");

        field.delete();
        assert_eq!(field.value(), "b");
        field.move_end();
        field.backspace();
        assert!(field.is_empty());
    }

    #[test]
    fn combining_mark_is_one_grapheme() {
        let mut field = typed("e\u{0301}x");
        assert_eq!(field.cursor(), 2);

        field.move_left();
        field.backspace();
        assert_eq!(field.value(), "x");
        assert_eq!(field.cursor(), 0);
    }

    #[test]
    fn multibyte_text_is_edited_by_character() {
        let mut field = typed("ação");
        field.move_left();
        field.backspace();
        assert_eq!(field.value(), "aço");
        field.move_right();
        field.move_right();
        assert_eq!(field.cursor(), 3);
    }

    #[test]
    fn before_cursor_follows_graphemes() {
        let mut field = typed("日本語");
        field.move_left();
        assert_eq!(field.before_cursor(), "日本");
        field.move_home();
        assert_eq!(field.before_cursor(), "");
    }

    #[test]
    fn take_clears_field() {
        let mut field = typed("  Buy milk ");
        assert_eq!(field.take(), "  Buy milk ");
        assert!(field.is_empty());
        assert_eq!(field.cursor(), 0);
    }
}
