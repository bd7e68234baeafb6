//! Small stateful widgets shared by the TUI: a bounded scrollable list
//! and a cursor-aware input box.

use ratatui::widgets::{ListItem, ListState, ScrollbarState};

/// A bounded list of rendered lines plus the list/scrollbar state needed
/// to render it. New items go to the front; the list is drawn bottom-to-top
/// so the newest line sits just above the input box.
pub struct ScrollableList {
    pub list_items: Vec<ListItem<'static>>,
    pub list_state: ListState,
    pub scroll_state: ScrollbarState,
    max_items: usize,
}

impl ScrollableList {
    pub fn new(max_items: usize) -> Self {
        Self {
            list_items: Vec::new(),
            list_state: ListState::default(),
            scroll_state: ScrollbarState::default(),
            max_items,
        }
    }

    pub fn push(&mut self, item: ListItem<'static>) {
        self.list_items.insert(0, item);
        self.list_items.truncate(self.max_items);
        self.scroll_state = self.scroll_state.content_length(self.list_items.len());
    }

    /// Scroll towards older items.
    pub fn move_up(&mut self) {
        let last = self.list_items.len().saturating_sub(1);
        let next = match self.list_state.selected() {
            Some(idx) => (idx + 1).min(last),
            None => 0,
        };
        self.list_state.select(Some(next));
        self.scroll_state = self.scroll_state.position(next);
    }

    /// Scroll towards the newest item.
    pub fn move_down(&mut self) {
        let next = self
            .list_state
            .selected()
            .map_or(0, |idx| idx.saturating_sub(1));
        self.list_state.select(Some(next));
        self.scroll_state = self.scroll_state.position(next);
    }

    /// Jump to the oldest item.
    pub fn jump_to_first(&mut self) {
        let last = self.list_items.len().saturating_sub(1);
        self.list_state.select(Some(last));
        self.scroll_state = self.scroll_state.position(last);
    }

    /// Jump back to the newest item.
    pub fn jump_to_last(&mut self) {
        self.list_state.select(Some(0));
        self.scroll_state = self.scroll_state.position(0);
    }
}

/// Single-line input with a character cursor.
pub struct UserInput {
    pub value: String,
    /// Cursor position in characters, not bytes.
    pub char_idx: usize,
}

impl UserInput {
    pub fn new() -> Self {
        Self {
            value: String::new(),
            char_idx: 0,
        }
    }

    /// Byte offset of the cursor, for splicing into the string.
    fn byte_idx(&self) -> usize {
        self.value
            .char_indices()
            .map(|(idx, _)| idx)
            .nth(self.char_idx)
            .unwrap_or(self.value.len())
    }

    pub fn input(&mut self, c: char) {
        let at = self.byte_idx();
        self.value.insert(at, c);
        self.char_idx += 1;
    }

    pub fn backspace(&mut self) {
        if self.char_idx > 0 {
            self.char_idx -= 1;
            let at = self.byte_idx();
            self.value.remove(at);
        }
    }

    pub fn delete(&mut self) {
        if self.char_idx < self.value.chars().count() {
            let at = self.byte_idx();
            self.value.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.char_idx = self.char_idx.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.char_idx = (self.char_idx + 1).min(self.value.chars().count());
    }

    pub fn jump_to_first(&mut self) {
        self.char_idx = 0;
    }

    pub fn jump_to_last(&mut self) {
        self.char_idx = self.value.chars().count();
    }

    /// Take the buffered line, leaving the input empty.
    pub fn submit(&mut self) -> String {
        self.char_idx = 0;
        std::mem::take(&mut self.value)
    }
}

impl Default for UserInput {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_inserts_at_cursor() {
        let mut input = UserInput::new();
        for c in "pge".chars() {
            input.input(c);
        }
        input.move_left();
        input.move_left();
        input.input('a');
        assert_eq!(input.value, "page");
        assert_eq!(input.char_idx, 2);
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut input = UserInput::new();
        for c in "abc".chars() {
            input.input(c);
        }
        input.backspace();
        assert_eq!(input.value, "ab");
        input.jump_to_first();
        input.delete();
        assert_eq!(input.value, "b");
        // Deleting at the end is a no-op.
        input.jump_to_last();
        input.delete();
        assert_eq!(input.value, "b");
    }

    #[test]
    fn test_submit_resets() {
        let mut input = UserInput::new();
        for c in "back".chars() {
            input.input(c);
        }
        assert_eq!(input.submit(), "back");
        assert!(input.value.is_empty());
        assert_eq!(input.char_idx, 0);
    }

    #[test]
    fn test_cursor_is_char_aware() {
        let mut input = UserInput::new();
        for c in "héllo".chars() {
            input.input(c);
        }
        input.jump_to_first();
        input.move_right();
        input.delete();
        assert_eq!(input.value, "hllo");
    }

    #[test]
    fn test_scrollable_list_is_bounded() {
        let mut list = ScrollableList::new(3);
        for i in 0..5 {
            list.push(ListItem::new(format!("line {i}")));
        }
        assert_eq!(list.list_items.len(), 3);
    }
}
