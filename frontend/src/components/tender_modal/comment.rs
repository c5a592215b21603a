//! Local comment widget of the tender modal.
//!
//! The comment is never sent to the backend; the editor only tracks whether the
//! user has committed a note and whether the field is currently writable.

/// Maximum comment length, counted in UTF-16 code units like the textarea `maxlength`.
pub const MAX_COMMENT_LEN: usize = 500;

/// Observable state of the comment widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommentState {
    /// No committed comment, field writable, "Добавить" offered.
    Empty,
    /// Committed comment, field read-only, "Редактировать" offered.
    Committed,
    /// Field writable after an explicit edit, "Сохранить" offered.
    Editing,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CommentEditor {
    text: String,
    is_editing: bool,
    has_comment: bool,
}

impl CommentEditor {
    /// Seeds the editor from the comment stored on the tender.
    pub fn new(seed: &str) -> Self {
        Self {
            text: truncate_utf16(seed, MAX_COMMENT_LEN),
            is_editing: false,
            has_comment: !seed.is_empty(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn state(&self) -> CommentState {
        match (self.has_comment, self.is_editing) {
            (_, true) => CommentState::Editing,
            (true, false) => CommentState::Committed,
            (false, false) => CommentState::Empty,
        }
    }

    /// Characters left before the cap is reached.
    pub fn remaining(&self) -> usize {
        MAX_COMMENT_LEN.saturating_sub(utf16_len(&self.text))
    }

    /// Whether the textarea must be rendered disabled.
    pub fn is_read_only(&self) -> bool {
        self.has_comment && !self.is_editing
    }

    /// Whether "Добавить" would commit anything.
    pub fn can_add(&self) -> bool {
        !self.text.trim().is_empty()
    }

    /// Replaces the text with what the user typed. Ignored while read-only.
    pub fn set_text(&mut self, value: &str) {
        if self.is_read_only() {
            return;
        }
        self.text = truncate_utf16(value, MAX_COMMENT_LEN);
    }

    /// Commits the current text if it is not blank. Only meaningful while `Empty`.
    pub fn add(&mut self) {
        if self.state() == CommentState::Empty && self.can_add() {
            self.has_comment = true;
            self.is_editing = false;
        }
    }

    /// Makes a committed comment writable again.
    pub fn edit(&mut self) {
        if self.has_comment {
            self.is_editing = true;
        }
    }

    /// Leaves edit mode; a blank text drops the committed comment.
    pub fn save(&mut self) {
        self.has_comment = !self.text.trim().is_empty();
        self.is_editing = false;
    }
}

fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

/// Cuts `s` to at most `max` UTF-16 code units without splitting a character.
fn truncate_utf16(s: &str, max: usize) -> String {
    let mut units = 0;
    for (byte_idx, ch) in s.char_indices() {
        units += ch.len_utf16();
        if units > max {
            return s[..byte_idx].to_string();
        }
    }
    s.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tender_without_comment_starts_empty_and_writable() {
        let editor = CommentEditor::new("");
        assert_eq!(editor.state(), CommentState::Empty);
        assert!(!editor.is_read_only());
        assert!(!editor.can_add());
        assert_eq!(editor.remaining(), MAX_COMMENT_LEN);
    }

    #[test]
    fn tender_with_comment_starts_committed_and_read_only() {
        let editor = CommentEditor::new("позвонить заказчику");
        assert_eq!(editor.state(), CommentState::Committed);
        assert!(editor.is_read_only());
        assert_eq!(editor.text(), "позвонить заказчику");
    }

    #[test]
    fn remaining_tracks_typed_length() {
        let mut editor = CommentEditor::new("");
        for len in [0, 1, 2, 250, 499, 500] {
            editor.set_text(&"ж".repeat(len));
            assert_eq!(editor.remaining(), MAX_COMMENT_LEN - len);
        }
    }

    #[test]
    fn input_longer_than_cap_is_truncated() {
        let mut editor = CommentEditor::new("");
        editor.set_text(&"a".repeat(MAX_COMMENT_LEN + 20));
        assert_eq!(editor.text().len(), MAX_COMMENT_LEN);
        assert_eq!(editor.remaining(), 0);
    }

    #[test]
    fn truncation_never_splits_surrogate_pairs() {
        let text = format!("{}😀", "a".repeat(MAX_COMMENT_LEN - 1));
        assert_eq!(truncate_utf16(&text, MAX_COMMENT_LEN), "a".repeat(MAX_COMMENT_LEN - 1));
    }

    #[test]
    fn add_with_blank_text_keeps_empty() {
        let mut editor = CommentEditor::new("");
        editor.set_text("   \n\t");
        editor.add();
        assert_eq!(editor.state(), CommentState::Empty);
    }

    #[test]
    fn add_commits_and_locks_field() {
        let mut editor = CommentEditor::new("");
        editor.set_text("ok");
        editor.add();
        assert_eq!(editor.state(), CommentState::Committed);
        assert!(editor.is_read_only());
    }

    #[test]
    fn typing_is_ignored_while_committed() {
        let mut editor = CommentEditor::new("готово");
        editor.set_text("другое");
        assert_eq!(editor.text(), "готово");
    }

    #[test]
    fn edit_then_save_non_blank_returns_to_committed() {
        let mut editor = CommentEditor::new("черновик");
        editor.edit();
        assert_eq!(editor.state(), CommentState::Editing);
        assert!(!editor.is_read_only());

        editor.set_text("финальная версия");
        editor.save();
        assert_eq!(editor.state(), CommentState::Committed);
        assert_eq!(editor.text(), "финальная версия");
    }

    #[test]
    fn save_blank_text_returns_to_empty() {
        let mut editor = CommentEditor::new("черновик");
        editor.edit();
        editor.set_text("  ");
        editor.save();
        assert_eq!(editor.state(), CommentState::Empty);
        assert!(!editor.is_read_only());
    }

    #[test]
    fn edit_without_committed_comment_is_ignored() {
        let mut editor = CommentEditor::new("");
        editor.edit();
        assert_eq!(editor.state(), CommentState::Empty);
    }
}
