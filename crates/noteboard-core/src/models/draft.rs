//! Draft model - the scratch buffer behind the note editor

/// Unsaved note text held apart from the committed notes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub content: String,
}

impl Draft {
    /// Reset both fields to empty strings
    pub fn clear(&mut self) {
        self.title.clear();
        self.content.clear();
    }

    /// True when neither field holds any text
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.title.is_empty() && self.content.is_empty()
    }
}
