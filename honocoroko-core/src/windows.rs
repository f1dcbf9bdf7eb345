//! Char-indexed views over input text

/// Input text addressed by char position, handing out zero-copy windows
pub(crate) struct CharWindows<'a> {
    text: &'a str,
    chars: Vec<char>,
    // byte offset of every char, plus the end of the text
    bounds: Vec<usize>,
}

impl<'a> CharWindows<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        let mut chars = Vec::with_capacity(text.len());
        let mut bounds = Vec::with_capacity(text.len() + 1);
        for (offset, c) in text.char_indices() {
            chars.push(c);
            bounds.push(offset);
        }
        bounds.push(text.len());
        Self {
            text,
            chars,
            bounds,
        }
    }

    /// Number of chars
    pub(crate) fn len(&self) -> usize {
        self.chars.len()
    }

    pub(crate) fn get(&self, pos: usize) -> Option<char> {
        self.chars.get(pos).copied()
    }

    /// The `len` chars starting at `pos`, or None if that runs past the end
    pub(crate) fn window(&self, pos: usize, len: usize) -> Option<&'a str> {
        if len == 0 || pos + len > self.len() {
            return None;
        }
        Some(&self.text[self.bounds[pos]..self.bounds[pos + len]])
    }
}
