//! Streaming match of a token against a fixed set of spellings.
//!
//! The token is fed one byte at a time and never buffered, so spellings of any
//! length can be recognised without knowing them at compile time.

/// Tracks which of `N` candidate words the bytes seen so far still spell.
///
/// # Example
///
/// ```
/// use textstream_format::WordMatcher;
///
/// let mut matcher = WordMatcher::new(["nan", "inf+", "inf-"]);
/// for &byte in b"inf-" {
///     matcher.feed(byte);
/// }
/// assert_eq!(matcher.matched(), Some(2));
/// ```
#[derive(Clone, Debug)]
pub struct WordMatcher<'a, const N: usize> {
    words: [&'a [u8]; N],
    alive: [bool; N],
    len: usize,
}

impl<'a, const N: usize> WordMatcher<'a, N> {
    #[must_use]
    pub fn new(words: [&'a str; N]) -> Self {
        Self {
            words: words.map(str::as_bytes),
            alive: [true; N],
            len: 0,
        }
    }

    /// Consume the next byte of the token.
    pub fn feed(&mut self, byte: u8) {
        for (word, alive) in self.words.iter().zip(self.alive.iter_mut()) {
            *alive = *alive && word.get(self.len) == Some(&byte);
        }
        self.len = self.len.saturating_add(1);
    }

    /// Index of the first candidate equal to the whole token.
    #[must_use]
    pub fn matched(&self) -> Option<usize> {
        self.words
            .iter()
            .zip(self.alive.iter())
            .position(|(word, &alive)| alive && word.len() == self.len)
    }

    /// Bytes fed so far.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
