//! Left-to-right pattern scanning with an explicit cursor.

use regex::{Match, Regex};

/// Iterator over non-overlapping, non-empty matches of `pattern`.
///
/// The scan position lives in the iterator, so independent scans never
/// share state. A zero-width match does not advance the cursor on its own;
/// the scanner steps past one character and keeps going, and the empty
/// match is not yielded.
pub struct TokenScanner<'p, 'h> {
    pattern: &'p Regex,
    haystack: &'h str,
    cursor: usize,
}

impl<'p, 'h> TokenScanner<'p, 'h> {
    pub fn new(pattern: &'p Regex, haystack: &'h str) -> Self {
        Self {
            pattern,
            haystack,
            cursor: 0,
        }
    }
}

impl<'h> Iterator for TokenScanner<'_, 'h> {
    type Item = Match<'h>;

    fn next(&mut self) -> Option<Match<'h>> {
        while self.cursor <= self.haystack.len() {
            let found = self.pattern.find_at(self.haystack, self.cursor)?;
            if found.end() > found.start() {
                self.cursor = found.end();
                return Some(found);
            }
            self.cursor = next_char_boundary(self.haystack, found.start());
        }
        None
    }
}

/// Offset of the character after `at`, or one past the end.
fn next_char_boundary(s: &str, at: usize) -> usize {
    s[at..].chars().next().map_or(at + 1, |c| at + c.len_utf8())
}
