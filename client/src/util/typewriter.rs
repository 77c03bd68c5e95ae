//! Typewriter reveal math for result lines.
//!
//! Each line types out at a fixed speed. Slicing is done on character
//! boundaries so multi-byte narration never splits a code point.

#[cfg(test)]
#[path = "typewriter_test.rs"]
mod typewriter_test;

/// Milliseconds per typed character.
pub const TYPE_SPEED_MS: u32 = 35;

/// Prefix of `text` containing at most `chars` characters.
#[must_use]
pub fn typed_prefix(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[must_use]
pub fn is_complete(text: &str, chars: usize) -> bool {
    text.chars().count() <= chars
}
