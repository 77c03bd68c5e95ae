use super::*;

#[test]
fn typed_prefix_grows_one_char_at_a_time() {
    assert_eq!(typed_prefix("Secure? YES", 0), "");
    assert_eq!(typed_prefix("Secure? YES", 3), "Sec");
    assert_eq!(typed_prefix("Secure? YES", 11), "Secure? YES");
}

#[test]
fn typed_prefix_past_end_returns_whole_text() {
    assert_eq!(typed_prefix("abc", 100), "abc");
    assert_eq!(typed_prefix("", 5), "");
}

#[test]
fn typed_prefix_respects_multibyte_boundaries() {
    let text = "Eve\u{2019}s bases";
    assert_eq!(typed_prefix(text, 4), "Eve\u{2019}");
    assert_eq!(typed_prefix("\u{2588}\u{2588}", 1), "\u{2588}");
}

#[test]
fn is_complete_counts_characters_not_bytes() {
    assert!(is_complete("\u{2588}", 1));
    assert!(!is_complete("ab", 1));
    assert!(is_complete("", 0));
}
