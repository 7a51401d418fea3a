/// Sentence-terminal punctuation ignored by the writing-challenge check,
/// in both Japanese and ASCII forms.
const TERMINAL_PUNCTUATION: &[char] = &['。', '｡', '！', '？', '.', '!', '?'];

/// Strips all whitespace (including the full-width space) and, when
/// `strip_punctuation` is set, sentence-terminal punctuation marks.
pub fn normalize(input: &str, strip_punctuation: bool) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .filter(|c| !strip_punctuation || !TERMINAL_PUNCTUATION.contains(c))
        .collect()
}

/// Compares user input against the expected answer. Hiragana has no case, so
/// equality after normalization is the whole rule.
pub fn check_answer(input: &str, expected: &str, strip_punctuation: bool) -> bool {
    normalize(input, strip_punctuation) == normalize(expected, strip_punctuation)
}
