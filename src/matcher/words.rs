/// Split an identifier into camel-case words.
///
/// A new word starts at every uppercase letter except the one at the start of
/// the current word, so no word is ever empty and concatenating the result
/// gives back `input`.
///
/// Example: `"fooBarBaz"` -> `["foo", "Bar", "Baz"]`
pub fn split_words(input: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start = 0;

    for (idx, ch) in input.char_indices() {
        if ch.is_uppercase() && idx != start {
            words.push(&input[start..idx]);
            start = idx;
        }
    }

    if start < input.len() {
        words.push(&input[start..]);
    }

    words
}
