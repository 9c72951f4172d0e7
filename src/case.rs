//! Splitting camel-case identifiers into words.

use std::iter::FusedIterator;

/// Splits a camelCase or PascalCase identifier into its words.
///
/// A new word starts at an uppercase character that either follows a
/// character which is not uppercase, or is followed by a lowercase
/// character. Runs of uppercase letters such as acronyms therefore stay
/// together as one word.
///
/// The returned words borrow from `name` and concatenate back to it. Characters
/// that are not letters never start a word, so words made up only of whitespace or
/// punctuation are kept rather than dropped: `" Bar"` splits into `" "` and `"Bar"`.
///
/// # Examples
///
/// ```
/// # use field_naming::split_camel_case;
/// let words: Vec<&str> = split_camel_case("fooBARFooBar").collect();
/// assert_eq!(words, ["foo", "BAR", "Foo", "Bar"]);
///
/// assert_eq!(split_camel_case("").count(), 0);
/// ```
pub fn split_camel_case(name: &str) -> Words<'_> {
    Words { rest: name }
}

/// An iterator over the words of a camel-case identifier.
///
/// Created by [`split_camel_case()`].
#[derive(Debug, Clone)]
pub struct Words<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Words<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        let (word, rest) = self.rest.split_at(word_len(self.rest));
        self.rest = rest;
        Some(word)
    }
}

impl<'a> FusedIterator for Words<'a> {}

/// Returns the byte length of the word at the start of `s`.
fn word_len(s: &str) -> usize {
    let mut chars = s.char_indices().peekable();
    let mut prev = match chars.next() {
        Some((_, ch)) => ch,
        None => return 0,
    };

    while let Some((idx, ch)) = chars.next() {
        if ch.is_uppercase() {
            let lowercase_next = matches!(chars.peek(), Some(&(_, next)) if next.is_lowercase());
            if !prev.is_uppercase() || lowercase_next {
                return idx;
            }
        }
        prev = ch;
    }

    s.len()
}

/// Abbreviates a camel-case property name to the lowercased first letter of each word.
///
/// This is the field name produced by
/// [`CamelCaseAbbreviatingStrategy`](crate::CamelCaseAbbreviatingStrategy).
///
/// The result has exactly one character per word. Where lowercasing a letter gives
/// more than one character, as for `İ`, only the first is kept. Uppercase letters
/// with no lowercase form, such as `ℂ`, are kept as they are.
///
/// # Examples
///
/// ```
/// # use field_naming::abbreviate;
/// assert_eq!(abbreviate("fooBar"), "fb");
/// assert_eq!(abbreviate("fooBARFooBar"), "fbfb");
/// assert_eq!(abbreviate(""), "");
/// ```
pub fn abbreviate(name: &str) -> String {
    split_camel_case(name)
        .filter_map(|word| word.chars().next()?.to_lowercase().next())
        .collect()
}

pub(crate) fn to_lower_delimited(name: &str, delimiter: &str) -> String {
    let mut result = String::with_capacity(name.len());

    for (idx, word) in split_camel_case(name).enumerate() {
        if idx != 0 {
            result.push_str(delimiter);
        }
        result.extend(word.chars().flat_map(char::to_lowercase));
    }

    result
}
