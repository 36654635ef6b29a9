//! Field name helpers: validation keys, derived labels and class lists.

use std::sync::LazyLock;

use regex::{Captures, Regex};

// Dots and apostrophes continue a word; anything else that isn't a letter
// ends it.
static WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\p{L})([\p{L}.'\x{2019}]*)").expect("word pattern is valid")
});

/// Converts an input name into the key its validation errors are stored
/// under.
///
/// Replacements run in sequence: `.` becomes `_`, `[]` is dropped, `[`
/// becomes `.` and `]` is dropped.
///
/// ```
/// use oxide_field::naming::validation_key;
///
/// assert_eq!(validation_key("user.email"), "user_email");
/// assert_eq!(validation_key("user[email]"), "user.email");
/// assert_eq!(validation_key("tags[]"), "tags");
/// ```
pub fn validation_key(name: &str) -> String {
    name.replace('.', "_")
        .replace("[]", "")
        .replace('[', ".")
        .replace(']', "")
}

/// Derives a display label from an input name: underscores become spaces
/// and every word is title-cased.
///
/// A word starts at a letter that follows anything but a letter, `.` or
/// `'`. Digits end a word, so `2fa` becomes `2Fa`.
///
/// ```
/// use oxide_field::naming::label_from_name;
///
/// assert_eq!(label_from_name("first_name"), "First Name");
/// assert_eq!(label_from_name("EMAIL"), "Email");
/// assert_eq!(label_from_name("user.email"), "User.email");
/// ```
pub fn label_from_name(name: &str) -> String {
    let spaced = name.replace('_', " ");
    WORD.replace_all(&spaced, |caps: &Captures<'_>| {
        format!("{}{}", caps[1].to_uppercase(), caps[2].to_lowercase())
    })
    .into_owned()
}

/// Splits a space-separated class string into its classes.
pub fn class_list(classes: &str) -> Vec<String> {
    classes.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_key() {
        assert_eq!(validation_key("email"), "email");
        assert_eq!(validation_key("user.email"), "user_email");
        assert_eq!(validation_key("user[email]"), "user.email");
        assert_eq!(validation_key("user[address][city]"), "user.address.city");
        assert_eq!(validation_key("tags[]"), "tags");
        assert_eq!(validation_key(""), "");
    }

    #[test]
    fn test_label_from_name() {
        assert_eq!(label_from_name("username"), "Username");
        assert_eq!(label_from_name("first_name"), "First Name");
        assert_eq!(label_from_name("ZIP_code"), "Zip Code");
        assert_eq!(label_from_name("user.email"), "User.email");
        assert_eq!(label_from_name("o'neil"), "O'neil");
        assert_eq!(label_from_name("2fa_code"), "2Fa Code");
        assert_eq!(label_from_name("sign-up"), "Sign-Up");
        assert_eq!(label_from_name("address[city]"), "Address[City]");
        assert_eq!(label_from_name(""), "");
    }

    #[test]
    fn test_class_list() {
        assert_eq!(class_list("  a  b c "), vec!["a", "b", "c"]);
        assert!(class_list("   ").is_empty());
    }
}
