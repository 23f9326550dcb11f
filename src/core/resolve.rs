use super::source::Messages;

/// Look up `key` in the active locale's messages, falling back to the default locale.
///
/// Returns `None` when neither table has the key; the caller decides whether
/// that is an error.
pub fn resolve<'a>(key: &str, locale: &'a Messages, default: &'a Messages) -> Option<&'a str> {
    locale
        .get(key)
        .or_else(|| default.get(key))
        .map(String::as_str)
}
