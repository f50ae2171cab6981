//! Capitalization repair for names with an embedded apostrophe, e.g. `O'reilly`.

use regex::Regex;
use std::sync::LazyLock;

/// A letter, an apostrophe, a letter, then at least one more word character.
/// The trailing character keeps two-letter suffixes such as `'s` out.
static APOSTROPHE_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Za-z])'([A-Za-z])[0-9A-Za-z_]").expect("Invalid apostrophe regex")
});

/// Uppercases the letters on both sides of the first apostrophe that needs it.
///
/// Returns `None` when nothing needs correcting, including possessives like
/// `it's` and names that are already capitalized. Callers that always want a
/// string use `capostrophe(name).unwrap_or_else(|| name.to_string())`.
/// Only one apostrophe is corrected per call.
///
/// ```
/// use tidy_fields::capostrophe;
///
/// assert_eq!(capostrophe("O'reilly").as_deref(), Some("O'Reilly"));
/// assert_eq!(capostrophe("it's"), None);
/// ```
pub fn capostrophe(name: &str) -> Option<String> {
    let mut start = 0;

    while let Some(caps) = APOSTROPHE_PAIR.captures_at(name, start) {
        let (Some(before), Some(after)) = (caps.get(1), caps.get(2)) else {
            return None;
        };

        let already_upper = before.as_str().bytes().all(|b| b.is_ascii_uppercase())
            && after.as_str().bytes().all(|b| b.is_ascii_uppercase());
        if already_upper {
            start = before.end();
            continue;
        }

        let mut fixed = String::with_capacity(name.len());
        fixed.push_str(&name[..before.start()]);
        fixed.push_str(&before.as_str().to_ascii_uppercase());
        fixed.push('\'');
        fixed.push_str(&after.as_str().to_ascii_uppercase());
        fixed.push_str(&name[after.end()..]);

        tracing::trace!("Corrected apostrophe capitalization: {} -> {}", name, fixed);
        return Some(fixed);
    }

    None
}

pub trait Capostrophe {
    fn capostrophe(&self) -> Option<String>;
}

impl Capostrophe for str {
    fn capostrophe(&self) -> Option<String> {
        capostrophe(self)
    }
}
