use once_cell::sync::Lazy;
use regex::Regex;

// A stray `<` swallows everything up to the next `>`, across lines too.
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<.*?>").expect("valid regex"));

/// Portuguese accented letters accepted on top of ASCII alphanumerics
const ACCENTED: &str = "áéíóúÁÉÍÓÚàèìòùÀÈÌÒÙãõÃÕâêîôûÂÊÎÔÛçÇ";

const PUNCTUATION: &str = ".,!?@#$%&*()-_=+;:'\"/";

/// Whether `c` survives sanitization
#[inline]
pub fn is_allowed_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || c.is_whitespace()
        || ACCENTED.contains(c)
        || PUNCTUATION.contains(c)
}

/// Strip markup and restrict user text to the site's character set
///
/// Tag-like spans are removed first, then every character outside the
/// allow-list is deleted. Returns `None` for absent or empty input and for
/// input that sanitizes to nothing, so a `Some` value is never empty.
pub fn sanitize(input: Option<&str>) -> Option<String> {
    let input = input.filter(|s| !s.is_empty())?;

    let cleaned: String = TAG_RE
        .replace_all(input, "")
        .chars()
        .filter(|c| is_allowed_char(*c))
        .collect();

    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}
