// crates/globalism-core/src/text.rs

//! Small text helpers shared by the lookup and the engines.

use regex::Regex;

/// Convert a string into a folded key suitable for comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Złoty` -> `Zloty`)
/// 2\) Normalize to lowercase
///
/// # Examples
///
/// ```rust
/// use globalism_core::text::fold_key;
///
/// assert_eq!(fold_key("République"), "republique");
/// assert_eq!(fold_key("Straße"), "strasse");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two strings for equality after Unicode folding and normalization.
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

/// Keeps only the ASCII digits of `input`.
pub fn digits_only(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Treats empty and whitespace-only strings as absent.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Undo the backslash escaping used when patterns are stored in the dataset.
///
/// `^\\d{5}$` becomes `^\d{5}$`; already unescaped patterns pass through.
pub fn unescape_pattern(escaped: &str) -> String {
    escaped.replace(r"\\", r"\")
}

/// Compile a stored (escaped) pattern.
///
/// `\d` and `\w` are ASCII-only, as in JS and in line with [`digits_only`],
/// so a digit the formatter ignores can never satisfy the pattern.
/// Malformed patterns are logged and reported as `None`; callers treat that
/// as a failed match.
pub fn compile_pattern(escaped: &str) -> Option<Regex> {
    match Regex::new(&ascii_classes(&unescape_pattern(escaped))) {
        Ok(re) => Some(re),
        Err(err) => {
            log::warn!("Ignoring malformed pattern {escaped:?}: {err}");
            None
        }
    }
}

/// Spell out the escapes that JS keeps ASCII-only; the regex crate would
/// read them as Unicode classes.
fn ascii_classes(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('d') => out.push_str("[0-9]"),
            Some('D') => out.push_str("[^0-9]"),
            Some('w') => out.push_str("[0-9A-Za-z_]"),
            Some('W') => out.push_str("[^0-9A-Za-z_]"),
            Some(next) => {
                out.push(c);
                out.push(next);
            }
            None => out.push(c),
        }
    }
    out
}

/// Tests the trimmed `input` against a stored pattern.
///
/// `false` when there is no pattern, the input is blank, or the pattern does
/// not compile.
pub(crate) fn matches_pattern(input: &str, pattern: Option<&str>) -> bool {
    let Some(pattern) = non_blank(pattern) else {
        return false;
    };
    let input = input.trim();
    if input.is_empty() {
        return false;
    }
    compile_pattern(pattern).is_some_and(|re| re.is_match(input))
}
