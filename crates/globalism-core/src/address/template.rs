// crates/globalism-core/src/address/template.rs

//! # Template Line Interpreter
//!
//! Renders one line of a Mustache-subset address template. Supported tokens:
//!
//! - `{{{key}}}` or `{{key}}`: substitution
//! - `{{#first}} {{{a}}} || {{{b}}} {{/first}}`: first non-empty alternative
//! - `{{#key}}block{{/key}}`: block if `key` is non-empty
//! - `{{^key}}block{{/key}}`: block if `key` is empty
//!
//! A line is processed in three fixed stages (first-blocks, sections,
//! substitutions), then whitespace is collapsed and lines without any
//! content character are dropped. The stage order must not change: existing
//! template corpora rely on it.

const FIRST_OPEN: &str = "{{#first}}";
const FIRST_CLOSE: &str = "{{/first}}";
const ALTERNATIVE: &str = "||";

/// Resolves a template key to its value.
///
/// Unknown keys must resolve to `""`. Returned values are trimmed by the
/// renderer, so implementors may return them as stored.
pub trait Resolver {
    fn resolve(&self, key: &str) -> String;
}

impl<F> Resolver for F
where
    F: Fn(&str) -> String,
{
    fn resolve(&self, key: &str) -> String {
        self(key)
    }
}

/// Render a single template line.
///
/// Returns the cleaned line, or `""` when nothing but separators survived.
///
/// ```
/// use globalism_core::address::template::render_line;
///
/// let resolver = |key: &str| match key {
///     "b" => "X".to_owned(),
///     _ => String::new(),
/// };
/// assert_eq!(render_line("{{#first}}{{{a}}} || {{{b}}}{{/first}}", &resolver), "X");
/// assert_eq!(render_line("{{a}}, {{a}}", &resolver), "");
/// ```
pub fn render_line<R: Resolver + ?Sized>(line: &str, resolver: &R) -> String {
    let resolved = resolve_first_blocks(line, resolver);
    let resolved = resolve_sections(&resolved, resolver);
    let resolved = substitute(&resolved, resolver);
    let cleaned = collapse_whitespace(&resolved);
    if has_content(&cleaned) {
        cleaned
    } else {
        String::new()
    }
}

/// Iterate over the substitution keys of a line, left to right.
///
/// Section markers (`{{#..}}`, `{{^..}}`, `{{/..}}`) are not substitutions
/// and are skipped.
pub fn substitution_keys(line: &str) -> Vec<&str> {
    let mut keys = Vec::new();
    scan_substitutions(line, |token| {
        if let Token::Key(key) = token {
            keys.push(key);
        }
    });
    keys
}

/// Stage 1: `{{#first}} a || b {{/first}}`.
fn resolve_first_blocks<R: Resolver + ?Sized>(line: &str, resolver: &R) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;
    while let Some(start) = rest.find(FIRST_OPEN) {
        let body_start = start + FIRST_OPEN.len();
        let Some(body_len) = rest[body_start..].find(FIRST_CLOSE) else {
            break;
        };
        out.push_str(&rest[..start]);
        out.push_str(&first_alternative(&rest[body_start..body_start + body_len], resolver));
        rest = &rest[body_start + body_len + FIRST_CLOSE.len()..];
    }
    out.push_str(rest);
    out
}

/// Picks the first alternative that renders non-empty. Later alternatives
/// are never evaluated.
fn first_alternative<R: Resolver + ?Sized>(body: &str, resolver: &R) -> String {
    body.split(ALTERNATIVE)
        .map(str::trim)
        .find_map(|alt| {
            let rendered = substitute(alt, resolver);
            let rendered = rendered.trim();
            (!rendered.is_empty()).then(|| rendered.to_owned())
        })
        .unwrap_or_default()
}

/// Stage 2: `{{#key}}..{{/key}}` and `{{^key}}..{{/key}}`.
///
/// The emitted block is not scanned for further sections.
fn resolve_sections<R: Resolver + ?Sized>(text: &str, resolver: &R) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find("{{") {
        out.push_str(&rest[..pos]);
        let candidate = &rest[pos..];
        match match_section(candidate) {
            Some(section) => {
                let truthy = !resolver.resolve(section.key).trim().is_empty();
                if truthy != section.inverted {
                    out.push_str(section.body);
                }
                rest = &candidate[section.len..];
            }
            None => {
                out.push('{');
                rest = &candidate[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

struct Section<'a> {
    key: &'a str,
    inverted: bool,
    body: &'a str,
    /// Bytes consumed, closing tag included.
    len: usize,
}

fn match_section(s: &str) -> Option<Section<'_>> {
    let after_braces = s.strip_prefix("{{")?;
    let inverted = match after_braces.as_bytes().first().copied()? {
        b'#' => false,
        b'^' => true,
        _ => return None,
    };
    let after_marker = &after_braces[1..];
    let key_len = word_len(after_marker);
    if key_len == 0 || !after_marker[key_len..].starts_with("}}") {
        return None;
    }
    let key = &after_marker[..key_len];
    let body_start = 2 + 1 + key_len + 2;
    let close = format!("{{{{/{key}}}}}");
    let body_len = s[body_start..].find(&close)?;
    Some(Section {
        key,
        inverted,
        body: &s[body_start..body_start + body_len],
        len: body_start + body_len + close.len(),
    })
}

/// Stage 3: `{{{key}}}` and `{{key}}`.
fn substitute<R: Resolver + ?Sized>(text: &str, resolver: &R) -> String {
    let mut out = String::with_capacity(text.len());
    scan_substitutions(text, |token| match token {
        Token::Literal(literal) => out.push_str(literal),
        Token::Key(key) => out.push_str(resolver.resolve(key).trim()),
    });
    out
}

enum Token<'a> {
    Literal(&'a str),
    Key(&'a str),
}

/// Left-to-right, non-overlapping scan. At any position the triple-brace
/// form wins over the double-brace form.
fn scan_substitutions<'a>(text: &'a str, mut on_token: impl FnMut(Token<'a>)) {
    let mut rest = text;
    while let Some(pos) = rest.find('{') {
        on_token(Token::Literal(&rest[..pos]));
        let candidate = &rest[pos..];
        match match_variable(candidate) {
            Some((key, len)) => {
                on_token(Token::Key(key));
                rest = &candidate[len..];
            }
            None => {
                on_token(Token::Literal(&candidate[..1]));
                rest = &candidate[1..];
            }
        }
    }
    on_token(Token::Literal(rest));
}

/// Matches `{{{key}}}` or `{{key}}` at the start of `s`, returning the key
/// and the number of bytes consumed.
fn match_variable(s: &str) -> Option<(&str, usize)> {
    if let Some(inner) = s.strip_prefix("{{{") {
        let len = word_len(inner);
        if len > 0 && inner[len..].starts_with("}}}") {
            return Some((&inner[..len], len + 6));
        }
    }
    let inner = s.strip_prefix("{{")?;
    let len = word_len(inner);
    (len > 0 && inner[len..].starts_with("}}")).then(|| (&inner[..len], len + 4))
}

/// Length of the leading `[A-Za-z0-9_]` run.
fn word_len(s: &str) -> usize {
    s.bytes()
        .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
        .count()
}

/// Runs of two or more whitespace characters become one space; the result
/// is trimmed.
fn collapse_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c.is_whitespace() && chars.peek().is_some_and(|n| n.is_whitespace()) {
            while chars.next_if(|n| n.is_whitespace()).is_some() {}
            out.push(' ');
        } else {
            out.push(c);
        }
    }
    out.trim().to_owned()
}

/// ASCII letters and digits count as content, and so does any non-ASCII
/// character (CJK, Devanagari, `〒`, ...). Punctuation residue does not.
fn has_content(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_alphanumeric() || !c.is_ascii())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> String {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key: &str| map.get(key).cloned().unwrap_or_default()
    }

    #[test]
    fn both_brace_forms_substitute() {
        let r = vars(&[("road", "Main St"), ("house_number", "12")]);
        assert_eq!(render_line("{{house_number}} {{{road}}}", &r), "12 Main St");
    }

    #[test]
    fn resolved_values_are_trimmed() {
        let r = vars(&[("city", "  Springfield  ")]);
        assert_eq!(render_line("[{{city}}]", &r), "[Springfield]");
    }

    #[test]
    fn stray_brace_before_variable_is_kept() {
        let r = vars(&[("a", "x")]);
        assert_eq!(render_line("{{{a}}", &r), "{x");
        assert_eq!(render_line("{{a}}}", &r), "x}");
    }

    #[test]
    fn first_block_picks_first_non_empty() {
        let r = vars(&[("b", "B"), ("c", "C")]);
        assert_eq!(render_line("{{#first}} {{{a}}} || {{{b}}} || {{{c}}} {{/first}}", &r), "B");
    }

    #[test]
    fn first_block_with_no_match_is_empty() {
        let r = vars(&[("postcode", "12345")]);
        assert_eq!(
            render_line("{{postcode}} {{#first}} {{{a}}} || {{{b}}} {{/first}}", &r),
            "12345"
        );
    }

    #[test]
    fn first_block_short_circuits() {
        let seen = RefCell::new(Vec::new());
        let r = |key: &str| {
            seen.borrow_mut().push(key.to_owned());
            if key == "a" { "A".to_owned() } else { String::new() }
        };
        assert_eq!(render_line("{{#first}}{{a}} || {{b}}{{/first}}", &r), "A");
        assert_eq!(*seen.borrow(), vec!["a".to_owned()]);
    }

    #[test]
    fn several_first_blocks_on_one_line() {
        let r = vars(&[("city", "Springfield"), ("state", "Illinois"), ("postcode", "62701")]);
        let line = "{{#first}} {{{city}}} || {{{town}}} {{/first}}, \
                    {{#first}} {{{state_code}}} || {{{state}}} {{/first}} {{{postcode}}}";
        assert_eq!(render_line(line, &r), "Springfield, Illinois 62701");
    }

    #[test]
    fn unclosed_first_block_stays_literal() {
        let r = vars(&[("a", "A")]);
        assert_eq!(render_line("{{#first}} {{a}}", &r), "{{#first}} A");
    }

    #[test]
    fn positive_section_renders_only_when_set() {
        let line = "{{#recipient}}Attn: {{recipient}}{{/recipient}}";
        assert_eq!(render_line(line, &vars(&[("recipient", "Acme")])), "Attn: Acme");
        assert_eq!(render_line(line, &vars(&[])), "");
        assert_eq!(render_line(line, &vars(&[("recipient", "   ")])), "");
    }

    #[test]
    fn inverted_section_renders_only_when_unset() {
        let line = "{{^house}}no house{{/house}}";
        assert_eq!(render_line(line, &vars(&[])), "no house");
        assert_eq!(render_line(line, &vars(&[("house", "Villa")])), "");
    }

    #[test]
    fn unknown_section_keys_are_empty() {
        let r = vars(&[]);
        assert_eq!(render_line("{{#attention}}x{{/attention}}{{^attention}}y{{/attention}}", &r), "y");
    }

    #[test]
    fn section_without_matching_close_is_literal() {
        let r = vars(&[("road", "Elm")]);
        assert_eq!(render_line("{{#road}}{{road}}{{/city}}", &r), "{{#road}}Elm{{/city}}");
    }

    #[test]
    fn nested_sections_are_not_expanded() {
        let r = vars(&[("a", "A"), ("b", "B")]);
        assert_eq!(
            render_line("{{#a}}{{#b}}in{{/b}}{{/a}}", &r),
            "{{#b}}in{{/b}}"
        );
    }

    #[test]
    fn first_blocks_resolve_before_sections() {
        let r = vars(&[("city", "Paris")]);
        assert_eq!(
            render_line("{{#city}}{{#first}}{{suburb}} || {{city}}{{/first}}{{/city}}", &r),
            "Paris"
        );
    }

    #[test]
    fn whitespace_runs_collapse() {
        let r = vars(&[("a", "x"), ("c", "z")]);
        assert_eq!(render_line("  {{a}}   {{b}}   {{c}}  ", &r), "x z");
        assert_eq!(render_line("{{a}}\t{{c}}", &r), "x\tz");
    }

    #[test]
    fn punctuation_only_lines_are_dropped() {
        let r = vars(&[]);
        assert_eq!(render_line("{{city}}, {{state_code}} {{postcode}}", &r), "");
        assert_eq!(render_line("-- () ,", &r), "");
    }

    #[test]
    fn non_ascii_counts_as_content() {
        let r = vars(&[]);
        assert_eq!(render_line("〒{{postcode}}", &r), "〒");
        let r = vars(&[("city", "नई दिल्ली")]);
        assert_eq!(render_line("{{city}} - {{postcode}}", &r), "नई दिल्ली -");
    }

    #[test]
    fn lists_substitution_keys_only() {
        let keys = substitution_keys("{{#first}} {{{city}}} || {{town}} {{/first}} {{^road}}{{house}}{{/road}}");
        assert_eq!(keys, vec!["city", "town", "house"]);
    }
}
