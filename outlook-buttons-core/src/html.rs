//! Markup stripping and text trimming for event titles and descriptions.

/// Appended to text cut short by `trim_words`
pub const ELLIPSIS: char = '\u{2026}';

/// Remove markup tags from `input`, keeping tags named in `allowed`.
///
/// Tag names in `allowed` are matched case-insensitively and cover both the
/// opening and closing form, so `["p"]` keeps `<p class="x">` and `</p>`.
/// Comments are always removed. A `<` followed by whitespace, or at the very
/// end, is text rather than a tag. An unterminated tag swallows the rest of
/// the input.
pub fn strip_tags(input: &str, allowed: &[&str]) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];

        if tail.starts_with("<!--") {
            rest = match tail.find("-->") {
                Some(end) => &tail[end + 3..],
                None => "",
            };
            continue;
        }

        match tail[1..].chars().next() {
            Some(c) if !c.is_whitespace() => {}
            _ => {
                out.push('<');
                rest = &tail[1..];
                continue;
            }
        }

        let Some(len) = tag_len(tail) else {
            rest = "";
            break;
        };

        let tag = &tail[..len];
        if allowed.iter().any(|name| name.eq_ignore_ascii_case(tag_name(tag))) {
            out.push_str(tag);
        }
        rest = &tail[len..];
    }

    out.push_str(rest);
    out
}

/// Byte length of the tag starting at `tail[0] == '<'`, including the
/// closing `>`. Quoted attribute values may contain `>`.
fn tag_len(tail: &str) -> Option<usize> {
    let mut quote: Option<char> = None;

    for (i, c) in tail.char_indices().skip(1) {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '>') => return Some(i + 1),
            (None, _) => {}
        }
    }

    None
}

/// Element name of a complete tag such as `</P >` → `P`
fn tag_name(tag: &str) -> &str {
    let inner = tag.trim_start_matches('<').trim_start_matches('/');
    let end = inner
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(inner.len());
    &inner[..end]
}

/// First `max_chars` characters of `text`.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Cut `text` down to `limit` words.
///
/// All markup is removed and runs of whitespace collapse to a single space.
/// When words were dropped, an ellipsis is attached to the last kept word.
pub fn trim_words(text: &str, limit: usize) -> String {
    let plain = strip_tags(text, &[]);
    let words: Vec<&str> = plain.split_whitespace().collect();

    if words.len() > limit {
        let mut trimmed = words[..limit].join(" ");
        trimmed.push(ELLIPSIS);
        trimmed
    } else {
        words.join(" ")
    }
}
