//! Conversion of filesystem names into valid, escaped Rust identifiers.
//!
//! Applied identically wherever a filesystem name becomes a symbol name:
//! directory names, file stems, and extensions. Pure functions of their
//! input, so regenerated output is stable across runs.

/// Keywords that cannot be spelled as raw identifiers (`r#...`).
const NON_RAW_KEYWORDS: &[&str] = &["crate", "self", "super", "Self", "_"];

/// Strict and reserved Rust keywords.
const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub",
    "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield", "_",
];

/// Keyword predicate used by [`sanitize`]. Exhaustive correctness against
/// every host-language keyword set is a non-goal; this list is what the
/// escape step consults.
pub fn is_keyword(name: &str) -> bool {
    KEYWORDS.contains(&name)
}

/// Convert an arbitrary path segment into a valid, escaped, capitalized
/// identifier.
///
/// Letters and digits are copied; a dropped character marks the next valid
/// character for capitalization; underscores are copied verbatim without
/// triggering capitalization. An empty result collapses to the underscore
/// placeholder (escaped like any other keyword), a leading digit gains a
/// `_` prefix, keywords are escaped, and the first character is forced to
/// uppercase.
pub fn sanitize(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    let mut capitalize_next = false;

    for ch in segment.chars() {
        if ch.is_alphanumeric() {
            if capitalize_next {
                out.extend(ch.to_uppercase());
            } else {
                out.push(ch);
            }
            capitalize_next = false;
        } else if ch == '_' {
            out.push('_');
            capitalize_next = false;
        } else {
            // Leading junk does not capitalize; neither does junk after '_'.
            if !out.is_empty() && !out.ends_with('_') {
                capitalize_next = true;
            }
        }
    }

    if out.is_empty() {
        // Placeholder for all-dropped segments; `_` is itself a keyword, so
        // it falls through to the escape step below and becomes `__`.
        out.push('_');
    }

    if out.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        out.insert(0, '_');
    }

    let keyword = is_keyword(&out);
    let raw_escapable = keyword && !NON_RAW_KEYWORDS.contains(&out.as_str());

    capitalize_first(&mut out);

    if keyword {
        if raw_escapable {
            out.insert_str(0, "r#");
        } else {
            // `r#` cannot spell these; a trailing underscore keeps them legal.
            out.push('_');
        }
    }

    out
}

/// Identifier for a file path: sanitized stem plus `_` and the lowercased
/// extension, so `data.json` and `data.csv` stay distinct.
pub fn file_ident(path: &str) -> String {
    let name = path.rsplit('/').next().unwrap_or(path);
    let (stem, extension) = split_stem_ext(name);
    let mut ident = sanitize(stem);
    if let Some(ext) = extension {
        ident.push('_');
        ident.push_str(&ext.to_lowercase());
    }
    ident
}

/// Split a file name into stem and extension. A leading dot is part of the
/// stem, so `.hidden` has no extension.
pub fn split_stem_ext(name: &str) -> (&str, Option<&str>) {
    match name.rfind('.') {
        Some(idx) if idx > 0 && idx + 1 < name.len() => (&name[..idx], Some(&name[idx + 1..])),
        Some(idx) if idx > 0 => (&name[..idx], None),
        _ => (name, None),
    }
}

fn capitalize_first(out: &mut String) {
    if let Some(first) = out.chars().next() {
        let upper: String = first.to_uppercase().collect();
        if upper != first.to_string() {
            out.replace_range(..first.len_utf8(), &upper);
        }
    }
}
