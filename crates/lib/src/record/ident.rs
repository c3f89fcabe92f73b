//! Identifier rules for type names, field names and default keys.

/// Words that may not be used as a type or field name.
pub const RESERVED_WORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield",
];

/// Returns true if `name` is a syntactically valid identifier.
///
/// The first character must be `_` or XID_Start; the rest XID_Continue.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || unicode_ident::is_xid_start(first) => {}
        _ => return false,
    }
    chars.all(unicode_ident::is_xid_continue)
}

/// Returns true if `name` is a reserved word.
pub fn is_reserved(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

/// Checks that `name` may be used as a type or field name.
///
/// Returns the reason for rejection on failure.
pub(crate) fn check_name(name: &str) -> Result<(), String> {
    if !is_identifier(name) {
        return Err("not a valid identifier".to_string());
    }
    if is_reserved(name) {
        return Err("reserved word".to_string());
    }
    Ok(())
}
