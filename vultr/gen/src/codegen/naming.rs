//! Identifier rules for names taken from the reference page.

/// Keywords that can be used as raw identifiers (`r#type`).
const RAW_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized",
    "use", "virtual", "where", "while", "yield",
];

/// Keywords that cannot be raw identifiers.
const NON_RAW_KEYWORDS: &[&str] = &["self", "Self", "super", "crate", "_"];

/// Names the generated file already uses at category or aggregator level.
const RESERVED_MEMBERS: &[&str] = &[
    "rest", "new", "with_rest", "api_key", "set_api_key", "Arc", "Rest", "RestError", "Method",
    "Payload", "Value", "Client", "Result", "Option", "String",
];

/// Locals inside generated method bodies that parameters must not shadow.
const RESERVED_LOCALS: &[&str] = &["payload"];

/// Returns `true` if `name` is `[A-Za-z_][A-Za-z0-9_]*` and not a bare `_`.
///
/// ## Examples
///
/// ```
/// use vultr_gen::codegen::naming::is_identifier;
///
/// assert!(is_identifier("BlockStorage"));
/// assert!(is_identifier("list_ipv4"));
/// assert!(!is_identifier("Block Storage"));
/// assert!(!is_identifier("4ever"));
/// ```
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    name != "_"
        && (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Returns `true` if `name` would collide with a generated item.
pub fn is_reserved_member(name: &str) -> bool {
    RESERVED_MEMBERS.contains(&name) || NON_RAW_KEYWORDS.contains(&name)
}

/// Escapes a valid identifier that happens to be a keyword.
pub fn rust_ident(name: &str) -> String {
    if RAW_KEYWORDS.contains(&name) {
        format!("r#{name}")
    } else {
        name.to_string()
    }
}

/// Argument name for a documented parameter.
///
/// Lower-cased; characters outside `[a-z0-9_]` become `_`, a leading digit
/// gets a `_` prefix, and keywords are escaped.
///
/// ## Examples
///
/// ```
/// use vultr_gen::codegen::naming::param_ident;
///
/// assert_eq!(param_ident("SUBID"), "subid");
/// assert_eq!(param_ident("type"), "r#type");
/// assert_eq!(param_ident("ip-address"), "ip_address");
/// assert_eq!(param_ident("6to4"), "_6to4");
/// ```
pub fn param_ident(name: &str) -> String {
    let mut ident: String = name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if ident.is_empty() || ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    if NON_RAW_KEYWORDS.contains(&ident.as_str()) || RESERVED_LOCALS.contains(&ident.as_str()) {
        ident.push('_');
    }
    rust_ident(&ident)
}

/// Renders `text` as a Rust string literal.
pub fn string_literal(text: &str) -> String {
    format!("{text:?}")
}
