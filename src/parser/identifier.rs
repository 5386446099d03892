use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    static ref IDENTIFIER: Regex = Regex::new(r"^[\p{L}_$][\p{L}\p{N}_$]*$").unwrap();
    static ref RESERVED: HashSet<&'static str> = [
        "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class",
        "const", "continue", "default", "do", "double", "else", "enum", "extends", "final",
        "finally", "float", "for", "goto", "if", "implements", "import", "instanceof", "int",
        "interface", "long", "native", "new", "package", "private", "protected", "public",
        "return", "short", "static", "strictfp", "super", "switch", "synchronized", "this",
        "throw", "throws", "transient", "try", "void", "volatile", "while", "true", "false",
        "null", "_",
    ]
    .into_iter()
    .collect();
}

/// Check that a single segment is an identifier and not a reserved word
pub fn is_identifier(segment: &str) -> bool {
    IDENTIFIER.is_match(segment) && !RESERVED.contains(segment)
}

/// Check that `name` is a dot-separated sequence of identifiers.
///
/// Empty segments fail, so leading, trailing or doubled dots are rejected.
pub fn is_qualified_name(name: &str) -> bool {
    !name.is_empty() && name.split('.').all(is_identifier)
}
