use swc_ecma_ast::Ident;

/// Checks if `name` is a valid ES2015 identifier name.
///
/// The first character must be `ID_Start`, `$` or `_`; the rest must be
/// `ID_Continue`, `$`, `_`, ZWNJ or ZWJ. Escape sequences are not decoded.
pub fn is_identifier_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    Ident::is_valid_start(first) && chars.all(Ident::is_valid_continue)
}

/// Checks if `name` is reserved in ES2015 strict mode code.
///
/// Covers keywords, the `null`/`true`/`false` literals and the words that
/// are only reserved under strict mode (`let`, `static`, ...).
pub fn is_reserved_word(name: &str) -> bool {
    matches!(
        name,
        "break"
            | "case"
            | "catch"
            | "class"
            | "const"
            | "continue"
            | "debugger"
            | "default"
            | "delete"
            | "do"
            | "else"
            | "enum"
            | "export"
            | "extends"
            | "false"
            | "finally"
            | "for"
            | "function"
            | "if"
            | "import"
            | "in"
            | "instanceof"
            | "new"
            | "null"
            | "return"
            | "super"
            | "switch"
            | "this"
            | "throw"
            | "true"
            | "try"
            | "typeof"
            | "var"
            | "void"
            | "while"
            | "with"
            | "yield"
            | "implements"
            | "interface"
            | "let"
            | "package"
            | "private"
            | "protected"
            | "public"
            | "static"
    )
}

/// A key can be emitted as an interface field when it is a valid identifier
/// name and not a reserved word.
pub fn is_exportable_name(name: &str) -> bool {
    is_identifier_name(name) && !is_reserved_word(name)
}
