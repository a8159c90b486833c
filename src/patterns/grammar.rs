//! Micro-grammars the matchers are assembled from.

use smol_str::SmolStr;

/// Operator and punctuation characters, as the body of a character class.
///
/// No `.`: `Foo.Input.x` must not match the `Input` surface.
const OPERATORS: &str = r"\-+*/%=&|\^!~<>?:;,(){}\[\]";

/// Same as [`OPERATORS`] without `(`; a property followed by `(` is a call.
const OPERATORS_NO_PAREN: &str = r"\-+*/%=&|\^!~<>?:;,){}\[\]";

const IDENT: &str = r"[A-Za-z_][A-Za-z0-9_]*";

const DOT: &str = r"\s*\.\s*";

/// Whatever may precede a class name: start of text, whitespace or an operator.
fn boundary() -> String {
    format!(r"(?:^|[\s{OPERATORS}])")
}

/// Turn `UnityEngine.Input` into `UnityEngine\s*\.\s*Input`.
fn qualified(name: &str) -> String {
    name.split('.')
        .map(|segment| regex::escape(segment.trim()))
        .collect::<Vec<_>>()
        .join(DOT)
}

/// Non-capturing alternation over legacy class names, longest first.
pub fn class_alternation(classes: &[SmolStr]) -> String {
    let mut sorted: Vec<&SmolStr> = classes.iter().collect();
    sorted.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    let alternatives: Vec<String> = sorted.iter().map(|name| qualified(name)).collect();
    format!("(?:{})", alternatives.join("|"))
}

/// `<boundary>(class)(dot)(member)(open)`; the argument list is balanced by hand.
pub fn method_regex(classes: &[SmolStr]) -> String {
    format!(
        r"{boundary}(?P<class>{classes})(?P<dot>{DOT})(?P<member>{IDENT})(?P<open>\s*\()",
        boundary = boundary(),
        classes = class_alternation(classes),
    )
}

/// `<boundary>(class)(dot)(member)` followed by a non-call anchor or end of text.
pub fn property_regex(classes: &[SmolStr]) -> String {
    format!(
        r"{boundary}(?P<class>{classes})(?P<dot>{DOT})(?P<member>{IDENT})\s*(?:[{OPERATORS_NO_PAREN}.]|$)",
        boundary = boundary(),
        classes = class_alternation(classes),
    )
}

/// `<start>(ns.)?(type)<end>` for type specifiers in declarations.
pub fn type_regex(namespaces: &[SmolStr], type_name: &str) -> String {
    let namespace = if namespaces.is_empty() {
        String::new()
    } else {
        format!(r"(?P<ns>{}{DOT})?", class_alternation(namespaces))
    };
    format!(
        r"(?:^|[\s(:;,{{<]){namespace}(?P<type>{})(?:[\s);\[,>]|$)",
        qualified(type_name),
    )
}
