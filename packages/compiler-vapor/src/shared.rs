//! Shared name predicates and string helpers used by transforms and generators.

use once_cell::sync::Lazy;
use regex::Regex;

static SIMPLE_IDENTIFIER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_$][\w$]*$").expect("valid identifier regex"));
static CAMELIZE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"-(\w)").expect("valid camelize regex"));

/// Props consumed by the runtime itself; they never reach the element.
pub fn is_reserved_prop(name: &str) -> bool {
    matches!(
        name,
        "" | "key"
            | "ref"
            | "ref_for"
            | "ref_key"
            | "onVnodeBeforeMount"
            | "onVnodeMounted"
            | "onVnodeBeforeUpdate"
            | "onVnodeUpdated"
            | "onVnodeBeforeUnmount"
            | "onVnodeUnmounted"
    )
}

/// Directives the compiler knows about, whether or not a transform is registered for them.
pub fn is_built_in_directive(name: &str) -> bool {
    matches!(
        name,
        "bind"
            | "cloak"
            | "else-if"
            | "else"
            | "for"
            | "html"
            | "if"
            | "model"
            | "on"
            | "once"
            | "pre"
            | "show"
            | "slot"
            | "text"
            | "memo"
    )
}

/// HTML elements without a closing tag.
pub fn is_void_tag(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

/// Whether `name` can be written as a bare object key.
pub fn is_simple_identifier(name: &str) -> bool {
    SIMPLE_IDENTIFIER_RE.is_match(name)
}

/// `foo-bar` -> `fooBar`
pub fn camelize(s: &str) -> String {
    CAMELIZE_RE
        .replace_all(s, |caps: &regex::Captures| caps[1].to_uppercase())
        .into_owned()
}

pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `click` -> `onClick`
pub fn to_handler_key(s: &str) -> String {
    if s.is_empty() {
        String::new()
    } else {
        format!("on{}", capitalize(s))
    }
}
