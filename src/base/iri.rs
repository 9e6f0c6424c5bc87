//! IRI text helpers.
//!
//! OML members are identified by `namespace + name`. In source text a member
//! may be written as a full IRI (`<http://example.com/dnd#Monster>`), an
//! abbreviated IRI (`dnd:Monster`) or a bare id (`Monster`).

use std::borrow::Cow;

use indexmap::IndexMap;
use smol_str::SmolStr;

/// Strip angle brackets and a trailing `/` or `#` separator from a namespace.
pub fn namespace_iri(namespace: &str) -> &str {
    let mut iri = namespace;
    iri = iri.strip_prefix('<').unwrap_or(iri);
    iri = iri.strip_suffix('>').unwrap_or(iri);
    if let Some(stripped) = iri.strip_suffix('/').or_else(|| iri.strip_suffix('#')) {
        iri = stripped;
    }
    iri
}

/// Full IRI of a member declared in `namespace`, e.g. `<http://a.b/c#Name>`.
pub fn member_full_iri(namespace: &str, name: &str) -> String {
    format!("<{}#{}>", namespace_iri(namespace), name)
}

pub fn is_full_iri(text: &str) -> bool {
    text.starts_with('<') && text.ends_with('>')
}

pub fn is_abbreviated_iri(text: &str) -> bool {
    !is_full_iri(text) && text.contains(':')
}

/// A bare id is neither a full nor an abbreviated IRI.
pub fn is_id(text: &str) -> bool {
    !is_full_iri(text) && !is_abbreviated_iri(text)
}

/// Expand `prefix:name` into a full IRI using a prefix → namespace table.
///
/// Text that is not abbreviated, or whose prefix is unknown, is returned
/// unchanged.
pub fn expand_abbreviated_iri<'a>(
    text: &'a str,
    prefixes: &IndexMap<SmolStr, SmolStr>,
) -> Cow<'a, str> {
    if !is_abbreviated_iri(text) {
        return Cow::Borrowed(text);
    }
    let Some((prefix, name)) = text.split_once(':') else {
        return Cow::Borrowed(text);
    };
    match prefixes.get(prefix) {
        Some(namespace) => Cow::Owned(member_full_iri(namespace, name)),
        None => Cow::Borrowed(text),
    }
}
