use std::borrow::Cow;

use crate::Scope;

const PROTOTYPE: &str = ".prototype";

/// Returns the first whitespace-delimited token of a tagged name.
///
/// `@name foo bar` documents `foo`; trailing words are discarded.
#[inline]
pub fn first_token(name: &str) -> &str {
	name.split_whitespace().next().unwrap_or_default()
}

/// Rewrites prototype indirection as the instance separator.
///
/// `Foo.prototype.bar` becomes `Foo#bar` and a trailing `Foo.prototype`
/// becomes `Foo#`. A segment that merely starts with `prototype`
/// (`Foo.prototypeChain`) is left alone.
pub fn normalize_prototype(name: &str) -> Cow<'_, str> {
	if !name.contains(PROTOTYPE) {
		return Cow::Borrowed(name);
	}

	let mut out = String::with_capacity(name.len());
	let mut rest = name;
	while let Some(at) = rest.find(PROTOTYPE) {
		out.push_str(&rest[..at]);
		let after = &rest[at + PROTOTYPE.len()..];
		if let Some(tail) = after.strip_prefix('.') {
			out.push(Scope::Instance.as_char());
			rest = tail;
		} else if after.is_empty() {
			out.push(Scope::Instance.as_char());
			rest = after;
		} else {
			out.push_str(PROTOTYPE);
			rest = after;
		}
	}
	out.push_str(rest);
	Cow::Owned(out)
}

/// Strips a leading doc-namespace scheme such as `event:`.
///
/// The scheme is one or more ASCII letters, `_`, `$` or `-` followed by `:`.
/// Returns the non-whitespace remainder after the colon, or `None` when
/// `name` carries no scheme.
pub fn strip_scheme(name: &str) -> Option<&str> {
	let (scheme, rest) = name.split_once(':')?;
	if !is_scheme(scheme) {
		return None;
	}

	let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
	(end > 0).then(|| &rest[..end])
}

/// Returns true if `scheme` is a valid doc-namespace scheme name
/// (ASCII letters, `_`, `$` or `-`; at least one).
pub fn is_scheme(scheme: &str) -> bool {
	!scheme.is_empty()
		&& scheme
			.bytes()
			.all(|b| b.is_ascii_alphabetic() || matches!(b, b'_' | b'$' | b'-'))
}

/// Removes one trailing `~` from a container reference.
///
/// Returns the stripped container and whether a marker was removed. A bare
/// `~` is not treated as a marker.
pub fn strip_inner_marker(container: &str) -> (&str, bool) {
	match container.strip_suffix(Scope::Inner.as_char()) {
		Some(stripped) if !stripped.is_empty() => (stripped, true),
		_ => (container, false),
	}
}

/// Returns true if `container` ends in `#` or `~`.
#[inline]
pub fn ends_with_scope_marker(container: &str) -> bool {
	container
		.chars()
		.next_back()
		.and_then(Scope::from_char)
		.is_some_and(Scope::is_marker)
}

/// Returns true if `container` ends in any separator.
#[inline]
pub fn ends_with_separator(container: &str) -> bool {
	container.chars().next_back().and_then(Scope::from_char).is_some()
}

/// Joins a container reference and a member name.
///
/// Uses `.` unless the container already ends in a scope marker, which then
/// acts as the join. An empty container yields `name` as is.
///
/// # Examples
///
/// ```
/// use docpath_namepath::join;
///
/// assert_eq!(join("a.b", "c"), "a.b.c");
/// assert_eq!(join("Foo#", "bar"), "Foo#bar");
/// assert_eq!(join("", "bar"), "bar");
/// ```
pub fn join(container: &str, name: &str) -> String {
	if container.is_empty() {
		name.to_owned()
	} else if ends_with_scope_marker(container) {
		format!("{container}{name}")
	} else {
		format!("{container}.{name}")
	}
}
