use crate::Scope;

#[cfg(test)]
mod tests;

/// A namepath split at its last top-level separator.
///
/// Borrows both halves from the input. For `#` and `~` the separator stays
/// on [`prefix`](Self::prefix) as a scope marker; for `.` it is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortened<'a> {
	/// Container reference, possibly ending in a scope marker.
	pub prefix: &'a str,
	/// Final segment.
	pub name: &'a str,
	/// Separator the path was split on, `None` if there was none.
	pub scope: Option<Scope>,
}

impl Shortened<'_> {
	/// Reconstructs the original path.
	pub fn rejoin(&self) -> String {
		match self.scope {
			Some(Scope::Static) => format!("{}.{}", self.prefix, self.name),
			_ => format!("{}{}", self.prefix, self.name),
		}
	}
}

/// Splits `path` into container prefix and short name at the rightmost
/// separator that is not inside a quoted segment.
///
/// # Examples
///
/// ```
/// use docpath_namepath::shorten;
///
/// let split = shorten("a.b.c");
/// assert_eq!((split.prefix, split.name), ("a.b", "c"));
///
/// let split = shorten("Foo#bar");
/// assert_eq!((split.prefix, split.name), ("Foo#", "bar"));
///
/// let split = shorten(r#""a.b".c"#);
/// assert_eq!((split.prefix, split.name), (r#""a.b""#, "c"));
/// ```
pub fn shorten(path: &str) -> Shortened<'_> {
	match Separators::new(path).last() {
		Some((at, scope)) => {
			let end = if scope.is_marker() { at + 1 } else { at };
			Shortened {
				prefix: &path[..end],
				name: &path[at + 1..],
				scope: Some(scope),
			}
		}
		None => Shortened {
			prefix: "",
			name: path,
			scope: None,
		},
	}
}

/// Drops the final segment of `path`, keeping the separator before it.
///
/// `Klass#method` becomes `Klass#`, `a.b` becomes `a.`. A path with no
/// top-level separator truncates to the empty string.
pub fn truncate_last_segment(path: &str) -> &str {
	match Separators::new(path).last() {
		Some((at, _)) => &path[..=at],
		None => "",
	}
}

/// Iterates the byte offsets of top-level separators, skipping quoted spans.
///
/// A quoted span opens at `"` and closes at the next `"` at least one
/// character later. An opening quote with no partner is an ordinary byte.
struct Separators<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Separators<'a> {
	fn new(path: &'a str) -> Self {
		Self {
			bytes: path.as_bytes(),
			pos: 0,
		}
	}

	fn closing_quote(&self, open: usize) -> Option<usize> {
		let from = open + 2;
		let rest = self.bytes.get(from..)?;
		rest.iter().position(|&b| b == b'"').map(|offset| from + offset)
	}
}

impl Iterator for Separators<'_> {
	type Item = (usize, Scope);

	fn next(&mut self) -> Option<Self::Item> {
		while let Some(&byte) = self.bytes.get(self.pos) {
			if byte == b'"'
				&& let Some(close) = self.closing_quote(self.pos)
			{
				self.pos = close + 1;
				continue;
			}

			let at = self.pos;
			self.pos += 1;
			if let Some(scope) = Scope::from_byte(byte) {
				return Some((at, scope));
			}
		}
		None
	}
}
