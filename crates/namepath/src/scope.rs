/// The kind of separator joining two namepath segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
	/// `.`: static member of the container.
	Static,
	/// `#`: instance member of the container.
	Instance,
	/// `~`: inner symbol, local to the container's closure.
	Inner,
}

impl Scope {
	/// All separator kinds.
	pub const ALL: [Scope; 3] = [Scope::Static, Scope::Instance, Scope::Inner];

	/// Returns the separator character.
	#[inline]
	pub const fn as_char(self) -> char {
		match self {
			Self::Static => '.',
			Self::Instance => '#',
			Self::Inner => '~',
		}
	}

	/// Classifies an ASCII byte as a separator.
	#[inline]
	pub const fn from_byte(byte: u8) -> Option<Self> {
		match byte {
			b'.' => Some(Self::Static),
			b'#' => Some(Self::Instance),
			b'~' => Some(Self::Inner),
			_ => None,
		}
	}

	/// Classifies a character as a separator.
	#[inline]
	pub fn from_char(ch: char) -> Option<Self> {
		u8::try_from(ch).ok().and_then(Self::from_byte)
	}

	/// Returns true for separators that stay attached to the container
	/// when a path is shortened (`#` and `~`).
	///
	/// A container ending in a marker needs no extra separator when joined.
	#[inline]
	pub const fn is_marker(self) -> bool {
		matches!(self, Self::Instance | Self::Inner)
	}
}

impl std::fmt::Display for Scope {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.as_char())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn char_roundtrip() {
		for scope in Scope::ALL {
			assert_eq!(Scope::from_char(scope.as_char()), Some(scope));
		}
	}

	#[test]
	fn non_separators() {
		assert_eq!(Scope::from_char('a'), None);
		assert_eq!(Scope::from_char('"'), None);
		assert_eq!(Scope::from_char('é'), None);
	}

	#[test]
	fn markers() {
		assert!(!Scope::Static.is_marker());
		assert!(Scope::Instance.is_marker());
		assert!(Scope::Inner.is_marker());
	}
}
