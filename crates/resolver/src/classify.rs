use rustc_hash::FxHashSet;

use crate::ResolverConfig;

/// What the resolver needs to know about a symbol kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Classification {
	/// The kind prefixes its paths with `<kind>:` (e.g. `event:click`).
	pub introduces_namespace: bool,
}

/// Maps a symbol kind (the `isa` tag) to its [`Classification`].
pub trait Classifier {
	/// Classifies `kind`. Unknown kinds classify as [`Classification::default`].
	fn classify(&self, kind: &str) -> Classification;
}

impl<F> Classifier for F
where
	F: Fn(&str) -> Classification,
{
	fn classify(&self, kind: &str) -> Classification {
		self(kind)
	}
}

/// Classifier backed by the set of kinds that introduce a doc-namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagDictionary {
	docspace_kinds: FxHashSet<String>,
}

impl TagDictionary {
	/// Builds a dictionary from explicit doc-namespace kinds.
	pub fn new<I, S>(docspace_kinds: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			docspace_kinds: docspace_kinds.into_iter().map(Into::into).collect(),
		}
	}

	/// Builds a dictionary from [`ResolverConfig::docspace_kinds`].
	pub fn from_config(config: &ResolverConfig) -> Self {
		Self::new(config.docspace_kinds.iter().cloned())
	}

	/// Returns true if `kind` introduces a doc-namespace.
	#[inline]
	pub fn sets_docspace(&self, kind: &str) -> bool {
		self.docspace_kinds.contains(kind)
	}
}

impl Default for TagDictionary {
	fn default() -> Self {
		Self::from_config(&ResolverConfig::default())
	}
}

impl Classifier for TagDictionary {
	fn classify(&self, kind: &str) -> Classification {
		Classification {
			introduces_namespace: self.sets_docspace(kind),
		}
	}
}
