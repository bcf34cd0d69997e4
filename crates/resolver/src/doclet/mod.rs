use indexmap::IndexMap;
use smallvec::{SmallVec, smallvec};

#[cfg(test)]
mod tests;

/// Tag names read and written during resolution.
pub mod tag {
	/// Local name of the symbol.
	pub const NAME: &str = "name";
	/// Container the symbol belongs to.
	pub const MEMBEROF: &str = "memberof";
	/// Symbol kind (`constructor`, `event`, `file`, ...).
	pub const ISA: &str = "isa";
	/// Access level; gains `inner` for closure-local symbols.
	pub const ACCESS: &str = "access";
	/// Fully qualified namepath.
	pub const PATH: &str = "path";
}

/// Access value marking a closure-local symbol.
pub const ACCESS_INNER: &str = "inner";

/// Capabilities the resolver needs from a doclet.
///
/// A doclet is the metadata extracted from one documentation comment,
/// keyed by tag name. Tag names are case-sensitive.
pub trait Doclet {
	/// Returns the first value recorded for `tag`.
	fn tag_value(&self, tag: &str) -> Option<&str>;

	/// Replaces every value of `tag` with `value`.
	fn set_tag(&mut self, tag: &str, value: String);

	/// Appends `value` to `tag` without replacing earlier values.
	fn add_tag(&mut self, tag: &str, value: String);

	/// Returns true if the symbol is local to a closure.
	fn is_inner(&self) -> bool {
		self.tag_value(tag::ACCESS) == Some(ACCESS_INNER)
	}

	/// Path attribute computed outside the tag set, consulted when the
	/// `path` tag is missing.
	fn path(&self) -> Option<&str> {
		None
	}
}

/// A doclet backed by an insertion-ordered tag map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagDoclet {
	tags: IndexMap<String, SmallVec<[String; 1]>>,
	path: Option<String>,
}

impl TagDoclet {
	/// Creates an empty doclet.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a tag value, builder style.
	pub fn with_tag(mut self, tag: &str, value: impl Into<String>) -> Self {
		self.add_tag(tag, value.into());
		self
	}

	/// Sets the path attribute, builder style.
	pub fn with_path(mut self, path: impl Into<String>) -> Self {
		self.path = Some(path.into());
		self
	}

	/// Returns every value of `tag` in insertion order.
	pub fn tag_values(&self, tag: &str) -> impl Iterator<Item = &str> {
		self.tags.get(tag).into_iter().flatten().map(String::as_str)
	}

	/// Returns every tag with its values, in first-insertion order.
	pub fn tags(&self) -> impl Iterator<Item = (&str, &[String])> {
		self.tags.iter().map(|(tag, values)| (tag.as_str(), values.as_slice()))
	}
}

impl Doclet for TagDoclet {
	fn tag_value(&self, tag: &str) -> Option<&str> {
		self.tags.get(tag).and_then(|values| values.first()).map(String::as_str)
	}

	fn set_tag(&mut self, tag: &str, value: String) {
		match self.tags.get_mut(tag) {
			Some(values) => *values = smallvec![value],
			None => {
				self.tags.insert(tag.to_owned(), smallvec![value]);
			}
		}
	}

	fn add_tag(&mut self, tag: &str, value: String) {
		self.tags.entry(tag.to_owned()).or_default().push(value);
	}

	fn is_inner(&self) -> bool {
		self.tag_values(tag::ACCESS).any(|access| access == ACCESS_INNER)
	}

	fn path(&self) -> Option<&str> {
		self.path.as_deref()
	}
}
