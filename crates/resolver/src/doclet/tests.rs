use pretty_assertions::assert_eq;

use super::*;

#[test]
fn tag_value_returns_first() {
	let doclet = TagDoclet::new().with_tag(tag::ACCESS, "private").with_tag(tag::ACCESS, "inner");
	assert_eq!(doclet.tag_value(tag::ACCESS), Some("private"));
	assert_eq!(doclet.tag_values(tag::ACCESS).collect::<Vec<_>>(), vec!["private", "inner"]);
}

#[test]
fn missing_tag_is_none() {
	let doclet = TagDoclet::new();
	assert_eq!(doclet.tag_value(tag::NAME), None);
	assert_eq!(doclet.tag_values(tag::NAME).count(), 0);
}

#[test]
fn set_tag_replaces_all_values() {
	let mut doclet = TagDoclet::new().with_tag(tag::NAME, "a").with_tag(tag::NAME, "b");
	doclet.set_tag(tag::NAME, "c".into());
	assert_eq!(doclet.tag_values(tag::NAME).collect::<Vec<_>>(), vec!["c"]);
}

#[test]
fn set_tag_keeps_tag_order() {
	let mut doclet = TagDoclet::new()
		.with_tag(tag::NAME, "x")
		.with_tag(tag::ISA, "function");
	doclet.set_tag(tag::NAME, "y".into());
	doclet.set_tag(tag::PATH, "y".into());

	let order: Vec<_> = doclet.tags().map(|(tag, _)| tag).collect();
	assert_eq!(order, vec![tag::NAME, tag::ISA, tag::PATH]);
}

#[test]
fn inner_when_any_access_is_inner() {
	let mut doclet = TagDoclet::new().with_tag(tag::ACCESS, "private");
	assert!(!doclet.is_inner());
	doclet.add_tag(tag::ACCESS, ACCESS_INNER.into());
	assert!(doclet.is_inner());
}

#[test]
fn path_attribute_is_separate_from_tag() {
	let doclet = TagDoclet::new().with_path("attr.path");
	assert_eq!(doclet.tag_value(tag::PATH), None);
	assert_eq!(Doclet::path(&doclet), Some("attr.path"));
}

struct BareDoclet(Option<String>);

impl Doclet for BareDoclet {
	fn tag_value(&self, name: &str) -> Option<&str> {
		if name == tag::ACCESS { self.0.as_deref() } else { None }
	}

	fn set_tag(&mut self, _tag: &str, value: String) {
		self.0 = Some(value);
	}

	fn add_tag(&mut self, _tag: &str, value: String) {
		self.0.get_or_insert(value);
	}
}

#[test]
fn default_trait_methods() {
	let mut doclet = BareDoclet(None);
	assert!(!doclet.is_inner());
	assert_eq!(doclet.path(), None);
	doclet.add_tag(tag::ACCESS, ACCESS_INNER.into());
	assert!(doclet.is_inner());
}
