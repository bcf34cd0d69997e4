use proptest::prelude::*;
use rstest::rstest;

use super::*;

#[rstest]
#[case::static_member("a.b.c", "a.b", "c", Some(Scope::Static))]
#[case::instance_member("a#b", "a#", "b", Some(Scope::Instance))]
#[case::inner_member("a~b", "a~", "b", Some(Scope::Inner))]
#[case::quoted_segment_is_atomic(r#""a.b".c"#, r#""a.b""#, "c", Some(Scope::Static))]
#[case::quoted_short_name(r#"mod."x#y""#, "mod", r#""x#y""#, Some(Scope::Static))]
#[case::empty("", "", "", None)]
#[case::no_separator("foo", "", "foo", None)]
#[case::mixed_rightmost_wins("a.b#c~d", "a.b#c~", "d", Some(Scope::Inner))]
#[case::mixed_static_after_inner("a~b.c", "a~b", "c", Some(Scope::Static))]
#[case::trailing_dot("a.", "a", "", Some(Scope::Static))]
#[case::trailing_marker("Foo#", "Foo#", "", Some(Scope::Instance))]
#[case::unmatched_quote(r#""a.b"#, r#""a"#, "b", Some(Scope::Static))]
#[case::empty_quotes_are_not_a_span(r#"a."""#, "a", r#""""#, Some(Scope::Static))]
fn shorten_cases(#[case] path: &str, #[case] prefix: &str, #[case] name: &str, #[case] scope: Option<Scope>) {
	let split = shorten(path);
	assert_eq!(split, Shortened { prefix, name, scope });
}

#[test]
fn shorten_fully_quoted_path() {
	let split = shorten(r#""a.b~c#d""#);
	assert_eq!(split.prefix, "");
	assert_eq!(split.name, r#""a.b~c#d""#);
	assert_eq!(split.scope, None);
}

#[test]
fn shorten_multibyte_segments() {
	let split = shorten("módulo.función");
	assert_eq!(split.prefix, "módulo");
	assert_eq!(split.name, "función");
}

#[rstest]
#[case("Klass#method", "Klass#")]
#[case("a.b", "a.")]
#[case("outer~inner", "outer~")]
#[case("solo", "")]
#[case(r#""x.y""#, "")]
#[case(r#"a~"b.c""#, "a~")]
#[case("", "")]
fn truncate_cases(#[case] path: &str, #[case] expected: &str) {
	assert_eq!(truncate_last_segment(path), expected);
}

fn arb_path() -> impl Strategy<Value = String> {
	prop::collection::vec(prop::sample::select(vec!['a', 'b', 'é', '.', '#', '~', '"']), 0..16)
		.prop_map(|chars| chars.into_iter().collect())
}

proptest! {
	/// Splitting then rejoining reproduces the input exactly.
	#[test]
	fn prop_rejoin_roundtrip(path in arb_path()) {
		prop_assert_eq!(shorten(&path).rejoin(), path);
	}

	/// The short name never contains a top-level separator of its own.
	#[test]
	fn prop_short_name_is_one_segment(path in arb_path()) {
		let split = shorten(&path);
		prop_assert_eq!(shorten(split.name).scope, None);
	}

	/// Truncation keeps exactly the shortened prefix plus its separator.
	#[test]
	fn prop_truncate_matches_shorten(path in arb_path()) {
		let split = shorten(&path);
		let expected = match split.scope {
			Some(Scope::Static) => format!("{}.", split.prefix),
			_ => split.prefix.to_owned(),
		};
		prop_assert_eq!(truncate_last_segment(&path), expected);
	}
}
