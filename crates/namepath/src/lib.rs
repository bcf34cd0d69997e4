//! Namepath algebra for documentation symbol paths.
//!
//! A namepath is a sequence of segments joined by one of three separators:
//!
//! - `.` static member ([`Scope::Static`])
//! - `#` instance member, usually after a prototype indirection ([`Scope::Instance`])
//! - `~` inner, closure-local symbol ([`Scope::Inner`])
//!
//! Double-quoted segments are atomic: `"a.b".c` has two segments, not three.
//!
//! Everything here is a pure function over string slices. Splitting returns
//! borrowed halves ([`Shortened`]) so callers decide when to allocate.

/// Separator kinds and scope markers.
pub mod scope;
/// Splitting a path at its last top-level separator.
pub mod split;
/// Name rewrites applied before splitting and joining.
pub mod text;

pub use scope::Scope;
pub use split::{Shortened, shorten, truncate_last_segment};
pub use text::{
	ends_with_scope_marker, ends_with_separator, first_token, is_scheme, join, normalize_prototype,
	strip_inner_marker, strip_scheme,
};
