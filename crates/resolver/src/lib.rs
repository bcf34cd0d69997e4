//! Doclet name resolution.
//!
//! Turns the raw `name`/`memberof`/`isa` tags of a doclet into a canonical
//! namepath, using the lexical context of already-resolved doclets where
//! the tags alone are not enough:
//!
//! - [`Resolver::resolve`]: computes `path`, `name` and `memberof` from tags
//! - [`Resolver::resolve_this`]: qualifies `this.`-prefixed names
//! - [`Resolver::resolve_inner`]: qualifies closure-local names with `~`
//!
//! The external driver registers each finalized doclet against its syntax
//! node ([`Resolver::register`] or [`Resolver::finish`]) so later doclets can
//! look up their enclosing function or object literal. Registration must
//! follow a containment-respecting traversal; a missing ancestor degrades to
//! an unqualified name rather than an error.
//!
//! Resolution never fails. The only fallible surface is loading a
//! [`ResolverConfig`].

/// Namespace classification of symbol kinds.
pub mod classify;
/// Resolver configuration and its errors.
pub mod config;
/// The doclet capability trait and a tag-backed implementation.
pub mod doclet;
/// Syntax node capabilities consumed from the external AST.
pub mod node;
/// Node to doclet association.
pub mod registry;
mod resolve;

pub use classify::{Classification, Classifier, TagDictionary};
pub use config::{ConfigError, ResolverConfig};
pub use doclet::{ACCESS_INNER, Doclet, TagDoclet, tag};
pub use node::{NodeId, NodeKind, SyntaxNode};
pub use registry::Registry;
pub use resolve::Resolver;

/// Tracing target for resolution events.
pub const TRACE_TARGET: &str = "docpath_resolve";
