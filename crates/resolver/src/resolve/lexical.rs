//! Name rewrites that depend on the enclosing syntax.

use std::borrow::Cow;

use docpath_namepath::{Scope, ends_with_separator, join, normalize_prototype, truncate_last_segment};
use tracing::trace;

use super::Resolver;
use crate::doclet::{Doclet, tag};
use crate::{Classifier, NodeKind, SyntaxNode, TRACE_TARGET};

const THIS_PREFIX: &str = "this.";
const THIS: &str = "this";

impl<D: Doclet, C: Classifier> Resolver<D, C> {
	/// Rewrites a `this.`-qualified name using the lexical context of `node`.
	///
	/// - Inside an object literal, the member is qualified with the literal's
	///   path (or the anonymous-object placeholder).
	/// - Inside a method, `this` is the instance: the method's own segment is
	///   dropped from its path and the member joined with `#`. Constructors
	///   keep their full path.
	/// - Inside an inner or undocumented function, or at top level, `this` is
	///   ambient and the prefix is simply dropped.
	/// - A doclet with an explicit `memberof` other than `this` only loses the
	///   prefix; its `memberof` supplies the qualification during
	///   [`resolve`](Self::resolve).
	///
	/// Does not modify `doclet`.
	pub fn resolve_this<N: SyntaxNode>(&self, name: &str, node: &N, doclet: &impl Doclet) -> String {
		if let Some(literal) = node.parent().filter(|parent| parent.kind() == NodeKind::ObjectLiteral) {
			return self.qualify_literal_member(name, &literal);
		}

		let Some(member) = name.strip_prefix(THIS_PREFIX) else {
			return name.to_owned();
		};

		let explicit = normalize_prototype(doclet.tag_value(tag::MEMBEROF).unwrap_or_default());
		if !explicit.is_empty() && explicit != THIS {
			return member.to_owned();
		}

		let Some(enclosing) = node.enclosing_function() else {
			trace!(target: TRACE_TARGET, node = %node.id(), "resolve_this.global_object");
			return member.to_owned();
		};

		let Some(enclosing_doc) = self.registry.lookup(enclosing.id()) else {
			trace!(
				target: TRACE_TARGET,
				node = %node.id(),
				enclosing = %enclosing.id(),
				"resolve_this.anonymous_function"
			);
			return member.to_owned();
		};

		// Inner functions are called without a receiver; `this` is global there.
		if enclosing_doc.is_inner() {
			return member.to_owned();
		}

		let container = enclosing_doc.tag_value(tag::PATH).unwrap_or_default();
		if container.is_empty() {
			return member.to_owned();
		}

		let container = if enclosing_doc.tag_value(tag::ISA) == Some(self.config.constructor_kind.as_str()) {
			container
		} else {
			truncate_last_segment(container)
		};

		if container.is_empty() || ends_with_separator(container) {
			format!("{container}{member}")
		} else {
			format!("{container}{}{member}", Scope::Instance)
		}
	}

	/// Qualifies a closure-local `name` with the path of its enclosing
	/// function, joined by `~`.
	///
	/// An undocumented enclosing function without an identifier contributes
	/// the anonymous-function placeholder; a named but undocumented one, or
	/// no enclosing function at all, leaves `name` unchanged.
	pub fn resolve_inner<N: SyntaxNode>(&self, name: &str, node: &N, _doclet: &impl Doclet) -> String {
		let enclosing = node.enclosing_function();
		let container = match &enclosing {
			Some(function) => match self.registry.lookup(function.id()) {
				Some(doc) => doc.tag_value(tag::PATH).unwrap_or_default(),
				None if function.name().is_none_or(str::is_empty) => {
					trace!(target: TRACE_TARGET, enclosing = %function.id(), "resolve_inner.anonymous");
					self.config.anonymous_function.as_str()
				}
				None => "",
			},
			None => "",
		};

		if container.is_empty() {
			name.to_owned()
		} else {
			format!("{container}{}{name}", Scope::Inner)
		}
	}

	fn qualify_literal_member<N: SyntaxNode>(&self, name: &str, literal: &N) -> String {
		let Some(literal_doc) = self.registry.lookup(literal.id()) else {
			trace!(target: TRACE_TARGET, literal = %literal.id(), "resolve_this.unregistered_literal");
			return name.to_owned();
		};

		let tagged = normalize_prototype(literal_doc.tag_value(tag::PATH).unwrap_or_default());
		let container: Cow<'_, str> = if !tagged.is_empty() {
			tagged
		} else if let Some(path) = literal_doc.path().filter(|path| !path.is_empty()) {
			Cow::Borrowed(path)
		} else {
			Cow::Borrowed(self.config.anonymous_object.as_str())
		};

		join(&container, name)
	}
}
