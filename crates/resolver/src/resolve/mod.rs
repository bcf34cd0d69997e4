use std::sync::Arc;

use docpath_namepath::{
	ends_with_scope_marker, first_token, normalize_prototype, shorten, strip_inner_marker, strip_scheme,
};
use tracing::{debug, trace};

use crate::doclet::{ACCESS_INNER, Doclet, tag};
use crate::{Classifier, NodeId, Registry, ResolverConfig, TRACE_TARGET, TagDictionary};

mod lexical;

/// Computes canonical namepaths for doclets.
///
/// Owns the state of one resolution session: the [`Registry`] of finalized
/// doclets and the current module. Independent sessions (for example
/// parallel documentation builds) each use their own resolver.
///
/// # Examples
///
/// ```
/// use docpath_resolver::{Doclet, Resolver, TagDoclet, tag};
///
/// let resolver = Resolver::<TagDoclet>::new();
/// let mut doclet = TagDoclet::new()
/// 	.with_tag(tag::ISA, "constructor")
/// 	.with_tag(tag::NAME, "Foo.prototype.bar");
///
/// assert_eq!(resolver.resolve(&mut doclet), "Foo#bar");
/// assert_eq!(doclet.tag_value(tag::NAME), Some("bar"));
/// assert_eq!(doclet.tag_value(tag::MEMBEROF), Some("Foo#"));
/// ```
#[derive(Debug)]
pub struct Resolver<D, C = TagDictionary> {
	config: ResolverConfig,
	classifier: C,
	registry: Registry<D>,
	current_module: Option<String>,
}

impl<D: Doclet> Resolver<D> {
	/// Creates a resolver with the default configuration.
	pub fn new() -> Self {
		Self::with_config(ResolverConfig::default())
	}

	/// Creates a resolver whose classifier is built from `config`.
	pub fn with_config(config: ResolverConfig) -> Self {
		let classifier = TagDictionary::from_config(&config);
		Self::with_classifier(config, classifier)
	}
}

impl<D: Doclet> Default for Resolver<D> {
	fn default() -> Self {
		Self::new()
	}
}

impl<D: Doclet, C: Classifier> Resolver<D, C> {
	/// Creates a resolver with a custom namespace classifier.
	pub fn with_classifier(config: ResolverConfig, classifier: C) -> Self {
		Self {
			config,
			classifier,
			registry: Registry::new(),
			current_module: None,
		}
	}

	/// Returns the active configuration.
	#[inline]
	pub fn config(&self) -> &ResolverConfig {
		&self.config
	}

	/// Returns the node to doclet registry.
	#[inline]
	pub fn registry(&self) -> &Registry<D> {
		&self.registry
	}

	/// Sets the module whose identifier replaces the export alias.
	///
	/// An empty identifier clears the current module.
	pub fn set_current_module(&mut self, module: impl Into<String>) {
		let module = module.into();
		debug!(target: TRACE_TARGET, module = %module, "module.enter");
		self.current_module = (!module.is_empty()).then_some(module);
	}

	/// Clears the current module.
	pub fn clear_current_module(&mut self) {
		self.current_module = None;
	}

	/// Returns the current module, if any.
	#[inline]
	pub fn current_module(&self) -> Option<&str> {
		self.current_module.as_deref()
	}

	/// Associates a finalized doclet with its syntax node.
	pub fn register(&mut self, node: NodeId, doclet: impl Into<Arc<D>>) {
		self.registry.register(node, doclet);
	}

	/// Returns the doclet most recently registered for `node`.
	#[inline]
	pub fn lookup(&self, node: NodeId) -> Option<&Arc<D>> {
		self.registry.lookup(node)
	}

	/// Resolves `doclet`, registers it against `node` and returns the shared
	/// handle.
	pub fn finish(&mut self, node: NodeId, mut doclet: D) -> Arc<D> {
		self.resolve(&mut doclet);
		let doclet = Arc::new(doclet);
		self.registry.register(node, Arc::clone(&doclet));
		doclet
	}

	/// Ends the session: forgets every registration and the current module.
	pub fn reset(&mut self) {
		debug!(target: TRACE_TARGET, nodes = self.registry.len(), "session.reset");
		self.registry.clear();
		self.current_module = None;
	}

	/// Computes `path`, `name` and `memberof` for `doclet` from its tags.
	///
	/// Writes the short name, the container (without a trailing `~`, adding
	/// `access = inner` when one was present) and the path back onto the
	/// doclet, and returns the path. Returns an empty string when the doclet
	/// carries no name information.
	pub fn resolve(&self, doclet: &mut impl Doclet) -> String {
		let kind = doclet.tag_value(tag::ISA).unwrap_or_default().to_owned();
		let raw = first_token(doclet.tag_value(tag::NAME).unwrap_or_default());
		let mut name = normalize_prototype(&self.rewrite_export(raw)).into_owned();
		let mut memberof = doclet.tag_value(tag::MEMBEROF).unwrap_or_default().to_owned();
		let mut path = name.clone();

		if !memberof.is_empty() {
			// `@name Foo.bar` with `@memberof Foo`: the name is already qualified.
			if name.starts_with(&memberof) {
				name = shorten(&name).name.to_owned();
			}
		} else if kind != self.config.file_kind {
			let split = shorten(&name);
			let (container, short) = (split.prefix.to_owned(), split.name.to_owned());
			if !container.is_empty() {
				let (stripped, inner) = strip_inner_marker(&container);
				doclet.set_tag(tag::MEMBEROF, stripped.to_owned());
				if inner {
					doclet.add_tag(tag::ACCESS, ACCESS_INNER.to_owned());
				}
			}
			memberof = container;
			name = short;
		}

		let mut namespace = String::new();
		if self.classifier.classify(&kind).introduces_namespace {
			if let Some(rest) = strip_scheme(&name) {
				name = rest.to_owned();
			}
			namespace = format!("{kind}:");
		}

		if !name.is_empty() {
			doclet.set_tag(tag::NAME, name.clone());
		}

		if !memberof.is_empty() && !name.starts_with(&memberof) {
			let joiner = if ends_with_scope_marker(&memberof) { "" } else { "." };
			path = format!("{memberof}{joiner}{namespace}{name}");
		} else if !namespace.is_empty() {
			path = format!("{namespace}{name}");
		}

		if !path.is_empty() {
			doclet.set_tag(tag::PATH, path.clone());
		}

		trace!(target: TRACE_TARGET, %kind, %name, %memberof, %path, "resolve.done");
		path
	}

	/// Replaces a leading `<alias>.` with the current module identifier.
	fn rewrite_export(&self, name: &str) -> String {
		let Some(module) = self.current_module.as_deref() else {
			return name.to_owned();
		};

		match name
			.strip_prefix(self.config.export_alias.as_str())
			.and_then(|rest| rest.strip_prefix('.'))
			.filter(|rest| !rest.is_empty())
		{
			Some(rest) => format!("{module}.{rest}"),
			None => name.to_owned(),
		}
	}
}
