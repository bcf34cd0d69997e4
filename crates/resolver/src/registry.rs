use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::{NodeId, TRACE_TARGET};

/// Associates syntax nodes with the doclets already produced for them.
///
/// Registration never fails and never forgets a node: re-registering a node
/// shadows its earlier doclet, so [`lookup`](Self::lookup) always returns the
/// most recent association. Doclets are shared, finalized values; the
/// registry does not own the syntax tree.
pub struct Registry<D> {
	entries: FxHashMap<NodeId, Arc<D>>,
	registrations: usize,
}

impl<D> Registry<D> {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self {
			entries: FxHashMap::default(),
			registrations: 0,
		}
	}

	/// Associates `doclet` with `node`, shadowing any earlier association.
	pub fn register(&mut self, node: NodeId, doclet: impl Into<Arc<D>>) {
		self.registrations += 1;
		if self.entries.insert(node, doclet.into()).is_some() {
			tracing::trace!(target: TRACE_TARGET, %node, "registry.shadowed");
		}
	}

	/// Returns the doclet most recently registered for `node`.
	#[inline]
	pub fn lookup(&self, node: NodeId) -> Option<&Arc<D>> {
		self.entries.get(&node)
	}

	/// Returns the number of distinct registered nodes.
	#[inline]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true if nothing has been registered.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Returns the number of registrations, counting shadowed ones.
	#[inline]
	pub fn registrations(&self) -> usize {
		self.registrations
	}

	/// Forgets every association.
	pub fn clear(&mut self) {
		self.entries.clear();
		self.registrations = 0;
	}
}

impl<D> Default for Registry<D> {
	fn default() -> Self {
		Self::new()
	}
}

impl<D> std::fmt::Debug for Registry<D> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Registry")
			.field("nodes", &self.entries.len())
			.field("registrations", &self.registrations)
			.finish()
	}
}
