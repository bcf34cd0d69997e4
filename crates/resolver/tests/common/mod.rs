//! Minimal arena syntax tree for driving the resolver in tests.

#![allow(dead_code)]

use docpath_resolver::{NodeId, NodeKind, SyntaxNode};
// Integration test crates link every dependency of the library.
use docpath_namepath as _;
use indexmap as _;
use pretty_assertions as _;
use rstest as _;
use rustc_hash as _;
use serde as _;
use smallvec as _;
use tempfile as _;
use thiserror as _;
use toml as _;
use tracing as _;

struct NodeData {
	kind: NodeKind,
	parent: Option<usize>,
	name: Option<String>,
}

/// Owns every node; handles borrow it.
#[derive(Default)]
pub struct Tree {
	nodes: Vec<NodeData>,
}

impl Tree {
	pub fn new() -> Self {
		Self::default()
	}

	fn push(&mut self, kind: NodeKind, parent: Option<usize>, name: Option<&str>) -> usize {
		self.nodes.push(NodeData {
			kind,
			parent,
			name: name.map(str::to_owned),
		});
		self.nodes.len() - 1
	}

	pub fn root(&mut self) -> usize {
		self.push(NodeKind::Other, None, None)
	}

	pub fn function(&mut self, parent: usize, name: Option<&str>) -> usize {
		self.push(NodeKind::Function, Some(parent), name)
	}

	pub fn object(&mut self, parent: usize) -> usize {
		self.push(NodeKind::ObjectLiteral, Some(parent), None)
	}

	pub fn other(&mut self, parent: usize) -> usize {
		self.push(NodeKind::Other, Some(parent), None)
	}

	pub fn node(&self, index: usize) -> Node<'_> {
		Node { tree: self, index }
	}
}

#[derive(Clone, Copy)]
pub struct Node<'a> {
	tree: &'a Tree,
	index: usize,
}

impl SyntaxNode for Node<'_> {
	fn id(&self) -> NodeId {
		NodeId(self.index)
	}

	fn kind(&self) -> NodeKind {
		self.tree.nodes[self.index].kind
	}

	fn parent(&self) -> Option<Self> {
		self.tree.nodes[self.index].parent.map(|index| self.tree.node(index))
	}

	fn name(&self) -> Option<&str> {
		self.tree.nodes[self.index].name.as_deref()
	}
}
