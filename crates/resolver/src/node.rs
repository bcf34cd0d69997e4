/// Stable identity of a syntax node, used as the registry key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl std::fmt::Display for NodeId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "NodeId({})", self.0)
	}
}

/// The node classifications the resolver distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
	/// An object or record literal (`{ a: 1 }`).
	ObjectLiteral,
	/// A function declaration or expression.
	Function,
	/// Anything else.
	Other,
}

/// Read-only view of a node in the external syntax tree.
///
/// Implementors are cheap handles (a reference or an index into an arena).
/// The resolver never mutates or stores nodes, only their [`NodeId`].
pub trait SyntaxNode: Sized {
	/// Identity of this node.
	fn id(&self) -> NodeId;

	/// Classification of this node.
	fn kind(&self) -> NodeKind;

	/// The syntactic parent, `None` at the root.
	fn parent(&self) -> Option<Self>;

	/// Identifier of a named declaration, `None` for anonymous nodes.
	fn name(&self) -> Option<&str>;

	/// Nearest lexically enclosing function, excluding the node itself.
	fn enclosing_function(&self) -> Option<Self> {
		let mut current = self.parent();
		while let Some(node) = current {
			if node.kind() == NodeKind::Function {
				return Some(node);
			}
			current = node.parent();
		}
		None
	}
}
