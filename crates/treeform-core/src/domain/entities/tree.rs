//! The canonical tree model shared by both parsers and the materializer.
//!
//! Nodes live in an arena owned by [`Tree`]; parent/child links are
//! index-based [`NodeId`] handles minted by the owning tree. Parser context
//! stacks therefore hold plain `Copy` handles instead of aliasing
//! references, and every lookup is bounds-checked.
//!
//! A tree is constructed once per parse pass and is read-only afterwards;
//! the materializer never mutates it.

use serde::Serialize;
use std::fmt;

use crate::domain::{error::DomainError, value_objects::NodeKind};

/// Handle to a node inside its owning [`Tree`].
///
/// Only valid for the tree that minted it. Using a handle against another
/// tree either fails the bounds check or addresses an unrelated node; it can
/// never dangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NodeId(usize);

/// A single directory or file entry.
#[derive(Debug, Clone, Serialize)]
pub struct Node {
    name: String,
    kind: NodeKind,
    depth: usize,
    children: Vec<NodeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl Node {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Child handles in declaration order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Arena-backed tree rooted at a synthetic, unnamed directory.
///
/// The root is never materialized as a named entry; only its children are.
#[derive(Debug, Clone, Serialize)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    /// Create a tree containing only the synthetic root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                name: String::new(),
                kind: NodeKind::Directory,
                depth: 0,
                children: Vec::new(),
                content: None,
                language: None,
                description: None,
            }],
        }
    }

    /// Handle of the synthetic root.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes, including the synthetic root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true` when the tree holds nothing but the synthetic root.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Bounds-checked lookup.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Direct lookup.
    ///
    /// # Panics
    /// Panics if `id` was minted by a different tree and is out of bounds.
    /// Handles obtained from this tree are always valid.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Append a directory child under `parent`.
    pub fn add_directory(
        &mut self,
        parent: NodeId,
        name: impl Into<String>,
    ) -> Result<NodeId, DomainError> {
        self.add_child(parent, name.into(), NodeKind::Directory)
    }

    /// Append a file child under `parent`.
    pub fn add_file(
        &mut self,
        parent: NodeId,
        name: impl Into<String>,
    ) -> Result<NodeId, DomainError> {
        self.add_child(parent, name.into(), NodeKind::File)
    }

    /// Attach file content. Rejects directory targets.
    pub fn set_content(&mut self, id: NodeId, content: String) -> Result<(), DomainError> {
        let node = self.node_mut(id)?;
        if node.kind.is_directory() {
            return Err(DomainError::NotAFile {
                name: node.name.clone(),
            });
        }
        node.content = Some(content);
        Ok(())
    }

    /// Record the fence language tag of a file's content.
    pub fn set_language(&mut self, id: NodeId, language: String) -> Result<(), DomainError> {
        let node = self.node_mut(id)?;
        if node.kind.is_directory() {
            return Err(DomainError::NotAFile {
                name: node.name.clone(),
            });
        }
        node.language = Some(language);
        Ok(())
    }

    /// Attach a free-text description to any node.
    pub fn set_description(&mut self, id: NodeId, description: String) -> Result<(), DomainError> {
        self.node_mut(id)?.description = Some(description);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Internal
    // -------------------------------------------------------------------------

    fn add_child(
        &mut self,
        parent: NodeId,
        name: String,
        kind: NodeKind,
    ) -> Result<NodeId, DomainError> {
        validate_name(&name)?;

        let parent_node = self
            .nodes
            .get(parent.0)
            .ok_or(DomainError::NodeOutOfBounds { index: parent.0 })?;
        if parent_node.kind.is_file() {
            return Err(DomainError::NotADirectory {
                name: parent_node.name.clone(),
            });
        }
        let depth = parent_node.depth + 1;

        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            name,
            kind,
            depth,
            children: Vec::new(),
            content: None,
            language: None,
            description: None,
        });
        self.nodes[parent.0].children.push(id);
        Ok(id)
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, DomainError> {
        self.nodes
            .get_mut(id.0)
            .ok_or(DomainError::NodeOutOfBounds { index: id.0 })
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_name(name: &str) -> Result<(), DomainError> {
    if name.is_empty() {
        return Err(DomainError::InvalidName {
            name: name.into(),
            reason: "name is empty".into(),
        });
    }
    if name.contains('/') || name.contains('\\') {
        return Err(DomainError::InvalidName {
            name: name.into(),
            reason: "name contains a path separator".into(),
        });
    }
    Ok(())
}

/// Two-space-indented listing, directories marked with a trailing `/`.
///
/// Used by `--dry-run` previews and shape assertions in tests; the synthetic
/// root itself is not printed.
impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn print_node(tree: &Tree, id: NodeId, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let node = tree.node(id);
            let indent = "  ".repeat(node.depth().saturating_sub(1));
            match node.kind() {
                NodeKind::Directory => writeln!(f, "{indent}{}/", node.name())?,
                NodeKind::File => writeln!(f, "{indent}{}", node.name())?,
            }
            for &child in node.children() {
                print_node(tree, child, f)?;
            }
            Ok(())
        }

        for &child in self.node(self.root()).children() {
            print_node(self, child, f)?;
        }
        Ok(())
    }
}
