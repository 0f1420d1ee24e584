//! In-memory token forest.
//!
//! Nodes live in a flat arena and refer to each other by [`NodeId`]. The
//! dotted path (`base.spacing.sm`) is the unique key of every node.

use crate::error::{LoadError, LoadResult};
use std::collections::HashMap;
use std::fmt;

/// Index of a node inside a [`TokenGraph`]
pub type NodeId = usize;

/// Semantic kind of a token, used for validation only
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenType {
    Color,
    Dimension,
    Duration,
    Number,
    FontFamily,
    FontWeight,
    String,
    Other(std::string::String),
}

impl TokenType {
    pub fn parse(tag: &str) -> Self {
        match tag {
            "color" => TokenType::Color,
            "dimension" | "spacing" | "size" => TokenType::Dimension,
            "duration" => TokenType::Duration,
            "number" => TokenType::Number,
            "fontFamily" | "font-family" => TokenType::FontFamily,
            "fontWeight" | "font-weight" => TokenType::FontWeight,
            "string" => TokenType::String,
            other => TokenType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TokenType::Color => "color",
            TokenType::Dimension => "dimension",
            TokenType::Duration => "duration",
            TokenType::Number => "number",
            TokenType::FontFamily => "font-family",
            TokenType::FontWeight => "font-weight",
            TokenType::String => "string",
            TokenType::Other(tag) => tag,
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw value of a leaf as written in the document
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    /// String literal, possibly containing `{reference}` expressions
    Text(String),
    /// Numeric literal, kept in its JSON rendering
    Number(String),
}

impl TokenValue {
    pub fn as_str(&self) -> &str {
        match self {
            TokenValue::Text(text) => text,
            TokenValue::Number(number) => number,
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Group { children: Vec<NodeId> },
    Leaf { value: TokenValue },
}

/// A named group or leaf in the token forest
#[derive(Debug, Clone, PartialEq)]
pub struct TokenNode {
    pub path: Vec<String>,
    pub kind: NodeKind,
    /// Declared type, or the type inherited from the nearest typed group
    pub token_type: Option<TokenType>,
    pub description: Option<String>,
    /// Name of the document that introduced this node
    pub source: String,
}

impl TokenNode {
    /// Fully-qualified dotted name
    pub fn name(&self) -> String {
        self.path.join(".")
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }

    pub fn value(&self) -> Option<&TokenValue> {
        match &self.kind {
            NodeKind::Leaf { value } => Some(value),
            NodeKind::Group { .. } => None,
        }
    }

    pub fn children(&self) -> &[NodeId] {
        match &self.kind {
            NodeKind::Group { children } => children,
            NodeKind::Leaf { .. } => &[],
        }
    }
}

/// Merged forest of every loaded token document
#[derive(Debug, Clone, Default)]
pub struct TokenGraph {
    nodes: Vec<TokenNode>,
    index: HashMap<String, NodeId>,
    roots: Vec<NodeId>,
}

impl TokenGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: NodeId) -> Option<&TokenNode> {
        self.nodes.get(id)
    }

    /// Look up a node by its dotted path
    pub fn lookup(&self, path: &str) -> Option<&TokenNode> {
        self.index.get(path).and_then(|&id| self.nodes.get(id))
    }

    pub fn id_of(&self, path: &str) -> Option<NodeId> {
        self.index.get(path).copied()
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Every node in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &TokenNode)> {
        self.nodes.iter().enumerate()
    }

    /// Every leaf in insertion order
    pub fn leaves(&self) -> impl Iterator<Item = (NodeId, &TokenNode)> {
        self.nodes().filter(|(_, node)| node.is_leaf())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Insert a node under `parent` (or as a root). The caller guarantees the
    /// path is not yet taken.
    pub(crate) fn insert(&mut self, parent: Option<NodeId>, node: TokenNode) -> NodeId {
        let id = self.nodes.len();
        self.index.insert(node.name(), id);
        self.nodes.push(node);

        match parent {
            Some(parent_id) => {
                if let Some(NodeKind::Group { children }) =
                    self.nodes.get_mut(parent_id).map(|n| &mut n.kind)
                {
                    children.push(id);
                }
            }
            None => self.roots.push(id),
        }

        id
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut TokenNode> {
        self.nodes.get_mut(id)
    }

    /// Add a leaf with a literal or reference value, creating intermediate
    /// groups as needed. Fails if the path is already taken.
    pub fn add_leaf(
        &mut self,
        path: &[&str],
        value: TokenValue,
        token_type: Option<TokenType>,
        source: &str,
    ) -> LoadResult<NodeId> {
        let (leaf, groups) = path.split_last().ok_or_else(|| LoadError::InvalidSegment {
            document: source.to_string(),
            parent: String::new(),
            segment: String::new(),
        })?;

        let mut parent = None;
        let mut prefix: Vec<String> = Vec::new();
        for segment in groups {
            prefix.push(segment.to_string());
            let name = prefix.join(".");
            parent = Some(match self.id_of(&name) {
                Some(id) if !self.nodes[id].is_leaf() => id,
                Some(id) => {
                    return Err(LoadError::duplicate(&name, &self.nodes[id].source, source))
                }
                None => self.insert(
                    parent,
                    TokenNode {
                        path: prefix.clone(),
                        kind: NodeKind::Group {
                            children: Vec::new(),
                        },
                        token_type: None,
                        description: None,
                        source: source.to_string(),
                    },
                ),
            });
        }

        prefix.push(leaf.to_string());
        let name = prefix.join(".");
        if let Some(existing) = self.lookup(&name) {
            return Err(LoadError::duplicate(&name, &existing.source, source));
        }

        Ok(self.insert(
            parent,
            TokenNode {
                path: prefix,
                kind: NodeKind::Leaf { value },
                token_type,
                description: None,
                source: source.to_string(),
            },
        ))
    }
}
