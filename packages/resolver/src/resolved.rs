use halo_tokens::reference::whole_reference;
use halo_tokens::{LoadResult, TokenGraph, TokenType, TokenValue};
use std::collections::HashMap;

/// A leaf after resolution
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedToken {
    pub path: Vec<String>,
    /// Value as written in the source document
    pub raw: String,
    /// Terminal literal with every reference substituted
    pub value: String,
    pub token_type: Option<TokenType>,
    pub description: Option<String>,
    /// Paths referenced directly by `raw`, in order of appearance
    pub references: Vec<String>,
    pub source: String,
}

impl ResolvedToken {
    pub fn name(&self) -> String {
        self.path.join(".")
    }

    /// Target of `raw` when it is a single whole-value reference
    pub fn alias_of(&self) -> Option<&str> {
        whole_reference(&self.raw)
    }
}

/// Every leaf of a token graph, resolved, in graph order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedGraph {
    tokens: Vec<ResolvedToken>,
    index: HashMap<String, usize>,
}

impl ResolvedGraph {
    pub(crate) fn from_tokens(tokens: Vec<ResolvedToken>) -> Self {
        let index = tokens
            .iter()
            .enumerate()
            .map(|(i, token)| (token.name(), i))
            .collect();
        Self { tokens, index }
    }

    pub fn get(&self, path: &str) -> Option<&ResolvedToken> {
        self.index.get(path).map(|&i| &self.tokens[i])
    }

    pub fn tokens(&self) -> &[ResolvedToken] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Follow whole-value references starting at `path` (inclusive)
    ///
    /// The walk stops at the first token whose raw value is not a single
    /// reference. Cycles cannot occur in a resolved graph, but the walk is
    /// bounded by the token count regardless.
    pub fn alias_chain(&self, path: &str) -> Vec<&ResolvedToken> {
        let mut chain = Vec::new();
        let mut current = self.get(path);

        while let Some(token) = current {
            if chain.len() > self.tokens.len() {
                break;
            }
            chain.push(token);
            current = token.alias_of().and_then(|next| self.get(next));
        }

        chain
    }

    /// Rebuild a token graph whose leaves hold the resolved literals
    pub fn to_literal_graph(&self) -> LoadResult<TokenGraph> {
        let mut graph = TokenGraph::new();
        for token in &self.tokens {
            let segments: Vec<&str> = token.path.iter().map(String::as_str).collect();
            graph.add_leaf(
                &segments,
                TokenValue::Text(token.value.clone()),
                token.token_type.clone(),
                &token.source,
            )?;
        }
        Ok(graph)
    }
}
