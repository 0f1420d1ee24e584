use crate::error::{ResolveError, ResolveResult};
use crate::resolved::{ResolvedGraph, ResolvedToken};
use halo_tokens::reference::{references, substitute};
use halo_tokens::{NodeId, TokenGraph};
use std::collections::HashMap;
use tracing::{debug, info, instrument};

/// Resolve every reference in the graph
///
/// Each leaf is resolved depth-first. The stack of paths on the current
/// chain is the visited set, so a revisit means a cycle; completed leaves
/// are memoised across chains.
#[instrument(skip(graph), fields(nodes = graph.len()))]
pub fn resolve(graph: &TokenGraph) -> ResolveResult<ResolvedGraph> {
    let mut resolver = Resolver {
        graph,
        resolved: HashMap::new(),
    };

    let mut tokens = Vec::new();
    for (id, node) in graph.leaves() {
        let mut chain = Vec::new();
        let value = resolver.resolve_leaf(id, &mut chain)?;
        let raw = node.value().map(|v| v.as_str()).unwrap_or_default();

        tokens.push(ResolvedToken {
            path: node.path.clone(),
            raw: raw.to_string(),
            value,
            token_type: node.token_type.clone(),
            description: node.description.clone(),
            references: references(raw).map(|r| r.path.to_string()).collect(),
            source: node.source.clone(),
        });
    }

    info!(tokens = tokens.len(), "Token references resolved");
    Ok(ResolvedGraph::from_tokens(tokens))
}

struct Resolver<'g> {
    graph: &'g TokenGraph,
    resolved: HashMap<NodeId, String>,
}

impl Resolver<'_> {
    fn resolve_leaf(&mut self, id: NodeId, chain: &mut Vec<String>) -> ResolveResult<String> {
        if let Some(value) = self.resolved.get(&id) {
            return Ok(value.clone());
        }

        let graph = self.graph;
        let Some(node) = graph.get(id) else {
            return Err(ResolveError::UnresolvedReference {
                path: format!("#{}", id),
                referenced_by: chain.last().cloned().unwrap_or_default(),
            });
        };
        let name = node.name();

        if let Some(start) = chain.iter().position(|p| *p == name) {
            let mut cycle = chain[start..].to_vec();
            cycle.push(name);
            return Err(ResolveError::CircularReference { cycle });
        }

        let raw = node.value().map(|v| v.as_str()).unwrap_or_default();
        chain.push(name.clone());

        let value = substitute(raw, |target| {
            let target_id = graph
                .id_of(target)
                .filter(|&tid| graph.get(tid).map(|n| n.is_leaf()).unwrap_or(false))
                .ok_or_else(|| ResolveError::UnresolvedReference {
                    path: target.to_string(),
                    referenced_by: name.clone(),
                })?;
            self.resolve_leaf(target_id, chain)
        })?;

        chain.pop();

        if value != raw {
            debug!(token = %name, raw = %raw, value = %value, "Resolved reference");
        }
        self.resolved.insert(id, value.clone());
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use halo_tokens::{load_documents, TokenDocument};

    fn graph(source: &str) -> TokenGraph {
        load_documents(&[TokenDocument::new("test.json", source)]).unwrap()
    }

    #[test]
    fn test_literal_passthrough() {
        let resolved = resolve(&graph(r#"{ "a": "calc(100% - 4px)", "b": { "value": 1.5 } }"#)).unwrap();
        assert_eq!(resolved.get("a").unwrap().value, "calc(100% - 4px)");
        assert_eq!(resolved.get("b").unwrap().value, "1.5");
    }

    #[test]
    fn test_chain_resolution() {
        let resolved = resolve(&graph(
            r##"{ "base": { "white": "#ffffff" }, "surface": "{base.white}", "card": "{surface}" }"##,
        ))
        .unwrap();

        let card = resolved.get("card").unwrap();
        assert_eq!(card.value, "#ffffff");
        assert_eq!(card.references, vec!["surface"]);
        assert_eq!(card.raw, "{surface}");
    }

    #[test]
    fn test_embedded_references() {
        let resolved = resolve(&graph(
            r##"{ "w": "1px", "c": "#000", "border": "{w} solid {c}" }"##,
        ))
        .unwrap();
        assert_eq!(resolved.get("border").unwrap().value, "1px solid #000");
    }

    #[test]
    fn test_self_reference_is_cycle() {
        let err = resolve(&graph(r#"{ "a": "{a}" }"#)).unwrap_err();
        assert_eq!(
            err,
            ResolveError::CircularReference {
                cycle: vec!["a".to_string(), "a".to_string()]
            }
        );
    }

    #[test]
    fn test_cycle_names_full_loop() {
        let err = resolve(&graph(r#"{ "a": "{b}", "b": "{c}", "c": "{a}" }"#)).unwrap_err();
        assert_eq!(err.to_string(), "Circular reference: a -> b -> c -> a");
    }

    #[test]
    fn test_diamond_is_not_a_cycle() {
        let resolved = resolve(&graph(
            r#"{ "x": "1px", "a": "{x}", "b": "{x}", "top": "{a} {b} {x}" }"#,
        ))
        .unwrap();
        assert_eq!(resolved.get("top").unwrap().value, "1px 1px 1px");
    }

    #[test]
    fn test_unresolved_reference() {
        let err = resolve(&graph(r#"{ "a": "{missing.token}" }"#)).unwrap_err();
        assert_eq!(
            err,
            ResolveError::UnresolvedReference {
                path: "missing.token".to_string(),
                referenced_by: "a".to_string(),
            }
        );
    }

    #[test]
    fn test_reference_to_group_is_unresolved() {
        let err = resolve(&graph(r#"{ "base": { "sm": "4px" }, "a": "{base}" }"#)).unwrap_err();
        assert!(matches!(err, ResolveError::UnresolvedReference { ref path, .. } if path == "base"));
    }
}
