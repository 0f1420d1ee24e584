//! Token document loader.
//!
//! Documents are JSON object trees. An object with a `value` (or `$value`)
//! member is a leaf; every other object member is a group. A bare string or
//! number member is shorthand for a leaf without metadata.

use crate::ast::{NodeId, NodeKind, TokenGraph, TokenNode, TokenType, TokenValue};
use crate::error::{LoadError, LoadResult};
use serde_json::{Map, Value};
use tracing::{debug, info, instrument};

const VALUE_KEYS: [&str; 2] = ["value", "$value"];
const TYPE_KEYS: [&str; 2] = ["type", "$type"];
const DESCRIPTION_KEYS: [&str; 4] = ["description", "$description", "comment", "$comment"];

/// One source document: a name used in error messages and its JSON text
#[derive(Debug, Clone)]
pub struct TokenDocument {
    pub name: String,
    pub source: String,
}

impl TokenDocument {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }
}

/// Load and merge a set of documents into one forest
///
/// Colliding leaf paths across documents are an error; the result never
/// depends on which document "wins".
#[instrument(skip(documents), fields(documents = documents.len()))]
pub fn load_documents(documents: &[TokenDocument]) -> LoadResult<TokenGraph> {
    let mut graph = TokenGraph::new();
    for document in documents {
        graph.add_document(document)?;
    }
    info!(nodes = graph.len(), "Token graph loaded");
    Ok(graph)
}

impl TokenGraph {
    /// Parse one document and merge it into this graph
    pub fn add_document(&mut self, document: &TokenDocument) -> LoadResult<()> {
        debug!(document = %document.name, "Loading token document");

        let root: Value = serde_json::from_str(&document.source)
            .map_err(|e| LoadError::malformed(&document.name, &e))?;

        let Value::Object(members) = root else {
            return Err(LoadError::NotAnObject {
                document: document.name.clone(),
            });
        };

        let mut loader = DocumentLoader {
            graph: self,
            document: &document.name,
        };
        loader.load_group_members(None, &[], &members, None)
    }
}

struct DocumentLoader<'g> {
    graph: &'g mut TokenGraph,
    document: &'g str,
}

impl DocumentLoader<'_> {
    fn load_group_members(
        &mut self,
        parent: Option<NodeId>,
        prefix: &[String],
        members: &Map<String, Value>,
        inherited_type: Option<&TokenType>,
    ) -> LoadResult<()> {
        for (key, value) in members {
            if key.starts_with('$') || is_group_metadata(key, value) {
                continue;
            }

            self.validate_segment(prefix, key)?;
            let mut path = prefix.to_vec();
            path.push(key.clone());

            match value {
                Value::Object(object) if is_leaf(object) => {
                    self.load_leaf(parent, path, object, inherited_type)?;
                }
                Value::Object(object) => {
                    self.load_group(parent, path, object, inherited_type)?;
                }
                Value::String(_) | Value::Number(_) => {
                    let value = literal(value).ok_or_else(|| self.invalid(&path, value))?;
                    self.insert_leaf(parent, path, value, inherited_type.cloned(), None)?;
                }
                other => return Err(self.invalid(&path, other)),
            }
        }

        Ok(())
    }

    fn load_group(
        &mut self,
        parent: Option<NodeId>,
        path: Vec<String>,
        object: &Map<String, Value>,
        inherited_type: Option<&TokenType>,
    ) -> LoadResult<()> {
        let declared_type = string_member(object, &TYPE_KEYS).map(TokenType::parse);
        let description = string_member(object, &DESCRIPTION_KEYS).map(str::to_string);
        let name = path.join(".");

        let id = match self.graph.id_of(&name) {
            Some(id) => {
                let existing = self
                    .graph
                    .get_mut(id)
                    .ok_or_else(|| LoadError::duplicate(&name, "<unknown>", self.document))?;
                if existing.is_leaf() {
                    return Err(LoadError::duplicate(&name, &existing.source, self.document));
                }
                if existing.token_type.is_none() {
                    existing.token_type = declared_type.clone();
                }
                if existing.description.is_none() {
                    existing.description = description;
                }
                id
            }
            None => self.graph.insert(
                parent,
                TokenNode {
                    path: path.clone(),
                    kind: NodeKind::Group {
                        children: Vec::new(),
                    },
                    token_type: declared_type.clone(),
                    description,
                    source: self.document.to_string(),
                },
            ),
        };

        let group_type = self
            .graph
            .get(id)
            .and_then(|node| node.token_type.clone())
            .or_else(|| inherited_type.cloned());

        self.load_group_members(Some(id), &path, object, group_type.as_ref())
    }

    fn load_leaf(
        &mut self,
        parent: Option<NodeId>,
        path: Vec<String>,
        object: &Map<String, Value>,
        inherited_type: Option<&TokenType>,
    ) -> LoadResult<()> {
        if let Some(child) = object
            .iter()
            .find(|(key, value)| {
                !key.starts_with('$') && !VALUE_KEYS.contains(&key.as_str()) && value.is_object()
            })
            .map(|(key, _)| key)
        {
            return Err(LoadError::LeafWithChildren {
                document: self.document.to_string(),
                path: path.join("."),
                child: child.clone(),
            });
        }

        let raw = VALUE_KEYS
            .iter()
            .find_map(|key| object.get(*key))
            .unwrap_or(&Value::Null);
        let value = literal(raw).ok_or_else(|| self.invalid(&path, raw))?;

        let token_type = string_member(object, &TYPE_KEYS)
            .map(TokenType::parse)
            .or_else(|| inherited_type.cloned());
        let description = string_member(object, &DESCRIPTION_KEYS).map(str::to_string);

        self.insert_leaf(parent, path, value, token_type, description)
    }

    fn insert_leaf(
        &mut self,
        parent: Option<NodeId>,
        path: Vec<String>,
        value: TokenValue,
        token_type: Option<TokenType>,
        description: Option<String>,
    ) -> LoadResult<()> {
        let name = path.join(".");
        if let Some(existing) = self.graph.lookup(&name) {
            return Err(LoadError::duplicate(&name, &existing.source, self.document));
        }

        debug!(token = %name, value = %value, "Registering token");
        self.graph.insert(
            parent,
            TokenNode {
                path,
                kind: NodeKind::Leaf { value },
                token_type,
                description,
                source: self.document.to_string(),
            },
        );
        Ok(())
    }

    fn validate_segment(&self, prefix: &[String], segment: &str) -> LoadResult<()> {
        let valid = !segment.trim().is_empty()
            && !segment.contains(|c| matches!(c, '.' | '{' | '}'));
        if valid {
            Ok(())
        } else {
            Err(LoadError::InvalidSegment {
                document: self.document.to_string(),
                parent: prefix.join("."),
                segment: segment.to_string(),
            })
        }
    }

    fn invalid(&self, path: &[String], value: &Value) -> LoadError {
        LoadError::InvalidValue {
            document: self.document.to_string(),
            path: path.join("."),
            found: json_kind(value).to_string(),
        }
    }
}

fn is_leaf(object: &Map<String, Value>) -> bool {
    VALUE_KEYS.iter().any(|key| object.contains_key(*key))
}

/// `type` and `description` strings on a group describe the group itself
fn is_group_metadata(key: &str, value: &Value) -> bool {
    value.is_string() && (TYPE_KEYS.contains(&key) || DESCRIPTION_KEYS.contains(&key))
}

fn string_member<'a>(object: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a str> {
    keys.iter().find_map(|key| object.get(*key).and_then(Value::as_str))
}

fn literal(value: &Value) -> Option<TokenValue> {
    match value {
        Value::String(text) => Some(TokenValue::Text(text.clone())),
        Value::Number(number) => Some(TokenValue::Number(number.to_string())),
        _ => None,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(name: &str, source: &str) -> TokenDocument {
        TokenDocument::new(name, source)
    }

    #[test]
    fn test_load_leaf_metadata() {
        let graph = load_documents(&[doc(
            "base.json",
            r##"{
                "base": {
                    "white": { "value": "#ffffff", "type": "color", "description": "Pure white" }
                }
            }"##,
        )])
        .unwrap();

        let white = graph.lookup("base.white").unwrap();
        assert_eq!(white.value().map(|v| v.as_str()), Some("#ffffff"));
        assert_eq!(white.token_type, Some(TokenType::Color));
        assert_eq!(white.description.as_deref(), Some("Pure white"));
        assert_eq!(white.source, "base.json");
    }

    #[test]
    fn test_dollar_prefixed_keys() {
        let graph = load_documents(&[doc(
            "a",
            r#"{ "motion": { "fast": { "$value": "120ms", "$type": "duration" } } }"#,
        )])
        .unwrap();

        let fast = graph.lookup("motion.fast").unwrap();
        assert_eq!(fast.token_type, Some(TokenType::Duration));
    }

    #[test]
    fn test_group_type_is_inherited() {
        let graph = load_documents(&[doc(
            "a",
            r#"{ "base": { "spacing": { "type": "dimension", "sm": "4px", "md": { "value": 8 } } } }"#,
        )])
        .unwrap();

        let sm = graph.lookup("base.spacing.sm").unwrap();
        assert_eq!(sm.token_type, Some(TokenType::Dimension));
        assert_eq!(sm.value().map(|v| v.as_str()), Some("4px"));

        let md = graph.lookup("base.spacing.md").unwrap();
        assert_eq!(md.value(), Some(&TokenValue::Number("8".to_string())));
        assert!(graph.lookup("base.spacing.type").is_none());
    }

    #[test]
    fn test_groups_merge_across_documents() {
        let graph = load_documents(&[
            doc("colors", r##"{ "base": { "white": "#fff" } }"##),
            doc("spacing", r#"{ "base": { "sm": "4px" } }"#),
        ])
        .unwrap();

        let base = graph.lookup("base").unwrap();
        assert_eq!(base.children().len(), 2);
        assert_eq!(graph.roots().len(), 1);
    }

    #[test]
    fn test_duplicate_token_across_documents() {
        let err = load_documents(&[
            doc("a.json", r##"{ "base": { "white": "#fff" } }"##),
            doc("b.json", r##"{ "base": { "white": "#fefefe" } }"##),
        ])
        .unwrap_err();

        assert_eq!(
            err,
            LoadError::DuplicateToken {
                path: "base.white".to_string(),
                first: "a.json".to_string(),
                second: "b.json".to_string(),
            }
        );
    }

    #[test]
    fn test_duplicate_is_order_independent() {
        let a = doc("a", r##"{ "base": { "white": "#fff" } }"##);
        let b = doc("b", r##"{ "base": { "white": { "shade": "#eee" } } }"##);

        assert!(load_documents(&[a.clone(), b.clone()]).is_err());
        assert!(load_documents(&[b, a]).is_err());
    }

    #[test]
    fn test_malformed_document_names_document() {
        let err = load_documents(&[doc("broken.json", r##"{ "base": "#fff", }"##)]).unwrap_err();
        match err {
            LoadError::Malformed { document, line, .. } => {
                assert_eq!(document, "broken.json");
                assert_eq!(line, 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_root_must_be_object() {
        let err = load_documents(&[doc("list.json", "[1, 2]")]).unwrap_err();
        assert!(matches!(err, LoadError::NotAnObject { .. }));
    }

    #[test]
    fn test_invalid_values() {
        let err = load_documents(&[doc("a", r#"{ "flag": { "value": true } }"#)]).unwrap_err();
        assert!(matches!(err, LoadError::InvalidValue { ref path, .. } if path == "flag"));

        let err = load_documents(&[doc("a", r#"{ "list": [1] }"#)]).unwrap_err();
        assert!(matches!(err, LoadError::InvalidValue { ref found, .. } if found == "an array"));
    }

    #[test]
    fn test_leaf_with_nested_member() {
        let err = load_documents(&[doc(
            "buttons.json",
            r##"{ "btn": { "value": "#fff", "hover": { "value": "#eee" } } }"##,
        )])
        .unwrap_err();

        assert_eq!(
            err,
            LoadError::LeafWithChildren {
                document: "buttons.json".to_string(),
                path: "btn".to_string(),
                child: "hover".to_string(),
            }
        );
    }

    #[test]
    fn test_leaf_extension_objects_are_ignored() {
        let graph = load_documents(&[doc(
            "a",
            r##"{ "btn": { "value": "#fff", "$extensions": { "tool": { "id": 1 } } } }"##,
        )])
        .unwrap();

        assert!(graph.lookup("btn").unwrap().is_leaf());
    }

    #[test]
    fn test_invalid_segment() {
        let err = load_documents(&[doc("a", r#"{ "base": { "a.b": "1px" } }"#)]).unwrap_err();
        assert!(matches!(err, LoadError::InvalidSegment { ref segment, .. } if segment == "a.b"));
    }

    #[test]
    fn test_preserves_document_order() {
        let graph = load_documents(&[doc(
            "a",
            r#"{ "z": "1", "a": "2", "m": "3" }"#,
        )])
        .unwrap();

        let names: Vec<_> = graph.leaves().map(|(_, n)| n.name()).collect();
        assert_eq!(names, vec!["z", "a", "m"]);
    }
}
