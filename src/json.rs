//! Cycle-tolerant JSON serialization of shared value graphs.
//!
//! [`Node`] is a JSON-shaped value whose composites (arrays and objects)
//! live behind shared handles, so a caller can build graphs where one
//! composite appears in several places, including inside itself.
//! [`safe_stringify`] always produces a well-formed document for such a
//! graph by dropping the edges that would close a cycle.
//!
//! # Cycle rule
//!
//! Serialization is depth-first and tracks the identities of the
//! composites on the current path (the ancestors of the value being
//! written). Identity is the address of the shared allocation, never
//! structural equality. An edge back to a composite on the path is
//! dropped:
//!
//! - an object member pointing at an ancestor is omitted entirely;
//! - an array element pointing at an ancestor is written as `null`, the
//!   hole a dropped slot leaves so later indices keep their positions.
//!
//! A composite leaves the path once it has been written, so a sub-graph
//! shared by two siblings (a DAG, not a cycle) is written out in full at
//! both sites.
//!
//! Very deep acyclic nesting recurses once per level and is bounded by the
//! thread's stack like any recursive serializer.

use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use serde_json::{Map, Number, Value};

use crate::error::{Result, UtilError};

/// Shared, mutable handle used for composite nodes.
pub type Shared<T> = Rc<RefCell<T>>;

/// A JSON-shaped value with shared composites.
///
/// Cloning a `Node` clones the handle, not the contents: the clone and the
/// original are the same composite for cycle detection.
#[derive(Clone)]
pub enum Node {
    Null,
    Bool(bool),
    Integer(i64),
    /// Integers above `i64::MAX`.
    Unsigned(u64),
    /// Non-finite floats serialize as `null`.
    Float(f64),
    String(String),
    Array(Shared<Vec<Node>>),
    /// Members in insertion order; keys are unique.
    Object(Shared<Vec<(String, Node)>>),
}

impl Node {
    /// Creates a new array composite.
    pub fn array(items: impl IntoIterator<Item = Node>) -> Self {
        Node::Array(Rc::new(RefCell::new(items.into_iter().collect())))
    }

    /// Creates a new object composite. Later duplicate keys replace
    /// earlier ones in place.
    pub fn object<K: Into<String>>(members: impl IntoIterator<Item = (K, Node)>) -> Self {
        let mut entries = Vec::new();
        for (key, value) in members {
            upsert(&mut entries, key.into(), value);
        }
        Node::Object(Rc::new(RefCell::new(entries)))
    }

    /// Appends `item` to an array node.
    ///
    /// # Errors
    /// `InvalidArgument` if `self` is not an array.
    pub fn push(&self, item: Node) -> Result<()> {
        match self {
            Node::Array(items) => {
                items.borrow_mut().push(item);
                Ok(())
            }
            other => Err(UtilError::invalid(
                "Node::push",
                format!("expected an array, found {}", other.kind()),
            )),
        }
    }

    /// Sets `key` on an object node, replacing any existing member.
    ///
    /// # Errors
    /// `InvalidArgument` if `self` is not an object.
    pub fn insert(&self, key: impl Into<String>, value: Node) -> Result<()> {
        match self {
            Node::Object(members) => {
                upsert(&mut members.borrow_mut(), key.into(), value);
                Ok(())
            }
            other => Err(UtilError::invalid(
                "Node::insert",
                format!("expected an object, found {}", other.kind()),
            )),
        }
    }

    /// Returns true if both nodes are the same composite.
    ///
    /// Scalars never share identity.
    pub fn ptr_eq(&self, other: &Node) -> bool {
        match (self.identity(), other.identity()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    fn identity(&self) -> Option<usize> {
        match self {
            Node::Array(items) => Some(Rc::as_ptr(items) as *const () as usize),
            Node::Object(members) => Some(Rc::as_ptr(members) as *const () as usize),
            _ => None,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Node::Null => "null",
            Node::Bool(_) => "bool",
            Node::Integer(_) | Node::Unsigned(_) => "integer",
            Node::Float(_) => "float",
            Node::String(_) => "string",
            Node::Array(_) => "array",
            Node::Object(_) => "object",
        }
    }
}

fn upsert(entries: &mut Vec<(String, Node)>, key: String, value: Node) {
    match entries.iter_mut().find(|(k, _)| *k == key) {
        Some(slot) => slot.1 = value,
        None => entries.push((key, value)),
    }
}

// Shallow: a derived Debug would recurse forever on cyclic graphs.
impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Null => f.write_str("Null"),
            Node::Bool(b) => write!(f, "Bool({b})"),
            Node::Integer(i) => write!(f, "Integer({i})"),
            Node::Unsigned(u) => write!(f, "Unsigned({u})"),
            Node::Float(x) => write!(f, "Float({x})"),
            Node::String(s) => write!(f, "String({s:?})"),
            Node::Array(items) => match items.try_borrow() {
                Ok(items) => write!(f, "Array(len={})", items.len()),
                Err(_) => f.write_str("Array(<borrowed>)"),
            },
            Node::Object(members) => match members.try_borrow() {
                Ok(members) => {
                    let keys: Vec<&str> = members.iter().map(|(k, _)| k.as_str()).collect();
                    write!(f, "Object(keys={keys:?})")
                }
                Err(_) => f.write_str("Object(<borrowed>)"),
            },
        }
    }
}

impl From<bool> for Node {
    fn from(b: bool) -> Self {
        Node::Bool(b)
    }
}

impl From<i64> for Node {
    fn from(i: i64) -> Self {
        Node::Integer(i)
    }
}

impl From<i32> for Node {
    fn from(i: i32) -> Self {
        Node::Integer(i64::from(i))
    }
}

impl From<u64> for Node {
    fn from(u: u64) -> Self {
        i64::try_from(u).map_or(Node::Unsigned(u), Node::Integer)
    }
}

impl From<f64> for Node {
    fn from(x: f64) -> Self {
        Node::Float(x)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::String(s.to_owned())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::String(s)
    }
}

impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Node::Null, Into::into)
    }
}

/// Converts a plain JSON tree into fresh, unshared composites.
impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Node::Null,
            Value::Bool(b) => Node::Bool(b),
            Value::Number(n) => match (n.as_i64(), n.as_u64()) {
                (Some(i), _) => Node::Integer(i),
                (None, Some(u)) => Node::Unsigned(u),
                (None, None) => n.as_f64().map_or(Node::Null, Node::Float),
            },
            Value::String(s) => Node::String(s),
            Value::Array(items) => Node::array(items.into_iter().map(Node::from)),
            Value::Object(members) => Node::object(members.into_iter().map(|(k, v)| (k, Node::from(v)))),
        }
    }
}

/// Serializes `node` to compact JSON text, dropping cyclic edges.
///
/// Never fails and always terminates, whatever the shape of the graph.
///
/// # Examples
/// ```
/// use u_toolkit::json::{safe_stringify, Node};
///
/// let obj = Node::object([("name", Node::from("root"))]);
/// obj.insert("self", obj.clone()).unwrap();
/// assert_eq!(safe_stringify(&obj), r#"{"name":"root"}"#);
/// ```
pub fn safe_stringify(node: &Node) -> String {
    safe_to_value(node).to_string()
}

/// Converts `node` to a `serde_json::Value` tree, dropping cyclic edges.
///
/// This is the document [`safe_stringify`] renders; use it to embed the
/// result in a larger `serde_json` structure or to pretty-print it.
pub fn safe_to_value(node: &Node) -> Value {
    let mut path = HashSet::new();
    // The root has no ancestors, so it can never be a back edge.
    visit(node, &mut path).unwrap_or(Value::Null)
}

/// Returns `None` when `node` is a composite already on `path`.
fn visit(node: &Node, path: &mut HashSet<usize>) -> Option<Value> {
    let value = match node {
        Node::Null => Value::Null,
        Node::Bool(b) => Value::Bool(*b),
        Node::Integer(i) => Value::Number(Number::from(*i)),
        Node::Unsigned(u) => Value::Number(Number::from(*u)),
        Node::Float(x) => Number::from_f64(*x).map_or(Value::Null, Value::Number),
        Node::String(s) => Value::String(s.clone()),
        Node::Array(items) => {
            let id = enter(node, path)?;
            let out = items
                .borrow()
                .iter()
                .map(|item| visit(item, path).unwrap_or(Value::Null))
                .collect();
            path.remove(&id);
            Value::Array(out)
        }
        Node::Object(members) => {
            let id = enter(node, path)?;
            let mut out = Map::new();
            for (key, member) in members.borrow().iter() {
                match visit(member, path) {
                    Some(v) => {
                        out.insert(key.clone(), v);
                    }
                    None => tracing::trace!(key = %key, "dropped cyclic object member"),
                }
            }
            path.remove(&id);
            Value::Object(out)
        }
    };
    Some(value)
}

fn enter(node: &Node, path: &mut HashSet<usize>) -> Option<usize> {
    let id = node.identity()?;
    if path.insert(id) {
        Some(id)
    } else {
        tracing::trace!(kind = node.kind(), "cyclic reference dropped");
        None
    }
}

// ============================================================================
// Tests
// ============================================================================


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn json_tree() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(Value::from),
            any::<u64>().prop_map(Value::from),
            (-1e9_f64..1e9).prop_map(Value::from),
            "[a-z]{0,8}".prop_map(Value::from),
        ];
        leaf.prop_recursive(4, 64, 6, |inner| {
            prop_oneof![
                proptest::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
                proptest::collection::btree_map("[a-z]{1,4}", inner, 0..6)
                    .prop_map(|m| Value::Object(m.into_iter().collect())),
            ]
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn acyclic_trees_serialize_unchanged(value in json_tree()) {
            let node = Node::from(value.clone());
            prop_assert_eq!(safe_to_value(&node), value);
        }

        #[test]
        fn wrapping_in_a_cycle_keeps_output_parseable(value in json_tree()) {
            let root = Node::object([("payload", Node::from(value.clone()))]);
            root.insert("again", root.clone()).unwrap();
            let text = safe_stringify(&root);
            let parsed: Value = serde_json::from_str(&text).unwrap();
            prop_assert_eq!(parsed, serde_json::json!({ "payload": value }));
        }
    }
}
