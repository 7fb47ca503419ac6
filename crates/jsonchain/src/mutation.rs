//! Path-addressed writes into a value tree.
//!
//! [`set_at`] is the single write primitive every builder assignment ends in.
//! It walks the path from the root, creating or replacing containers so that
//! each step is possible, and then stores the value at the final location.

use alloc::vec::Vec;
use core::mem;

use tracing::debug;

use crate::{
    path::{ContainerKind, Path, Token},
    value::{Map, Value},
};

/// Stores `value` at `path` inside `root`, replacing whatever was there.
///
/// Intermediate nodes are shaped by the token that steps through them:
///
/// - a key token needs an object; any other node is replaced by `{}`;
/// - an index token needs an array, or tolerates an existing object (the
///   token is then used as a key); scalars and `null` are replaced by `[]`;
/// - an array is padded with `null` up to the addressed index;
/// - `-` on an array appends a fresh element.
///
/// Replaced nodes are dropped. Their contents cannot be recovered.
pub fn set_at(root: &mut Value, path: &Path, value: Value) {
    let slot = path.tokens().iter().fold(root, step);
    *slot = value;
}

fn step<'a>(node: &'a mut Value, token: &Token) -> &'a mut Value {
    let append = token.is_append() && node.is_array();
    if !append {
        shape(node, token);
    }

    match node {
        Value::Array(arr) => {
            // Arrays only survive `shape` for tokens that carry an index.
            let index = if append {
                arr.len()
            } else {
                token.index().unwrap_or(arr.len())
            };
            if let Some(len) = index.checked_add(1).filter(|&len| len > arr.len()) {
                arr.resize(len, Value::Null);
            }
            &mut arr[index]
        }
        Value::Object(map) => map.entry(token.key().into()).or_insert(Value::Null),
        _ => unreachable!("node was just made a container"),
    }
}

fn shape(node: &mut Value, token: &Token) {
    match ContainerKind::for_token(token) {
        ContainerKind::Object if !node.is_object() => {
            replace(node, Value::Object(Map::new()), token);
        }
        ContainerKind::Array if !node.is_array() && !node.is_object() => {
            replace(node, Value::Array(Vec::new()), token);
        }
        _ => {}
    }
}

fn replace(node: &mut Value, container: Value, token: &Token) {
    let old = mem::replace(node, container);
    if !old.is_null() {
        debug!(
            discarded = old.kind_name(),
            created = node.kind_name(),
            token = token.key(),
            "replaced incompatible node"
        );
    }
}

#[cfg(test)]
mod tests {
    use alloc::{string::ToString, vec};

    use rstest::rstest;

    use super::*;

    fn set(root: &mut Value, pointer: &str, value: impl Into<Value>) {
        set_at(root, &Path::parse(pointer).unwrap(), value.into());
    }

    #[test]
    fn empty_path_replaces_root() {
        let mut root = Value::from(1);
        set(&mut root, "", "x");
        assert_eq!(root, Value::from("x"));
    }

    #[rstest]
    #[case("/a", r#"{"a":1}"#)]
    #[case("/a/b", r#"{"a":{"b":1}}"#)]
    #[case("/a/0", r#"{"a":[1]}"#)]
    #[case("/a/2", r#"{"a":[null,null,1]}"#)]
    #[case("/0", "[1]")]
    #[case("/a/0/b", r#"{"a":[{"b":1}]}"#)]
    #[case("/a/01", r#"{"a":{"01":1}}"#)]
    #[case("/a~1b", r#"{"a/b":1}"#)]
    #[case("/", r#"{"":1}"#)]
    fn creates_missing_containers(#[case] pointer: &str, #[case] expected: &str) {
        let mut root = Value::Null;
        set(&mut root, pointer, 1);
        assert_eq!(root.to_string(), expected);
    }

    #[test]
    fn scalar_parent_becomes_object() {
        let mut root = Value::Null;
        set(&mut root, "/A", 5);
        set(&mut root, "/A/B", "x");
        assert_eq!(root.to_string(), r#"{"A":{"B":"x"}}"#);
    }

    #[test]
    fn array_parent_becomes_object_for_key_token() {
        let mut root = Value::Null;
        set(&mut root, "/A/0", 1);
        set(&mut root, "/A/k", 2);
        assert_eq!(root.to_string(), r#"{"A":{"k":2}}"#);
    }

    #[test]
    fn index_token_on_object_is_a_key() {
        let mut root = Value::Null;
        set(&mut root, "/A/k", 1);
        set(&mut root, "/A/0", 2);
        assert_eq!(root.to_string(), r#"{"A":{"0":2,"k":1}}"#);
    }

    #[test]
    fn writes_inside_existing_array_keep_neighbours() {
        let mut root = Value::Null;
        set(&mut root, "/L/0", "a");
        set(&mut root, "/L/1", "b");
        set(&mut root, "/L/0", "z");
        assert_eq!(root.to_string(), r#"{"L":["z","b"]}"#);
    }

    #[test]
    fn append_token_pushes_onto_array() {
        let mut root = Value::Null;
        set(&mut root, "/L/0", 1);
        set(&mut root, "/L/-", 2);
        set(&mut root, "/L/-/x", 3);
        assert_eq!(root.to_string(), r#"{"L":[1,2,{"x":3}]}"#);
    }

    #[test]
    fn append_token_without_array_is_a_key() {
        let mut root = Value::Null;
        set(&mut root, "/L/-", 1);
        assert_eq!(root.to_string(), r#"{"L":{"-":1}}"#);
    }

    #[test]
    fn last_write_wins_for_keys() {
        let mut root = Value::Null;
        set(&mut root, "/k", 1);
        set(&mut root, "/k", vec![Value::from(true)]);
        assert_eq!(root.to_string(), r#"{"k":[true]}"#);
    }

    #[rstest]
    #[case("/a/4294967295")]
    #[case("/a/4294967296")]
    #[case("/a/18446744073709551615")]
    fn out_of_range_index_is_a_key(#[case] pointer: &str) {
        let mut root = Value::Null;
        set(&mut root, pointer, 1);
        let key = pointer.trim_start_matches("/a/");
        let mut expected = Map::new();
        expected.insert(key.to_string(), Value::from(1));
        assert_eq!(root.pointer("/a"), Some(&Value::Object(expected)));
    }

    #[test]
    fn out_of_range_index_under_array_replaces_it() {
        let mut root = Value::Null;
        set(&mut root, "/a/0", 1);
        set(&mut root, "/a/18446744073709551615", 2);
        assert_eq!(root.to_string(), r#"{"a":{"18446744073709551615":2}}"#);
    }

    #[quickcheck_macros::quickcheck]
    fn index_write_pads_with_nulls(index: u8) -> bool {
        let index = usize::from(index);
        let mut root = Value::Null;
        set(&mut root, &alloc::format!("/a/{index}"), true);
        let Some(Value::Array(arr)) = root.pointer("/a") else {
            return false;
        };
        arr.len() == index + 1
            && arr[..index].iter().all(Value::is_null)
            && arr[index] == Value::from(true)
    }
}
