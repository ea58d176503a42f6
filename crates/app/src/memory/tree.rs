//! Path addressing over a JSON document tree.
//!
//! The tree never stores `null` or empty objects: writing either removes the
//! node, and parents left empty are removed with it.

use serde_json::{Map, Value};

use crate::paths::DataPath;

pub(crate) fn get<'a>(root: &'a Value, path: &DataPath) -> Option<&'a Value> {
    path.segments()
        .iter()
        .try_fold(root, |node, segment| node.get(segment.as_str()))
        .filter(|value| !is_empty(value))
}

pub(crate) fn set(root: &mut Value, path: &DataPath, value: Value) {
    set_at(root, path.segments(), prune(value));
}

fn set_at(node: &mut Value, segments: &[String], value: Value) {
    let Some((first, rest)) = segments.split_first() else {
        *node = value;
        return;
    };

    if !node.is_object() {
        if is_empty(&value) {
            return;
        }

        *node = Value::Object(Map::new());
    }

    let Value::Object(children) = node else {
        return;
    };

    let emptied = {
        let child = children.entry(first.clone()).or_insert(Value::Null);
        set_at(child, rest, value);
        is_empty(child)
    };

    if emptied {
        children.remove(first);
    }

    if children.is_empty() {
        *node = Value::Null;
    }
}

fn prune(value: Value) -> Value {
    match value {
        Value::Object(children) => {
            let children: Map<String, Value> = children
                .into_iter()
                .map(|(key, child)| (key, prune(child)))
                .filter(|(_, child)| !is_empty(child))
                .collect();

            if children.is_empty() {
                Value::Null
            } else {
                Value::Object(children)
            }
        }
        other => other,
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(children) => children.is_empty(),
        _ => false,
    }
}
