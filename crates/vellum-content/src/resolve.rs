//! Link resolution against the response `includes` payload.
//!
//! The delivery API returns linked entries and assets out of line, in
//! `includes.Entry` and `includes.Asset`, with link stubs
//! (`sys.type == "Link"`) in item fields. Resolution substitutes the
//! included payloads in place of the stubs so typed deserialization sees
//! whole entries; stubs whose target is missing from `includes` become
//! `null`, which typed optional fields read as `None`.

use std::collections::HashMap;

use serde_json::Value;

/// Cycle guard; linked entries can reference each other.
const MAX_DEPTH: u32 = 10;

/// Resolve link stubs in a raw delivery response.
///
/// Returns the response with every resolvable stub replaced by its
/// included payload (recursively, to a bounded depth) and every
/// unresolvable stub replaced by `null`. Stubs left in place by the depth
/// guard keep their `sys.id`.
#[must_use]
pub fn resolve_links(response: &Value) -> Value {
    let entries = include_map(response, "Entry");
    let assets = include_map(response, "Asset");

    let mut resolved = response.clone();
    if let Some(items) = resolved.get_mut("items").and_then(Value::as_array_mut) {
        for item in items {
            *item = resolve_value(item, &entries, &assets, MAX_DEPTH);
        }
    }
    resolved
}

fn include_map<'a>(response: &'a Value, kind: &str) -> HashMap<&'a str, &'a Value> {
    response
        .pointer(&format!("/includes/{kind}"))
        .and_then(Value::as_array)
        .map(|included| {
            included
                .iter()
                .filter_map(|value| {
                    let id = value.pointer("/sys/id")?.as_str()?;
                    Some((id, value))
                })
                .collect()
        })
        .unwrap_or_default()
}

fn resolve_value(
    value: &Value,
    entries: &HashMap<&str, &Value>,
    assets: &HashMap<&str, &Value>,
    depth: u32,
) -> Value {
    match value {
        Value::Object(map) => {
            if let Some(link_type) = link_type(value) {
                if depth == 0 {
                    return value.clone();
                }
                let id = value.pointer("/sys/id").and_then(Value::as_str);
                let target = match (link_type, id) {
                    ("Entry", Some(id)) => entries.get(id),
                    ("Asset", Some(id)) => assets.get(id),
                    // Links to other kinds (content types etc.) pass through.
                    _ => return value.clone(),
                };
                return match target {
                    Some(target) => resolve_value(target, entries, assets, depth - 1),
                    None => Value::Null,
                };
            }
            Value::Object(
                map.iter()
                    .map(|(key, nested)| {
                        (key.clone(), resolve_value(nested, entries, assets, depth))
                    })
                    .collect(),
            )
        }
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| resolve_value(item, entries, assets, depth))
                .collect(),
        ),
        _ => value.clone(),
    }
}

/// The stub's `sys.linkType` when `value` is a link stub.
fn link_type(value: &Value) -> Option<&str> {
    if value.pointer("/sys/type")?.as_str()? != "Link" {
        return None;
    }
    value.pointer("/sys/linkType")?.as_str()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn entry_link(id: &str) -> Value {
        json!({"sys": {"type": "Link", "linkType": "Entry", "id": id}})
    }

    #[test]
    fn test_resolves_entry_link_from_includes() {
        let response = json!({
            "total": 1,
            "items": [{
                "sys": {"id": "a1"},
                "fields": {"title": "Post", "category": entry_link("cat1")},
            }],
            "includes": {"Entry": [{
                "sys": {"id": "cat1"},
                "fields": {"name": "Rust", "slug": "rust"},
            }]},
        });

        let resolved = resolve_links(&response);
        assert_eq!(
            resolved.pointer("/items/0/fields/category/fields/slug"),
            Some(&json!("rust"))
        );
    }

    #[test]
    fn test_unresolvable_link_becomes_null() {
        let response = json!({
            "total": 1,
            "items": [{
                "sys": {"id": "a1"},
                "fields": {"title": "Post", "thumbnail": {
                    "sys": {"type": "Link", "linkType": "Asset", "id": "gone"},
                }},
            }],
        });

        let resolved = resolve_links(&response);
        assert_eq!(
            resolved.pointer("/items/0/fields/thumbnail"),
            Some(&Value::Null)
        );
    }

    #[test]
    fn test_nested_links_resolve_recursively() {
        let response = json!({
            "total": 1,
            "items": [{
                "sys": {"id": "a1"},
                "fields": {"related": entry_link("b1")},
            }],
            "includes": {"Entry": [{
                "sys": {"id": "b1"},
                "fields": {"slug": "other", "category": entry_link("cat1")},
            }, {
                "sys": {"id": "cat1"},
                "fields": {"name": "Rust", "slug": "rust"},
            }]},
        });

        let resolved = resolve_links(&response);
        assert_eq!(
            resolved.pointer("/items/0/fields/related/fields/category/fields/name"),
            Some(&json!("Rust"))
        );
    }

    #[test]
    fn test_cyclic_links_keep_stub_at_depth_limit() {
        let response = json!({
            "total": 1,
            "items": [{"sys": {"id": "a1"}, "fields": {"next": entry_link("a1")}}],
            "includes": {"Entry": [{
                "sys": {"id": "a1"},
                "fields": {"next": entry_link("a1")},
            }]},
        });

        let resolved = resolve_links(&response);
        // The walk terminates and the innermost stub keeps its id.
        let mut cursor = resolved.pointer("/items/0").unwrap();
        for _ in 0..MAX_DEPTH {
            cursor = cursor.pointer("/fields/next").unwrap();
        }
        assert_eq!(cursor.pointer("/sys/id"), Some(&json!("a1")));
    }

    #[test]
    fn test_content_type_links_pass_through() {
        let response = json!({
            "total": 1,
            "items": [{
                "sys": {
                    "id": "a1",
                    "contentType": {"sys": {"type": "Link", "linkType": "ContentType", "id": "article"}},
                },
                "fields": {},
            }],
        });

        let resolved = resolve_links(&response);
        assert_eq!(
            resolved.pointer("/items/0/sys/contentType/sys/id"),
            Some(&json!("article"))
        );
    }
}
