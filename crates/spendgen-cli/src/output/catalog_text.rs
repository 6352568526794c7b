use std::io;

use serde_json::Value;

use super::format::{Align, Column, key_value_rows, render_table};

pub fn render_catalog(data: &Value) -> io::Result<String> {
    let categories = data
        .get("categories")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    if categories.is_empty() {
        return Err(io::Error::other("catalog output requires categories"));
    }

    let matched = data.get("matched").and_then(Value::as_u64).unwrap_or(0);
    let fallback = data.get("fallback").and_then(Value::as_u64).unwrap_or(0);

    let source = match data.get("icon_source").and_then(Value::as_str) {
        Some(path) => {
            let hint_keys = data
                .get("icon_hint_keys")
                .and_then(Value::as_u64)
                .unwrap_or(0);
            format!("{path} ({hint_keys} hint keys)")
        }
        None => "none (all icons synthesized)".to_string(),
    };

    let summary = [
        ("Icon source:", source),
        ("Matched icons:", matched.to_string()),
        ("Fallback icons:", fallback.to_string()),
    ];

    let columns = [
        Column {
            name: "id",
            align: Align::Right,
        },
        Column {
            name: "name",
            align: Align::Left,
        },
        Column {
            name: "icon_name",
            align: Align::Left,
        },
        Column {
            name: "icon_code",
            align: Align::Right,
        },
    ];
    let rows = categories
        .iter()
        .map(|category| {
            vec![
                category.get("id").and_then(Value::as_u64).unwrap_or(0).to_string(),
                category
                    .get("name")
                    .and_then(Value::as_str)
                    .unwrap_or("?")
                    .to_string(),
                category
                    .get("icon_name")
                    .and_then(Value::as_str)
                    .unwrap_or("?")
                    .to_string(),
                category
                    .get("icon_code")
                    .and_then(Value::as_u64)
                    .unwrap_or(0)
                    .to_string(),
            ]
        })
        .collect::<Vec<Vec<String>>>();

    let mut lines = vec![format!("Category catalog ({} categories)", categories.len())];
    lines.push(String::new());
    lines.extend(key_value_rows(&summary, 2));
    lines.push(String::new());
    lines.extend(render_table(&columns, &rows));

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::render_catalog;

    #[test]
    fn renders_summary_and_category_rows() {
        let rendered = render_catalog(&json!({
            "icon_source": "icon_categories.dart",
            "icon_hint_keys": 4,
            "matched": 12,
            "fallback": 104,
            "categories": [
                { "id": 50, "name": "Groceries", "icon_name": "Icons.local_grocery_store", "icon_code": 58261 },
            ],
        }));
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.starts_with("Category catalog (1 categories)"));
            assert!(text.contains("icon_categories.dart (4 hint keys)"));
            assert!(text.contains("Matched icons:"));
            assert!(text.contains("Icons.local_grocery_store"));
        }
    }

    #[test]
    fn no_source_is_labelled_synthesized() {
        let rendered = render_catalog(&json!({
            "matched": 0,
            "fallback": 116,
            "categories": [
                { "id": 1, "name": "Mortgage/Rent", "icon_name": "Icons.default_mortgage_rent", "icon_code": 58000 },
            ],
        }));
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.contains("none (all icons synthesized)"));
        }
    }

    #[test]
    fn empty_catalog_is_an_error() {
        let rendered = render_catalog(&json!({ "categories": [] }));
        assert!(rendered.is_err());
    }
}
