use std::io;

use serde_json::Value;

use super::format::key_value_rows;

pub fn render_dataset(data: &Value) -> io::Result<String> {
    let out_path = data
        .get("out_path")
        .and_then(Value::as_str)
        .ok_or_else(|| io::Error::other("dataset output requires out_path"))?;
    let expense_count = data.get("expense_count").and_then(Value::as_u64).unwrap_or(0);
    let category_count = data
        .get("category_count")
        .and_then(Value::as_u64)
        .unwrap_or(0);

    let start_date = data.get("start_date").and_then(Value::as_str).unwrap_or("?");
    let end_date = data.get("end_date").and_then(Value::as_str).unwrap_or("?");
    let days = data.get("days").and_then(Value::as_u64).unwrap_or(0);

    let seed = match data.get("seed").and_then(Value::as_u64) {
        Some(value) => format!("{value} (rerun with --seed {value} for identical output)"),
        None => "none (fresh dataset each run)".to_string(),
    };

    let mut details = vec![
        ("Window:", format!("{start_date} to {end_date} ({days} days)")),
        ("Seed:", seed),
    ];

    if let Some(source) = data.get("icon_source").and_then(Value::as_str) {
        let hint_keys = data
            .get("icon_hint_keys")
            .and_then(Value::as_u64)
            .unwrap_or(0);
        details.push(("Icon hints:", format!("{hint_keys} keys from {source}")));
    }

    let mut lines = vec![
        format!("Wrote {expense_count} expenses and {category_count} categories to {out_path}"),
        String::new(),
    ];
    lines.extend(key_value_rows(&details, 2));

    Ok(lines.join("\n"))
}
