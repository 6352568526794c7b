use std::io;

use serde_json::Value;

use super::format::{Align, Column, render_table};

pub fn render_series(data: &Value) -> io::Result<String> {
    let out_dir = data
        .get("out_dir")
        .and_then(Value::as_str)
        .ok_or_else(|| io::Error::other("series output requires out_dir"))?;
    let files = data
        .get("files")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();

    let columns = [
        Column {
            name: "file",
            align: Align::Left,
        },
        Column {
            name: "shape",
            align: Align::Left,
        },
        Column {
            name: "records",
            align: Align::Right,
        },
    ];
    let rows = files
        .iter()
        .map(|file| {
            vec![
                file.get("file").and_then(Value::as_str).unwrap_or("?").to_string(),
                file.get("shape").and_then(Value::as_str).unwrap_or("?").to_string(),
                file.get("records")
                    .and_then(Value::as_u64)
                    .unwrap_or(0)
                    .to_string(),
            ]
        })
        .collect::<Vec<Vec<String>>>();

    let mut lines = vec![
        format!("Wrote {} series files to {out_dir}", files.len()),
        String::new(),
    ];
    lines.extend(render_table(&columns, &rows));

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::render_series;

    #[test]
    fn renders_one_row_per_series_file() {
        let rendered = render_series(&json!({
            "out_dir": "./data",
            "files": [
                { "file": "uptrend_linear.json", "shape": "uptrend_linear", "records": 60 },
                { "file": "outliers_spike.json", "shape": "outliers_spike", "records": 60 },
            ],
        }));
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            assert!(text.starts_with("Wrote 2 series files to ./data"));
            assert!(text.contains("uptrend_linear.json"));
            assert!(text.contains("outliers_spike.json"));
            assert!(text.contains("60"));
        }
    }

    #[test]
    fn missing_out_dir_is_an_error() {
        let rendered = render_series(&json!({ "files": [] }));
        assert!(rendered.is_err());
    }
}
