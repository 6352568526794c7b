use std::io;

use serde::Serialize;
use serde_json::{Value, json};
use spendgen_core::{CoreError, SuccessEnvelope};

const JSON_VERSION: &str = "v1";

pub fn render_success_json(success: &SuccessEnvelope) -> io::Result<String> {
    let value = match success.command.as_str() {
        "dataset" | "series" | "catalog" => json!({
            "ok": true,
            "version": JSON_VERSION,
            "data": success.data.clone(),
        }),
        _ => {
            return Err(io::Error::other(format!(
                "JSON output is not supported for command `{}`",
                success.command
            )));
        }
    };

    serialize_json_pretty(&value)
}

pub fn render_error_json(error: &CoreError) -> io::Result<String> {
    let payload = json!({
        "error": {
            "code": error.code,
            "message": error.message,
            "recovery_steps": error.recovery_steps,
        }
    });
    serialize_json_pretty(&payload)
}

fn serialize_json_pretty<T>(value: &T) -> io::Result<String>
where
    T: Serialize,
{
    serde_json::to_string_pretty(value).map_err(io::Error::other)
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};
    use spendgen_core::SuccessEnvelope;

    use super::{render_error_json, render_success_json};

    fn success(command: &str, data: Value) -> SuccessEnvelope {
        SuccessEnvelope {
            ok: true,
            command: command.to_string(),
            version: "0.1.0".to_string(),
            data,
        }
    }

    #[test]
    fn dataset_json_uses_versioned_envelope() {
        let payload = success(
            "dataset",
            json!({ "out_path": "expenses.json", "expense_count": 73 }),
        );

        let rendered = render_success_json(&payload);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            let parsed: Result<Value, _> = serde_json::from_str(&text);
            assert!(parsed.is_ok());
            if let Ok(value) = parsed {
                assert_eq!(value["ok"], Value::Bool(true));
                assert_eq!(value["version"], Value::String("v1".to_string()));
                assert_eq!(value["data"]["expense_count"], json!(73));
            }
        }
    }

    #[test]
    fn unknown_command_is_rejected() {
        let payload = success("mystery", json!({}));
        assert!(render_success_json(&payload).is_err());
    }

    #[test]
    fn runtime_error_json_uses_universal_shape() {
        let error = spendgen_core::CoreError::invalid_argument("bad date");
        let rendered = render_error_json(&error);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            let parsed: Result<Value, _> = serde_json::from_str(&text);
            assert!(parsed.is_ok());
            if let Ok(value) = parsed {
                assert_eq!(
                    value["error"]["code"],
                    Value::String("invalid_argument".to_string())
                );
                assert!(value.get("ok").is_none());
            }
        }
    }
}
