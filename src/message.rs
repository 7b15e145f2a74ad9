// src/message.rs
use serde::Deserialize;
use serde_json::{Number, Value};

#[derive(Debug, Default, Deserialize)]
pub struct PromptRequest {
    #[serde(default)]
    pub prompt: Option<Value>,
}

impl PromptRequest {
    /// The prompt coerced to text and trimmed. Missing or null becomes "".
    pub fn prompt_text(&self) -> String {
        let raw = match &self.prompt {
            None | Some(Value::Null) => String::new(),
            Some(value) => stringify(value),
        };
        raw.trim().to_string()
    }
}

/// Text form of a JSON value as a browser would print it: arrays are
/// comma-joined with null elements left blank, objects are `[object Object]`.
fn stringify(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => stringify(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn number_text(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }

    match n.as_f64() {
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) if f.fract() == 0.0 && f.abs() < 1e21 => format!("{:.0}", f),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}
