//! Tool handler plumbing.
//!
//! A tool handler is an async function from its typed parameters to some
//! value. [`IntoToolOutput`] turns that value into a [`ToolOutput`], which the
//! registry then wraps into the MCP `CallToolResult` envelope:
//!
//! - strings become one text entry, unchanged
//! - numbers become one text entry in JSON form
//! - [`Structured`] values become a structured payload, plus a JSON text
//!   rendering for clients that only read text content

use futures::future::BoxFuture;
use rmcp::model::{CallToolResult, Content, JsonObject};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use super::error::ToolError;

/// Type-erased handler stored in the registry.
pub type BoxedHandler =
    Arc<dyn Fn(JsonObject) -> BoxFuture<'static, Result<ToolOutput, ToolError>> + Send + Sync>;

/// The value returned by a tool, before it is put in the MCP envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutput {
    /// Plain text.
    Text(String),
    /// A JSON scalar such as a number.
    Primitive(Value),
    /// An arbitrary JSON value exposed as structured content, with its text
    /// rendering in the field order of the source type.
    Structured { value: Value, text: String },
}

impl ToolOutput {
    /// The text a text-only client sees.
    pub fn render(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Primitive(value) => value.to_string(),
            Self::Structured { text, .. } => text.clone(),
        }
    }

    /// Wrap this output in an MCP tool result.
    pub fn into_call_result(self) -> CallToolResult {
        let text = self.render();
        let mut result = CallToolResult::success(vec![Content::text(text)]);
        if let Self::Structured { value, .. } = self {
            result.structured_content = Some(value);
        }
        result
    }
}

/// Marks a tool return value as structured content.
#[derive(Debug, Clone)]
pub struct Structured<T>(pub T);

/// Conversion from a handler's return type into [`ToolOutput`].
pub trait IntoToolOutput {
    fn into_tool_output(self) -> Result<ToolOutput, ToolError>;
}

impl IntoToolOutput for ToolOutput {
    fn into_tool_output(self) -> Result<ToolOutput, ToolError> {
        Ok(self)
    }
}

impl IntoToolOutput for String {
    fn into_tool_output(self) -> Result<ToolOutput, ToolError> {
        Ok(ToolOutput::Text(self))
    }
}

impl IntoToolOutput for &'static str {
    fn into_tool_output(self) -> Result<ToolOutput, ToolError> {
        Ok(ToolOutput::Text(self.to_string()))
    }
}

impl IntoToolOutput for f64 {
    fn into_tool_output(self) -> Result<ToolOutput, ToolError> {
        // JSON has no NaN or infinity; fall back to Rust's rendering.
        Ok(match serde_json::Number::from_f64(self) {
            Some(n) => ToolOutput::Primitive(Value::Number(n)),
            None => ToolOutput::Text(self.to_string()),
        })
    }
}

impl<T: Serialize> IntoToolOutput for Structured<T> {
    fn into_tool_output(self) -> Result<ToolOutput, ToolError> {
        let encode_failed =
            |e: serde_json::Error| ToolError::internal(format!("Failed to encode tool output: {e}"));

        // A `Value` map sorts its keys, so render the text from the source.
        let text = serde_json::to_string(&self.0).map_err(encode_failed)?;
        let value = serde_json::to_value(self.0).map_err(encode_failed)?;
        Ok(ToolOutput::Structured { value, text })
    }
}

impl<T: IntoToolOutput> IntoToolOutput for Result<T, ToolError> {
    fn into_tool_output(self) -> Result<ToolOutput, ToolError> {
        self?.into_tool_output()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;
    use serde_json::json;

    fn texts(result: &CallToolResult) -> Vec<String> {
        result
            .content
            .iter()
            .filter_map(|c| match &c.raw {
                RawContent::Text(text) => Some(text.text.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_string_is_single_text_entry() {
        let result = "hello".into_tool_output().unwrap().into_call_result();
        assert_eq!(texts(&result), vec!["hello"]);
        assert!(result.structured_content.is_none());
        assert!(!result.is_error.unwrap_or(false));
    }

    #[test]
    fn test_empty_string_is_kept() {
        let result = String::new().into_tool_output().unwrap().into_call_result();
        assert_eq!(texts(&result), vec![""]);
    }

    #[test]
    fn test_float_renders_as_json_number() {
        let output = 3.0_f64.into_tool_output().unwrap();
        assert_eq!(output, ToolOutput::Primitive(json!(3.0)));
        assert_eq!(output.render(), "3.0");

        let output = 0.5_f64.into_tool_output().unwrap();
        assert_eq!(output.render(), "0.5");
    }

    #[test]
    fn test_non_finite_float_falls_back_to_text() {
        let output = f64::INFINITY.into_tool_output().unwrap();
        assert_eq!(output, ToolOutput::Text("inf".to_string()));
    }

    #[test]
    fn test_structured_has_payload_and_text() {
        #[derive(Serialize)]
        struct Reading {
            city: &'static str,
            celsius: i64,
        }

        let result = Structured(Reading {
            city: "Tokyo",
            celsius: 21,
        })
        .into_tool_output()
        .unwrap()
        .into_call_result();

        assert_eq!(
            result.structured_content,
            Some(json!({"city": "Tokyo", "celsius": 21}))
        );
        assert_eq!(texts(&result), vec![r#"{"city":"Tokyo","celsius":21}"#]);
    }

    #[test]
    fn test_result_error_passes_through() {
        let value: Result<String, ToolError> = Err(ToolError::internal("boom"));
        assert!(matches!(
            value.into_tool_output(),
            Err(ToolError::Internal(_))
        ));
    }
}
