//! Tool Registry - central registration and dispatch for all tools.
//!
//! Tools are registered with a typed parameter struct. The registry derives
//! the input schema from that type, validates incoming arguments by
//! deserializing them into it, and hands the result to the handler.
//!
//! Registering the same name twice replaces the earlier handler and
//! descriptor. The tool keeps the position of its first registration, so
//! listing order does not move.

use futures::FutureExt;
use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::{CallToolResult, JsonObject, Tool};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::error::ToolError;
use super::handlers::{BoxedHandler, IntoToolOutput};

/// A registered tool: its descriptor and its handler.
struct Entry {
    descriptor: Tool,
    handler: BoxedHandler,
}

/// Ordered collection of tools, looked up by name.
#[derive(Default)]
pub struct ToolRegistry {
    entries: Vec<Entry>,
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.tool_names())
            .finish()
    }
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool whose arguments deserialize into `P`.
    ///
    /// The input schema is generated from `P`. Missing required fields and
    /// wrong primitive types are rejected with
    /// [`ToolError::InvalidArguments`] before `handler` runs.
    pub fn register<P, F, Fut, R>(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        handler: F,
    ) -> &mut Self
    where
        P: DeserializeOwned + JsonSchema + Send + 'static,
        F: Fn(P) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = R> + Send + 'static,
        R: IntoToolOutput,
    {
        let name: String = name.into();
        let description: String = description.into();
        let descriptor = Tool {
            name: name.clone().into(),
            description: Some(description.into()),
            input_schema: cached_schema_for_type::<P>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        };

        let tool_name = name.clone();
        let handler: BoxedHandler = Arc::new(move |arguments: JsonObject| {
            let params = serde_json::from_value::<P>(serde_json::Value::Object(arguments))
                .map_err(|e| ToolError::invalid_arguments(&tool_name, e.to_string()));
            let call = params.map(&handler);
            async move {
                match call {
                    Ok(pending) => pending.await.into_tool_output(),
                    Err(e) => Err(e),
                }
            }
            .boxed()
        });

        self.insert(Entry {
            descriptor,
            handler,
        });
        self
    }

    fn insert(&mut self, entry: Entry) {
        let name = entry.descriptor.name.clone();
        match self
            .entries
            .iter_mut()
            .find(|existing| existing.descriptor.name == name)
        {
            Some(existing) => {
                warn!("Tool '{}' registered twice, keeping the last handler", name);
                *existing = entry;
            }
            None => {
                debug!("Registered tool '{}'", name);
                self.entries.push(entry);
            }
        }
    }

    /// Names of all tools, in registration order.
    pub fn tool_names(&self) -> Vec<&str> {
        self.entries
            .iter()
            .map(|e| e.descriptor.name.as_ref())
            .collect()
    }

    /// Descriptors of all tools, in registration order.
    pub fn list_tools(&self) -> Vec<Tool> {
        self.entries.iter().map(|e| e.descriptor.clone()).collect()
    }

    /// Descriptor of a single tool.
    pub fn get(&self, name: &str) -> Option<&Tool> {
        self.find(name).map(|e| &e.descriptor)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn find(&self, name: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.descriptor.name == name)
    }

    /// Invoke a tool by name.
    ///
    /// `None` arguments are treated as an empty object.
    #[instrument(skip(self, arguments))]
    pub async fn invoke(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, ToolError> {
        let Some(entry) = self.find(name) else {
            warn!("Unknown tool requested: {}", name);
            return Err(ToolError::not_found(name));
        };

        info!("Calling tool");
        let output = (entry.handler)(arguments.unwrap_or_default()).await?;
        Ok(output.into_call_result())
    }
}
