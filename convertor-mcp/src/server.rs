//! JSON-RPC request handling
//!
//! Every registered function and command is exposed as an MCP tool whose
//! input schema comes from its argument metadata.

use std::sync::Arc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value as JsonValue};
use tracing::{debug, info, warn};
use convertor_core::Value;
use convertor_plugin::{ArgMeta, PluginRegistry, SessionContext};
use convertor_session::Session;
use convertor_units::Converter;
use crate::config::ServerConfig;

pub const PROTOCOL_VERSION: &str = "2025-11-25";
pub const SERVER_NAME: &str = "convertor";
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const PARSE_ERROR: i32 = -32700;
pub const INVALID_REQUEST: i32 = -32600;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;

// MCP Protocol types
#[derive(Debug, Deserialize)]
pub struct McpRequest {
    pub jsonrpc: String,
    pub id: Option<JsonValue>,
    pub method: String,
    #[serde(default)]
    pub params: Option<JsonValue>,
}

#[derive(Debug, Serialize)]
pub struct McpResponse {
    pub jsonrpc: &'static str,
    pub id: JsonValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<McpError>,
}

#[derive(Debug, Serialize)]
pub struct McpError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<JsonValue>,
}

impl McpError {
    fn new(code: i32, message: impl Into<String>) -> Self {
        McpError { code, message: message.into(), data: None }
    }

    fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(INVALID_PARAMS, message)
    }
}

impl McpResponse {
    fn new(id: JsonValue, result: Result<JsonValue, McpError>) -> Self {
        match result {
            Ok(r) => McpResponse { jsonrpc: "2.0", id, result: Some(r), error: None },
            Err(e) => McpResponse { jsonrpc: "2.0", id, result: None, error: Some(e) },
        }
    }
}

/// One server process serves exactly one session
pub struct Server {
    registry: Arc<PluginRegistry>,
    ctx: SessionContext,
}

impl Server {
    pub fn new(config: ServerConfig) -> Self {
        let registry = Arc::new(convertor_std::standard_registry());
        let engine = Arc::new(Converter::with_rates(config.rates));
        let session = Session::new(engine).with_theme(config.theme);
        let ctx = SessionContext::new(registry.clone(), session);
        Server { registry, ctx }
    }

    pub fn session(&self) -> &Session {
        &self.ctx.session
    }

    /// Handle one line of input. Notifications produce no response.
    pub fn handle_line(&mut self, line: &str) -> Option<McpResponse> {
        let raw: JsonValue = match serde_json::from_str(line) {
            Ok(v) => v,
            Err(e) => {
                warn!(error = %e, "unparseable request");
                return Some(McpResponse::new(
                    JsonValue::Null,
                    Err(McpError::new(PARSE_ERROR, format!("Parse error: {}", e))),
                ));
            }
        };

        // Valid JSON that is not a request keeps its id when it has one
        let request = match McpRequest::deserialize(&raw) {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, "malformed request");
                let id = raw.get("id").cloned().unwrap_or(JsonValue::Null);
                return Some(McpResponse::new(
                    id,
                    Err(McpError::new(INVALID_REQUEST, format!("Invalid Request: {}", e))),
                ));
            }
        };

        let response = self.handle_request(&request);

        // Notifications (no id) never get a response
        match request.id {
            Some(_) => Some(response),
            None => {
                debug!(method = %request.method, "notification processed");
                None
            }
        }
    }

    pub fn handle_request(&mut self, request: &McpRequest) -> McpResponse {
        debug!(method = %request.method, "processing request");
        let id = request.id.clone().unwrap_or(JsonValue::Null);

        if request.jsonrpc != "2.0" {
            return McpResponse::new(id, Err(McpError::new(
                INVALID_REQUEST,
                format!("Unsupported jsonrpc version: {}", request.jsonrpc),
            )));
        }

        let result = match request.method.as_str() {
            // Lifecycle
            "initialize" => handle_initialize(&request.params),
            "initialized" | "notifications/initialized" => Ok(json!({})),
            "ping" => Ok(json!({})),

            // Tools
            "tools/list" => Ok(self.tools_list()),
            "tools/call" => self.tool_call(&request.params),

            _ => Err(McpError::new(METHOD_NOT_FOUND, format!("Method not found: {}", request.method))),
        };

        McpResponse::new(id, result)
    }

    fn tools_list(&self) -> JsonValue {
        let mut tools: Vec<JsonValue> = Vec::new();
        for meta in self.registry.function_metas() {
            tools.push(tool_json(meta.name, meta.description, meta.args));
        }
        for meta in self.registry.command_metas() {
            tools.push(tool_json(meta.name, meta.description, meta.args));
        }
        tools.push(tool_json("help", "Documentation for a function or command, or an overview", &HELP_ARGS));
        json!({ "tools": tools })
    }

    fn tool_call(&mut self, params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
        let params = params.as_ref().ok_or_else(|| McpError::invalid_params("Missing params"))?;

        let name = params.get("name")
            .and_then(|v| v.as_str())
            .ok_or_else(|| McpError::invalid_params("Missing tool name"))?;

        let empty = Map::new();
        let arguments = match params.get("arguments") {
            None | Some(JsonValue::Null) => &empty,
            Some(JsonValue::Object(obj)) => obj,
            Some(_) => return Err(McpError::invalid_params("arguments must be an object")),
        };

        if name == "help" {
            let topic = arguments.get("name").and_then(|v| v.as_str());
            return Ok(tool_result(&self.registry.help(topic)));
        }

        let arg_metas = if let Some(f) = self.registry.get_function(name) {
            f.meta().args
        } else if let Some(c) = self.registry.get_command(name) {
            c.meta().args
        } else {
            return Err(McpError::invalid_params(format!("Unknown tool: {}", name)));
        };

        let args = positional_args(arg_metas, arguments)?;
        info!(tool = name, args = args.len(), "tool call");
        let value = self.registry.dispatch(name, &args, &mut self.ctx);
        Ok(tool_result(&value))
    }
}

static HELP_ARGS: [ArgMeta; 1] = [
    ArgMeta::optional("name", "Text", "Function or command name", "overview"),
];

fn handle_initialize(params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let client_info = params.as_ref()
        .and_then(|p| p.get("clientInfo"))
        .and_then(|c| c.get("name"))
        .and_then(|n| n.as_str())
        .unwrap_or("unknown");

    // Use client's protocol version for compatibility
    let client_protocol = params.as_ref()
        .and_then(|p| p.get("protocolVersion"))
        .and_then(|v| v.as_str())
        .unwrap_or(PROTOCOL_VERSION);

    info!(client = client_info, protocol = client_protocol, "client connected");

    Ok(json!({
        "protocolVersion": client_protocol,
        "serverInfo": {
            "name": SERVER_NAME,
            "version": SERVER_VERSION,
            "description": "Unit conversion with per-session history and favorites"
        },
        "capabilities": {
            "tools": {
                "listChanged": false
            }
        }
    }))
}

fn json_type(typ: &str) -> &'static str {
    match typ {
        "Number" => "number",
        "Text" => "string",
        "Bool" => "boolean",
        "List" => "array",
        "Object" => "object",
        _ => "string",
    }
}

fn tool_json(name: &str, description: &str, args: &[ArgMeta]) -> JsonValue {
    let properties: Map<String, JsonValue> = args.iter()
        .map(|a| {
            // Numbers may also arrive as numeric strings
            let schema = if a.typ == "Number" {
                json!({ "type": ["number", "string"], "description": a.description })
            } else {
                json!({ "type": json_type(a.typ), "description": a.description })
            };
            (a.name.to_string(), schema)
        })
        .collect();
    let required: Vec<&str> = args.iter().filter(|a| !a.optional).map(|a| a.name).collect();

    json!({
        "name": name,
        "description": description,
        "inputSchema": {
            "type": "object",
            "properties": properties,
            "required": required
        }
    })
}

/// Order named arguments by the plugin's declared arguments. Optional
/// arguments end the list at the first one missing.
fn positional_args(metas: &[ArgMeta], arguments: &Map<String, JsonValue>) -> Result<Vec<Value>, McpError> {
    let mut args = Vec::with_capacity(metas.len());
    for meta in metas {
        match arguments.get(meta.name) {
            Some(v) => args.push(json_to_value(v)),
            None if meta.optional => break,
            None => return Err(McpError::invalid_params(format!("Missing {} argument", meta.name))),
        }
    }
    Ok(args)
}

fn tool_result(value: &Value) -> JsonValue {
    let text = match value {
        Value::Error(e) => e.to_string(),
        Value::Text(s) => s.clone(),
        Value::Object(obj) => match obj.get("headline") {
            Some(Value::Text(h)) => h.clone(),
            _ => value_to_json(value).to_string(),
        },
        Value::Number(n) => n.to_string(),
        other => value_to_json(other).to_string(),
    };

    json!({
        "content": [{ "type": "text", "text": text }],
        "data": value_to_json(value),
        "isError": value.is_error()
    })
}

pub fn json_to_value(json: &JsonValue) -> Value {
    match json {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(b) => Value::Bool(*b),
        JsonValue::Number(n) => n.as_f64().map_or_else(|| Value::Text(n.to_string()), Value::Number),
        JsonValue::String(s) => Value::Text(s.clone()),
        JsonValue::Array(arr) => Value::List(arr.iter().map(json_to_value).collect()),
        JsonValue::Object(obj) => Value::Object(obj.iter().map(|(k, v)| (k.clone(), json_to_value(v))).collect()),
    }
}

pub fn value_to_json(value: &Value) -> JsonValue {
    match value {
        Value::Null => JsonValue::Null,
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::Number(n) => serde_json::Number::from_f64(*n).map_or(JsonValue::Null, JsonValue::Number),
        Value::Text(s) => JsonValue::String(s.clone()),
        Value::List(l) => JsonValue::Array(l.iter().map(value_to_json).collect()),
        Value::Object(o) => JsonValue::Object(o.iter().map(|(k, v)| (k.clone(), value_to_json(v))).collect()),
        Value::Error(e) => json!({
            "_error": {
                "code": e.code,
                "message": e.message,
                "suggestion": e.suggestion
            }
        }),
    }
}
