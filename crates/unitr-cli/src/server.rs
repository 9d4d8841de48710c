//! JSON-RPC 2.0 server mode for unitr-cli
//!
//! Lets external tools use unitr as a conversion backend.
//! Reads JSON-RPC requests from stdin, writes responses to stdout.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::io::{self, BufRead, Write};
use unitr_core::{Numeric, UnitError, UnitValue};

use crate::calc::{Calculator, Outcome};

/// JSON-RPC 2.0 request
#[derive(Deserialize)]
struct Request {
    jsonrpc: String,
    method: String,
    #[serde(default)]
    params: Option<serde_json::Value>,
    id: serde_json::Value,
}

/// JSON-RPC 2.0 response
#[derive(Serialize)]
struct Response {
    jsonrpc: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<RpcError>,
    id: serde_json::Value,
}

/// JSON-RPC error object
#[derive(Serialize)]
struct RpcError {
    code: i32,
    message: String,
}

/// Structured evaluation result
#[derive(Serialize)]
struct EvalResult {
    #[serde(rename = "type")]
    result_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parts: Option<Vec<EvalResult>>,
    display: String,
}

#[derive(Deserialize)]
struct EvalParams {
    expr: String,
}

#[derive(Deserialize)]
struct ConvertParams {
    value: String,
    to: String,
}

#[derive(Deserialize)]
struct ValueParams {
    value: String,
}

#[derive(Deserialize)]
struct NameParams {
    name: String,
}

#[derive(Deserialize)]
struct JsonParams {
    json: serde_json::Value,
}

// JSON-RPC error codes
const PARSE_ERROR: i32 = -32700;
const INVALID_REQUEST: i32 = -32600;
const METHOD_NOT_FOUND: i32 = -32601;
const INVALID_PARAMS: i32 = -32602;
const INTERNAL_ERROR: i32 = -32603;
const UNIT_ERROR: i32 = -32000;

type RpcResult = Result<serde_json::Value, RpcError>;

impl RpcError {
    fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl From<UnitError> for RpcError {
    fn from(err: UnitError) -> Self {
        Self::new(UNIT_ERROR, err.to_string())
    }
}

impl Response {
    fn success(id: serde_json::Value, result: serde_json::Value) -> Self {
        Self {
            jsonrpc: "2.0",
            result: Some(result),
            error: None,
            id,
        }
    }

    fn error(id: serde_json::Value, error: RpcError) -> Self {
        Self {
            jsonrpc: "2.0",
            result: None,
            error: Some(error),
            id,
        }
    }
}

fn value_to_result<N: Numeric>(calc: &Calculator<N>, value: &UnitValue<N>) -> EvalResult {
    let unit = value.format_units();
    EvalResult {
        result_type: if unit.is_empty() { "number" } else { "unit" },
        value: value.value().map(|v| v.to_f64()),
        unit: (!unit.is_empty()).then_some(unit),
        parts: None,
        display: calc.display(value),
    }
}

fn outcome_to_result<N: Numeric>(calc: &Calculator<N>, outcome: &Outcome<N>) -> EvalResult {
    match outcome {
        Outcome::Empty => EvalResult {
            result_type: "empty",
            value: None,
            unit: None,
            parts: None,
            display: String::new(),
        },
        Outcome::Value(value) => value_to_result(calc, value),
        Outcome::Parts(parts) => EvalResult {
            result_type: "parts",
            value: None,
            unit: None,
            parts: Some(parts.iter().map(|p| value_to_result(calc, p)).collect()),
            display: calc.render(outcome),
        },
    }
}

fn params<T: DeserializeOwned>(params: Option<serde_json::Value>) -> Result<T, RpcError> {
    let params = params.ok_or_else(|| RpcError::new(INVALID_PARAMS, "Missing params"))?;
    serde_json::from_value(params).map_err(|e| RpcError::new(INVALID_PARAMS, format!("Invalid params: {e}")))
}

fn to_json(result: impl Serialize) -> RpcResult {
    serde_json::to_value(result).map_err(|e| RpcError::new(INTERNAL_ERROR, format!("Internal error: {e}")))
}

/// Handle a single JSON-RPC request
fn handle_request<N>(calc: &Calculator<N>, input: &str) -> Response
where
    N: Numeric + Serialize + DeserializeOwned,
{
    // Parse request
    let request: Request = match serde_json::from_str(input) {
        Ok(r) => r,
        Err(e) => {
            return Response::error(
                serde_json::Value::Null,
                RpcError::new(PARSE_ERROR, format!("Parse error: {e}")),
            );
        }
    };

    // Validate jsonrpc version
    if request.jsonrpc != "2.0" {
        return Response::error(request.id, RpcError::new(INVALID_REQUEST, "Invalid JSON-RPC version"));
    }

    tracing::debug!(method = %request.method, "handling request");

    // Dispatch method
    let result = match request.method.as_str() {
        "eval" => handle_eval(calc, request.params),
        "convert" => handle_convert(calc, request.params),
        "to_si" => handle_to_si(calc, request.params),
        "exists" => handle_exists(calc, request.params),
        "to_json" => handle_to_json(calc, request.params),
        "from_json" => handle_from_json(calc, request.params),
        _ => Err(RpcError::new(
            METHOD_NOT_FOUND,
            format!("Method not found: {}", request.method),
        )),
    };

    match result {
        Ok(result) => Response::success(request.id, result),
        Err(error) => Response::error(request.id, error),
    }
}

/// Evaluate one expression line
fn handle_eval<N: Numeric>(calc: &Calculator<N>, raw: Option<serde_json::Value>) -> RpcResult {
    let params: EvalParams = params(raw)?;
    let outcome = calc.eval(&params.expr)?;
    to_json(outcome_to_result(calc, &outcome))
}

/// Convert `value` to a unit expression, unit system or split list
fn handle_convert<N: Numeric>(calc: &Calculator<N>, raw: Option<serde_json::Value>) -> RpcResult {
    let params: ConvertParams = params(raw)?;
    let value = calc.units().unit(&params.value)?;
    let outcome = calc.convert(&value, &params.to)?;
    to_json(outcome_to_result(calc, &outcome))
}

fn handle_to_si<N: Numeric>(calc: &Calculator<N>, raw: Option<serde_json::Value>) -> RpcResult {
    let params: ValueParams = params(raw)?;
    let value = calc.units().to_si(params.value.as_str())?;
    to_json(value_to_result(calc, &value))
}

fn handle_exists<N: Numeric>(calc: &Calculator<N>, raw: Option<serde_json::Value>) -> RpcResult {
    let params: NameParams = params(raw)?;
    Ok(serde_json::json!({ "exists": calc.units().exists(&params.name) }))
}

/// Interchange form `{"mathjs": "Unit", "value": .., "unit": ".."}`
fn handle_to_json<N>(calc: &Calculator<N>, raw: Option<serde_json::Value>) -> RpcResult
where
    N: Numeric + Serialize,
{
    let params: ValueParams = params(raw)?;
    let value = calc.units().unit(&params.value)?;
    to_json(value.to_json_repr())
}

fn handle_from_json<N>(calc: &Calculator<N>, raw: Option<serde_json::Value>) -> RpcResult
where
    N: Numeric + DeserializeOwned,
{
    let params: JsonParams = params(raw)?;
    let value = calc.units().from_json(&params.json.to_string())?;
    to_json(value_to_result(calc, &value))
}

/// Run the JSON-RPC server loop
pub fn run_server<N>(calc: &Calculator<N>) -> io::Result<()>
where
    N: Numeric + Serialize + DeserializeOwned,
{
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line?;
        if line.is_empty() {
            continue;
        }

        let response = handle_request(calc, &line);
        let json = serde_json::to_string(&response)?;
        writeln!(stdout, "{json}")?;
        stdout.flush()?;
    }

    Ok(())
}
