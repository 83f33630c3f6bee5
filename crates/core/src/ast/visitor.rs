use std::collections::HashSet;

use serde::Serialize;
use serde_json::Value;

/// Binary operators counted as arithmetic.
const ARITHMETIC_OPERATORS: &[&str] = &["+", "-", "*", "/"];

/// Member names that hand control to another contract.
const EXTERNAL_CALL_MEMBERS: &[&str] = &["call", "send", "transfer", "delegatecall", "staticcall"];

/// Depth-first walk over every AST node (any object carrying `nodeType`).
pub fn walk<'a>(node: &'a Value, visit: &mut dyn FnMut(&'a Value)) {
    match node {
        Value::Object(map) => {
            if map.contains_key("nodeType") {
                visit(node);
            }
            for child in map.values() {
                walk(child, visit);
            }
        }
        Value::Array(items) => {
            for child in items {
                walk(child, visit);
            }
        }
        _ => {}
    }
}

fn node_type(node: &Value) -> Option<&str> {
    node.get("nodeType").and_then(Value::as_str)
}

fn collect<'a>(ast: &'a Value, pred: impl Fn(&'a Value) -> bool) -> Vec<&'a Value> {
    let mut out = Vec::new();
    walk(ast, &mut |node: &'a Value| {
        if pred(node) {
            out.push(node);
        }
    });
    out
}

/// `BinaryOperation` nodes using `+`, `-`, `*` or `/`.
pub fn extract_arithmetic_operations(ast: &Value) -> Vec<&Value> {
    collect(ast, |node| {
        node_type(node) == Some("BinaryOperation")
            && node
                .get("operator")
                .and_then(Value::as_str)
                .is_some_and(|op| ARITHMETIC_OPERATORS.contains(&op))
    })
}

/// Names of every `Identifier` under `node`.
pub fn extract_identifiers(node: &Value) -> Vec<String> {
    collect(node, |n| node_type(n) == Some("Identifier"))
        .into_iter()
        .filter_map(|n| n.get("name").and_then(Value::as_str))
        .map(str::to_string)
        .collect()
}

/// `FunctionCall` nodes whose callee is a low-level or value-transfer
/// member (`x.call{value: v}(..)`, `x.send(..)`, `x.delegatecall(..)` ...).
pub fn extract_external_calls(ast: &Value) -> Vec<&Value> {
    collect(ast, |node| {
        node_type(node) == Some("FunctionCall")
            && node.get("expression").is_some_and(is_external_callee)
    })
}

fn is_external_callee(callee: &Value) -> bool {
    match node_type(callee) {
        Some("MemberAccess") => callee
            .get("memberName")
            .and_then(Value::as_str)
            .is_some_and(|m| EXTERNAL_CALL_MEMBERS.contains(&m)),
        // `{value: ..., gas: ...}` wraps the member access
        Some("FunctionCallOptions") => callee.get("expression").is_some_and(is_external_callee),
        _ => false,
    }
}

/// `Assignment` nodes whose left-hand side resolves to a state variable,
/// directly or through indexing / member access.
pub fn extract_state_changes(ast: &Value) -> Vec<&Value> {
    let state_vars: HashSet<i64> = collect(ast, |node| {
        node_type(node) == Some("VariableDeclaration")
            && node.get("stateVariable").and_then(Value::as_bool) == Some(true)
    })
    .into_iter()
    .filter_map(|n| n.get("id").and_then(Value::as_i64))
    .collect();

    collect(ast, |node| {
        node_type(node) == Some("Assignment")
            && node
                .get("leftHandSide")
                .is_some_and(|lhs| targets_state(lhs, &state_vars))
    })
}

fn targets_state(expr: &Value, state_vars: &HashSet<i64>) -> bool {
    match node_type(expr) {
        Some("Identifier") => expr
            .get("referencedDeclaration")
            .and_then(Value::as_i64)
            .is_some_and(|id| state_vars.contains(&id)),
        Some("IndexAccess") => expr
            .get("baseExpression")
            .is_some_and(|base| targets_state(base, state_vars)),
        Some("MemberAccess") => expr
            .get("expression")
            .is_some_and(|base| targets_state(base, state_vars)),
        _ => false,
    }
}

/// `FunctionDefinition` nodes (constructors, fallback and receive included).
pub fn extract_functions(ast: &Value) -> Vec<&Value> {
    collect(ast, |node| node_type(node) == Some("FunctionDefinition"))
}

/// Structural counts for one source unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AstSummary {
    pub functions: usize,
    pub arithmetic_operations: usize,
    pub external_calls: usize,
    pub state_changes: usize,
}

impl AstSummary {
    pub fn from_ast(ast: &Value) -> Self {
        Self {
            functions: extract_functions(ast).len(),
            arithmetic_operations: extract_arithmetic_operations(ast).len(),
            external_calls: extract_external_calls(ast).len(),
            state_changes: extract_state_changes(ast).len(),
        }
    }
}
