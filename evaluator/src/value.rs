//! Runtime values. Non-primitive values are tagged (`Color`, `Object`, `Vector`) so
//! [`type_of`] is O(1); primitives (`Number`, `String`, `Boolean`, `Null`) are untagged,
//! the Rust enum discriminant *is* the tag, so there's no separate
//! wrapper struct to maintain.
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Number(f64),
    String(String),
    Boolean(bool),
    /// `[r, g, b, a]`, each in `[0, 1]` for r/g/b and `[0, 1]` for alpha.
    Color([f64; 4]),
    Object(BTreeMap<String, Value>),
    Vector(Vec<Value>),
}

impl Value {
    /// `typeOf(x)`: the tag, or the titlecased primitive name, or `"Null"`.
    pub fn type_of(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Number(_) => "Number",
            Value::String(_) => "String",
            Value::Boolean(_) => "Boolean",
            Value::Color(_) => "Color",
            Value::Object(_) => "Object",
            Value::Vector(_) => "Vector",
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_vector(&self) -> Option<&[Value]> {
        match self {
            Value::Vector(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<[f64; 4]> {
        match self {
            Value::Color(c) => Some(*c),
            _ => None,
        }
    }

    /// Compound match-lookup key: `"<TypeName>-<literalValue>"`, distinguishing `0` from
    /// `"0"`.
    pub fn match_key(&self) -> String {
        format!("{}-{}", self.type_of(), self)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "{s}"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Color(c) => write!(f, "rgba({}, {}, {}, {})", c[0], c[1], c[2], c[3]),
            Value::Object(_) => write!(f, "[object Object]"),
            Value::Vector(items) => {
                let parts: Vec<String> = items.iter().map(|v| v.to_string()).collect();
                write!(f, "[{}]", parts.join(", "))
            }
        }
    }
}

/// `unwrap(x)`: strip the tag and hand back a JSON-ish value for the top-level caller. A
/// `Null` result surfaces as `None` ("undefined" at the API boundary).
pub fn unwrap(value: &Value) -> Option<serde_json::Value> {
    match value {
        Value::Null => None,
        Value::Number(n) => Some(serde_json::json!(n)),
        Value::String(s) => Some(serde_json::json!(s)),
        Value::Boolean(b) => Some(serde_json::json!(b)),
        Value::Color(c) => Some(serde_json::json!(c)),
        Value::Object(map) => {
            let mut out = serde_json::Map::new();
            for (k, v) in map {
                out.insert(k.clone(), unwrap(v).unwrap_or(serde_json::Value::Null));
            }
            Some(serde_json::Value::Object(out))
        }
        Value::Vector(items) => Some(serde_json::Value::Array(
            items.iter().map(|v| unwrap(v).unwrap_or(serde_json::Value::Null)).collect(),
        )),
    }
}

/// Inbound feature data: `{properties, geometry_type, id}`, the second argument to a
/// compiled `Callable`.
#[derive(Debug, Clone, Default)]
pub struct Feature {
    pub properties: BTreeMap<String, Value>,
    pub geometry_type: Option<String>,
    pub id: Option<Value>,
}
