//! Runtime values passed through assertion sentences.
//!
//! Every argument extracted from a sentence, and every entry in an
//! assertion's context map, is a `Value`. The variants form a closed set so
//! the type checker can match on them exhaustively instead of probing.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

/// A callable value. Returning `Err` models a thrown error.
#[derive(Clone)]
pub struct Callable(Rc<dyn Fn() -> std::result::Result<Value, String>>);

impl Callable {
    pub fn new(f: impl Fn() -> std::result::Result<Value, String> + 'static) -> Self {
        Callable(Rc::new(f))
    }

    pub fn call(&self) -> std::result::Result<Value, String> {
        (self.0)()
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Callable")
    }
}

impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        #[allow(clippy::vtable_address_comparisons)]
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// An object with a class name and named properties.
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    pub class: String,
    pub properties: BTreeMap<String, Value>,
}

impl Object {
    pub fn new(class: impl Into<String>) -> Self {
        Object {
            class: class.into(),
            properties: BTreeMap::new(),
        }
    }

    pub fn property(mut self, name: impl Into<String>, value: Value) -> Self {
        self.properties.insert(name.into(), value);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// A regex literal (`/pattern/` in a sentence). The pattern is kept
    /// uncompiled; matchers that need it build the regex themselves.
    Regex(String),
    Array(Vec<Value>),
    Map(BTreeMap<String, Value>),
    Object(Object),
    Callable(Callable),
    /// A deferred reference to a named context value, resolved at execution
    /// time rather than parse time.
    Attribute(String),
}

impl Value {
    /// Canonical runtime type tag, as reported in type mismatch errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Regex(_) => "regex",
            Value::Array(_) | Value::Map(_) => "array",
            Value::Object(_) => "object",
            Value::Callable(_) => "callable",
            Value::Attribute(_) => "attribute",
        }
    }

    /// Numeric view of the value: ints, floats and numeric strings.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            Value::Str(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Render the value for a failure message.
    pub fn render(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Int(n) => n.to_string(),
            Value::Float(n) => render_float(*n),
            Value::Str(s) => format!("\"{}\"", s),
            Value::Regex(pattern) => format!("/{}/", pattern),
            Value::Array(items) => {
                let rendered: Vec<String> = items.iter().map(Value::render).collect();
                format!("[{}]", rendered.join(","))
            }
            Value::Map(entries) => render_entries(entries),
            Value::Object(object) => render_entries(&object.properties),
            Value::Callable(_) => "function".to_string(),
            Value::Attribute(name) => name.clone(),
        }
    }

    /// Equality-level comparison: numeric values compare across int, float
    /// and numeric string representations.
    pub fn loose_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.loose_eq(y))
            }
            (Value::Map(a), Value::Map(b)) => maps_loose_eq(a, b),
            (Value::Object(a), Value::Object(b)) => {
                a.class == b.class && maps_loose_eq(&a.properties, &b.properties)
            }
            _ => match (self.as_number(), other.as_number()) {
                (Some(a), Some(b)) => a == b,
                _ => self == other,
            },
        }
    }

    /// Identity-level comparison: the representation must match too, so
    /// `123` is not exactly equal to `123.0` or `"123"`.
    pub fn strict_eq(&self, other: &Value) -> bool {
        self == other
    }
}

fn maps_loose_eq(a: &BTreeMap<String, Value>, b: &BTreeMap<String, Value>) -> bool {
    a.len() == b.len()
        && a.iter()
            .zip(b)
            .all(|((ka, va), (kb, vb))| ka == kb && va.loose_eq(vb))
}

fn render_float(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

fn render_entries(entries: &BTreeMap<String, Value>) -> String {
    let rendered: Vec<String> = entries
        .iter()
        .map(|(k, v)| format!("\"{}\":{}", k, v.render()))
        .collect();
    format!("{{{}}}", rendered.join(","))
}
