//! Dynamic type checking of placeholder values.
//!
//! Matchers declare accepted type tags per placeholder; at execution time
//! the checker decides membership for the runtime value, applying the alias
//! table and the `number`, `class` and `callable` meta-tags. Attribute
//! references are resolved against the assertion's context map here.

use crate::error::{Error, Result};
use crate::value::Value;
use std::collections::{BTreeMap, BTreeSet};

/// The per-assertion name to value map.
pub type Context = BTreeMap<String, Value>;

/// Runtime type registry backing the `class` meta-tag. A string only
/// satisfies `?:class` if it names a class or interface registered here.
#[derive(Debug, Clone, Default)]
pub struct ClassRegistry {
    classes: BTreeSet<String>,
}

impl ClassRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.classes
            .insert(name.trim_start_matches('\\').to_string());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains(name.trim_start_matches('\\'))
    }
}

#[derive(Clone, Copy)]
pub struct TypeChecker<'a> {
    context: &'a Context,
    classes: &'a ClassRegistry,
    exclude: bool,
}

impl<'a> TypeChecker<'a> {
    pub fn new(context: &'a Context, classes: &'a ClassRegistry) -> Self {
        Self {
            context,
            classes,
            exclude: false,
        }
    }

    /// The same checker with the accept/reject decision inverted, for
    /// negated matcher variants.
    pub fn excluding(&self) -> TypeChecker<'a> {
        TypeChecker {
            exclude: true,
            ..*self
        }
    }

    /// Validate `value` against the accepted type tags and return the
    /// coerced value. An empty tag list accepts anything. Values whose
    /// concrete object class is listed literally in `accepted` pass without
    /// going through tag matching.
    pub fn check(&self, accepted: &[&str], value: &Value) -> Result<Value> {
        if accepted.is_empty() {
            return self.resolve(value);
        }

        if let Some(object) = self.specific_object(accepted, value) {
            return Ok(object);
        }

        if !self.accepts(accepted, value)? {
            return Err(Error::DataTypeMismatch {
                actual: self.type_of(value)?.to_string(),
                accepted: accepted.iter().map(|t| t.to_string()).collect(),
            });
        }

        let resolved = self.resolve(value)?;
        if accepted.contains(&"class") {
            if let Value::Str(name) = &resolved {
                let name = name.trim_start_matches('\\');
                if !self.classes.contains(name) {
                    return Err(Error::UnknownClass {
                        name: name.to_string(),
                    });
                }
                return Ok(Value::Str(name.to_string()));
            }
        }
        Ok(resolved)
    }

    /// Whether the value matches any accepted tag, honoring exclude mode.
    pub fn accepts(&self, accepted: &[&str], value: &Value) -> Result<bool> {
        let mut matched = false;
        for tag in accepted {
            if self.matches_tag(tag, value)? {
                matched = true;
                break;
            }
        }
        Ok(matched != self.exclude)
    }

    /// Resolve an attribute reference against the context map; any other
    /// value passes through unchanged.
    pub fn resolve(&self, value: &Value) -> Result<Value> {
        match value {
            Value::Attribute(name) => {
                self.context
                    .get(name)
                    .cloned()
                    .ok_or_else(|| Error::UnknownAttribute { name: name.clone() })
            }
            other => Ok(other.clone()),
        }
    }

    fn specific_object(&self, accepted: &[&str], value: &Value) -> Option<Value> {
        if let Value::Object(object) = value {
            for tag in accepted {
                if object.class == *tag || format!("\\{}", object.class) == *tag {
                    return Some(value.clone());
                }
            }
        }
        None
    }

    fn matches_tag(&self, tag: &str, value: &Value) -> Result<bool> {
        if tag == "number" {
            let resolved = self.resolve(value)?;
            return Ok(resolved.as_number().is_some());
        }
        Ok(simple_type(tag) == simple_type(self.type_of(value)?))
    }

    fn type_of(&self, value: &Value) -> Result<&'static str> {
        match value {
            Value::Attribute(_) => {
                let resolved = self.resolve(value)?;
                self.type_of(&resolved)
            }
            other => Ok(other.type_name()),
        }
    }
}

fn simple_type(tag: &str) -> &str {
    match tag {
        "integer" => "int",
        "double" => "float",
        "class" => "string",
        "bool" => "boolean",
        "regex" => "string",
        other => other,
    }
}
