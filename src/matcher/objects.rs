//! Object matchers.

use super::{MatchOutcome, Matcher, Syntax, Tag};
use crate::error::{Error, Result};
use crate::typecheck::TypeChecker;
use crate::value::{Object, Value};

fn object_arg(checker: &TypeChecker, value: &Value) -> Result<Object> {
    match checker.check(&["object"], value)? {
        Value::Object(object) => Ok(object),
        other => Err(Error::DataTypeMismatch {
            actual: other.type_name().to_string(),
            accepted: vec!["object".to_string()],
        }),
    }
}

fn string_arg(checker: &TypeChecker, value: &Value) -> Result<String> {
    match checker.check(&["string"], value)? {
        Value::Str(s) | Value::Regex(s) => Ok(s),
        other => Err(Error::DataTypeMismatch {
            actual: other.type_name().to_string(),
            accepted: vec!["string".to_string()],
        }),
    }
}

/// `?:object has property ?:string`
#[derive(Debug, Default)]
pub struct HasProperty;

impl Matcher for HasProperty {
    fn syntaxes(&self) -> Vec<Syntax> {
        vec![Syntax {
            template: "?:object has property ?:string",
            description: "Assert an object has a property.",
        }]
    }

    fn matches(
        &self,
        _skeleton: &str,
        checker: &TypeChecker,
        args: &[Value],
    ) -> Result<MatchOutcome> {
        let object = object_arg(checker, &args[0])?;
        let name = string_arg(checker, &args[1])?;
        if object.properties.contains_key(&name) {
            Ok(MatchOutcome::Matched)
        } else {
            Ok(MatchOutcome::failed(format!(
                "Expected {} to have property \"{}\".",
                Value::Object(object).render(),
                name
            )))
        }
    }

    fn tags(&self) -> &'static [Tag] {
        &[Tag::Objects]
    }
}

/// `?:object has property ?:string with value ?` — extends [`HasProperty`]
/// with an equality-level comparison of the property value.
#[derive(Debug, Default)]
pub struct HasPropertyWithValue {
    inner: HasProperty,
}

impl Matcher for HasPropertyWithValue {
    fn syntaxes(&self) -> Vec<Syntax> {
        vec![Syntax {
            template: "?:object has property ?:string with value ?",
            description: "Assert that an object has a property with a specific value.",
        }]
    }

    fn matches(
        &self,
        skeleton: &str,
        checker: &TypeChecker,
        args: &[Value],
    ) -> Result<MatchOutcome> {
        if let MatchOutcome::Failed(message) = self.inner.matches(skeleton, checker, args)? {
            return Ok(MatchOutcome::Failed(message));
        }
        property_value_match(checker, args, false)
    }

    fn tags(&self) -> &'static [Tag] {
        &[Tag::Objects]
    }
}

/// `?:object has property ?:string with exact value ?` — extends
/// [`HasPropertyWithValue`] with an identity-level comparison.
#[derive(Debug, Default)]
pub struct HasPropertyWithExactValue {
    inner: HasProperty,
}

impl Matcher for HasPropertyWithExactValue {
    fn syntaxes(&self) -> Vec<Syntax> {
        vec![Syntax {
            template: "?:object has property ?:string with exact value ?",
            description: "Assert that an object has a property with a specific exact value.",
        }]
    }

    fn matches(
        &self,
        skeleton: &str,
        checker: &TypeChecker,
        args: &[Value],
    ) -> Result<MatchOutcome> {
        if let MatchOutcome::Failed(message) = self.inner.matches(skeleton, checker, args)? {
            return Ok(MatchOutcome::Failed(message));
        }
        property_value_match(checker, args, true)
    }

    fn tags(&self) -> &'static [Tag] {
        &[Tag::Objects]
    }
}

fn property_value_match(
    checker: &TypeChecker,
    args: &[Value],
    strict: bool,
) -> Result<MatchOutcome> {
    let object = object_arg(checker, &args[0])?;
    let name = string_arg(checker, &args[1])?;
    let expected = checker.check(&[], &args[2])?;
    let actual = match object.properties.get(&name) {
        Some(value) => value,
        None => {
            return Ok(MatchOutcome::failed(format!(
                "Expected {} to have property \"{}\".",
                Value::Object(object).render(),
                name
            )))
        }
    };

    let equal = if strict {
        actual.strict_eq(&expected)
    } else {
        actual.loose_eq(&expected)
    };
    if equal {
        Ok(MatchOutcome::Matched)
    } else {
        Ok(MatchOutcome::failed(format!(
            "Expected property \"{}\" to be {}, but it is {}.",
            name,
            expected.render(),
            actual.render()
        )))
    }
}

/// `? is an object`
#[derive(Debug, Default)]
pub struct IsAnObject;

impl Matcher for IsAnObject {
    fn syntaxes(&self) -> Vec<Syntax> {
        vec![Syntax {
            template: "? is an object",
            description: "Assert a value is an object.",
        }]
    }

    fn matches(
        &self,
        _skeleton: &str,
        checker: &TypeChecker,
        args: &[Value],
    ) -> Result<MatchOutcome> {
        let value = checker.resolve(&args[0])?;
        if matches!(value, Value::Object(_)) {
            Ok(MatchOutcome::Matched)
        } else {
            Ok(MatchOutcome::failed(format!(
                "Expected {} to be an object.",
                value.render()
            )))
        }
    }

    fn tags(&self) -> &'static [Tag] {
        &[Tag::Objects]
    }
}

/// `? is not an object` — inverts [`IsAnObject`].
#[derive(Debug, Default)]
pub struct IsNotAnObject {
    inner: IsAnObject,
}

impl Matcher for IsNotAnObject {
    fn syntaxes(&self) -> Vec<Syntax> {
        vec![Syntax {
            template: "? is not an object",
            description: "Assert a value is not an object.",
        }]
    }

    fn matches(
        &self,
        skeleton: &str,
        checker: &TypeChecker,
        args: &[Value],
    ) -> Result<MatchOutcome> {
        match self.inner.matches(skeleton, checker, args)? {
            MatchOutcome::Matched => {
                let value = checker.resolve(&args[0])?;
                Ok(MatchOutcome::failed(format!(
                    "Expected {} to not be an object.",
                    value.render()
                )))
            }
            MatchOutcome::Failed(_) => Ok(MatchOutcome::Matched),
        }
    }

    fn tags(&self) -> &'static [Tag] {
        &[Tag::Objects]
    }
}

/// `?:object is an instance of ?:class`
#[derive(Debug, Default)]
pub struct IsInstanceOf;

impl Matcher for IsInstanceOf {
    fn syntaxes(&self) -> Vec<Syntax> {
        vec![Syntax {
            template: "?:object is an instance of ?:class",
            description: "Assert an object is an instance of a class.",
        }]
    }

    fn matches(
        &self,
        _skeleton: &str,
        checker: &TypeChecker,
        args: &[Value],
    ) -> Result<MatchOutcome> {
        let object = object_arg(checker, &args[0])?;
        let class = match checker.check(&["class"], &args[1])? {
            Value::Str(s) => s,
            other => {
                return Err(Error::DataTypeMismatch {
                    actual: other.type_name().to_string(),
                    accepted: vec!["class".to_string()],
                })
            }
        };
        if object.class.trim_start_matches('\\') == class {
            Ok(MatchOutcome::Matched)
        } else {
            Ok(MatchOutcome::failed(format!(
                "Expected an instance of {}, but got {}.",
                class, object.class
            )))
        }
    }

    fn tags(&self) -> &'static [Tag] {
        &[Tag::Objects]
    }
}
