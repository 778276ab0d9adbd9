//! Numeric matchers.

use super::{MatchOutcome, Matcher, Syntax, Tag};
use crate::error::{Error, Result};
use crate::typecheck::TypeChecker;
use crate::value::Value;

fn number_arg(checker: &TypeChecker, value: &Value) -> Result<(Value, f64)> {
    let resolved = checker.check(&["number"], value)?;
    match resolved.as_number() {
        Some(n) => Ok((resolved, n)),
        None => Err(Error::DataTypeMismatch {
            actual: resolved.type_name().to_string(),
            accepted: vec!["number".to_string()],
        }),
    }
}

/// `? is numeric` — ints, floats and numeric strings all qualify.
#[derive(Debug, Default)]
pub struct IsNumeric;

impl Matcher for IsNumeric {
    fn syntaxes(&self) -> Vec<Syntax> {
        vec![Syntax {
            template: "? is numeric",
            description: "Assert a value is a number.",
        }]
    }

    fn matches(
        &self,
        _skeleton: &str,
        checker: &TypeChecker,
        args: &[Value],
    ) -> Result<MatchOutcome> {
        let value = checker.resolve(&args[0])?;
        if checker.accepts(&["number"], &value)? {
            Ok(MatchOutcome::Matched)
        } else {
            Ok(MatchOutcome::failed(format!(
                "Expected {} to be a number.",
                value.render()
            )))
        }
    }

    fn tags(&self) -> &'static [Tag] {
        &[Tag::Numbers]
    }
}

/// `? is not numeric` — runs [`IsNumeric`] with the type checker in
/// exclude mode.
#[derive(Debug, Default)]
pub struct IsNotNumeric {
    inner: IsNumeric,
}

impl Matcher for IsNotNumeric {
    fn syntaxes(&self) -> Vec<Syntax> {
        vec![Syntax {
            template: "? is not numeric",
            description: "Assert a value is not a number.",
        }]
    }

    fn matches(
        &self,
        skeleton: &str,
        checker: &TypeChecker,
        args: &[Value],
    ) -> Result<MatchOutcome> {
        match self.inner.matches(skeleton, &checker.excluding(), args)? {
            MatchOutcome::Matched => Ok(MatchOutcome::Matched),
            MatchOutcome::Failed(_) => {
                let value = checker.resolve(&args[0])?;
                Ok(MatchOutcome::failed(format!(
                    "Expected {} to not be a number.",
                    value.render()
                )))
            }
        }
    }

    fn tags(&self) -> &'static [Tag] {
        &[Tag::Numbers]
    }
}

/// `?:number is greater than ?:number`
#[derive(Debug, Default)]
pub struct IsGreaterThan;

impl Matcher for IsGreaterThan {
    fn syntaxes(&self) -> Vec<Syntax> {
        vec![Syntax {
            template: "?:number is greater than ?:number",
            description: "Assert a number is greater than another number.",
        }]
    }

    fn matches(
        &self,
        _skeleton: &str,
        checker: &TypeChecker,
        args: &[Value],
    ) -> Result<MatchOutcome> {
        let (left, a) = number_arg(checker, &args[0])?;
        let (right, b) = number_arg(checker, &args[1])?;
        if a > b {
            Ok(MatchOutcome::Matched)
        } else {
            Ok(MatchOutcome::failed(format!(
                "Expected {} to be greater than {}.",
                left.render(),
                right.render()
            )))
        }
    }

    fn tags(&self) -> &'static [Tag] {
        &[Tag::Numbers]
    }
}

/// `?:number is less than ?:number`
#[derive(Debug, Default)]
pub struct IsLessThan;

impl Matcher for IsLessThan {
    fn syntaxes(&self) -> Vec<Syntax> {
        vec![Syntax {
            template: "?:number is less than ?:number",
            description: "Assert a number is less than another number.",
        }]
    }

    fn matches(
        &self,
        _skeleton: &str,
        checker: &TypeChecker,
        args: &[Value],
    ) -> Result<MatchOutcome> {
        let (left, a) = number_arg(checker, &args[0])?;
        let (right, b) = number_arg(checker, &args[1])?;
        if a < b {
            Ok(MatchOutcome::Matched)
        } else {
            Ok(MatchOutcome::failed(format!(
                "Expected {} to be less than {}.",
                left.render(),
                right.render()
            )))
        }
    }

    fn tags(&self) -> &'static [Tag] {
        &[Tag::Numbers]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typecheck::{ClassRegistry, Context};

    fn fixtures() -> (Context, ClassRegistry) {
        (Context::new(), ClassRegistry::new())
    }

    #[test]
    fn test_integer_is_numeric() {
        let (ctx, classes) = fixtures();
        let checker = TypeChecker::new(&ctx, &classes);
        assert!(IsNumeric
            .matches("? is numeric", &checker, &[Value::Int(123)])
            .unwrap()
            .matched());
    }

    #[test]
    fn test_float_is_numeric() {
        let (ctx, classes) = fixtures();
        let checker = TypeChecker::new(&ctx, &classes);
        assert!(IsNumeric
            .matches("? is numeric", &checker, &[Value::Float(12.3)])
            .unwrap()
            .matched());
    }

    #[test]
    fn test_numeric_string_is_numeric() {
        let (ctx, classes) = fixtures();
        let checker = TypeChecker::new(&ctx, &classes);
        assert!(IsNumeric
            .matches("? is numeric", &checker, &[Value::Str("123".to_string())])
            .unwrap()
            .matched());
    }

    #[test]
    fn test_word_is_not_numeric() {
        let (ctx, classes) = fixtures();
        let checker = TypeChecker::new(&ctx, &classes);
        assert_eq!(
            IsNumeric
                .matches("? is numeric", &checker, &[Value::Str("abc".to_string())])
                .unwrap(),
            MatchOutcome::Failed("Expected \"abc\" to be a number.".to_string())
        );
    }

    #[test]
    fn test_is_not_numeric_inverts_through_exclude_mode() {
        let (ctx, classes) = fixtures();
        let checker = TypeChecker::new(&ctx, &classes);
        let matcher = IsNotNumeric::default();
        assert!(matcher
            .matches("? is not numeric", &checker, &[Value::Str("abc".to_string())])
            .unwrap()
            .matched());
        assert_eq!(
            matcher
                .matches("? is not numeric", &checker, &[Value::Int(123)])
                .unwrap(),
            MatchOutcome::Failed("Expected 123 to not be a number.".to_string())
        );
    }

    #[test]
    fn test_greater_than() {
        let (ctx, classes) = fixtures();
        let checker = TypeChecker::new(&ctx, &classes);
        assert!(IsGreaterThan
            .matches(
                "? is greater than ?",
                &checker,
                &[Value::Int(5), Value::Int(3)]
            )
            .unwrap()
            .matched());
        assert!(!IsGreaterThan
            .matches(
                "? is greater than ?",
                &checker,
                &[Value::Int(3), Value::Int(5)]
            )
            .unwrap()
            .matched());
    }

    #[test]
    fn test_less_than_accepts_numeric_strings() {
        let (ctx, classes) = fixtures();
        let checker = TypeChecker::new(&ctx, &classes);
        assert!(IsLessThan
            .matches(
                "? is less than ?",
                &checker,
                &[Value::Str("3".to_string()), Value::Float(5.0)]
            )
            .unwrap()
            .matched());
    }

    #[test]
    fn test_comparison_rejects_non_numbers() {
        let (ctx, classes) = fixtures();
        let checker = TypeChecker::new(&ctx, &classes);
        assert!(IsGreaterThan
            .matches(
                "? is greater than ?",
                &checker,
                &[Value::Str("abc".to_string()), Value::Int(5)]
            )
            .is_err());
    }
}
