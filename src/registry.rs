//! The matcher registry.
//!
//! All matchers are registered once, during initialization; compiling the
//! first assertion seals the registry, after which registration fails. The
//! keyword set the lexer works from is the union of a small base list and
//! every literal word of every registered template, so the reserved-word
//! set grows with the grammar.

use crate::assertion::Assertion;
use crate::error::{Error, Result};
use crate::lexer::Lexer;
use crate::matcher::{
    Boolean, DoesNotEqual, DoesNotHaveKey, DoesNotThrowAnError, Equals, ExactlyEquals,
    HasKey, HasProperty, HasPropertyWithExactValue, HasPropertyWithValue, IsAnObject,
    IsAssociative, IsGreaterThan, IsInstanceOf, IsLessThan, IsNotAnObject, IsNotNull,
    IsNotNumeric, IsNull, IsNumeric, Matcher, MatchesRegex, NotExactlyEquals, ThrowsAnError,
};
use crate::template::Template;
use crate::typecheck::{ClassRegistry, Context};
use std::cell::Cell;
use std::collections::BTreeSet;
use std::rc::Rc;

const BASE_KEYWORDS: &[&str] = &["equal", "equals", "is", "to", "true"];

/// One registered template: a matcher bound to one skeleton, with the
/// declared per-placeholder type tags and the human description.
pub struct Registration {
    pub skeleton: String,
    pub arg_types: Vec<Vec<String>>,
    pub description: String,
    matcher: Rc<dyn Matcher>,
}

impl Registration {
    pub fn matcher(&self) -> &dyn Matcher {
        self.matcher.as_ref()
    }
}

pub struct MatcherRegistry {
    registrations: Vec<Registration>,
    keywords: BTreeSet<String>,
    classes: ClassRegistry,
    sealed: Cell<bool>,
}

impl MatcherRegistry {
    pub fn new() -> Self {
        Self {
            registrations: Vec::new(),
            keywords: BASE_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            classes: ClassRegistry::new(),
            sealed: Cell::new(false),
        }
    }

    /// A registry with the built-in matcher set.
    pub fn with_default_matchers() -> Result<Self> {
        let mut registry = Self::new();
        registry.register(Rc::new(Equals))?;
        registry.register(Rc::new(DoesNotEqual::default()))?;
        registry.register(Rc::new(ExactlyEquals))?;
        registry.register(Rc::new(NotExactlyEquals::default()))?;
        registry.register(Rc::new(Boolean))?;
        registry.register(Rc::new(IsNull))?;
        registry.register(Rc::new(IsNotNull::default()))?;
        registry.register(Rc::new(HasKey))?;
        registry.register(Rc::new(DoesNotHaveKey::default()))?;
        registry.register(Rc::new(IsAssociative))?;
        registry.register(Rc::new(HasProperty))?;
        registry.register(Rc::new(HasPropertyWithValue::default()))?;
        registry.register(Rc::new(HasPropertyWithExactValue::default()))?;
        registry.register(Rc::new(IsAnObject))?;
        registry.register(Rc::new(IsNotAnObject::default()))?;
        registry.register(Rc::new(IsInstanceOf))?;
        registry.register(Rc::new(IsNumeric))?;
        registry.register(Rc::new(IsNotNumeric::default()))?;
        registry.register(Rc::new(IsGreaterThan))?;
        registry.register(Rc::new(IsLessThan))?;
        registry.register(Rc::new(MatchesRegex))?;
        registry.register(Rc::new(ThrowsAnError))?;
        registry.register(Rc::new(DoesNotThrowAnError))?;
        Ok(registry)
    }

    /// Register every template a matcher declares. Two templates may never
    /// share a skeleton, even with disjoint type annotations.
    pub fn register(&mut self, matcher: Rc<dyn Matcher>) -> Result<()> {
        if self.sealed.get() {
            return Err(Error::RegistrySealed);
        }
        for syntax in matcher.syntaxes() {
            let template = Template::parse(syntax.template)?;
            if self
                .registrations
                .iter()
                .any(|r| r.skeleton == template.skeleton)
            {
                return Err(Error::DuplicateSyntax {
                    skeleton: template.skeleton,
                });
            }
            self.keywords
                .extend(template.keywords().map(str::to_string));
            self.registrations.push(Registration {
                skeleton: template.skeleton,
                arg_types: template.arg_types,
                description: syntax.description.to_string(),
                matcher: Rc::clone(&matcher),
            });
        }
        Ok(())
    }

    /// Make a class or interface name known to the `class` meta-tag.
    pub fn register_class(&mut self, name: impl Into<String>) -> Result<()> {
        if self.sealed.get() {
            return Err(Error::RegistrySealed);
        }
        self.classes.register(name);
        Ok(())
    }

    pub fn keywords(&self) -> &BTreeSet<String> {
        &self.keywords
    }

    pub fn resolve(&self, skeleton: &str) -> Result<&Registration> {
        let found: Vec<&Registration> = self
            .registrations
            .iter()
            .filter(|r| r.skeleton == skeleton)
            .collect();
        match found.as_slice() {
            [] => Err(Error::NoMatcherFound {
                skeleton: skeleton.to_string(),
            }),
            [registration] => Ok(*registration),
            many => Err(Error::AmbiguousSyntax {
                skeleton: skeleton.to_string(),
                descriptions: many.iter().map(|r| r.description.clone()).collect(),
            }),
        }
    }

    /// Compile a sentence into an assertion bound to the resolved matcher
    /// and the given context map. The first call seals the registry.
    pub fn compile(&self, sentence: &str, context: Context) -> Result<Assertion<'_>> {
        self.sealed.set(true);
        let lexed = Lexer::new(&self.keywords).tokenize(sentence);
        let registration = self.resolve(&lexed.skeleton)?;
        if registration.arg_types.len() != lexed.arguments.len() {
            return Err(Error::ArgumentCount {
                skeleton: registration.skeleton.clone(),
                expected: registration.arg_types.len(),
                actual: lexed.arguments.len(),
            });
        }
        Ok(Assertion::new(
            sentence,
            lexed,
            registration,
            &self.classes,
            context,
        ))
    }
}

impl Default for MatcherRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::{MatchOutcome, Syntax};
    use crate::typecheck::TypeChecker;
    use crate::value::Value;

    struct Fake(&'static str);

    impl Matcher for Fake {
        fn syntaxes(&self) -> Vec<Syntax> {
            vec![Syntax {
                template: self.0,
                description: "fake matcher",
            }]
        }

        fn matches(
            &self,
            _skeleton: &str,
            _checker: &TypeChecker,
            _args: &[Value],
        ) -> crate::error::Result<MatchOutcome> {
            Ok(MatchOutcome::Matched)
        }
    }

    #[test]
    fn test_duplicate_skeleton_fails_at_registration() {
        let mut registry = MatcherRegistry::new();
        registry.register(Rc::new(Fake("? has key ?"))).unwrap();
        let result = registry.register(Rc::new(Fake("? has key ?")));
        assert!(matches!(
            result,
            Err(Error::DuplicateSyntax { skeleton }) if skeleton == "? has key ?"
        ));
    }

    #[test]
    fn test_duplicate_detection_ignores_type_annotations() {
        let mut registry = MatcherRegistry::new();
        registry
            .register(Rc::new(Fake("?:array has key ?:int")))
            .unwrap();
        let result = registry.register(Rc::new(Fake("?:string has key ?:string")));
        assert!(matches!(result, Err(Error::DuplicateSyntax { .. })));
    }

    #[test]
    fn test_resolve_unknown_skeleton() {
        let registry = MatcherRegistry::new();
        assert!(matches!(
            registry.resolve("? frobnicates ?"),
            Err(Error::NoMatcherFound { skeleton }) if skeleton == "? frobnicates ?"
        ));
    }

    #[test]
    fn test_registration_is_rejected_after_first_compile() {
        let mut registry = MatcherRegistry::with_default_matchers().unwrap();
        let _ = registry.compile("x equals y", Context::new());
        let result = registry.register(Rc::new(Fake("? zigzags ?")));
        assert!(matches!(result, Err(Error::RegistrySealed)));
    }

    #[test]
    fn test_keywords_include_template_words() {
        let registry = MatcherRegistry::with_default_matchers().unwrap();
        for word in ["equals", "has", "key", "property", "throws"] {
            assert!(registry.keywords().contains(word), "missing '{}'", word);
        }
    }

    #[test]
    fn test_compile_reports_unresolved_sentences() {
        let registry = MatcherRegistry::with_default_matchers().unwrap();
        let result = registry.compile("x frobnicates y", Context::new());
        assert!(matches!(result, Err(Error::NoMatcherFound { .. })));
    }

    #[test]
    fn test_compile_binds_the_resolved_matcher() {
        let registry = MatcherRegistry::with_default_matchers().unwrap();
        let mut context = Context::new();
        context.insert("x".to_string(), Value::Int(5));
        context.insert("y".to_string(), Value::Int(5));
        let assertion = registry.compile("x equals y", context).unwrap();
        assert!(assertion.execute().unwrap().matched());
    }

    #[test]
    fn test_has_key_round_trip() {
        let registry = MatcherRegistry::with_default_matchers().unwrap();
        let mut entries = std::collections::BTreeMap::new();
        entries.insert("foo".to_string(), Value::Int(1));
        let mut context = Context::new();
        context.insert("array".to_string(), Value::Map(entries));
        let assertion = registry
            .compile("array has key \"foo\"", context)
            .unwrap();
        assert!(assertion.execute().unwrap().matched());
    }

    #[test]
    fn test_has_key_failure_identifies_the_missing_key() {
        let registry = MatcherRegistry::with_default_matchers().unwrap();
        let mut entries = std::collections::BTreeMap::new();
        entries.insert("bar".to_string(), Value::Int(1));
        let mut context = Context::new();
        context.insert("array".to_string(), Value::Map(entries));
        let assertion = registry
            .compile("array has key \"foo\"", context)
            .unwrap();
        match assertion.execute().unwrap() {
            MatchOutcome::Failed(message) => assert!(message.contains("\"foo\"")),
            MatchOutcome::Matched => panic!("expected a failed match"),
        }
    }

    #[test]
    fn test_resolve_returns_declared_types() {
        let registry = MatcherRegistry::with_default_matchers().unwrap();
        let registration = registry.resolve("? has key ?").unwrap();
        assert_eq!(
            registration.arg_types,
            vec![
                vec!["array".to_string()],
                vec!["int".to_string(), "string".to_string()]
            ]
        );
    }
}
