//! Write test assertions as near-English sentences.
//!
//! A sentence like `x equals y` is tokenized into keywords and placeholder
//! arguments, resolved against a registry of matchers by its skeleton, and
//! executed against a per-assertion context map. Pass/fail is reported to an
//! external [`Harness`].
//!
//! # Example
//!
//! ```
//! use aver::{Context, Harness, MatcherRegistry, Value};
//!
//! #[derive(Default)]
//! struct Recorder {
//!     failures: Vec<String>,
//! }
//!
//! impl Harness for Recorder {
//!     fn success(&mut self) {}
//!     fn fail(&mut self, reason: &str) {
//!         self.failures.push(reason.to_string());
//!     }
//! }
//!
//! let registry = MatcherRegistry::with_default_matchers().unwrap();
//!
//! let mut context = Context::new();
//! context.insert("x".to_string(), Value::Int(5));
//! context.insert("y".to_string(), Value::Int(5));
//!
//! let assertion = registry.compile("x equals y", context).unwrap();
//! let mut harness = Recorder::default();
//! assertion.run(&mut harness).unwrap();
//! assert!(harness.failures.is_empty());
//! ```

pub mod assertion;
pub mod error;
pub mod lexer;
pub mod matcher;
pub mod registry;
pub mod template;
pub mod typecheck;
pub mod value;

pub use assertion::{Assertion, Harness};
pub use error::{Error, Result};
pub use lexer::{Lexed, Lexer, Token, TokenKind};
pub use matcher::{MatchOutcome, Matcher, Syntax, Tag};
pub use registry::{MatcherRegistry, Registration};
pub use template::Template;
pub use typecheck::{ClassRegistry, Context, TypeChecker};
pub use value::{Callable, Object, Value};
