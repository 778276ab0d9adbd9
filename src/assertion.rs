//! Assertion execution.
//!
//! An assertion binds a compiled sentence to its resolved matcher and a
//! context map. Running it drives the harness protocol: optional fixture
//! preparation, the match itself, success or failure signaling, and a
//! finalize call that runs on every exit path.

use crate::error::Result;
use crate::lexer::Lexed;
use crate::matcher::MatchOutcome;
use crate::registry::Registration;
use crate::typecheck::{ClassRegistry, Context, TypeChecker};
use crate::value::Value;
use std::fmt;

/// The external test harness the assertion reports to. `prepare` and
/// `finalize` scope the host's fixture lifecycle around the match;
/// `success` and `fail` are the pass/fail sinks.
pub trait Harness {
    fn prepare(&mut self) {}
    fn finalize(&mut self) {}
    fn success(&mut self);
    fn fail(&mut self, reason: &str);
}

pub struct Assertion<'r> {
    sentence: String,
    lexed: Lexed,
    registration: &'r Registration,
    classes: &'r ClassRegistry,
    context: Context,
    description: Option<String>,
    should_run_fixtures: bool,
}

impl<'r> Assertion<'r> {
    pub(crate) fn new(
        sentence: &str,
        lexed: Lexed,
        registration: &'r Registration,
        classes: &'r ClassRegistry,
        context: Context,
    ) -> Self {
        Self {
            sentence: sentence.to_string(),
            lexed,
            registration,
            classes,
            context,
            description: None,
            should_run_fixtures: true,
        }
    }

    pub fn sentence(&self) -> &str {
        &self.sentence
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    /// The human-facing description: the raw sentence unless overridden,
    /// in which case the sentence is appended in parentheses.
    pub fn description(&self) -> String {
        match &self.description {
            Some(description) => format!("{} ({})", description, self.sentence),
            None => self.sentence.clone(),
        }
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    pub fn should_run_fixtures(&self) -> bool {
        self.should_run_fixtures
    }

    pub fn set_should_run_fixtures(&mut self, should_run_fixtures: bool) {
        self.should_run_fixtures = should_run_fixtures;
    }

    /// Substitute attribute arguments from the context map and run the
    /// matcher. Type mismatches and unknown attributes surface as errors;
    /// a domain failure is a `Failed` outcome.
    pub fn execute(&self) -> Result<MatchOutcome> {
        let checker = TypeChecker::new(&self.context, self.classes);
        let mut args = Vec::with_capacity(self.lexed.arguments.len());
        for arg in &self.lexed.arguments {
            args.push(checker.resolve(arg)?);
        }
        self.registration
            .matcher()
            .matches(&self.lexed.skeleton, &checker, &args)
    }

    /// Run the full protocol against the harness. Finalize is invoked on
    /// every exit path, including when the match itself errors.
    pub fn run(&self, harness: &mut dyn Harness) -> Result<()> {
        if self.should_run_fixtures {
            harness.prepare();
        }
        let result = self.execute();
        match &result {
            Ok(MatchOutcome::Matched) => harness.success(),
            Ok(MatchOutcome::Failed(message)) => harness.fail(message),
            Err(_) => {}
        }
        harness.finalize();
        result.map(|_| ())
    }
}

impl fmt::Display for Assertion<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in &self.context {
            let rendered = match value {
                Value::Str(s) => s.clone(),
                other => other.render(),
            };
            write!(f, "\n  {} = {}", name, rendered)?;
        }
        writeln!(f)
    }
}
