use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("no matcher found for syntax '{skeleton}'")]
    NoMatcherFound { skeleton: String },

    #[error("ambiguous syntax '{skeleton}': matched by {}", .descriptions.join("; "))]
    AmbiguousSyntax {
        skeleton: String,
        descriptions: Vec<String>,
    },

    #[error("expected {}, got {actual}", .accepted.join(" or "))]
    DataTypeMismatch {
        actual: String,
        accepted: Vec<String>,
    },

    #[error("attribute '{name}' does not exist")]
    UnknownAttribute { name: String },

    #[error("no such class or interface '{name}'")]
    UnknownClass { name: String },

    #[error("syntax '{skeleton}' is already registered")]
    DuplicateSyntax { skeleton: String },

    #[error("matchers cannot be registered once assertions have been compiled")]
    RegistrySealed,

    #[error("syntax '{skeleton}' takes {expected} arguments, got {actual}")]
    ArgumentCount {
        skeleton: String,
        expected: usize,
        actual: usize,
    },

    #[error("bad syntax template '{template}': {message}")]
    BadTemplate { template: String, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_matcher_found_message() {
        let e = Error::NoMatcherFound {
            skeleton: "? foo ?".to_string(),
        };
        assert_eq!(e.to_string(), "no matcher found for syntax '? foo ?'");
    }

    #[test]
    fn test_ambiguous_syntax_lists_descriptions() {
        let e = Error::AmbiguousSyntax {
            skeleton: "? has key ?".to_string(),
            descriptions: vec!["first".to_string(), "second".to_string()],
        };
        assert_eq!(
            e.to_string(),
            "ambiguous syntax '? has key ?': matched by first; second"
        );
    }

    #[test]
    fn test_data_type_mismatch_message() {
        let e = Error::DataTypeMismatch {
            actual: "string".to_string(),
            accepted: vec!["int".to_string(), "float".to_string()],
        };
        assert_eq!(e.to_string(), "expected int or float, got string");
    }
}
