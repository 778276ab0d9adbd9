//! Sentence tokenizer.
//!
//! Splits an assertion sentence into typed tokens, derives the keyword and
//! placeholder skeleton used for matcher lookup, and extracts the ordered
//! argument list. Lexing is total: any word that is not a keyword or a
//! recognized literal becomes an attribute reference, to be resolved against
//! the context map at execution time.

use crate::value::Value;
use std::collections::BTreeSet;
use winnow::combinator::alt;
use winnow::prelude::*;
use winnow::token::any;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Keyword,
    Integer,
    Float,
    String,
    Regex,
    Attribute,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

/// The product of tokenizing one sentence.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Lexed {
    pub tokens: Vec<Token>,
    /// Keywords kept verbatim, every other token replaced with `?`.
    pub skeleton: String,
    /// One argument per non-keyword token, in sentence order.
    pub arguments: Vec<Value>,
}

pub struct Lexer<'a> {
    keywords: &'a BTreeSet<String>,
}

impl<'a> Lexer<'a> {
    pub fn new(keywords: &'a BTreeSet<String>) -> Self {
        Self { keywords }
    }

    pub fn tokenize(&self, sentence: &str) -> Lexed {
        let mut input = sentence;
        let mut tokens = Vec::new();

        loop {
            input = input.trim_start();
            if input.is_empty() {
                break;
            }

            let start = input;
            let token = match quoted(&mut input) {
                Ok(text) => Token {
                    kind: TokenKind::String,
                    text,
                },
                Err(_) => {
                    input = start;
                    let end = input
                        .find(char::is_whitespace)
                        .unwrap_or(input.len());
                    let word = &input[..end];
                    input = &input[end..];
                    self.classify(word)
                }
            };
            tokens.push(token);
        }

        let mut skeleton = Vec::with_capacity(tokens.len());
        let mut arguments = Vec::new();
        for token in &tokens {
            match argument(token) {
                Some(value) => {
                    skeleton.push("?");
                    arguments.push(value);
                }
                None => skeleton.push(&token.text),
            }
        }

        Lexed {
            skeleton: skeleton.join(" "),
            arguments,
            tokens,
        }
    }

    fn classify(&self, word: &str) -> Token {
        let kind = if self.keywords.contains(word) {
            TokenKind::Keyword
        } else if is_regex_literal(word) {
            TokenKind::Regex
        } else if is_integer(word) {
            TokenKind::Integer
        } else if is_float(word) {
            TokenKind::Float
        } else {
            TokenKind::Attribute
        };
        let text = match kind {
            TokenKind::Regex => word[1..word.len() - 1].to_string(),
            _ => word.to_string(),
        };
        Token { kind, text }
    }
}

fn argument(token: &Token) -> Option<Value> {
    match token.kind {
        TokenKind::Keyword => None,
        TokenKind::Integer => Some(match token.text.parse::<i64>() {
            Ok(n) => Value::Int(n),
            Err(_) => Value::Float(token.text.parse().unwrap_or(0.0)),
        }),
        TokenKind::Float => Some(Value::Float(token.text.parse().unwrap_or(0.0))),
        TokenKind::String => Some(Value::Str(token.text.clone())),
        TokenKind::Regex => Some(Value::Regex(token.text.clone())),
        TokenKind::Attribute => Some(Value::Attribute(token.text.clone())),
    }
}

fn is_regex_literal(word: &str) -> bool {
    word.len() >= 2 && word.starts_with('/') && word.ends_with('/')
}

fn is_integer(word: &str) -> bool {
    let digits = word.strip_prefix('-').unwrap_or(word);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn is_float(word: &str) -> bool {
    let rest = word.strip_prefix('-').unwrap_or(word);
    match rest.split_once('.') {
        Some((int_part, frac_part)) => {
            !int_part.is_empty()
                && !frac_part.is_empty()
                && int_part.bytes().all(|b| b.is_ascii_digit())
                && frac_part.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}

fn quoted(input: &mut &str) -> PResult<String> {
    let quote = alt(('"', '\'')).parse_next(input)?;
    let mut s = String::new();
    loop {
        let c = any.parse_next(input)?;
        if c == quote {
            break;
        }
        if c == '\\' {
            let escaped = any.parse_next(input)?;
            match escaped {
                'n' => s.push('\n'),
                't' => s.push('\t'),
                'r' => s.push('\r'),
                '\\' => s.push('\\'),
                _ if escaped == quote => s.push(quote),
                _ => {
                    s.push('\\');
                    s.push(escaped);
                }
            }
        } else {
            s.push(c);
        }
    }
    Ok(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn lex(sentence: &str) -> Lexed {
        let keywords = keywords(&["equals", "is", "has", "key", "true"]);
        Lexer::new(&keywords).tokenize(sentence)
    }

    #[test]
    fn test_empty_sentence() {
        let result = lex("");
        assert!(result.tokens.is_empty());
        assert_eq!(result.skeleton, "");
        assert!(result.arguments.is_empty());
    }

    #[test]
    fn test_keyword_token() {
        let result = lex("equals");
        assert_eq!(result.tokens[0].kind, TokenKind::Keyword);
        assert_eq!(result.skeleton, "equals");
        assert!(result.arguments.is_empty());
    }

    #[test]
    fn test_integer_token() {
        let result = lex("123");
        assert_eq!(result.tokens[0].kind, TokenKind::Integer);
        assert_eq!(result.arguments, vec![Value::Int(123)]);
    }

    #[test]
    fn test_negative_integer_token() {
        let result = lex("-42");
        assert_eq!(result.tokens[0].kind, TokenKind::Integer);
        assert_eq!(result.arguments, vec![Value::Int(-42)]);
    }

    #[test]
    fn test_float_token() {
        let result = lex("12.3");
        assert_eq!(result.tokens[0].kind, TokenKind::Float);
        assert_eq!(result.arguments, vec![Value::Float(12.3)]);
    }

    #[test]
    fn test_attribute_token() {
        let result = lex("z");
        assert_eq!(result.tokens[0].kind, TokenKind::Attribute);
        assert_eq!(result.arguments, vec![Value::Attribute("z".to_string())]);
    }

    #[test]
    fn test_quoted_string_token() {
        let result = lex("\"abc\"");
        assert_eq!(result.tokens[0].kind, TokenKind::String);
        assert_eq!(result.arguments, vec![Value::Str("abc".to_string())]);
    }

    #[test]
    fn test_quoted_string_with_spaces_is_one_token() {
        let result = lex("x equals \"hello world\"");
        assert_eq!(result.skeleton, "? equals ?");
        assert_eq!(
            result.arguments,
            vec![
                Value::Attribute("x".to_string()),
                Value::Str("hello world".to_string()),
            ]
        );
    }

    #[test]
    fn test_single_quoted_string() {
        let result = lex("'abc'");
        assert_eq!(result.arguments, vec![Value::Str("abc".to_string())]);
    }

    #[test]
    fn test_escape_sequences() {
        let result = lex(r#""line\nbreak""#);
        assert_eq!(
            result.arguments,
            vec![Value::Str("line\nbreak".to_string())]
        );
    }

    #[test]
    fn test_unterminated_quote_falls_back_to_attribute() {
        let result = lex("\"abc");
        assert_eq!(result.tokens[0].kind, TokenKind::Attribute);
    }

    #[test]
    fn test_regex_token() {
        let result = lex("/^a.c$/");
        assert_eq!(result.tokens[0].kind, TokenKind::Regex);
        assert_eq!(result.arguments, vec![Value::Regex("^a.c$".to_string())]);
    }

    #[test]
    fn test_skeleton_replaces_non_keywords() {
        let result = lex("x equals 5");
        assert_eq!(result.skeleton, "? equals ?");
        assert_eq!(
            result.arguments,
            vec![Value::Attribute("x".to_string()), Value::Int(5)]
        );
    }

    #[test]
    fn test_sentence_of_only_keywords_keeps_skeleton_intact() {
        let result = lex("is true");
        assert_eq!(result.skeleton, "is true");
        assert!(result.arguments.is_empty());
    }

    #[test]
    fn test_one_placeholder_per_argument() {
        let result = lex("arr has key \"foo\"");
        assert_eq!(result.skeleton, "? has key ?");
        assert_eq!(result.arguments.len(), 2);
    }

    #[test]
    fn test_extra_whitespace_is_ignored() {
        let result = lex("  x   equals  5 ");
        assert_eq!(result.skeleton, "? equals ?");
    }
}
