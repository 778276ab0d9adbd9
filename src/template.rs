//! Matcher syntax templates.
//!
//! A template is the string a matcher declares for one grammar fragment,
//! e.g. `?:array has key ?:int,string`. Placeholders are `?` (any type) or
//! `?:type1,type2`; every other word is a literal keyword. Stripping the
//! type annotations yields the skeleton used as the registry lookup key.

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub source: String,
    pub skeleton: String,
    /// Accepted type tags per placeholder, in order. An empty list means
    /// any type.
    pub arg_types: Vec<Vec<String>>,
}

impl Template {
    pub fn parse(template: &str) -> Result<Template> {
        let bad = |message: &str| Error::BadTemplate {
            template: template.to_string(),
            message: message.to_string(),
        };

        let mut skeleton = Vec::new();
        let mut arg_types = Vec::new();

        for word in template.split_whitespace() {
            match word.strip_prefix('?') {
                Some("") => {
                    skeleton.push("?");
                    arg_types.push(Vec::new());
                }
                Some(annotation) => {
                    let list = annotation
                        .strip_prefix(':')
                        .ok_or_else(|| bad("malformed placeholder"))?;
                    let types: Vec<String> = list.split(',').map(str::to_string).collect();
                    if types.iter().any(String::is_empty) {
                        return Err(bad("empty type in placeholder annotation"));
                    }
                    skeleton.push("?");
                    arg_types.push(types);
                }
                None => skeleton.push(word),
            }
        }

        if skeleton.is_empty() {
            return Err(bad("template is empty"));
        }

        Ok(Template {
            source: template.to_string(),
            skeleton: skeleton.join(" "),
            arg_types,
        })
    }

    /// The literal words of the template, i.e. the keywords it reserves.
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.skeleton.split(' ').filter(|word| *word != "?")
    }
}
