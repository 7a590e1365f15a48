use std::collections::HashMap;

pub const QUESTION_ANSWER_TEMPLATE: &str = "Question: {query}\nAnswer:";
pub const QUERY_VARIABLE: &str = "query";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Variable(String),
}

/// A prompt with `{name}` placeholders, validated against its declared
/// input variables at construction. `{{` and `}}` render as literal braces.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    template: String,
    input_variables: Vec<String>,
    segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    #[error("unclosed placeholder at byte {0}")]
    UnclosedPlaceholder(usize),
    #[error("empty placeholder at byte {0}")]
    EmptyPlaceholder(usize),
    #[error("unmatched closing brace at byte {0}")]
    UnmatchedClosingBrace(usize),
    #[error("placeholder '{0}' is not a declared input variable")]
    UndeclaredVariable(String),
    #[error("input variable '{0}' does not appear in the template")]
    UnusedVariable(String),
    #[error("no value supplied for input variable '{0}'")]
    MissingValue(String),
    #[error("template declares {0} input variables, expected exactly one")]
    NotSingleVariable(usize),
}

impl PromptTemplate {
    pub fn new(template: &str, input_variables: &[&str]) -> Result<Self, TemplateError> {
        let segments = parse(template)?;

        for segment in &segments {
            if let Segment::Variable(name) = segment {
                if !input_variables.contains(&name.as_str()) {
                    return Err(TemplateError::UndeclaredVariable(name.clone()));
                }
            }
        }

        for variable in input_variables {
            let used = segments
                .iter()
                .any(|s| matches!(s, Segment::Variable(name) if name == *variable));
            if !used {
                return Err(TemplateError::UnusedVariable((*variable).to_string()));
            }
        }

        Ok(Self {
            template: template.to_string(),
            input_variables: input_variables.iter().map(|v| v.to_string()).collect(),
            segments,
        })
    }

    /// The `Question: {query}\nAnswer:` template used by the demo chain.
    pub fn question_answer() -> Result<Self, TemplateError> {
        Self::new(QUESTION_ANSWER_TEMPLATE, &[QUERY_VARIABLE])
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn input_variables(&self) -> &[String] {
        &self.input_variables
    }

    pub fn format(&self, values: &HashMap<&str, &str>) -> Result<String, TemplateError> {
        if let Some(missing) = self
            .input_variables
            .iter()
            .find(|v| !values.contains_key(v.as_str()))
        {
            return Err(TemplateError::MissingValue(missing.clone()));
        }

        Ok(self.render(|name| values.get(name).copied().unwrap_or_default()))
    }

    pub fn format_single(&self, value: &str) -> Result<String, TemplateError> {
        if self.input_variables.len() != 1 {
            return Err(TemplateError::NotSingleVariable(self.input_variables.len()));
        }

        Ok(self.render(|_| value))
    }

    fn render<'a>(&self, lookup: impl Fn(&str) -> &'a str) -> String {
        let mut output = String::with_capacity(self.template.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => output.push_str(text),
                Segment::Variable(name) => output.push_str(lookup(name.as_str())),
            }
        }
        output
    }
}

fn parse(template: &str) -> Result<Vec<Segment>, TemplateError> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = template.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        match c {
            '{' if matches!(chars.peek(), Some((_, '{'))) => {
                chars.next();
                literal.push('{');
            }
            '}' if matches!(chars.peek(), Some((_, '}'))) => {
                chars.next();
                literal.push('}');
            }
            '{' => {
                let mut name = String::new();
                let mut closed = false;
                for (_, next) in chars.by_ref() {
                    if next == '}' {
                        closed = true;
                        break;
                    }
                    name.push(next);
                }

                if !closed {
                    return Err(TemplateError::UnclosedPlaceholder(idx));
                }

                let name = name.trim();
                if name.is_empty() {
                    return Err(TemplateError::EmptyPlaceholder(idx));
                }

                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Variable(name.to_string()));
            }
            '}' => return Err(TemplateError::UnmatchedClosingBrace(idx)),
            other => literal.push(other),
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }

    Ok(segments)
}
