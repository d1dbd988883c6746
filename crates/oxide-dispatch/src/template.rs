//! URI template compilation.
//!
//! A template is a `/`-separated list of segments. A segment starting with
//! `{` is a variable; anything else is a literal. Each template compiles to
//! an anchored regular expression with one capture group per segment and a
//! trailing optional group that captures whatever the template did not
//! consume.

use regex::{Regex, RegexBuilder};

use crate::error::{DispatchError, Result};

/// Pattern emitted for a variable segment.
const VARIABLE_GROUP: &str = "([^/]+?)";

/// Pattern emitted after the last segment to capture the unconsumed tail.
const REMAINDER_GROUP: &str = "(/.*)?";

/// Converts a template into a regular expression and its specificity
/// counters `(expression, literal_count, var_count)`.
///
/// Empty segments are dropped, so leading, trailing and doubled slashes
/// make no difference. Whatever follows the `{` of a variable segment is
/// ignored: `{id}` and `{id:[0-9]+}` compile the same way.
///
/// # Example
///
/// ```
/// use oxide_dispatch::template_to_expression;
///
/// let (expression, literals, vars) = template_to_expression("/users/{id}");
/// assert_eq!(expression, "^/(users)/([^/]+?)(/.*)?$");
/// assert_eq!(literals, 5);
/// assert_eq!(vars, 1);
/// ```
pub fn template_to_expression(template: &str) -> (String, usize, usize) {
    let mut buffer = String::from("^");
    let mut literal_count = 0;
    let mut var_count = 0;

    for segment in template.split('/').filter(|s| !s.is_empty()) {
        buffer.push('/');
        if segment.starts_with('{') {
            var_count += 1;
            buffer.push_str(VARIABLE_GROUP);
        } else {
            literal_count += segment.chars().count();
            buffer.push('(');
            buffer.push_str(&regex::escape(segment));
            buffer.push(')');
        }
    }

    let mut expression = buffer.trim_end_matches('/').to_string();
    expression.push_str(REMAINDER_GROUP);
    expression.push('$');
    (expression, literal_count, var_count)
}

/// The outcome of matching a compiled template against a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateMatch {
    /// Number of capture groups, counting the whole match and the
    /// remainder group.
    pub matches_count: usize,
    /// The part of the path the template did not consume.
    pub remainder: String,
}

impl TemplateMatch {
    /// Returns true if the template consumed the entire path.
    pub fn is_complete(&self) -> bool {
        self.remainder.is_empty() || self.remainder == "/"
    }
}

/// A template compiled into a matching pattern.
#[derive(Debug, Clone)]
pub struct CompiledTemplate {
    template: String,
    expression: String,
    regex: Regex,
    literal_count: usize,
    var_count: usize,
}

impl CompiledTemplate {
    /// Compiles a template using the regex engine's default size limit.
    ///
    /// # Example
    ///
    /// ```
    /// use oxide_dispatch::CompiledTemplate;
    ///
    /// let compiled = CompiledTemplate::compile("/orders/{id}").unwrap();
    /// let m = compiled.match_path("/orders/7/lines").unwrap();
    /// assert_eq!(m.remainder, "/lines");
    /// ```
    pub fn compile(template: &str) -> Result<Self> {
        Self::build(template, None)
    }

    /// Compiles a template, rejecting it if the compiled program would
    /// exceed `size_limit` bytes.
    pub fn compile_with_size_limit(template: &str, size_limit: usize) -> Result<Self> {
        Self::build(template, Some(size_limit))
    }

    fn build(template: &str, size_limit: Option<usize>) -> Result<Self> {
        let (expression, literal_count, var_count) = template_to_expression(template);

        let mut builder = RegexBuilder::new(&expression);
        // the remainder group must take the whole tail, newlines included
        builder.dot_matches_new_line(true);
        if let Some(limit) = size_limit {
            builder.size_limit(limit);
        }
        let regex = builder
            .build()
            .map_err(|source| DispatchError::MalformedTemplate {
                template: template.to_string(),
                source,
            })?;

        Ok(Self {
            template: template.to_string(),
            expression,
            regex,
            literal_count,
            var_count,
        })
    }

    /// Matches a concrete path against this template.
    pub fn match_path(&self, path: &str) -> Option<TemplateMatch> {
        let caps = self.regex.captures(path)?;
        let matches_count = caps.len();
        let remainder = caps
            .get(matches_count - 1)
            .map_or("", |m| m.as_str())
            .to_string();

        Some(TemplateMatch {
            matches_count,
            remainder,
        })
    }

    /// Returns the original template string.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Returns the generated regular expression.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Returns the number of literal characters in the template.
    pub fn literal_count(&self) -> usize {
        self.literal_count
    }

    /// Returns the number of variable segments in the template.
    pub fn var_count(&self) -> usize {
        self.var_count
    }
}
