use std::path::Path;

use anyhow::Context;

use crate::error::TemplateError;

/// Skeleton of a generated file with one or more placeholder tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    text: String,
}

impl Template {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text: String = std::fs::read_to_string(path)
            .with_context(|| format!("reading template {}", path.display()))?;
        Ok(Self { text })
    }

    /// Uses the template at `path` when given, `builtin` otherwise.
    pub fn load_or(path: Option<&Path>, builtin: &str) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::new(builtin)),
        }
    }

    /// Replaces every `(placeholder, body)` pair.
    ///
    /// Each placeholder must appear exactly once in the template. Positions
    /// are resolved against the template itself, so a body that happens to
    /// contain another placeholder token is copied verbatim.
    pub fn render(&self, substitutions: &[(&str, &str)]) -> Result<String, TemplateError> {
        let mut spans: Vec<(usize, usize, &str)> = Vec::with_capacity(substitutions.len());

        for &(placeholder, body) in substitutions {
            let count: usize = self.text.matches(placeholder).count();
            match count {
                0 => {
                    return Err(TemplateError::MissingPlaceholder {
                        placeholder: placeholder.to_string(),
                    });
                }
                1 => {}
                _ => {
                    return Err(TemplateError::AmbiguousPlaceholder {
                        placeholder: placeholder.to_string(),
                        count,
                    });
                }
            }
            if let Some(start) = self.text.find(placeholder) {
                spans.push((start, start + placeholder.len(), body));
            }
        }

        spans.sort_by_key(|(start, _, _)| *start);

        if let Some(pair) = spans.windows(2).find(|pair| pair[1].0 < pair[0].1) {
            return Err(TemplateError::OverlappingPlaceholder {
                placeholder: self.text[pair[1].0..pair[1].1].to_string(),
            });
        }

        let mut out = String::with_capacity(self.text.len());
        let mut cursor: usize = 0;
        for (start, end, body) in spans {
            out.push_str(&self.text[cursor..start]);
            out.push_str(body);
            cursor = end;
        }
        out.push_str(&self.text[cursor..]);

        Ok(out)
    }
}
