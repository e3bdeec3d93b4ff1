/// A run of inline formatted text inside a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Run {
    /// Plain text, including markup that did not match any construct.
    Text(String),
    /// `**...**`. Holds the re-tokenized inner content.
    Bold(Vec<Run>),
    /// `*...*` or `_..._`. Holds the re-tokenized inner content.
    Italic(Vec<Run>),
    /// Inline code, raw. Nothing inside is parsed.
    Code(String),
    /// Inline math expression, raw. Nothing inside is parsed.
    Equation(String),
    /// `[text](url)`.
    Link { text: String, url: String },
}

impl Run {
    pub fn text(s: impl Into<String>) -> Self {
        Run::Text(s.into())
    }

    /// Whether the run renders as text the target format can decorate.
    ///
    /// Equations are the only runs that are not text: they cannot be bold or
    /// italic.
    pub fn is_text_bearing(&self) -> bool {
        !matches!(self, Run::Equation(_))
    }

    /// The visible text of the run, without markup.
    pub fn plain_text(&self) -> String {
        match self {
            Run::Text(s) | Run::Code(s) | Run::Equation(s) => s.clone(),
            Run::Bold(inner) | Run::Italic(inner) => inner.iter().map(Run::plain_text).collect(),
            Run::Link { text, .. } => text.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_flattens_decorations() {
        let run = Run::Bold(vec![
            Run::text("a "),
            Run::Italic(vec![Run::text("b")]),
            Run::Equation("x".into()),
        ]);
        assert_eq!(run.plain_text(), "a bx");
    }

    #[test]
    fn only_equations_are_not_text_bearing() {
        assert!(!Run::Equation("x".into()).is_text_bearing());
        assert!(Run::Code("x".into()).is_text_bearing());
        assert!(
            Run::Link {
                text: "a".into(),
                url: "b".into()
            }
            .is_text_bearing()
        );
    }
}
