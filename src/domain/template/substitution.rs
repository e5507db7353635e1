use crate::domain::ComponentConfig;

/// Unchecked checklist item in the template README.
pub const CHECKLIST_PENDING: &str = "[ ] find & replace ";
/// What [`CHECKLIST_PENDING`] becomes once the scaffolder has done the replacing.
pub const CHECKLIST_DONE: &str = "[x] find & replace ";

/// Placeholder tokens recognized in template text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    DisplayName,
    Namespace,
    Description,
}

impl Placeholder {
    pub const ALL: [Placeholder; 3] =
        [Placeholder::DisplayName, Placeholder::Namespace, Placeholder::Description];

    pub fn token(self) -> &'static str {
        match self {
            Placeholder::DisplayName => "{{ displayName }}",
            Placeholder::Namespace => "{{ namespace }}",
            Placeholder::Description => "{{ description }}",
        }
    }

    pub fn value(self, config: &ComponentConfig) -> &str {
        match self {
            Placeholder::DisplayName => &config.display_name,
            Placeholder::Namespace => config.namespace.as_str(),
            Placeholder::Description => &config.description,
        }
    }
}

/// Literal find/replace pairs applied to template text.
#[derive(Debug, Clone)]
pub struct Substitutions<'a> {
    pairs: Vec<(&'static str, &'a str)>,
}

impl<'a> Substitutions<'a> {
    pub fn for_config(config: &'a ComponentConfig) -> Self {
        let mut pairs: Vec<(&'static str, &'a str)> =
            Placeholder::ALL.into_iter().map(|p| (p.token(), p.value(config))).collect();
        pairs.push((CHECKLIST_PENDING, CHECKLIST_DONE));
        Self { pairs }
    }

    /// Replace every occurrence of every pattern in one left-to-right pass.
    ///
    /// Replacement values are never rescanned, so a display name that itself
    /// contains `{{ namespace }}` is written as-is.
    pub fn apply(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut rest = text;
        while let Some((index, pattern, value)) = self.next_match(rest) {
            out.push_str(&rest[..index]);
            out.push_str(value);
            rest = &rest[index + pattern.len()..];
        }
        out.push_str(rest);
        out
    }

    fn next_match(&self, text: &str) -> Option<(usize, &'static str, &'a str)> {
        text.char_indices()
            .filter(|(_, c)| matches!(c, '{' | '['))
            .find_map(|(index, _)| {
                let candidate = &text[index..];
                self.pairs
                    .iter()
                    .find(|&&(pattern, _)| candidate.starts_with(pattern))
                    .map(|&(pattern, value)| (index, pattern, value))
            })
    }
}
