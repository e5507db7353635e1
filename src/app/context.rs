use crate::ports::{ProjectStore, Prompter, TemplateSource};

/// Application context holding dependencies for command execution.
pub struct AppContext<P: Prompter, T: TemplateSource, S: ProjectStore> {
    prompter: P,
    templates: T,
    store: S,
}

impl<P: Prompter, T: TemplateSource, S: ProjectStore> AppContext<P, T, S> {
    /// Create a new application context.
    pub fn new(prompter: P, templates: T, store: S) -> Self {
        Self { prompter, templates, store }
    }

    /// Get a reference to the operator prompter.
    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    /// Get a reference to the template source.
    pub fn templates(&self) -> &T {
        &self.templates
    }

    /// Get a reference to the project store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
