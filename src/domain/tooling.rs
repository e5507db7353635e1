use std::path::Path;

/// Optional developer tooling shipped with the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Vitest,
    Eslint,
    Prettier,
}

impl Tool {
    pub const ALL: [Tool; 3] = [Tool::Vitest, Tool::Eslint, Tool::Prettier];

    /// Question asked when offering the tool.
    pub fn prompt(self) -> &'static str {
        match self {
            Tool::Vitest => "Add Vitest for Unit Testing?",
            Tool::Eslint => "Add ESLint for code quality?",
            Tool::Prettier => "Add Prettier for code formatting?",
        }
    }

    /// Template files, relative to the template root, that only exist for this tool.
    pub fn owned_files(self) -> &'static [&'static str] {
        match self {
            Tool::Vitest => &["vitest.config.ts"],
            Tool::Eslint => &[".eslintrc.json", ".eslintignore"],
            Tool::Prettier => &[".prettierrc", ".prettierignore"],
        }
    }

    /// `package.json` scripts that invoke this tool.
    pub fn scripts(self) -> &'static [&'static str] {
        match self {
            Tool::Vitest => &["test", "test:dev"],
            Tool::Eslint => &["lint", "lint:fix"],
            Tool::Prettier => &["format"],
        }
    }

    /// `package.json` devDependencies only this tool needs.
    pub fn dev_dependencies(self) -> &'static [&'static str] {
        match self {
            Tool::Vitest => &["vitest"],
            Tool::Eslint => &[
                "eslint",
                "@typescript-eslint/eslint-plugin",
                "@typescript-eslint/parser",
                "eslint-config-prettier",
            ],
            Tool::Prettier => &["prettier"],
        }
    }
}

/// Which tools the operator opted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tooling {
    pub vitest: bool,
    pub eslint: bool,
    pub prettier: bool,
}

impl Default for Tooling {
    fn default() -> Self {
        Self { vitest: true, eslint: true, prettier: true }
    }
}

impl Tooling {
    pub fn enabled(&self, tool: Tool) -> bool {
        match tool {
            Tool::Vitest => self.vitest,
            Tool::Eslint => self.eslint,
            Tool::Prettier => self.prettier,
        }
    }

    pub fn set(&mut self, tool: Tool, enabled: bool) {
        match tool {
            Tool::Vitest => self.vitest = enabled,
            Tool::Eslint => self.eslint = enabled,
            Tool::Prettier => self.prettier = enabled,
        }
    }

    /// True when `relative` is a file owned by a tool that was declined.
    pub fn excludes(&self, relative: &Path) -> bool {
        Tool::ALL.into_iter().filter(|tool| !self.enabled(*tool)).any(|tool| {
            tool.owned_files().iter().any(|owned| relative == Path::new(owned))
        })
    }
}
