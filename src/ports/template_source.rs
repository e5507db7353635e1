use crate::domain::AppError;
use crate::domain::template::TemplateTree;

/// Port for loading the template tree a project is rendered from.
pub trait TemplateSource {
    /// Human-readable origin, used in logs.
    fn describe(&self) -> String;

    fn load(&self) -> Result<TemplateTree, AppError>;
}

impl TemplateSource for TemplateTree {
    fn describe(&self) -> String {
        "in-memory template".to_string()
    }

    fn load(&self) -> Result<TemplateTree, AppError> {
        Ok(self.clone())
    }
}
