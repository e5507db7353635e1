mod mock_project_store;
mod scripted_prompter;

pub use mock_project_store::MockProjectStore;
pub use scripted_prompter::{Answer, ScriptedPrompter};
