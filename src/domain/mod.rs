pub mod component_config;
pub mod defaults;
pub mod error;
pub mod implementation;
pub mod manifest;
pub mod namespace;
pub mod permission;
pub mod template;
pub mod tooling;

pub use component_config::{
    ComponentConfig, DEFAULT_DESCRIPTION, DEFAULT_DISPLAY_NAME, DEFAULT_ICON,
};
pub use defaults::{PromptDefaults, parse_defaults_content};
pub use error::AppError;
pub use implementation::Implementation;
pub use manifest::{MANIFEST_FILE, Manifest};
pub use namespace::{Namespace, is_valid_package_name, to_valid_package_name};
pub use permission::{DEFAULT_PERMISSION_DESCRIPTION, Permission, PermissionDetails, Permissions};
pub use tooling::{Tool, Tooling};
