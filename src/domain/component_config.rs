use super::{Implementation, Manifest, Namespace, Permissions, Tooling};

/// Display name offered when the operator gives none.
pub const DEFAULT_DISPLAY_NAME: &str = "MC Dynamite";
pub const DEFAULT_DESCRIPTION: &str = "A Managed Component for making the internet better";
pub const DEFAULT_ICON: &str = "assets/icon.svg";

/// Fully collected answers for a new Managed Component project.
///
/// Built once by the configurator and then only read by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentConfig {
    pub display_name: String,
    pub namespace: Namespace,
    pub description: String,
    pub icon: String,
    pub implements: Vec<Implementation>,
    pub permissions: Permissions,
    pub tooling: Tooling,
}

impl ComponentConfig {
    /// Configuration with default answers for everything but the name.
    pub fn new(display_name: &str, namespace: Namespace) -> Self {
        Self {
            display_name: display_name.to_string(),
            namespace,
            description: DEFAULT_DESCRIPTION.to_string(),
            icon: DEFAULT_ICON.to_string(),
            implements: Vec::new(),
            permissions: Permissions::new(),
            tooling: Tooling::default(),
        }
    }

    pub fn manifest(&self) -> Manifest {
        Manifest {
            name: self.display_name.clone(),
            namespace: self.namespace.clone(),
            description: self.description.clone(),
            icon: self.icon.clone(),
            implements: self.implements.clone(),
            permissions: self.permissions.clone(),
        }
    }
}
