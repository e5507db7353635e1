use std::fmt;
use std::str::FromStr;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::AppError;

/// Description offered by default for each selected permission.
pub const DEFAULT_PERMISSION_DESCRIPTION: &str =
    "This permission is used to facilitate better a user experience.";

/// Capability a Managed Component can request from its Component Manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Permission {
    AccessClientKv,
    AccessExtendedClientKv,
    ExecuteUnsafeScripts,
    ClientNetworkRequests,
    ServerNetworkRequests,
    ServeStaticFiles,
    ProvideServerFunctionality,
    ProvideWidget,
}

impl Permission {
    /// Catalog order, used for prompting and for the dependent prompt round.
    pub const ALL: [Permission; 8] = [
        Permission::AccessClientKv,
        Permission::AccessExtendedClientKv,
        Permission::ExecuteUnsafeScripts,
        Permission::ClientNetworkRequests,
        Permission::ServerNetworkRequests,
        Permission::ServeStaticFiles,
        Permission::ProvideServerFunctionality,
        Permission::ProvideWidget,
    ];

    /// Manifest key.
    pub fn key(self) -> &'static str {
        match self {
            Permission::AccessClientKv => "access_client_kv",
            Permission::AccessExtendedClientKv => "access_extended_client_kv",
            Permission::ExecuteUnsafeScripts => "execute_unsafe_scripts",
            Permission::ClientNetworkRequests => "client_network_requests",
            Permission::ServerNetworkRequests => "server_network_requests",
            Permission::ServeStaticFiles => "serve_static_files",
            Permission::ProvideServerFunctionality => "provide_server_functionality",
            Permission::ProvideWidget => "provide_widget",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Permission::AccessClientKv => "Access Client KV",
            Permission::AccessExtendedClientKv => "Access Extended Client KV",
            Permission::ExecuteUnsafeScripts => "Execute Unsafe Scripts",
            Permission::ClientNetworkRequests => "Client Network Requests",
            Permission::ServerNetworkRequests => "Server Network Requests",
            Permission::ServeStaticFiles => "Serve Static Files",
            Permission::ProvideServerFunctionality => "Provide Server Functionality",
            Permission::ProvideWidget => "Provide Widget",
        }
    }

    /// Which Managed Component APIs need this permission.
    pub fn description(self) -> &'static str {
        match self {
            Permission::AccessClientKv => "required for: client.get, client.set",
            Permission::AccessExtendedClientKv => {
                "required for: client.get when getting a key from another tool"
            }
            Permission::ExecuteUnsafeScripts => "required for: client.execute",
            Permission::ClientNetworkRequests => "required for: client.fetch",
            Permission::ServerNetworkRequests => "required for: manager.fetch",
            Permission::ServeStaticFiles => "required for: serve",
            Permission::ProvideServerFunctionality => "required for: proxy, route",
            Permission::ProvideWidget => "required for: provideWidget",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Permission {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| AppError::UnknownPermission(s.to_string()))
    }
}

impl Serialize for Permission {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for Permission {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Operator-supplied metadata for one selected permission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionDetails {
    pub description: String,
    pub required: bool,
}

/// Selected permissions with their details, in selection order.
///
/// Serializes as a JSON object keyed by permission key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Permissions(Vec<(Permission, PermissionDetails)>);

impl Permissions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the details for `permission`, keeping its original position.
    pub fn insert(&mut self, permission: Permission, details: PermissionDetails) {
        match self.0.iter_mut().find(|(p, _)| *p == permission) {
            Some(entry) => entry.1 = details,
            None => self.0.push((permission, details)),
        }
    }

    pub fn get(&self, permission: Permission) -> Option<&PermissionDetails> {
        self.0.iter().find(|(p, _)| *p == permission).map(|(_, d)| d)
    }

    pub fn keys(&self) -> impl Iterator<Item = Permission> + '_ {
        self.0.iter().map(|(p, _)| *p)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Permission, PermissionDetails)> for Permissions {
    fn from_iter<I: IntoIterator<Item = (Permission, PermissionDetails)>>(iter: I) -> Self {
        let mut permissions = Permissions::new();
        for (permission, details) in iter {
            permissions.insert(permission, details);
        }
        permissions
    }
}

impl Serialize for Permissions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (permission, details) in &self.0 {
            map.serialize_entry(permission.key(), details)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Permissions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PermissionsVisitor;

        impl<'de> Visitor<'de> for PermissionsVisitor {
            type Value = Permissions;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of permission keys to details")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut permissions = Permissions::new();
                while let Some((permission, details)) =
                    access.next_entry::<Permission, PermissionDetails>()?
                {
                    permissions.insert(permission, details);
                }
                Ok(permissions)
            }
        }

        deserializer.deserialize_map(PermissionsVisitor)
    }
}
