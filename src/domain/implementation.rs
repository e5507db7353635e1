use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::AppError;

/// Event family or rendering hook a Managed Component declares it handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Implementation {
    EcommerceEvents,
    ManagerEvents,
    ClientEvents,
    UserEvents,
    Widget,
    Embed,
}

impl Implementation {
    pub const ALL: [Implementation; 6] = [
        Implementation::EcommerceEvents,
        Implementation::ManagerEvents,
        Implementation::ClientEvents,
        Implementation::UserEvents,
        Implementation::Widget,
        Implementation::Embed,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Implementation::EcommerceEvents => "ecommerce_events",
            Implementation::ManagerEvents => "manager_events",
            Implementation::ClientEvents => "client_events",
            Implementation::UserEvents => "user_events",
            Implementation::Widget => "widget",
            Implementation::Embed => "embed",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Implementation::EcommerceEvents => "E-commerce events",
            Implementation::ManagerEvents => "Manager events",
            Implementation::ClientEvents => "Client Events",
            Implementation::UserEvents => "User events",
            Implementation::Widget => "Widgets",
            Implementation::Embed => "Embeds",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Implementation::EcommerceEvents => "required to enable handling of e-commerce data",
            Implementation::ManagerEvents => {
                "required for pageview and/or clientcreated event handling"
            }
            Implementation::ClientEvents => "e.g. mousedown, resize, scroll etc.",
            Implementation::UserEvents => "required to enable handling of user-defined events",
            Implementation::Widget => "required to enable rendering widgets",
            Implementation::Embed => "required to enable rendering embeds",
        }
    }
}

impl fmt::Display for Implementation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Implementation {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|i| i.key() == s)
            .ok_or_else(|| AppError::UnknownImplementation(s.to_string()))
    }
}

impl Serialize for Implementation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for Implementation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
