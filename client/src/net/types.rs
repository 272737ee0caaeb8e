//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! `Star` mirrors the backend's `/api/stars` JSON so serde round-trips stay
//! lossless. `PageProps` is the read-only page context produced by the
//! server-rendering bridge and handed to components through Leptos context.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned star identifier.
pub type StarId = i64;

/// A star profile record as returned by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Star {
    /// Backend identifier; targets update and delete calls.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: StarId,
    /// Family name.
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub name: String,
    /// Given name.
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub first_name: String,
    /// Free-text biography.
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub description: String,
    /// Server-hosted image URL, if the star has one.
    #[serde(default)]
    pub image: Option<String>,
}

impl Star {
    /// "Name First" heading used by the browser detail panel.
    #[must_use]
    pub fn display_name(&self) -> String {
        let name = self.name.trim();
        let first = self.first_name.trim();
        match (name.is_empty(), first.is_empty()) {
            (false, false) => format!("{name} {first}"),
            (false, true) => name.to_owned(),
            (true, false) => first.to_owned(),
            (true, true) => String::new(),
        }
    }
}

/// A signed-in backend user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Session portion of the page props.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthProps {
    pub user: Option<User>,
}

/// Route names the pages link to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteName {
    Home,
    Dashboard,
    Login,
    Register,
    Logout,
}

/// Named route targets resolved by the server-rendering bridge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRoutes {
    pub home: String,
    pub dashboard: String,
    pub login: String,
    pub register: String,
    pub logout: String,
}

impl NamedRoutes {
    /// Look up the target for a route name.
    #[must_use]
    pub fn route(&self, name: RouteName) -> &str {
        match name {
            RouteName::Home => &self.home,
            RouteName::Dashboard => &self.dashboard,
            RouteName::Login => &self.login,
            RouteName::Register => &self.register,
            RouteName::Logout => &self.logout,
        }
    }
}

impl Default for NamedRoutes {
    fn default() -> Self {
        Self {
            home: "/".to_owned(),
            dashboard: "/dashboard".to_owned(),
            login: "/login".to_owned(),
            register: "/register".to_owned(),
            logout: "/logout".to_owned(),
        }
    }
}

/// Page context supplied by the server-rendering bridge.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageProps {
    pub auth: AuthProps,
    #[serde(default)]
    pub routes: NamedRoutes,
}

impl PageProps {
    /// The signed-in user, if any.
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.auth.user.as_ref()
    }

    /// Route target shortcut.
    #[must_use]
    pub fn route(&self, name: RouteName) -> &str {
        self.routes.route(name)
    }
}

/// Accepts integers and integer strings; some backends serialize keys as strings.
fn deserialize_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => number
            .as_i64()
            .ok_or_else(|| D::Error::custom("expected integer id")),
        serde_json::Value::String(raw) => raw
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom("expected integer id string")),
        _ => Err(D::Error::custom("expected integer id")),
    }
}

fn deserialize_null_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
