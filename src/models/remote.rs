//! Shapes shared by several hh.ru resources.

use serde::{Deserialize, Serialize};

/// `{ "id": ..., "name": ... }` dictionary reference used for areas,
/// schedules, statuses and similar fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NamedRef {
    pub id: Option<String>,
    pub name: Option<String>,
}

pub fn ref_name(value: &Option<NamedRef>) -> Option<String> {
    value.as_ref().and_then(|r| r.name.clone())
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Employer {
    pub id: Option<String>,
    pub name: Option<String>,
    pub alternate_url: Option<String>,
}

/// Paginated collection envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct RemotePage<T> {
    #[serde(default)]
    pub found: i64,
    #[serde(default)]
    pub pages: i64,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteMe {
    pub id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountInfo {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
}

impl From<RemoteMe> for AccountInfo {
    fn from(me: RemoteMe) -> Self {
        let name = format!(
            "{} {}",
            me.first_name.unwrap_or_default(),
            me.last_name.unwrap_or_default()
        )
        .trim()
        .to_string();
        Self {
            id: me.id,
            name,
            email: me.email,
        }
    }
}
