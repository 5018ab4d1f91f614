use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Dashboard role. Every role sees the same board engine; only scope and
/// column styling differ (see `pipeline::board::BoardConfig`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    Recruiter,
    Client,
}

impl FromStr for Role {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "manager" => Ok(Role::Manager),
            "recruiter" => Ok(Role::Recruiter),
            "client" => Ok(Role::Client),
            other => Err(anyhow::anyhow!(
                "unknown role '{other}' (expected admin, manager, recruiter or client)"
            )),
        }
    }
}

/// Identity and credentials for the signed-in user, passed explicitly to
/// every component that needs them. Nothing in this crate reads session
/// data from ambient global storage.
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub user_id: String,
    pub role: Role,
    pub token: String,
}
