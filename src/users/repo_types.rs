use serde::{Deserialize, Serialize};
use time::Date;

// ISO-8601 calendar date, e.g. "1990-01-01".
time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// User record held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,       // 0 until the store assigns one
    pub email: String,
    pub login: String,
    pub name: String,  // defaults to login
    #[serde(with = "iso_date")]
    pub birthday: Date,
}

/// Candidate payload for create. Any `id` in the body is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewUser {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub name: String,
    #[serde(with = "iso_date")]
    pub birthday: Date,
}

/// Update payload. Absent and `null` fields are left untouched by the merge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserPatch {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub login: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, with = "iso_date::option")]
    pub birthday: Option<Date>,
}

impl User {
    pub(crate) fn from_candidate(id: i64, candidate: NewUser) -> Self {
        Self {
            id,
            email: candidate.email,
            login: candidate.login,
            name: candidate.name,
            birthday: candidate.birthday,
        }
    }
}
