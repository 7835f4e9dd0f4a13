use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::StorageError;

/// Roster position. The scouting workflow only grades receivers and the
/// defensive backs covering them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
pub enum Position {
    #[serde(rename = "WR")]
    WideReceiver,
    #[serde(rename = "DB")]
    DefensiveBack,
}

impl Position {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WideReceiver => "WR",
            Self::DefensiveBack => "DB",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Position {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "WR" => Ok(Self::WideReceiver),
            "DB" => Ok(Self::DefensiveBack),
            other => Err(StorageError::ConstraintViolation(format!(
                "unknown position '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub team: String,
    pub position: Position,
    pub number: i32,
    pub avatar_url: Option<String>,
}
