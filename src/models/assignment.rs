//! Assignment model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::ranking::classifier;

/// Assignment database row
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct AssignmentRecord {
    pub id: Uuid,
    pub name: String,
    pub url: String,
    pub status: String,
    pub last_polled_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Canonical problem membership of an assignment
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct AssignmentEntry {
    pub id: Uuid,
    pub assignment_id: Uuid,
    pub name: String,
    pub url: String,
}

/// Entry as received from the scraper, before it has an id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAssignmentEntry {
    pub name: String,
    pub url: String,
}

/// Whether an assignment is graded work or a late-credit session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentKind {
    Regular,
    Upsolve,
}

impl AssignmentKind {
    pub fn is_upsolve(self) -> bool {
        self == Self::Upsolve
    }

    pub fn from_upsolve_flag(is_upsolve: bool) -> Self {
        if is_upsolve { Self::Upsolve } else { Self::Regular }
    }
}

impl std::fmt::Display for AssignmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Regular => write!(f, "regular"),
            Self::Upsolve => write!(f, "upsolve"),
        }
    }
}

/// Assignment with its entries, classified once at load time
#[derive(Debug, Clone, Serialize)]
pub struct Assignment {
    pub id: Uuid,
    pub name: String,
    pub url: String,
    pub kind: AssignmentKind,
    pub status: String,
    pub last_polled_at: Option<DateTime<Utc>>,
    pub entries: Vec<AssignmentEntry>,
}

impl Assignment {
    /// Build the domain assignment from its row and entries
    pub fn from_record(record: AssignmentRecord, entries: Vec<AssignmentEntry>) -> Self {
        let kind = classifier::classify(&record.name);

        Self {
            id: record.id,
            name: record.name,
            url: record.url,
            kind,
            status: record.status,
            last_polled_at: record.last_polled_at,
            entries,
        }
    }
}
