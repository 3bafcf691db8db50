use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity and lifecycle columns shared by every table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Audit {
    pub id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}
