use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::user::UserRef;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Pool {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub owner_id: Uuid,
    pub owner: UserRef,
    pub members: Vec<PoolMember>,
    pub is_private: bool,
    /// Present iff the pool is private.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub predictions_private: bool,
    pub created_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prize: Option<String>,
    pub status: PoolStatus,
}

impl Pool {
    pub fn is_member(&self, user_id: Uuid) -> bool {
        self.members.iter().any(|m| m.user_id == user_id)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PoolMember {
    pub id: String,
    pub user_id: Uuid,
    pub user: UserRef,
    pub pool_id: Uuid,
    /// Derived from scored predictions; never set directly.
    pub points: u32,
    /// 1-based position within the pool, reassigned on every recompute.
    pub rank: u32,
    pub joined_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PoolStatus {
    Active,
    Finished,
    Cancelled,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CreatePoolRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_private: Option<bool>,
    #[serde(default)]
    pub predictions_private: Option<bool>,
    #[serde(default)]
    pub ends_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub prize: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UpdatePoolRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_private: Option<bool>,
    #[serde(default)]
    pub predictions_private: Option<bool>,
    #[serde(default)]
    pub prize: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct JoinPoolRequest {
    #[serde(default)]
    pub code: Option<String>,
}
