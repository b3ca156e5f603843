use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity snapshot supplied by the external auth layer. The backend trusts
/// whatever identity the auth proxy asserts; it never verifies credentials.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct UserRef {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}
