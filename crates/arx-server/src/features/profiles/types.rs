use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A student profile as submitted by the client.
///
/// Saving is an upsert keyed on `user_id`; resubmitting replaces the stored
/// profile. The premium fields default when omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(rename = "imgURL")]
    pub img_url: String,
    pub program_code: String,
    pub year_of_study: i32,
    pub semester: i32,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default)]
    pub premium_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub premium_plan: i32,
}
