//! Support business logic - Money or equipment pledged to a plan.

use crate::{
    entities::{Plan, support},
    errors::{Error, Result},
};
use sea_orm::{Set, prelude::*};
use serde::{Deserialize, Serialize};

/// Message for a support request that fails validation.
pub const SUPPORT_NOT_VALID: &str = "Data is not valid.";

/// A pledge of money, a farming tool, or both
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SupportDto {
    /// Supported plan
    #[serde(rename = "planID")]
    pub plan_id: i64,
    /// Money pledged
    pub price: Option<f64>,
    /// Tool pledged
    pub farming_tool: Option<String>,
    /// Who made the pledge
    pub supporter_name: Option<String>,
}

/// A support needs a positive plan id and at least one of a price or a farming tool.
#[must_use]
pub fn is_valid_support(dto: &SupportDto) -> bool {
    dto.plan_id > 0 && (dto.price.is_some() || dto.farming_tool.is_some())
}

/// Records a support for an existing plan and returns its id.
///
/// # Errors
/// Returns an error if:
/// - The support fails [`is_valid_support`] ([`Error::Validation`])
/// - The plan does not exist ([`Error::NotFound`])
/// - The database insert fails
pub async fn add_support(db: &DatabaseConnection, dto: SupportDto) -> Result<i64> {
    if !is_valid_support(&dto) {
        return Err(Error::validation(SUPPORT_NOT_VALID));
    }

    if Plan::find_by_id(dto.plan_id).one(db).await?.is_none() {
        return Err(Error::not_found(format!(
            "Plan with ID {} not found.",
            dto.plan_id
        )));
    }

    let created = support::ActiveModel {
        plan_id: Set(dto.plan_id),
        price: Set(dto.price),
        farming_tool: Set(dto.farming_tool),
        supporter_name: Set(dto.supporter_name),
        created_at: Set(chrono::Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(created.id)
}
