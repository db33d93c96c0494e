//! Plan ranking - Orders completed plans by area and picks the winner.
//!
//! The winner is computed on every read and never stored.

use crate::{
    core::prize::{PrizeDto, get_nearest_prize},
    entities::{Client, Plan, client, plan},
    errors::Result,
};
use chrono::NaiveDate;
use sea_orm::{QueryOrder, Select, SelectTwo, prelude::*};
use serde::{Deserialize, Serialize};

/// A completed plan with its owner's username
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanAreaDetailsDto {
    /// Plan id
    #[serde(rename = "planID")]
    pub plan_id: i64,
    /// Owning client
    #[serde(rename = "clientID")]
    pub client_id: i64,
    /// Owner's username
    pub username: String,
    /// Cultivated area in square metres
    pub area: f64,
}

/// The winning plan together with the nearest upcoming prize
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanWinnerDto {
    /// Winning plan, flattened into the response
    #[serde(flatten)]
    pub plan: PlanAreaDetailsDto,
    /// Nearest upcoming prize, if any
    pub prize: Option<PrizeDto>,
}

fn ranked_completed_plans() -> SelectTwo<plan::Entity, client::Entity> {
    let completed: Select<plan::Entity> = Plan::find().filter(plan::Column::IsCompleted.eq(true));
    completed
        .find_also_related(Client)
        .order_by_desc(plan::Column::Area)
        .order_by_asc(plan::Column::Id)
}

fn to_details((plan, client): (plan::Model, Option<client::Model>)) -> PlanAreaDetailsDto {
    PlanAreaDetailsDto {
        plan_id: plan.id,
        client_id: plan.client_id,
        username: client.map(|c| c.username).unwrap_or_default(),
        area: plan.area,
    }
}

/// Retrieves completed plans by area descending, ties broken by plan id.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_plans_ordered_by_area(db: &DatabaseConnection) -> Result<Vec<PlanAreaDetailsDto>> {
    let rows = ranked_completed_plans().all(db).await?;
    Ok(rows.into_iter().map(to_details).collect())
}

/// Picks the completed plan with the largest area and attaches the prize
/// nearest to `today`, if any.
///
/// Returns `None` when no plan is completed.
///
/// # Errors
/// Returns an error if a database query fails.
pub async fn produce_winner(
    db: &DatabaseConnection,
    today: NaiveDate,
) -> Result<Option<PlanWinnerDto>> {
    let Some(row) = ranked_completed_plans().one(db).await? else {
        return Ok(None);
    };

    let prize = get_nearest_prize(db, today).await?;
    Ok(Some(PlanWinnerDto {
        plan: to_details(row),
        prize,
    }))
}
