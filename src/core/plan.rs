//! Plan business logic - Handles plans together with their nested input and output.
//!
//! A plan is stored across several tables: the plan row, one input row, one
//! output row, and the output's suggested items and timeline steps. Every write
//! touching more than one of them runs inside a single database transaction, and
//! reads reassemble the nested [`PlanDto`] shape the API exposes.

use crate::{
    entities::{
        Client, OutputItem, Plan, PlanInput, PlanOutput, Support, TimelineStep, output_item, plan,
        plan_input, plan_output, support, timeline_step,
    },
    errors::{Error, Result},
};
use chrono::NaiveDateTime;
use sea_orm::{
    ConnectionTrait, QueryOrder, QuerySelect, Set, TransactionTrait, prelude::*, sea_query::Expr,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const MATERIAL: &str = "material";
const FARMING_TOOL: &str = "farming_tool";

/// Message returned when a plan is written without both sub-documents.
pub const PLAN_DETAILS_REQUIRED: &str = "Plan data, Output, and Input are required.";

/// Agricultural parameters a plan is built from.
///
/// Also the request body of the AI plan generator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlanInputDto {
    /// City or region of the plot
    pub location: String,
    /// Soil description
    pub soil_type: String,
    /// Where irrigation water comes from
    pub water_source: String,
    /// Kind of space being cultivated
    pub space_type: String,
    /// Available budget
    pub budget: Option<f64>,
    /// Planting season
    pub season: Option<String>,
    /// Plant the client would like to grow
    pub preferred_plant: Option<String>,
}

/// Suggested steps for the first three months
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimelineDto {
    /// Steps for month one
    pub first_month: Vec<String>,
    /// Steps for month two
    pub second_month: Vec<String>,
    /// Steps for month three
    pub third_month: Vec<String>,
}

impl TimelineDto {
    fn months(&self) -> [(i32, &Vec<String>); 3] {
        [
            (1, &self.first_month),
            (2, &self.second_month),
            (3, &self.third_month),
        ]
    }
}

/// Recommendation attached to a plan, usually produced by the AI provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlanOutputDto {
    /// Recommended plant
    pub plant_name: String,
    /// Recommended irrigation system
    pub irrigation_system: String,
    /// Estimated total cost
    pub estimated_cost: Option<f64>,
    /// Free-text yield expectation
    pub expected_yield: Option<String>,
    /// Short overview of the recommendation
    pub summary: Option<String>,
    /// Suggested material names
    pub materials: Vec<String>,
    /// Suggested farming tool names
    pub farming_tools: Vec<String>,
    /// Three-month timeline
    pub timeline: TimelineDto,
}

/// A plan with its input and output
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlanDto {
    /// Plan id, zero before the plan is stored
    #[serde(rename = "planID")]
    pub plan_id: i64,
    /// Owning client
    #[serde(rename = "clientID")]
    pub client_id: i64,
    /// Cultivated area in square metres
    pub area: f64,
    /// Whether the plan is finished
    pub is_completed: bool,
    /// Creation time, set by the store
    pub created_at: Option<NaiveDateTime>,
    /// Agricultural parameters
    pub input: Option<PlanInputDto>,
    /// Recommendation
    pub output: Option<PlanOutputDto>,
}

/// Lightweight projection of a plan for dashboards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummaryDto {
    /// Plan id
    #[serde(rename = "planID")]
    pub plan_id: i64,
    /// Owning client
    #[serde(rename = "clientID")]
    pub client_id: i64,
    /// Recommended plant, if the output exists
    pub plant_name: Option<String>,
    /// Cultivated area in square metres
    pub area: f64,
    /// Whether the plan is finished
    pub is_completed: bool,
    /// Creation time
    pub created_at: NaiveDateTime,
}

impl From<plan_input::Model> for PlanInputDto {
    fn from(model: plan_input::Model) -> Self {
        Self {
            location: model.location,
            soil_type: model.soil_type,
            water_source: model.water_source,
            space_type: model.space_type,
            budget: model.budget,
            season: model.season,
            preferred_plant: model.preferred_plant,
        }
    }
}

fn output_to_dto(
    model: plan_output::Model,
    items: Vec<output_item::Model>,
    steps: Vec<timeline_step::Model>,
) -> PlanOutputDto {
    let mut dto = PlanOutputDto {
        plant_name: model.plant_name,
        irrigation_system: model.irrigation_system,
        estimated_cost: model.estimated_cost,
        expected_yield: model.expected_yield,
        summary: model.summary,
        ..Default::default()
    };

    for item in items {
        match item.kind.as_str() {
            MATERIAL => dto.materials.push(item.name),
            FARMING_TOOL => dto.farming_tools.push(item.name),
            _ => {}
        }
    }

    for step in steps {
        match step.month {
            1 => dto.timeline.first_month.push(step.step),
            2 => dto.timeline.second_month.push(step.step),
            3 => dto.timeline.third_month.push(step.step),
            _ => {}
        }
    }

    dto
}

fn require_details(dto: &PlanDto) -> Result<(&PlanInputDto, &PlanOutputDto)> {
    match (&dto.input, &dto.output) {
        (Some(input), Some(output)) => Ok((input, output)),
        _ => Err(Error::validation(PLAN_DETAILS_REQUIRED)),
    }
}

fn validate_area(area: f64) -> Result<()> {
    if !area.is_finite() || area < 0.0 {
        return Err(Error::validation("Area must be a non-negative number."));
    }
    Ok(())
}

async fn insert_details<C>(
    db: &C,
    plan_id: i64,
    input: &PlanInputDto,
    output: &PlanOutputDto,
) -> Result<()>
where
    C: ConnectionTrait,
{
    plan_input::ActiveModel {
        plan_id: Set(plan_id),
        location: Set(input.location.clone()),
        soil_type: Set(input.soil_type.clone()),
        water_source: Set(input.water_source.clone()),
        space_type: Set(input.space_type.clone()),
        budget: Set(input.budget),
        season: Set(input.season.clone()),
        preferred_plant: Set(input.preferred_plant.clone()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let stored_output = plan_output::ActiveModel {
        plan_id: Set(plan_id),
        plant_name: Set(output.plant_name.clone()),
        irrigation_system: Set(output.irrigation_system.clone()),
        estimated_cost: Set(output.estimated_cost),
        expected_yield: Set(output.expected_yield.clone()),
        summary: Set(output.summary.clone()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let items: Vec<output_item::ActiveModel> = output
        .materials
        .iter()
        .map(|name| (MATERIAL, name))
        .chain(output.farming_tools.iter().map(|name| (FARMING_TOOL, name)))
        .map(|(kind, name)| output_item::ActiveModel {
            output_id: Set(stored_output.id),
            kind: Set(kind.to_string()),
            name: Set(name.clone()),
            ..Default::default()
        })
        .collect();
    if !items.is_empty() {
        OutputItem::insert_many(items).exec(db).await?;
    }

    let mut steps = Vec::new();
    for (month, month_steps) in output.timeline.months() {
        for (position, step) in (0_i32..).zip(month_steps) {
            steps.push(timeline_step::ActiveModel {
                output_id: Set(stored_output.id),
                month: Set(month),
                position: Set(position),
                step: Set(step.clone()),
                ..Default::default()
            });
        }
    }
    if !steps.is_empty() {
        TimelineStep::insert_many(steps).exec(db).await?;
    }

    Ok(())
}

async fn delete_details<C>(db: &C, plan_id: i64) -> Result<()>
where
    C: ConnectionTrait,
{
    let output_ids: Vec<i64> = PlanOutput::find()
        .select_only()
        .column(plan_output::Column::Id)
        .filter(plan_output::Column::PlanId.eq(plan_id))
        .into_tuple()
        .all(db)
        .await?;

    if !output_ids.is_empty() {
        OutputItem::delete_many()
            .filter(output_item::Column::OutputId.is_in(output_ids.clone()))
            .exec(db)
            .await?;
        TimelineStep::delete_many()
            .filter(timeline_step::Column::OutputId.is_in(output_ids))
            .exec(db)
            .await?;
    }

    PlanOutput::delete_many()
        .filter(plan_output::Column::PlanId.eq(plan_id))
        .exec(db)
        .await?;
    PlanInput::delete_many()
        .filter(plan_input::Column::PlanId.eq(plan_id))
        .exec(db)
        .await?;
    Ok(())
}

async fn load_details<C>(db: &C, plans: Vec<plan::Model>) -> Result<Vec<PlanDto>>
where
    C: ConnectionTrait,
{
    if plans.is_empty() {
        return Ok(Vec::new());
    }

    let plan_ids: Vec<i64> = plans.iter().map(|p| p.id).collect();

    let mut inputs: HashMap<i64, plan_input::Model> = PlanInput::find()
        .filter(plan_input::Column::PlanId.is_in(plan_ids.clone()))
        .all(db)
        .await?
        .into_iter()
        .map(|input| (input.plan_id, input))
        .collect();

    let stored_outputs = PlanOutput::find()
        .filter(plan_output::Column::PlanId.is_in(plan_ids))
        .all(db)
        .await?;
    let output_ids: Vec<i64> = stored_outputs.iter().map(|o| o.id).collect();

    let mut items: HashMap<i64, Vec<output_item::Model>> = HashMap::new();
    for item in OutputItem::find()
        .filter(output_item::Column::OutputId.is_in(output_ids.clone()))
        .order_by_asc(output_item::Column::Id)
        .all(db)
        .await?
    {
        items.entry(item.output_id).or_default().push(item);
    }

    let mut steps: HashMap<i64, Vec<timeline_step::Model>> = HashMap::new();
    for step in TimelineStep::find()
        .filter(timeline_step::Column::OutputId.is_in(output_ids))
        .order_by_asc(timeline_step::Column::Month)
        .order_by_asc(timeline_step::Column::Position)
        .all(db)
        .await?
    {
        steps.entry(step.output_id).or_default().push(step);
    }

    let mut outputs: HashMap<i64, PlanOutputDto> = stored_outputs
        .into_iter()
        .map(|output| {
            let output_items = items.remove(&output.id).unwrap_or_default();
            let output_steps = steps.remove(&output.id).unwrap_or_default();
            (output.plan_id, output_to_dto(output, output_items, output_steps))
        })
        .collect();

    Ok(plans
        .into_iter()
        .map(|p| PlanDto {
            plan_id: p.id,
            client_id: p.client_id,
            area: p.area,
            is_completed: p.is_completed,
            created_at: Some(p.created_at),
            input: inputs.remove(&p.id).map(PlanInputDto::from),
            output: outputs.remove(&p.id),
        })
        .collect())
}

/// Retrieves every plan with its input and output, ordered by id.
///
/// # Errors
/// Returns an error if a database query fails.
pub async fn get_all_plans_with_details(db: &DatabaseConnection) -> Result<Vec<PlanDto>> {
    let plans = Plan::find().order_by_asc(plan::Column::Id).all(db).await?;
    load_details(db, plans).await
}

/// Retrieves one plan with its input and output, `None` when it does not exist.
///
/// # Errors
/// Returns an error if a database query fails.
pub async fn get_plan_with_details_by_id(
    db: &DatabaseConnection,
    plan_id: i64,
) -> Result<Option<PlanDto>> {
    let Some(plan) = Plan::find_by_id(plan_id).one(db).await? else {
        return Ok(None);
    };
    Ok(load_details(db, vec![plan]).await?.into_iter().next())
}

/// Retrieves the plans of one client with their inputs and outputs, ordered by id.
///
/// # Errors
/// Returns an error if a database query fails.
pub async fn get_plans_with_details_by_client_id(
    db: &DatabaseConnection,
    client_id: i64,
) -> Result<Vec<PlanDto>> {
    let plans = Plan::find()
        .filter(plan::Column::ClientId.eq(client_id))
        .order_by_asc(plan::Column::Id)
        .all(db)
        .await?;
    load_details(db, plans).await
}

/// Creates a plan for `client_id` together with its input and output.
///
/// The plan row and all of its children are written in one transaction.
///
/// # Errors
/// Returns an error if:
/// - The input or output is missing, or the area is invalid ([`Error::Validation`])
/// - The client does not exist ([`Error::NotFound`])
/// - A database operation fails
pub async fn add_plan_with_details(
    db: &DatabaseConnection,
    client_id: i64,
    dto: PlanDto,
) -> Result<PlanDto> {
    let (input, output) = require_details(&dto)?;
    validate_area(dto.area)?;

    let txn = db.begin().await?;

    if Client::find_by_id(client_id).one(&txn).await?.is_none() {
        return Err(Error::not_found(format!(
            "Client with ID {client_id} not found."
        )));
    }

    let created = plan::ActiveModel {
        client_id: Set(client_id),
        area: Set(dto.area),
        is_completed: Set(dto.is_completed),
        created_at: Set(chrono::Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    insert_details(&txn, created.id, input, output).await?;
    txn.commit().await?;

    get_plan_with_details_by_id(db, created.id)
        .await?
        .ok_or_else(|| Error::not_found(format!("Plan with ID {} not found.", created.id)))
}

/// Replaces a plan's area, completion flag, input and output.
///
/// The plan row is updated conditionally on its id and the affected-row count
/// decides existence, so there is no separate read before the write. Returns
/// `None` when no plan has the given id.
///
/// # Errors
/// Returns an error if:
/// - The input or output is missing, or the area is invalid ([`Error::Validation`])
/// - A database operation fails
pub async fn update_plan_with_details(
    db: &DatabaseConnection,
    plan_id: i64,
    dto: PlanDto,
) -> Result<Option<PlanDto>> {
    let (input, output) = require_details(&dto)?;
    validate_area(dto.area)?;

    let txn = db.begin().await?;

    let result = Plan::update_many()
        .col_expr(plan::Column::Area, Expr::value(dto.area))
        .col_expr(plan::Column::IsCompleted, Expr::value(dto.is_completed))
        .filter(plan::Column::Id.eq(plan_id))
        .exec(&txn)
        .await?;

    if result.rows_affected == 0 {
        return Ok(None);
    }

    delete_details(&txn, plan_id).await?;
    insert_details(&txn, plan_id, input, output).await?;
    txn.commit().await?;

    get_plan_with_details_by_id(db, plan_id).await
}

/// Deletes a plan with its input, output and supports.
///
/// Returns `false` when no plan has the given id.
///
/// # Errors
/// Returns an error if a database operation fails.
pub async fn delete_plan_with_details(db: &DatabaseConnection, plan_id: i64) -> Result<bool> {
    let txn = db.begin().await?;

    Support::delete_many()
        .filter(support::Column::PlanId.eq(plan_id))
        .exec(&txn)
        .await?;
    delete_details(&txn, plan_id).await?;
    let result = Plan::delete_by_id(plan_id).exec(&txn).await?;

    txn.commit().await?;
    Ok(result.rows_affected > 0)
}

/// Retrieves the summary projection of every plan, ordered by id.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_all_plan_summaries(db: &DatabaseConnection) -> Result<Vec<PlanSummaryDto>> {
    let rows = Plan::find()
        .find_also_related(PlanOutput)
        .order_by_asc(plan::Column::Id)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(plan, output)| PlanSummaryDto {
            plan_id: plan.id,
            client_id: plan.client_id,
            plant_name: output.map(|o| o.plant_name),
            area: plan.area,
            is_completed: plan.is_completed,
            created_at: plan.created_at,
        })
        .collect())
}

/// Marks a plan as completed without touching any other field.
///
/// Returns `false` when no plan has the given id.
///
/// # Errors
/// Returns an error if the database update fails.
pub async fn set_plan_completed(db: &DatabaseConnection, plan_id: i64) -> Result<bool> {
    let result = Plan::update_many()
        .col_expr(plan::Column::IsCompleted, Expr::value(true))
        .filter(plan::Column::Id.eq(plan_id))
        .exec(db)
        .await?;
    Ok(result.rows_affected > 0)
}
