//! Prize entity - A scheduled award.
//!
//! The unique index on `date` enforces one prize per calendar date.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Prize database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "prizes")]
pub struct Model {
    /// Unique identifier for the prize
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Award date, at most one prize per date
    #[sea_orm(unique)]
    pub date: Date,
    /// Prize amount
    pub prize_money: f64,
    /// Short title
    pub title: Option<String>,
    /// Longer description
    pub description: Option<String>,
    /// When the prize was scheduled
    pub created_at: DateTime,
}

/// `Prize` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
