//! Prize business logic - At most one prize per calendar date.
//!
//! Functions that depend on "today" take it as a parameter so the HTTP layer
//! decides the clock and tests can pin it.

use crate::{
    entities::{Prize, prize},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use sea_orm::{ConnectionTrait, QueryOrder, Set, TransactionTrait, prelude::*};
use serde::{Deserialize, Serialize};

/// Message for a prize that is both dated in the past and worth nothing.
pub const PRIZE_NOT_VALID: &str = "Data is not valid.";
/// Message for a date that already carries a prize.
pub const DATE_TAKEN: &str = "This date is already scheduled.";

/// API-facing shape of a prize
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrizeDto {
    /// Prize id
    #[serde(rename = "prizeID")]
    pub prize_id: i64,
    /// Award date
    pub date: NaiveDate,
    /// Prize amount
    pub prize_money: f64,
    /// Short title
    pub title: Option<String>,
    /// Longer description
    pub description: Option<String>,
}

impl From<prize::Model> for PrizeDto {
    fn from(model: prize::Model) -> Self {
        Self {
            prize_id: model.id,
            date: model.date,
            prize_money: model.prize_money,
            title: model.title,
            description: model.description,
        }
    }
}

/// Result of scheduling a prize
#[derive(Debug, Clone, PartialEq)]
pub enum AddPrizeOutcome {
    /// The stored prize
    Added(PrizeDto),
    /// Another prize already exists on the requested date
    DateTaken,
}

/// A prize is rejected only when it is dated before `today` and its money is not positive.
#[must_use]
pub fn is_valid_prize(dto: &PrizeDto, today: NaiveDate) -> bool {
    !(dto.date < today && dto.prize_money <= 0.0)
}

/// Inserts a prize row, reporting a clash on the date index as [`Error::Conflict`].
pub(crate) async fn insert_prize<C>(db: &C, dto: &PrizeDto) -> Result<PrizeDto>
where
    C: ConnectionTrait,
{
    let created = prize::ActiveModel {
        date: Set(dto.date),
        prize_money: Set(dto.prize_money),
        title: Set(dto.title.clone()),
        description: Set(dto.description.clone()),
        created_at: Set(chrono::Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(|e| Error::conflict_on_unique(e, DATE_TAKEN))?;
    Ok(created.into())
}

/// Schedules a prize on its date.
///
/// The date check and the insert share one transaction. A date that is already
/// taken yields [`AddPrizeOutcome::DateTaken`]; losing a race on the unique
/// date index yields [`Error::Conflict`].
///
/// # Errors
/// Returns an error if:
/// - The prize fails [`is_valid_prize`] ([`Error::Validation`])
/// - A concurrent insert claimed the date ([`Error::Conflict`])
/// - A database operation fails
pub async fn add_prize(
    db: &DatabaseConnection,
    dto: PrizeDto,
    today: NaiveDate,
) -> Result<AddPrizeOutcome> {
    if !is_valid_prize(&dto, today) {
        return Err(Error::validation(PRIZE_NOT_VALID));
    }

    let txn = db.begin().await?;

    let taken = Prize::find()
        .filter(prize::Column::Date.eq(dto.date))
        .one(&txn)
        .await?
        .is_some();
    if taken {
        return Ok(AddPrizeOutcome::DateTaken);
    }

    let created = insert_prize(&txn, &dto).await?;
    txn.commit().await?;

    Ok(AddPrizeOutcome::Added(created))
}

/// Retrieves prizes dated `today` or later, earliest first.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_coming_prizes(db: &DatabaseConnection, today: NaiveDate) -> Result<Vec<PrizeDto>> {
    let prizes = Prize::find()
        .filter(prize::Column::Date.gte(today))
        .order_by_asc(prize::Column::Date)
        .all(db)
        .await?;
    Ok(prizes.into_iter().map(PrizeDto::from).collect())
}

/// Retrieves the earliest prize dated `today` or later.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_nearest_prize(
    db: &DatabaseConnection,
    today: NaiveDate,
) -> Result<Option<PrizeDto>> {
    let prize = Prize::find()
        .filter(prize::Column::Date.gte(today))
        .order_by_asc(prize::Column::Date)
        .one(db)
        .await?;
    Ok(prize.map(PrizeDto::from))
}

/// Retrieves a prize by id.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_prize_by_id(db: &DatabaseConnection, prize_id: i64) -> Result<Option<PrizeDto>> {
    let prize = Prize::find_by_id(prize_id).one(db).await?;
    Ok(prize.map(PrizeDto::from))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn prize_on(date: NaiveDate, money: f64) -> PrizeDto {
        PrizeDto {
            date,
            prize_money: money,
            title: Some("Harvest cup".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_is_valid_prize() {
        let past = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        let future = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();

        assert!(!is_valid_prize(&prize_on(past, 0.0), today()));
        assert!(!is_valid_prize(&prize_on(past, -10.0), today()));
        assert!(is_valid_prize(&prize_on(past, 100.0), today()));
        assert!(is_valid_prize(&prize_on(future, 0.0), today()));
        assert!(is_valid_prize(&prize_on(today(), 0.0), today()));
    }

    #[tokio::test]
    async fn test_add_prize_rejects_invalid_before_database() -> Result<()> {
        let db = MockDatabase::new(DatabaseBackend::Sqlite).into_connection();
        let past = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        let result = add_prize(&db, prize_on(past, 0.0), today()).await;
        assert!(matches!(result.unwrap_err(), Error::Validation { .. }));

        Ok(())
    }

    #[tokio::test]
    async fn test_add_prize_and_date_taken() -> Result<()> {
        let db = setup_test_db().await?;
        let date = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();

        let AddPrizeOutcome::Added(created) = add_prize(&db, prize_on(date, 500.0), today()).await?
        else {
            panic!("expected the prize to be added");
        };
        assert!(created.prize_id > 0);
        assert_eq!(created.date, date);

        // Same date, any amount
        let outcome = add_prize(&db, prize_on(date, 9999.0), today()).await?;
        assert_eq!(outcome, AddPrizeOutcome::DateTaken);

        Ok(())
    }

    #[tokio::test]
    async fn test_insert_prize_unique_date_is_conflict() -> Result<()> {
        let db = setup_test_db().await?;
        let date = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();

        insert_prize(&db, &prize_on(date, 1.0)).await?;
        let result = insert_prize(&db, &prize_on(date, 2.0)).await;

        match result.unwrap_err() {
            Error::Conflict { message } => assert_eq!(message, DATE_TAKEN),
            other => panic!("expected conflict, got {other:?}"),
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_coming_and_nearest_prizes() -> Result<()> {
        let db = setup_test_db().await?;
        assert!(get_nearest_prize(&db, today()).await?.is_none());

        let past = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        let later = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        let sooner = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        for date in [past, later, sooner] {
            insert_prize(&db, &prize_on(date, 100.0)).await?;
        }

        let coming = get_coming_prizes(&db, today()).await?;
        let dates: Vec<NaiveDate> = coming.iter().map(|p| p.date).collect();
        assert_eq!(dates, vec![sooner, later]);

        let nearest = get_nearest_prize(&db, today()).await?.unwrap();
        assert_eq!(nearest.date, sooner);

        let by_id = get_prize_by_id(&db, nearest.prize_id).await?.unwrap();
        assert_eq!(by_id, nearest);
        assert!(get_prize_by_id(&db, 999).await?.is_none());

        Ok(())
    }
}
