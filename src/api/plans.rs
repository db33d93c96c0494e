//! Plan endpoints, including summaries and ranking

use super::{AppState, json_body, location};
use crate::{
    core::{
        plan::{self, PLAN_DETAILS_REQUIRED, PlanDto, PlanSummaryDto},
        ranking::{self, PlanAreaDetailsDto, PlanWinnerDto},
    },
    errors::{Error, Result},
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::Local;

fn plan_not_found(id: i64) -> Error {
    Error::not_found(format!("Plan with ID {id} not found."))
}

/// Reads a plan body, rejecting it before any database work when a
/// sub-document is missing.
fn plan_body(body: std::result::Result<Json<PlanDto>, JsonRejection>) -> Result<PlanDto> {
    let dto = json_body(body)?;
    if dto.input.is_none() || dto.output.is_none() {
        return Err(Error::validation(PLAN_DETAILS_REQUIRED));
    }
    Ok(dto)
}

/// `GET /AllPlans`
pub async fn list_plans(State(state): State<AppState>) -> Result<Json<Vec<PlanDto>>> {
    let plans = plan::get_all_plans_with_details(&state.db).await?;
    if plans.is_empty() {
        return Err(Error::not_found("No plans found."));
    }
    Ok(Json(plans))
}

/// `GET /Plan/PlanID/{id}`
pub async fn get_plan(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<PlanDto>> {
    if id <= 0 {
        return Err(Error::validation(format!("ID {id} is not valid.")));
    }

    plan::get_plan_with_details_by_id(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| plan_not_found(id))
}

/// `GET /Plan/{clientId}`
pub async fn list_client_plans(
    State(state): State<AppState>,
    Path(client_id): Path<i64>,
) -> Result<Json<Vec<PlanDto>>> {
    let plans = plan::get_plans_with_details_by_client_id(&state.db, client_id).await?;
    if plans.is_empty() {
        return Err(Error::not_found(format!(
            "No plans found for ClientID: {client_id}"
        )));
    }
    Ok(Json(plans))
}

/// `POST /Plan/{clientId}`
pub async fn add_plan(
    State(state): State<AppState>,
    Path(client_id): Path<i64>,
    body: std::result::Result<Json<PlanDto>, JsonRejection>,
) -> Result<Response> {
    let dto = plan_body(body)?;
    let created = plan::add_plan_with_details(&state.db, client_id, dto).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location(&format!("/Plan/PlanID/{}", created.plan_id)))],
        Json(created),
    )
        .into_response())
}

/// `PUT /Plan/{id}`
pub async fn update_plan(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: std::result::Result<Json<PlanDto>, JsonRejection>,
) -> Result<Json<PlanDto>> {
    let dto = plan_body(body)?;

    plan::update_plan_with_details(&state.db, id, dto)
        .await?
        .map(Json)
        .ok_or_else(|| plan_not_found(id))
}

/// `DELETE /Plan/{id}`
pub async fn delete_plan(State(state): State<AppState>, Path(id): Path<i64>) -> Result<String> {
    if plan::delete_plan_with_details(&state.db, id).await? {
        Ok(format!("Plan with ID {id} deleted successfully."))
    } else {
        Err(plan_not_found(id))
    }
}

/// `GET /Plans/summaries`
pub async fn list_plan_summaries(
    State(state): State<AppState>,
) -> Result<Json<Vec<PlanSummaryDto>>> {
    let summaries = plan::get_all_plan_summaries(&state.db).await?;
    if summaries.is_empty() {
        return Err(Error::not_found("No plans found to get summaries."));
    }
    Ok(Json(summaries))
}

/// `PUT /Plan/SetAsCompleted/{id}`
pub async fn set_plan_completed(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<&'static str> {
    if plan::set_plan_completed(&state.db, id).await? {
        Ok("Plan has been completed.")
    } else {
        Err(Error::not_found("Plan not found."))
    }
}

/// `GET /Plans/OrderByArea`
pub async fn list_plans_by_area(
    State(state): State<AppState>,
) -> Result<Json<Vec<PlanAreaDetailsDto>>> {
    let plans = ranking::get_plans_ordered_by_area(&state.db).await?;
    if plans.is_empty() {
        return Err(Error::not_found("No completed plans yet."));
    }
    Ok(Json(plans))
}

/// `GET /Plan/ProduceWinner`
pub async fn produce_winner(State(state): State<AppState>) -> Result<Json<PlanWinnerDto>> {
    let today = Local::now().date_naive();
    ranking::produce_winner(&state.db, today)
        .await?
        .map(Json)
        .ok_or_else(|| Error::not_found("No plan winner found."))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use crate::test_utils::*;
    use axum::http::{Method, StatusCode, header};
    use serde_json::{Value, json};

    async fn create_client(app: &axum::Router) -> i64 {
        let (status, body) = send(
            app,
            Method::POST,
            "/api/Ghosn/Client",
            Some(json!({ "username": "farmer", "password": "secret" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        body["clientID"].as_i64().unwrap()
    }

    fn plan_json(area: f64) -> Value {
        serde_json::to_value(sample_plan_dto(area)).unwrap()
    }

    #[tokio::test]
    async fn test_plan_crud_over_http() {
        let app = test_app().await;
        let client_id = create_client(&app).await;

        let (status, _) = send(&app, Method::GET, "/api/Ghosn/AllPlans", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let response = request(
            &app,
            Method::POST,
            &format!("/api/Ghosn/Plan/{client_id}"),
            Some(plan_json(40.0)),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let location = response.headers()[header::LOCATION].to_str().unwrap().to_string();
        let created = body_json(response).await;
        let plan_id = created["planID"].as_i64().unwrap();
        assert_eq!(location, format!("/api/Ghosn/Plan/PlanID/{plan_id}"));

        let (status, body) = send(&app, Method::GET, &location, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["output"]["plantName"], "Tomato");

        let (status, body) = send(
            &app,
            Method::GET,
            &format!("/api/Ghosn/Plan/{client_id}"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);

        let (status, body) = send(
            &app,
            Method::PUT,
            &format!("/api/Ghosn/Plan/{plan_id}"),
            Some(plan_json(80.0)),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["area"], 80.0);

        let (status, _) = send(
            &app,
            Method::DELETE,
            &format!("/api/Ghosn/Plan/{plan_id}"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send(
            &app,
            Method::DELETE,
            &format!("/api/Ghosn/Plan/{plan_id}"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_plan_requires_input_and_output() {
        let app = test_app().await;
        let client_id = create_client(&app).await;

        let mut body = plan_json(10.0);
        body.as_object_mut().unwrap().remove("output");

        let (status, text) = send(
            &app,
            Method::POST,
            &format!("/api/Ghosn/Plan/{client_id}"),
            Some(body.clone()),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(text, "Plan data, Output, and Input are required.");

        let (status, _) = send(&app, Method::PUT, "/api/Ghosn/Plan/1", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_plan_lookup_errors() {
        let app = test_app().await;

        let (status, _) = send(&app, Method::GET, "/api/Ghosn/Plan/PlanID/0", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let (status, _) = send(&app, Method::GET, "/api/Ghosn/Plan/PlanID/5", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = send(
            &app,
            Method::POST,
            "/api/Ghosn/Plan/5",
            Some(plan_json(1.0)),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = send(&app, Method::GET, "/api/Ghosn/Plans/summaries", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = send(&app, Method::PUT, "/api/Ghosn/Plan/SetAsCompleted/5", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_summaries_ranking_and_winner() {
        let app = test_app().await;
        let client_id = create_client(&app).await;

        let (status, _) = send(&app, Method::GET, "/api/Ghosn/Plan/ProduceWinner", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let mut ids = Vec::new();
        for area in [15.0, 60.0] {
            let (_, body) = send(
                &app,
                Method::POST,
                &format!("/api/Ghosn/Plan/{client_id}"),
                Some(plan_json(area)),
            )
            .await;
            ids.push(body["planID"].as_i64().unwrap());
        }

        let (status, body) = send(&app, Method::GET, "/api/Ghosn/Plans/summaries", None).await;
        assert_eq!(status, StatusCode::OK);
        let first = &body.as_array().unwrap()[0];
        let mut keys: Vec<&str> = first.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec!["area", "clientID", "createdAt", "isCompleted", "planID", "plantName"]
        );

        let (status, _) = send(&app, Method::GET, "/api/Ghosn/Plans/OrderByArea", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        for id in &ids {
            let (status, _) = send(
                &app,
                Method::PUT,
                &format!("/api/Ghosn/Plan/SetAsCompleted/{id}"),
                None,
            )
            .await;
            assert_eq!(status, StatusCode::OK);
        }

        let (status, body) = send(&app, Method::GET, "/api/Ghosn/Plans/OrderByArea", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["planID"], ids[1]);
        assert_eq!(body[0]["username"], "farmer");

        let (status, body) = send(&app, Method::GET, "/api/Ghosn/Plan/ProduceWinner", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["planID"], ids[1]);
        assert_eq!(body["area"], 60.0);
    }
}
