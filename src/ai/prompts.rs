//! Prompt builders and response cleanup.

use crate::core::plan::PlanInputDto;

/// Prompt for `GET /Tip`
pub const TIP_PROMPT: &str = "Give one short, practical agriculture tip for a home or \
small-farm grower. Answer in two sentences at most, without any preamble.";

/// Prompt for `GET /Suggestion`
pub const SUGGESTION_PROMPT: &str = "Suggest one crop or gardening project that suits a \
beginner with limited space and water. Explain briefly why, in at most three sentences.";

const PLAN_SCHEMA: &str = r#"{
  "plantName": "string",
  "irrigationSystem": "string",
  "estimatedCost": number,
  "expectedYield": "string",
  "summary": "string",
  "materials": ["string"],
  "farmingTools": ["string"],
  "timeline": {
    "firstMonth": ["string"],
    "secondMonth": ["string"],
    "thirdMonth": ["string"]
  }
}"#;

/// Builds the structured plan-generation prompt.
#[must_use]
pub fn plan_prompt(input: &PlanInputDto) -> String {
    let mut conditions = vec![
        format!("Location: {}", input.location),
        format!("Soil type: {}", input.soil_type),
        format!("Water source: {}", input.water_source),
        format!("Space type: {}", input.space_type),
    ];
    if let Some(budget) = input.budget {
        conditions.push(format!("Budget: {budget}"));
    }
    if let Some(season) = input.season.as_deref().filter(|s| !s.trim().is_empty()) {
        conditions.push(format!("Season: {season}"));
    }
    if let Some(plant) = input
        .preferred_plant
        .as_deref()
        .filter(|p| !p.trim().is_empty())
    {
        conditions.push(format!("Preferred plant: {plant}"));
    }

    format!(
        "You are an agricultural planner. Recommend the single best plant to grow \
         for the following conditions.\n{}\n\
         Respond with JSON only, matching exactly this shape:\n{PLAN_SCHEMA}",
        conditions.join("\n")
    )
}

/// Removes surrounding whitespace and Markdown code fences from a model answer.
#[must_use]
pub fn strip_code_fences(text: &str) -> &str {
    text.trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim()
}
