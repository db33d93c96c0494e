//! Generative-AI integration.
//!
//! The HTTP layer only sees [`AiProvider`]; the production implementation is
//! [`gemini::GeminiClient`], built once at startup and shared behind an `Arc`.

pub mod gemini;
pub mod prompts;

use crate::{
    core::plan::{PlanInputDto, PlanOutputDto},
    errors::Result,
};
use async_trait::async_trait;

/// A text-generation backend
#[async_trait]
pub trait AiProvider: Send + Sync {
    /// Produces a plan recommendation for the given input.
    ///
    /// Returns `None` when the provider answered with nothing usable.
    async fn generate_plan(&self, input: &PlanInputDto) -> Result<Option<PlanOutputDto>>;

    /// Answers a free-form prompt.
    async fn ask(&self, prompt: &str) -> Result<String>;

    /// Returns a short agriculture tip.
    async fn tip(&self) -> Result<String>;

    /// Returns an agriculture suggestion.
    async fn suggestion(&self) -> Result<String>;
}
