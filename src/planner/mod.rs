//! The itinerary generation and budget analysis pipeline.
//!
//! [`TripPlanner`] is the crate's public boundary. Generation composes
//! prompt construction, the model gateway, response repair, and shape
//! validation — and converts every failure along that path into a call to
//! the deterministic synthesizer, so `generate_itinerary` never fails for
//! a well-formed request. Budget analysis takes the same gateway but
//! surfaces failures unchanged.

use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::GatewayConfig;
use crate::itinerary::{Itinerary, Provenance, TripRequest};
use crate::kb::KnowledgeBase;
use crate::providers::gateway::ModelGateway;
use crate::providers::{ChatRequest, GatewayError};

pub mod analysis;
pub mod costs;
pub mod prompt;
pub mod repair;
pub mod synthesizer;

use analysis::{AnalysisError, BudgetAnalysis, Expense};
use costs::CostPlan;
use repair::ParseError;

/// Why one model-path attempt produced no usable itinerary. Internal:
/// every variant becomes a fallback-synthesis call.
#[derive(Debug, thiserror::Error)]
enum GenerationError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// The planning engine: model gateway plus knowledge base.
///
/// Stateless across calls; the knowledge base is read-only and shared.
#[derive(Debug, Clone)]
pub struct TripPlanner {
    gateway: ModelGateway,
    kb: Arc<KnowledgeBase>,
    config: GatewayConfig,
}

impl TripPlanner {
    /// Create a planner from a configured gateway and catalog.
    pub fn new(gateway: ModelGateway, kb: Arc<KnowledgeBase>, config: GatewayConfig) -> Self {
        Self {
            gateway,
            kb,
            config,
        }
    }

    /// The shared destination catalog.
    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    /// Generate a complete itinerary for the request.
    ///
    /// Never fails for a well-formed request: when no provider is
    /// configured, or the model call or its output is unusable in any
    /// way, the deterministic synthesizer supplies an equivalent
    /// itinerary. The result's [`Provenance`] records which path ran;
    /// its public shape does not.
    pub async fn generate_itinerary(&self, request: &TripRequest) -> Itinerary {
        let request_id = Uuid::new_v4();

        if !self.gateway.is_configured() {
            // Demo mode, not an error.
            debug!(%request_id, destination = %request.destination, "no model provider configured; synthesizing");
            return synthesizer::synthesize(request, &self.kb);
        }

        match self.model_itinerary(request).await {
            Ok(itinerary) => {
                info!(
                    %request_id,
                    destination = %request.destination,
                    days = request.days,
                    provenance = Provenance::Model.as_str(),
                    "itinerary generated"
                );
                itinerary
            }
            Err(error) => {
                warn!(
                    %request_id,
                    destination = %request.destination,
                    %error,
                    provenance = Provenance::Synthesized.as_str(),
                    "model path failed; falling back to synthesis"
                );
                synthesizer::synthesize(request, &self.kb)
            }
        }
    }

    /// Run the model path end to end: prompt, complete, repair, validate.
    async fn model_itinerary(&self, request: &TripRequest) -> Result<Itinerary, GenerationError> {
        let plan = CostPlan::allocate(request.budget, request.days);
        let chat = ChatRequest {
            system: prompt::ITINERARY_SYSTEM.to_owned(),
            user: prompt::itinerary_prompt(request, &plan),
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
            json_mode: true,
            model_override: None,
        };

        let raw = self.gateway.complete(&chat).await?;
        let mut itinerary: Itinerary = repair::parse_with_repair(&raw)?;
        repair::validate_shape(&mut itinerary, request)?;

        // Model totals are not reconciled against the budget; large drift
        // is only made visible to operators.
        let drift = (itinerary.estimated_costs.total - request.budget).abs();
        if drift > request.budget * 0.10 {
            warn!(
                destination = %request.destination,
                budget = request.budget,
                model_total = itinerary.estimated_costs.total,
                "model itinerary total drifts from requested budget"
            );
        }

        itinerary.provenance = Provenance::Model;
        Ok(itinerary)
    }

    /// Analyze recorded expenses against the total budget.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError`] when the gateway fails (including when no
    /// provider is configured) or the model's answer is not strict
    /// analysis JSON. There is no fallback for this operation; the caller
    /// is expected to surface the error and allow a retry.
    pub async fn analyze_budget(
        &self,
        expenses: &[Expense],
        total_budget: f64,
    ) -> Result<BudgetAnalysis, AnalysisError> {
        let chat = ChatRequest {
            system: prompt::ANALYSIS_SYSTEM.to_owned(),
            user: prompt::budget_prompt(expenses, total_budget),
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
            json_mode: true,
            model_override: Some(self.config.analysis_model.clone()),
        };

        let raw = self.gateway.complete(&chat).await?;
        let result = repair::parse_strict::<BudgetAnalysis>(&raw)
            .map_err(|e| AnalysisError::InvalidResponse(e.to_string()));
        if result.is_ok() {
            info!(expenses = expenses.len(), total_budget, "budget analysis complete");
        }
        result
    }
}
