//! Budget analysis types.
//!
//! Unlike itinerary generation there is no deterministic substitute for a
//! personalized spending analysis, so this path has no fallback: any
//! gateway or parse failure surfaces to the caller as [`AnalysisError`].

use serde::{Deserialize, Serialize};

use crate::providers::GatewayError;

/// One recorded expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Spending category, e.g. `交通`.
    pub category: String,
    /// Amount spent, currency units.
    pub amount: f64,
}

/// Structured spending analysis returned by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetAnalysis {
    /// Narrative assessment of spending so far.
    pub analysis: String,
    /// Per-category totals with percentage of budget.
    pub category_breakdown: Vec<CategoryShare>,
    /// Budget remaining after recorded expenses.
    pub remaining: f64,
    /// Actionable saving suggestions.
    pub suggestions: Vec<String>,
}

/// One category's share of spending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    /// Category name.
    pub category: String,
    /// Amount spent in this category.
    pub amount: f64,
    /// Share of the total budget, 0–100.
    pub percentage: f64,
}

/// Budget analysis failure, surfaced to the caller as-is.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// The model call itself failed.
    #[error("budget analysis failed: {0}")]
    Gateway(#[from] GatewayError),
    /// The model answered, but not with parseable analysis JSON.
    #[error("budget analysis returned invalid JSON: {0}")]
    InvalidResponse(String),
}
