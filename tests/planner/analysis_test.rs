//! Budget analysis: strict parse, no fallback.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use wayfarer::config::GatewayConfig;
use wayfarer::kb::KnowledgeBase;
use wayfarer::planner::analysis::{AnalysisError, Expense};
use wayfarer::planner::TripPlanner;
use wayfarer::providers::gateway::ModelGateway;
use wayfarer::providers::{ChatProvider, ChatRequest, GatewayError};

struct StubProvider {
    reply: StubReply,
}

enum StubReply {
    Text(String),
    Auth,
}

#[async_trait]
impl ChatProvider for StubProvider {
    async fn complete(&self, _request: &ChatRequest) -> Result<String, GatewayError> {
        match &self.reply {
            StubReply::Text(text) => Ok(text.clone()),
            StubReply::Auth => Err(GatewayError::Auth("invalid api key".to_owned())),
        }
    }

    fn name(&self) -> &'static str {
        "stub"
    }

    fn model(&self) -> &str {
        "stub-model"
    }
}

fn planner_with(reply: Option<StubReply>) -> TripPlanner {
    let providers: Vec<Arc<dyn ChatProvider>> = match reply {
        Some(reply) => vec![Arc::new(StubProvider { reply })],
        None => vec![],
    };
    let gateway = ModelGateway::with_providers(providers, Duration::from_secs(5));
    TripPlanner::new(
        gateway,
        Arc::new(KnowledgeBase::builtin()),
        GatewayConfig::default(),
    )
}

fn sample_expenses() -> Vec<Expense> {
    vec![Expense {
        category: "交通".to_owned(),
        amount: 500.0,
    }]
}

#[tokio::test]
async fn auth_failure_surfaces_no_fallback_value() {
    let planner = planner_with(Some(StubReply::Auth));
    let result = planner.analyze_budget(&sample_expenses(), 3000.0).await;

    match result {
        Err(AnalysisError::Gateway(e)) => assert!(e.is_auth()),
        other => panic!("expected surfaced auth failure, got {other:?}"),
    }
}

#[tokio::test]
async fn unconfigured_gateway_surfaces_unavailable() {
    let planner = planner_with(None);
    let result = planner.analyze_budget(&sample_expenses(), 3000.0).await;

    assert!(matches!(
        result,
        Err(AnalysisError::Gateway(GatewayError::Unavailable))
    ));
}

#[tokio::test]
async fn non_json_reply_is_invalid_response() {
    let planner = planner_with(Some(StubReply::Text("我无法分析。".to_owned())));
    let result = planner.analyze_budget(&sample_expenses(), 3000.0).await;
    assert!(matches!(result, Err(AnalysisError::InvalidResponse(_))));
}

#[tokio::test]
async fn almost_json_is_not_repaired() {
    // Trailing comma: generation would repair this, analysis must not.
    let reply = "{\"analysis\": \"ok\", \"categoryBreakdown\": [], \"remaining\": 2500, \"suggestions\": [],}";
    let planner = planner_with(Some(StubReply::Text(reply.to_owned())));
    let result = planner.analyze_budget(&sample_expenses(), 3000.0).await;
    assert!(matches!(result, Err(AnalysisError::InvalidResponse(_))));
}

#[tokio::test]
async fn valid_reply_parses_into_analysis() {
    let reply = r#"{
        "analysis": "目前花费合理，交通占比较高。",
        "categoryBreakdown": [
            {"category": "交通", "amount": 500, "percentage": 16.7}
        ],
        "remaining": 2500,
        "suggestions": ["提前订票可以节省交通费用"]
    }"#;
    let planner = planner_with(Some(StubReply::Text(reply.to_owned())));

    let analysis = planner
        .analyze_budget(&sample_expenses(), 3000.0)
        .await
        .expect("analysis should parse");

    assert_eq!(analysis.remaining, 2500.0);
    assert_eq!(analysis.category_breakdown.len(), 1);
    assert_eq!(analysis.category_breakdown[0].category, "交通");
    assert_eq!(analysis.suggestions.len(), 1);
}
