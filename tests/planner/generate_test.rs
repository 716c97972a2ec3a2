//! End-to-end generation scenarios: model path, fallback path, and the
//! always-succeed contract.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use wayfarer::config::GatewayConfig;
use wayfarer::itinerary::{MealKind, Provenance, TripRequest};
use wayfarer::kb::KnowledgeBase;
use wayfarer::planner::synthesizer::synthesize_on;
use wayfarer::planner::TripPlanner;
use wayfarer::providers::gateway::ModelGateway;
use wayfarer::providers::{ChatProvider, ChatRequest, GatewayError};

/// A scripted provider: always answers with the same canned outcome.
struct StubProvider {
    reply: StubReply,
}

enum StubReply {
    Text(String),
    Auth,
    ServerError,
}

#[async_trait]
impl ChatProvider for StubProvider {
    async fn complete(&self, _request: &ChatRequest) -> Result<String, GatewayError> {
        match &self.reply {
            StubReply::Text(text) => Ok(text.clone()),
            StubReply::Auth => Err(GatewayError::Auth("invalid api key".to_owned())),
            StubReply::ServerError => Err(GatewayError::HttpStatus {
                status: 500,
                body: "internal error".to_owned(),
            }),
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

fn request(destination: &str, days: u32) -> TripRequest {
    TripRequest {
        destination: destination.to_owned(),
        days,
        budget: 3000.0,
        travelers: 2,
        preferences: vec![],
        additional_info: None,
    }
}

#[tokio::test]
async fn unconfigured_gateway_synthesizes_from_catalog() {
    let planner = planner_with(None);
    let req = request("南京", 3);

    let itinerary = planner.generate_itinerary(&req).await;

    assert_eq!(itinerary.provenance, Provenance::Synthesized);
    assert_eq!(itinerary.days.len(), 3);
    assert_eq!(itinerary.estimated_costs.total, 3000.0);

    // Attractions come from the 南京 catalog via modular rotation.
    let kb = KnowledgeBase::builtin();
    let guide = kb.guide("南京").expect("南京 is cataloged");
    assert_eq!(itinerary.days[0].activities[0].name, guide.attractions[0].name);
    assert_eq!(itinerary.days[1].activities[0].name, guide.attractions[1].name);
}

#[tokio::test]
async fn unknown_destination_still_succeeds_with_placeholders() {
    let planner = planner_with(None);
    let req = request("火星", 3);

    let itinerary = planner.generate_itinerary(&req).await;

    assert_eq!(itinerary.provenance, Provenance::Synthesized);
    assert_eq!(itinerary.days.len(), 3);
    assert_eq!(itinerary.estimated_costs.total, 3000.0);
    for day in &itinerary.days {
        assert_eq!(day.activities.len(), 3);
        assert_eq!(day.meals.len(), 3);
        assert!(day.activities[0].name.contains("火星"));
    }
}

#[tokio::test]
async fn braceless_model_reply_falls_back_without_error() {
    let planner = planner_with(Some(StubReply::Text(
        "抱歉，我暂时无法生成行程，请稍后再试。".to_owned(),
    )));
    let req = request("南京", 3);

    let itinerary = planner.generate_itinerary(&req).await;

    assert_eq!(itinerary.provenance, Provenance::Synthesized);
    assert_eq!(itinerary.days.len(), 3);
    assert_eq!(itinerary.estimated_costs.total, 3000.0);
}

#[tokio::test]
async fn auth_failure_falls_back_without_error() {
    let planner = planner_with(Some(StubReply::Auth));
    let itinerary = planner.generate_itinerary(&request("南京", 2)).await;
    assert_eq!(itinerary.provenance, Provenance::Synthesized);
    assert_eq!(itinerary.days.len(), 2);
}

#[tokio::test]
async fn upstream_failure_falls_back_without_error() {
    let planner = planner_with(Some(StubReply::ServerError));
    let itinerary = planner.generate_itinerary(&request("杭州", 2)).await;
    assert_eq!(itinerary.provenance, Provenance::Synthesized);
    assert_eq!(itinerary.days.len(), 2);
}

#[tokio::test]
async fn valid_model_reply_is_used_and_marked_model_generated() {
    // Serialize a structurally complete itinerary and hand it back from
    // the stub wrapped in prose and a code fence.
    let kb = KnowledgeBase::builtin();
    let req = request("南京", 2);
    let start = NaiveDate::from_ymd_opt(2025, 4, 1).expect("valid date");
    let mut canned = synthesize_on(&req, &kb, start);
    canned.days[0].meals.reverse(); // model may emit meals out of order
    let body = serde_json::to_string(&canned).expect("serializes");
    let reply = format!("好的，行程如下：\n```json\n{body}\n```\n祝旅途愉快！");

    let planner = planner_with(Some(StubReply::Text(reply)));
    let itinerary = planner.generate_itinerary(&req).await;

    assert_eq!(itinerary.provenance, Provenance::Model);
    assert_eq!(itinerary.days.len(), 2);
    // Validation restored canonical meal order.
    let kinds: Vec<MealKind> = itinerary.days[0].meals.iter().map(|m| m.meal_type).collect();
    assert_eq!(kinds, MealKind::ORDER.to_vec());
    assert_eq!(itinerary.overview, canned.overview);
}

#[tokio::test]
async fn model_reply_with_wrong_day_count_falls_back() {
    let kb = KnowledgeBase::builtin();
    let start = NaiveDate::from_ymd_opt(2025, 4, 1).expect("valid date");
    let two_days = synthesize_on(&request("南京", 2), &kb, start);
    let body = serde_json::to_string(&two_days).expect("serializes");

    let planner = planner_with(Some(StubReply::Text(body)));
    let req = request("南京", 3);
    let itinerary = planner.generate_itinerary(&req).await;

    assert_eq!(itinerary.provenance, Provenance::Synthesized);
    assert_eq!(itinerary.days.len(), 3);
}
