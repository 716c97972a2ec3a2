//! Prompt construction checks.

use wayfarer::itinerary::TripRequest;
use wayfarer::planner::analysis::Expense;
use wayfarer::planner::costs::CostPlan;
use wayfarer::planner::prompt::{budget_prompt, itinerary_prompt};

fn request() -> TripRequest {
    TripRequest {
        destination: "南京".to_owned(),
        days: 3,
        budget: 3000.0,
        travelers: 2,
        preferences: vec![],
        additional_info: None,
    }
}

#[test]
fn embeds_the_request_fields() {
    let req = request();
    let plan = CostPlan::allocate(req.budget, req.days);
    let prompt = itinerary_prompt(&req, &plan);

    assert!(prompt.contains("目的地：南京"));
    assert!(prompt.contains("旅行天数：3 天"));
    assert!(prompt.contains("总预算：3000 元"));
    assert!(prompt.contains("同行人数：2 人"));
    assert!(prompt.contains("days 数组长度必须等于 3"));
}

#[test]
fn empty_preferences_use_neutral_placeholder() {
    let req = request();
    let plan = CostPlan::allocate(req.budget, req.days);
    let prompt = itinerary_prompt(&req, &plan);
    assert!(prompt.contains("无特殊偏好"));
}

#[test]
fn preferences_are_joined() {
    let mut req = request();
    req.preferences = vec!["美食".to_owned(), "历史".to_owned()];
    let plan = CostPlan::allocate(req.budget, req.days);
    let prompt = itinerary_prompt(&req, &plan);
    assert!(prompt.contains("美食、历史"));
    assert!(!prompt.contains("无特殊偏好"));
}

#[test]
fn additional_info_is_included_only_when_present() {
    let mut req = request();
    let plan = CostPlan::allocate(req.budget, req.days);
    assert!(!itinerary_prompt(&req, &plan).contains("补充信息"));

    req.additional_info = Some("带老人出行".to_owned());
    assert!(itinerary_prompt(&req, &plan).contains("补充信息：带老人出行"));
}

#[test]
fn worked_example_uses_allocator_costs() {
    let req = request();
    let plan = CostPlan::allocate(req.budget, req.days);
    let prompt = itinerary_prompt(&req, &plan);

    // 3000 over 3 days: 450/night × 2 nights, 20% transport, 30% meals.
    assert!(prompt.contains("\"pricePerNight\": 450.0"));
    assert!(prompt.contains("\"totalNights\": 2"));
    assert!(prompt.contains("\"totalCost\": 900.0"));
    assert!(prompt.contains("\"transportation\": 600.0"));
    assert!(prompt.contains("\"meals\": 900.0"));
    assert!(prompt.contains("\"total\": 3000.0"));
}

#[test]
fn worked_example_is_valid_json() {
    let req = request();
    let plan = CostPlan::allocate(req.budget, req.days);
    let prompt = itinerary_prompt(&req, &plan);

    let start = prompt.find('{').expect("example present");
    let end = prompt.rfind('}').expect("example present");
    let example: serde_json::Value =
        serde_json::from_str(&prompt[start..=end]).expect("example parses");
    assert_eq!(example["days"][0]["meals"].as_array().map(Vec::len), Some(3));
}

#[test]
fn budget_prompt_lists_expenses_and_total() {
    let expenses = vec![
        Expense {
            category: "交通".to_owned(),
            amount: 500.0,
        },
        Expense {
            category: "餐饮".to_owned(),
            amount: 300.0,
        },
    ];
    let prompt = budget_prompt(&expenses, 3000.0);

    assert!(prompt.contains("总预算：3000 元"));
    assert!(prompt.contains("交通: 500元"));
    assert!(prompt.contains("餐饮: 300元"));
    assert!(prompt.contains("categoryBreakdown"));
}
