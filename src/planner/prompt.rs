//! Prompt construction for the generative model.
//!
//! Deterministic string templates, no I/O. The itinerary prompt embeds a
//! fully worked JSON example whose cost fields are computed from the same
//! request via the cost allocator, so the example can never anchor the
//! model on numbers incompatible with the requested budget or day count.

use std::fmt::Write as _;

use serde_json::json;

use crate::itinerary::TripRequest;

use super::analysis::Expense;
use super::costs::CostPlan;

/// System persona for itinerary generation.
pub const ITINERARY_SYSTEM: &str = "你是专业的旅行规划师,擅长制定详细完整的旅行计划。\
    请生成包含交通、住宿、景点、餐厅等所有必要信息的完整行程,以 JSON 格式返回。";

/// System persona for budget analysis.
pub const ANALYSIS_SYSTEM: &str = "你是一个专业的旅行预算顾问，能够分析开销并提供实用的预算建议。";

/// Format a currency amount, dropping the fraction when whole.
fn yuan(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{amount:.0}")
    } else {
        format!("{amount}")
    }
}

/// Build the itinerary-generation prompt for one request.
pub fn itinerary_prompt(request: &TripRequest, plan: &CostPlan) -> String {
    let preferences = if request.preferences.is_empty() {
        "无特殊偏好".to_owned()
    } else {
        request.preferences.join("、")
    };

    let mut prompt = String::new();
    let _ = write!(
        prompt,
        "请为以下旅行需求生成详细完整的旅行计划：\n\n\
         【旅行需求】\n\
         目的地：{dest}\n\
         旅行天数：{days} 天\n\
         总预算：{budget} 元\n\
         同行人数：{travelers} 人\n\
         旅行偏好：{preferences}\n",
        dest = request.destination,
        days = request.days,
        budget = yuan(request.budget),
        travelers = request.travelers,
    );
    if let Some(notes) = request
        .additional_info
        .as_deref()
        .filter(|s| !s.trim().is_empty())
    {
        let _ = writeln!(prompt, "补充信息：{notes}");
    }

    let _ = write!(
        prompt,
        "\n【输出要求】\n\
         请生成包含以下完整信息的旅行计划,以 JSON 格式返回：\n\n\
         1. 行程概述 (overview)：简要介绍这次旅行的亮点和特色\n\n\
         2. 每日详细安排 (days)：每天必须恰好包含 3 个活动和 3 餐推荐\n\
            - 上午活动（09:00）：景点名称、详细描述、具体地址、停留时长、门票费用\n\
            - 下午活动（14:00）：景点名称、详细描述、具体地址、停留时长、门票费用\n\
            - 晚间活动（18:00-19:00）：夜游景点或娱乐活动\n\
            - 三餐推荐 (meals)：type 依次为 breakfast、lunch、dinner,\
         包含餐厅名称、菜系、人均消费、具体位置\n\n\
         3. 住宿方案 (accommodation)：推荐不同档次的酒店,包含名称、类型、位置、\
         每晚价格、入住晚数、总价、设施\n\n\
         4. 交通安排 (transportation)：如何到达{dest}、返程方式、市内交通\n\n\
         5. 详细费用预算 (estimatedCosts)：住宿、交通、餐饮、门票、其他,总计须等于预算\n\n\
         6. 实用建议 (tips)：季节、天气、物品、安全等提示\n\n\
         请确保：\n\
         ✓ 所有景点、餐厅都是{dest}的真实地点\n\
         ✓ 时间安排合理,考虑交通时间和休息\n\
         ✓ 费用估算准确,总计等于{budget}元预算\n\
         ✓ 考虑{preferences}等偏好\n\
         ✓ 适合{travelers}人同行\n\
         ✓ days 数组长度必须等于 {days}\n\
         ✓ 提供具体地址和坐标\n\n\
         JSON 格式示例：\n{example}\n",
        dest = request.destination,
        days = request.days,
        budget = yuan(request.budget),
        travelers = request.travelers,
        example = worked_example(request, plan),
    );

    prompt
}

/// One complete example itinerary, serialized pretty, with every cost
/// field derived from the allocator output for this request.
fn worked_example(request: &TripRequest, plan: &CostPlan) -> String {
    let nights = request.nights();
    let slots = f64::from(request.days) * 3.0;
    let per_meal = (plan.meals / slots).round();
    let per_activity = (plan.activities / slots).round();
    let leg_cost = (plan.transportation * 0.4).round();

    let example = json!({
        "overview": format!(
            "这是一次充满文化与美食的{} {}日游...",
            request.destination, request.days
        ),
        "days": [
            {
                "day": 1,
                "date": "2025-01-01",
                "activities": [
                    {
                        "time": "09:00",
                        "name": "具体景点名称",
                        "description": "详细介绍景点特色、历史、看点等",
                        "location": "完整地址（区+街道+门牌号）",
                        "coordinates": {"lat": 32.0665, "lng": 118.8481},
                        "duration": "2.5小时",
                        "cost": per_activity,
                    }
                ],
                "meals": [
                    {
                        "type": "breakfast",
                        "time": "08:00",
                        "restaurant": "餐厅全称",
                        "cuisine": "菜系类型",
                        "location": "具体地址",
                        "specialties": ["招牌菜1", "招牌菜2"],
                        "estimatedCost": per_meal,
                        "description": "餐厅特色介绍",
                    },
                    {
                        "type": "lunch",
                        "time": "12:30",
                        "restaurant": "餐厅全称",
                        "cuisine": "菜系类型",
                        "location": "具体地址",
                        "specialties": ["招牌菜1", "招牌菜2"],
                        "estimatedCost": per_meal,
                        "description": "餐厅特色介绍",
                    },
                    {
                        "type": "dinner",
                        "time": "18:30",
                        "restaurant": "餐厅全称",
                        "cuisine": "菜系类型",
                        "location": "具体地址",
                        "specialties": ["招牌菜1", "招牌菜2"],
                        "estimatedCost": per_meal,
                        "description": "餐厅特色介绍",
                    }
                ]
            }
        ],
        "accommodation": [
            {
                "name": "酒店全称",
                "type": "舒适型酒店",
                "location": "具体地址",
                "pricePerNight": plan.price_per_night,
                "totalNights": nights,
                "totalCost": plan.accommodation,
                "amenities": ["免费WiFi", "含早餐", "健身房", "免费停车"],
                "rating": 4.5,
                "description": "酒店特色介绍",
            }
        ],
        "transportation": {
            "arrival": {
                "method": "高铁",
                "details": format!("从出发地到{},约2小时", request.destination),
                "estimatedCost": leg_cost,
            },
            "departure": {
                "method": "高铁",
                "details": format!("从{}返回,约2小时", request.destination),
                "estimatedCost": leg_cost,
            },
            "localTransport": [
                {
                    "type": "地铁",
                    "description": "市内主要景点都有地铁直达",
                    "dailyCost": 20,
                },
                {
                    "type": "出租车",
                    "description": "偏远景点或夜间使用",
                    "estimatedCost": 100,
                }
            ]
        },
        "estimatedCosts": {
            "accommodation": plan.accommodation,
            "transportation": plan.transportation,
            "meals": plan.meals,
            "activities": plan.activities,
            "miscellaneous": plan.miscellaneous,
            "total": request.budget,
            "breakdown": "详细费用说明...",
        },
        "tips": [
            "最佳旅游季节建议",
            "当地天气注意事项",
            "必带物品清单",
            "安全和健康提示",
        ],
    });

    serde_json::to_string_pretty(&example).unwrap_or_else(|_| example.to_string())
}

/// Build the budget-analysis prompt.
pub fn budget_prompt(expenses: &[Expense], total_budget: f64) -> String {
    let spent = expenses
        .iter()
        .map(|e| format!("{}: {}元", e.category, yuan(e.amount)))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "请分析以下旅行开销,并提供预算建议：\n\n\
         总预算：{budget} 元\n\
         已花费：{spent}\n\n\
         请提供：\n\
         1. 预算使用分析\n\
         2. 各类别开销占比\n\
         3. 剩余预算建议\n\
         4. 省钱建议\n\n\
         以 JSON 格式返回：\n\
         {{\n\
         \x20 \"analysis\": \"总体分析\",\n\
         \x20 \"categoryBreakdown\": [{{\"category\": \"类别\", \"amount\": 100, \"percentage\": 10}}],\n\
         \x20 \"remaining\": 5000,\n\
         \x20 \"suggestions\": [\"建议1\", \"建议2\"]\n\
         }}",
        budget = yuan(total_budget),
    )
}
