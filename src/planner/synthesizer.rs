//! Deterministic fallback itinerary synthesis.
//!
//! A total function over the trip request, the knowledge base, and the
//! cost allocator: it never fails, performs no I/O, and is safe to call
//! concurrently. Used whenever the model path is unavailable or its
//! output is unusable, and indistinguishable in shape from a
//! model-generated itinerary.

use chrono::{Days, NaiveDate};

use crate::itinerary::{
    AccommodationOption, Activity, CostBreakdown, DayPlan, Itinerary, LocalTransportOption,
    MealKind, MealSuggestion, Provenance, TransportLeg, TransportationPlan, TripRequest,
};
use crate::kb::{Attraction, DestinationGuide, KnowledgeBase, Restaurant};

use super::costs::CostPlan;

/// Morning/afternoon/evening activity slot times.
const ACTIVITY_TIMES: [&str; 3] = ["09:00", "14:00", "18:00"];

/// Synthesize a complete itinerary starting today.
pub fn synthesize(request: &TripRequest, kb: &KnowledgeBase) -> Itinerary {
    synthesize_on(request, kb, chrono::Local::now().date_naive())
}

/// Synthesize a complete itinerary with an explicit start date.
///
/// Exposed separately so tests can pin the calendar.
pub fn synthesize_on(request: &TripRequest, kb: &KnowledgeBase, start: NaiveDate) -> Itinerary {
    let plan = CostPlan::allocate(request.budget, request.days);
    let empty = DestinationGuide::default();
    let guide = kb.guide(&request.destination).unwrap_or(&empty);

    let days = (0..request.days as usize)
        .map(|index| build_day(request, guide, &start, index))
        .collect();

    Itinerary {
        overview: overview(request),
        days,
        accommodation: accommodation(request, &plan),
        transportation: transportation(request, &plan),
        estimated_costs: estimated_costs(request, &plan),
        tips: tips(request, guide),
        provenance: Provenance::Synthesized,
    }
}

// ---------------------------------------------------------------------------
// Days
// ---------------------------------------------------------------------------

fn build_day(
    request: &TripRequest,
    guide: &DestinationGuide,
    start: &NaiveDate,
    index: usize,
) -> DayPlan {
    let date = start
        .checked_add_days(Days::new(index as u64))
        .unwrap_or(*start);

    DayPlan {
        day: index as u32 + 1,
        date: date.format("%Y-%m-%d").to_string(),
        activities: day_activities(request, &guide.attractions, index),
        meals: day_meals(request, &guide.restaurants, index),
    }
}

/// Pick three attractions by modular rotation: slots `i`, `i+1`, `i+2`
/// (mod list length), so adjacent days overlap partially while rotating
/// through the whole catalog.
fn day_activities(request: &TripRequest, attractions: &[Attraction], index: usize) -> Vec<Activity> {
    let party = f64::from(request.travelers);

    if attractions.is_empty() {
        return placeholder_activities(request, index);
    }

    (0..3)
        .map(|slot| {
            let attraction = &attractions[(index + slot) % attractions.len()];
            Activity {
                time: ACTIVITY_TIMES[slot].to_owned(),
                name: attraction.name.clone(),
                description: attraction.description.clone(),
                location: attraction.address.clone(),
                coordinates: Some(attraction.coords),
                duration: attraction.duration.clone(),
                cost: attraction.cost * party,
            }
        })
        .collect()
}

/// Generic stand-ins for destinations missing from the catalog.
fn placeholder_activities(request: &TripRequest, index: usize) -> Vec<Activity> {
    let party = f64::from(request.travelers);
    let day_number = index + 1;
    let dest = &request.destination;

    let slots = [
        (format!("{dest}景点{day_number}-上午"), format!("探索{dest}"), 50.0, "2小时"),
        (format!("{dest}景点{day_number}-下午"), format!("继续游览{dest}"), 30.0, "2小时"),
        (format!("{dest}景点{day_number}-晚上"), format!("夜游{dest}"), 20.0, "1.5小时"),
    ];

    slots
        .into_iter()
        .enumerate()
        .map(|(slot, (name, description, cost, duration))| Activity {
            time: ACTIVITY_TIMES[slot].to_owned(),
            name,
            description,
            location: dest.clone(),
            coordinates: None,
            duration: duration.to_owned(),
            cost: cost * party,
        })
        .collect()
}

/// Same modular rotation as the activities, applied independently to the
/// restaurant list for breakfast, lunch, and dinner.
fn day_meals(request: &TripRequest, restaurants: &[Restaurant], index: usize) -> Vec<MealSuggestion> {
    let party = f64::from(request.travelers);

    if restaurants.is_empty() {
        return placeholder_meals(request);
    }

    MealKind::ORDER
        .into_iter()
        .enumerate()
        .map(|(slot, kind)| {
            let restaurant = &restaurants[(index + slot) % restaurants.len()];
            MealSuggestion {
                meal_type: kind,
                restaurant: restaurant.name.clone(),
                cuisine: restaurant.cuisine.clone(),
                location: restaurant.address.clone(),
                estimated_cost: restaurant.avg_cost * party,
                time: Some(kind.default_time().to_owned()),
                specialties: restaurant.specialties.clone(),
                description: Some(restaurant.description.clone()),
            }
        })
        .collect()
}

fn placeholder_meals(request: &TripRequest) -> Vec<MealSuggestion> {
    let dest = &request.destination;
    let stand_ins = [
        (format!("{dest}早餐店"), "本地早餐"),
        (format!("{dest}餐厅"), "本地菜"),
        (format!("{dest}美食街"), "特色小吃"),
    ];

    MealKind::ORDER
        .into_iter()
        .zip(stand_ins)
        .map(|(kind, (restaurant, cuisine))| MealSuggestion {
            meal_type: kind,
            restaurant,
            cuisine: cuisine.to_owned(),
            location: dest.clone(),
            estimated_cost: 0.0,
            time: Some(kind.default_time().to_owned()),
            specialties: Vec::new(),
            description: None,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Accommodation, transport, costs
// ---------------------------------------------------------------------------

/// Two options: a primary tier priced from the allocator and a cheaper
/// economy alternative at 70% of the nightly rate, so callers always have
/// something less expensive to show.
fn accommodation(request: &TripRequest, plan: &CostPlan) -> Vec<AccommodationOption> {
    let dest = &request.destination;
    let nights = request.nights();
    let primary_tier = if request.budget > 8000.0 {
        "四星级酒店"
    } else if request.budget > 5000.0 {
        "舒适型酒店"
    } else {
        "经济型酒店"
    };
    let economy_price = (plan.price_per_night * 0.7).round();

    vec![
        AccommodationOption {
            name: format!("{dest}市中心精品酒店"),
            tier: primary_tier.to_owned(),
            location: format!("{dest}市中心,靠近地铁站"),
            price_per_night: plan.price_per_night,
            total_nights: nights,
            total_cost: plan.accommodation,
            amenities: ["免费WiFi", "含早餐", "24小时热水", "空调", "电视", "独立卫浴"]
                .iter()
                .map(|s| (*s).to_owned())
                .collect(),
            rating: Some(4.2),
            description: Some(
                "位于市中心交通便利区域,步行可达多个景点,周边餐饮购物齐全。".to_owned(),
            ),
        },
        AccommodationOption {
            name: format!("{dest}商务连锁酒店"),
            tier: "经济型连锁酒店".to_owned(),
            location: format!("{dest}交通枢纽附近"),
            price_per_night: economy_price,
            total_nights: nights,
            total_cost: economy_price * f64::from(nights),
            amenities: ["免费WiFi", "24小时前台", "空调"]
                .iter()
                .map(|s| (*s).to_owned())
                .collect(),
            rating: Some(3.8),
            description: Some("经济实惠的选择,基础设施完善,位置优越。".to_owned()),
        },
    ]
}

fn transportation(request: &TripRequest, plan: &CostPlan) -> TransportationPlan {
    let dest = &request.destination;
    let leg_cost = (plan.transportation * 0.4).round();

    TransportationPlan {
        arrival: TransportLeg {
            method: "高铁".to_owned(),
            details: format!("从主要城市乘高铁前往{dest},车程约2-3小时,建议提前订票。"),
            estimated_cost: Some(leg_cost),
        },
        departure: TransportLeg {
            method: "高铁".to_owned(),
            details: "返程同样建议乘坐高铁,预留充足时间前往车站。".to_owned(),
            estimated_cost: Some(leg_cost),
        },
        local_transport: vec![
            LocalTransportOption {
                mode: "地铁".to_owned(),
                description: format!("{dest}主要景点多有地铁直达,推荐购买日票更划算。"),
                daily_cost: Some(15.0),
                estimated_cost: None,
            },
            LocalTransportOption {
                mode: "公交车".to_owned(),
                description: "可使用移动支付,方便快捷,适合短途出行。".to_owned(),
                daily_cost: Some(10.0),
                estimated_cost: None,
            },
            LocalTransportOption {
                mode: "出租车/网约车".to_owned(),
                description: "偏远景点或携带大件行李时使用。".to_owned(),
                daily_cost: None,
                estimated_cost: Some((plan.transportation * 0.2).round()),
            },
        ],
    }
}

fn estimated_costs(request: &TripRequest, plan: &CostPlan) -> CostBreakdown {
    let nights = request.nights();
    let breakdown = format!(
        "住宿 {:.0}元（{}晚 × {:.0}元/晚）；交通 {:.0}元；餐饮 {:.0}元（{}天 × 3餐 × {}人）；门票 {:.0}元；其他 {:.0}元。",
        plan.accommodation,
        nights,
        plan.price_per_night,
        plan.transportation,
        plan.meals,
        request.days,
        request.travelers,
        plan.activities,
        plan.miscellaneous,
    );

    CostBreakdown {
        accommodation: plan.accommodation,
        transportation: plan.transportation,
        meals: plan.meals,
        activities: plan.activities,
        miscellaneous: plan.miscellaneous,
        total: request.budget,
        breakdown: Some(breakdown),
    }
}

// ---------------------------------------------------------------------------
// Overview and tips
// ---------------------------------------------------------------------------

fn overview(request: &TripRequest) -> String {
    let dest = &request.destination;
    let preference_note = if request.preferences.is_empty() {
        String::new()
    } else {
        format!("特别安排了{}等主题活动,", request.preferences.join("、"))
    };

    format!(
        "这是一个精心设计的{dest} {}天{}晚深度游。行程涵盖{dest}最具代表性的景点、地道美食和特色体验,\
         {preference_note}适合{}人同行。预算控制在{:.0}元,包含交通、住宿、餐饮、门票等所有费用。",
        request.days,
        request.nights(),
        request.travelers,
        request.budget,
    )
}

/// Generic seasonal and logistics advice, enriched with the top catalog
/// entries when the destination is known.
fn tips(request: &TripRequest, guide: &DestinationGuide) -> Vec<String> {
    let mut tips = vec![
        "最佳旅游季节：春秋两季天气宜人,建议携带雨具".to_owned(),
        "主要景点建议提前网上预约,避免现场排队".to_owned(),
        "随身携带常用药品,记住酒店地址和联系方式".to_owned(),
        "大部分地方支持移动支付,少量现金备用即可".to_owned(),
    ];

    if !guide.attractions.is_empty() {
        let names: Vec<&str> = guide
            .attractions
            .iter()
            .take(3)
            .map(|a| a.name.as_str())
            .collect();
        tips.push(format!("必游景点：{}", names.join("、")));
    }
    if !guide.restaurants.is_empty() {
        let dishes: Vec<&str> = guide
            .restaurants
            .iter()
            .take(3)
            .filter_map(|r| r.specialties.first())
            .map(String::as_str)
            .collect();
        if !dishes.is_empty() {
            tips.push(format!("必吃美食：{}", dishes.join("、")));
        }
    }

    tips
}
