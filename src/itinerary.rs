//! Trip request and itinerary data model.
//!
//! These types are the contract with both callers and the generative
//! model: the serde wire names (camelCase) match the JSON shape the
//! prompt instructs the model to emit. Parsing is deliberately tolerant
//! (missing optional fields default) — structural validation happens in
//! a separate pass after parse, not here.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// A structured trip request, immutable for the duration of one
/// generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    /// Destination name, e.g. `南京`. Exact match against the knowledge base.
    pub destination: String,
    /// Trip length in days. Must be at least 1.
    pub days: u32,
    /// Total budget in currency units. Must be positive.
    pub budget: f64,
    /// Number of travelers. Must be at least 1.
    pub travelers: u32,
    /// Preference tags, order irrelevant.
    #[serde(default)]
    pub preferences: Vec<String>,
    /// Optional free-text notes from the user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
}

/// A malformed trip request.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// Destination is empty or whitespace.
    #[error("destination must not be empty")]
    EmptyDestination,
    /// Day count is zero.
    #[error("trip length must be at least 1 day")]
    ZeroDays,
    /// Budget is zero, negative, or not finite.
    #[error("budget must be a positive amount, got {0}")]
    InvalidBudget(f64),
    /// Traveler count is zero.
    #[error("traveler count must be at least 1")]
    ZeroTravelers,
}

impl TripRequest {
    /// Check the request against the field constraints.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.destination.trim().is_empty() {
            return Err(RequestError::EmptyDestination);
        }
        if self.days == 0 {
            return Err(RequestError::ZeroDays);
        }
        if !self.budget.is_finite() || self.budget <= 0.0 {
            return Err(RequestError::InvalidBudget(self.budget));
        }
        if self.travelers == 0 {
            return Err(RequestError::ZeroTravelers);
        }
        Ok(())
    }

    /// Number of accommodation nights. A single-day trip still books one
    /// night, so the per-night divisor never hits zero.
    pub fn nights(&self) -> u32 {
        self.days.saturating_sub(1).max(1)
    }
}

// ---------------------------------------------------------------------------
// Itinerary
// ---------------------------------------------------------------------------

/// Where an itinerary came from. Never serialized — the public shape of a
/// synthesized itinerary is identical to a model-generated one; this flag
/// exists so operators can monitor the fallback rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Provenance {
    /// Produced by the generative model path.
    #[default]
    Model,
    /// Produced by deterministic fallback synthesis.
    Synthesized,
}

impl Provenance {
    /// Short label for log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Synthesized => "synthesized",
        }
    }
}

/// A complete multi-day travel plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    /// Summary of the trip's highlights.
    #[serde(default)]
    pub overview: String,
    /// Day-by-day plans, one per requested day.
    pub days: Vec<DayPlan>,
    /// Accommodation options, cheapest-alternative included.
    #[serde(default)]
    pub accommodation: Vec<AccommodationOption>,
    /// Arrival, departure, and local transport.
    #[serde(default)]
    pub transportation: TransportationPlan,
    /// Per-category cost estimate.
    #[serde(default)]
    pub estimated_costs: CostBreakdown,
    /// Practical advice for the trip.
    #[serde(default)]
    pub tips: Vec<String>,
    /// Internal origin marker; see [`Provenance`].
    #[serde(skip)]
    pub provenance: Provenance,
}

/// One day of the itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    /// 1-based day number.
    #[serde(default)]
    pub day: u32,
    /// Calendar date, ISO `YYYY-MM-DD`.
    #[serde(default)]
    pub date: String,
    /// Exactly three timed activities: morning, afternoon, evening.
    #[serde(default)]
    pub activities: Vec<Activity>,
    /// Exactly three meals: breakfast, lunch, dinner, in that order.
    #[serde(default)]
    pub meals: Vec<MealSuggestion>,
}

/// A single scheduled activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Start time, `HH:MM`.
    pub time: String,
    /// Attraction or activity name.
    pub name: String,
    /// What to see or do there.
    #[serde(default)]
    pub description: String,
    /// Address string.
    #[serde(default)]
    pub location: String,
    /// Optional coordinates for map display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<LatLng>,
    /// Human-readable visit duration, e.g. `2.5小时`.
    #[serde(default)]
    pub duration: String,
    /// Cost for the whole party, non-negative.
    #[serde(default)]
    pub cost: f64,
}

/// A latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

/// Which meal of the day a suggestion covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealKind {
    /// Morning meal.
    Breakfast,
    /// Midday meal.
    Lunch,
    /// Evening meal.
    Dinner,
}

impl MealKind {
    /// Canonical serving order within a day.
    pub const ORDER: [MealKind; 3] = [Self::Breakfast, Self::Lunch, Self::Dinner];

    /// Conventional serving time, `HH:MM`.
    pub fn default_time(self) -> &'static str {
        match self {
            Self::Breakfast => "08:00",
            Self::Lunch => "12:30",
            Self::Dinner => "18:30",
        }
    }
}

/// A restaurant suggestion for one meal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealSuggestion {
    /// Breakfast, lunch, or dinner.
    #[serde(rename = "type")]
    pub meal_type: MealKind,
    /// Restaurant name.
    pub restaurant: String,
    /// Cuisine label.
    #[serde(default)]
    pub cuisine: String,
    /// Address string.
    #[serde(default)]
    pub location: String,
    /// Cost for the whole party, non-negative.
    #[serde(default)]
    pub estimated_cost: f64,
    /// Suggested time, `HH:MM`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Signature dishes.
    #[serde(default)]
    pub specialties: Vec<String>,
    /// Short description of the restaurant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One accommodation option at a given tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccommodationOption {
    /// Hotel name.
    pub name: String,
    /// Tier label, e.g. `经济型酒店`.
    #[serde(rename = "type", default)]
    pub tier: String,
    /// Address or area description.
    #[serde(default)]
    pub location: String,
    /// Nightly rate.
    #[serde(default)]
    pub price_per_night: f64,
    /// Number of nights booked.
    #[serde(default)]
    pub total_nights: u32,
    /// Invariant: always `price_per_night * total_nights`.
    #[serde(default)]
    pub total_cost: f64,
    /// Included amenities.
    #[serde(default)]
    pub amenities: Vec<String>,
    /// Optional star rating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Short description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl AccommodationOption {
    /// Recompute `total_nights`/`total_cost` from the nightly rate so the
    /// invariant holds regardless of what the model emitted.
    pub fn reconcile(&mut self, nights: u32) {
        self.total_nights = nights;
        self.total_cost = self.price_per_night * f64::from(nights);
    }
}

/// Arrival/departure legs plus local transport options.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportationPlan {
    /// How to reach the destination.
    pub arrival: TransportLeg,
    /// How to get back.
    pub departure: TransportLeg,
    /// Ways to move around once there.
    #[serde(default)]
    pub local_transport: Vec<LocalTransportOption>,
}

/// A single long-distance transport leg.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportLeg {
    /// Transport mode, e.g. `高铁`.
    #[serde(default)]
    pub method: String,
    /// Route and timing details.
    #[serde(default)]
    pub details: String,
    /// Estimated cost for the leg.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_cost: Option<f64>,
}

/// A way of getting around at the destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalTransportOption {
    /// Mode name, e.g. `地铁`.
    #[serde(rename = "type")]
    pub mode: String,
    /// Usage advice.
    #[serde(default)]
    pub description: String,
    /// Estimated daily spend, for flat-rate modes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_cost: Option<f64>,
    /// Estimated per-trip or total spend, for pay-per-use modes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_cost: Option<f64>,
}

/// Per-category budget totals.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Lodging total.
    #[serde(default)]
    pub accommodation: f64,
    /// Long-distance plus local transport total.
    #[serde(default)]
    pub transportation: f64,
    /// All meals.
    #[serde(default)]
    pub meals: f64,
    /// Tickets and activities.
    #[serde(default)]
    pub activities: f64,
    /// Shopping, snacks, contingency.
    #[serde(default)]
    pub miscellaneous: f64,
    /// Sum of the five categories.
    #[serde(default)]
    pub total: f64,
    /// Optional free-text explanation of the numbers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<String>,
}
