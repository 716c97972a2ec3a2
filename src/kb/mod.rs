//! Static destination knowledge base.
//!
//! A read-only catalog of real attractions and restaurants keyed by
//! destination name (exact, case-sensitive match). Built once at startup
//! via [`KnowledgeBase::builtin`] and shared across concurrent generation
//! calls behind an `Arc` — it is never mutated. Destinations absent from
//! the catalog are handled by the synthesizer with generic placeholders,
//! not here.

use std::collections::HashMap;

use crate::itinerary::LatLng;

mod data;

/// A sight worth visiting at a destination.
#[derive(Debug, Clone, PartialEq)]
pub struct Attraction {
    /// Attraction name.
    pub name: String,
    /// What to see or do there.
    pub description: String,
    /// Street address.
    pub address: String,
    /// Ticket price per person. Zero for free sights.
    pub cost: f64,
    /// Typical visit duration, human-readable.
    pub duration: String,
    /// Map coordinates.
    pub coords: LatLng,
}

/// A restaurant recommendation at a destination.
#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    /// Restaurant name.
    pub name: String,
    /// Cuisine label.
    pub cuisine: String,
    /// Street address or area.
    pub address: String,
    /// Signature dishes, best first.
    pub specialties: Vec<String>,
    /// Average spend per person.
    pub avg_cost: f64,
    /// Short description.
    pub description: String,
}

/// Everything the catalog knows about one destination.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DestinationGuide {
    /// Attractions, roughly in recommendation order.
    pub attractions: Vec<Attraction>,
    /// Restaurants, roughly in recommendation order.
    pub restaurants: Vec<Restaurant>,
}

/// The full destination catalog.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    destinations: HashMap<String, DestinationGuide>,
}

impl KnowledgeBase {
    /// Build the bundled catalog.
    pub fn builtin() -> Self {
        Self {
            destinations: data::builtin_destinations(),
        }
    }

    /// Build a catalog from explicit entries. Used by tests.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, DestinationGuide)>) -> Self {
        Self {
            destinations: entries.into_iter().collect(),
        }
    }

    /// Look up a destination by exact name.
    pub fn guide(&self, destination: &str) -> Option<&DestinationGuide> {
        self.destinations.get(destination)
    }

    /// Names of all cataloged destinations, unsorted.
    pub fn destination_names(&self) -> impl Iterator<Item = &str> {
        self.destinations.keys().map(String::as_str)
    }

    /// Number of cataloged destinations.
    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }
}
