//! Wayfarer — a travel itinerary engine.
//!
//! Turns a structured trip request into a complete, internally consistent
//! multi-day itinerary: by prompting a generative model and robustly
//! repairing its output, or — when no model is reachable or its answer is
//! unusable — by deterministically synthesizing an equivalent plan from a
//! curated destination catalog. Generation always succeeds; budget
//! analysis (the second model operation) surfaces its failures instead.
//!
//! See `DESIGN.md` for architecture notes.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod credentials;
pub mod itinerary;
pub mod kb;
pub mod logging;
pub mod planner;
pub mod providers;
