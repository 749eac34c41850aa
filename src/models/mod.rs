pub mod activity;
pub mod location;
pub mod observation;
pub mod risk;
pub mod rules;

pub use activity::Activity;
pub use location::Location;
pub use observation::{DailyObservation, FieldValue, ObservationField};
pub use risk::{RiskReport, RiskResult};
pub use rules::{BoundKind, Condition, RuleSet, RuleTable};
