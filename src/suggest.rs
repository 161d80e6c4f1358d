pub mod controller;
pub mod key_class;
pub mod query;
pub mod request_gate;
pub mod selection;
pub mod suggest_render;

// Re-export public types
pub use controller::SuggestionController;
pub use key_class::{Direction, KeyCategory};
pub use query::{Candidate, CandidateKind, CandidateList, Query, SuggestionResult};
pub use request_gate::{RequestGate, Resolution};
pub use selection::SelectionModel;
