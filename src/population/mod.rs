//! Population records and the validated operations over them

pub mod place;
pub mod pop;
pub mod records;
pub mod service;

pub use place::{Place, PlaceView};
pub use pop::{BeliefSummary, Pop, PopDetail, PopRef};
pub use records::{BeliefRecord, TraitRecord};
