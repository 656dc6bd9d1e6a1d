//! Skill evaluation: contexts, predicates, calculators, and their output.
//!
//! # Architecture
//!
//! ```text
//! CalculationContext ──▶ SkillCalculator::calculate ──▶ SkillOutput
//!                              │                          ├─ Vec<SkillEffect> (slot, modifier)
//!                              └─ predicates             └─ support power
//! ```
//!
//! Every calculator is a pure function of the context. Indices outside the
//! placed card list are discarded, never wrapped and never an error.

pub mod calculator;
pub mod context;
pub mod effect;
pub mod predicate;

pub use calculator::{SkillCalculator, SkillFn};
pub use context::CalculationContext;
pub use effect::{SkillEffect, SkillOutput};
pub use predicate::{ContextPredicate, ContextPredicateFn, SlotPredicate, SlotPredicateFn};
