//! Deterministic battle power resolution.
//!
//! `battle-core` defines the rules layer of a fight: the modifiers a card can
//! receive, the calculators that decide which slots a skill touches, enemy
//! skills, and the [`Battlefield`] that folds all of it into a verdict.
//! Everything here is a pure function of the placed cards and the enemy;
//! static card and enemy tables live in `battle-content`.
pub mod battlefield;
pub mod card;
pub mod config;
pub mod enemy;
pub mod error;
pub mod modifier;
pub mod oracle;
pub mod rng;
pub mod skill;

pub use battlefield::{
    BattleEvaluation, BattleOutcome, BattlePhase, Battlefield, BattlefieldError, SlotPower,
};
pub use card::{BattleCard, BattleCardSkill, CardId, CardType, SkillId};
pub use config::BattleConfig;
pub use enemy::{EncounterKind, Enemy, EnemyId, EnemySkill, EnemyType};
pub use error::{BattleError, ErrorSeverity};
pub use modifier::PowerModifier;
pub use oracle::{CardOracle, EnemyOracle, OracleError};
pub use rng::{Intner, PcgRng};
pub use skill::{
    CalculationContext, ContextPredicate, SkillCalculator, SkillEffect, SkillFn, SkillOutput,
    SlotPredicate,
};
