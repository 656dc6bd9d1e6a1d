//! Traits describing read-only battle data.
//!
//! Card templates and enemy definitions are loaded once per session by
//! `battle-content` and treated as immutable afterwards. The resolver never
//! queries them itself; the battle-flow controller uses the oracles to build
//! a [`crate::Battlefield`] and to fetch the cards it places.

use crate::card::{BattleCard, CardId};
use crate::enemy::{Enemy, EnemyId};
use crate::error::{BattleError, ErrorSeverity};

/// Oracle providing battle card templates.
pub trait CardOracle: Send + Sync {
    fn card(&self, id: &CardId) -> Option<&BattleCard>;

    /// Returns a copy of the template, or [`OracleError::CardNotFound`].
    fn require_card(&self, id: &CardId) -> Result<BattleCard, OracleError> {
        self.card(id)
            .cloned()
            .ok_or_else(|| OracleError::CardNotFound(id.clone()))
    }
}

/// Oracle providing enemy definitions.
pub trait EnemyOracle: Send + Sync {
    fn enemy(&self, id: &EnemyId) -> Option<&Enemy>;

    /// Returns a copy of the definition, or [`OracleError::EnemyNotFound`].
    fn require_enemy(&self, id: &EnemyId) -> Result<Enemy, OracleError> {
        self.enemy(id)
            .cloned()
            .ok_or_else(|| OracleError::EnemyNotFound(id.clone()))
    }
}

/// Errors that occur when looking up static battle data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    #[error("card template '{0}' not found")]
    CardNotFound(CardId),

    #[error("enemy '{0}' not found")]
    EnemyNotFound(EnemyId),

    #[error("card pack '{0}' not found")]
    PackNotFound(String),

    #[error("card pack '{0}' has no entries")]
    EmptyPack(String),
}

impl BattleError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::CardNotFound(_) => "ORACLE_CARD_NOT_FOUND",
            Self::EnemyNotFound(_) => "ORACLE_ENEMY_NOT_FOUND",
            Self::PackNotFound(_) => "ORACLE_PACK_NOT_FOUND",
            Self::EmptyPack(_) => "ORACLE_EMPTY_PACK",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::CardType;

    struct Table {
        cards: HashMap<CardId, BattleCard>,
    }

    impl CardOracle for Table {
        fn card(&self, id: &CardId) -> Option<&BattleCard> {
            self.cards.get(id)
        }
    }

    struct NoEnemies;

    impl EnemyOracle for NoEnemies {
        fn enemy(&self, _id: &EnemyId) -> Option<&Enemy> {
            None
        }
    }

    #[test]
    fn require_returns_copies_or_errors() {
        let card = BattleCard::new("pike", CardType::Strength, 3.0);
        let table = Table {
            cards: HashMap::from([(card.id.clone(), card)]),
        };

        assert_eq!(table.require_card(&"pike".into()).map(|c| c.power), Ok(3.0));
        let missing = table.require_card(&"bow".into()).unwrap_err();
        assert_eq!(missing, OracleError::CardNotFound("bow".into()));
        assert_eq!(missing.error_code(), "ORACLE_CARD_NOT_FOUND");
        assert_eq!(missing.severity(), ErrorSeverity::Validation);

        let enemy = NoEnemies.require_enemy(&"wolf".into()).unwrap_err();
        assert_eq!(enemy.to_string(), "enemy 'wolf' not found");
    }
}
