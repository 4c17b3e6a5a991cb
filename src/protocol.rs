// src/protocol.rs

// JS (画面側) とやり取りするデータの形を決めるファイルだよ！💌
// Rust の型 <-> JSON の変換は serde にお任せ。
use serde::{Deserialize, Serialize};

use crate::components::card::Card;
use crate::components::game_state::GameStatus;
use crate::components::stack::PileId;
use crate::config::game_config::GameConfig;
use crate::error::GameError;
use crate::game::Game;
use crate::systems::StockStatus;

/// 1つの山の中身。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PileSnapshot {
    pub id: PileId,
    /// 下から上の順
    pub cards: Vec<Card>,
}

/// 画面の描画や、外部でのセーブに使うゲーム全体の状態。
/// 読み込み (ロード) はしないので、ここから Game を作り直すことはできないよ。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// 山札 → 捨て札 → 組札 → 場札 の順
    pub piles: Vec<PileSnapshot>,
    pub redeal_count: u32,
    pub can_redeal: bool,
    pub stock_status: StockStatus,
    pub waste_fan_start: usize,
    pub status: GameStatus,
    pub config: GameConfig,
}

impl GameSnapshot {
    pub fn capture(game: &Game) -> Self {
        let piles = game
            .table()
            .piles()
            .map(|pile| PileSnapshot {
                id: pile.id(),
                cards: pile.cards().to_vec(),
            })
            .collect();
        Self {
            piles,
            redeal_count: game.redeal_count(),
            can_redeal: game.can_redeal(),
            stock_status: game.stock_status(),
            waste_fan_start: game.waste_fan_start(),
            status: game.status(),
            config: game.config().clone(),
        }
    }

    pub fn to_json(&self) -> Result<String, GameError> {
        serde_json::to_string(self)
            .map_err(|e| GameError::Serialization(format!("failed to serialize game state: {}", e)))
    }
}

/// JS から来た `"Stock"` や `{"Tableau":3}` を PileId にする。
/// 形は合っていても盤面にない番号 (`{"Tableau":9}`) は InvalidPileReference。
pub fn parse_pile_id(json: &str) -> Result<PileId, GameError> {
    let pile: PileId = serde_json::from_str(json)
        .map_err(|e| GameError::Serialization(format!("invalid pile id JSON '{}': {}", json, e)))?;
    if !pile.is_in_range() {
        return Err(GameError::InvalidPileReference(pile));
    }
    Ok(pile)
}

/// 何かを JSON 文字列にする。失敗したら Serialization エラー。
pub fn to_json<T: Serialize>(value: &T) -> Result<String, GameError> {
    serde_json::to_string(value).map_err(|e| GameError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_pile_ids() {
        assert_eq!(parse_pile_id("\"Stock\""), Ok(PileId::Stock));
        assert_eq!(parse_pile_id("{\"Tableau\":3}"), Ok(PileId::Tableau(3)));
        assert_eq!(parse_pile_id("{\"Foundation\":0}"), Ok(PileId::Foundation(0)));
        assert_eq!(
            parse_pile_id("{\"Tableau\":9}"),
            Err(GameError::InvalidPileReference(PileId::Tableau(9)))
        );
        assert!(matches!(parse_pile_id("\"Nowhere\""), Err(GameError::Serialization(_))));
        assert!(matches!(parse_pile_id("not json"), Err(GameError::Serialization(_))));
    }

    #[test]
    fn snapshot_lists_every_pile() {
        let game = Game::with_seed(GameConfig::default(), 11).unwrap();
        let snapshot = game.snapshot();

        assert_eq!(snapshot.piles.len(), 13);
        assert_eq!(snapshot.piles[0].id, PileId::Stock);
        assert_eq!(snapshot.piles.iter().map(|p| p.cards.len()).sum::<usize>(), 52);
        assert_eq!(snapshot.status, GameStatus::Playing);
        assert!(snapshot.can_redeal);

        let json = snapshot.to_json().unwrap();
        let back: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
