// src/systems/win_condition_system.rs

use log::info;

use crate::components::game_state::GameStatus;
use crate::logic::rules::check_win_condition;
use crate::table::Table;

/// ゲームの勝利条件をチェックするシステムだよ！🏆🎉
///
/// 4つの組札が全部 K まで揃っていたら GameStatus を Won にする。
pub struct WinConditionSystem;

impl WinConditionSystem {
    pub fn new() -> Self {
        Self {}
    }

    /// 盤面が勝利状態かどうか (ステータスは変えない)。
    pub fn is_won(&self, table: &Table) -> bool {
        check_win_condition(&table.foundation_top_ranks())
    }

    /// 勝利条件をチェックして、必要ならゲーム状態を更新するよ！
    ///
    /// Playing → Won に変わった瞬間だけ true を返す。すでに Won なら何もせず false。
    /// (GameWon イベントを1回だけ出すために使う)
    pub fn run(&self, table: &Table, status: &mut GameStatus) -> bool {
        if *status != GameStatus::Playing {
            return false;
        }
        if self.is_won(table) {
            info!("WinConditionSystem: 勝利条件達成！🏆 ゲーム状態を更新します。");
            *status = GameStatus::Won;
            return true;
        }
        false
    }
}

impl Default for WinConditionSystem {
    fn default() -> Self {
        Self::new()
    }
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{CardId, Rank, ALL_RANKS, ALL_SUITS};
    use crate::components::stack::PileId;

    /// 全部のカードを組札に並べた盤面を作る
    fn completed_table() -> Table {
        let mut table = Table::with_full_deck();
        for suit in ALL_SUITS {
            for rank in ALL_RANKS {
                table.place_face_up(CardId::from_parts(suit, rank), PileId::foundation_for(suit));
            }
        }
        table
    }

    #[test]
    fn test_win_condition() {
        let system = WinConditionSystem::new();
        let mut status = GameStatus::Playing;

        // 最初は勝ってない
        let mut table = completed_table();
        let king = CardId::from_parts(crate::components::card::Suit::Spade, Rank::King);
        table.place_face_up(king, PileId::Tableau(0));
        assert!(!system.run(&table, &mut status));
        assert_eq!(status, GameStatus::Playing);

        // 全部揃ったら勝ち！
        let table = completed_table();
        assert!(system.run(&table, &mut status), "Playing → Won に変わったはず");
        assert_eq!(status, GameStatus::Won);

        // 2回目は変化なし
        assert!(!system.run(&table, &mut status));
        assert_eq!(status, GameStatus::Won);
    }
}
