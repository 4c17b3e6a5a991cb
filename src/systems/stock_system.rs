// src/systems/stock_system.rs
//! 山札 (Stock) をクリックしたときの処理だよ！
//! 捨て札 (Waste) へカードをめくる、または捨て札を山札に戻す (配り直し)。

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::config::game_config::{GameConfig, RedealLimit};
use crate::logic::rules::stock_waste;
use crate::table::Table;

/// `draw()` の結果。どれもエラーじゃなくて普通の結果だよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawOutcome {
    /// 山札から `count` 枚めくって捨て札に置いた
    Dealt { count: usize },
    /// 捨て札の `count` 枚を山札に戻した
    Restacked { count: usize },
    /// 山札は空で、配り直しの上限に達している。何もしない。
    RedealLimitReached,
    /// 山札も捨て札も空。何もしない。
    NothingToDraw,
}

impl DrawOutcome {
    /// カードが動いたかどうか。
    pub fn changed_piles(self) -> bool {
        matches!(self, DrawOutcome::Dealt { .. } | DrawOutcome::Restacked { .. })
    }
}

/// 山札の表示用ステータス。まだ配り直せるなら Available、上限に達したら Exhausted。
/// (フロントエンドで山札を緑/赤で塗り分けるのに使う)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockStatus {
    Available,
    Exhausted,
}

impl StockStatus {
    pub fn from_redeals(redeal_count: u32, limit: RedealLimit) -> Self {
        if stock_waste::is_within_redeal_limit(redeal_count, limit) {
            StockStatus::Available
        } else {
            StockStatus::Exhausted
        }
    }
}

#[derive(Default)]
pub struct StockSystem;

impl StockSystem {
    /// 山札クリック1回分の処理。
    ///
    /// - 山札にカードがある → `draw_batch_size` 枚 (足りなければ残り全部) を1枚ずつめくって捨て札へ。
    /// - 山札が空で、配り直しできる → 捨て札を全部山札に戻す。`redeal_count` が 1 増える。
    /// - それ以外 → 何もしない。
    pub fn draw(&self, table: &mut Table, config: &GameConfig, redeal_count: &mut u32) -> DrawOutcome {
        let stock_empty = table.stock().is_empty();
        let waste_empty = table.waste().is_empty();

        if stock_waste::can_deal_from_stock(stock_empty) {
            let count = self.deal_cards_from_stock(table, config.draw_batch_size);
            return DrawOutcome::Dealt { count };
        }

        if !stock_waste::can_reset_stock_from_waste(stock_empty, waste_empty) {
            info!("山札も捨て札も空っぽ。何もしないよ。");
            return DrawOutcome::NothingToDraw;
        }

        if !stock_waste::is_within_redeal_limit(*redeal_count, config.max_redeals) {
            warn!(
                "配り直しの上限 ({:?}) に達しているので山札に戻せません (redeal_count = {})",
                config.max_redeals, redeal_count
            );
            return DrawOutcome::RedealLimitReached;
        }

        let count = self.reset_waste_to_stock(table);
        *redeal_count += 1;
        info!("  配り直し {} 回目", redeal_count);
        DrawOutcome::Restacked { count }
    }

    /// 山札の上から最大 `batch` 枚を1枚ずつ表にして捨て札に積む。
    /// 最後にめくったカードが捨て札の一番上になるよ。
    pub fn deal_cards_from_stock(&self, table: &mut Table, batch: usize) -> usize {
        info!("Dealing up to {} card(s) from Stock to Waste...", batch);
        let mut dealt = 0;
        for _ in 0..batch {
            let mut card = match table.stock_mut().pop_top() {
                Some(card) => card,
                None => break,
            };
            card.flip_up();
            table.waste_mut().add_card(card);
            dealt += 1;
        }
        info!("  {} card(s) moved to Waste.", dealt);
        dealt
    }

    /// 捨て札を全部裏にして山札へ戻す。
    /// 捨て札の上から順に積み直すので、山札は最初にめくる前と同じ並びに戻る。
    pub fn reset_waste_to_stock(&self, table: &mut Table) -> usize {
        let mut cards = table.waste_mut().reset();
        cards.reverse();
        let count = cards.len();
        info!("  Resetting {} cards from Waste to Stock.", count);
        let stock = table.stock_mut();
        stock.add_cards(cards);
        stock.turn_all(false);
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::CardId;
    use crate::components::stack::PileId;

    fn stock_ids(table: &Table) -> Vec<CardId> {
        table.stock().cards().iter().map(|c| c.id()).collect()
    }

    #[test]
    fn draw_moves_batch_face_up() {
        let mut table = Table::with_full_deck();
        let config = GameConfig { draw_batch_size: 3, ..GameConfig::default() };
        let mut redeals = 0;

        let top_three: Vec<CardId> = stock_ids(&table).into_iter().rev().take(3).collect();
        let outcome = StockSystem.draw(&mut table, &config, &mut redeals);

        assert_eq!(outcome, DrawOutcome::Dealt { count: 3 });
        assert_eq!(table.stock().len(), 49);
        assert_eq!(table.waste().len(), 3);
        assert!(table.waste().cards().iter().all(|c| c.is_face_up()));
        // 1枚ずつめくるので、最初にめくった (山札の一番上だった) カードが捨て札の一番下
        let waste: Vec<CardId> = table.waste().cards().iter().map(|c| c.id()).collect();
        assert_eq!(waste, top_three);
        assert!(table.is_partition_intact());
    }

    #[test]
    fn short_stock_deals_what_is_left() {
        let mut table = Table::with_full_deck();
        for id in 0..50 {
            table.place_face_up(CardId(id), PileId::Tableau(0));
        }
        let config = GameConfig { draw_batch_size: 3, ..GameConfig::default() };
        let mut redeals = 0;
        assert_eq!(
            StockSystem.draw(&mut table, &config, &mut redeals),
            DrawOutcome::Dealt { count: 2 }
        );
        assert!(table.stock().is_empty());
    }

    #[test]
    fn restack_restores_stock_order() {
        let mut table = Table::with_full_deck();
        let config = GameConfig { draw_batch_size: 5, ..GameConfig::default() };
        let mut redeals = 0;
        let before = stock_ids(&table);

        while !table.stock().is_empty() {
            StockSystem.draw(&mut table, &config, &mut redeals);
        }
        let outcome = StockSystem.draw(&mut table, &config, &mut redeals);

        assert_eq!(outcome, DrawOutcome::Restacked { count: 52 });
        assert_eq!(redeals, 1);
        assert_eq!(stock_ids(&table), before, "元の山札と同じ並びに戻るはず");
        assert!(table.stock().cards().iter().all(|c| !c.is_face_up()));
        assert!(table.waste().is_empty());
    }

    #[test]
    fn redeal_limit_and_empty_piles_are_no_ops() {
        let mut table = Table::new();
        let config = GameConfig { max_redeals: RedealLimit::Limited(0), ..GameConfig::default() };
        let mut redeals = 0;
        assert_eq!(StockSystem.draw(&mut table, &config, &mut redeals), DrawOutcome::NothingToDraw);
        assert_eq!(redeals, 0);

        let mut table = Table::with_full_deck();
        StockSystem.deal_cards_from_stock(&mut table, 52);
        assert_eq!(
            StockSystem.draw(&mut table, &config, &mut redeals),
            DrawOutcome::RedealLimitReached
        );
        assert_eq!(redeals, 0);
        assert_eq!(table.waste().len(), 52);
    }

    #[test]
    fn stock_status_follows_limit() {
        assert_eq!(StockStatus::from_redeals(5, RedealLimit::Unlimited), StockStatus::Available);
        assert_eq!(StockStatus::from_redeals(0, RedealLimit::Limited(1)), StockStatus::Available);
        assert_eq!(StockStatus::from_redeals(1, RedealLimit::Limited(1)), StockStatus::Exhausted);
        assert!(DrawOutcome::Dealt { count: 1 }.changed_piles());
        assert!(!DrawOutcome::NothingToDraw.changed_piles());
    }
}
