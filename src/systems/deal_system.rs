// src/systems/deal_system.rs

use log::{debug, info};
use rand::Rng;

use crate::components::stack::PileId;
use crate::config::constants::TABLEAU_COUNT;
use crate::logic::deck::shuffle_deck;
use crate::logic::rules::describe_cards;
use crate::table::Table;

// === 初期カード配置システム！ ===
// ゲーム開始時に、山札と7つの場札にカードを配る役割を担うシステムだよ。
#[derive(Default)]
pub struct DealInitialCardsSystem;

impl DealInitialCardsSystem {
    /// ゲームの初期カード配置を実行する関数だよ！ 🎉
    ///
    /// # 処理の流れ
    /// 1. 盤面の全部の山からカードを回収する (52枚、ID 順)。
    /// 2. 渡された乱数生成器でシャッフルする。
    /// 3. クロンダイクのルールに従って配る。
    ///    - 場札 (Tableau): i 列目 (1始まり) に i 枚。一番上だけ表向き。
    ///    - 山札 (Stock): 残りの 24 枚、全部裏向き。
    ///
    /// 同じシードの乱数生成器を渡せば、同じ配りが再現できるよ。
    pub fn execute<R: Rng + ?Sized>(&self, table: &mut Table, rng: &mut R) {
        // --- 1. 回収 ---
        let mut deck = table.gather_all();
        for card in deck.iter_mut() {
            card.flip_down();
        }

        // --- 2. シャッフル ---
        shuffle_deck(&mut deck, rng);
        info!("🃏 デッキ準備完了！ ({}枚)", deck.len());

        // --- 3. 場札に配る ---
        // デッキの末尾 (= 山の上) から取っていく
        for column in 0..TABLEAU_COUNT {
            let count = usize::from(column) + 1;
            let split_at = deck.len().saturating_sub(count);
            let mut dealt = deck.split_off(split_at);
            if let Some(top) = dealt.last_mut() {
                top.flip_up();
            }
            if let Ok(pile) = table.pile_mut(PileId::Tableau(column)) {
                debug!("  Tableau({}) <- {}", column, describe_cards(&dealt));
                pile.add_cards(dealt);
            }
        }

        // --- 4. 残りは山札へ ---
        info!("  山札に {} 枚を配置", deck.len());
        table.stock_mut().add_cards(deck);
        info!("✅ 初期カード配置完了！");
    }
}
