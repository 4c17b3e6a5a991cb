//! ルール判定で共通して使うヘルパー関数や型を置くよ。

use itertools::Itertools;

pub use crate::components::card::CardColor;
use crate::components::card::{Card, Suit};

/// 組札 (Foundation) のインデックス (0-3) から対応するスートを取得する。
/// 約束事: 0: Heart ❤️, 1: Diamond ♦️, 2: Club ♣️, 3: Spade ♠️
pub(crate) fn get_foundation_suit(foundation_index: u8) -> Option<Suit> {
    Suit::from_index(usize::from(foundation_index))
}

/// ログ用に、カード列を `7♠ 6♥ 5♣` みたいな文字列にする。
pub fn describe_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards.iter().map(|card| card.to_string()).join(" ")
}
