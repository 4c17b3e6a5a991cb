// src/logic/deck.rs

use itertools::iproduct;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
use crate::config::constants::DECK_SIZE;

/// 標準的な52枚のカードデッキ（ソリティア用）を生成する関数だよ！🃏
///
/// スート順 (Heart, Diamond, Club, Spade)、各スートの中は A → K の順。
/// つまり `deck[i].id() == CardId(i)` になる。全部裏向きで、どの山にも属していない。
pub fn create_standard_deck() -> Vec<Card> {
    let deck: Vec<Card> = iproduct!(ALL_SUITS, ALL_RANKS)
        .map(|(suit, rank)| Card::new(suit, rank))
        .collect();
    debug_assert_eq!(deck.len(), DECK_SIZE);
    deck
}

/// カードデッキをシャッフルする関数だよ。
/// `thread_rng()` を渡せば毎回ランダム、シード付きの `StdRng` を渡せば毎回同じ並びになる。
pub fn shuffle_deck<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    deck.shuffle(rng);
}
