// src/components/mod.rs

// カード・山・ゲーム状態など、エンジンが扱うデータ部品たち！
pub mod card;
pub mod game_state;
pub mod pile;
pub mod stack;

pub use card::{Card, CardColor, CardId, Rank, Suit, ALL_RANKS, ALL_SUITS};
pub use game_state::GameStatus;
pub use pile::Pile;
pub use stack::{PileId, PileKind};
