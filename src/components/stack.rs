// src/components/stack.rs

// serde を使うためにインポート！JS から移動先を JSON で受け取るときに必要だよ。
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::components::card::Suit;
use crate::config::constants::{FOUNDATION_COUNT, TABLEAU_COUNT};

/// カードが置かれる山 (Pile) を指す ID だよ。
/// これを使って、カードが山札にあるのか、場札の何列目にあるのか、などを区別するよ。
///
/// JSON にすると `"Stock"` や `{"Tableau":3}` みたいな形になる！✨
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PileId {
    /// 場札 (Tableau) だよ。7つの列があるので、列番号 (0-6) を持つ。
    Tableau(u8),
    /// 組札 (Foundation) だよ。スートごとに4つある。
    /// 0: Heart, 1: Diamond, 2: Club, 3: Spade
    Foundation(u8),
    /// 山札 (Stock) だよ。プレイヤーがカードを引く元の場所。
    Stock,
    /// 山札からめくったカードを置く場所 (Waste) だよ。
    Waste,
}

/// 山の種類。ルールの分岐 (`match`) はこっちでやる。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PileKind {
    Stock,
    Waste,
    Foundation,
    Tableau,
}

impl PileId {
    pub fn kind(self) -> PileKind {
        match self {
            PileId::Tableau(_) => PileKind::Tableau,
            PileId::Foundation(_) => PileKind::Foundation,
            PileId::Stock => PileKind::Stock,
            PileId::Waste => PileKind::Waste,
        }
    }

    /// 列番号・組札番号が盤面の範囲内かどうか。
    /// 範囲外の ID は呼び出し側のバグなので、Game は InvalidPileReference を返す。
    pub fn is_in_range(self) -> bool {
        match self {
            PileId::Tableau(index) => index < TABLEAU_COUNT,
            PileId::Foundation(index) => index < FOUNDATION_COUNT,
            PileId::Stock | PileId::Waste => true,
        }
    }

    /// 組札のインデックスから、その組札が受け付けるスートを返す。
    pub fn foundation_suit(self) -> Option<Suit> {
        match self {
            PileId::Foundation(index) => Suit::from_index(usize::from(index)),
            _ => None,
        }
    }

    pub fn foundation_for(suit: Suit) -> PileId {
        // Suit::index() は 0-3 なので u8 に収まる
        PileId::Foundation(suit.index() as u8)
    }

    /// 盤面上の全ての山の ID を、山札 → 捨て札 → 組札 → 場札 の順で返す。
    pub fn all() -> impl Iterator<Item = PileId> {
        [PileId::Stock, PileId::Waste]
            .into_iter()
            .chain((0..FOUNDATION_COUNT).map(PileId::Foundation))
            .chain((0..TABLEAU_COUNT).map(PileId::Tableau))
    }
}

impl fmt::Display for PileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PileId::Tableau(index) => write!(f, "Tableau({})", index),
            PileId::Foundation(index) => match self.foundation_suit() {
                Some(suit) => write!(f, "Foundation({})", suit.symbol()),
                None => write!(f, "Foundation(#{})", index),
            },
            PileId::Stock => write!(f, "Stock"),
            PileId::Waste => write!(f, "Waste"),
        }
    }
}
