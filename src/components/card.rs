// src/components/card.rs

// serde を使う宣言！カード情報を JS に JSON で渡すときに使うよ。
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::components::stack::PileId;

/// カードのスート（マーク）を表す列挙型だよ！❤️♦️♣️♠️
///
/// 並び順は組札 (Foundation) のインデックスと同じにしてあるよ。
/// 0: Heart, 1: Diamond, 2: Club, 3: Spade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Heart,
    Diamond,
    Club,
    Spade,
}

/// 全スートをまとめた配列。デッキを作るときにループで使う！
pub const ALL_SUITS: [Suit; 4] = [Suit::Heart, Suit::Diamond, Suit::Club, Suit::Spade];

impl Suit {
    /// 組札インデックスと同じ並びの番号 (0-3) を返す。
    pub fn index(self) -> usize {
        match self {
            Suit::Heart => 0,
            Suit::Diamond => 1,
            Suit::Club => 2,
            Suit::Spade => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Suit> {
        ALL_SUITS.get(index).copied()
    }

    /// スートからカードの色を決めるよ。ハートとダイヤが赤、それ以外は黒！
    pub fn color(self) -> CardColor {
        match self {
            Suit::Heart | Suit::Diamond => CardColor::Red,
            Suit::Club | Suit::Spade => CardColor::Black,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Suit::Heart => '♥',
            Suit::Diamond => '♦',
            Suit::Club => '♣',
            Suit::Spade => '♠',
        }
    }
}

/// カードのランク（数字）を表す列挙型だよ！ A=1, 2, 3, ..., K=13
///
/// PartialOrd, Ord も付けて、ランクの大小比較 (`<`, `>`) ができるようにしてあるよ！👍
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

/// 全ランクを A から K の順に並べた配列。
pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

impl Rank {
    /// 数値としてのランク (1-13)。
    pub fn value(self) -> u8 {
        self as u8
    }

    /// 1-13 の数値からランクを作る。範囲外なら None。
    pub fn from_value(value: u8) -> Option<Rank> {
        if value == 0 {
            return None;
        }
        ALL_RANKS.get(usize::from(value) - 1).copied()
    }

    fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// カードの色（赤か黒か）。場札に重ねられるかの判定で使うよ。
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum CardColor {
    Red,
    Black,
}

/// 52枚のカードそれぞれに振られる固定の番号だよ！🔢
///
/// `スート番号 * 13 + (ランク - 1)` で決まるので、ゲームを何回配り直しても
/// 同じカードは同じ ID のまま。JS 側はこの番号でカードを指定する。
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug, Serialize, Deserialize)]
pub struct CardId(pub usize);

impl CardId {
    pub fn from_parts(suit: Suit, rank: Rank) -> Self {
        CardId(suit.index() * ALL_RANKS.len() + usize::from(rank.value()) - 1)
    }

    pub fn suit(self) -> Option<Suit> {
        Suit::from_index(self.0 / ALL_RANKS.len())
    }

    pub fn rank(self) -> Option<Rank> {
        if self.0 >= ALL_SUITS.len() * ALL_RANKS.len() {
            return None;
        }
        ALL_RANKS.get(self.0 % ALL_RANKS.len()).copied()
    }

    /// 52枚のどれかを指している ID かどうか。
    pub fn is_valid(self) -> bool {
        self.0 < ALL_SUITS.len() * ALL_RANKS.len()
    }
}

/// カードそのものだよ！🃏
///
/// - `suit` / `rank`: 作った後は変わらないカードの正体。
/// - `is_face_up`: 表向きなら true。
/// - `pile`: 今このカードを持っている山の ID。所有ではなくただの目印で、
///   山 (`Pile`) がカードを追加・削除するときに書き換える。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub is_face_up: bool,
    pub pile: Option<PileId>,
}

impl Card {
    /// どの山にも属さない、裏向きのカードを作る。
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            is_face_up: false,
            pile: None,
        }
    }

    pub fn id(&self) -> CardId {
        CardId::from_parts(self.suit, self.rank)
    }

    pub fn color(&self) -> CardColor {
        self.suit.color()
    }

    pub fn flip_up(&mut self) {
        self.is_face_up = true;
    }

    pub fn flip_down(&mut self) {
        self.is_face_up = false;
    }

    pub fn is_face_up(&self) -> bool {
        self.is_face_up
    }

    pub fn pile(&self) -> Option<PileId> {
        self.pile
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}
