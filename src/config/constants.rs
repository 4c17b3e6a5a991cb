// src/config/constants.rs
//! クロンダイクの盤面の大きさに関する定数だよ！

/// 1デッキのカード枚数
pub const DECK_SIZE: usize = 52;
/// 場札 (Tableau) の列数
pub const TABLEAU_COUNT: u8 = 7;
/// 組札 (Foundation) の数。スートごとに1つ。
pub const FOUNDATION_COUNT: u8 = 4;
/// 組札が完成するランク (King)
pub const FOUNDATION_COMPLETE_RANK: u8 = 13;
/// 山全体の数 (Stock + Waste + Foundation 4 + Tableau 7)
pub const PILE_COUNT: usize = 2 + FOUNDATION_COUNT as usize + TABLEAU_COUNT as usize;
