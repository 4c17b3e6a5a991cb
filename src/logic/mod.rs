// src/logic/mod.rs
//! ゲームのルールやデッキ操作など、状態を持たないロジックをまとめるよ。

pub mod auto_move;
pub mod deck;
pub mod rules;
