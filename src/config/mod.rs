// src/config/mod.rs
//! ゲームの設定と盤面の定数をまとめるモジュール。

pub mod constants;
pub mod game_config;

pub use game_config::{GameConfig, RedealLimit};
