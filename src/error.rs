// src/error.rs
//! エンジンのエラー型だよ。
//!
//! ルール違反 (置けない場所への移動、空の山札など) はエラーじゃなくて
//! 普通の戻り値 (`bool` や `DrawOutcome`) で表す。ここに来るのは
//! 呼び出し側の約束違反だけ！

use std::fmt;

use crate::components::card::CardId;
use crate::components::stack::PileId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// 存在しないカード ID が渡された (InvalidReference)
    InvalidCardReference(CardId),
    /// 存在しない山の ID が渡された (InvalidReference)
    InvalidPileReference(PileId),
    /// 設定値がおかしい
    InvalidConfig(String),
    /// JSON の変換に失敗した
    Serialization(String),
}

impl GameError {
    /// カード・山の ID が不正というエラーかどうか。
    pub fn is_invalid_reference(&self) -> bool {
        matches!(
            self,
            GameError::InvalidCardReference(_) | GameError::InvalidPileReference(_)
        )
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidCardReference(id) => {
                write!(f, "invalid reference: unknown card id {}", id.0)
            }
            GameError::InvalidPileReference(pile) => {
                write!(f, "invalid reference: unknown pile {:?}", pile)
            }
            GameError::InvalidConfig(reason) => write!(f, "invalid config: {}", reason),
            GameError::Serialization(reason) => write!(f, "serialization error: {}", reason),
        }
    }
}

impl std::error::Error for GameError {}
