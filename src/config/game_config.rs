// src/config/game_config.rs
//! ゲームの設定 (1回に引く枚数、配り直しの上限など) を定義するよ！⚙️
//!
//! 設定は `Game::new` に渡して注入する。途中で変えたいときは
//! `Game::reconfigure` を通すこと (検証もそこでやる)。

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// 山札が空になったときに、捨て札を山札に戻せる回数の上限。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RedealLimit {
    /// 何回でも戻せる (デフォルト)
    #[default]
    Unlimited,
    /// 指定回数まで。0 なら一度も戻せない。
    Limited(u32),
}

/// ゲームの設定だよ。
///
/// `#[serde(default)]` が付いているので、JS から `{"draw_batch_size":3}` みたいに
/// 一部だけ渡しても残りはデフォルト値で埋まる！
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// 山札をクリックしたときに捨て札へ送る枚数 (1 以上)
    pub draw_batch_size: usize,
    /// 配り直しの上限
    pub max_redeals: RedealLimit,
    /// 組札の一番上のカードを場札に戻すことを許すか
    pub allow_foundation_takeback: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            draw_batch_size: 1,
            max_redeals: RedealLimit::Unlimited,
            allow_foundation_takeback: false,
        }
    }
}

impl GameConfig {
    /// 設定値が正しいかチェックする。
    pub fn validate(&self) -> Result<(), GameError> {
        if self.draw_batch_size == 0 {
            return Err(GameError::InvalidConfig(
                "draw_batch_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// JSON 文字列から設定を読み込んで、ついでに検証もする。
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let config: GameConfig = serde_json::from_str(json)
            .map_err(|e| GameError::Serialization(format!("invalid config JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = GameConfig::default();
        assert_eq!(config.draw_batch_size, 1);
        assert_eq!(config.max_redeals, RedealLimit::Unlimited);
        assert!(!config.allow_foundation_takeback);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_batch_size_is_rejected() {
        let config = GameConfig {
            draw_batch_size: 0,
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = GameConfig::from_json(r#"{"draw_batch_size":3}"#).unwrap();
        assert_eq!(config.draw_batch_size, 3);
        assert_eq!(config.max_redeals, RedealLimit::Unlimited);

        let config = GameConfig::from_json(r#"{"max_redeals":{"Limited":2}}"#).unwrap();
        assert_eq!(config.draw_batch_size, 1);
        assert_eq!(config.max_redeals, RedealLimit::Limited(2));

        let config = GameConfig::from_json("{}").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn bad_json_is_a_serialization_error() {
        assert!(matches!(
            GameConfig::from_json("not json"),
            Err(GameError::Serialization(_))
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{"draw_batch_size":0}"#),
            Err(GameError::InvalidConfig(_))
        ));
    }
}
