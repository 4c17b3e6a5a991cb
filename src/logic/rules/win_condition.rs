//! ゲームの勝利条件判定ロジックを定義するよ。

use super::foundation::is_foundation_complete;
use crate::config::constants::FOUNDATION_COUNT;

/// ゲームのクリア条件（4つの組札が全部 K まで揃っているか）を判定する。
pub fn check_win_condition(foundation_top_ranks: &[u8]) -> bool {
    foundation_top_ranks.len() == usize::from(FOUNDATION_COUNT)
        && foundation_top_ranks.iter().all(|&rank| is_foundation_complete(rank))
}
