//! 組札 (Foundation) へのカード移動ルールを定義するよ。

use log::debug;

use super::common::get_foundation_suit;
use crate::components::card::{Card, Rank};
use crate::config::constants::FOUNDATION_COMPLETE_RANK;

/// 指定されたカードが、特定の組札 (Foundation) の一番上に置けるかチェックする。
///
/// 組札のスートはインデックスで決まっていて、空のときはそのスートの A だけ、
/// それ以外は同じスートでランクが1つ大きいカードだけを受け付けるよ。
pub fn can_move_to_foundation(
    card_to_move: &Card,
    target_foundation_index: u8,
    target_top: Option<&Card>,
) -> bool {
    let target_suit = match get_foundation_suit(target_foundation_index) {
        Some(suit) => suit,
        None => {
            debug!("[Foundation Rule] Invalid Foundation index: {}", target_foundation_index);
            return false;
        }
    };

    if card_to_move.suit != target_suit {
        debug!(
            "[Foundation Rule] {} rejected: suit mismatch (target {:?})",
            card_to_move, target_suit
        );
        return false;
    }

    let result = match target_top {
        None => card_to_move.rank == Rank::Ace,
        Some(top) => card_to_move.rank.value() == top.rank.value() + 1,
    };
    debug!(
        "[Foundation Rule] {} onto Foundation({}) with top rank {}: {}",
        card_to_move,
        target_foundation_index,
        foundation_top_rank(target_top),
        result
    );
    result
}

/// 組札の一番上のランク。空なら 0。
pub fn foundation_top_rank(top: Option<&Card>) -> u8 {
    top.map_or(0, |card| card.rank.value())
}

/// 組札が K まで揃ったかどうか。
pub fn is_foundation_complete(top_rank: u8) -> bool {
    top_rank == FOUNDATION_COMPLETE_RANK
}
