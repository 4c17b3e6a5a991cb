//! 場札 (Tableau) へのカード移動ルールを定義するよ。

use log::debug;

use crate::components::card::Card;

/// 指定されたカードが、場札の一番上 (`target_top`) に置けるかチェックする。
///
/// - 空の列 (`None`): どのカードでも置ける。
/// - それ以外: 色が違って、ランクがちょうど1つ小さいときだけ OK。
pub fn can_move_to_tableau(card_to_move: &Card, target_top: Option<&Card>) -> bool {
    match target_top {
        Some(target_top_card) => {
            let colors_different = card_to_move.color() != target_top_card.color();
            let rank_is_one_less = card_to_move.rank.value() + 1 == target_top_card.rank.value();

            debug!(
                "[Tableau Rule] {} onto {}: colors different = {}, rank is one less = {}",
                card_to_move, target_top_card, colors_different, rank_is_one_less
            );
            colors_different && rank_is_one_less
        }
        None => {
            debug!("[Tableau Rule] {} onto empty column: accepted", card_to_move);
            true
        }
    }
}

/// 場札のカードが移動の起点になれるか。表向きならどれでも OK！
/// (その上に積まれているカードも一緒に動く)
pub fn is_free_tableau_card(card: &Card) -> bool {
    card.is_face_up()
}
