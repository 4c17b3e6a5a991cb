//! 山札 (Stock) と捨て札 (Waste) に関するルールを定義するよ。

use crate::components::card::Card;
use crate::config::game_config::RedealLimit;

/// ストック（山札）からウェスト（捨て札）にカードを配れるかチェックする。
pub fn can_deal_from_stock(stock_is_empty: bool) -> bool {
    !stock_is_empty
}

/// ストック（山札）が空のときに、ウェスト（捨て札）からストックにカードを戻せるかチェックする。
pub fn can_reset_stock_from_waste(stock_is_empty: bool, waste_is_empty: bool) -> bool {
    stock_is_empty && !waste_is_empty
}

/// 配り直し回数がまだ上限に達していないか。
pub fn is_within_redeal_limit(redeal_count: u32, limit: RedealLimit) -> bool {
    match limit {
        RedealLimit::Unlimited => true,
        RedealLimit::Limited(max) => redeal_count < max,
    }
}

/// 捨て札のカードが移動の起点になれるか。一番上で、しかも表向きのときだけ！
pub fn is_free_waste_card(card: &Card, waste_top: Option<&Card>) -> bool {
    card.is_face_up() && waste_top.map_or(false, |top| top.id() == card.id())
}
