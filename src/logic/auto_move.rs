//! カードの自動移動に関するロジックだよ！🪄
//! ダブルクリックされたカードを、置ける組札 (Foundation) に自動で送るときに使う。

use log::debug;

use crate::components::card::CardId;
use crate::components::stack::PileId;
use crate::config::constants::FOUNDATION_COUNT;
use crate::logic::rules;
use crate::table::Table;

/// 指定カードを、今の盤面で移動できる組札があるか探す。
/// 組札 0 → 3 の順に調べて、最初に置ける組札の ID を返すよ。
///
/// カードが見つからない、持ち上げられない、どこにも置けない、のどれでも None。
pub fn find_automatic_foundation_move(table: &Table, card: CardId) -> Option<PileId> {
    debug!("[AutoMove] Finding automatic foundation move for card {}...", card.0);

    let source_id = table.locate(card).ok()?;
    let source = table.pile(source_id).ok()?;
    let run = source.run_from(card)?;

    for index in 0..FOUNDATION_COUNT {
        let target_id = PileId::Foundation(index);
        let target = match table.pile(target_id) {
            Ok(target) => target,
            Err(_) => continue,
        };
        if rules::is_move_valid(run, source, target) {
            debug!("  Found valid foundation {} for card {}.", target_id, card.0);
            return Some(target_id);
        }
    }

    debug!("  No suitable foundation found for card {}.", card.0);
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};

    fn id(suit: Suit, rank: Rank) -> CardId {
        CardId::from_parts(suit, rank)
    }

    #[test]
    fn test_find_automatic_foundation_move() {
        let mut table = Table::with_full_deck();
        // Waste に A♥、2♥ の順に置く (一番上は 2♥)
        table.place_face_up(id(Suit::Heart, Rank::Ace), PileId::Waste);
        table.place_face_up(id(Suit::Heart, Rank::Two), PileId::Waste);
        table.place_face_up(id(Suit::Spade, Rank::Ace), PileId::Tableau(0));
        table.place_face_up(id(Suit::Heart, Rank::Three), PileId::Tableau(1));

        // シナリオ 1: 全 Foundation が空
        assert_eq!(
            find_automatic_foundation_move(&table, id(Suit::Spade, Rank::Ace)),
            Some(PileId::Foundation(3)),
            "A♠ は空のスペード組札 (3) へ"
        );
        assert_eq!(find_automatic_foundation_move(&table, id(Suit::Heart, Rank::Two)), None);
        assert_eq!(
            find_automatic_foundation_move(&table, id(Suit::Heart, Rank::Ace)),
            None,
            "2♥ の下に埋まっている A♥ は動かせない"
        );

        // シナリオ 2: ハートの組札に A♥ がある
        table.place_face_up(id(Suit::Heart, Rank::Ace), PileId::Foundation(0));
        assert_eq!(
            find_automatic_foundation_move(&table, id(Suit::Heart, Rank::Two)),
            Some(PileId::Foundation(0))
        );
        assert_eq!(find_automatic_foundation_move(&table, id(Suit::Heart, Rank::Three)), None);
    }

    #[test]
    fn unknown_card_has_no_move() {
        let table = Table::with_full_deck();
        assert_eq!(find_automatic_foundation_move(&table, CardId(77)), None);
    }
}
