// src/logic/rules/move_validation.rs
//! カード移動の全体的な妥当性チェックを行う。

use log::debug;

use crate::components::card::Card;
use crate::components::pile::Pile;
use crate::components::stack::PileKind;

/// カード列 `run` を `source` から `destination` に動かせるか検証する。
///
/// 移動先のルールで見るのは `run` の一番下のカードだけ。場札の中の並び
/// (色違い・降順) は、正しい移動でしか作られないので既に成り立っている。
pub fn is_move_valid(run: &[Card], source: &Pile, destination: &Pile) -> bool {
    let first = match run.first() {
        Some(card) => card,
        None => {
            debug!("[Move Validation] Empty run, nothing to move.");
            return false;
        }
    };

    if destination.id() == source.id() {
        debug!("[Move Validation] {} is already on {}.", first, source.id());
        return false;
    }

    if first.pile() != Some(source.id()) || !source.is_free_card(first.id()) {
        debug!("[Move Validation] {} cannot be picked up from {}.", first, source.id());
        return false;
    }

    // 動かす列は、元の山から実際に取り外される列とぴったり同じじゃないとダメ。
    // 場札以外の山では一番上の1枚だけになる。
    match source.run_from(first.id()) {
        Some(detachable) if detachable.len() == run.len() => {}
        _ => {
            debug!(
                "[Move Validation] Run of {} starting at {} does not match {}.",
                run.len(),
                first,
                source.id()
            );
            return false;
        }
    }

    if destination.kind() == PileKind::Foundation && run.len() != 1 {
        debug!("[Move Validation] Foundations take one card at a time.");
        return false;
    }

    destination.is_valid_drop(first)
}
