// src/systems/move_card_system.rs

use log::{debug, error, info};
use serde::{Deserialize, Serialize};

use crate::components::card::CardId;
use crate::components::stack::PileId;
use crate::error::GameError;
use crate::logic::rules;
use crate::table::Table;

/// 移動が成功したときに何が起きたかのまとめ。Game がイベントを出すのに使う。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    pub source: PileId,
    pub destination: PileId,
    pub moved_count: usize,
    /// 移動元の場札で、新しく一番上になったカードを表にしたか
    pub revealed: bool,
}

/// カード移動のロジックを実行するシステムだよ！🖱️💨
///
/// 「どのカードをどこに動かすか」を受け取って、ソリティアのルール上
/// 可能かチェックし、可能なら盤面を更新するよ。
#[derive(Default)]
pub struct MoveCardSystem;

impl MoveCardSystem {
    pub fn new() -> Self {
        Self
    }

    /// カード移動リクエストを処理する本体。
    ///
    /// - 知らないカード・山の ID → `Err` (呼び出し側のバグ)
    /// - ルール違反 → `Ok(None)`、盤面はそのまま
    /// - 成功 → `Ok(Some(report))`
    pub fn process_move_request(
        &self,
        table: &mut Table,
        card: CardId,
        destination: PileId,
    ) -> Result<Option<MoveReport>, GameError> {
        info!("MoveCardSystem: カード移動リクエストを処理します: {} -> {}", card.0, destination);

        let source = table.locate(card).map_err(|e| {
            error!("MoveCardSystem: {}", e);
            e
        })?;
        // 移動先の ID も先にチェック (範囲外なら Err)
        table.pile(destination).map_err(|e| {
            error!("MoveCardSystem: {}", e);
            e
        })?;

        if !self.check_move_validity(table, card, source, destination)? {
            info!("  ルール違反！移動できませんでした。🙅‍♀️");
            return Ok(None);
        }

        Ok(Some(self.apply_move(table, card, source, destination)?))
    }

    /// ルール上動かせるかを、盤面を変更せずに調べる。
    fn check_move_validity(
        &self,
        table: &Table,
        card: CardId,
        source: PileId,
        destination: PileId,
    ) -> Result<bool, GameError> {
        let source_pile = table.pile(source)?;
        let destination_pile = table.pile(destination)?;
        let run = match source_pile.run_from(card) {
            Some(run) => run,
            None => {
                debug!("  {} は {} の一番上じゃないので持ち上げられない", card.0, source);
                return Ok(false);
            }
        };
        debug!("  移動するカード列: {}", rules::describe_cards(run));
        Ok(rules::is_move_valid(run, source_pile, destination_pile))
    }

    /// 検証済みの移動を実行する。取り外し → 積む を一気にやるよ。
    fn apply_move(
        &self,
        table: &mut Table,
        card: CardId,
        source: PileId,
        destination: PileId,
    ) -> Result<MoveReport, GameError> {
        let moved = table.pile_mut(source)?.remove_cards(card);
        let moved_count = moved.len();
        table.pile_mut(destination)?.add_cards(moved);

        // 場札から取ったら、裏向きで残ったカードを表にする
        let revealed = table.pile_mut(source)?.flip_top_if_needed();
        if revealed {
            debug!("  {} の一番上を表にしました 👀", source);
        }

        info!("  {} 枚を {} から {} へ移動しました ✨", moved_count, source, destination);
        Ok(MoveReport {
            source,
            destination,
            moved_count,
            revealed,
        })
    }
}
