// src/game.rs
//! ゲーム本体 (Game) だよ！🎮
//!
//! 盤面 (Table)、設定、配り直し回数、勝敗ステータス、通知リストを持っていて、
//! 外からの操作は全部ここを通る。ルール判定は systems / logic に任せて、
//! Game は「状態を変えたら通知を出す」ところまでを担当するよ。

use log::{error, info};
use rand::rngs::StdRng;
use rand::{thread_rng, SeedableRng};

use crate::components::card::{Card, CardId};
use crate::components::game_state::GameStatus;
use crate::components::stack::PileId;
use crate::config::game_config::GameConfig;
use crate::error::GameError;
use crate::events::{EventNotifier, GameEvent, SubscriptionId};
use crate::logic::auto_move::find_automatic_foundation_move;
use crate::logic::rules::stock_waste;
use crate::protocol::GameSnapshot;
use crate::systems::{
    DealInitialCardsSystem, DrawOutcome, MoveCardSystem, MoveReport, StockStatus, StockSystem,
    WinConditionSystem,
};
use crate::table::Table;

#[derive(Debug)]
pub struct Game {
    table: Table,
    config: GameConfig,
    redeal_count: u32,
    status: GameStatus,
    /// 捨て札のどこから横に広げて見せるか (最後にめくる前の捨て札の枚数)
    waste_fan_start: usize,
    notifier: EventNotifier,
}

impl Game {
    /// 設定をチェックして、52枚を作ってすぐに配る。
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        let mut game = Self::undealt(config)?;
        game.shuffle_and_deal();
        Ok(game)
    }

    /// シード付きで作る。同じシードなら同じ配りになるよ (テストやリプレイ用)。
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        let mut game = Self::undealt(config)?;
        game.shuffle_and_deal_with_seed(seed);
        Ok(game)
    }

    /// 52枚全部を山札に入れただけの、まだ配っていない Game。
    fn undealt(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let mut table = Table::new();
        table.stock_mut().add_cards(crate::logic::deck::create_standard_deck());
        table.set_foundation_takeback(config.allow_foundation_takeback);
        Ok(Self {
            table,
            config,
            redeal_count: 0,
            status: GameStatus::Playing,
            waste_fan_start: 0,
            notifier: EventNotifier::new(),
        })
    }

    // --- コマンド ---

    /// 全カードを回収してシャッフルし、配り直す。カウンタとステータスも最初に戻る。
    pub fn shuffle_and_deal(&mut self) {
        let mut rng = thread_rng();
        DealInitialCardsSystem.execute(&mut self.table, &mut rng);
        self.after_deal();
    }

    pub fn shuffle_and_deal_with_seed(&mut self, seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        DealInitialCardsSystem.execute(&mut self.table, &mut rng);
        self.after_deal();
    }

    fn after_deal(&mut self) {
        self.redeal_count = 0;
        self.status = GameStatus::Playing;
        self.waste_fan_start = 0;
        info!("🎮 新しいゲームを開始しました (draw_batch_size = {})", self.config.draw_batch_size);
        self.notifier.emit(&GameEvent::Dealt);
        for pile in PileId::all() {
            self.notify_pile_changed(pile);
        }
    }

    /// 山札をクリックしたときの処理。
    pub fn draw(&mut self) -> DrawOutcome {
        let waste_len_before = self.table.waste().len();
        let outcome = StockSystem.draw(&mut self.table, &self.config, &mut self.redeal_count);
        match outcome {
            DrawOutcome::Dealt { .. } => self.waste_fan_start = waste_len_before,
            DrawOutcome::Restacked { .. } => self.waste_fan_start = 0,
            DrawOutcome::RedealLimitReached | DrawOutcome::NothingToDraw => {}
        }
        if outcome.changed_piles() {
            self.notify_pile_changed(PileId::Stock);
            self.notify_pile_changed(PileId::Waste);
        }
        outcome
    }

    /// `card` (と、場札ならその上に乗っている全部) を `destination` に動かす。
    /// 動いたら `Ok(true)`、ルール上ダメなら `Ok(false)` で盤面はそのまま。
    pub fn attempt_move(&mut self, card: CardId, destination: PileId) -> Result<bool, GameError> {
        match MoveCardSystem::new().process_move_request(&mut self.table, card, destination)? {
            Some(report) => {
                self.after_move(report);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn after_move(&mut self, report: MoveReport) {
        self.notify_pile_changed(report.source);
        self.notify_pile_changed(report.destination);

        if let Ok(pile) = self.table.pile(report.destination) {
            if pile.is_complete() {
                if let Some(suit) = report.destination.foundation_suit() {
                    info!("組札 {} が完成！👑", suit.symbol());
                    self.notifier.emit(&GameEvent::FoundationCompleted { suit });
                }
            }
        }

        if WinConditionSystem::new().run(&self.table, &mut self.status) {
            info!("🎉🎉🎉 クリア！おめでとう！ 🎉🎉🎉");
            self.notifier.emit(&GameEvent::GameWon);
        }
    }

    /// ダブルクリック用。置ける組札を 0 → 3 の順に探して、最初に見つかった所へ動かす。
    pub fn auto_drop_card(&mut self, card: CardId) -> Result<Option<PileId>, GameError> {
        self.table.locate(card).map_err(|e| {
            error!("auto_drop_card: {}", e);
            e
        })?;
        let target = match find_automatic_foundation_move(&self.table, card) {
            Some(target) => target,
            None => return Ok(None),
        };
        if self.attempt_move(card, target)? {
            Ok(Some(target))
        } else {
            Ok(None)
        }
    }

    /// 場札の一番上が裏向きなら表にする。表にしたら true。
    pub fn flip_top_if_needed(&mut self, pile: PileId) -> Result<bool, GameError> {
        let flipped = self
            .table
            .pile_mut(pile)
            .map_err(|e| {
                error!("flip_top_if_needed: {}", e);
                e
            })?
            .flip_top_if_needed();
        if flipped {
            self.notify_pile_changed(pile);
        }
        Ok(flipped)
    }

    /// 設定を入れ替える。山には触らない。
    pub fn reconfigure(&mut self, config: GameConfig) -> Result<(), GameError> {
        config.validate()?;
        info!("⚙️ 設定を変更: {:?}", config);
        self.table.set_foundation_takeback(config.allow_foundation_takeback);
        self.config = config;
        Ok(())
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&GameEvent) + 'static,
    {
        self.notifier.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    fn notify_pile_changed(&mut self, pile: PileId) {
        if self.notifier.listener_count() == 0 {
            return;
        }
        if let Ok(contents) = self.table.pile(pile) {
            let event = GameEvent::PileChanged {
                pile,
                cards: contents.cards().to_vec(),
            };
            self.notifier.emit(&event);
        }
    }

    // --- 問い合わせ ---

    /// 4つの組札が全部 K まで揃っているか。次に配るまで true のまま。
    pub fn is_won(&self) -> bool {
        self.status.is_won()
    }

    /// 山の中身 (下から上)。
    pub fn pile_contents(&self, pile: PileId) -> Result<&[Card], GameError> {
        Ok(self.table.pile(pile)?.cards())
    }

    pub fn top_card(&self, pile: PileId) -> Result<Option<&Card>, GameError> {
        Ok(self.table.pile(pile)?.top_card())
    }

    pub fn card(&self, id: CardId) -> Result<&Card, GameError> {
        self.table.find_card(id).map(|(_, card)| card)
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn redeal_count(&self) -> u32 {
        self.redeal_count
    }

    /// 今、捨て札を山札に戻す権利が残っているか。
    pub fn can_redeal(&self) -> bool {
        stock_waste::is_within_redeal_limit(self.redeal_count, self.config.max_redeals)
    }

    pub fn stock_status(&self) -> StockStatus {
        StockStatus::from_redeals(self.redeal_count, self.config.max_redeals)
    }

    /// 捨て札を横に広げ始める位置。捨て札が減ったときは枚数で頭打ちにする。
    pub fn waste_fan_start(&self) -> usize {
        self.waste_fan_start.min(self.table.waste().len())
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(self)
    }

    /// 52枚が1枚ずつちゃんと山に入っているか。
    pub fn check_integrity(&self) -> bool {
        self.table.is_partition_intact()
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod tests;
