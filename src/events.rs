// src/events.rs
//! ゲームの状態が変わったことを画面側に知らせる仕組みだよ！📣
//!
//! 画面側は `subscribe` でコールバックを登録しておくと、山が変わるたびに
//! `GameEvent` を受け取れる。登録がゼロでも Game は普通に動く。

use serde::{Deserialize, Serialize};

use crate::components::card::{Card, Suit};
use crate::components::stack::PileId;

/// Game から飛んでくる通知。
///
/// JSON にすると `{"type":"PileChanged","pile":"Waste","cards":[...]}` みたいな形になる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// 配り直しが終わった (このあと 13 個全部の PileChanged が続く)
    Dealt,
    /// 山の中身が変わった。`cards` は変わった後の中身 (下から上)。
    PileChanged { pile: PileId, cards: Vec<Card> },
    /// 組札が K まで揃った
    FoundationCompleted { suit: Suit },
    /// 4つの組札が全部揃った！🎉
    GameWon,
}

/// `subscribe` が返す登録番号。`unsubscribe` に渡すと登録解除できる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(pub u32);

type Listener = Box<dyn FnMut(&GameEvent)>;

/// コールバックのリスト。登録順に呼ぶ。
#[derive(Default)]
pub struct EventNotifier {
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u32,
}

impl EventNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&GameEvent) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// 登録を外す。見つかって外せたら true。
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn emit(&mut self, event: &GameEvent) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

// Box<dyn FnMut> は Debug できないので手で書く
impl std::fmt::Debug for EventNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventNotifier")
            .field("listeners", &self.listeners.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
