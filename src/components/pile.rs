// src/components/pile.rs
//! カードの山 (Pile) そのものだよ！🗂️
//!
//! 山はカードを下から順に `Vec<Card>` で持っていて、持っているカードの
//! 持ち主はこの山だけ。カードを動かすときは「元の山から取り外す → 先の山に積む」
//! を一気にやるので、同じカードが2つの山に見えることはないよ。
//!
//! 山の種類ごとのルール (置ける？持ち上げられる？) は `PileKind` で
//! `match` して、`logic::rules` の関数に任せる。

use serde::{Deserialize, Serialize};

use crate::components::card::{Card, CardId};
use crate::components::stack::{PileId, PileKind};
use crate::logic::rules;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    id: PileId,
    cards: Vec<Card>,
    /// 組札の一番上のカードを持ち上げてよいか (組札以外では使わない)
    takeback_allowed: bool,
}

impl Pile {
    pub fn new(id: PileId) -> Self {
        Self {
            id,
            cards: Vec::new(),
            takeback_allowed: false,
        }
    }

    pub fn id(&self) -> PileId {
        self.id
    }

    pub fn kind(&self) -> PileKind {
        self.id.kind()
    }

    /// 下から上の順に並んだカード。
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn top_card(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// 指定カードが下から何番目にあるか (0 が一番下)。
    pub fn position_of(&self, card: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id() == card)
    }

    pub(crate) fn set_takeback_allowed(&mut self, allowed: bool) {
        self.takeback_allowed = allowed;
    }

    /// カードを渡された順に上へ積む。各カードの `pile` もこの山に書き換えるよ。
    /// ルールチェックは呼び出し側の仕事なので、ここでは失敗しない。
    pub fn add_cards(&mut self, cards: Vec<Card>) {
        for card in cards {
            self.add_card(card);
        }
    }

    pub fn add_card(&mut self, mut card: Card) {
        card.pile = Some(self.id);
        self.cards.push(card);
    }

    /// `from` を起点に、動かすことになるカード列を読むだけ (取り外さない)。
    ///
    /// 場札なら `from` とその上に積まれた全部、それ以外の山では `from` が
    /// 一番上のときだけその1枚。`from` がこの山にないときは None。
    pub fn run_from(&self, from: CardId) -> Option<&[Card]> {
        let index = self.position_of(from)?;
        match self.kind() {
            PileKind::Tableau => Some(&self.cards[index..]),
            _ if index + 1 == self.cards.len() => Some(&self.cards[index..]),
            _ => None,
        }
    }

    /// `from` とその上のカードを取り外して、元の順番のまま返す。
    /// 取り外したカードの `pile` は None になる。
    ///
    /// `run_from` が None になるケース (この山にない、場札以外で一番上じゃない) では
    /// 何もせず空の Vec を返すよ。
    pub fn remove_cards(&mut self, from: CardId) -> Vec<Card> {
        let index = match self.run_from(from) {
            Some(run) => self.cards.len() - run.len(),
            None => return Vec::new(),
        };
        let mut removed = self.cards.split_off(index);
        for card in removed.iter_mut() {
            card.pile = None;
        }
        removed
    }

    /// 一番上のカードを1枚だけ取り外す。山札から引くときに使う。
    pub fn pop_top(&mut self) -> Option<Card> {
        let mut card = self.cards.pop()?;
        card.pile = None;
        Some(card)
    }

    /// 山を空にして、持っていたカードを全部返す (カードを失くさないように！)。
    pub fn reset(&mut self) -> Vec<Card> {
        let mut cards = std::mem::take(&mut self.cards);
        for card in cards.iter_mut() {
            card.pile = None;
        }
        cards
    }

    /// 場札の一番上が裏向きなら表にする。表にしたら true。
    /// 場札以外の山では何もしない。
    pub fn flip_top_if_needed(&mut self) -> bool {
        if self.kind() != PileKind::Tableau {
            return false;
        }
        match self.cards.last_mut() {
            Some(top) if !top.is_face_up() => {
                top.flip_up();
                true
            }
            _ => false,
        }
    }

    /// 全カードの向きを揃える。配るときと、捨て札を山札に戻すときに使う。
    pub(crate) fn turn_all(&mut self, face_up: bool) {
        for card in self.cards.iter_mut() {
            if face_up {
                card.flip_up();
            } else {
                card.flip_down();
            }
        }
    }

    /// 一番上のランク。空なら 0。組札の進み具合を見るのに使う。
    pub fn top_rank(&self) -> u8 {
        rules::foundation_top_rank(self.top_card())
    }

    /// 組札が K まで揃ったか。組札以外は常に false。
    pub fn is_complete(&self) -> bool {
        self.kind() == PileKind::Foundation && rules::is_foundation_complete(self.top_rank())
    }

    /// 移動してきたカード列の一番下のカード (`card`) をこの山に置けるか。
    pub fn is_valid_drop(&self, card: &Card) -> bool {
        match self.id {
            PileId::Stock | PileId::Waste => false,
            PileId::Foundation(index) => {
                rules::can_move_to_foundation(card, index, self.top_card())
            }
            PileId::Tableau(_) => rules::can_move_to_tableau(card, self.top_card()),
        }
    }

    /// このカードを移動の起点として持ち上げられるか。
    pub fn is_free_card(&self, card: CardId) -> bool {
        let candidate = match self.cards.iter().find(|c| c.id() == card) {
            Some(candidate) => candidate,
            None => return false,
        };
        match self.kind() {
            PileKind::Stock => false,
            PileKind::Waste => rules::is_free_waste_card(candidate, self.top_card()),
            PileKind::Foundation => {
                self.takeback_allowed && self.top_card().map_or(false, |top| top.id() == card)
            }
            PileKind::Tableau => rules::is_free_tableau_card(candidate),
        }
    }
}
