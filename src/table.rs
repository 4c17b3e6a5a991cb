// src/table.rs
//! 盤面 (Table) だよ！山札・捨て札・組札4つ・場札7列の、全部で13個の山を持つ。🃏
//!
//! 「このカードはどの山にある？」「この山の一番上は？」みたいな問い合わせは
//! 全部ここに聞く。52枚のカードは常にどれか1つの山に入っている。

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::components::card::{Card, CardId};
use crate::components::pile::Pile;
use crate::components::stack::PileId;
use crate::config::constants::{DECK_SIZE, FOUNDATION_COUNT, PILE_COUNT, TABLEAU_COUNT};
use crate::error::GameError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    stock: Pile,
    waste: Pile,
    foundations: Vec<Pile>,
    tableaus: Vec<Pile>,
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Table {
    /// 13個の空の山を用意する。
    pub fn new() -> Self {
        let table = Self {
            stock: Pile::new(PileId::Stock),
            waste: Pile::new(PileId::Waste),
            foundations: (0..FOUNDATION_COUNT).map(|i| Pile::new(PileId::Foundation(i))).collect(),
            tableaus: (0..TABLEAU_COUNT).map(|i| Pile::new(PileId::Tableau(i))).collect(),
        };
        debug_assert_eq!(table.piles().count(), PILE_COUNT);
        table
    }

    /// ID から山を取り出す。範囲外の ID なら InvalidPileReference。
    pub fn pile(&self, id: PileId) -> Result<&Pile, GameError> {
        let pile = match id {
            PileId::Stock => Some(&self.stock),
            PileId::Waste => Some(&self.waste),
            PileId::Foundation(index) => self.foundations.get(usize::from(index)),
            PileId::Tableau(index) => self.tableaus.get(usize::from(index)),
        };
        pile.ok_or(GameError::InvalidPileReference(id))
    }

    pub fn pile_mut(&mut self, id: PileId) -> Result<&mut Pile, GameError> {
        let pile = match id {
            PileId::Stock => Some(&mut self.stock),
            PileId::Waste => Some(&mut self.waste),
            PileId::Foundation(index) => self.foundations.get_mut(usize::from(index)),
            PileId::Tableau(index) => self.tableaus.get_mut(usize::from(index)),
        };
        pile.ok_or(GameError::InvalidPileReference(id))
    }

    pub fn stock(&self) -> &Pile {
        &self.stock
    }

    pub fn stock_mut(&mut self) -> &mut Pile {
        &mut self.stock
    }

    pub fn waste(&self) -> &Pile {
        &self.waste
    }

    pub fn waste_mut(&mut self) -> &mut Pile {
        &mut self.waste
    }

    pub fn foundations(&self) -> &[Pile] {
        &self.foundations
    }

    pub fn tableaus(&self) -> &[Pile] {
        &self.tableaus
    }

    /// 山札 → 捨て札 → 組札 → 場札 の順で全部の山を回す。
    pub fn piles(&self) -> impl Iterator<Item = &Pile> {
        [&self.stock, &self.waste]
            .into_iter()
            .chain(self.foundations.iter())
            .chain(self.tableaus.iter())
    }

    fn piles_mut(&mut self) -> impl Iterator<Item = &mut Pile> {
        [&mut self.stock, &mut self.waste]
            .into_iter()
            .chain(self.foundations.iter_mut())
            .chain(self.tableaus.iter_mut())
    }

    /// カードを探して、入っている山とカードそのものを返す。
    /// 52枚のどれでもない ID なら InvalidCardReference。
    pub fn find_card(&self, card: CardId) -> Result<(PileId, &Card), GameError> {
        if !card.is_valid() {
            return Err(GameError::InvalidCardReference(card));
        }
        self.piles()
            .find_map(|pile| {
                pile.cards()
                    .iter()
                    .find(|c| c.id() == card)
                    .map(|c| (pile.id(), c))
            })
            .ok_or(GameError::InvalidCardReference(card))
    }

    /// カードが入っている山の ID。
    pub fn locate(&self, card: CardId) -> Result<PileId, GameError> {
        self.find_card(card).map(|(pile, _)| pile)
    }

    /// 盤面上のカードの総数。いつでも 52 のはず。
    pub fn card_count(&self) -> usize {
        self.piles().map(Pile::len).sum()
    }

    /// 全部の山を空にして、カードを ID 順に並べて返す。
    /// 配り直しの前に使うよ。ID 順にしておくと、シード付きの配りが再現できる。
    pub fn gather_all(&mut self) -> Vec<Card> {
        let mut cards: Vec<Card> = self.piles_mut().flat_map(|pile| pile.reset()).collect();
        cards.sort_by_key(|card| card.id());
        cards
    }

    /// 4つの組札の一番上のランク (空なら 0)。
    pub fn foundation_top_ranks(&self) -> Vec<u8> {
        self.foundations.iter().map(Pile::top_rank).collect()
    }

    pub fn set_foundation_takeback(&mut self, allowed: bool) {
        for foundation in self.foundations.iter_mut() {
            foundation.set_takeback_allowed(allowed);
        }
    }

    /// 52枚が1枚ずつ、ちょうど1つの山に入っていて、各カードの `pile` が
    /// 入っている山を指しているかどうか。
    pub fn is_partition_intact(&self) -> bool {
        let mut seen = HashSet::with_capacity(DECK_SIZE);
        for pile in self.piles() {
            for card in pile.cards() {
                if card.pile() != Some(pile.id()) || !seen.insert(card.id()) {
                    return false;
                }
            }
        }
        seen.len() == DECK_SIZE
    }
}

#[cfg(test)]
impl Table {
    /// 52枚全部を裏向きで山札に入れた盤面。テストで好きな配置を作る土台にする。
    pub(crate) fn with_full_deck() -> Self {
        let mut table = Table::new();
        table.stock.add_cards(crate::logic::deck::create_standard_deck());
        table
    }

    /// カードをどこにあっても抜き出して、表向きで `target` の一番上に置く。
    pub(crate) fn place_face_up(&mut self, card: CardId, target: PileId) {
        let mut taken = self.take_card(card);
        taken.flip_up();
        self.pile_mut(target).expect("target pile").add_card(taken);
    }

    /// カードをどこにあっても抜き出して、裏向きで `target` の一番上に置く。
    pub(crate) fn place_face_down(&mut self, card: CardId, target: PileId) {
        let mut taken = self.take_card(card);
        taken.flip_down();
        self.pile_mut(target).expect("target pile").add_card(taken);
    }

    fn take_card(&mut self, card: CardId) -> Card {
        let pile_id = self.locate(card).expect("card on table");
        let pile = self.pile_mut(pile_id).expect("pile");
        let index = pile.position_of(card).expect("card in pile");
        // テスト専用なので、山の並びを無視して真ん中からでも抜き出す
        let mut rest = pile.reset();
        let mut taken = rest.remove(index);
        taken.pile = None;
        pile.add_cards(rest);
        taken
    }
}
