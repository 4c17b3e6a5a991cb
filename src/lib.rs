// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod events;
pub mod game;
pub mod logging;
pub mod logic;
pub mod protocol;
pub mod systems;
pub mod table;

// よく使う型はクレートの一番上から使えるようにしておく
pub use app::GameApp;
pub use components::{Card, CardColor, CardId, GameStatus, Pile, PileId, PileKind, Rank, Suit};
pub use config::{GameConfig, RedealLimit};
pub use error::GameError;
pub use events::{GameEvent, SubscriptionId};
pub use game::Game;
pub use protocol::{GameSnapshot, PileSnapshot};
pub use systems::{DrawOutcome, StockStatus};
pub use table::Table;

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
    if logging::init(log::LevelFilter::Info) {
        log::info!("Panic hook set! Logger ready.");
    }
}
