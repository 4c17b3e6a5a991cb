// src/app/state_getter.rs
//! Game の状態を読み出して JSON 文字列にする関数たち。

use std::sync::{Arc, Mutex, MutexGuard};

use log::{error, info};
use wasm_bindgen::JsValue;

use crate::components::stack::PileId;
use crate::error::GameError;
use crate::game::Game;
use crate::protocol;

/// GameError を JS に返せる形にする。
pub(crate) fn to_js_error(err: GameError) -> JsValue {
    error!("{}", err);
    JsValue::from_str(&err.to_string())
}

/// Game をロックする。
///
/// 通知コールバックの中から GameApp を呼び直すと、ここでロックが取れずに
/// エラーになる (待ってもロックは外れないので、デッドロックする代わりにすぐ失敗する)。
pub(crate) fn lock_game(game_arc: &Arc<Mutex<Game>>) -> Result<MutexGuard<'_, Game>, JsValue> {
    game_arc.try_lock().map_err(|e| {
        let error_msg = format!("engine busy: failed to lock game ({})", e);
        error!("{}", error_msg);
        JsValue::from_str(&error_msg)
    })
}

/// ゲーム全体の状態 (GameSnapshot) を JSON 文字列として返します。
pub fn get_state_json(game_arc: &Arc<Mutex<Game>>) -> Result<String, JsValue> {
    let game = lock_game(game_arc)?;
    info!("Getting game state...");
    let json = game.snapshot().to_json().map_err(to_js_error)?;
    info!("Successfully serialized game state to JSON.");
    Ok(json)
}

/// 1つの山のカード (下から上) を JSON 配列で返す。
pub fn get_pile_contents_json(game_arc: &Arc<Mutex<Game>>, pile: PileId) -> Result<String, JsValue> {
    let game = lock_game(game_arc)?;
    let cards = game.pile_contents(pile).map_err(to_js_error)?;
    protocol::to_json(&cards).map_err(to_js_error)
}

/// 山の一番上のカードを JSON で返す。空の山なら `null`。
pub fn get_top_card_json(game_arc: &Arc<Mutex<Game>>, pile: PileId) -> Result<String, JsValue> {
    let game = lock_game(game_arc)?;
    let top = game.top_card(pile).map_err(to_js_error)?;
    protocol::to_json(&top).map_err(to_js_error)
}
