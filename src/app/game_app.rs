// src/app/game_app.rs

use std::sync::{Arc, Mutex};

use js_sys::Function;
use log::{info, warn};
use wasm_bindgen::prelude::*;

use crate::app::state_getter::{self, lock_game, to_js_error};
use crate::components::card::CardId;
use crate::config::game_config::GameConfig;
use crate::events::{GameEvent, SubscriptionId};
use crate::game::Game;
use crate::protocol;

// --- JS から Game を操作するための窓口 ---
// ルールの判定はしない。JSON を受け取って Game に渡して、結果を JSON で返すだけ！
#[wasm_bindgen]
pub struct GameApp {
    game: Arc<Mutex<Game>>,
}

#[wasm_bindgen]
impl GameApp {
    /// `config_json` は `{"draw_batch_size":3}` みたいな設定 JSON。
    /// 省略 (undefined) や空文字ならデフォルト設定。作った時点でもう配ってあるよ。
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<GameApp, JsValue> {
        info!("GameApp: Initializing...");
        let config = match config_json.as_deref().map(str::trim) {
            None | Some("") => GameConfig::default(),
            Some(json) => GameConfig::from_json(json).map_err(to_js_error)?,
        };
        let game = Game::new(config).map_err(to_js_error)?;
        info!("GameApp: Initialization complete.");
        Ok(Self {
            game: Arc::new(Mutex::new(game)),
        })
    }

    #[wasm_bindgen]
    pub fn shuffle_and_deal(&self) -> Result<(), JsValue> {
        lock_game(&self.game)?.shuffle_and_deal();
        Ok(())
    }

    /// シード付きで配り直す (同じシードなら同じ配り)。
    #[wasm_bindgen]
    pub fn shuffle_and_deal_with_seed(&self, seed: u64) -> Result<(), JsValue> {
        lock_game(&self.game)?.shuffle_and_deal_with_seed(seed);
        Ok(())
    }

    /// 山札クリック。結果 (DrawOutcome) を JSON で返す。
    #[wasm_bindgen]
    pub fn draw(&self) -> Result<String, JsValue> {
        let outcome = lock_game(&self.game)?.draw();
        protocol::to_json(&outcome).map_err(to_js_error)
    }

    /// `pile_json` は `"Waste"` や `{"Tableau":3}`。動いたら true。
    #[wasm_bindgen]
    pub fn attempt_move(&self, card_id: usize, pile_json: &str) -> Result<bool, JsValue> {
        let destination = protocol::parse_pile_id(pile_json).map_err(to_js_error)?;
        lock_game(&self.game)?
            .attempt_move(CardId(card_id), destination)
            .map_err(to_js_error)
    }

    /// ダブルクリック用。動いた先の山の ID (JSON) を返す。どこにも置けなければ undefined。
    #[wasm_bindgen]
    pub fn auto_drop_card(&self, card_id: usize) -> Result<Option<String>, JsValue> {
        let target = lock_game(&self.game)?
            .auto_drop_card(CardId(card_id))
            .map_err(to_js_error)?;
        target
            .map(|pile| protocol::to_json(&pile).map_err(to_js_error))
            .transpose()
    }

    #[wasm_bindgen]
    pub fn flip_top_if_needed(&self, pile_json: &str) -> Result<bool, JsValue> {
        let pile = protocol::parse_pile_id(pile_json).map_err(to_js_error)?;
        lock_game(&self.game)?
            .flip_top_if_needed(pile)
            .map_err(to_js_error)
    }

    #[wasm_bindgen]
    pub fn pile_contents(&self, pile_json: &str) -> Result<String, JsValue> {
        let pile = protocol::parse_pile_id(pile_json).map_err(to_js_error)?;
        state_getter::get_pile_contents_json(&self.game, pile)
    }

    #[wasm_bindgen]
    pub fn top_card(&self, pile_json: &str) -> Result<String, JsValue> {
        let pile = protocol::parse_pile_id(pile_json).map_err(to_js_error)?;
        state_getter::get_top_card_json(&self.game, pile)
    }

    #[wasm_bindgen]
    pub fn is_won(&self) -> Result<bool, JsValue> {
        Ok(lock_game(&self.game)?.is_won())
    }

    /// 画面描画用に、ゲーム全体の状態を JSON で返す。
    #[wasm_bindgen]
    pub fn state_json(&self) -> Result<String, JsValue> {
        state_getter::get_state_json(&self.game)
    }

    #[wasm_bindgen]
    pub fn reconfigure(&self, config_json: &str) -> Result<(), JsValue> {
        let config = GameConfig::from_json(config_json).map_err(to_js_error)?;
        lock_game(&self.game)?.reconfigure(config).map_err(to_js_error)
    }

    /// JS の関数を通知先に登録する。関数には GameEvent の JSON 文字列が1つ渡される。
    /// 戻り値の番号を `unsubscribe` に渡すと解除できるよ。
    ///
    /// コールバックの中から GameApp のメソッドを呼ぶと "engine busy" エラーになるので、
    /// 状態を読み直したいときは setTimeout などで後回しにしてね。
    #[wasm_bindgen]
    pub fn subscribe(&self, callback: Function) -> Result<u32, JsValue> {
        let mut game = lock_game(&self.game)?;
        let id = game.subscribe(move |event: &GameEvent| {
            let json = match protocol::to_json(event) {
                Ok(json) => json,
                Err(e) => {
                    warn!("GameApp: failed to serialize event {:?}: {}", event, e);
                    return;
                }
            };
            if let Err(e) = callback.call1(&JsValue::NULL, &JsValue::from_str(&json)) {
                warn!("GameApp: event callback threw: {:?}", e);
            }
        });
        Ok(id.0)
    }

    #[wasm_bindgen]
    pub fn unsubscribe(&self, subscription_id: u32) -> Result<bool, JsValue> {
        Ok(lock_game(&self.game)?.unsubscribe(SubscriptionId(subscription_id)))
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
#[path = "game_app_tests.rs"]
mod tests;
