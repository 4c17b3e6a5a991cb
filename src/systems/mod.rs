// src/systems/mod.rs

// 盤面 (Table) の状態を変えるシステムたち！
pub mod deal_system;
pub mod move_card_system;
pub mod stock_system;
pub mod win_condition_system;

pub use deal_system::DealInitialCardsSystem;
pub use move_card_system::{MoveCardSystem, MoveReport};
pub use stock_system::{DrawOutcome, StockStatus, StockSystem};
pub use win_condition_system::WinConditionSystem;
