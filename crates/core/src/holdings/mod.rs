//! Holdings module - net positions derived from the trade log.

mod holdings_model;
mod holdings_service;


pub use holdings_model::{Holding, HoldingsView};
pub use holdings_service::{net_position, position_map, HoldingsService, HoldingsServiceTrait};
