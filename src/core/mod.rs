//! Core ledger module
//!
//! This module contains the ledger's domain components:
//! - `wallet` - The wallet aggregate and its ledger entries
//! - `factory` - Rule-table driven wallet construction
//! - `traits` - Persistence ports
//! - `repository` - In-memory implementations of the ports
//! - `ledger` - The context commands run against
//! - `report` - Entity walking and text rendering

pub mod factory;
pub mod ledger;
pub mod report;
pub mod repository;
pub mod traits;
pub mod wallet;

pub use factory::WalletFactory;
pub use ledger::Ledger;
pub use report::{walk_ledger, Entity, Reporter, TextReport};
pub use repository::{InMemoryCategoryRepository, InMemoryWalletRepository};
pub use traits::{CategoryRepository, WalletRepository};
pub use wallet::{LedgerEntry, Wallet};
