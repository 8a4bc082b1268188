pub mod export;
pub mod indicators;
pub mod ledger;
