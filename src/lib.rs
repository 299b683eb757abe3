//! Terminal dashboard for a hospital front desk: OPD queue, bed
//! availability and inventory stock, switched by a three-way view selector.

pub mod app;
pub mod config;
pub mod core;
pub mod data;
pub mod export;
pub mod input;
pub mod logging;
pub mod modules;
pub mod terminal;
pub mod ui;
