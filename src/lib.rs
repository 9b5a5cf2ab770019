#![forbid(unsafe_code)]
//! PathView — an interactive terminal tree viewer for delimited path lists.

pub mod cli;
pub mod event_loop;
pub mod export;
pub mod input;
pub mod recent;
pub mod render;
pub mod terminal;
pub mod tree;
