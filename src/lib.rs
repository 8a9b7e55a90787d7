//! TUI Pong (workspace facade crate).
//!
//! This package exposes `tui_pong::{core,input,term,types}` while the
//! implementation lives in dedicated crates under `crates/`, plus the
//! application-level pieces shared by the binaries (configuration, logging
//! and the terminal application context).

pub mod app;
pub mod config;
pub mod logging;

pub use tui_pong_core as core;
pub use tui_pong_input as input;
pub use tui_pong_term as term;
pub use tui_pong_types as types;

pub use app::App;
pub use config::AppConfig;
