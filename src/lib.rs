//! Figma コミュニティプラグインのバッジ埋め込みスニペット生成
//!
//! コア処理（`badge`）は純粋関数のみで構成され、ネットワークや状態を持たない。

pub mod badge;
pub mod config;
pub mod env;
pub mod error;
pub mod http;
pub mod output;
pub mod tui;
