//! CLI commands for mathrec

pub mod cluster;
pub mod dispatch;
pub mod helpers;
pub mod matrix;
pub mod normalize;
pub mod recommend;
pub mod similar;
pub mod stats;
pub mod terms;
