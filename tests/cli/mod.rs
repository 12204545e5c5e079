pub mod cluster;
pub mod config;
pub mod logging;
pub mod matrix;
pub mod normalize;
pub mod recommend;
pub mod similar;
pub mod stats;
pub mod support;
pub mod terms;
