//! Terminal front end for Measure Report Studio.

pub mod cli;
pub mod command;
pub mod commands;
pub mod host;
pub mod logging;
pub mod render;
pub mod session;
pub mod worker;
