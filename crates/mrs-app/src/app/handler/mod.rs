//! Message handlers, one module per message family.

mod data;
mod history;
mod navigation;
mod report;
mod update;
