//! Integration test suite modules

mod catalog;
mod dimensions;
mod island;
mod progress;
mod render;
