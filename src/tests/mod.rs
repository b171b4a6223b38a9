// Shared fakes and setup for the test modules below.
pub mod common;

mod storage;
mod views;
