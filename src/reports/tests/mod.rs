// src/reports/tests/mod.rs

mod ranking_tests;
mod validators_tests;
