// src/applicants/tests/mod.rs

mod browser_tests;
