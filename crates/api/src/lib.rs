//! `vendo-api` — HTTP surface of the vending service.

pub mod app;
