//! Interactive terminal front-end. All analysis lives in [`crate::engine`];
//! this module only collects input and draws the current [`crate::engine::Report`].

pub mod app;
pub mod controller;
pub mod ui;
