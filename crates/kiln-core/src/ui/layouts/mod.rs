// src/ui/layouts/mod.rs
//! Layout primitives for sized controls

pub mod box_model;

pub use box_model::BoxModel;
