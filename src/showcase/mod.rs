//! Interactive landing page showcase: the before/after inbox demo and
//! the feature grid with per-feature detail dialogs. All copy lives in
//! [`catalog`] as static data so the marketing pages stay data driven.

pub mod catalog;
pub mod demo;
pub mod feature_card;
