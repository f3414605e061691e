//! Browser presentation: canvas board, overlays, input translation and
//! `localStorage` persistence.

pub mod board;
pub mod keys;
pub mod overlays;
pub mod storage;
