//! CLI command implementations.

pub mod asmaul;
pub mod common;
pub mod compass;
pub mod config;
pub mod doa;
pub mod juz;
pub mod prayer;
pub mod qibla;
pub mod surah;
