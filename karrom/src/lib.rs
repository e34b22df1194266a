//! Karrom - Quran reader, prayer times and qibla compass
//!
//! This library holds the application kernel behind the Karrom front ends:
//! fetching Quran text, daily prayer times and the 99 names of Allah from
//! public REST APIs, filtering them, computing the qibla bearing and
//! turning raw device sensor readings into a compass heading.
//!
//! The display layer is not part of this crate. A front end owns one
//! [`session::Session`] and renders whatever state it exposes.

pub mod app;
pub mod catalog;
pub mod clip;
pub mod config;
pub mod coord;
pub mod filter;
pub mod locale;
pub mod location;
pub mod logging;
pub mod paging;
pub mod prayer;
pub mod provider;
pub mod qibla;
pub mod session;
