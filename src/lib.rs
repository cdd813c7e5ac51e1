//! # Sketchcast Game Library
//!
//! This library provides the receiver-side logic for a cast-style drawing
//! and guessing party game. Phones join a shared screen as controllers
//! through an external session manager; this crate listens to the
//! manager's lifecycle and message notifications, narrates the game on a
//! display surface, and relays word lists and guesses between players.
//!
//! The session manager itself (player registry, transport, connection
//! handling) is consumed through the [`session::SessionManager`] trait and
//! never reimplemented here, so the whole crate can be driven headless in
//! tests through in-memory doubles.

#![cfg_attr(all(coverage_nightly, test), feature(coverage_attribute))]
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::similar_names)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

pub mod config;
pub mod constants;
pub mod debug;
pub mod game;
pub mod messages;
pub mod names;
pub mod player;
pub mod screen;
pub mod session;
