//! Browser card table for a six-card Golf game.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It is a
//! purely reactive view: the server pushes authoritative snapshots and game
//! events, and the table animates cards from whatever it shows toward what
//! the snapshot says. Clicks on playable cards become intents pushed back to
//! the server; the table never changes its own model in response to input.
//!
//! The host page owns the socket and forwards messages to
//! [`bridge::GameCanvas`]. Everything below [`table::TableCore`] is plain
//! Rust and tested natively.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`table`] | Table lifecycle, the entity registry and testable [`table::TableCore`] |
//! | [`bridge`] | `wasm_bindgen` surface, asset loading and the frame loop |
//! | [`snapshot`] | Server snapshot types and playable regions |
//! | [`protocol`] | Inbound message parsing and outbound intents |
//! | [`entity`] | Card entities and the ordered stage |
//! | [`tween`] | Property tweens, easing and the sequencer |
//! | [`motion`] | Per-event animation recipes |
//! | [`layout`] | Seats, slot coordinates and table anchors |
//! | [`assets`] | Spritesheet manifest and texture lookup |
//! | [`camera`] | Letterbox fit and coordinate conversions |
//! | [`hit`] | Hit-testing against card entities |
//! | [`render`] | Scene rendering to a 2D context |
//! | [`config`] | Host-supplied table configuration |
//! | [`error`] | Crate error type |
//! | [`consts`] | Shared constants (geometry, timings, reserved cards) |

pub mod assets;
pub mod bridge;
pub mod camera;
pub mod config;
pub mod consts;
pub mod entity;
pub mod error;
pub mod hit;
pub mod layout;
pub mod motion;
pub mod protocol;
pub mod render;
pub mod snapshot;
pub mod table;
pub mod tween;
