// Copyright 2016 Phillip Oppermann, Calvin Lee and JJ Garzella.
// See the README.md file at the top-level directory of this
// distribution.
//
// Licensed under the MIT license <LICENSE or
// http://opensource.org/licenses/MIT>, at your option.
// This file may not be copied, modified, or distributed
// except according to those terms.

//! Decoding of a PS/2 keyboard's scan-set-2 scancode stream into ASCII.
//!
//! A hardware sampler reconstructs serial bytes from the keyboard's
//! two-wire data/clock signal and buffers them in a small RX queue;
//! this crate drains that queue through the [`BitSampler`] trait and
//! turns make/break sequences into characters:
//!
//! - [`keymap`] holds the two US-layout translation tables,
//! - [`Decoder`] tracks release prefixes and shift latching and
//!   exposes the non-blocking [`poll`] and blocking [`get_char`] reads,
//! - [`ScancodeQueue`] is a static-friendly software stand-in for the
//!   hardware RX queue, fed from an interrupt handler,
//! - [`SamplerConfig`] captures what the sampler hardware must be
//!   programmed with (adjacent data/clock pins, pull-ups, clock
//!   divider) before the first scancode can arrive.
//!
//! Extended 0xE0 scancodes (arrows, function cluster), keyboard-bound
//! commands (LEDs, typematic rate) and non-US layouts are out of scope.
//!
//! [`poll`]: Decoder::poll
//! [`get_char`]: Decoder::get_char

#![cfg_attr(not(test), no_std)]

// crates.io crates
#[macro_use]
extern crate bitflags;

pub mod keymap;
pub mod queue;
pub mod sampler;

mod decoder;

pub use self::decoder::Decoder;
pub use self::queue::ScancodeQueue;
pub use self::sampler::{BitSampler, SamplerConfig};
