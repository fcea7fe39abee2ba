// Copyright 2016 Phillip Oppermann, Calvin Lee and JJ Garzella.
// See the README.md file at the top-level directory of this
// distribution.
//
// Licensed under the MIT license <LICENSE or
// http://opensource.org/licenses/MIT>, at your option.
// This file may not be copied, modified, or distributed
// except according to those terms.

//! The scancode decode state machine and the read API on top of it.
//!
//! Scan set 2 sends a key release as 0xF0 followed by the key's
//! make-code, so one bit of lookahead memory is enough to reconstruct
//! press/release semantics without buffering the sequence. Shift keys
//! never emit a character themselves; they only latch case state.

use core::hint::spin_loop;

use crate::keymap;
use crate::sampler::BitSampler;

/// Key-release prefix of scan set 2.
const RELEASE_PREFIX: u8 = 0xF0;
/// Left shift make-code.
const LEFT_SHIFT: u8 = 0x12;
/// Right shift make-code.
const RIGHT_SHIFT: u8 = 0x59;

bitflags! {
    /// Session state carried from one scancode to the next.
    struct Flags: u8 {
        /// The previous scancode was the release prefix and no event
        /// has consumed it yet. Applies to exactly one following code.
        const RELEASE = 1 << 0;
        /// A shift key is currently held down.
        const SHIFT = 1 << 1;
    }
}

/// Decodes the scancode stream of one keyboard port into ASCII.
///
/// One decoder per sampler, by ownership; there is no hidden global
/// instance, so a second port simply gets a second `Decoder`. The
/// sampler's hardware must be configured (see
/// [`SamplerConfig`](crate::SamplerConfig)) before the first poll.
pub struct Decoder<S: BitSampler> {
    sampler: S,
    flags: Flags,
    /// Decoded character awaiting delivery, 0 when none.
    pending: u8,
}

impl<S: BitSampler> Decoder<S> {
    /// Returns a decoder draining `sampler`, with no release pending,
    /// shift up and no character ready.
    pub fn new(sampler: S) -> Decoder<S> {
        Decoder {
            sampler,
            flags: Flags::empty(),
            pending: 0,
        }
    }

    /// Consumes at most one scancode from the sampler and updates the
    /// session state. Does nothing while a decoded character is still
    /// awaiting delivery, so no keypress is ever lost to a slow caller.
    pub fn advance(&mut self) {
        if self.pending != 0 {
            return;
        }
        let code = match self.sampler.pop() {
            Some(code) => code,
            None => return,
        };
        match code {
            RELEASE_PREFIX => {
                // A second prefix in a row just re-arms the flag,
                // which the next ordinary code clears again.
                self.flags.insert(Flags::RELEASE);
            }
            LEFT_SHIFT | RIGHT_SHIFT => {
                if self.flags.contains(Flags::RELEASE) {
                    self.flags.remove(Flags::SHIFT | Flags::RELEASE);
                } else {
                    // Holding shift repeats the make-code; latching is
                    // idempotent, not a toggle.
                    self.flags.insert(Flags::SHIFT);
                }
            }
            _ => {
                if !self.flags.contains(Flags::RELEASE) {
                    let ascii = keymap::translate(code, self.flags.contains(Flags::SHIFT));
                    if ascii == 0 {
                        log::trace!("scancode {:#04x} has no ASCII value", code);
                    }
                    self.pending = ascii;
                }
                self.flags.remove(Flags::RELEASE);
            }
        }
    }

    /// Non-blocking read. Returns the character waiting for delivery,
    /// or 0 if none is ready yet. Does not consume the character;
    /// repeated polls return the same value until [`get_char`] does.
    ///
    /// [`get_char`]: Decoder::get_char
    pub fn poll(&mut self) -> u8 {
        self.advance();
        self.pending
    }

    /// Blocking read. Spins on [`poll`] until a character is ready,
    /// then consumes and returns it. This is the only place the
    /// pending character is cleared. There is no timeout; a caller
    /// that never receives a keypress blocks forever.
    ///
    /// [`poll`]: Decoder::poll
    pub fn get_char(&mut self) -> u8 {
        loop {
            let c = self.poll();
            if c != 0 {
                self.pending = 0;
                return c;
            }
            spin_loop();
        }
    }
}
