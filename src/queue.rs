// Copyright 2016 Phillip Oppermann, Calvin Lee and JJ Garzella.
// See the README.md file at the top-level directory of this
// distribution.
//
// Licensed under the MIT license <LICENSE or
// http://opensource.org/licenses/MIT>, at your option.
// This file may not be copied, modified, or distributed
// except according to those terms.

//! A fixed-depth scancode FIFO for targets without a hardware RX queue.
//!
//! An interrupt handler pushes raw bytes, a [`Decoder`] holding a
//! reference drains them. `new` is const so the queue can live in a
//! `static` shared with the handler.
//!
//! [`Decoder`]: crate::Decoder

use spin::Mutex;

use crate::sampler::BitSampler;

/// Spin-locked byte FIFO of `DEPTH` entries.
pub struct ScancodeQueue<const DEPTH: usize> {
    inner: Mutex<Fifo<DEPTH>>,
}

struct Fifo<const DEPTH: usize> {
    buf: [u8; DEPTH],
    head: usize,
    len: usize,
}

impl<const DEPTH: usize> ScancodeQueue<DEPTH> {
    pub const fn new() -> ScancodeQueue<DEPTH> {
        ScancodeQueue {
            inner: Mutex::new(Fifo {
                buf: [0; DEPTH],
                head: 0,
                len: 0,
            }),
        }
    }

    /// Appends one scancode. A full queue drops the incoming byte and
    /// returns `false`, the same overrun behaviour as a hardware FIFO.
    pub fn push(&self, code: u8) -> bool {
        let mut fifo = self.inner.lock();
        if fifo.len == DEPTH {
            log::trace!("scancode queue full, dropping {:#04x}", code);
            return false;
        }
        let tail = (fifo.head + fifo.len) % DEPTH;
        fifo.buf[tail] = code;
        fifo.len += 1;
        true
    }

    /// Removes and returns the oldest scancode.
    pub fn pop(&self) -> Option<u8> {
        let mut fifo = self.inner.lock();
        if fifo.len == 0 {
            return None;
        }
        let code = fifo.buf[fifo.head];
        fifo.head = (fifo.head + 1) % DEPTH;
        fifo.len -= 1;
        Some(code)
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().len == 0
    }
}

impl<'q, const DEPTH: usize> BitSampler for &'q ScancodeQueue<DEPTH> {
    fn is_empty(&self) -> bool {
        (*self).is_empty()
    }

    fn pop(&mut self) -> Option<u8> {
        (*self).pop()
    }
}
