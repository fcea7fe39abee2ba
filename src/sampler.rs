// Copyright 2016 Phillip Oppermann, Calvin Lee and JJ Garzella.
// See the README.md file at the top-level directory of this
// distribution.
//
// Licensed under the MIT license <LICENSE or
// http://opensource.org/licenses/MIT>, at your option.
// This file may not be copied, modified, or distributed
// except according to those terms.

//! The seam between the decoder and the hardware unit that samples the
//! PS/2 data/clock lines.
//!
//! The sampler shifts 8 data bits per keyboard clock edge into a small
//! RX queue; the decoder only ever asks it "anything available?" and
//! "give me one byte". How the bits get sampled is the integrator's
//! business, described by [`SamplerConfig`].

/// A PS/2 keyboard never clocks faster than this.
pub const MAX_CLOCK_HZ: u32 = 16_700;
/// Minimum sampler cycles per keyboard clock period.
pub const CYCLES_PER_BIT: u32 = 8;
/// RX queue depth of the reference sampler (TX and RX FIFOs joined,
/// as the sampler never transmits).
pub const FIFO_DEPTH: usize = 8;

/// A source of raw scancode bytes, normally the sampler's RX queue.
pub trait BitSampler {
    /// `true` if no scancode is waiting.
    fn is_empty(&self) -> bool;
    /// Pops the oldest waiting scancode, or `None` if there is none.
    fn pop(&mut self) -> Option<u8>;
}

/// Parameters the sampler hardware must be programmed with before the
/// first scancode can arrive.
///
/// The crate does not touch hardware itself; it hands the integrator
/// the numbers their init code needs. The data line and the clock line
/// must be adjacent pins, both inputs with pull-ups enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplerConfig {
    /// The data line. The clock line is the next pin up.
    pub data_pin: u32,
}

impl SamplerConfig {
    pub const fn new(data_pin: u32) -> SamplerConfig {
        SamplerConfig { data_pin }
    }

    /// The clock line, always adjacent to the data line.
    pub const fn clock_pin(&self) -> u32 {
        self.data_pin + 1
    }

    /// Sampler clock divider for the given system clock, chosen so a
    /// bit period at the maximum keyboard clock still spans at least
    /// [`CYCLES_PER_BIT`] sampler cycles.
    pub fn clock_divider(&self, system_clock_hz: u32) -> f32 {
        let div = system_clock_hz as f32 / (CYCLES_PER_BIT * MAX_CLOCK_HZ) as f32;
        log::debug!(
            "ps2 sampler divider {} for {} Hz system clock",
            div,
            system_clock_hz
        );
        div
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_pin_is_adjacent() {
        let config = SamplerConfig::new(2);
        assert_eq!(config.data_pin, 2);
        assert_eq!(config.clock_pin(), 3);
    }

    #[test]
    fn divider_leaves_eight_cycles_per_bit() {
        let config = SamplerConfig::new(0);
        let div = config.clock_divider(125_000_000);
        assert!((div - 935.628_7).abs() < 1e-3);
        // at the divided rate, one keyboard bit spans >= 8 cycles
        let sampler_hz = 125_000_000.0 / div;
        assert!(sampler_hz >= (CYCLES_PER_BIT * MAX_CLOCK_HZ) as f32);
    }
}
