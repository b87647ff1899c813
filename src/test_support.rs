//! Deterministic RNG doubles shared by unit and integration tests.

use rand::{Error, RngCore};

/// An RNG whose `gen::<f64>()` draws follow a fixed script.
///
/// Each `next_u64` yields the next scripted value encoded so that rand's
/// 53-bit float conversion returns it (rounded up to the next representable
/// step). The script repeats once exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    draws: Vec<f64>,
    next: usize,
}

impl ScriptedRng {
    pub fn new(draws: &[f64]) -> Self {
        assert!(!draws.is_empty(), "script needs at least one draw");
        assert!(
            draws.iter().all(|d| (0.0..1.0).contains(d)),
            "draws must lie in [0, 1)"
        );
        Self {
            draws: draws.to_vec(),
            next: 0,
        }
    }

    fn next_draw(&mut self) -> f64 {
        let draw = self.draws[self.next % self.draws.len()];
        self.next += 1;
        draw
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        const PRECISION: u32 = 53;
        let scaled = (self.next_draw() * (1u64 << PRECISION) as f64).ceil() as u64;
        scaled.min((1u64 << PRECISION) - 1) << (64 - PRECISION)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
