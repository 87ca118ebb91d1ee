//! Jitter Sources
//!
//! Noise added to the overall risk. Injected so tests (or a deterministic
//! deployment) can pin it.

use std::sync::Arc;

use rand::Rng;

/// Source of additive noise for the overall risk
pub trait JitterSource: Send + Sync {
    fn sample(&self) -> f64;
}

/// Uniform noise in `[-amplitude, amplitude)`
#[derive(Debug, Clone, Copy)]
pub struct UniformJitter {
    amplitude: f64,
}

impl UniformJitter {
    pub fn new(amplitude: f64) -> Self {
        Self { amplitude: amplitude.abs() }
    }
}

impl JitterSource for UniformJitter {
    fn sample(&self) -> f64 {
        if self.amplitude == 0.0 {
            return 0.0;
        }
        rand::thread_rng().gen_range(-self.amplitude..self.amplitude)
    }
}

/// Constant noise (0.0 disables jitter)
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedJitter(pub f64);

impl JitterSource for FixedJitter {
    fn sample(&self) -> f64 {
        self.0
    }
}

/// Jitter source for a configured amplitude
pub fn from_amplitude(amplitude: f64) -> Arc<dyn JitterSource> {
    if amplitude.is_finite() && amplitude != 0.0 {
        Arc::new(UniformJitter::new(amplitude))
    } else {
        Arc::new(FixedJitter(0.0))
    }
}
