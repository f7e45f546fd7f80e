//! Pure waveform computation.
//!
//! Every function maps its inputs to a single sample with no retained state;
//! calls are independent and safe from any number of concurrent readers.

use std::f64::consts::PI;

use rand::Rng;
use simvar_types::Waveform;

/// Computes one sample for `shape` over `[min, max]` at `phase` seconds.
///
/// `phase` is wall-clock time in fractional seconds; the trigonometric shapes
/// repeat with a period of 2π seconds. Callers must ensure `min <= max` —
/// definitions are validated before they reach this point. With `min == max`
/// every shape collapses to that constant.
pub fn sample(shape: Waveform, min: f64, max: f64, phase: f64) -> f64 {
    let amplitude = (max - min) / 2.0;
    let offset = min + amplitude;
    match shape {
        Waveform::Random => {
            if min == max {
                return min;
            }
            rand::rng().random_range(min..max)
        }
        Waveform::Sinusoid => amplitude * phase.sin() + offset,
        Waveform::Sawtooth => (2.0 * amplitude / PI) * phase.tan().atan() + offset,
        Waveform::Square => {
            if phase.sin() >= 0.0 {
                max
            } else {
                min
            }
        }
        Waveform::Triangle => (2.0 * amplitude / PI) * phase.sin().asin() + offset,
    }
}

/// Uniform boolean draw, true with probability 0.5.
pub fn sample_boolean() -> bool {
    rand::rng().random_bool(0.5)
}
