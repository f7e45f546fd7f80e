use serde::{Deserialize, Serialize};

/// The waveform family determining how a variable's value evolves over time.
///
/// All trigonometric shapes are periodic in the phase with a period of 2π
/// seconds. `Random` draws a fresh uniform value on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Waveform {
    Random,
    Sawtooth,
    Sinusoid,
    Square,
    Triangle,
}
