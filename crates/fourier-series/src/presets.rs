//! Closed-form coefficient sets for common periodic waveforms.
//!
//! Every preset exposes the same function three ways: complex coefficients,
//! real `(a, b)` coefficients and the exact target waveform, which makes the
//! presets usable both as sweep inputs and as convergence references.

use std::f64::consts::{PI, TAU};

use fourier_core::{CoefficientFunction, Complex64, FourierError};
use serde::{Deserialize, Serialize};

fn default_amplitude() -> f64 {
    1.0
}

/// Known periodic waveform with analytic Fourier coefficients.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Preset {
    /// `+A` on the first half period, `-A` on the second.
    Square {
        /// Peak amplitude.
        #[serde(default = "default_amplitude")]
        amplitude: f64,
    },
    /// Rising ramp from `-A` to `A` across one period, centred on `t = 0`.
    Sawtooth {
        /// Peak amplitude.
        #[serde(default = "default_amplitude")]
        amplitude: f64,
    },
    /// Odd triangle wave peaking at `A` when `t = T/4`.
    Triangle {
        /// Peak amplitude.
        #[serde(default = "default_amplitude")]
        amplitude: f64,
    },
    /// Constant function.
    Constant {
        /// Value of the function.
        value: f64,
    },
    /// Single harmonic `cosine·cos(kωt) + sine·sin(kωt)`.
    Harmonic {
        /// Harmonic index `k`; `k = 0` is the constant `cosine`.
        index: u32,
        /// Cosine weight.
        #[serde(default)]
        cosine: f64,
        /// Sine weight.
        #[serde(default)]
        sine: f64,
    },
}

impl Default for Preset {
    fn default() -> Self {
        Preset::Square {
            amplitude: default_amplitude(),
        }
    }
}

impl Preset {
    /// Short stable name of the preset.
    pub fn name(&self) -> &'static str {
        match self {
            Preset::Square { .. } => "square",
            Preset::Sawtooth { .. } => "sawtooth",
            Preset::Triangle { .. } => "triangle",
            Preset::Constant { .. } => "constant",
            Preset::Harmonic { .. } => "harmonic",
        }
    }

    /// One unit-amplitude instance of every preset.
    pub fn catalogue() -> [Preset; 5] {
        [
            Preset::Square { amplitude: 1.0 },
            Preset::Sawtooth { amplitude: 1.0 },
            Preset::Triangle { amplitude: 1.0 },
            Preset::Constant { value: 1.0 },
            Preset::Harmonic {
                index: 1,
                cosine: 0.0,
                sine: 1.0,
            },
        ]
    }

    /// Cosine coefficient `a_n` for `n ≥ 0`.
    pub fn cosine(&self, n: u64) -> f64 {
        match *self {
            Preset::Constant { value } if n == 0 => 2.0 * value,
            Preset::Harmonic {
                index: 0, cosine, ..
            } if n == 0 => 2.0 * cosine,
            Preset::Harmonic { index, cosine, .. } if n == u64::from(index) => cosine,
            _ => 0.0,
        }
    }

    /// Sine coefficient `b_n` for `n ≥ 1`.
    pub fn sine(&self, n: u64) -> f64 {
        if n == 0 {
            return 0.0;
        }
        let k = n as f64;
        match *self {
            Preset::Square { amplitude } if n % 2 == 1 => 4.0 * amplitude / (PI * k),
            Preset::Sawtooth { amplitude } => {
                let sign = if n % 2 == 1 { 1.0 } else { -1.0 };
                sign * 2.0 * amplitude / (PI * k)
            }
            Preset::Triangle { amplitude } if n % 2 == 1 => {
                let sign = if (n / 2) % 2 == 0 { 1.0 } else { -1.0 };
                sign * 8.0 * amplitude / (PI * PI * k * k)
            }
            Preset::Harmonic { index, sine, .. } if n == u64::from(index) => sine,
            _ => 0.0,
        }
    }

    /// Complex coefficient `c_n`, conjugate symmetric in `n`.
    pub fn complex(&self, n: i64) -> Complex64 {
        let k = n.unsigned_abs();
        if k == 0 {
            return Complex64::new(self.cosine(0) / 2.0, 0.0);
        }
        let value = Complex64::new(self.cosine(k) / 2.0, -self.sine(k) / 2.0);
        if n > 0 {
            value
        } else {
            value.conj()
        }
    }

    /// Exact value of the waveform at `t` for period `period`.
    pub fn target(&self, t: f64, period: f64) -> f64 {
        let phase = (t / period).rem_euclid(1.0);
        match *self {
            Preset::Square { amplitude } => {
                if phase == 0.0 || phase == 0.5 {
                    0.0
                } else if phase < 0.5 {
                    amplitude
                } else {
                    -amplitude
                }
            }
            Preset::Sawtooth { amplitude } => {
                let centred = (t / period + 0.5).rem_euclid(1.0) - 0.5;
                if centred == -0.5 {
                    0.0
                } else {
                    2.0 * amplitude * centred
                }
            }
            Preset::Triangle { amplitude } => {
                2.0 * amplitude / PI * (TAU * phase).sin().asin()
            }
            Preset::Constant { value } => value,
            Preset::Harmonic {
                index,
                cosine,
                sine,
            } => {
                let theta = f64::from(index) * TAU * t / period;
                cosine * theta.cos() + sine * theta.sin()
            }
        }
    }

    /// Complex coefficient source for the preset.
    pub fn complex_source(&self) -> PresetComplex {
        PresetComplex(*self)
    }

    /// Real cosine and sine coefficient sources for the preset.
    pub fn real_sources(&self) -> (PresetCosine, PresetSine) {
        (PresetCosine(*self), PresetSine(*self))
    }
}

/// Complex coefficients of a [`Preset`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresetComplex(pub Preset);

impl CoefficientFunction<Complex64> for PresetComplex {
    fn coefficient(&self, n: i64) -> Result<Complex64, FourierError> {
        Ok(self.0.complex(n))
    }
}

/// Cosine coefficients of a [`Preset`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresetCosine(pub Preset);

impl CoefficientFunction<f64> for PresetCosine {
    fn coefficient(&self, n: i64) -> Result<f64, FourierError> {
        Ok(self.0.cosine(n.unsigned_abs()))
    }
}

/// Sine coefficients of a [`Preset`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresetSine(pub Preset);

impl CoefficientFunction<f64> for PresetSine {
    fn coefficient(&self, n: i64) -> Result<f64, FourierError> {
        let sign = if n < 0 { -1.0 } else { 1.0 };
        Ok(sign * self.0.sine(n.unsigned_abs()))
    }
}
