use std::f64::consts::PI;

use crate::output::OutputFormat;
use crate::quantizer::quantize;

/// Description of a sine test tone
/// Fully determines the generated sample sequence for a given sample rate
#[derive(Debug, Clone, Copy)]
pub struct Sine {
    /// Tone frequency in Hz
    pub frequency: f64,
    /// Peak amplitude
    pub amplitude: f64,
    /// Phase offset in radians
    pub theta: f64,
    /// Signal length in seconds
    pub length: f64,
    /// Output element format; integer formats quantize the waveform
    pub format: OutputFormat,
}

impl Sine {
    /// Generate the sample sequence for this tone at the given sample rate
    ///
    /// Produces floor(length * sample_rate) + 1 samples; the value at index t
    /// is amplitude * sin(2π * frequency * t / sample_rate + theta). Integer
    /// formats route the waveform through the quantizer, so the returned
    /// values are grid codes rather than amplitudes.
    ///
    /// Inputs are not validated here; degenerate parameters (zero sample
    /// rate, negative length) follow IEEE-754 arithmetic.
    pub fn sample(&self, sample_rate: f64) -> Vec<f64> {
        let sample_count = (self.length * sample_rate) as usize + 1;

        let wave: Vec<f64> = (0..sample_count)
            .map(|t| {
                self.amplitude
                    * (2.0 * PI * self.frequency * t as f64 / sample_rate + self.theta).sin()
            })
            .collect();

        match self.format.quant_bits() {
            Some(bits) => quantize(&wave, bits),
            None => wave,
        }
    }
}

/// Timestamps for sample_num samples spaced 1/sample_rate apart, starting at zero
pub fn time_axis(sample_rate: f64, sample_num: usize) -> Vec<f64> {
    (0..sample_num).map(|i| i as f64 / sample_rate).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    fn raw_tone(frequency: f64, amplitude: f64, theta: f64, length: f64) -> Sine {
        Sine {
            frequency,
            amplitude,
            theta,
            length,
            format: OutputFormat::Float64,
        }
    }

    // -------------------------------------------------------------- sample count

    #[test]
    fn test_sample_count_law() {
        assert_eq!(raw_tone(440.0, 1.0, 0.0, 1.0).sample(48000.0).len(), 48001);
        assert_eq!(raw_tone(1.0, 1.0, 0.0, 10.0).sample(1000.0).len(), 10001);
        // Fractional product floors before the +1
        assert_eq!(raw_tone(1.0, 1.0, 0.0, 0.5).sample(3.0).len(), 2);
    }

    #[test]
    fn test_zero_length_single_sample() {
        let samples = raw_tone(440.0, 0.5, FRAC_PI_2, 0.0).sample(48000.0);
        assert_eq!(samples.len(), 1);
        assert_relative_eq!(samples[0], 0.5, epsilon = 1e-12);
    }

    // -------------------------------------------------------------- waveform values

    #[test]
    fn test_quarter_period_values() {
        // 1 Hz sampled at 4 Hz for 1 s walks the quarter-period points
        let samples = raw_tone(1.0, 1.0, 0.0, 1.0).sample(4.0);
        let expected = [0.0, 1.0, 0.0, -1.0, 0.0];
        assert_eq!(samples.len(), expected.len());
        for (got, want) in samples.iter().zip(expected) {
            assert_relative_eq!(*got, want, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_amplitude_bounds() {
        let amplitude = 2.5;
        let samples = raw_tone(440.0, amplitude, 1.0, 0.25).sample(48000.0);
        for &sample in &samples {
            assert!(sample.abs() <= amplitude + 1e-12);
        }
    }

    #[test]
    fn test_phase_offset_shifts_start() {
        let samples = raw_tone(1.0, 1.0, FRAC_PI_2, 1.0).sample(4.0);
        assert_relative_eq!(samples[0], 1.0, epsilon = 1e-12);
    }

    // -------------------------------------------------------------- quantized output

    #[test]
    fn test_quarter_period_quantized_codes() {
        let tone = Sine {
            frequency: 1.0,
            amplitude: 1.0,
            theta: 0.0,
            length: 1.0,
            format: OutputFormat::Int16,
        };
        assert_eq!(tone.sample(4.0), vec![0.0, 32768.0, 0.0, -32768.0, 0.0]);
    }

    // -------------------------------------------------------------- time axis

    #[test]
    fn test_time_axis_values() {
        let time = time_axis(1000.0, 5);
        assert_eq!(time, vec![0.0, 0.001, 0.002, 0.003, 0.004]);
    }

    #[test]
    fn test_time_axis_idempotent() {
        assert_eq!(time_axis(1000.0, 5), time_axis(1000.0, 5));
    }

    #[test]
    fn test_time_axis_empty() {
        assert!(time_axis(48000.0, 0).is_empty());
    }

    #[test]
    fn test_time_axis_zero_rate_is_non_finite() {
        // 0/0 and i/0 follow float semantics instead of panicking
        let time = time_axis(0.0, 3);
        assert!(time[0].is_nan());
        assert!(time[1].is_infinite());
        assert!(time[2].is_infinite());
    }
}
