use hound::{WavSpec, WavWriter};
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use chrono::Local;

/// Element format of the persisted sample stream
/// Int16/Int32 carry quantized codes, Float64 carries the raw waveform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Int16,
    Int32,
    Float64,
}

impl OutputFormat {
    /// Resolve a requested quantization depth; None means unquantized f64 output
    pub fn from_quant_bits(bits: Option<u32>) -> Result<Self, UnsupportedBitDepth> {
        match bits {
            Some(16) => Ok(OutputFormat::Int16),
            Some(32) => Ok(OutputFormat::Int32),
            None => Ok(OutputFormat::Float64),
            Some(other) => Err(UnsupportedBitDepth(other)),
        }
    }

    /// Quantization grid depth, None for the float passthrough format
    pub fn quant_bits(&self) -> Option<u32> {
        match self {
            OutputFormat::Int16 => Some(16),
            OutputFormat::Int32 => Some(32),
            OutputFormat::Float64 => None,
        }
    }

    pub fn bytes_per_sample(&self) -> usize {
        match self {
            OutputFormat::Int16 => 2,
            OutputFormat::Int32 => 4,
            OutputFormat::Float64 => 8,
        }
    }
}

/// Requested bit depth has no corresponding output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsupportedBitDepth(pub u32);

impl fmt::Display for UnsupportedBitDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unsupported bit depth {}: only 16 and 32 bit integers are supported",
            self.0
        )
    }
}

impl std::error::Error for UnsupportedBitDepth {}

/// Write samples as a headerless flat dump in native byte order, one element
/// per sample in generation order
/// Integer formats narrow with Rust float-to-int `as` semantics: codes past
/// the type's bounds saturate at i16::MIN/MAX or i32::MIN/MAX
pub fn write_raw<P: AsRef<Path>>(
    path: P,
    samples: &[f64],
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut writer = BufWriter::new(File::create(path)?);

    for &sample in samples {
        match format {
            OutputFormat::Int16 => writer.write_all(&(sample as i16).to_ne_bytes())?,
            OutputFormat::Int32 => writer.write_all(&(sample as i32).to_ne_bytes())?,
            OutputFormat::Float64 => writer.write_all(&sample.to_ne_bytes())?,
        }
    }

    writer.flush()?;
    Ok(())
}

/// Write samples to a mono WAV file (integer PCM for quantized tones,
/// float32 for the unquantized format)
pub fn write_wav<P: AsRef<Path>>(
    path: P,
    samples: &[f64],
    sample_rate: u32,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: match format {
            OutputFormat::Int16 => 16,
            OutputFormat::Int32 | OutputFormat::Float64 => 32,
        },
        sample_format: match format {
            OutputFormat::Float64 => hound::SampleFormat::Float,
            _ => hound::SampleFormat::Int,
        },
    };

    let mut writer = WavWriter::create(path, spec)?;

    match format {
        OutputFormat::Int16 => {
            for &sample in samples {
                writer.write_sample(sample as i16)?;
            }
        }
        OutputFormat::Int32 => {
            for &sample in samples {
                writer.write_sample(sample as i32)?;
            }
        }
        OutputFormat::Float64 => {
            // hound tops out at 32-bit float; the raw dump keeps full width
            for &sample in samples {
                writer.write_sample(sample as f32)?;
            }
        }
    }

    writer.finalize()?;
    Ok(())
}

/// Generate a default output filename when none is given
pub fn default_filename(frequency: f64, wav: bool) -> String {
    format!(
        "tone_{}hz_{}.{}",
        frequency,
        Local::now().format("%Y-%m-%d_%H-%M-%S"),
        if wav { "wav" } else { "raw" }
    )
}
