use clap::Parser;
use std::path::PathBuf;

mod output;
mod quantizer;
mod signal;

use output::{default_filename, write_raw, write_wav, OutputFormat};
use signal::{time_axis, Sine};

/// Generate sine test signals with optional fixed-point quantization
#[derive(Parser, Debug)]
#[command(name = "tone-gen")]
#[command(version, about, long_about = None)]
struct Args {
    /// Output file for the generated samples
    #[arg(value_name = "OUTPUT")]
    output_file: Option<PathBuf>,

    /// Tone frequency in Hz
    #[arg(short, long, default_value = "1.0")]
    frequency: f64,

    /// Peak amplitude of the generated tone
    #[arg(short, long, default_value = "1.0")]
    amplitude: f64,

    /// Phase offset in radians
    #[arg(short, long, default_value = "0.0")]
    theta: f64,

    /// Signal length in seconds
    #[arg(short, long, default_value = "10.0")]
    length: f64,

    /// Sample rate in Hz
    #[arg(short, long, default_value = "48000")]
    rate: f64,

    /// Quantization bit depth: 16 or 32 (omit for raw float64 samples)
    #[arg(short, long)]
    bits: Option<u32>,

    /// Write a mono WAV file instead of a headerless raw dump
    #[arg(long)]
    wav: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Resolve the output format before touching the filesystem, so an
    // unsupported depth never leaves a partial file behind
    let format = match OutputFormat::from_quant_bits(args.bits) {
        Ok(format) => format,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Sanity-check the CLI inputs; the generator itself accepts anything
    if args.rate <= 0.0 {
        eprintln!("Error: Sample rate must be positive, got {}", args.rate);
        std::process::exit(1);
    }
    if args.length < 0.0 {
        eprintln!("Error: Signal length must be non-negative, got {}", args.length);
        std::process::exit(1);
    }

    let tone = Sine {
        frequency: args.frequency,
        amplitude: args.amplitude,
        theta: args.theta,
        length: args.length,
        format,
    };

    if args.verbose {
        println!(
            "Generating {} Hz tone: amplitude {}, phase {} rad, {}s at {} Hz ({:?})",
            tone.frequency, tone.amplitude, tone.theta, tone.length, args.rate, format
        );
    }

    let samples = tone.sample(args.rate);

    let output_path = args
        .output_file
        .unwrap_or_else(|| PathBuf::from(default_filename(args.frequency, args.wav)));

    if args.wav {
        write_wav(&output_path, &samples, args.rate as u32, format)?;
    } else {
        write_raw(&output_path, &samples, format)?;
    }

    if args.verbose {
        let time = time_axis(args.rate, samples.len());
        let span = time.last().copied().unwrap_or(0.0);
        println!(
            "Wrote {} samples ({} bytes, spanning 0s - {:.6}s) to {}",
            samples.len(),
            samples.len() * format.bytes_per_sample(),
            span,
            output_path.display()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }
}
