use std::io::Read;

use clap::Parser;

use movingmean::SimpleMovingAverage;
use movingmean::config::WindowSize;
use movingmean::error::SmaError;

#[derive(Parser, Debug)]
#[command(name = "movingmean")]
#[command(about = "Stream samples through a fixed-window moving average", long_about = None)]
struct Args {
    /// Window size in samples
    #[arg(short, long, default_value_t = WindowSize::default())]
    window: WindowSize,

    /// Print only the final average instead of one line per sample
    #[arg(long)]
    final_only: bool,

    /// Sample values; pass "-" or nothing to read whitespace-separated
    /// samples from stdin
    #[arg(allow_negative_numbers = true)]
    samples: Vec<String>,
}

/// A lone "-" or an empty sample list selects stdin input.
fn wants_stdin(samples: &[String]) -> bool {
    samples.is_empty() || (samples.len() == 1 && samples[0] == "-")
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        log::error!("fatal: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let mut sma = SimpleMovingAverage::<f64>::new(args.window.get())?;

    let tokens = if wants_stdin(&args.samples) {
        let mut input = String::new();
        std::io::stdin().read_to_string(&mut input)?;
        input.split_whitespace().map(str::to_owned).collect()
    } else {
        args.samples
    };

    if tokens.is_empty() {
        anyhow::bail!("no samples supplied");
    }

    let mut average = 0.0;
    for (i, token) in tokens.iter().enumerate() {
        let sample: f64 = token
            .parse()
            .map_err(|_| SmaError::BadSample(token.clone()))?;

        average = sma.push(sample);
        log::debug!(
            "sample {}: {} -> mean {:.6} over {} of {}",
            i + 1,
            sample,
            average,
            sma.sample_count(),
            sma.window_size()
        );

        if !args.final_only {
            println!("{:>6}  {:>14}  {:>14.6}", i + 1, sample, average);
        }
    }

    if args.final_only {
        println!("{:.6}", average);
    }

    Ok(())
}
