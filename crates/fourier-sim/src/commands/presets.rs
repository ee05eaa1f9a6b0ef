use std::error::Error;

use clap::Args;
use fourier_series::Preset;

#[derive(Args, Debug)]
pub struct PresetsArgs {
    /// Print the first coefficients of each preset.
    #[arg(long, default_value_t = 0)]
    pub terms: u64,
}

pub fn run(args: &PresetsArgs) -> Result<(), Box<dyn Error>> {
    for preset in Preset::catalogue() {
        println!("{}: {}", preset.name(), serde_json::to_string(&preset)?);
        for n in 0..args.terms {
            println!("  a{n} = {:+.6}  b{n} = {:+.6}", preset.cosine(n), preset.sine(n));
        }
    }
    Ok(())
}
