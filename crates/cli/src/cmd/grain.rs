use cardkit_core::{Grain, compare_grains};
use color_eyre::eyre::{Result, WrapErr};

use crate::GrainArgs;

pub fn run(args: &GrainArgs) -> Result<()> {
    let current = match args.current.as_str() {
        "none" => None,
        name => Some(name.parse::<Grain>().wrap_err("invalid current grain")?),
    };
    let other: Grain = args.other.parse().wrap_err("invalid grain to compare against")?;

    println!("{}", compare_grains(current, other) as i8);
    Ok(())
}
