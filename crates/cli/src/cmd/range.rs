use cardkit_core::{RangeDescriptor, RangeToken, TimeWindow, resolve_range};
use chrono::Local;
use color_eyre::eyre::Result;
use serde::Serialize;
use tracing::info;

use crate::RangeArgs;

#[derive(Serialize)]
struct RangeWithWindow {
    range: RangeDescriptor,
    window: TimeWindow,
}

pub fn run(args: &RangeArgs) -> Result<()> {
    if RangeToken::parse(&args.token).is_none() {
        info!(token = %args.token, "unknown range token, showing the default range");
    }
    let range = resolve_range(&args.token);

    let json = if args.window {
        let window = range.window(Local::now().naive_local());
        serde_json::to_string_pretty(&RangeWithWindow { range, window })?
    } else {
        serde_json::to_string_pretty(&range)?
    };
    println!("{json}");
    Ok(())
}
