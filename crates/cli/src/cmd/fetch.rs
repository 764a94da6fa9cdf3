use cardkit_core::fetch::fetch_data_url;
use color_eyre::eyre::{Result, WrapErr, eyre};
use std::fs;

use crate::FetchArgs;

pub fn run(args: &FetchArgs) -> Result<()> {
    let mut failure = None;
    let image = fetch_data_url(&args.url, |message| failure = Some(message))
        .ok_or_else(|| eyre!("failed to fetch {}: {}", args.url, failure.unwrap_or_default()))?;

    let Some(out) = &args.out else {
        println!("{}", image.data_url);
        return Ok(());
    };

    let Some(file) = image.files.added_files.first() else {
        return Err(eyre!("no file downloaded from {}", args.url));
    };
    fs::write(out, &file.bytes).wrap_err_with(|| format!("writing {}", out.display()))?;
    println!("wrote {} ({} bytes) to {}", file.name, file.bytes.len(), out.display());
    Ok(())
}
