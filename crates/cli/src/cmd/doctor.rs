use cardkit_core::config::{ConfigLoader, default_config_path};
use cardkit_core::format::{NumberLocale, format_plain};
use std::path::Path;

pub fn run(config: Option<&Path>, locale: Option<&str>) {
    match ConfigLoader::load(config) {
        Ok(mut rc) => {
            if let Some(locale) = locale {
                rc.locale = locale.to_string();
            }
            crate::logging::init(&rc);
            tracing::debug!(source = ?rc.source, "configuration loaded");

            let resolved = NumberLocale::lookup(&rc.locale);
            println!("OK   cardkit doctor");
            match &rc.source {
                Some(path) => println!("config: {}", path.display()),
                None => println!("config: (defaults, no file at {})", default_config_path().display()),
            }
            println!("locale: {} (formats as {})", rc.locale, resolved.tag);
            println!("sample: {}", format_plain(-1234567.891, None, &rc.locale));
            println!("diagnostics.dev_warnings: {}", rc.diagnostics.dev_warnings);
            println!("logging.level: {}", rc.logging.level);
            if let Some(file) = &rc.logging.file {
                println!("logging.file: {}", file.display());
            }
        }
        Err(e) => {
            println!("FAIL cardkit doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}
