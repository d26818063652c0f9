use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
            println!("{}", yaml);
        }

        // ---- CHECK CONFIG ----
        if *check {
            let path = Config::config_file();
            if !path.exists() {
                warning(format!(
                    "No configuration file at {} (defaults in use, run `roombook init`)",
                    path.display()
                ));
                return Ok(());
            }

            let missing = Config::missing_keys()?;
            if missing.is_empty() {
                success("Configuration file is complete");
            } else {
                warning(format!(
                    "Missing fields (defaults used): {}",
                    missing.join(", ")
                ));
            }
        }
    }

    Ok(())
}
