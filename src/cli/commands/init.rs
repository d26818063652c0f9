use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Creates the config directory, the configuration file and the CSV
/// directory it points to. With `--test` only the effective values are shown.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.dir.clone(), cli.test)?;

    if cli.test {
        info("Test mode: configuration not written");
    } else {
        success(format!("Config file : {}", Config::config_file().display()));
    }
    info(format!("CSV directory: {}", cfg.csv_path().display()));
    info(format!(
        "Expected sources: {}, {}, {}, {}",
        cfg.colab_file, cfg.xcolab_file, cfg.itcd_file, cfg.xitcd_file
    ));

    Ok(())
}
