use crate::cli::commands::open_dashboard;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        events,
        force,
        filters,
        sort,
    } = cmd
    {
        let dashboard = open_dashboard(cfg, filters.to_spec(), sort.to_state())?;
        ExportLogic::export(&dashboard, format.clone(), file, *events, *force)?;
    }
    Ok(())
}
