use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle() -> AppResult<()> {
    let config_path = Config::init_all()?;
    let cfg = Config::load(None)?;

    success(format!("Config file:  {}", config_path.display()));
    success(format!("Dataset dir:  {}", cfg.dataset_dir));
    success(format!("Sales db:     {}", cfg.sales_db));
    Ok(())
}
