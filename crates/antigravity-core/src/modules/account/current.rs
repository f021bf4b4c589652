//! Current account selection.

use std::path::Path;

use crate::error::AppResult;

use super::index::load_account_index;

pub fn get_current_account_id(data_dir: &Path) -> AppResult<Option<String>> {
    let index = load_account_index(data_dir)?;
    Ok(index.current_account_id)
}
