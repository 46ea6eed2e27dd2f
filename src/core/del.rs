use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::store::log::ttlog_quiet;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete entry `index`. Returns `false` if there is no such entry.
    pub fn apply(store: &RecordStore, index: usize) -> AppResult<bool> {
        let Some(entry) = store.get(index) else {
            return Ok(false);
        };

        if !store.delete(index)? {
            return Ok(false);
        }

        ttlog_quiet(
            store.path(),
            "del",
            &format!("#{index}"),
            &format!("Deleted '{}' ({})", entry.task, entry.category),
        );
        Ok(true)
    }
}
