pub mod article;
pub mod channel;
pub mod news;
pub mod video;
pub mod workspace;

use common::Record;

/// Overwrite the first record sharing `record`'s id. Returns `false` if there is none.
fn replace<T: Record>(records: &mut [T], record: T) -> bool {
    match records.iter_mut().find(|r| r.id() == record.id()) {
        Some(slot) => {
            *slot = record;
            true
        }
        None => false,
    }
}

/// Filter `id` out of `records`. Returns `false` if nothing was removed.
fn remove<T: Record>(records: &mut Vec<T>, id: &str) -> bool {
    let before = records.len();
    records.retain(|r| r.id() != id);
    records.len() != before
}
