//! Persisted catalog ordering

use tracing::info;

use super::types::{OrderRecord, ORDER_KEY};
use crate::storage::{load_record, save_record, KeyValueStore};

/// Seed for the shuffled course, created on first use and reused afterwards
pub fn catalog_seed(backend: &dyn KeyValueStore) -> u64 {
    if let Some(record) = load_record::<OrderRecord>(backend, ORDER_KEY) {
        return record.seed;
    }

    let record = OrderRecord {
        seed: rand::random(),
    };
    info!("Created catalog order seed {}", record.seed);
    save_record(backend, ORDER_KEY, &record);
    record.seed
}
