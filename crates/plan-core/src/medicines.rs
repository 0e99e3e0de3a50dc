//! Medicine grouping by timing slot.

use crate::models::{Medicine, MedicineSchedule};

/// Group medicines into their timing slots, keeping entry order within a slot.
pub fn group_by_timing(medicines: &[Medicine]) -> MedicineSchedule {
    let mut schedule = MedicineSchedule::default();
    for medicine in medicines {
        schedule
            .slot_mut(medicine.timing)
            .push(format!("{} ({})", medicine.name, medicine.dosage));
    }
    schedule
}
