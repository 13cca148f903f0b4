// Orders comparison records by entity name, then current week
use shared::models::ComparisonRecord;

use crate::entities::EntityProfile;

// Stable: equal keys keep their incoming order.
pub fn sort_records(records: &mut [ComparisonRecord], profile: &dyn EntityProfile) {
    records.sort_by(|a, b| {
        profile
            .sort_name(a)
            .cmp(profile.sort_name(b))
            .then_with(|| a.current_week_commencing_date.cmp(&b.current_week_commencing_date))
    });
}
