use pipechat_types::crm::Person;
use serde::Serialize;

/// Counts shown on the dashboard cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_persons: usize,
    pub active_persons: usize,
    pub total_deals: u64,
    pub total_activities: u64,
}

impl DashboardStats {
    pub fn from_persons(persons: &[Person]) -> Self {
        persons.iter().fold(
            Self {
                total_persons: persons.len(),
                ..Self::default()
            },
            |mut stats, person| {
                if person.active_flag {
                    stats.active_persons += 1;
                }
                stats.total_deals += person.deals_count();
                stats.total_activities += person.activities_count;
                stats
            },
        )
    }
}
