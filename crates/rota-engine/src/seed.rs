use rota_types::Roster;

/// Default roster used when no snapshot exists and no names are configured.
pub const DEFAULT_PARTICIPANTS: &[&str] = &[
    "Pradeep and Rohan Dayal",
    "Tapish and Shashank",
    "Vasu and Naman",
    "Abhilash and Saurav",
    "Sarthak and Devansh",
    "Ashwin and Rohit",
];

/// The default seed roster: every participant zeroed, ratio 0.
pub fn default_roster() -> Roster {
    Roster::seeded(DEFAULT_PARTICIPANTS.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_roster_is_zeroed() {
        let roster = default_roster();
        assert_eq!(roster.len(), DEFAULT_PARTICIPANTS.len());
        assert!(roster.iter().all(|p| p.fairness_ratio == 0.0));
        assert!(roster.iter().all(|p| p.payment_count == 0));
    }
}
