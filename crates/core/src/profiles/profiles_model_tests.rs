#[cfg(test)]
mod tests {
    use crate::profiles::{LeaderboardEntry, NewProfile, Profile, ProfileUpdate};

    fn valid_new_profile() -> NewProfile {
        NewProfile {
            id: None,
            name: "Maria Santos".to_string(),
            email: "maria@trueinvest.example".to_string(),
            phone: None,
            photo_url: None,
        }
    }

    #[test]
    fn new_profile_validates() {
        assert!(valid_new_profile().validate().is_ok());
    }

    #[test]
    fn new_profile_rejects_blank_name() {
        let mut profile = valid_new_profile();
        profile.name = "   ".to_string();
        assert!(profile.validate().is_err());
    }

    #[test]
    fn new_profile_rejects_blank_email() {
        let mut profile = valid_new_profile();
        profile.email = String::new();
        assert!(profile.validate().is_err());
    }

    #[test]
    fn update_requires_id() {
        let update = ProfileUpdate {
            id: String::new(),
            name: "Maria Santos".to_string(),
            email: "maria@trueinvest.example".to_string(),
            phone: None,
            photo_url: None,
        };
        assert!(update.validate().is_err());
    }

    #[test]
    fn leaderboard_entry_drops_contact_info() {
        let profile = Profile {
            id: "p-1".to_string(),
            name: "Maria Santos".to_string(),
            email: "maria@trueinvest.example".to_string(),
            phone: Some("+55 11 99999-0000".to_string()),
            photo_url: Some("https://cdn.example/maria.png".to_string()),
            points_total: 2450,
            ..Default::default()
        };

        let entry = LeaderboardEntry::from(&profile);
        assert_eq!(entry.id, "p-1");
        assert_eq!(entry.points_total, 2450);

        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("email").is_none());
        assert!(json.get("phone").is_none());
    }
}
