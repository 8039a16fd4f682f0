use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::card::{CardDef, CardKind, SizeToken};

/// An ordered collection of cards.
///
/// Array position is packing priority: earlier cards are placed first and
/// prefer lower rows and columns. The list is the sole ordering input to the
/// placement solver.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct DashboardPage {
    pub name: String,
    pub cards: Vec<CardDef>,
}

impl Default for DashboardPage {
    fn default() -> Self {
        sample_page()
    }
}

/// Built-in page shown on first launch and whenever no stored page exists.
pub fn sample_page() -> DashboardPage {
    DashboardPage {
        name: "Home".to_string(),
        cards: vec![
            CardDef::new("light.living_room", CardKind::Light, "Living Room"),
            CardDef::new("climate.downstairs", CardKind::Climate, "Downstairs")
                .with_size(SizeToken::Large),
            CardDef::new("media_player.kitchen", CardKind::MediaPlayer, "Kitchen Speaker"),
            CardDef::new("camera.front_door", CardKind::Camera, "Front Door").with_span(2, 2),
            CardDef::new("calendar.family", CardKind::Calendar, "Family Calendar")
                .with_size(SizeToken::Medium),
            CardDef::new("todo.groceries", CardKind::Todo, "Groceries"),
            CardDef::new("vacuum.roborock", CardKind::Vacuum, "Vacuum"),
            CardDef::new("sensor.energy_price", CardKind::Energy, "Energy Price"),
            CardDef::new("light.bedroom", CardKind::Light, "Bedroom"),
            CardDef::new("sensor.outdoor_temp", CardKind::Sensor, "Outdoor"),
        ],
    }
}

/// Read a page from a JSON file.
pub fn load_page(path: &Path) -> Result<DashboardPage, String> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("Could not read page file {:?}: {}", path, e))?;
    serde_json::from_str(&json).map_err(|e| format!("Page file {:?} is not valid: {}", path, e))
}

/// Write a page to a JSON file.
pub fn save_page(page: &DashboardPage, path: &Path) -> Result<(), String> {
    let json = serde_json::to_string_pretty(page)
        .map_err(|e| format!("Could not serialize page: {}", e))?;
    std::fs::write(path, json).map_err(|e| format!("Could not write page file {:?}: {}", path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Footprint;

    #[test]
    fn test_sample_page_has_cards() {
        let page = sample_page();
        assert!(!page.cards.is_empty());
        assert_eq!(page.name, "Home");
    }

    #[test]
    fn test_sample_page_ids_are_unique() {
        let page = sample_page();
        for (i, card) in page.cards.iter().enumerate() {
            for other in &page.cards[i + 1..] {
                assert_ne!(card.id, other.id, "duplicate card id {}", card.id);
            }
        }
    }

    #[test]
    fn test_page_serialization_roundtrip() {
        let page = sample_page();
        let json = serde_json::to_string(&page).unwrap();
        let parsed: DashboardPage = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.name, page.name);
        assert_eq!(parsed.cards.len(), page.cards.len());
        for (a, b) in parsed.cards.iter().zip(&page.cards) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.footprint(), b.footprint());
        }
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let path = std::env::temp_dir().join(format!(
            "hearthboard_page_roundtrip_{}.json",
            std::process::id()
        ));
        let page = sample_page();

        save_page(&page, &path).unwrap();
        let loaded = load_page(&path).unwrap();

        assert_eq!(loaded.name, page.name);
        assert_eq!(loaded.cards.len(), page.cards.len());
    }

    #[test]
    fn test_load_missing_file_errors() {
        let path = Path::new("/nonexistent/hearthboard/page.json");
        assert!(load_page(path).is_err());
    }

    #[test]
    fn test_load_invalid_json_errors() {
        let path = std::env::temp_dir().join(format!(
            "hearthboard_page_invalid_{}.json",
            std::process::id()
        ));
        std::fs::write(&path, "{ not a page").unwrap();
        assert!(load_page(&path).is_err());
    }

    #[test]
    fn test_load_tolerates_unknown_size_tokens() {
        // An unknown size token shrinks the card instead of failing the page
        let path = std::env::temp_dir().join(format!(
            "hearthboard_page_unknown_token_{}.json",
            std::process::id()
        ));
        let json = r#"{
            "name": "Test",
            "cards": [
                {"id": "light.a", "kind": "light", "title": "A", "size": "gigantic"}
            ]
        }"#;
        std::fs::write(&path, json).unwrap();

        let page = load_page(&path).unwrap();
        assert_eq!(page.cards[0].size, Some(SizeToken::Small));
        assert_eq!(page.cards[0].footprint(), Footprint::new(1, 1));
    }
}
