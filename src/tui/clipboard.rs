//! Clipboard export of the shortlist
//!
//! The shortlist is copied as pretty-printed JSON, the same shape the
//! headless `search --json` command prints. `arboard` handles the platform
//! clipboard; a fresh handle is opened per copy so nothing is held between
//! copies.

use crate::model::Property;
use anyhow::{Context, Result};
use arboard::Clipboard;

/// Render properties as the JSON array placed on the clipboard
pub fn shortlist_json(properties: &[Property]) -> Result<String> {
    serde_json::to_string_pretty(properties).context("Failed to serialize shortlist")
}

/// Copy text to the system clipboard
///
/// Common failure cases: no display server (headless Linux), permission denied.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to set clipboard text")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PropertyId, PropertyType};

    #[test]
    fn test_shortlist_json_uses_wire_field_names() {
        let properties = vec![Property {
            id: PropertyId::new("p-001"),
            address: "Forsmannstraße 5".to_string(),
            postcode: "22303".to_string(),
            number_of_rooms: 6,
            floor_area: 182.5,
            property_type: PropertyType::new("detached_house"),
        }];

        let json = shortlist_json(&properties).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["id"], "p-001");
        assert_eq!(value[0]["numberOfRooms"], 6);
        assert_eq!(value[0]["floorArea"], 182.5);
        assert_eq!(value[0]["propertyType"], "detached_house");
    }

    #[test]
    fn test_empty_shortlist_is_empty_array() {
        assert_eq!(shortlist_json(&[]).unwrap(), "[]");
    }
}
