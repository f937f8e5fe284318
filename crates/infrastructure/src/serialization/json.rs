//! JSON serialization helpers for deterministic output.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Error type for serialization operations.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// JSON serialization failed.
    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// JSON deserialization failed.
    #[error("JSON deserialization failed: {0}")]
    Deserialize(serde_json::Error),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Serializes a value to deterministic JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_stable<T: Serialize>(value: &T) -> Result<String, SerializationError> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"  ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;

    let mut json = String::from_utf8(buffer)?;
    json.push('\n'); // Trailing newline
    Ok(json)
}

/// Serializes a value to deterministic JSON bytes.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_stable_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, SerializationError> {
    let json = to_json_stable(value)?;
    Ok(json.into_bytes())
}

/// Deserializes JSON from bytes.
///
/// # Errors
///
/// Returns an error if the JSON is invalid or doesn't match the expected type.
pub fn from_json_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, SerializationError> {
    serde_json::from_slice(bytes).map_err(SerializationError::Deserialize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rijks_domain::{CollectionSettings, Piece, Url};

    fn piece() -> Piece {
        Piece {
            id: "https://id.rijksmuseum.nl/200107928".to_string(),
            title: Some("Nachtwacht".to_string()),
            date: None,
            creator: None,
            image_url: Url::parse("https://iiif.micr.io/PJEZO/full/max/0/default.jpg").ok(),
        }
    }

    #[test]
    fn test_stable_serialization_has_trailing_newline() {
        let json = to_json_stable(&piece()).expect("serialization should work");
        assert!(json.ends_with('\n'));
    }

    #[test]
    fn test_stable_serialization_uses_two_space_indent() {
        let json = to_json_stable(&piece()).expect("serialization should work");
        assert!(json.contains("  \"title\": \"Nachtwacht\""));
        assert!(json.contains("  \"date\": null"));
    }

    #[test]
    fn test_settings_roundtrip_through_bytes() {
        let settings = CollectionSettings {
            batch_size: 4,
            ..CollectionSettings::default()
        };
        let bytes = to_json_stable_bytes(&settings).expect("serialization should work");
        let restored: CollectionSettings =
            from_json_bytes(&bytes).expect("deserialization should work");
        assert_eq!(settings, restored);
    }

    #[test]
    fn test_from_json_bytes_rejects_invalid_json() {
        let result: Result<serde_json::Value, _> = from_json_bytes(b"{\"invalid\": }");
        assert!(matches!(result, Err(SerializationError::Deserialize(_))));
    }
}
