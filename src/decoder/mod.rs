use crate::app::Result;
use crate::domain::Item;

/// Turns a page body into catalog items.
///
/// The body must be a JSON array of objects. Unknown keys are ignored and a
/// missing required key fails the whole page.
#[derive(Clone)]
pub struct Decoder;

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder {
    pub fn new() -> Self {
        Self
    }

    pub fn decode(&self, body: &[u8]) -> Result<Vec<Item>> {
        serde_json::from_slice::<Vec<Item>>(body).map_err(|e| {
            tracing::warn!("Failed to decode page: {}", e);
            e.into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::TaproomError;

    const PAGE_SAMPLE: &str = r#"[
  {
    "id": 1,
    "name": "Buzz",
    "tagline": "A Real Bitter Experience.",
    "first_brewed": "09/2007",
    "description": "A light, crisp and bitter IPA brewed with English and American hops.",
    "image_url": "https://images.punkapi.com/v2/keg.png",
    "abv": 4.5,
    "ibu": 60,
    "ebc": 20,
    "food_pairing": ["Spicy chicken tikka masala"]
  },
  {
    "id": 2,
    "name": "Trashy Blonde",
    "tagline": "You Know You Shouldn't",
    "description": "A titillating, neurotic, peroxide punk of a Pale Ale.",
    "image_url": "https://images.punkapi.com/v2/2.png",
    "abv": 4.1,
    "ibu": null
  },
  {
    "id": 3,
    "name": "Berliner Weisse With Yuzu - B-Sides",
    "tagline": "Japanese Citrus Berliner Weisse.",
    "description": "Japanese citrus fruit intensifies the sour nature of this German classic.",
    "image_url": "https://images.punkapi.com/v2/keg.png",
    "abv": 4.2
  }
]"#;

    #[test]
    fn test_decode_page_in_server_order() {
        let items = Decoder::new().decode(PAGE_SAMPLE.as_bytes()).unwrap();

        assert_eq!(items.len(), 3);
        assert_eq!(
            items.iter().map(Item::id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(items[0].name(), "Buzz");
        assert_eq!(items[0].image_url(), "https://images.punkapi.com/v2/keg.png");
        assert_eq!(items[0].ibu(), Some(60.0));
    }

    #[test]
    fn test_decode_preserves_missing_ibu() {
        let items = Decoder::new().decode(PAGE_SAMPLE.as_bytes()).unwrap();

        assert_eq!(items[1].ibu(), None);
        assert_eq!(items[2].ibu(), None);
        assert_eq!(items[2].ibu_or_default(), 0.0);
    }

    #[test]
    fn test_decode_empty_array() {
        let items = Decoder::new().decode(b"[]").unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_missing_required_field_fails() {
        let body = br#"[{"id": 1, "name": "Buzz", "tagline": "", "image_url": "", "description": ""}]"#;
        let result = Decoder::new().decode(body);
        assert!(matches!(result, Err(TaproomError::Decode(_))));
    }

    #[test]
    fn test_error_object_instead_of_array_fails() {
        let body = br#"{"statusCode": 404, "error": "Not Found", "message": "No endpoint found"}"#;
        let result = Decoder::new().decode(body);
        assert!(matches!(result, Err(TaproomError::Decode(_))));
    }

    #[test]
    fn test_garbage_fails() {
        let result = Decoder::new().decode(b"<html>oops</html>");
        assert!(matches!(result, Err(TaproomError::Decode(_))));
    }
}
