use crate::traits::Serializer;
use itemlist_core::{ItemListError, ItemListResult};

/// Pretty-printed JSON serializer
pub struct JsonSerializer;

impl<T: serde::Serialize + serde::de::DeserializeOwned + Send + Sync> Serializer<T>
    for JsonSerializer
{
    fn serialize(&self, data: &T) -> ItemListResult<Vec<u8>> {
        let json = serde_json::to_vec_pretty(data)
            .map_err(|e| ItemListError::Serialization(e.to_string()))?;
        Ok(json)
    }

    fn deserialize(&self, bytes: &[u8]) -> ItemListResult<T> {
        let data = serde_json::from_slice(bytes).map_err(|e| ItemListError::Parse(e.to_string()))?;
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itemlist_domain::Item;

    #[test]
    fn test_serialize_deserialize_items() {
        let serializer = JsonSerializer;
        let mut second = Item::new("beta".to_string(), "line one\nline two".to_string());
        second.set_selected(true);
        let items = vec![Item::new("Alpha".to_string(), String::new()), second];

        let bytes = serializer.serialize(&items).unwrap();
        let decoded: Vec<Item> = serializer.deserialize(&bytes).unwrap();

        assert_eq!(decoded, items);
    }

    #[test]
    fn test_pretty_print() {
        let serializer = JsonSerializer;
        let items = vec![Item::new("Alpha".to_string(), "note".to_string())];

        let serialized = serializer.serialize(&items).unwrap();
        let json_str = String::from_utf8(serialized).unwrap();

        assert!(json_str.contains("\"title\": \"Alpha\""));
        assert!(json_str.contains("\"isSelected\": false"));
        assert!(json_str.contains('\n'));
    }

    #[test]
    fn test_malformed_input_is_parse_error() {
        let serializer = JsonSerializer;
        let result: ItemListResult<Vec<Item>> = serializer.deserialize(b"{ invalid json }");
        assert!(matches!(result, Err(ItemListError::Parse(_))));
    }

    #[test]
    fn test_missing_field_is_parse_error() {
        let serializer = JsonSerializer;
        let result: ItemListResult<Vec<Item>> =
            serializer.deserialize(br#"[{"title": "A", "content": ""}]"#);
        assert!(matches!(result, Err(ItemListError::Parse(_))));
    }
}
