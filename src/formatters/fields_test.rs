#[cfg(test)]
mod tests {
    use super::super::fields::*;
    use crate::schemas::Product;
    use serde_json::json;

    fn product(value: serde_json::Value) -> Product {
        Product::from_value(value)
    }

    #[test]
    fn test_first_synonym_wins() {
        let p = product(json!({"title": "Kombucha", "name": "Fermented Tea"}));
        assert_eq!(title(&p), Some("Kombucha".to_string()));
    }

    #[test]
    fn test_empty_synonym_falls_through() {
        let p = product(json!({"title": "", "name": "Fermented Tea"}));
        assert_eq!(title(&p), Some("Fermented Tea".to_string()));

        let p = product(json!({"desc": null, "description": "Small batch"}));
        assert_eq!(description(&p), Some("Small batch".to_string()));
    }

    #[test]
    fn test_image_synonyms_in_order() {
        let p = product(json!({"thumbnail": "t.png", "imageUrl": "u.png"}));
        assert_eq!(image(&p), Some("u.png".to_string()));

        let p = product(json!({"thumbnail": "t.png"}));
        assert_eq!(image(&p), Some("t.png".to_string()));

        assert_eq!(image(&product(json!({}))), None);
    }

    #[test]
    fn test_category_prefers_cat() {
        let p = product(json!({"category": "Beverages", "cat": "Drinks"}));
        assert_eq!(category(&p), Some("Drinks".to_string()));
    }

    #[test]
    fn test_numeric_values_are_displayed() {
        let p = product(json!({"hsn": 2202, "_id": 17}));
        assert_eq!(hsn(&p), Some("2202".to_string()));
        assert_eq!(id(&p), Some("17".to_string()));
    }

    #[test]
    fn test_structured_values_are_skipped() {
        let p = product(json!({"title": {"en": "Tea"}, "name": ["Tea"]}));
        assert_eq!(title(&p), None);
    }

    #[test]
    fn test_igst_zero_is_present() {
        let p = product(json!({"igst": 0}));
        assert_eq!(igst(&p), Some(0.0));
    }

    #[test]
    fn test_igst_null_or_missing_is_absent() {
        assert_eq!(igst(&product(json!({"igst": null}))), None);
        assert_eq!(igst(&product(json!({}))), None);
    }

    #[test]
    fn test_numeric_strings_are_numbers() {
        let p = product(json!({"price": " 499.5 ", "igst": "12"}));
        assert_eq!(price(&p), Some(499.5));
        assert_eq!(igst(&p), Some(12.0));

        let p = product(json!({"price": "call us"}));
        assert_eq!(price(&p), None);
    }
}
