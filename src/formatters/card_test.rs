#[cfg(test)]
mod tests {
    use super::super::card::*;
    use crate::schemas::Product;
    use serde_json::json;

    fn card(value: serde_json::Value) -> ProductCard {
        ProductCard::from_product(&Product::from_value(value), 0, DescriptionLimit::Full)
    }

    #[test]
    fn test_description_truncated_to_limit_plus_ellipsis() {
        let long = "a".repeat(250);
        let c = card(json!({"title": "Long", "description": long}));

        let description = c.description.unwrap();
        assert_eq!(description.chars().count(), 203);
        assert!(description.ends_with("..."));
    }

    #[test]
    fn test_compact_limit() {
        let long = "b".repeat(150);
        let c = ProductCard::from_product(
            &Product::from_value(json!({"desc": long})),
            0,
            DescriptionLimit::Compact,
        );
        assert_eq!(c.description.unwrap().chars().count(), 103);
    }

    #[test]
    fn test_description_at_limit_is_untouched() {
        let exact = "c".repeat(200);
        let c = card(json!({"desc": exact.clone()}));
        assert_eq!(c.description, Some(exact));
    }

    #[test]
    fn test_truncation_counts_characters() {
        let text = "₹".repeat(5);
        assert_eq!(truncate_description(&text, 3), "₹₹₹...");
    }

    #[test]
    fn test_igst_zero_renders_badge() {
        let c = card(json!({"title": "Fresh Milk", "igst": 0}));
        assert_eq!(c.tax_badges(), vec!["GST: 0%".to_string()]);
    }

    #[test]
    fn test_null_igst_and_price_are_absent() {
        let c = card(json!({"title": "Loose Tea", "igst": null, "price": null}));
        assert!(c.igst.is_none());
        assert!(c.tax_badges().is_empty());
        assert!(c.price.is_none());
    }

    #[test]
    fn test_hsn_and_igst_badges() {
        let c = card(json!({"hsn": "0401", "igst": 5}));
        assert_eq!(
            c.tax_badges(),
            vec!["HSN: 0401".to_string(), "GST: 5%".to_string()]
        );
    }

    #[test]
    fn test_missing_fields_fall_back() {
        let c = card(json!({}));
        assert_eq!(c.title, UNTITLED_PRODUCT);
        assert_eq!(c.image, ImageSlot::Placeholder);
        assert_eq!(c.description, None);
        assert_eq!(c.price, None);
        assert!(c.tax_badges().is_empty());
        assert_eq!(c.meta_line(), None);
        assert_eq!(c.key, "0");
    }

    #[test]
    fn test_price_formatting() {
        let c = card(json!({"price": 125000}));
        assert_eq!(c.price, Some("₹1,25,000".to_string()));

        let c = card(json!({"price": null}));
        assert_eq!(c.price, None);

        let c = card(json!({"price": 0}));
        assert_eq!(c.price, Some("₹0".to_string()));
    }

    #[test]
    fn test_meta_line_combinations() {
        let c = card(json!({"brand": "Paper Boat", "category": "Juices"}));
        assert_eq!(c.meta_line(), Some("Paper Boat · Juices".to_string()));

        let c = card(json!({"cat": "Snacks"}));
        assert_eq!(c.meta_line(), Some("Snacks".to_string()));
    }

    #[test]
    fn test_key_prefers_record_id() {
        let c = ProductCard::from_product(
            &Product::from_value(json!({"_id": "abc123"})),
            4,
            DescriptionLimit::Full,
        );
        assert_eq!(c.key, "abc123");

        let c = ProductCard::from_product(&Product::default(), 4, DescriptionLimit::Full);
        assert_eq!(c.key, "4");
    }
}
