#[cfg(test)]
mod unit_tests {

    use crate::{CountryDirectory, DirectoryError, LabelValue, RawCountryRecord};
    use smallvec::SmallVec;

    fn sample() -> CountryDirectory {
        CountryDirectory::new(
            [
                ("US", LabelValue::from("United States")),
                ("FR", LabelValue::from(["France", "Francia"].as_slice())),
            ]
            .into_iter()
            .collect(),
        )
    }

    #[test]
    fn label_map_lowercases_keys() {
        let map = sample().label_map().unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["us"], "United States");
        assert!(map.contains_key("fr"));
        assert!(!map.contains_key("US"));
    }

    #[test]
    fn first_label_wins() {
        let map = sample().label_map().unwrap();
        assert_eq!(map["fr"], "France");
    }

    #[test]
    fn first_label_is_deterministic() {
        let label = LabelValue::from(["France", "Francia"].as_slice());
        assert_eq!(label.first_label(), Some("France"));
        assert_eq!(label.first_label(), Some("France"));
        assert_eq!(LabelValue::from("France").first_label(), Some("France"));
    }

    #[test]
    fn entries_preserve_input_order() {
        let series = sample().entries().unwrap();
        let flat: Vec<(&str, &str)> = series
            .iter()
            .map(|e| (e.code.as_str(), e.name.as_str()))
            .collect();
        assert_eq!(flat, [("us", "United States"), ("fr", "France")]);
    }

    #[test]
    fn code_views_line_up() {
        let dir = sample();
        assert_eq!(dir.lowercase_codes(), ["us", "fr"]);
        assert_eq!(dir.uppercase_codes(), ["US", "FR"]);
    }

    #[test]
    fn case_variant_codes_collapse_last_write_wins() {
        let dir = CountryDirectory::new(
            [
                ("us", LabelValue::from("first")),
                ("DE", LabelValue::from("Germany")),
                ("US", LabelValue::from("second")),
            ]
            .into_iter()
            .collect(),
        );

        let map = dir.label_map().unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["us"], "second");

        // Ordered views keep the first-seen position for the folded code.
        assert_eq!(dir.lowercase_codes(), ["us", "de"]);
        // The per-entry series is not deduplicated.
        assert_eq!(dir.entries().unwrap().len(), 3);
    }

    #[test]
    fn empty_label_list_fails_fast() {
        let dir = CountryDirectory::new(
            [("XX", LabelValue::Multiple(SmallVec::new()))]
                .into_iter()
                .collect(),
        );

        let err = dir.label_map().unwrap_err();
        assert!(matches!(
            &err,
            DirectoryError::EmptyLabelList { code } if code == "XX"
        ));
        assert!(err.to_string().contains("XX"));
        assert!(dir.entries().is_err());

        // Code views never read labels, so they still answer.
        assert_eq!(dir.lowercase_codes(), ["xx"]);
    }

    #[test]
    fn codes_are_folded_not_validated() {
        let dir =
            CountryDirectory::new([("Z9", LabelValue::from("Nowhere"))].into_iter().collect());
        assert_eq!(dir.lowercase_codes(), ["z9"]);
        assert_eq!(dir.uppercase_codes(), ["Z9"]);
        assert_eq!(dir.label_map().unwrap()["z9"], "Nowhere");
    }

    #[test]
    fn record_overwrites_exact_key_in_place() {
        let mut record = RawCountryRecord::new();
        record.insert("US", "old");
        record.insert("FR", "France");
        record.insert("US", "new");

        assert_eq!(record.len(), 2);
        let codes: Vec<&str> = record.iter().map(|(c, _)| c).collect();
        assert_eq!(codes, ["US", "FR"]);
        assert_eq!(record.get("US").unwrap().first_label(), Some("new"));
    }

    #[test]
    fn record_get_is_case_sensitive() {
        let mut record = RawCountryRecord::new();
        record.insert("US", "United States");
        assert!(record.get("US").is_some());
        assert!(record.get("us").is_none());
    }

    #[test]
    fn label_value_parses_both_shapes() {
        let single: LabelValue = serde_json::from_str(r#""France""#).unwrap();
        assert_eq!(single, LabelValue::from("France"));

        let multi: LabelValue = serde_json::from_str(r#"["France", "Francia"]"#).unwrap();
        assert_eq!(multi.labels(), ["France", "Francia"]);
        assert_eq!(multi.first_label(), Some("France"));
    }

    #[test]
    fn builtin_table_lookup() {
        use crate::dataset::en;

        assert_eq!(en::display_name("us"), Some("United States of America"));
        assert_eq!(en::display_name("GB"), Some("United Kingdom"));
        assert_eq!(en::lookup("gb").unwrap().len(), 3);
        assert_eq!(en::display_name("ZZ"), None);
    }

    #[test]
    fn builtin_directory_is_complete() {
        use crate::dataset::en;

        let dir = CountryDirectory::builtin_english();
        let lower = dir.lowercase_codes();
        assert_eq!(lower.len(), en::COUNTRY_TABLE.len());
        assert_eq!(lower.first().map(String::as_str), Some("ad"));
        assert!(lower.iter().any(|c| c == "us"));
    }
}
