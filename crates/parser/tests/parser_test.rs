#[cfg(test)]
mod parser_tests {
    use cronexpand_core::CronError;
    use cronexpand_parser::*;

    #[test]
    fn test_wildcard_expands_full_range() {
        let values = WildcardParser.parse("*", 1, 7).unwrap();
        assert_eq!(values, vec![1, 2, 3, 4, 5, 6, 7]);

        let values = WildcardParser.parse("*", 0, 0).unwrap();
        assert_eq!(values, vec![0]);
    }

    #[test]
    fn test_wildcard_rejects_other_tokens() {
        assert!(matches!(
            WildcardParser.parse("**", 0, 59),
            Err(CronError::UnableToParse(_))
        ));
        assert!(matches!(
            WildcardParser.parse("5", 0, 59),
            Err(CronError::UnableToParse(_))
        ));
    }

    #[test]
    fn test_range_expands_inclusive() {
        let values = RangeParser.parse("1-3", 1, 7).unwrap();
        assert_eq!(values, vec![1, 2, 3]);

        let values = RangeParser.parse("5-5", 0, 59).unwrap();
        assert_eq!(values, vec![5]);
    }

    #[test]
    fn test_range_rejects_inverted_bounds() {
        assert!(matches!(
            RangeParser.parse("7-3", 0, 23),
            Err(CronError::InvertedRange { begin: 7, end: 3 })
        ));
    }

    #[test]
    fn test_range_rejects_begin_below_minimum() {
        assert!(matches!(
            RangeParser.parse("0-5", 1, 31),
            Err(CronError::ValueOutOfBounds { value: 0, .. })
        ));
    }

    #[test]
    fn test_range_rejects_end_above_maximum() {
        assert!(matches!(
            RangeParser.parse("5-8", 1, 7),
            Err(CronError::ValueOutOfBounds { value: 8, .. })
        ));
    }

    #[test]
    fn test_range_rejects_malformed_tokens() {
        for token in ["1-", "-3", "1-2-3", "a-b", "1--3", "+1-3"] {
            assert!(
                matches!(
                    RangeParser.parse(token, 0, 59),
                    Err(CronError::UnableToParse(_))
                ),
                "token: {token}"
            );
        }
    }

    #[test]
    fn test_step_expands_from_minimum() {
        let values = StepParser.parse("*/15", 0, 59).unwrap();
        assert_eq!(values, vec![0, 15, 30, 45]);
    }

    #[test]
    fn test_step_stops_at_last_value_within_maximum() {
        // 23不能被5整除, 在最后一个不超过上界的值处停下
        let values = StepParser.parse("*/5", 0, 23).unwrap();
        assert_eq!(values, vec![0, 5, 10, 15, 20]);

        // 上界恰好被步长命中
        let values = StepParser.parse("*/6", 0, 12).unwrap();
        assert_eq!(values, vec![0, 6, 12]);
    }

    #[test]
    fn test_step_larger_than_range_yields_minimum_only() {
        let values = StepParser.parse("*/100", 1, 12).unwrap();
        assert_eq!(values, vec![1]);
    }

    #[test]
    fn test_step_rejects_zero() {
        assert!(matches!(
            StepParser.parse("*/0", 0, 59),
            Err(CronError::InvalidStep(_))
        ));
    }

    #[test]
    fn test_step_rejects_malformed_tokens() {
        for token in ["*/", "*/a", "/15", "15", "*15", "*/1.5"] {
            assert!(
                matches!(
                    StepParser.parse(token, 0, 59),
                    Err(CronError::UnableToParse(_))
                ),
                "token: {token}"
            );
        }
    }

    #[test]
    fn test_value_yields_single_element() {
        let values = ValueParser.parse("30", 0, 59).unwrap();
        assert_eq!(values, vec![30]);

        let values = ValueParser.parse("7", 1, 7).unwrap();
        assert_eq!(values, vec![7]);
    }

    #[test]
    fn test_value_rejects_out_of_bounds() {
        assert!(matches!(
            ValueParser.parse("100", 0, 23),
            Err(CronError::ValueOutOfBounds { value: 100, .. })
        ));
        assert!(matches!(
            ValueParser.parse("0", 1, 31),
            Err(CronError::ValueOutOfBounds { value: 0, .. })
        ));
    }

    #[test]
    fn test_value_rejects_non_numeric_tokens() {
        for token in ["a", "1a", "-1", "+5", "1.0", ""] {
            assert!(
                matches!(
                    ValueParser.parse(token, 0, 59),
                    Err(CronError::UnableToParse(_))
                ),
                "token: {token:?}"
            );
        }
    }

    #[test]
    fn test_enumeration_preserves_input_order() {
        let values = EnumerationParser.parse("15,1", 1, 31).unwrap();
        assert_eq!(values, vec![15, 1]);

        let values = EnumerationParser.parse("3,3,1", 1, 7).unwrap();
        assert_eq!(values, vec![3, 3, 1]);
    }

    #[test]
    fn test_enumeration_requires_two_members() {
        assert!(matches!(
            EnumerationParser.parse("5", 0, 59),
            Err(CronError::UnableToParse(_))
        ));
    }

    #[test]
    fn test_enumeration_rejects_out_of_bounds_member() {
        assert!(matches!(
            EnumerationParser.parse("1,60", 0, 59),
            Err(CronError::UnableToParse(_))
        ));
        assert!(matches!(
            EnumerationParser.parse("0,5", 1, 12),
            Err(CronError::UnableToParse(_))
        ));
    }

    #[test]
    fn test_enumeration_rejects_empty_member() {
        for token in ["1,,3", "1,", ",3"] {
            assert!(
                matches!(
                    EnumerationParser.parse(token, 0, 59),
                    Err(CronError::UnableToParse(_))
                ),
                "token: {token}"
            );
        }
    }

    #[test]
    fn test_registry_contains_all_kinds() {
        use cronexpand_core::ExpressionKind;

        let registry = ParserRegistry::new();
        for kind in ExpressionKind::precedence_order() {
            assert!(registry.get(kind).is_some(), "kind: {kind}");
        }
    }
}
