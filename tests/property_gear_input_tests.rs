use gearmap_rs::core::parse_tooth_counts;
use proptest::prelude::*;

proptest! {
    #[test]
    fn parsing_matches_the_digit_run_oracle(text in ".*") {
        let expected: Vec<u32> = text
            .split(|c: char| !c.is_ascii_digit())
            .filter(|run| !run.is_empty())
            .filter_map(|run| run.parse::<u32>().ok())
            .collect();

        let set = parse_tooth_counts(&text);
        prop_assert_eq!(set.teeth(), expected.as_slice());
    }

    #[test]
    fn separator_joined_counts_round_trip(
        counts in prop::collection::vec(1u32..100_000, 0..12),
        separator in "[,;/ \\t-]{1,3}"
    ) {
        let text = counts
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(&separator);

        let set = parse_tooth_counts(&text);
        prop_assert_eq!(set.teeth(), counts.as_slice());
    }

    #[test]
    fn adjacent_digits_merge_into_one_run(left in 1u32..1000, right in 0u32..1000) {
        let text = format!("{left}{right:03}");
        let set = parse_tooth_counts(&text);
        prop_assert_eq!(set.len(), 1);
    }
}
