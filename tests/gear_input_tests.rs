use gearmap_rs::core::parse_tooth_counts;

#[test]
fn comma_separated_input_parses_in_order() {
    let set = parse_tooth_counts("36, 50");
    assert_eq!(set.teeth(), &[36, 50]);
}

#[test]
fn empty_input_yields_empty_set() {
    assert!(parse_tooth_counts("").is_empty());
    assert!(parse_tooth_counts("no digits here").is_empty());
}

#[test]
fn non_digit_characters_only_separate_runs() {
    let set = parse_tooth_counts("a1b22");
    assert_eq!(set.teeth(), &[1, 22]);

    let set = parse_tooth_counts("11;13|15 17\t19");
    assert_eq!(set.teeth(), &[11, 13, 15, 17, 19]);
}

#[test]
fn minus_signs_cannot_produce_negative_counts() {
    let set = parse_tooth_counts("-36, -50");
    assert_eq!(set.teeth(), &[36, 50]);
}

#[test]
fn leading_zeros_parse_as_plain_integers() {
    let set = parse_tooth_counts("011");
    assert_eq!(set.teeth(), &[11]);

    let set = parse_tooth_counts("0");
    assert_eq!(set.teeth(), &[0]);
}

#[test]
fn duplicates_are_preserved_in_input_order() {
    let set = parse_tooth_counts("50, 36, 50");
    assert_eq!(set.teeth(), &[50, 36, 50]);
    assert_eq!(set.labels(), vec!["50", "36", "50"]);
}
