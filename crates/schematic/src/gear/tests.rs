use crate::line::{Line, Triple};

use super::{gear_sum, ratio};

fn triple(prev: &str, current: &str, next: &str) -> Triple {
    Triple::new(
        1,
        Line::new(prev.as_bytes()),
        Line::new(current.as_bytes()),
        Line::new(next.as_bytes()),
    )
}

#[test]
fn test_two_numbers() {
    let t = triple("467..114..", "...*......", "..35..633.");
    assert_eq!(ratio(&t, 3).unwrap(), Some(16345));
    assert_eq!(gear_sum(&t).unwrap(), 16345);
}

#[test]
fn test_three_numbers() {
    let t = triple("1.2", ".*.", ".3.");
    assert_eq!(ratio(&t, 1).unwrap(), None);
    assert_eq!(gear_sum(&t).unwrap(), 0);
}

#[test]
fn test_single_number() {
    let t = triple("...", "12*", "...");
    assert_eq!(gear_sum(&t).unwrap(), 0);
}

#[test]
fn test_same_run_through_multiple_cells() {
    // 123 touches the gear through all three cells above it.
    let t = triple(".123.", "..*..", ".....");
    assert_eq!(gear_sum(&t).unwrap(), 0);

    let t = triple(".123.", "..*..", "...4.");
    assert_eq!(gear_sum(&t).unwrap(), 492);
}

#[test]
fn test_equal_values_at_different_spans() {
    let t = triple(".....", "12*12", ".....");
    assert_eq!(gear_sum(&t).unwrap(), 144);
}

#[test]
fn test_equal_spans_on_different_lines_collapse() {
    // Same span and value above and below is a single number.
    let t = triple(".12.", "..*.", ".12.");
    assert_eq!(ratio(&t, 2).unwrap(), None);
    assert_eq!(gear_sum(&t).unwrap(), 0);

    let t = triple(".12.", "..*3", ".12.");
    assert_eq!(gear_sum(&t).unwrap(), 36);
}

#[test]
fn test_multiple_gears() {
    let t = triple("2.3.4", ".*.*.", ".....");
    assert_eq!(gear_sum(&t).unwrap(), 2 * 3 + 3 * 4);
}

#[test]
fn test_no_wraparound() {
    let t = triple("...9", "*...", "1...");
    assert_eq!(gear_sum(&t).unwrap(), 0);
}

#[test]
fn test_other_symbols_are_not_gears() {
    let t = triple("467..114..", "...#......", "..35..633.");
    assert_eq!(gear_sum(&t).unwrap(), 0);
}
