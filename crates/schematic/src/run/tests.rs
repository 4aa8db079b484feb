use super::{extract, parse, Run};
use crate::input::Overflow;

#[test]
fn test_extract_from_any_digit() {
    let line = b"..1234..";

    for column in 2..=5 {
        assert_eq!(
            extract(line, column),
            Ok(Some(Run {
                start: 2,
                end: 5,
                value: 1234
            }))
        );
    }
}

#[test]
fn test_extract_at_edges() {
    let line = b"12.*.345";
    assert_eq!(
        extract(line, 0),
        Ok(Some(Run {
            start: 0,
            end: 1,
            value: 12
        }))
    );
    assert_eq!(
        extract(line, 7),
        Ok(Some(Run {
            start: 5,
            end: 7,
            value: 345
        }))
    );
}

#[test]
fn test_extract_absent() {
    let line = b"12.*.345";
    assert_eq!(extract(line, 2), Ok(None));
    assert_eq!(extract(line, 3), Ok(None));
    assert_eq!(extract(line, 8), Ok(None));
    assert_eq!(extract(line, usize::MAX), Ok(None));
    assert_eq!(extract(b"", 0), Ok(None));
}

#[test]
fn test_extract_single_digit() {
    assert_eq!(
        extract(b".7.", 1),
        Ok(Some(Run {
            start: 1,
            end: 1,
            value: 7
        }))
    );
}

#[test]
fn test_equal_values_are_distinct_runs() {
    let line = b"12*12";
    let a = extract(line, 0).unwrap();
    let b = extract(line, 4).unwrap();
    assert_ne!(a, b);
    assert_eq!(a.map(|r| r.value), b.map(|r| r.value));
}

#[test]
fn test_parse() {
    assert_eq!(parse(b"0"), Ok(0));
    assert_eq!(parse(b"007"), Ok(7));
    assert_eq!(parse(b"18446744073709551615"), Ok(u64::MAX));
    assert_eq!(parse(b"18446744073709551616"), Err(Overflow));
}
