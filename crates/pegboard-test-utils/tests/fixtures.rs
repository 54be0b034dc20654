use pegboard_core::{Direction, Pos};
use pegboard_test_utils::{assert_byte, assert_bytes, assert_int, assert_pos, Fixture, SoftAsserts};

const DATA: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data");

#[test]
fn expense_pair_summing_to_2020() {
    let mut f = Fixture::open(DATA, "expenses").unwrap();
    assert_eq!(f.name, "expenses");
    let values: Vec<i64> = f.parse().unwrap();

    let mut t = SoftAsserts::new();
    assert_int(&mut t, 6, values.len() as i64, "entry count");
    let product = values
        .iter()
        .enumerate()
        .find_map(|(i, a)| values[i + 1..].iter().find(|&&b| a + b == 2020).map(|b| a * b));
    assert_int(&mut t, 514579, product.unwrap_or_default(), "product");
    t.finish();
}

#[test]
fn trees_grid_checks() {
    let f = Fixture::open(DATA, "trees").unwrap();
    let g = f.grid().unwrap();

    let mut t = SoftAsserts::new();
    assert_int(&mut t, 3, g.count(b'#') as i64, "tree count");
    assert_byte(&mut t, b'#', g.get_or(Pos::new(2, 0), b'?'), "top right");
    assert_bytes(&mut t, b".#.", g.line(2).unwrap_or_default(), "bottom row");

    let mut p = Pos::ZERO;
    for dir in [Direction::Right, Direction::Down, Direction::Down] {
        p = p.step(dir);
    }
    assert_pos(&mut t, Pos::new(1, 2), p, format_args!("after {} steps", 3));
    assert_byte(&mut t, b'#', g.get(p).unwrap_or_default(), "landing cell");
    t.finish();
}

#[test]
fn mismatches_are_all_reported() {
    let mut t = SoftAsserts::new();
    assert_int(&mut t, 1, 2, "a");
    assert_pos(&mut t, Pos::UP, Pos::DOWN, "b");
    let failures = t.into_failures();
    assert_eq!(
        failures,
        vec![
            "a. Expected: '1', got: '2'".to_string(),
            "b. Expected: '(0, -1)', got: '(0, 1)'".to_string(),
        ]
    );
}
