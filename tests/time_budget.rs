use shakmaty::Color;

use scalino::time::TimeBudget;

#[test]
fn test_clock_of_side_to_move() {
    let white = TimeBudget::from_clock(Some(1000), Some(50), None, Color::White);
    assert_eq!(white.remaining_ms, Some(1000));

    let black = TimeBudget::from_clock(Some(1000), Some(50), None, Color::Black);
    assert_eq!(black.remaining_ms, Some(50));
    assert!(black.is_below(250));
    assert!(!white.is_below(250));
}

#[test]
fn test_movetime_takes_precedence() {
    let budget = TimeBudget::from_clock(Some(1000), Some(1000), Some(40), Color::White);
    assert_eq!(budget, TimeBudget::remaining(40));
}

#[test]
fn test_missing_clock_is_unlimited() {
    let budget = TimeBudget::from_clock(None, Some(10), None, Color::White);
    assert_eq!(budget, TimeBudget::unlimited());
    assert!(!budget.is_below(u64::MAX));
}

#[test]
fn test_threshold_is_strict() {
    let budget = TimeBudget::remaining(250);
    assert!(!budget.is_below(250));
    assert!(budget.is_below(251));
    assert!(!TimeBudget::remaining(0).is_below(0));
    assert!(TimeBudget::remaining(0).is_below(1));
}
