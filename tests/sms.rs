//! SMS segment accounting tests

use stencil::sms::{analyze, MAX_LENGTH, MULTI_SEGMENT_SIZE, SINGLE_SEGMENT_LIMIT};

#[test]
fn test_segment_boundaries() {
    assert_eq!(analyze(&"a".repeat(160)).segments, 1);
    assert_eq!(analyze(&"a".repeat(161)).segments, 2);
}

#[test]
fn test_extended_flag_flips_past_single_segment() {
    assert!(!analyze(&"a".repeat(SINGLE_SEGMENT_LIMIT)).is_extended);
    assert!(analyze(&"a".repeat(SINGLE_SEGMENT_LIMIT + 1)).is_extended);
}

#[test]
fn test_hard_ceiling_boundary() {
    assert!(!analyze(&"a".repeat(1600)).exceeds);
    assert!(analyze(&"a".repeat(1601)).exceeds);
}

#[test]
fn test_continuation_segments_use_smaller_budget() {
    assert_eq!(analyze(&"a".repeat(MULTI_SEGMENT_SIZE * 2)).segments, 2);
    assert_eq!(analyze(&"a".repeat(MULTI_SEGMENT_SIZE * 2 + 1)).segments, 3);
}

#[test]
fn test_remaining_against_applicable_limit() {
    // Under the single-segment limit, remaining counts toward 160
    assert_eq!(analyze(&"a".repeat(150)).remaining, 10);
    // Once extended, remaining counts toward the hard ceiling
    assert_eq!(analyze(&"a".repeat(200)).remaining, (MAX_LENGTH - 200) as i64);
}

#[test]
fn test_remaining_negative_when_over_ceiling() {
    let info = analyze(&"a".repeat(1620));
    assert_eq!(info.remaining, -20);
    assert!(info.exceeds);
}

#[test]
fn test_rendered_message_measures_by_chars() {
    // 80 two-byte characters still fit a single segment comfortably
    let info = analyze(&"æ".repeat(80));
    assert_eq!(info.length, 80);
    assert_eq!(info.segments, 1);
}
