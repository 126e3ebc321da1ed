//! SMS length and segment math
//!
//! Pure functions over the message text; the SMS builder calls these after
//! every change to show live segment counts and budget warnings.

/// Longest message that still fits in a single segment
pub const SINGLE_SEGMENT_LIMIT: usize = 160;

/// Per-segment budget once a message spans multiple segments (the
/// concatenation header eats part of each segment)
pub const MULTI_SEGMENT_SIZE: usize = 153;

/// Hard ceiling enforced by the delivery gateway
pub const MAX_LENGTH: usize = 1600;

/// Length and segment accounting for one outgoing message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentInfo {
    /// Character count of the message text
    pub length: usize,
    /// Number of segments the message will be split into
    pub segments: usize,
    /// True once the message no longer fits in a single segment
    pub is_extended: bool,
    /// True when the message is over the hard ceiling
    pub exceeds: bool,
    /// Characters left before the applicable limit; negative means over
    /// budget by that many characters
    pub remaining: i64,
}

/// Analyze a message under SMS encoding rules.
pub fn analyze(text: &str) -> SegmentInfo {
    let length = text.chars().count();
    let is_extended = length > SINGLE_SEGMENT_LIMIT;
    let segments = if is_extended {
        length.div_ceil(MULTI_SEGMENT_SIZE)
    } else {
        1
    };
    let limit = if is_extended {
        MAX_LENGTH
    } else {
        SINGLE_SEGMENT_LIMIT
    };

    SegmentInfo {
        length,
        segments,
        is_extended,
        exceeds: length > MAX_LENGTH,
        remaining: limit as i64 - length as i64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_message() {
        let info = analyze("");
        assert_eq!(info.length, 0);
        assert_eq!(info.segments, 1);
        assert!(!info.is_extended);
        assert_eq!(info.remaining, 160);
    }

    #[test]
    fn test_single_segment_boundary() {
        let info = analyze(&"a".repeat(160));
        assert_eq!(info.segments, 1);
        assert!(!info.is_extended);
        assert_eq!(info.remaining, 0);
    }

    #[test]
    fn test_second_segment_starts_at_161() {
        let info = analyze(&"a".repeat(161));
        assert_eq!(info.segments, 2);
        assert!(info.is_extended);
        assert_eq!(info.remaining, 1600 - 161);
    }

    #[test]
    fn test_multi_segment_budget() {
        // Continuation segments carry 153 characters each
        assert_eq!(analyze(&"a".repeat(306)).segments, 2);
        assert_eq!(analyze(&"a".repeat(307)).segments, 3);
    }

    #[test]
    fn test_hard_ceiling() {
        assert!(!analyze(&"a".repeat(1600)).exceeds);
        let over = analyze(&"a".repeat(1601));
        assert!(over.exceeds);
        assert_eq!(over.remaining, -1);
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        let info = analyze(&"ø".repeat(100));
        assert_eq!(info.length, 100);
        assert!(!info.is_extended);
    }
}
