//! HTTP Range request parsing module
//!
//! Single-range `bytes=` parsing for resumable downloads (RFC 7233).

/// Outcome of parsing a Range header against a known body size
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeOutcome {
    /// No Range header, non-bytes unit, or malformed: serve the full body
    Full,
    /// Serve bytes `start..=end` (both within the body)
    Partial { start: usize, end: usize },
    /// Range cannot be satisfied: respond 416
    Unsatisfiable,
}

/// Parse an HTTP Range header value for a body of `len` bytes
///
/// Supported forms: `bytes=start-end`, `bytes=start-`, `bytes=-suffix`.
/// Multi-range requests and anything malformed are treated as no range.
pub fn parse_range(header: Option<&str>, len: usize) -> RangeOutcome {
    let Some(spec) = header.and_then(|h| h.strip_prefix("bytes=")) else {
        return RangeOutcome::Full;
    };

    // Single range only
    if spec.contains(',') {
        return RangeOutcome::Full;
    }

    let Some((start_str, end_str)) = spec.split_once('-') else {
        return RangeOutcome::Full;
    };
    let (start_str, end_str) = (start_str.trim(), end_str.trim());

    if len == 0 {
        return RangeOutcome::Unsatisfiable;
    }

    // Suffix form: "-500" means the last 500 bytes
    if start_str.is_empty() {
        return match end_str.parse::<usize>() {
            Ok(0) => RangeOutcome::Unsatisfiable,
            Ok(suffix) => RangeOutcome::Partial {
                start: len.saturating_sub(suffix),
                end: len - 1,
            },
            Err(_) => RangeOutcome::Full,
        };
    }

    let Ok(start) = start_str.parse::<usize>() else {
        return RangeOutcome::Full;
    };
    if start >= len {
        return RangeOutcome::Unsatisfiable;
    }

    let end = if end_str.is_empty() {
        len - 1
    } else {
        match end_str.parse::<usize>() {
            // Clamp to the last byte
            Ok(e) => e.min(len - 1),
            Err(_) => return RangeOutcome::Full,
        }
    };

    if start > end {
        return RangeOutcome::Unsatisfiable;
    }

    RangeOutcome::Partial { start, end }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_header() {
        assert_eq!(parse_range(None, 100), RangeOutcome::Full);
    }

    #[test]
    fn test_fixed_range() {
        assert_eq!(
            parse_range(Some("bytes=0-9"), 100),
            RangeOutcome::Partial { start: 0, end: 9 }
        );
    }

    #[test]
    fn test_open_range() {
        assert_eq!(
            parse_range(Some("bytes=50-"), 100),
            RangeOutcome::Partial { start: 50, end: 99 }
        );
    }

    #[test]
    fn test_suffix_range() {
        assert_eq!(
            parse_range(Some("bytes=-20"), 100),
            RangeOutcome::Partial { start: 80, end: 99 }
        );
        // Suffix longer than the body clamps to the whole body
        assert_eq!(
            parse_range(Some("bytes=-500"), 100),
            RangeOutcome::Partial { start: 0, end: 99 }
        );
    }

    #[test]
    fn test_end_clamped_to_body() {
        assert_eq!(
            parse_range(Some("bytes=90-200"), 100),
            RangeOutcome::Partial { start: 90, end: 99 }
        );
    }

    #[test]
    fn test_unsatisfiable() {
        assert_eq!(
            parse_range(Some("bytes=100-"), 100),
            RangeOutcome::Unsatisfiable
        );
        assert_eq!(
            parse_range(Some("bytes=-0"), 100),
            RangeOutcome::Unsatisfiable
        );
        assert_eq!(
            parse_range(Some("bytes=0-"), 0),
            RangeOutcome::Unsatisfiable
        );
    }

    #[test]
    fn test_malformed_served_in_full() {
        assert_eq!(parse_range(Some("bytes=a-b"), 100), RangeOutcome::Full);
        assert_eq!(
            parse_range(Some("bytes=0-9,20-29"), 100),
            RangeOutcome::Full
        );
        assert_eq!(parse_range(Some("items=0-9"), 100), RangeOutcome::Full);
    }
}
