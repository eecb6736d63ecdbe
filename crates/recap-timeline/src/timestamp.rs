use serde::{Deserialize, Serialize};

/// Seconds since the start of the movie, and whether the input was well formed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParsedTimestamp {
    pub seconds: f64,
    pub valid: bool,
}

impl ParsedTimestamp {
    const MALFORMED: Self = Self {
        seconds: 0.0,
        valid: false,
    };
}

/// Parse `HH:MM:SS`, `HH:MM:SS,mmm` or `HH:MM:SS.mmm`.
///
/// Anything else parses to 0 seconds with `valid == false`.
pub fn parse_timestamp(raw: &str) -> ParsedTimestamp {
    parse_strict(raw.trim()).map_or(ParsedTimestamp::MALFORMED, |seconds| ParsedTimestamp {
        seconds,
        valid: true,
    })
}

fn parse_strict(raw: &str) -> Option<f64> {
    let (clock, fraction) = match raw.find([',', '.']) {
        Some(pos) => (&raw[..pos], Some(&raw[pos + 1..])),
        None => (raw, None),
    };

    let mut parts = clock.split(':');
    let hours = digits(parts.next()?)?;
    let minutes = digits(parts.next()?)?;
    let seconds = digits(parts.next()?)?;
    if parts.next().is_some() || minutes >= 60 || seconds >= 60 {
        return None;
    }

    let millis = match fraction {
        None => 0.0,
        Some(f) if !f.is_empty() && f.len() <= 3 && f.bytes().all(|b| b.is_ascii_digit()) => {
            // ",5" is half a second, ",500" too.
            let padded = format!("{f:0<3}");
            padded.parse::<u32>().ok()? as f64
        }
        Some(_) => return None,
    };

    Some(hours as f64 * 3600.0 + minutes as f64 * 60.0 + seconds as f64 + millis / 1000.0)
}

fn digits(part: &str) -> Option<u64> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_three_forms() {
        assert_eq!(parse_timestamp("01:02:03").seconds, 3723.0);
        assert_eq!(parse_timestamp("00:00:07,250").seconds, 7.25);
        assert_eq!(parse_timestamp("00:00:07.250").seconds, 7.25);
        assert!(parse_timestamp("00:00:07.250").valid);
    }

    #[test]
    fn short_fractions_are_right_padded() {
        assert_eq!(parse_timestamp("00:00:01,5").seconds, 1.5);
    }

    #[test]
    fn malformed_is_zero_and_flagged() {
        for raw in ["", "abc", "00:00", "00:61:00", "00:00:00,1234", "1:2:3:4", "-1:00:00", "00:00:05,"] {
            let parsed = parse_timestamp(raw);
            assert_eq!(parsed.seconds, 0.0, "{raw:?}");
            assert!(!parsed.valid, "{raw:?}");
        }
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert!(parse_timestamp("  00:00:01,000\n").valid);
    }
}
