// src/core/scoring.rs

use std::fmt;

use crate::core::models::{HeadersReport, HttpsReport, PortScanReport, ScoreSummary};

/// Points available regardless of header/port lists: one for HTTPS, one for HSTS.
const TRANSPORT_POINTS: u32 = 2;

/// Converts the three probe reports into a single score.
///
/// One point each for HTTPS, HSTS, every present security header and every
/// port that is *not* open. Exposed sensitive ports cost points. A host that
/// is entirely unreachable still earns the port points.
pub fn score(https: &HttpsReport, headers: &HeadersReport, ports: &PortScanReport) -> ScoreSummary {
    let raw = u32::from(https.https)
        + u32::from(https.hsts)
        + headers.present_count() as u32
        + ports.checked_ports.iter().filter(|p| !p.open).count() as u32;
    let out_of =
        TRANSPORT_POINTS + headers.checked_headers.len() as u32 + ports.checked_ports.len() as u32;

    ScoreSummary { raw, out_of, percent: percent(raw, out_of) }
}

/// `round(100 * raw / out_of)` with halves rounded up, in exact integer arithmetic.
///
/// Capped at 99 while any point is missing: from `out_of >= 200` on, a single
/// missing point would otherwise round up to 100.
fn percent(raw: u32, out_of: u32) -> u8 {
    if out_of == 0 {
        return 0;
    }
    let raw = u64::from(raw.min(out_of));
    let out_of_wide = u64::from(out_of);
    let rounded = ((200 * raw + out_of_wide) / (2 * out_of_wide)) as u8;
    if raw < out_of_wide { rounded.min(99) } else { rounded }
}

/// Qualitative band for a score percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    Excellent,
    Good,
    NeedsImprovement,
    Poor,
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rating::Excellent => write!(f, "Excellent"),
            Rating::Good => write!(f, "Good"),
            Rating::NeedsImprovement => write!(f, "Needs Improvement"),
            Rating::Poor => write!(f, "Poor"),
        }
    }
}

impl ScoreSummary {
    pub fn rating(&self) -> Rating {
        match self.percent {
            90..=100 => Rating::Excellent,
            75..=89 => Rating::Good,
            50..=74 => Rating::NeedsImprovement,
            _ => Rating::Poor,
        }
    }
}
