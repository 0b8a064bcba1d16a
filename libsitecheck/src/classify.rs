use crate::signatures::body_matches;
use crate::types::StatusLabel;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub alive: bool,
    pub powered_by_boatsgroup: bool,
    pub label: StatusLabel,
}

/// Derives the three-valued status from a response.
///
/// A domain is alive iff a response was obtained with a status in [200, 400).
/// Only live bodies are scanned for signatures, so a match always implies
/// aliveness.
pub fn classify(
    status_code: Option<u16>,
    body: Option<&str>,
    extra_signatures: &[String],
) -> Classification {
    let alive = matches!(status_code, Some(code) if (200..400).contains(&code));
    if !alive {
        return Classification {
            alive: false,
            powered_by_boatsgroup: false,
            label: StatusLabel::Dead,
        };
    }

    let matched = body.is_some_and(|b| body_matches(b, extra_signatures));
    Classification {
        alive: true,
        powered_by_boatsgroup: matched,
        label: if matched {
            StatusLabel::AliveBoatsgroup
        } else {
            StatusLabel::AliveNotBoatsgroup
        },
    }
}
