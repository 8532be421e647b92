//! Fixtures shared by unit tests.
use crate::{LookupError, Waypoint};

use std::sync::Arc;

/// A depot `stop-0` and `n` destinations `stop-1` through `stop-n`.
pub(crate) fn catalog(n: usize) -> (Arc<Waypoint>, Vec<Arc<Waypoint>>) {
    let depot = Arc::new(Waypoint::new(0, "stop-0"));
    let destinations = (1..=n)
        .map(|i| Arc::new(Waypoint::new(i, format!("stop-{}", i))))
        .collect();
    (depot, destinations)
}

/// Stops laid out on a line, one unit apart.
pub(crate) fn line_distance(from: &str, to: &str) -> Result<f64, LookupError> {
    let position = |name: &str| {
        name.strip_prefix("stop-")
            .and_then(|i| i.parse::<f64>().ok())
    };
    match (position(from), position(to)) {
        (Some(a), Some(b)) => Ok((a - b).abs()),
        _ => Err(LookupError::new(from, to)),
    }
}
