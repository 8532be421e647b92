/// A failure to find the distance between two waypoints.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("no known distance from `{from}` to `{to}`")]
pub struct LookupError {
    pub from: String,
    pub to: String,
}

impl LookupError {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> LookupError {
        LookupError {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// An interface for anything that knows how far apart
/// two waypoints are, by name.
///
/// Distances should be non-negative, and must not change
/// over the course of a run. Whether the distance from `a`
/// to `b` equals that from `b` to `a` is up to the implementor.
///
/// Providers are shared between sub-population workers,
/// hence the `Sync` bound.
pub trait DistanceProvider: Sync {
    /// Returns the travel distance (or cost) from `from` to `to`.
    ///
    /// # Errors
    /// Returns a [`LookupError`] if either name is unknown.
    fn distance(&self, from: &str, to: &str) -> Result<f64, LookupError>;
}

impl<F> DistanceProvider for F
where
    F: Fn(&str, &str) -> Result<f64, LookupError> + Sync,
{
    fn distance(&self, from: &str, to: &str) -> Result<f64, LookupError> {
        self(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(from: &str, to: &str) -> Result<f64, LookupError> {
        match (from, to) {
            ("a", "b") | ("b", "a") => Ok(2.0),
            _ => Err(LookupError::new(from, to)),
        }
    }

    #[test]
    fn functions_provide_distances() {
        assert_eq!(ring.distance("a", "b"), Ok(2.0));
        assert_eq!(ring.distance("a", "z"), Err(LookupError::new("a", "z")));
    }

    #[test]
    fn lookup_error_names_pair() {
        let message = LookupError::new("Depot", "Market").to_string();
        assert_eq!(message, "no known distance from `Depot` to `Market`");
    }
}
