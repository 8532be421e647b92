use oxiroute::{DistanceProvider, LookupError};

use ahash::AHashMap;

/// Distances between named waypoints, indexed for lookup.
///
/// A waypoint is always at distance `0.0` from itself.
/// In a symmetric matrix, every inserted distance
/// also applies to the reverse leg.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DistanceMatrix {
    symmetric: bool,
    distances: AHashMap<String, AHashMap<String, f64>>,
}

impl DistanceMatrix {
    /// Returns an empty matrix.
    ///
    /// # Examples
    /// ```
    /// use oxiroute::DistanceProvider;
    /// use oxiroute_matrix::DistanceMatrix;
    ///
    /// let mut matrix = DistanceMatrix::new(true);
    /// matrix.insert("Depot", "Mill", 3.5);
    ///
    /// assert_eq!(matrix.distance("Mill", "Depot"), Ok(3.5));
    /// assert!(matrix.distance("Mill", "Harbour").is_err());
    /// ```
    pub fn new(symmetric: bool) -> DistanceMatrix {
        DistanceMatrix {
            symmetric,
            distances: AHashMap::new(),
        }
    }

    pub fn is_symmetric(&self) -> bool {
        self.symmetric
    }

    /// Sets the distance of the leg from `from` to `to`,
    /// returning the previous distance if there was one.
    pub fn insert(&mut self, from: &str, to: &str, distance: f64) -> Option<f64> {
        if self.symmetric {
            self.distances
                .entry(to.to_owned())
                .or_default()
                .insert(from.to_owned(), distance);
        }
        self.distances
            .entry(from.to_owned())
            .or_default()
            .insert(to.to_owned(), distance)
    }

    /// Returns the distance of the leg from `from` to `to`, if known.
    pub fn get(&self, from: &str, to: &str) -> Option<f64> {
        if from == to {
            return Some(0.0);
        }
        self.distances.get(from)?.get(to).copied()
    }

    /// Returns the number of known directed legs,
    /// excluding a waypoint's leg to itself.
    pub fn len(&self) -> usize {
        self.distances.values().map(|legs| legs.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DistanceProvider for DistanceMatrix {
    fn distance(&self, from: &str, to: &str) -> Result<f64, LookupError> {
        self.get(from, to).ok_or_else(|| LookupError::new(from, to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asymmetric_legs() {
        let mut matrix = DistanceMatrix::new(false);
        assert_eq!(matrix.insert("a", "b", 1.0), None);
        assert_eq!(matrix.insert("b", "a", 4.0), None);
        assert_eq!(matrix.insert("a", "b", 2.0), Some(1.0));

        assert_eq!(matrix.distance("a", "b"), Ok(2.0));
        assert_eq!(matrix.distance("b", "a"), Ok(4.0));
        assert_eq!(matrix.len(), 2);
    }

    #[test]
    fn symmetric_legs() {
        let mut matrix = DistanceMatrix::new(true);
        matrix.insert("a", "b", 1.5);
        assert_eq!(matrix.get("b", "a"), Some(1.5));
        assert_eq!(matrix.len(), 2);
    }

    #[test]
    fn self_distance() {
        let matrix = DistanceMatrix::new(false);
        assert!(matrix.is_empty());
        assert_eq!(matrix.distance("a", "a"), Ok(0.0));
    }

    #[test]
    fn unknown_leg() {
        let mut matrix = DistanceMatrix::new(false);
        matrix.insert("a", "b", 1.0);
        assert_eq!(
            matrix.distance("b", "a"),
            Err(LookupError::new("b", "a"))
        );
    }
}
