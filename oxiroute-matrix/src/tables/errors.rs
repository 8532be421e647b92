/// An error type indicating a route table
/// that can't be turned into a distance matrix.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum TableError {
    /// A waypoint name is listed more than once.
    #[error("waypoint `{0}` is listed more than once")]
    DuplicateWaypoint(String),
    /// A leg refers to a waypoint that isn't listed.
    #[error("leg from `{from}` to `{to}` refers to unlisted waypoint `{name}`")]
    UnknownWaypoint {
        from: String,
        to: String,
        name: String,
    },
    /// A leg's distance is negative, infinite or NaN.
    #[error("leg from `{from}` to `{to}` has invalid distance {distance}")]
    InvalidDistance {
        from: String,
        to: String,
        distance: f64,
    },
    /// Two listed waypoints have no leg between them.
    #[error("no leg from `{from}` to `{to}`")]
    MissingLeg { from: String, to: String },
}
