/// Which half of a coordinate pair an input edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::Latitude, Axis::Longitude];

    pub fn label(&self) -> &'static str {
        match self {
            Axis::Latitude => "Latitude",
            Axis::Longitude => "Longitude",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Axis::Latitude => 0,
            Axis::Longitude => 1,
        }
    }
}

/// Identifies one of the two points on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointId {
    First,
    Second,
}

impl PointId {
    pub const ALL: [PointId; 2] = [PointId::First, PointId::Second];

    /// Label used for the form heading and the marker popup.
    pub fn label(&self) -> &'static str {
        match self {
            PointId::First => "Point 1",
            PointId::Second => "Point 2",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            PointId::First => 0,
            PointId::Second => 1,
        }
    }
}
