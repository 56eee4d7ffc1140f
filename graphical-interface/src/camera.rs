use walkers::MapMemory;

use crate::types::GeoPoint;

/// The map's zoom and pan, plus the Point 1 position it last followed.
pub struct Camera {
    pub map_memory: MapMemory,
    last_center: GeoPoint,
}

impl Camera {
    pub fn new(map_memory: MapMemory, center: GeoPoint) -> Self {
        Self {
            map_memory,
            last_center: center,
        }
    }

    /// Re-attaches the map to `center` if it moved since the last call.
    ///
    /// A pan away from an unchanged centre is kept. Returns whether the map
    /// was recentred.
    pub fn recenter(&mut self, center: GeoPoint) -> bool {
        if center == self.last_center {
            return false;
        }
        self.map_memory.follow_my_position();
        self.last_center = center;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pan_survives_until_center_moves() {
        let start = GeoPoint::new(56.30, 44.00);
        let mut camera = Camera::new(MapMemory::default(), start);

        camera
            .map_memory
            .center_at(GeoPoint::new(56.35, 43.95).to_position());
        assert!(camera.map_memory.detached().is_some());

        assert!(!camera.recenter(start));
        assert!(camera.map_memory.detached().is_some());

        assert!(camera.recenter(GeoPoint::new(56.25, 44.00)));
        assert!(camera.map_memory.detached().is_none());
    }

    #[test]
    fn test_recenter_only_fires_once_per_move() {
        let mut camera = Camera::new(MapMemory::default(), GeoPoint::new(56.30, 44.00));
        let moved = GeoPoint::new(56.31, 44.00);

        assert!(camera.recenter(moved));

        camera.map_memory.center_at(moved.to_position());
        assert!(!camera.recenter(moved));
        assert!(camera.map_memory.detached().is_some());
    }
}
