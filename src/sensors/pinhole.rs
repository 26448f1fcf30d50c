// Copyright @yucwang 2026

use crate::math::constants::{Float, Int, Vector2f, Vector2i, Vector3f};

/// Pinhole camera at the origin looking down -z, with an image plane at
/// unit distance spanning [-0.5, 0.5] on both axes.
#[derive(Debug, Clone, PartialEq)]
pub struct PinholeCamera {
    resolution: Vector2i,
}

impl Default for PinholeCamera {
    fn default() -> Self {
        Self::new(Vector2i::new(512, 512))
    }
}

impl PinholeCamera {
    pub fn new(resolution: Vector2i) -> Self {
        Self { resolution }
    }

    pub fn width(&self) -> Int {
        self.resolution.x
    }

    pub fn height(&self) -> Int {
        self.resolution.y
    }

    /// Primary ray direction through raster position `p`.
    pub fn raster_to_world(&self, p: &Vector2f) -> Vector3f {
        Vector3f::new(p.x / self.resolution.x as Float - 0.5,
                      0.5 - p.y / self.resolution.y as Float,
                      -1.0).normalize()
    }

    /// Pixel hit by a direction pointing from the scene toward the camera.
    /// Returns `None` for directions that cannot reach the image plane; the
    /// pixel may still lie outside the raster, see `raster_is_valid`.
    pub fn world_to_raster(&self, v: &Vector3f) -> Option<Vector2i> {
        if v.z <= 0.0 {
            return None;
        }
        let x = (0.5 - v.x / v.z) * self.resolution.x as Float;
        let y = (0.5 + v.y / v.z) * self.resolution.y as Float;

        Some(Vector2i::new(x.floor() as Int, y.floor() as Int))
    }

    pub fn direction_to_camera(&self, p: &Vector3f) -> Vector3f {
        -p
    }

    pub fn raster_to_index(&self, raster: &Vector2i) -> usize {
        (raster.y * self.resolution.x + raster.x) as usize
    }

    pub fn raster_is_valid(&self, p: &Vector2i) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.resolution.x && p.y < self.resolution.y
    }
}
