// THEORY:
// A `Neighborhood` is the square ring of pixels around a center point, clipped
// to the grid. It is the spatial pooling step of the contrast pipeline: its one
// job is `average_pixel`, which collapses the ring into a single color the
// center can be compared against.
//
// Key rules:
// 1.  **Only in-bounds points**: coordinates are appended one by one as they pass
//     the bounds check; nothing is pre-filled. Corners of a radius-1 ring hold 3
//     points, edges 5, interior pixels 8.
// 2.  **Integer averaging**: each channel is summed as an integer and divided by
//     the point count with truncating division, matching 8-bit channel
//     arithmetic exactly. The averaged pixel carries alpha 0.
// 3.  **Empty is explicit**: a 1×1 grid has no neighbors. `average_pixel`
//     returns `None` instead of dividing by zero and the caller decides what
//     that means.

pub mod neighborhood {
    use crate::core_modules::grid::grid::PixelGrid;
    use crate::core_modules::pixel::pixel::{Channel, Pixel};

    pub type Point = (u32, u32);
    pub type Radius = u32;

    pub struct Neighborhood {
        /// In-bounds ring coordinates, column-major by offset.
        pub points: Vec<Point>,
    }

    impl Neighborhood {
        pub fn new(grid: &PixelGrid, center: Point, radius: Radius) -> Self {
            let (cx, cy) = (center.0 as i64, center.1 as i64);
            let r = radius as i64;
            let mut points = Vec::new();

            for dx in -r..=r {
                for dy in -r..=r {
                    if dx == 0 && dy == 0 {
                        continue;
                    }
                    let (x, y) = (cx + dx, cy + dy);
                    if grid.contains(x, y) {
                        points.push((x as u32, y as u32));
                    }
                }
            }

            Self { points }
        }

        pub fn len(&self) -> usize {
            self.points.len()
        }

        pub fn is_empty(&self) -> bool {
            self.points.is_empty()
        }

        /// Channel-wise truncated mean of the ring, or `None` when it is empty.
        pub fn average_pixel(&self, grid: &PixelGrid) -> Option<Pixel> {
            if self.points.is_empty() {
                return None;
            }

            let mut sum_r = 0u64;
            let mut sum_g = 0u64;
            let mut sum_b = 0u64;
            let count = self.points.len() as u64;

            // Points passed the bounds check in `new`; indexing panics if `grid`
            // is not the grid they were built against.
            for &point in &self.points {
                let pixel = &grid[point];
                sum_r += pixel.red as u64;
                sum_g += pixel.green as u64;
                sum_b += pixel.blue as u64;
            }

            Some(Pixel::new(
                (sum_r / count) as Channel,
                (sum_g / count) as Channel,
                (sum_b / count) as Channel,
                0,
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::neighborhood::*;
    use crate::core_modules::grid::grid::PixelGrid;
    use crate::core_modules::pixel::pixel::Pixel;

    #[test]
    fn ring_sizes_follow_position() {
        let grid = PixelGrid::filled(3, 3, Pixel::WHITE);
        assert_eq!(Neighborhood::new(&grid, (0, 0), 1).len(), 3);
        assert_eq!(Neighborhood::new(&grid, (1, 0), 1).len(), 5);
        assert_eq!(Neighborhood::new(&grid, (1, 1), 1).len(), 8);
        assert_eq!(Neighborhood::new(&grid, (2, 2), 1).len(), 3);
    }

    #[test]
    fn excludes_the_center() {
        let grid = PixelGrid::filled(3, 3, Pixel::WHITE);
        let ring = Neighborhood::new(&grid, (1, 1), 1);
        assert!(!ring.points.contains(&(1, 1)));
    }

    #[test]
    fn larger_radius_is_clipped() {
        let grid = PixelGrid::filled(4, 4, Pixel::WHITE);
        // 5x5 window at the corner keeps a 3x3 block minus the center.
        assert_eq!(Neighborhood::new(&grid, (0, 0), 2).len(), 8);
        assert_eq!(Neighborhood::new(&grid, (2, 2), 2).len(), 15);
    }

    #[test]
    fn single_pixel_grid_has_no_neighbors() {
        let grid = PixelGrid::filled(1, 1, Pixel::rgb(10, 20, 30));
        let ring = Neighborhood::new(&grid, (0, 0), 1);
        assert!(ring.is_empty());
        assert_eq!(ring.average_pixel(&grid), None);
    }

    #[test]
    fn average_truncates_each_channel() {
        // Corner of a white grid with a black center: (255 + 255 + 0) / 3 = 170.
        let mut grid = PixelGrid::filled(3, 3, Pixel::WHITE);
        grid.set(1, 1, Pixel::BLACK).expect("in bounds");
        let corner = Neighborhood::new(&grid, (0, 0), 1);
        assert_eq!(corner.average_pixel(&grid), Some(Pixel::new(170, 170, 170, 0)));

        // Edge: (4 * 255) / 5 = 204.
        let edge = Neighborhood::new(&grid, (1, 0), 1);
        assert_eq!(edge.average_pixel(&grid), Some(Pixel::new(204, 204, 204, 0)));
    }

    #[test]
    fn average_of_uniform_ring_is_that_color() {
        let color = Pixel::rgb(33, 66, 99);
        let grid = PixelGrid::filled(5, 5, color);
        let ring = Neighborhood::new(&grid, (2, 2), 1);
        assert_eq!(ring.average_pixel(&grid), Some(Pixel::new(33, 66, 99, 0)));
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn averaging_against_a_smaller_grid_panics() {
        let large = PixelGrid::filled(3, 3, Pixel::WHITE);
        let small = PixelGrid::filled(2, 2, Pixel::WHITE);
        let ring = Neighborhood::new(&large, (1, 1), 1);
        let _ = ring.average_pixel(&small);
    }

    #[test]
    fn average_uses_integer_division() {
        // Two neighbors, 1 and 2: real mean 1.5, truncated to 1.
        let mut grid = PixelGrid::filled(3, 1, Pixel::rgb(1, 1, 1));
        grid.set(1, 0, Pixel::rgb(7, 7, 7)).expect("in bounds");
        grid.set(2, 0, Pixel::rgb(2, 2, 2)).expect("in bounds");
        let ring = Neighborhood::new(&grid, (1, 0), 1);
        assert_eq!(ring.average_pixel(&grid), Some(Pixel::new(1, 1, 1, 0)));
    }
}
