//! Connected-region analysis of motion masks.
//!
//! Regions are the outer outlines of 8-connected foreground groups.
//! Holes, and anything nested inside a hole, belong to the enclosing
//! region, so a region's area is the area inside its outer boundary.
//! Background connectivity is the 4-connected dual of the foreground.

use crate::raster::BinaryMask;
use crate::stats::{Report, StatisticsRecord};

/// A single external region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Samples enclosed by the outer boundary.
    pub area: usize,
    /// Inclusive bounding box as `(min_x, min_y, max_x, max_y)`.
    pub bounds: (u32, u32, u32, u32),
}

/// Aggregate description of the regions in a mask.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegionSummary {
    /// Number of regions.
    pub count: usize,
    /// Area of the largest region.
    pub largest_area: usize,
    /// Sum of all region areas.
    pub total_area: usize,
    /// `total_area / count`, or 0 when there are no regions.
    pub average_area: usize,
}

impl Report for RegionSummary {
    fn record(&self) -> StatisticsRecord {
        StatisticsRecord::new()
            .with("Motion Areas", self.count)
            .with("Largest Area", self.largest_area)
            .with("Total Motion Area", self.total_area)
            .with("Avg Area", self.average_area)
    }
}

const NEIGHBORS_4: [(i64, i64); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
const NEIGHBORS_8: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

struct Grid {
    width: usize,
    height: usize,
}

impl Grid {
    fn step(&self, index: usize, (dx, dy): (i64, i64)) -> Option<usize> {
        let x = (index % self.width) as i64 + dx;
        let y = (index / self.width) as i64 + dy;
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    /// Marks everything reachable from `seed` through samples accepted
    /// by `passable`, returning the visited indices.
    fn flood(
        &self,
        seed: usize,
        neighbors: &[(i64, i64)],
        visited: &mut [bool],
        passable: impl Fn(usize) -> bool,
    ) -> Vec<usize> {
        let mut members = Vec::new();
        let mut stack = vec![seed];
        visited[seed] = true;

        while let Some(current) = stack.pop() {
            members.push(current);
            for &offset in neighbors {
                if let Some(next) = self.step(current, offset) {
                    if !visited[next] && passable(next) {
                        visited[next] = true;
                        stack.push(next);
                    }
                }
            }
        }
        members
    }
}

/// Finds the external regions of `mask`.
pub fn find_regions(mask: &BinaryMask) -> Vec<Region> {
    let grid = Grid {
        width: mask.width() as usize,
        height: mask.height() as usize,
    };
    let pixels = mask.image().pixels();
    if pixels.is_empty() {
        return Vec::new();
    }
    let foreground = |i: usize| pixels[i] != 0;

    // Background reachable from the border lies outside every region.
    let mut outside = vec![false; pixels.len()];
    for i in 0..pixels.len() {
        let (x, y) = (i % grid.width, i / grid.width);
        let on_border = x == 0 || y == 0 || x + 1 == grid.width || y + 1 == grid.height;
        if on_border && !foreground(i) && !outside[i] {
            grid.flood(i, &NEIGHBORS_4, &mut outside, |j| !foreground(j));
        }
    }

    // Whatever is not outside groups into filled regions.
    let mut visited = outside.clone();
    let mut regions = Vec::new();
    for i in 0..pixels.len() {
        if visited[i] {
            continue;
        }
        let members = grid.flood(i, &NEIGHBORS_8, &mut visited, |j| !outside[j]);

        let mut bounds = (u32::MAX, u32::MAX, 0, 0);
        for &m in &members {
            let (x, y) = ((m % grid.width) as u32, (m / grid.width) as u32);
            bounds.0 = bounds.0.min(x);
            bounds.1 = bounds.1.min(y);
            bounds.2 = bounds.2.max(x);
            bounds.3 = bounds.3.max(y);
        }
        regions.push(Region {
            area: members.len(),
            bounds,
        });
    }

    regions
}

/// Summarizes the external regions of `mask`.
///
/// A mask without foreground yields an all-zero summary.
pub fn region_summary(mask: &BinaryMask) -> RegionSummary {
    let regions = find_regions(mask);
    if regions.is_empty() {
        return RegionSummary::default();
    }

    let total_area: usize = regions.iter().map(|r| r.area).sum();
    let largest_area = regions.iter().map(|r| r.area).max().unwrap_or(0);

    RegionSummary {
        count: regions.len(),
        largest_area,
        total_area,
        average_area: total_area / regions.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::Image;

    fn mask_from(width: u32, height: u32, on: impl Fn(u32, u32) -> bool) -> BinaryMask {
        let image = Image::from_fn(width, height, |x, y| if on(x, y) { 255 } else { 0 });
        BinaryMask::from_image(image, 30).unwrap()
    }

    #[test]
    fn test_empty_mask_summary_is_zero() {
        let summary = region_summary(&mask_from(10, 10, |_, _| false));
        assert_eq!(summary, RegionSummary::default());
    }

    #[test]
    fn test_two_separate_blocks() {
        let mask = mask_from(20, 10, |x, y| {
            (1..4).contains(&y) && ((1..4).contains(&x) || (10..15).contains(&x))
        });
        let summary = region_summary(&mask);

        assert_eq!(summary.count, 2);
        assert_eq!(summary.largest_area, 15);
        assert_eq!(summary.total_area, 24);
        assert_eq!(summary.average_area, 12);
    }

    #[test]
    fn test_diagonal_neighbors_join() {
        let mask = mask_from(4, 4, |x, y| x == y);
        assert_eq!(region_summary(&mask).count, 1);
    }

    #[test]
    fn test_hole_and_nested_speck_belong_to_outer_region() {
        // 7x7 ring with a single foreground sample in the middle of its hole.
        let mask = mask_from(11, 11, |x, y| {
            let ring = (2..=8).contains(&x)
                && (2..=8).contains(&y)
                && (x == 2 || x == 8 || y == 2 || y == 8);
            ring || (x == 5 && y == 5)
        });
        let regions = find_regions(&mask);

        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].area, 49);
        assert_eq!(regions[0].bounds, (2, 2, 8, 8));
    }

    #[test]
    fn test_full_mask_is_one_region() {
        let summary = region_summary(&mask_from(6, 3, |_, _| true));
        assert_eq!(summary.count, 1);
        assert_eq!(summary.largest_area, 18);
    }
}
