//! Local topology predicates over 3x3x3 occupancy windows.
//!
//! A window is a `[bool; 27]` snapshot of a voxel's 26-neighborhood plus
//! the voxel itself, indexed X-fastest: `i = (dz+1)*9 + (dy+1)*3 + (dx+1)`.
//! Out-of-grid cells read as background.

/// Index of the center voxel.
pub(crate) const CENTER: usize = 13;

/// Window indices of the six face neighbors.
const FACES: [usize; 6] = [4, 10, 12, 14, 16, 22];

/// Offset of a window index from the center.
#[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
const fn delta(i: usize) -> (i32, i32, i32) {
    (
        (i % 3) as i32 - 1,
        ((i / 3) % 3) as i32 - 1,
        (i / 9) as i32 - 1,
    )
}

/// True when two window cells touch by face, edge or corner.
fn chebyshev_adjacent(i: usize, j: usize) -> bool {
    let (ax, ay, az) = delta(i);
    let (bx, by, bz) = delta(j);
    let dx = (ax - bx).abs();
    let dy = (ay - by).abs();
    let dz = (az - bz).abs();
    dx.max(dy).max(dz) == 1
}

/// True when two window cells share a face.
fn face_adjacent(i: usize, j: usize) -> bool {
    let (ax, ay, az) = delta(i);
    let (bx, by, bz) = delta(j);
    (ax - bx).abs() + (ay - by).abs() + (az - bz).abs() == 1
}

/// True when the cell belongs to the 18-neighborhood (faces + edges).
fn in_n18(i: usize) -> bool {
    let (x, y, z) = delta(i);
    let manhattan = x.abs() + y.abs() + z.abs();
    manhattan == 1 || manhattan == 2
}

/// Number of occupied cells in the 26-neighborhood.
pub(crate) fn foreground_neighbors(window: &[bool; 27]) -> usize {
    (0..27).filter(|&i| i != CENTER && window[i]).count()
}

/// True when at least one face neighbor is background.
pub(crate) fn is_border(window: &[bool; 27]) -> bool {
    FACES.iter().any(|&i| !window[i])
}

/// True when removing the center preserves local topology.
///
/// The center is simple iff its 26-neighborhood holds exactly one
/// 26-connected foreground component and exactly one 6-connected
/// background component within the 18-neighborhood that touches a face
/// neighbor. Removing a simple point neither splits nor merges foreground
/// or background.
pub(crate) fn is_simple_point(window: &[bool; 27]) -> bool {
    foreground_components_26(window) == 1 && background_components_6(window) == 1
}

/// 26-connected components of the foreground within the 26-neighborhood.
fn foreground_components_26(window: &[bool; 27]) -> usize {
    let mut visited = [false; 27];
    let mut components = 0;

    for start in 0..27 {
        if start == CENTER || !window[start] || visited[start] {
            continue;
        }
        components += 1;
        let mut stack = [0usize; 27];
        let mut top = 0;
        stack[top] = start;
        top += 1;
        visited[start] = true;

        while top > 0 {
            top -= 1;
            let i = stack[top];
            for j in 0..27 {
                if j == CENTER || !window[j] || visited[j] || !chebyshev_adjacent(i, j) {
                    continue;
                }
                visited[j] = true;
                stack[top] = j;
                top += 1;
            }
        }
    }
    components
}

/// 6-connected background components within the 18-neighborhood that
/// contain a face neighbor. Seeding from the faces skips components the
/// center cannot reach.
fn background_components_6(window: &[bool; 27]) -> usize {
    let mut visited = [false; 27];
    let mut components = 0;

    for &start in &FACES {
        if window[start] || visited[start] {
            continue;
        }
        components += 1;
        let mut stack = [0usize; 27];
        let mut top = 0;
        stack[top] = start;
        top += 1;
        visited[start] = true;

        while top > 0 {
            top -= 1;
            let i = stack[top];
            for j in 0..27 {
                if !in_n18(j) || window[j] || visited[j] || !face_adjacent(i, j) {
                    continue;
                }
                visited[j] = true;
                stack[top] = j;
                top += 1;
            }
        }
    }
    components
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Occupied center plus occupied cells at the given offsets.
    fn window_of(fg: &[(i32, i32, i32)]) -> [bool; 27] {
        let mut window = [false; 27];
        window[CENTER] = true;
        for &(x, y, z) in fg {
            window[((z + 1) * 9 + (y + 1) * 3 + (x + 1)) as usize] = true;
        }
        window
    }

    #[test]
    fn block_corner_is_simple() {
        // Center is the corner of a 2x2x2 solid block.
        let window = window_of(&[
            (1, 0, 0),
            (0, 1, 0),
            (0, 0, 1),
            (1, 1, 0),
            (1, 0, 1),
            (0, 1, 1),
            (1, 1, 1),
        ]);
        assert!(is_border(&window));
        assert_eq!(foreground_neighbors(&window), 7);
        assert!(is_simple_point(&window));
    }

    #[test]
    fn curve_interior_is_not_simple() {
        // Two opposite face neighbors: removing the center splits them.
        let window = window_of(&[(-1, 0, 0), (1, 0, 0)]);
        assert_eq!(foreground_neighbors(&window), 2);
        assert!(!is_simple_point(&window));
    }

    #[test]
    fn sheet_interior_is_not_simple() {
        // Full in-plane ring: background above and below cannot merge.
        let window = window_of(&[
            (-1, -1, 0),
            (0, -1, 0),
            (1, -1, 0),
            (-1, 0, 0),
            (1, 0, 0),
            (-1, 1, 0),
            (0, 1, 0),
            (1, 1, 0),
        ]);
        assert!(is_border(&window));
        assert!(!is_simple_point(&window));
    }

    #[test]
    fn diagonal_tip_is_simple_but_an_endpoint() {
        // One diagonal neighbor: topologically removable, but the peel
        // keeps it through the endpoint rule.
        let window = window_of(&[(1, 1, 0)]);
        assert!(is_simple_point(&window));
        assert_eq!(foreground_neighbors(&window), 1);
    }

    #[test]
    fn isolated_voxel_is_not_simple() {
        let window = window_of(&[]);
        assert_eq!(foreground_neighbors(&window), 0);
        assert!(!is_simple_point(&window));
    }

    #[test]
    fn buried_voxel_is_not_border() {
        let window = [true; 27];
        assert!(!is_border(&window));
        assert!(!is_simple_point(&window));
    }
}
