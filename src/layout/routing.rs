use super::Point;

/// Four-point path from a left-column neighbor into the focal vertex. The
/// first bend keeps the neighbor's row, the second already sits on the focal
/// row.
pub(super) fn incoming_route(neighbor: Point, focal: Point, segment_dx: f32) -> [Point; 4] {
    [
        neighbor,
        Point::new(neighbor.x + segment_dx, neighbor.y),
        Point::new(neighbor.x + 2.0 * segment_dx, focal.y),
        focal,
    ]
}

/// Mirror of [`incoming_route`]: from the focal vertex out to a right-column
/// neighbor.
pub(super) fn outgoing_route(focal: Point, neighbor: Point, segment_dx: f32) -> [Point; 4] {
    [
        focal,
        Point::new(focal.x + segment_dx, focal.y),
        Point::new(focal.x + 2.0 * segment_dx, neighbor.y),
        neighbor,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incoming_bends_at_thirds() {
        let route = incoming_route(Point::new(10.0, 75.0), Point::new(100.0, 15.0), 30.0);
        assert_eq!(
            route,
            [
                Point::new(10.0, 75.0),
                Point::new(40.0, 75.0),
                Point::new(70.0, 15.0),
                Point::new(100.0, 15.0),
            ]
        );
    }

    #[test]
    fn outgoing_bends_at_thirds() {
        let route = outgoing_route(Point::new(100.0, 15.0), Point::new(160.0, 75.0), 20.0);
        assert_eq!(
            route,
            [
                Point::new(100.0, 15.0),
                Point::new(120.0, 15.0),
                Point::new(140.0, 75.0),
                Point::new(160.0, 75.0),
            ]
        );
    }
}
