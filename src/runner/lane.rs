//! Lane index to screen position.

/// Centre X of `lane`, clamped into `[0, lane_count - 1]` first.
///
/// Takes a signed index so callers can pass raw arithmetic results without
/// pre-checking them.
pub fn lane_to_x(lane: i64, lane_count: u32, lane_width: f64) -> f64 {
    let last = lane_count.saturating_sub(1) as i64;
    let lane = lane.clamp(0, last);
    lane as f64 * lane_width + lane_width / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_centres() {
        assert!((lane_to_x(0, 5, 160.0) - 80.0).abs() < f64::EPSILON);
        assert!((lane_to_x(2, 5, 160.0) - 400.0).abs() < f64::EPSILON);
        assert!((lane_to_x(4, 5, 160.0) - 720.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_below_range_clamps_to_first_lane() {
        assert!((lane_to_x(-3, 5, 160.0) - lane_to_x(0, 5, 160.0)).abs() < f64::EPSILON);
        assert!((lane_to_x(-3, 5, 160.0) - 80.0).abs() < f64::EPSILON);
        assert!((lane_to_x(i64::MIN, 5, 160.0) - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_above_range_clamps_to_last_lane() {
        assert!((lane_to_x(5, 5, 160.0) - 720.0).abs() < f64::EPSILON);
        assert!((lane_to_x(99, 5, 160.0) - 720.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_lanes_still_returns_a_value() {
        assert!((lane_to_x(3, 0, 100.0) - 50.0).abs() < f64::EPSILON);
    }
}
