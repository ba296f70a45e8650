// Focus ring for keyboard-reachable tree labels

pub const FOCUS_RING_WIDTH: u32 = 2;
pub const FOCUS_RING_OFFSET: u32 = 2;
pub const FOCUS_RING_COLOR_PRIMARY: &str = "oklch(70% 0.15 250)";

/// CSS `outline` shorthand for the primary focus ring.
pub fn focus_ring_outline() -> String {
    format!("{}px solid {}", FOCUS_RING_WIDTH, FOCUS_RING_COLOR_PRIMARY)
}
