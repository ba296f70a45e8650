// Spacing Token System

/// 2px spacing
pub const SPACING_2: u32 = 2;

/// 4px spacing
pub const SPACING_4: u32 = 4;

/// 8px spacing
pub const SPACING_8: u32 = 8;

/// 12px spacing, also the per-level tree indent
pub const SPACING_12: u32 = 12;
