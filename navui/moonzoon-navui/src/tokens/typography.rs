// Typography Token System

pub const FONT_FAMILY_SANS: &str = "'Inter', 'system-ui', 'Segoe UI', 'Arial', sans-serif";

pub const FONT_SIZE_14: u32 = 14;

pub const FONT_WEIGHT_4: u32 = 400; // Normal
pub const FONT_WEIGHT_6: u32 = 600; // Semibold
