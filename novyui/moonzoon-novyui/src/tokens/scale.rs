// Size scales: spacing, corner radius, type and opacity

pub const SPACING_2: u32 = 2;
pub const SPACING_4: u32 = 4;
pub const SPACING_6: u32 = 6;
pub const SPACING_8: u32 = 8;
pub const SPACING_12: u32 = 12;
pub const SPACING_16: u32 = 16;
pub const SPACING_20: u32 = 20;
pub const SPACING_24: u32 = 24;
pub const SPACING_32: u32 = 32;

pub const CORNER_RADIUS_4: u32 = 4;     // Inputs, buttons
pub const CORNER_RADIUS_6: u32 = 6;     // Toasts
pub const CORNER_RADIUS_8: u32 = 8;     // Cards, modals, popovers

pub const FONT_SIZE_12: u32 = 12;
pub const FONT_SIZE_14: u32 = 14;
pub const FONT_SIZE_16: u32 = 16;
pub const FONT_SIZE_18: u32 = 18;
pub const FONT_SIZE_20: u32 = 20;

pub const FONT_WEIGHT_5: u32 = 500;
pub const FONT_WEIGHT_6: u32 = 600;

pub const FONT_FAMILY_MONO: &str = "'FiraCode', 'Menlo', 'Monaco', 'Consolas', monospace";

pub const OPACITY_DISABLED: &str = "0.64";
pub const OPACITY_ENABLED: &str = "1";

pub const Z_INDEX_POPOVER: &str = "900";
pub const Z_INDEX_MODAL: &str = "1000";
pub const Z_INDEX_TOAST: &str = "1100";
