use colored::Color;

pub const CYAN: Color = Color::TrueColor { r: 0x00, g: 0xff, b: 0xff };
pub const MAGENTA: Color = Color::TrueColor { r: 0xff, g: 0x00, b: 0xff };
pub const GREEN: Color = Color::TrueColor { r: 0x00, g: 0xff, b: 0x41 };
pub const ORANGE: Color = Color::TrueColor { r: 0xff, g: 0x8c, b: 0x00 };
pub const RED: Color = Color::TrueColor { r: 0xff, g: 0x00, b: 0x40 };
pub const YELLOW: Color = Color::TrueColor { r: 0xff, g: 0xff, b: 0x00 };
pub const HOT_PINK: Color = Color::TrueColor { r: 0xff, g: 0x14, b: 0x93 };
pub const DIM: Color = Color::TrueColor { r: 0x44, g: 0x44, b: 0x44 };
pub const MUTED: Color = Color::TrueColor { r: 0x88, g: 0x88, b: 0x88 };

pub const PRIMARY: Color = CYAN;
pub const ACCENT: Color = HOT_PINK;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const MAC_ADDR: Color = MUTED;
