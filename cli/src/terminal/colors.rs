use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::BrightYellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const IPV4_ADDR: Color = Color::BrightCyan;
pub const IPV6_ADDR: Color = Color::BrightMagenta;
pub const BINARY: Color = Color::Cyan;

pub const PRIVATE: Color = Color::Yellow;
pub const PUBLIC: Color = Color::Green;
pub const SPECIAL: Color = Color::BrightBlue;
pub const FAILURE: Color = Color::Red;
