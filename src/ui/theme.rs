use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x00, 0xa8, 0x6b);
pub const ACCENT_SOFT: Color = Color::Rgb(0x26, 0xa6, 0x9a);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const STATUS_OK: Color = Color::Rgb(0x66, 0xbb, 0x6a);
pub const STATUS_ERROR: Color = Color::Rgb(0xf4, 0x43, 0x36);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
