use ratatui::style::Color;

pub const PRIMARY: Color = Color::from_u32(0x005fd7af);
pub const NEUTRAL: Color = Color::from_u32(0x005c5c66);
pub const BACKGROUND: Color = Color::from_u32(0x00101014);
pub const ACCENT: Color = Color::from_u32(0x00e0af68);
