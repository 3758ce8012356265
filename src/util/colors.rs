use ratatui::style::Color;

pub const PRIMARY: Color = Color::from_u32(0x00fa5c7c);
pub const SECONDARY: Color = Color::from_u32(0x00b83b5e);
pub const NEUTRAL: Color = Color::from_u32(0x00505050);
pub const BACKGROUND: Color = Color::from_u32(0x00101014);
pub const TEXT: Color = Color::from_u32(0x00e6e6e6);
pub const ERROR: Color = Color::from_u32(0x00ff6b6b);
