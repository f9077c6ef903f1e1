use ratatui::style::Color;

/// Fixed color palette for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub dim: Color,
    pub highlight: Color,
    pub selection_bg: Color,
    pub border: Color,
    pub green: Color,
    pub red: Color,
    pub yellow: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x10, 0x14, 0x1C),
            text: Color::Rgb(0xC8, 0xD0, 0xE0),
            dim: Color::Rgb(0x60, 0x6A, 0x80),
            highlight: Color::Rgb(0x5F, 0xB0, 0xFF),
            selection_bg: Color::Rgb(0x23, 0x2C, 0x40),
            border: Color::Rgb(0x3A, 0x46, 0x60),
            green: Color::Rgb(0x68, 0xD0, 0x88),
            red: Color::Rgb(0xE8, 0x60, 0x60),
            yellow: Color::Rgb(0xE8, 0xC8, 0x60),
        }
    }
}
