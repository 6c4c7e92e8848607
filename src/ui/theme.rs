use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub price: Color,
    pub id: Color,
    pub low_stock: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub heading: Color,
    pub key: Color, // Menu hotkeys
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    price: Color::Rgb(250, 179, 135),          // Orange for prices
    id: Color::Rgb(148, 226, 213),             // Cyan/teal for ids
    low_stock: Color::Rgb(243, 139, 168),      // Red when stock runs out
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for status bar
    heading: Color::Rgb(249, 226, 175),        // Yellow for table headers
    key: Color::Rgb(245, 194, 231),            // Pink for hotkeys
};
