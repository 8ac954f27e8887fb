use ratatui::style::Color;

/// Color palette for the reader surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub anchor: Color,
    pub dimmed: Color,
    pub accent: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::daylight()
    }
}

impl Theme {
    /// Dark palette
    pub fn midnight() -> Self {
        Self {
            background: Color::Rgb(26, 27, 38), // #1A1B26 Stormy Dark
            surface: Color::Rgb(36, 40, 59),    // #24283B
            text: Color::Rgb(169, 177, 214),    // #A9B1D6 Light Blue
            anchor: Color::Rgb(247, 118, 142),  // #F7768E Coral Red
            dimmed: Color::Rgb(100, 110, 150),  // #646E96 Dimmed Blue
            accent: Color::Rgb(122, 162, 247),  // #7AA2F7
            error: Color::Rgb(255, 117, 127),   // #FF757F
        }
    }

    /// Light palette
    pub fn daylight() -> Self {
        Self {
            background: Color::Rgb(243, 244, 246), // #F3F4F6
            surface: Color::Rgb(255, 255, 255),    // #FFFFFF
            text: Color::Rgb(17, 24, 39),          // #111827
            anchor: Color::Rgb(239, 68, 68),       // #EF4444
            dimmed: Color::Rgb(156, 163, 175),     // #9CA3AF
            accent: Color::Rgb(37, 99, 235),       // #2563EB
            error: Color::Rgb(220, 38, 38),        // #DC2626
        }
    }

    pub fn for_dark_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::midnight()
        } else {
            Self::daylight()
        }
    }
}
