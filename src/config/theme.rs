use ratatui::style::Color;

/// Represents all semantic color roles in the application
#[derive(Debug, Clone)]
pub struct Theme {
    // Log view
    pub commit_hash: Color,
    pub subject: Color,
    pub author: Color,
    pub date: Color,
    pub local_branch: Color,
    pub remote_branch: Color,
    pub tag_label: Color,
    pub head_label: Color,
    /// Cycled through by lane index when drawing the graph column
    pub lane_palette: Vec<Color>,

    // Diff view
    pub diff_addition: Color,
    pub diff_deletion: Color,
    pub diff_context: Color,
    pub diff_hunk: Color,
    pub file_path: Color,

    // Misc
    pub text: Color,
    pub selection_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    /// The default theme built from the basic terminal colors
    pub fn default_theme() -> Self {
        Self {
            commit_hash: Color::Yellow,
            subject: Color::Reset,
            author: Color::DarkGray,
            date: Color::DarkGray,
            local_branch: Color::Blue,
            remote_branch: Color::Green,
            tag_label: Color::Yellow,
            head_label: Color::Cyan,
            lane_palette: vec![
                Color::Cyan,
                Color::Magenta,
                Color::Green,
                Color::Yellow,
                Color::Blue,
                Color::Red,
            ],
            diff_addition: Color::Green,
            diff_deletion: Color::Red,
            diff_context: Color::White,
            diff_hunk: Color::Cyan,
            file_path: Color::White,
            text: Color::Reset,
            selection_bg: Color::Rgb(60, 60, 80),
        }
    }

    /// Catppuccin Frappe theme
    pub fn catppuccin_frappe() -> Self {
        Self {
            commit_hash: Color::Rgb(229, 200, 144),
            subject: Color::Rgb(198, 208, 245),
            author: Color::Rgb(165, 173, 206),
            date: Color::Rgb(165, 173, 206),
            local_branch: Color::Rgb(140, 170, 238),
            remote_branch: Color::Rgb(166, 209, 137),
            tag_label: Color::Rgb(229, 200, 144),
            head_label: Color::Rgb(153, 209, 219),
            lane_palette: vec![
                Color::Rgb(153, 209, 219),
                Color::Rgb(244, 184, 228),
                Color::Rgb(166, 209, 137),
                Color::Rgb(229, 200, 144),
                Color::Rgb(140, 170, 238),
                Color::Rgb(231, 130, 132),
            ],
            diff_addition: Color::Rgb(166, 209, 137),
            diff_deletion: Color::Rgb(231, 130, 132),
            diff_context: Color::Rgb(198, 208, 245),
            diff_hunk: Color::Rgb(140, 170, 238),
            file_path: Color::Rgb(198, 208, 245),
            text: Color::Rgb(198, 208, 245),
            selection_bg: Color::Rgb(65, 69, 89),
        }
    }

    /// Look up a built-in theme by its config name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "default" => Some(Self::default_theme()),
            "catppuccin-frappe" => Some(Self::catppuccin_frappe()),
            _ => None,
        }
    }

    /// Color for a lane, wrapping around when the history is wider than
    /// the palette
    pub fn lane_color(&self, lane: usize) -> Color {
        if self.lane_palette.is_empty() {
            return self.text;
        }
        self.lane_palette[lane % self.lane_palette.len()]
    }
}
