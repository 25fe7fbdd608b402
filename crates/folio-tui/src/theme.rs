use ratatui::style::Color;

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub fg1: Color,
    pub grey0: Color,
    pub grey1: Color,

    // Semantic colors
    pub frame: Color,
    pub indicator: Color,
    pub error: Color,
    pub success: Color,
    pub warning: Color,
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        crate::themes::gruvbox_dark()
    }
}

impl Theme {
    /// Color of `color` at the given brightness and opacity over the background.
    ///
    /// Terminals have no alpha channel, so both are emulated by mixing the
    /// color towards `bg0`.
    pub fn fade(&self, color: Color, brightness: f64, opacity: f64) -> Color {
        let amount = (brightness * opacity).clamp(0.0, 1.0);
        blend(self.bg0, color, amount)
    }
}

/// Linear mix from `from` to `to`; non-RGB colors snap at the halfway point
pub fn blend(from: Color, to: Color, amount: f64) -> Color {
    match (from, to) {
        (Color::Rgb(r0, g0, b0), Color::Rgb(r1, g1, b1)) => {
            let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * amount).round() as u8;
            Color::Rgb(mix(r0, r1), mix(g0, g1), mix(b0, b1))
        }
        _ if amount >= 0.5 => to,
        _ => from,
    }
}
