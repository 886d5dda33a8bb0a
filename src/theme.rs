//! Color palettes and the pure style helpers pages render with. Hover
//! and focus visuals are computed from component-local state passed in
//! as plain arguments; nothing in here reads or mutates the DOM.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub background: &'static str,
    pub text: &'static str,
    pub muted_text: &'static str,
    pub card_bg: &'static str,
    pub nav_btn_bg: &'static str,
    pub input_bg: &'static str,
    pub input_border: &'static str,
}

pub const LIGHT: Palette = Palette {
    primary: "#2563eb",
    secondary: "#1d4ed8",
    accent: "#7209b7",
    background: "linear-gradient(135deg, #f8fafc 0%, #e2e8f0 100%)",
    text: "#1e293b",
    muted_text: "#475569",
    card_bg: "rgba(255, 255, 255, 0.9)",
    nav_btn_bg: "rgba(255, 255, 255, 0.8)",
    input_bg: "#ffffff",
    input_border: "rgba(0, 0, 0, 0.1)",
};

pub const DARK: Palette = Palette {
    primary: "#60a5fa",
    secondary: "#3b82f6",
    accent: "#4361ee",
    background: "linear-gradient(135deg, #0f172a 0%, #1e293b 100%)",
    text: "#f8fafc",
    muted_text: "#94a3b8",
    card_bg: "rgba(15, 23, 42, 0.8)",
    nav_btn_bg: "rgba(30, 41, 59, 0.8)",
    input_bg: "#2d2d2d",
    input_border: "rgba(255, 255, 255, 0.1)",
};

pub fn palette(dark: bool) -> &'static Palette {
    if dark {
        &DARK
    } else {
        &LIGHT
    }
}

/// Login button visuals for the rest and hovered states.
pub fn login_button_style(hovered: bool) -> String {
    let (background, shadow, transform, animation) = if hovered {
        (
            "#5a67d8",
            "0 0 15px #7f56d9aa",
            "scale(1.05)",
            "pulse 1s infinite",
        )
    } else {
        (
            "#7f56d9",
            "0 0 8px #7f56d955",
            "scale(1)",
            "none",
        )
    };
    format!(
        "width: 100%; padding: 12px; background-color: {background}; color: #fff; \
         border: none; border-radius: 8px; font-size: 16px; font-weight: bold; \
         cursor: pointer; box-shadow: {shadow}; transform: {transform}; \
         transition: all 0.3s ease; animation: {animation};"
    )
}

/// Splash CTA visuals; inverts on hover.
pub fn splash_button_style(hovered: bool) -> String {
    let (background, color, shadow, transform) = if hovered {
        (
            "#1f1f1f",
            "#fff",
            "0 8px 20px rgba(255, 255, 255, 0.2)",
            "scale(1.06)",
        )
    } else {
        (
            "#fff",
            "#1f1f1f",
            "0 6px 18px rgba(0, 0, 0, 0.2)",
            "scale(1)",
        )
    };
    format!(
        "padding: 16px 40px; background-color: {background}; color: {color}; \
         border: none; border-radius: 60px; font-size: 18px; font-weight: 600; \
         cursor: pointer; transition: all 0.3s ease-in-out; box-shadow: {shadow}; \
         transform: {transform};"
    )
}

/// One stacked background layer of the splash slideshow. Only the active
/// layer is visible; the opacity transition does the cross-fade.
pub fn slide_layer_style(url: &str, active: bool) -> String {
    format!(
        "position: absolute; top: 0; left: 0; height: 100%; width: 100%; z-index: 0; \
         background-size: cover; background-position: center; \
         transition: opacity 1.5s ease-in-out; background-image: url('{url}'); \
         opacity: {};",
        if active { 1 } else { 0 }
    )
}

/// A floating blurred bubble on the login background.
pub fn bubble_style(top: &str, left: &str, size: &str, delay: &str) -> String {
    format!(
        "position: absolute; top: {top}; left: {left}; width: {size}; height: {size}; \
         background-color: #ffffff22; border-radius: 50%; filter: blur(30px); \
         animation: floatBubble 12s ease-in-out infinite; animation-delay: {delay}; \
         z-index: -2;"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_selection_matches_mode() {
        assert_eq!(palette(false), &LIGHT);
        assert_eq!(palette(true), &DARK);
    }

    #[test]
    fn hovered_button_differs_from_rest_state() {
        let rest = login_button_style(false);
        let hovered = login_button_style(true);
        assert_ne!(rest, hovered);
        assert!(rest.contains("#7f56d9"));
        assert!(hovered.contains("#5a67d8"));
        assert!(hovered.contains("scale(1.05)"));
    }

    #[test]
    fn only_the_active_slide_layer_is_visible() {
        let shown = slide_layer_style("https://example.com/a.jpg", true);
        let hidden = slide_layer_style("https://example.com/a.jpg", false);
        assert!(shown.ends_with("opacity: 1;"));
        assert!(hidden.ends_with("opacity: 0;"));
        assert!(shown.contains("url('https://example.com/a.jpg')"));
    }
}
