//! Inline-style output for a floating surface.
//!
//! Geometry stays in `f32`; values are rounded to whole pixels only here,
//! when they leave for the DOM.

use floatpane_core::SurfaceGeometry;
use serde::Serialize;

/// The layout properties a surface controller owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SurfaceStyle {
    /// CSS `left`
    pub left: String,
    /// CSS `top`
    pub top: String,
    /// CSS `width`
    pub width: String,
    /// CSS `height`
    pub height: String,
}

impl SurfaceStyle {
    /// Style for `geometry`, or a full-screen style on small screens.
    #[must_use]
    pub fn from_geometry(geometry: &SurfaceGeometry, small_screen: bool) -> Self {
        if small_screen {
            return Self::full_screen();
        }

        Self {
            left: px(geometry.position.x),
            top: px(geometry.position.y),
            width: px(geometry.size.width),
            height: px(geometry.size.height),
        }
    }

    /// Style that fills the viewport.
    #[must_use]
    pub fn full_screen() -> Self {
        Self {
            left: "0px".to_string(),
            top: "0px".to_string(),
            width: "100%".to_string(),
            height: "100%".to_string(),
        }
    }

    /// Property/value pairs in application order.
    #[must_use]
    pub fn declarations(&self) -> [(&'static str, &str); 4] {
        [
            ("left", self.left.as_str()),
            ("top", self.top.as_str()),
            ("width", self.width.as_str()),
            ("height", self.height.as_str()),
        ]
    }

    /// Declarations joined into a `style` attribute value.
    #[must_use]
    pub fn to_css(&self) -> String {
        self.declarations()
            .iter()
            .map(|(property, value)| format!("{property}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn px(value: f32) -> String {
    format!("{}px", value.round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use floatpane_core::{Point, Size};

    #[test]
    fn test_desktop_style() {
        let g = SurfaceGeometry::new(Point::new(660.0, 340.0), Size::new(600.0, 400.0));
        let style = SurfaceStyle::from_geometry(&g, false);
        assert_eq!(
            style.to_css(),
            "left: 660px; top: 340px; width: 600px; height: 400px;"
        );
    }

    #[test]
    fn test_rounds_for_output_only() {
        let g = SurfaceGeometry::new(Point::new(10.4, 10.6), Size::new(400.5, 299.49));
        let style = SurfaceStyle::from_geometry(&g, false);
        assert_eq!(style.left, "10px");
        assert_eq!(style.top, "11px");
        assert_eq!(style.width, "401px");
        assert_eq!(style.height, "299px");
        assert_eq!(g.position.x, 10.4);
    }

    #[test]
    fn test_small_screen_is_full_screen() {
        let g = SurfaceGeometry::new(Point::new(660.0, 340.0), Size::new(600.0, 400.0));
        assert_eq!(
            SurfaceStyle::from_geometry(&g, true),
            SurfaceStyle::full_screen()
        );
        assert_eq!(
            SurfaceStyle::full_screen().to_css(),
            "left: 0px; top: 0px; width: 100%; height: 100%;"
        );
    }

    #[test]
    fn test_declaration_order() {
        let names: Vec<_> = SurfaceStyle::full_screen()
            .declarations()
            .iter()
            .map(|(name, _)| *name)
            .collect();
        assert_eq!(names, vec!["left", "top", "width", "height"]);
    }

    #[cfg(not(target_arch = "wasm32"))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_style_values_are_pixels(
                x in 0.0f32..4000.0, y in 0.0f32..4000.0,
                w in 1.0f32..4000.0, h in 1.0f32..4000.0,
            ) {
                let g = SurfaceGeometry::new(Point::new(x, y), Size::new(w, h));
                let style = SurfaceStyle::from_geometry(&g, false);
                for (_, value) in style.declarations() {
                    prop_assert!(value.ends_with("px"));
                    prop_assert!(value.trim_end_matches("px").parse::<i64>().is_ok());
                }
            }
        }
    }
}
