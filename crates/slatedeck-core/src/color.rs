//! Color values and the pointer-driven color picker.

use crate::geometry::ContainerFrame;
use kurbo::Point;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An RGBA color value.
///
/// Serializes as a hex string (`#rrggbb`, or `#rrggbbaa` when not fully
/// opaque), the wire format shared by text styles, patches, and the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Create an opaque color.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color with an explicit alpha.
    pub fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0)
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255)
    }

    /// Format as a lowercase hex string. Alpha is included only when the
    /// color is not fully opaque.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// Parse a hex color string.
    ///
    /// Accepts `#rgb`, `#rrggbb`, and `#rrggbbaa`, case-insensitive, with an
    /// optional leading `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().strip_prefix('#').unwrap_or(hex.trim());
        match hex.len() {
            3 => {
                let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
                let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
                let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
                Some(Self::new(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::new(r, g, b))
            }
            8 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                let a = u8::from_str_radix(&hex[6..8], 16).ok()?;
                Some(Self::with_alpha(r, g, b, a))
            }
            _ => None,
        }
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid hex color: {hex}")))
    }
}

/// A color in HSV space: hue in degrees `[0, 360)`, saturation and value in
/// `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    /// Create an HSV triple, normalizing hue and clamping saturation/value.
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self {
            h: h.rem_euclid(360.0),
            s: s.clamp(0.0, 1.0),
            v: v.clamp(0.0, 1.0),
        }
    }

    /// Convert to RGB via the standard sextant formula.
    pub fn to_rgb(self) -> Rgba {
        let c = self.v * self.s;
        let h_prime = self.h / 60.0;
        let x = c * (1.0 - (h_prime.rem_euclid(2.0) - 1.0).abs());
        let m = self.v - c;

        let (r1, g1, b1) = match h_prime as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Rgba::new(
            ((r1 + m) * 255.0).round() as u8,
            ((g1 + m) * 255.0).round() as u8,
            ((b1 + m) * 255.0).round() as u8,
        )
    }
}

/// The two pointer surfaces of the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerSurface {
    /// 2-D saturation/value panel.
    Panel,
    /// 1-D horizontal hue bar.
    HueBar,
}

/// Pointer-driven color picker.
///
/// A press on either surface holds that surface until release, so moves keep
/// mapping (clamped) even when the pointer leaves the surface bounds. Same
/// session discipline as the drag engine, mutating a color instead of a
/// transform.
#[derive(Debug, Clone)]
pub struct ColorPicker {
    panel: ContainerFrame,
    hue_bar: ContainerFrame,
    hsv: Hsv,
    held: Option<PickerSurface>,
}

impl ColorPicker {
    /// Create a picker over the given screen-space surfaces.
    pub fn new(panel: ContainerFrame, hue_bar: ContainerFrame) -> Self {
        Self {
            panel,
            hue_bar,
            hsv: Hsv::new(0.0, 1.0, 1.0),
            held: None,
        }
    }

    /// The current HSV triple.
    pub fn hsv(&self) -> Hsv {
        self.hsv
    }

    /// The current color as RGB.
    pub fn color(&self) -> Rgba {
        self.hsv.to_rgb()
    }

    /// The current color as a hex string.
    pub fn hex(&self) -> String {
        self.color().to_hex()
    }

    /// Seed the picker from an existing color state.
    pub fn set_hsv(&mut self, hsv: Hsv) {
        self.hsv = hsv;
    }

    /// Whether a press is currently held.
    pub fn is_held(&self) -> bool {
        self.held.is_some()
    }

    /// Begin a press. Returns the surface that was hit, if any; a press
    /// outside both surfaces does nothing.
    pub fn press(&mut self, screen: Point) -> Option<PickerSurface> {
        if self.held.is_some() {
            log::debug!("color picker press ignored: press already held");
            return None;
        }
        let surface = if self.panel.contains(screen) {
            PickerSurface::Panel
        } else if self.hue_bar.contains(screen) {
            PickerSurface::HueBar
        } else {
            return None;
        };
        self.held = Some(surface);
        self.apply(surface, screen);
        Some(surface)
    }

    /// Continue a held press at a new pointer position.
    pub fn pointer_moved(&mut self, screen: Point) {
        if let Some(surface) = self.held {
            self.apply(surface, screen);
        }
    }

    /// End the held press.
    pub fn release(&mut self) {
        self.held = None;
    }

    fn apply(&mut self, surface: PickerSurface, screen: Point) {
        match surface {
            PickerSurface::Panel => {
                let (fx, fy) = self.panel.to_fraction(screen);
                // Left edge is grey, top edge is full value.
                self.hsv.s = fx;
                self.hsv.v = 1.0 - fy;
            }
            PickerSurface::HueBar => {
                let (fx, _) = self.hue_bar.to_fraction(screen);
                self.hsv.h = (fx * 360.0).rem_euclid(360.0);
            }
        }
    }
}
