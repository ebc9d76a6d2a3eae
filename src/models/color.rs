//! Colour model for store themes: hex RGB and HSL.
//!
//! `Hsl` keeps full `f64` precision, so hex → `Hsl` → hex is lossless.
//! Only the textual forms are rounded to whole numbers.

use crate::errors::{AppError, AppResult};
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static HSL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(-?\d+(?:\.\d+)?)(?:deg)?(?:\s*,\s*|\s+)(\d+(?:\.\d+)?)%(?:\s*,\s*|\s+)(\d+(?:\.\d+)?)%\s*$",
    )
    .expect("valid hsl regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Accepts `#rrggbb`, `rrggbb` and the `#rgb` shorthand, any case.
    pub fn from_hex(input: &str) -> AppResult<Self> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(AppError::InvalidColor(input.to_string()));
        }

        let expanded: String = match digits.len() {
            6 => digits.to_string(),
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            _ => return Err(AppError::InvalidColor(input.to_string())),
        };

        let channel = |i: usize| {
            u8::from_str_radix(&expanded[i..i + 2], 16)
                .map_err(|_| AppError::InvalidColor(input.to_string()))
        };

        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Hue in degrees `[0, 360)`, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub fn from_rgb(rgb: Rgb) -> Self {
        let r = rgb.r as f64 / 255.0;
        let g = rgb.g as f64 / 255.0;
        let b = rgb.b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            // achromatic
            return Self {
                h: 0.0,
                s: 0.0,
                l: l * 100.0,
            };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Self {
            h: h * 60.0,
            s: s * 100.0,
            l: l * 100.0,
        }
    }

    pub fn to_rgb(&self) -> Rgb {
        let h = self.h.rem_euclid(360.0) / 360.0;
        let s = (self.s / 100.0).clamp(0.0, 1.0);
        let l = (self.l / 100.0).clamp(0.0, 1.0);

        if s == 0.0 {
            let v = to_channel(l);
            return Rgb { r: v, g: v, b: v };
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        Rgb {
            r: to_channel(hue_to_rgb(p, q, h + 1.0 / 3.0)),
            g: to_channel(hue_to_rgb(p, q, h)),
            b: to_channel(hue_to_rgb(p, q, h - 1.0 / 3.0)),
        }
    }

    pub fn to_hex(&self) -> String {
        self.to_rgb().to_hex()
    }

    fn rounded(&self) -> (i64, i64, i64) {
        let mut h = self.h.round() as i64;
        if h >= 360 {
            h -= 360;
        }
        (h, self.s.round() as i64, self.l.round() as i64)
    }

    /// Space-separated form used by Tailwind/shadcn variables: `24 95% 53%`.
    pub fn to_bare(&self) -> String {
        let (h, s, l) = self.rounded();
        format!("{h} {s}% {l}%")
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, s, l) = self.rounded();
        write!(f, "hsl({h}, {s}%, {l}%)")
    }
}

impl FromStr for Hsl {
    type Err = AppError;

    /// Parses `hsl(h, s%, l%)`, `hsl(h s% l%)` and bare `h s% l%`.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let lower = trimmed.to_ascii_lowercase();
        let inner = match lower
            .strip_prefix("hsla(")
            .or_else(|| lower.strip_prefix("hsl("))
        {
            Some(rest) => rest
                .strip_suffix(')')
                .ok_or_else(|| AppError::InvalidColor(input.to_string()))?,
            None => lower.as_str(),
        };

        let caps = HSL_RE
            .captures(inner)
            .ok_or_else(|| AppError::InvalidColor(input.to_string()))?;

        let number = |i: usize| {
            caps[i]
                .parse::<f64>()
                .map_err(|_| AppError::InvalidColor(input.to_string()))
        };

        let (h, s, l) = (number(1)?, number(2)?, number(3)?);
        if s > 100.0 || l > 100.0 {
            return Err(AppError::InvalidColor(input.to_string()));
        }

        Ok(Self {
            h: h.rem_euclid(360.0),
            s,
            l,
        })
    }
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

pub fn hex_to_hsl(hex: &str) -> AppResult<Hsl> {
    Ok(Hsl::from_rgb(Rgb::from_hex(hex)?))
}

pub fn hsl_to_hex(hsl: &str) -> AppResult<String> {
    Ok(hsl.parse::<Hsl>()?.to_hex())
}
