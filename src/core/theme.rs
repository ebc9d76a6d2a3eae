//! Theme → CSS custom properties.

use crate::models::color::hex_to_hsl;
use crate::models::theme::ThemeSettings;
use clap::ValueEnum;
use serde::Serialize;
use tracing::warn;

/// Output form of converted hex colours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum HslStyle {
    /// `hsl(24, 95%, 53%)`
    #[default]
    Css,
    /// `24 95% 53%` (Tailwind/shadcn variables)
    Bare,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VarKind {
    Color,
    Raw,
}

/// (css variable, theme fields tried in order, kind)
const THEME_VARS: &[(&str, &[&str], VarKind)] = &[
    // brand
    ("--color-primary", &["primaryColor"], VarKind::Color),
    ("--color-primary-dark", &["primaryDarkColor"], VarKind::Color),
    ("--color-primary-light", &["primaryLightColor"], VarKind::Color),
    ("--color-primary-foreground", &["primaryTextColor"], VarKind::Color),
    ("--color-secondary", &["secondaryColor"], VarKind::Color),
    ("--color-accent", &["accentColor"], VarKind::Color),
    ("--primary", &["primaryColor"], VarKind::Color),
    ("--primary-foreground", &["primaryTextColor"], VarKind::Color),
    // status
    ("--color-success", &["successColor"], VarKind::Color),
    ("--color-success-light", &["successLightColor"], VarKind::Color),
    ("--color-warning", &["warningColor"], VarKind::Color),
    ("--color-warning-light", &["warningLightColor"], VarKind::Color),
    ("--color-error", &["errorColor"], VarKind::Color),
    ("--color-error-light", &["errorLightColor"], VarKind::Color),
    ("--color-info", &["infoColor"], VarKind::Color),
    ("--color-info-light", &["infoLightColor"], VarKind::Color),
    ("--color-tomorrow", &["tomorrowColor"], VarKind::Color),
    ("--color-tomorrow-dark", &["tomorrowDarkColor", "tomorrowColor"], VarKind::Color),
    ("--color-tomorrow-light", &["tomorrowLightColor"], VarKind::Color),
    ("--color-out-of-stock", &["outOfStockColor"], VarKind::Color),
    // icons
    ("--color-working-hours-icon", &["workingHoursIconColor"], VarKind::Color),
    ("--color-contacts-icon", &["contactsIconColor"], VarKind::Color),
    ("--color-payment-delivery-icon", &["paymentDeliveryIconColor"], VarKind::Color),
    // neutrals
    ("--color-white", &["whiteColor"], VarKind::Color),
    ("--color-gray-50", &["gray50Color"], VarKind::Color),
    ("--color-gray-100", &["gray100Color"], VarKind::Color),
    ("--color-gray-200", &["gray200Color"], VarKind::Color),
    ("--color-gray-300", &["gray300Color"], VarKind::Color),
    ("--color-gray-400", &["gray400Color"], VarKind::Color),
    ("--color-gray-500", &["gray500Color"], VarKind::Color),
    ("--color-gray-600", &["gray600Color"], VarKind::Color),
    ("--color-gray-700", &["gray700Color"], VarKind::Color),
    ("--color-gray-800", &["gray800Color"], VarKind::Color),
    ("--color-gray-900", &["gray900Color"], VarKind::Color),
    // shadows
    ("--shadow-primary", &["primaryShadow"], VarKind::Raw),
    ("--shadow-success", &["successShadow"], VarKind::Raw),
    ("--shadow-warning", &["warningShadow"], VarKind::Raw),
    ("--shadow-error", &["errorShadow"], VarKind::Raw),
    ("--shadow-info", &["infoShadow"], VarKind::Raw),
    ("--shadow-tomorrow", &["tomorrowShadow"], VarKind::Raw),
    ("--shadow-gray", &["grayShadow"], VarKind::Raw),
    // typography
    ("--font-family-primary", &["fontFamilyPrimary"], VarKind::Raw),
    ("--font-family-secondary", &["fontFamilySecondary"], VarKind::Raw),
    // layout
    ("--color-background", &["backgroundColor"], VarKind::Color),
    ("--color-card", &["cardBackgroundColor"], VarKind::Color),
    ("--color-text-primary", &["textPrimaryColor"], VarKind::Color),
    ("--color-text-secondary", &["textSecondaryColor"], VarKind::Color),
    ("--background", &["backgroundColor"], VarKind::Color),
    ("--card", &["cardBackgroundColor"], VarKind::Color),
    ("--foreground", &["textPrimaryColor"], VarKind::Color),
    ("--card-foreground", &["textPrimaryColor"], VarKind::Color),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CssVar {
    pub name: String,
    pub value: String,
}

/// Hex colours become HSL in `style`; any other colour notation is kept.
pub fn to_css_color(value: &str, style: HslStyle) -> Option<String> {
    if !value.starts_with('#') {
        return Some(value.to_string());
    }
    match hex_to_hsl(value) {
        Ok(hsl) => Some(match style {
            HslStyle::Css => hsl.to_string(),
            HslStyle::Bare => hsl.to_bare(),
        }),
        Err(e) => {
            warn!(value, error = %e, "skipping invalid theme color");
            None
        }
    }
}

/// CSS variables for every theme field that is set, in a stable order.
pub fn apply_theme_vars(theme: &ThemeSettings, style: HslStyle) -> Vec<CssVar> {
    THEME_VARS
        .iter()
        .filter_map(|(name, fields, kind)| {
            let raw = fields.iter().find_map(|f| theme.get(f))?;
            let value = match kind {
                VarKind::Color => to_css_color(raw, style)?,
                VarKind::Raw => raw.to_string(),
            };
            Some(CssVar {
                name: name.to_string(),
                value,
            })
        })
        .collect()
}

pub fn render_css(vars: &[CssVar]) -> String {
    let mut out = String::from(":root {\n");
    for var in vars {
        out.push_str(&format!("  {}: {};\n", var.name, var.value));
    }
    out.push_str("}\n");
    out
}
