use crate::cli::parser::{Cli, Commands};
use crate::errors::AppResult;
use crate::models::color::{Hsl, Rgb};
use crate::utils::colors::swatch;

/// Handle the `color` command
pub fn handle(cli: &Cli) -> AppResult<()> {
    let Commands::Color { value } = &cli.command else {
        return Ok(());
    };

    let (rgb, hsl) = if looks_like_hex(value) {
        let rgb = Rgb::from_hex(value)?;
        (rgb, Hsl::from_rgb(rgb))
    } else {
        let hsl: Hsl = value.parse()?;
        (hsl.to_rgb(), hsl)
    };

    println!("hex:  {}", swatch(rgb));
    println!("hsl:  {hsl}");
    println!("bare: {}", hsl.to_bare());
    println!("rgb:  rgb({}, {}, {})", rgb.r, rgb.g, rgb.b);
    Ok(())
}

fn looks_like_hex(value: &str) -> bool {
    let v = value.trim();
    v.starts_with('#') || (matches!(v.len(), 3 | 6) && v.chars().all(|c| c.is_ascii_hexdigit()))
}
