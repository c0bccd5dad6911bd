use eframe::egui::Color32;
use palette::{Hsv, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// `n` series colours with hues stepped in whole degrees of `360 / n`.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    let step = (360 / n) as f32;
    (0..n)
        .map(|i| {
            let hsv = Hsv::new(step * i as f32, 0.8, 1.0);
            let rgb: Srgb = hsv.into_color();
            Color32::from_rgb(channel(rgb.red), channel(rgb.green), channel(rgb.blue))
        })
        .collect()
}

fn channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_colour_per_series() {
        assert!(generate_palette(0).is_empty());
        assert_eq!(generate_palette(7).len(), 7);
    }

    #[test]
    fn first_colour_is_light_red() {
        assert_eq!(generate_palette(3)[0], Color32::from_rgb(255, 51, 51));
    }

    #[test]
    fn colours_are_distinct() {
        let colours = generate_palette(5);
        for (i, a) in colours.iter().enumerate() {
            for b in &colours[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
