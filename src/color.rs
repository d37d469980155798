use crate::prelude::*;

pub type Color = Vec3;

const SKY_BLUE: Color = Color::new(0.5, 0.7, 1.0);

/// Background seen by rays that escape the scene: white looking straight down,
/// blending linearly to sky blue looking straight up.
pub fn sky(direction: Vec3) -> Color {
    let unit_direction = direction.normalized();
    let a = 0.5 * (unit_direction.y + 1.0);
    (1.0 - a) * Color::one() + a * SKY_BLUE
}

/// Scales a `[0, 1]` colour to bytes. The `255.999` factor lets a full channel
/// reach 255 while truncation keeps it below 256.
pub fn to_rgb8(pixel_color: Color) -> [u8; 3] {
    let scaled = pixel_color * 255.999;
    [scaled.x as u8, scaled.y as u8, scaled.z as u8]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sky_endpoints() {
        assert_eq!(sky(Vec3::new(0.0, -3.0, 0.0)), Color::one());
        assert_eq!(sky(Vec3::new(0.0, 2.0, 0.0)), SKY_BLUE);

        let horizon = sky(Vec3::new(1.0, 0.0, 0.0));
        assert!((horizon - Color::new(0.75, 0.85, 1.0)).length() < 1e-12);
    }

    #[test]
    fn test_to_rgb8_scaling() {
        assert_eq!(to_rgb8(Color::one()), [255, 255, 255]);
        assert_eq!(to_rgb8(Color::zero()), [0, 0, 0]);
        assert_eq!(to_rgb8(Color::new(0.5, 0.25, 0.999)), [127, 63, 255]);
    }
}
