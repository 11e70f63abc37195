use polynomials::poly;
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BLUE: Rgb = Rgb(0, 0, 255);

    fn from_unit(r: f64, g: f64, b: f64) -> Self {
        let channel = |v: f64| (v.clamp(0., 1.) * 255.).round() as u8;
        Rgb(channel(r), channel(g), channel(b))
    }

    /// Approximate apparent color of a star from its B−V color index.
    /// Stars without a color index are drawn white.
    pub fn from_color_index(color_index: f32) -> Self {
        if color_index.is_nan() {
            return Rgb::WHITE;
        }
        let bv = (color_index as f64).clamp(-0.4, 2.0);
        let eval = |coefficients: polynomials::Polynomial<f64>, t: f64| {
            coefficients.eval(t).unwrap_or(0.)
        };

        let (r, g) = if bv < 0. {
            let t = (bv + 0.4) / 0.4;
            (eval(poly![0.61, 0.11, 0.1], t), eval(poly![0.70, 0.07, 0.1], t))
        } else if bv < 0.4 {
            let t = bv / 0.4;
            (eval(poly![0.83, 0.17], t), eval(poly![0.87, 0.11], t))
        } else if bv < 1.6 {
            let t = (bv - 0.4) / 1.2;
            (1., eval(poly![0.98, -0.16], t))
        } else {
            let t = (bv - 1.6) / 0.4;
            (1., eval(poly![0.82, 0., -0.5], t))
        };

        let b = if bv < 0.4 {
            1.
        } else if bv < 1.5 {
            let t = (bv - 0.4) / 1.1;
            eval(poly![1., -0.47, 0.1], t)
        } else if bv < 1.951 {
            let t = (bv - 1.5) / 0.44;
            eval(poly![0.63, 0., -0.6], t)
        } else {
            0.
        };

        Rgb::from_unit(r, g, b)
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hex() {
        assert_eq!(Rgb::BLUE.to_hex(), "#0000ff");
        assert_eq!(Rgb(18, 52, 171).to_hex(), "#1234ab");
    }

    #[test]
    fn hot_stars_are_blue_white() {
        let Rgb(r, g, b) = Rgb::from_color_index(-0.4);
        assert!((150..=160).contains(&r));
        assert!((175..=182).contains(&g));
        assert_eq!(b, 255);
        assert_eq!(Rgb::from_color_index(-1.0), Rgb::from_color_index(-0.4));
    }

    #[test]
    fn sun_like_stars_are_yellowish() {
        let Rgb(r, g, b) = Rgb::from_color_index(0.65);
        assert_eq!(r, 255);
        assert!(g > b);
        assert!(b > 150);
    }

    #[test]
    fn cool_stars_are_red() {
        let Rgb(r, g, b) = Rgb::from_color_index(2.0);
        assert_eq!((r, b), (255, 0));
        assert!(g < 100);
    }

    #[test]
    fn missing_color_index_is_white() {
        assert_eq!(Rgb::from_color_index(f32::NAN), Rgb::WHITE);
    }
}
