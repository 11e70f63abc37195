use std::f64::consts::{PI, TAU};

pub type Hours = f64;
pub type Degrees = f64;
pub type Radians = f64;

pub fn deg_to_rad(degrees: Degrees) -> Radians {
    PI * degrees / 180.
}

pub fn rad_to_deg(rad: Radians) -> Degrees {
    180. * rad / PI
}

pub fn hours_to_rad(hours: Hours) -> Radians {
    PI * hours / 12.
}

pub fn rad_to_hours(rad: Radians) -> Hours {
    12. * rad / PI
}

/// Euclidean remainder, always in `[0, base)` for a positive base.
/// Values already in range are returned unchanged.
pub fn modulo(val: f64, base: f64) -> f64 {
    let rem = val % base;
    if rem >= 0. {
        return rem;
    }

    let wrapped = rem + base;
    if wrapped < base {
        wrapped
    } else {
        0.
    }
}

/// Wraps `value` into the half-open interval `[min, max)`
pub fn wrap(value: f64, min: f64, max: f64) -> f64 {
    min + modulo(value - min, max - min)
}

pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Right ascension wraps around the full circle
pub fn wrap_ra(ra: Radians) -> Radians {
    wrap(ra, 0., TAU)
}

/// Declination of the view center is clamped to `[-π, π]`, not wrapped
pub fn clamp_de(de: Radians) -> Radians {
    clamp(de, -PI, PI)
}
