//! CPU sphere rendering.
//!
//! Surfaces are generated procedurally (deterministic hash noise, no RNG)
//! into an equirectangular pixel map, then projected orthographically onto
//! a shaded disc each frame. Saturn's ring is composited as a tilted
//! annulus: the far half is occluded by the globe, the near half is drawn
//! over it.

use std::f32::consts::{PI, TAU};

use egui::{Color32, ColorImage};

use crate::scene::VisualStyle;

pub const SURFACE_W: usize = 256;
pub const SURFACE_H: usize = 128;

/// Inner and outer ring radii, in sphere radii.
const RING_INNER: f32 = 1.18;
const RING_OUTER: f32 = 1.62;
/// Vertical squash of the ring ellipse (cosine of the tilt).
const RING_TILT: f32 = 0.36;

/// Procedural surface archetypes. Everything the catalog does not know is
/// rendered as [`SurfacePattern::Plain`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SurfacePattern {
    /// Granulated, self-lit surface.
    Star,
    /// Latitude bands with a little turbulence.
    Banded,
    /// Speckled regolith.
    Rocky,
    /// Oceans, continents, polar caps.
    Continental,
    /// Uniform albedo.
    Plain,
}

/// An equirectangular pixel map sampled by the projector.
pub struct SurfaceMap {
    width: usize,
    height: usize,
    pixels: Vec<Color32>,
}

impl SurfaceMap {
    pub fn generate(pattern: SurfacePattern, base: Color32) -> Self {
        let (width, height) = (SURFACE_W, SURFACE_H);
        let mut pixels = Vec::with_capacity(width * height);
        for y in 0..height {
            let v = y as f32 / (height - 1) as f32;
            for x in 0..width {
                let u = x as f32 / width as f32;
                pixels.push(surface_color(pattern, base, u, v));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Nearest-neighbour sample; `u` wraps around the seam, `v` clamps at
    /// the poles.
    pub fn sample(&self, u: f32, v: f32) -> Color32 {
        let x = ((u.rem_euclid(1.0) * self.width as f32) as usize).min(self.width - 1);
        let y = ((v.clamp(0.0, 1.0) * self.height as f32) as usize).min(self.height - 1);
        self.pixels[y * self.width + x]
    }
}

fn surface_color(pattern: SurfacePattern, base: Color32, u: f32, v: f32) -> Color32 {
    match pattern {
        SurfacePattern::Star => {
            let granule = value_noise(u, v, 48, 24, 7);
            let flare = value_noise(u, v, 8, 4, 19);
            scale(base, 0.82 + 0.30 * granule + 0.10 * flare)
        }
        SurfacePattern::Banded => {
            let wobble = 0.35 * (u * TAU * 2.0).sin() + 0.5 * value_noise(u, v, 12, 6, 11);
            let t = 0.5 + 0.5 * (v * PI * 9.0 + wobble).sin();
            let storm = value_noise(u, v, 24, 12, 23);
            let banded = mix(scale(base, 0.72), scale(base, 1.18), t);
            mix(banded, scale(base, 1.3), (storm - 0.82).max(0.0) * 3.0)
        }
        SurfacePattern::Rocky => {
            let coarse = value_noise(u, v, 16, 8, 31);
            let fine = value_noise(u, v, 64, 32, 37);
            scale(base, 0.72 + 0.28 * coarse + 0.18 * fine)
        }
        SurfacePattern::Continental => {
            let lat = (0.5 - v) * PI;
            if lat.abs() > 1.22 {
                return Color32::from_rgb(235, 240, 245); // polar caps
            }
            let land = 0.55 * value_noise(u, v, 8, 4, 41)
                + 0.30 * value_noise(u, v, 16, 8, 43)
                + 0.15 * value_noise(u, v, 32, 16, 47);
            if land > 0.55 {
                let relief = value_noise(u, v, 48, 24, 53);
                mix(
                    Color32::from_rgb(86, 125, 70),
                    Color32::from_rgb(150, 130, 90),
                    relief,
                )
            } else {
                let depth = value_noise(u, v, 24, 12, 59);
                scale(base, 0.82 + 0.25 * depth)
            }
        }
        SurfacePattern::Plain => {
            let grain = value_noise(u, v, 32, 16, 61);
            scale(base, 0.94 + 0.10 * grain)
        }
    }
}

/// Projects the surface onto a `size`×`size` disc with Lambert shading, a
/// Blinn specular highlight, and an emissive lift; composites the ring when
/// the style asks for one. `spin` and `ring_spin` are rotation angles in
/// radians about the vertical axis.
pub fn render_sphere(
    surface: &SurfaceMap,
    style: &VisualStyle,
    size: usize,
    spin: f32,
    ring_spin: f32,
) -> ColorImage {
    let mut pixels = vec![Color32::TRANSPARENT; size * size];
    let center = size as f32 / 2.0;
    let radius = if style.ring {
        center / RING_OUTER
    } else {
        center - 1.0
    };

    // light from the upper left, slightly toward the viewer
    let (lx, ly, lz) = normalize3(-0.45, 0.40, 0.80);
    // Blinn half vector between the light and the view axis (0, 0, 1)
    let (hx, hy, hz) = normalize3(lx, ly, lz + 1.0);

    for py in 0..size {
        for px in 0..size {
            let dx = (px as f32 + 0.5) - center;
            let dy = (py as f32 + 0.5) - center;

            let mut sphere_px = None;
            let d2 = dx * dx + dy * dy;
            if d2 < radius * radius {
                let z = (radius * radius - d2).sqrt();
                let nx = dx / radius;
                let ny = -dy / radius;
                let nz = z / radius;

                let lat = ny.asin();
                let lon = nx.atan2(nz);
                let u = (lon + spin).rem_euclid(TAU) / TAU;
                let v = 0.5 - lat / PI;
                let tex = surface.sample(u, v);

                let ndl = (nx * lx + ny * ly + nz * lz).max(0.0);
                let diffuse = 0.30 + 0.70 * ndl;
                let ndh = (nx * hx + ny * hy + nz * hz).max(0.0);
                let highlight = ndh.powf(style.shininess.max(1.0)) * 0.6;

                let channel = |t: u8, e: u8, s: u8| {
                    (t as f32 * diffuse
                        + e as f32 * style.emissive_intensity
                        + s as f32 * highlight)
                        .min(255.0) as u8
                };
                sphere_px = Some(Color32::from_rgb(
                    channel(tex.r(), style.emissive.r(), style.specular.r()),
                    channel(tex.g(), style.emissive.g(), style.specular.g()),
                    channel(tex.b(), style.emissive.b(), style.specular.b()),
                ));
            }

            let out = if style.ring {
                let ring_px = ring_sample(style.base, dx, dy, radius, ring_spin);
                composite(sphere_px, ring_px, dy >= 0.0)
            } else {
                sphere_px.unwrap_or(Color32::TRANSPARENT)
            };

            pixels[py * size + px] = out;
        }
    }

    ColorImage {
        size: [size, size],
        pixels,
        source_size: egui::Vec2::ZERO,
    }
}

/// Ring color and coverage at a screen offset, or `None` outside the
/// annulus. The ring rotates independently of the globe; the rotation shows
/// up as drifting azimuthal grain.
fn ring_sample(base: Color32, dx: f32, dy: f32, radius: f32, ring_spin: f32) -> Option<(Color32, f32)> {
    let rx = dx / radius;
    let ry = dy / (radius * RING_TILT);
    let rr = (rx * rx + ry * ry).sqrt();
    if !(RING_INNER..=RING_OUTER).contains(&rr) {
        return None;
    }

    let t = (rr - RING_INNER) / (RING_OUTER - RING_INNER);
    let band = 0.60 + 0.40 * (t * 40.0 + 1.7 * (t * 9.0).sin()).sin();
    let angle = ry.atan2(rx) + ring_spin;
    let grain = 0.88 + 0.12 * (angle * 24.0).sin();

    // fade toward both edges
    let edge = (t.min(1.0 - t) * 8.0).clamp(0.0, 1.0);
    let alpha = 0.78 * edge * band.clamp(0.2, 1.0);

    let tone = mix(base, Color32::from_rgb(232, 222, 200), 0.55);
    Some((scale(tone, 0.7 + 0.3 * band * grain), alpha))
}

/// Layers a translucent ring pixel with the globe: the near half of the
/// ring covers the globe, the far half hides behind it.
fn composite(
    sphere: Option<Color32>,
    ring: Option<(Color32, f32)>,
    ring_in_front: bool,
) -> Color32 {
    match (sphere, ring) {
        (Some(s), Some((r, a))) if ring_in_front => blend_over(s, r, a),
        (Some(s), _) => s,
        (None, Some((r, a))) => {
            Color32::from_rgba_unmultiplied(r.r(), r.g(), r.b(), (a * 255.0) as u8)
        }
        (None, None) => Color32::TRANSPARENT,
    }
}

fn blend_over(under: Color32, over: Color32, alpha: f32) -> Color32 {
    let a = alpha.clamp(0.0, 1.0);
    let ch = |u: u8, o: u8| (u as f32 * (1.0 - a) + o as f32 * a) as u8;
    Color32::from_rgb(
        ch(under.r(), over.r()),
        ch(under.g(), over.g()),
        ch(under.b(), over.b()),
    )
}

fn normalize3(x: f32, y: f32, z: f32) -> (f32, f32, f32) {
    let len = (x * x + y * y + z * z).sqrt();
    (x / len, y / len, z / len)
}

fn scale(c: Color32, f: f32) -> Color32 {
    let ch = |v: u8| ((v as f32 * f).clamp(0.0, 255.0)) as u8;
    Color32::from_rgb(ch(c.r()), ch(c.g()), ch(c.b()))
}

fn mix(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let ch = |x: u8, y: u8| (x as f32 * (1.0 - t) + y as f32 * t) as u8;
    Color32::from_rgb(ch(a.r(), b.r()), ch(a.g(), b.g()), ch(a.b(), b.b()))
}

fn hash_noise(x: u32, y: u32, seed: u32) -> f32 {
    let mut h = x
        .wrapping_mul(0x9E37_79B9)
        ^ y.wrapping_mul(0x85EB_CA6B)
        ^ seed.wrapping_mul(0xC2B2_AE35);
    h ^= h >> 15;
    h = h.wrapping_mul(0x2C1B_3C6D);
    h ^= h >> 12;
    h = h.wrapping_mul(0x297A_2D39);
    h ^= h >> 15;
    (h & 0xFFFF) as f32 / 65536.0
}

/// Bilinear value noise over a wrapping lattice, so the texture is seamless
/// in `u`.
fn value_noise(u: f32, v: f32, freq_u: u32, freq_v: u32, seed: u32) -> f32 {
    let x = u.rem_euclid(1.0) * freq_u as f32;
    let y = v.clamp(0.0, 1.0) * freq_v as f32;
    let x0 = (x.floor() as u32) % freq_u;
    let y0 = (y.floor() as u32).min(freq_v);
    let x1 = (x0 + 1) % freq_u;
    let y1 = (y0 + 1).min(freq_v);

    let sx = smoothstep(x - x.floor());
    let sy = smoothstep(y - y.floor());

    let a = hash_noise(x0, y0, seed);
    let b = hash_noise(x1, y0, seed);
    let c = hash_noise(x0, y1, seed);
    let d = hash_noise(x1, y1, seed);

    lerp(lerp(a, b, sx), lerp(c, d, sx), sy)
}

fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    fn any_style(pattern: SurfacePattern, ring: bool) -> VisualStyle {
        VisualStyle {
            base: Color32::from_rgb(120, 120, 120),
            pattern,
            emissive: Color32::BLACK,
            emissive_intensity: 0.0,
            specular: Color32::from_rgb(60, 60, 60),
            shininess: 30.0,
            ring,
        }
    }

    #[test]
    fn surface_generation_is_deterministic() {
        let a = SurfaceMap::generate(SurfacePattern::Banded, Color32::from_rgb(218, 165, 32));
        let b = SurfaceMap::generate(SurfacePattern::Banded, Color32::from_rgb(218, 165, 32));
        assert_eq!(a.pixels, b.pixels);
    }

    #[test]
    fn sampling_wraps_the_seam() {
        let map = SurfaceMap::generate(SurfacePattern::Rocky, Color32::from_rgb(140, 120, 83));
        assert_eq!(map.sample(0.0, 0.5), map.sample(1.0, 0.5));
        assert_eq!(map.sample(-0.25, 0.5), map.sample(0.75, 0.5));
    }

    #[test]
    fn disc_is_opaque_and_corners_are_transparent() {
        let style = any_style(SurfacePattern::Plain, false);
        let map = SurfaceMap::generate(style.pattern, style.base);
        let frame = render_sphere(&map, &style, 64, 0.0, 0.0);
        assert_eq!(frame.size, [64, 64]);
        assert_eq!(frame.pixels[0].a(), 0, "corner stays transparent");
        let center = frame.pixels[32 * 64 + 32];
        assert_eq!(center.a(), 255, "disc center is opaque");
    }

    #[test]
    fn ring_extends_past_the_globe() {
        let style = any_style(SurfacePattern::Banded, true);
        let map = SurfaceMap::generate(style.pattern, style.base);
        let frame = render_sphere(&map, &style, 96, 0.0, 0.0);

        // on the horizontal midline, past the (shrunken) globe radius but
        // inside the ring annulus, something must be drawn
        let center = 48usize;
        let globe_r = 48.0 / RING_OUTER;
        let x = (center as f32 + globe_r * (RING_INNER + RING_OUTER) / 2.0) as usize;
        let px = frame.pixels[center * 96 + x.min(95)];
        assert!(px.a() > 0, "ring pixel outside the globe is visible");
    }

    #[test]
    fn spin_moves_the_surface() {
        let style = any_style(SurfacePattern::Rocky, false);
        let map = SurfaceMap::generate(style.pattern, style.base);
        let a = render_sphere(&map, &style, 48, 0.0, 0.0);
        let b = render_sphere(&map, &style, 48, 1.0, 0.0);
        assert_ne!(a.pixels, b.pixels);
    }
}
