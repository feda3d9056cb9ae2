//! Scene lifecycle management for the spinning globes.
//!
//! Each mounted visualization owns one [`Scene`] and paints into one
//! [`SurfaceHost`]. The host is cleared before every fresh attachment, so
//! however quickly parameters change there is never more than one live
//! rendering surface per slot. Release is idempotent and cancels the
//! repaint loop; only the view that created a scene releases it.

use egui::{Color32, TextureHandle, TextureOptions};
use solar_atlas_core::catalog::CelestialBody;

use crate::sphere::{self, SurfaceMap, SurfacePattern};

/// Per-frame rotation increments, in radians. Hovered cards spin roughly
/// 3.3× faster than idle ones; rings at about half their globe.
const DETAIL_SPIN: f32 = 0.005;
const DETAIL_RING_SPIN: f32 = 0.002;
const CARD_SPIN_IDLE: f32 = 0.003;
const CARD_SPIN_HOVER: f32 = 0.010;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SceneVariant {
    /// The large globe in the detail view.
    Detail,
    /// The small hover-reactive globe on a gallery card.
    Card,
}

/// Everything a scene is keyed on; any change forces a rebuild.
#[derive(Clone, PartialEq, Debug)]
pub struct SceneParams {
    pub body_id: String,
    pub color: [u8; 3],
    pub size_px: usize,
    pub variant: SceneVariant,
}

impl SceneParams {
    pub fn for_body(body: &CelestialBody, size_px: usize, variant: SceneVariant) -> Self {
        Self {
            body_id: body.id.to_string(),
            color: body.color,
            size_px,
            variant,
        }
    }
}

/// Visual configuration of one globe. Resolved once per scene from
/// [`style_for`]; unrecognized identifiers get [`VisualStyle::fallback`].
#[derive(Clone, PartialEq, Debug)]
pub struct VisualStyle {
    pub base: Color32,
    pub pattern: SurfacePattern,
    pub emissive: Color32,
    pub emissive_intensity: f32,
    pub specular: Color32,
    pub shininess: f32,
    pub ring: bool,
}

impl VisualStyle {
    /// Neutral configuration for bodies the table does not know: the
    /// record's own display color, no emissive, low shininess, no ring.
    pub fn fallback(color: [u8; 3]) -> Self {
        Self {
            base: Color32::from_rgb(color[0], color[1], color[2]),
            pattern: SurfacePattern::Plain,
            emissive: Color32::BLACK,
            emissive_intensity: 0.0,
            specular: Color32::from_rgb(0x33, 0x33, 0x33),
            shininess: 30.0,
            ring: false,
        }
    }
}

/// The deterministic identifier → style table.
pub fn style_for(body_id: &str, fallback_color: [u8; 3]) -> VisualStyle {
    let entry = |base: u32, pattern, emissive: u32, intensity, specular: u32, shininess, ring| {
        VisualStyle {
            base: rgb(base),
            pattern,
            emissive: rgb(emissive),
            emissive_intensity: intensity,
            specular: rgb(specular),
            shininess,
            ring,
        }
    };

    match body_id {
        "sun" => entry(0xfdb813, SurfacePattern::Star, 0xfdb813, 0.5, 0xffffff, 100.0, false),
        "mercury" => entry(0x8c7853, SurfacePattern::Rocky, 0x000000, 0.0, 0x444444, 30.0, false),
        "venus" => entry(0xffc649, SurfacePattern::Rocky, 0xffa500, 0.1, 0xffcc00, 80.0, false),
        "earth" => entry(0x4169e1, SurfacePattern::Continental, 0x0066cc, 0.05, 0x6699ff, 50.0, false),
        "mars" => entry(0xcd5c5c, SurfacePattern::Rocky, 0x8b0000, 0.1, 0xff4444, 20.0, false),
        "jupiter" => entry(0xdaa520, SurfacePattern::Banded, 0xb8860b, 0.1, 0xffd700, 60.0, false),
        "saturn" => entry(0xf4a460, SurfacePattern::Banded, 0xdaa520, 0.1, 0xffcc66, 70.0, true),
        "uranus" => entry(0x4fd0e7, SurfacePattern::Banded, 0x00ced1, 0.1, 0x87ceeb, 90.0, false),
        "neptune" => entry(0x4169e1, SurfacePattern::Banded, 0x0000cd, 0.15, 0x6495ed, 85.0, false),
        "pluto" => entry(0xa0826d, SurfacePattern::Rocky, 0x000000, 0.0, 0x666666, 15.0, false),
        _ => VisualStyle::fallback(fallback_color),
    }
}

fn rgb(hex: u32) -> Color32 {
    Color32::from_rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

/// The container a scene attaches its rendering surface to. Dropping or
/// clearing it releases the underlying texture allocations.
#[derive(Default)]
pub struct SurfaceHost {
    surfaces: Vec<TextureHandle>,
}

impl SurfaceHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Detaches everything. Safe on an already-empty host.
    pub fn clear(&mut self) {
        self.surfaces.clear();
    }

    pub fn attached(&self) -> usize {
        self.surfaces.len()
    }

    pub fn texture(&self) -> Option<&TextureHandle> {
        self.surfaces.first()
    }

    fn texture_mut(&mut self) -> Option<&mut TextureHandle> {
        self.surfaces.first_mut()
    }

    fn attach(&mut self, handle: TextureHandle) {
        self.surfaces.push(handle);
    }
}

/// One live visualization: parameters, resolved style, cached surface map,
/// rotation state, and the released flag that cancels the repaint loop.
pub struct Scene {
    params: SceneParams,
    style: VisualStyle,
    surface: Option<SurfaceMap>,
    spin: f32,
    ring_spin: f32,
    released: bool,
}

impl Scene {
    pub fn new(params: SceneParams) -> Self {
        let style = style_for(&params.body_id, params.color);
        Self {
            params,
            style,
            surface: None,
            spin: 0.0,
            ring_spin: 0.0,
            released: false,
        }
    }

    pub fn params(&self) -> &SceneParams {
        &self.params
    }

    pub fn spin(&self) -> f32 {
        self.spin
    }

    pub fn ring_spin(&self) -> f32 {
        self.ring_spin
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    fn spin_deltas(&self, hovered: bool) -> (f32, f32) {
        match self.params.variant {
            SceneVariant::Detail => (DETAIL_SPIN, DETAIL_RING_SPIN),
            SceneVariant::Card => {
                let spin = if hovered {
                    CARD_SPIN_HOVER
                } else {
                    CARD_SPIN_IDLE
                };
                (spin, spin * 0.5)
            }
        }
    }

    /// One animation step: build the surface map on first use, advance the
    /// rotation, upload the frame, and keep the repaint loop scheduled.
    /// After [`Scene::release`] this is a no-op.
    pub fn tick(&mut self, ctx: &egui::Context, host: &mut SurfaceHost, hovered: bool) {
        if self.released {
            return;
        }

        let first = self.surface.is_none();
        if first {
            self.surface = Some(SurfaceMap::generate(self.style.pattern, self.style.base));
        } else {
            let (spin_delta, ring_delta) = self.spin_deltas(hovered);
            self.spin += spin_delta;
            self.ring_spin += ring_delta;
        }

        let Some(surface) = self.surface.as_ref() else {
            return;
        };
        let frame = sphere::render_sphere(
            surface,
            &self.style,
            self.params.size_px,
            self.spin,
            self.ring_spin,
        );

        if first || host.texture().is_none() {
            // a previous scene may have left its surface attached
            host.clear();
            host.attach(ctx.load_texture(
                format!("scene_{}", self.params.body_id),
                frame,
                TextureOptions::LINEAR,
            ));
        } else if let Some(handle) = host.texture_mut() {
            handle.set(frame, TextureOptions::LINEAR);
        }

        ctx.request_repaint();
    }

    /// Cancels the repaint loop, detaches the surface, and drops the cached
    /// pixel buffers. Idempotent; detaching an already-empty host is fine.
    pub fn release(&mut self, host: &mut SurfaceHost) {
        host.clear();
        self.surface = None;
        self.released = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card_params(body_id: &str) -> SceneParams {
        SceneParams {
            body_id: body_id.to_string(),
            color: [120, 120, 120],
            size_px: 32,
            variant: SceneVariant::Card,
        }
    }

    #[test]
    fn rapid_remounts_leave_a_single_surface() {
        let ctx = egui::Context::default();
        let mut host = SurfaceHost::new();

        for _ in 0..5 {
            let mut scene = Scene::new(card_params("earth"));
            scene.tick(&ctx, &mut host, false);
        }

        assert_eq!(host.attached(), 1);
    }

    #[test]
    fn release_is_idempotent_and_cancels_the_loop() {
        let ctx = egui::Context::default();
        let mut host = SurfaceHost::new();
        let mut scene = Scene::new(card_params("mars"));

        scene.tick(&ctx, &mut host, false);
        assert_eq!(host.attached(), 1);

        scene.release(&mut host);
        scene.release(&mut host);
        assert_eq!(host.attached(), 0);
        assert!(scene.is_released());

        // a released scene must not re-attach or keep animating
        scene.tick(&ctx, &mut host, false);
        assert_eq!(host.attached(), 0);
        assert_eq!(scene.spin(), 0.0);
    }

    #[test]
    fn hovered_cards_spin_faster() {
        let ctx = egui::Context::default();

        let mut idle_host = SurfaceHost::new();
        let mut idle = Scene::new(card_params("venus"));
        let mut hover_host = SurfaceHost::new();
        let mut hovered = Scene::new(card_params("venus"));

        // first tick only mounts; the next ten advance rotation
        for _ in 0..11 {
            idle.tick(&ctx, &mut idle_host, false);
            hovered.tick(&ctx, &mut hover_host, true);
        }

        let ratio = hovered.spin() / idle.spin();
        assert!(
            (ratio - 10.0 / 3.0).abs() < 1e-3,
            "hover speedup is ~3.3x, got {ratio}"
        );
        assert!(
            (hovered.ring_spin() - hovered.spin() * 0.5).abs() < 1e-5,
            "card ring advances at half the globe rate"
        );
    }

    #[test]
    fn detail_ring_advances_at_documented_rate() {
        let ctx = egui::Context::default();
        let mut host = SurfaceHost::new();
        let mut scene = Scene::new(SceneParams {
            body_id: "saturn".to_string(),
            color: [244, 164, 96],
            size_px: 32,
            variant: SceneVariant::Detail,
        });

        for _ in 0..4 {
            scene.tick(&ctx, &mut host, false);
        }

        assert!((scene.spin() - 3.0 * 0.005).abs() < 1e-6);
        assert!((scene.ring_spin() - 3.0 * 0.002).abs() < 1e-6);
    }

    #[test]
    fn unknown_identifier_resolves_to_the_fallback_style() {
        let style = style_for("phantom", [10, 20, 30]);
        assert_eq!(style, VisualStyle::fallback([10, 20, 30]));
        assert_eq!(style.pattern, SurfacePattern::Plain);
        assert_eq!(style.emissive_intensity, 0.0);
        assert!(!style.ring);
    }

    #[test]
    fn style_table_is_deterministic_and_rings_saturn() {
        assert_eq!(
            style_for("saturn", [0, 0, 0]),
            style_for("saturn", [9, 9, 9]),
            "known ids ignore the fallback color"
        );
        assert!(style_for("saturn", [0, 0, 0]).ring);
        assert!(!style_for("jupiter", [0, 0, 0]).ring);
    }

    #[test]
    fn parameter_change_forces_rebuild_with_one_surface() {
        let ctx = egui::Context::default();
        let mut host = SurfaceHost::new();
        let mut scene = Scene::new(card_params("earth"));
        scene.tick(&ctx, &mut host, false);

        // simulate what the views do on a parameter change
        let desired = card_params("jupiter");
        if scene.params() != &desired {
            scene.release(&mut host);
            scene = Scene::new(desired);
        }
        scene.tick(&ctx, &mut host, false);

        assert_eq!(host.attached(), 1);
        assert_eq!(scene.params().body_id, "jupiter");
    }
}
