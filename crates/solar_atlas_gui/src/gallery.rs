//! The gallery view: a filterable, batch-paginated grid of celestial-body
//! cards, each with a small hover-reactive globe.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use egui::{Color32, CornerRadius, Margin, RichText, Sense, Stroke};
use solar_atlas_core::catalog::CelestialBody;
use solar_atlas_core::i18n::{Language, Text, tr};
use solar_atlas_core::search::GalleryQuery;

use crate::scene::{Scene, SceneParams, SceneVariant, SurfaceHost};

const CARD_WIDTH: f32 = 232.0;
const CARD_SCENE_SIZE: usize = 200;
const INITIAL_LOAD_DELAY: Duration = Duration::from_millis(500);

struct CardSlot {
    scene: Scene,
    host: SurfaceHost,
}

pub struct GalleryView {
    query: GalleryQuery,
    search_input: String,
    cards: HashMap<String, CardSlot>,
    ready_at: Option<Instant>,
}

impl Default for GalleryView {
    fn default() -> Self {
        Self {
            query: GalleryQuery::default(),
            search_input: String::new(),
            cards: HashMap::new(),
            ready_at: None,
        }
    }
}

impl GalleryView {
    /// Restarts the short artificial loading state the next time the view
    /// shows. Called by the shell on every switch into gallery mode.
    pub fn reset_loading(&mut self) {
        self.ready_at = None;
    }

    /// Draws the gallery; returns the name of a card the user clicked.
    pub fn ui(&mut self, ui: &mut egui::Ui, lang: Language) -> Option<&'static str> {
        let ready_at = *self
            .ready_at
            .get_or_insert_with(|| Instant::now() + INITIAL_LOAD_DELAY);
        if Instant::now() < ready_at {
            ui.add_space(48.0);
            ui.vertical_centered(|ui| {
                ui.heading(tr(lang, Text::Loading));
                ui.add_space(12.0);
                ui.add(egui::Spinner::new().size(28.0));
            });
            ui.ctx().request_repaint();
            return None;
        }

        let filtered_count = self.query.filtered().len();
        ui.heading(format!("{} ({filtered_count})", tr(lang, Text::GalleryTitle)));
        ui.add_space(6.0);

        ui.add(
            egui::TextEdit::singleline(&mut self.search_input)
                .hint_text(tr(lang, Text::SearchHint))
                .desired_width(340.0),
        );
        self.query.set_term(&self.search_input);
        ui.add_space(10.0);

        let visible = self.query.visible();
        self.prune_cards(&visible);

        let mut picked = None;
        ui.horizontal_wrapped(|ui| {
            for &body in &visible {
                if self.card(ui, lang, body) {
                    picked = Some(body.name);
                }
            }
        });

        if self.query.has_more() {
            ui.add_space(12.0);
            ui.vertical_centered(|ui| {
                let label = format!(
                    "{} ({}/{filtered_count})",
                    tr(lang, Text::LoadMore),
                    visible.len(),
                );
                if ui.button(label).clicked() {
                    self.query.load_more();
                }
            });
        }

        if filtered_count == 0 {
            ui.add_space(32.0);
            ui.vertical_centered(|ui| {
                ui.heading(format!("🔭 {}", tr(lang, Text::NotFound)));
                ui.label(RichText::new(tr(lang, Text::SearchHint)).weak());
            });
        }

        picked
    }

    /// Drops card slots that filtered out, releasing their surfaces.
    fn prune_cards(&mut self, visible: &[&'static CelestialBody]) {
        self.cards.retain(|id, slot| {
            let keep = visible.iter().any(|b| b.id == id.as_str());
            if !keep {
                slot.scene.release(&mut slot.host);
            }
            keep
        });
    }

    fn card(&mut self, ui: &mut egui::Ui, lang: Language, body: &'static CelestialBody) -> bool {
        let accent = Color32::from_rgb(body.color[0], body.color[1], body.color[2]);
        let mut clicked = false;

        egui::Frame::NONE
            .stroke(Stroke::new(2.0, accent))
            .corner_radius(CornerRadius::same(10))
            .inner_margin(Margin::same(10))
            .show(ui, |ui| {
                ui.set_width(CARD_WIDTH);
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(body.name).strong().size(17.0));
                    ui.label(RichText::new(body.class.label()).weak().small());
                    ui.add_space(6.0);

                    let side = CARD_SCENE_SIZE as f32;
                    let (rect, response) =
                        ui.allocate_exact_size(egui::vec2(side, side), Sense::click());
                    let hovered = response.hovered();

                    let slot = self.cards.entry(body.id.to_string()).or_insert_with(|| {
                        CardSlot {
                            scene: Scene::new(SceneParams::for_body(
                                body,
                                CARD_SCENE_SIZE,
                                SceneVariant::Card,
                            )),
                            host: SurfaceHost::new(),
                        }
                    });
                    slot.scene.tick(ui.ctx(), &mut slot.host, hovered);
                    if let Some(texture) = slot.host.texture() {
                        ui.painter().image(
                            texture.id(),
                            rect,
                            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                            Color32::WHITE,
                        );
                    }
                    if response.clicked() {
                        clicked = true;
                    }

                    ui.add_space(6.0);
                    egui::Grid::new(("card_info", body.id))
                        .num_columns(2)
                        .spacing([14.0, 2.0])
                        .show(ui, |ui| {
                            if let Some(diameter) = body.diameter {
                                ui.label(RichText::new(tr(lang, Text::Diameter)).weak().small());
                                // the card only has room for the number
                                let short = diameter.split_whitespace().next().unwrap_or(diameter);
                                ui.label(RichText::new(short).small());
                                ui.end_row();
                            }
                            if let Some(moons) = body.moons {
                                ui.label(RichText::new(tr(lang, Text::Moons)).weak().small());
                                ui.label(RichText::new(moons).small());
                                ui.end_row();
                            }
                        });
                });
            });

        clicked
    }
}
