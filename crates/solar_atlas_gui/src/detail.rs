//! The detail view: one body's record, its spinning globe, and the optional
//! picture of the day.
//!
//! The supplementary fetch runs once per selection on a worker thread and is
//! polled over a channel; any failure leaves the section absent without a
//! visible error. A selected name missing from the catalog is the terminal
//! "not found" state, distinct from loading.

use std::sync::mpsc;
use std::thread;

use anyhow::{Context as _, Result};
use egui::{ColorImage, RichText, TextureHandle, TextureOptions};
use solar_atlas_core::apod::{self, Apod, MediaKind};
use solar_atlas_core::catalog::{CelestialBody, body_by_name};
use solar_atlas_core::i18n::{Language, Text, tr};

use crate::scene::{Scene, SceneParams, SceneVariant, SurfaceHost};
use crate::util::truncate_ellipsis;

const SCENE_SIZE: usize = 350;
const PICTURE_MAX_EDGE: u32 = 1600;

struct FetchedApod {
    record: Apod,
    picture: Option<ColorImage>,
}

struct ReadyApod {
    record: Apod,
    picture: Option<TextureHandle>,
}

enum ApodStatus {
    Idle,
    Pending(mpsc::Receiver<Option<FetchedApod>>),
    Ready(Box<ReadyApod>),
    Unavailable,
}

pub struct DetailView {
    scene: Option<Scene>,
    host: SurfaceHost,
    apod: ApodStatus,
    apod_for: Option<String>,
}

impl Default for DetailView {
    fn default() -> Self {
        Self {
            scene: None,
            host: SurfaceHost::new(),
            apod: ApodStatus::Idle,
            apod_for: None,
        }
    }
}

impl DetailView {
    pub fn ui(&mut self, ui: &mut egui::Ui, lang: Language, selected: &str) {
        let Some(body) = body_by_name(selected) else {
            self.teardown();
            ui.add_space(24.0);
            ui.vertical_centered(|ui| {
                ui.colored_label(
                    ui.visuals().error_fg_color,
                    RichText::new(tr(lang, Text::NotFound)).size(18.0),
                );
            });
            return;
        };

        if self.apod_for.as_deref() != Some(selected) {
            self.start_fetch(ui.ctx(), selected);
        }
        self.poll_fetch(ui.ctx());

        let accent = egui::Color32::from_rgb(body.color[0], body.color[1], body.color[2]);

        ui.horizontal_top(|ui| {
            ui.vertical(|ui| {
                ui.set_width(SCENE_SIZE as f32 + 20.0);
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(body.name).size(28.0).strong().color(accent));
                    ui.label(RichText::new(body.class.label()).weak());
                    ui.add_space(8.0);
                    self.globe(ui, body);
                });
            });

            ui.separator();

            ui.vertical(|ui| {
                ui.label(RichText::new(tr(lang, Text::Description)).strong().size(18.0));
                ui.add_space(4.0);
                ui.label(body.description(lang));

                ui.add_space(12.0);
                ui.label(
                    RichText::new(tr(lang, Text::Characteristics))
                        .strong()
                        .size(18.0),
                );
                ui.add_space(4.0);
                egui::Grid::new("characteristics")
                    .num_columns(2)
                    .spacing([18.0, 6.0])
                    .striped(true)
                    .show(ui, |ui| {
                        for (key, value) in body.characteristics() {
                            ui.label(RichText::new(tr(lang, key)).weak());
                            ui.label(value);
                            ui.end_row();
                        }
                    });
            });
        });

        self.picture_of_the_day(ui, lang);
    }

    fn globe(&mut self, ui: &mut egui::Ui, body: &CelestialBody) {
        let desired = SceneParams::for_body(body, SCENE_SIZE, SceneVariant::Detail);
        if self.scene.as_ref().map(Scene::params) != Some(&desired) {
            if let Some(mut old) = self.scene.take() {
                old.release(&mut self.host);
            }
            self.scene = Some(Scene::new(desired));
        }

        if let Some(scene) = self.scene.as_mut() {
            scene.tick(ui.ctx(), &mut self.host, false);
        }
        if let Some(texture) = self.host.texture() {
            let side = SCENE_SIZE as f32;
            ui.add(egui::Image::new((texture.id(), egui::vec2(side, side))));
        }
    }

    fn picture_of_the_day(&mut self, ui: &mut egui::Ui, lang: Language) {
        let ApodStatus::Ready(ready) = &self.apod else {
            return;
        };

        ui.add_space(18.0);
        ui.separator();
        ui.add_space(8.0);
        ui.label(
            RichText::new(format!("🌌 {}", tr(lang, Text::PictureOfTheDay)))
                .strong()
                .size(20.0),
        );
        ui.add_space(6.0);

        match ready.record.kind() {
            Some(MediaKind::Image) => {
                if let Some(texture) = &ready.picture {
                    let [w, h] = texture.size();
                    let shown_w = ui.available_width().min(720.0);
                    let shown_h = shown_w * h as f32 / w as f32;
                    ui.add(egui::Image::new((
                        texture.id(),
                        egui::vec2(shown_w, shown_h),
                    )));
                }
            }
            Some(MediaKind::Video) => {
                ui.hyperlink_to(
                    truncate_ellipsis(&ready.record.url, 72),
                    ready.record.url.clone(),
                );
            }
            None => {}
        }

        ui.add_space(4.0);
        ui.label(RichText::new(&ready.record.title).strong());
        ui.label(
            RichText::new(format!(
                "{}: {}",
                tr(lang, Text::PictureDate),
                display_date(&ready.record.date)
            ))
            .weak(),
        );
        ui.add_space(4.0);
        ui.label(&ready.record.explanation);
    }

    /// Starts the once-per-selection background fetch. The receiver of a
    /// superseded fetch is simply dropped; the worker's send then fails
    /// silently and the thread exits.
    fn start_fetch(&mut self, ctx: &egui::Context, name: &str) {
        self.apod_for = Some(name.to_string());
        let (tx, rx) = mpsc::channel();
        let ctx = ctx.clone();

        thread::spawn(move || {
            let outcome =
                apod::supplementary(apod::fetch(apod::APOD_ENDPOINT, apod::DEMO_KEY)).map(
                    |record| {
                        let picture = match record.kind() {
                            Some(MediaKind::Image) => match download_picture(&record.url) {
                                Ok(image) => Some(image),
                                Err(err) => {
                                    log::debug!("picture download failed: {err:#}");
                                    None
                                }
                            },
                            _ => None,
                        };
                        FetchedApod { record, picture }
                    },
                );
            let _ = tx.send(outcome);
            ctx.request_repaint();
        });

        self.apod = ApodStatus::Pending(rx);
    }

    fn poll_fetch(&mut self, ctx: &egui::Context) {
        let ApodStatus::Pending(rx) = &self.apod else {
            return;
        };
        match rx.try_recv() {
            Ok(Some(fetched)) => {
                let picture = fetched.picture.map(|image| {
                    ctx.load_texture("picture_of_the_day", image, TextureOptions::LINEAR)
                });
                self.apod = ApodStatus::Ready(Box::new(ReadyApod {
                    record: fetched.record,
                    picture,
                }));
            }
            Ok(None) | Err(mpsc::TryRecvError::Disconnected) => {
                self.apod = ApodStatus::Unavailable;
            }
            Err(mpsc::TryRecvError::Empty) => {}
        }
    }

    /// Releases the globe and forgets any supplementary content. Used for
    /// the not-found state; safe to call repeatedly.
    fn teardown(&mut self) {
        if let Some(mut scene) = self.scene.take() {
            scene.release(&mut self.host);
        }
        self.host.clear();
        self.apod = ApodStatus::Idle;
        self.apod_for = None;
    }
}

fn download_picture(url: &str) -> Result<ColorImage> {
    let bytes = reqwest::blocking::get(url)
        .context("Failed to download the picture of the day")?
        .error_for_status()
        .context("Picture download returned error status")?
        .bytes()
        .context("Failed to read picture bytes")?;

    let decoded = image::load_from_memory(&bytes).context("Failed to decode the picture")?;
    let decoded = if decoded.width() > PICTURE_MAX_EDGE || decoded.height() > PICTURE_MAX_EDGE {
        decoded.thumbnail(PICTURE_MAX_EDGE, PICTURE_MAX_EDGE)
    } else {
        decoded
    };

    let rgba = decoded.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

/// "2026-08-07" → "07 Aug 2026"; anything unparseable is shown as-is.
fn display_date(raw: &str) -> String {
    match chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%d %b %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::display_date;

    #[test]
    fn dates_render_human_readable_with_raw_fallback() {
        assert_eq!(display_date("2026-08-07"), "07 Aug 2026");
        assert_eq!(display_date("yesterday"), "yesterday");
    }
}
