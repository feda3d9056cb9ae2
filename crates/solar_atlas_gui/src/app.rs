// src/app.rs
//
// The application shell: cross-cutting state (selected body, view mode,
// theme, language), the header and nav bar, the status strip, and eager
// session persistence. Theme and language are plain fields handed down to
// the views every frame; nothing reads them ambiently.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use egui::RichText;
use solar_atlas_core::i18n::{Language, Text, tr};
use solar_atlas_core::session::{self, Session};

use crate::detail::DetailView;
use crate::gallery::GalleryView;
use crate::theme::Theme;
use crate::util::truncate_ellipsis;

const SEARCH_DELAY: Duration = Duration::from_millis(500);

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ViewMode {
    #[default]
    Form,
    Gallery,
}

impl ViewMode {
    fn parse(value: &str) -> ViewMode {
        match value.trim() {
            "gallery" => ViewMode::Gallery,
            _ => ViewMode::Form,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            ViewMode::Form => "form",
            ViewMode::Gallery => "gallery",
        }
    }
}

pub struct AtlasApp {
    session_path: Option<PathBuf>,

    // Cross-cutting UI state, injected into the views each frame
    language: Language,
    theme: Theme,
    view: ViewMode,
    selected: String,

    // Form-mode search box and its artificial delay
    search_input: String,
    search_pending_until: Option<Instant>,

    detail: DetailView,
    gallery: GalleryView,

    // Status strip
    status: String,
    status_deadline: Option<Instant>,
    ready_status: &'static str,

    // Startup banner
    boot_lines: Vec<&'static str>,
    boot_step: usize,
    boot_next: Option<Instant>,
}

impl AtlasApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let session_path = match session::default_session_path() {
            Ok(path) => Some(path),
            Err(err) => {
                log::warn!("session persistence disabled: {err:#}");
                None
            }
        };
        let stored = session_path
            .as_deref()
            .map(session::load)
            .unwrap_or_default();

        let theme = Theme::parse(&stored.theme);
        let language = Language::parse(&stored.language);
        let view = ViewMode::parse(&stored.view);
        let selected = if stored.planet.trim().is_empty() {
            Session::default().planet
        } else {
            stored.planet
        };

        theme.apply(&cc.egui_ctx);

        let boot_lines = vec![
            "Aligning the telescope...",
            "Loading the celestial catalog...",
            "Atlas online.",
        ];
        let status = boot_lines.first().copied().unwrap_or_default().to_string();

        Self {
            session_path,
            language,
            theme,
            view,
            search_input: selected.clone(),
            selected,
            search_pending_until: None,
            detail: DetailView::default(),
            gallery: GalleryView::default(),
            status,
            status_deadline: None,
            ready_status: "Atlas ready.",
            boot_lines,
            boot_step: 0,
            boot_next: Some(Instant::now() + Duration::from_millis(300)),
        }
    }

    fn app_version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    /// Writes the four session strings. Called on every state change.
    fn persist(&self) {
        let Some(path) = &self.session_path else {
            return;
        };
        let snapshot = Session {
            planet: self.selected.clone(),
            theme: self.theme.as_str().to_string(),
            language: self.language.code().to_string(),
            view: self.view.as_str().to_string(),
        };
        if let Err(err) = session::save(path, &snapshot) {
            log::error!("failed to persist session: {err:#}");
        }
    }

    fn set_status_ttl(&mut self, msg: impl Into<String>, ttl: Duration) {
        self.status = msg.into();
        self.status_deadline = Some(Instant::now() + ttl);
    }

    fn tick_status_deadline(&mut self) {
        if let Some(deadline) = self.status_deadline
            && Instant::now() >= deadline
        {
            self.status = self.ready_status.to_string();
            self.status_deadline = None;
        }
    }

    fn tick_bootstrap(&mut self, ctx: &egui::Context) {
        let Some(next) = self.boot_next else {
            return;
        };

        let now = Instant::now();
        if now >= next {
            let next_step = self.boot_step + 1;
            if next_step < self.boot_lines.len() {
                self.boot_step = next_step;
                self.status = self.boot_lines[self.boot_step].to_string();
                self.boot_next = Some(now + Duration::from_millis(300));
            } else {
                self.boot_next = None;
                self.status = self.ready_status.to_string();
            }
        }

        if self.boot_next.is_some() {
            ctx.request_repaint();
        }
    }

    fn switch_view(&mut self, view: ViewMode) {
        if self.view == view {
            return;
        }
        self.view = view;
        if view == ViewMode::Gallery {
            self.gallery.reset_loading();
        }
        self.persist();
    }

    fn select_body(&mut self, name: &str) {
        self.selected = name.to_string();
        self.search_input = name.to_string();
        self.view = ViewMode::Form;
        self.persist();
        self.set_status_ttl(
            format!("Selected: {}", truncate_ellipsis(name, 40)),
            Duration::from_secs(3),
        );
    }

    fn submit_search(&mut self) {
        let name = self.search_input.trim().to_string();
        if name.is_empty() {
            return;
        }
        self.selected = name;
        self.persist();
        self.search_pending_until = Some(Instant::now() + SEARCH_DELAY);
    }

    fn header(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.heading(tr(self.language, Text::Title));
                ui.label(RichText::new(tr(self.language, Text::Subtitle)).weak());
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                // reversed: right_to_left lays the last language out first
                for lang in Language::ALL.iter().rev() {
                    let active = self.language == *lang;
                    if ui
                        .selectable_label(active, lang.code().to_uppercase())
                        .clicked()
                        && !active
                    {
                        self.language = *lang;
                        self.persist();
                    }
                }
                ui.label(format!("{}:", tr(self.language, Text::LanguageName)));

                ui.separator();

                if ui
                    .button(self.theme.icon())
                    .on_hover_text(tr(self.language, Text::Theme))
                    .clicked()
                {
                    self.theme = self.theme.toggled();
                    self.theme.apply(ctx);
                    self.persist();
                }
                ui.label(format!("{}:", tr(self.language, Text::Theme)));
            });
        });

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            if ui
                .add_enabled(
                    self.view != ViewMode::Form,
                    egui::Button::new(tr(self.language, Text::ViewDetails)),
                )
                .clicked()
            {
                self.switch_view(ViewMode::Form);
            }
            if ui
                .add_enabled(
                    self.view != ViewMode::Gallery,
                    egui::Button::new(tr(self.language, Text::ViewGallery)),
                )
                .clicked()
            {
                self.switch_view(ViewMode::Gallery);
            }
        });
        ui.add_space(6.0);
    }

    fn form_mode(&mut self, ui: &mut egui::Ui) {
        let searching = self
            .search_pending_until
            .is_some_and(|until| Instant::now() < until);

        ui.horizontal(|ui| {
            let response = ui.add_enabled(
                !searching,
                egui::TextEdit::singleline(&mut self.search_input)
                    .hint_text(tr(self.language, Text::SearchHint))
                    .desired_width(340.0),
            );
            let submitted =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            let label = if searching {
                tr(self.language, Text::Searching)
            } else {
                tr(self.language, Text::SearchButton)
            };
            if ui.add_enabled(!searching, egui::Button::new(label)).clicked() || submitted {
                self.submit_search();
            }
        });
        ui.add_space(10.0);

        if searching {
            ui.add_space(36.0);
            ui.vertical_centered(|ui| {
                ui.add(egui::Spinner::new().size(32.0));
            });
            ui.ctx().request_repaint();
            return;
        }
        self.search_pending_until = None;

        let language = self.language;
        let selected = self.selected.clone();
        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                self.detail.ui(ui, language, &selected);
            });
    }

    fn gallery_mode(&mut self, ui: &mut egui::Ui) {
        let language = self.language;
        let mut picked = None;
        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                picked = self.gallery.ui(ui, language);
            });
        if let Some(name) = picked {
            self.select_body(name);
        }
    }
}

impl eframe::App for AtlasApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.tick_bootstrap(ctx);
        self.tick_status_deadline();

        ctx.send_viewport_cmd(egui::ViewportCommand::Title(format!(
            "Solar Atlas — {}",
            self.selected
        )));

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            self.header(ctx, ui);
        });

        // Altezza fissa per la barra di stato
        const STATUS_BAR_HEIGHT: f32 = 26.0;
        egui::TopBottomPanel::bottom("status_bar")
            .resizable(false)
            .exact_height(STATUS_BAR_HEIGHT)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        RichText::new(format!("v{}", Self::app_version()))
                            .monospace()
                            .color(ui.visuals().weak_text_color()),
                    );
                    ui.separator();
                    ui.label(RichText::new(&self.status).weak());
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| match self.view {
            ViewMode::Form => self.form_mode(ui),
            ViewMode::Gallery => self.gallery_mode(ui),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::ViewMode;

    #[test]
    fn view_mode_parse_round_trips_and_defaults_to_form() {
        for mode in [ViewMode::Form, ViewMode::Gallery] {
            assert_eq!(ViewMode::parse(mode.as_str()), mode);
        }
        assert_eq!(ViewMode::parse("carousel"), ViewMode::Form);
        assert_eq!(ViewMode::parse(""), ViewMode::Form);
    }
}
