//! Main application entry point

use anyhow::Result;
use eframe::egui::{self, Context, Key};
use tracing::{error, info};

use pm_core::{records, AppSettings, ContentMode, ViewerContext};
use pm_ui::{CardStackView, DetailPanel, TimelineBrowserView, TimelineStripView};

/// Height of the bottom timeline strip
const STRIP_HEIGHT: f32 = 70.0;

/// Main application state
struct PrimeMinistersApp {
    /// Records, navigation engine and settings shared by every view
    viewer: ViewerContext,

    card_stack: CardStackView,
    timeline_strip: TimelineStripView,
    timeline_browser: TimelineBrowserView,
    detail: DetailPanel,
}

impl PrimeMinistersApp {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        pm_ui::apply_theme(&cc.egui_ctx);

        if let Err(err) = records::validate(records::all()) {
            error!("Record store is inconsistent: {}", err);
        }

        let viewer = ViewerContext::new(AppSettings::default());
        info!("Loaded {} records", viewer.records.len());

        Self {
            card_stack: CardStackView::new(),
            timeline_strip: TimelineStripView::new(&viewer),
            timeline_browser: TimelineBrowserView::new(&viewer),
            detail: DetailPanel::new(),
            viewer,
        }
    }

    fn handle_keyboard(&mut self, ctx: &Context) {
        let navigation = &self.viewer.navigation;
        let (escape, enter, back, forward, home, end, toggle) = ctx.input(|i| {
            (
                i.key_pressed(Key::Escape),
                i.key_pressed(Key::Enter),
                i.key_pressed(Key::ArrowUp) || i.key_pressed(Key::ArrowLeft),
                i.key_pressed(Key::ArrowDown) || i.key_pressed(Key::ArrowRight),
                i.key_pressed(Key::Home),
                i.key_pressed(Key::End),
                i.key_pressed(Key::T),
            )
        });

        if self.detail.is_open() {
            if escape {
                self.detail.close();
            }
            return;
        }

        if back {
            navigation.retreat();
        }
        if forward {
            navigation.advance();
        }
        if home {
            navigation.set_index(0);
        }
        if end {
            navigation.set_index(isize::MAX);
        }
        if toggle {
            navigation.toggle_mode();
        }
        if enter {
            self.detail.open(&self.viewer);
        }
    }
}

impl eframe::App for PrimeMinistersApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard(ctx);

        egui::TopBottomPanel::top("header")
            .show_separator_line(false)
            .show(ctx, |ui| pm_ui::header_ui(ui, &self.viewer));

        egui::TopBottomPanel::bottom("timeline_strip")
            .exact_height(STRIP_HEIGHT)
            .show_separator_line(false)
            .show(ctx, |ui| self.timeline_strip.ui(ui, &self.viewer));

        let wants_detail = egui::CentralPanel::default()
            .show(ctx, |ui| match self.viewer.navigation.mode() {
                ContentMode::CardStack => self.card_stack.ui(ui, &self.viewer),
                ContentMode::TimelineBrowser => self.timeline_browser.ui(ui, &self.viewer),
            })
            .inner;

        if wants_detail {
            self.detail.open(&self.viewer);
        }

        self.detail.show(ctx);
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting Prime Ministers of Canada");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 860.0])
            .with_min_inner_size([360.0, 640.0]),
        default_theme: eframe::Theme::Light,
        ..Default::default()
    };

    eframe::run_native(
        "Prime Ministers of Canada",
        options,
        Box::new(|cc| Box::new(PrimeMinistersApp::new(cc))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
