mod engine_config;
mod fence_normalizer;
mod render_pass;

pub use engine_config::DiagramEngineConfig;
pub use fence_normalizer::normalize_fences;

use std::time::Instant;

use tracing::{debug, warn};

use crate::core::DebounceScheduler;
use crate::dom::Document;
use crate::error::DiagramResult;
use crate::render::{DiagramRenderer, LibraryLoader};
use crate::style::StyleEngine;
use crate::theme::RenderConfig;

/// Load state of the external rendering library.
enum LibraryState<R> {
    Absent { requested: bool },
    Ready(R),
}

/// Counters exposed for host diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineStats {
    /// Render passes that actually reached the backend.
    pub render_passes: u64,
    /// Change triggers deferred into the debounce window.
    pub deferred_triggers: u64,
    /// Library fetches requested from the loader.
    pub library_requests: u64,
}

/// Orchestrates fence normalization, theme sampling, and debounced
/// (re-)rendering over a lazily loaded external diagram library.
///
/// The engine is a state machine over library-absent and library-ready.
/// It never blocks: library fetch completion and timer expiry are delivered
/// by the host through [`DiagramEngine::library_loaded`] and
/// [`DiagramEngine::tick`].
pub struct DiagramEngine<R: DiagramRenderer, L: LibraryLoader> {
    config: DiagramEngineConfig,
    library: LibraryState<R>,
    loader: L,
    scheduler: DebounceScheduler,
    stats: EngineStats,
    last_render_config: Option<RenderConfig>,
    fences_normalized: bool,
}

impl<R: DiagramRenderer, L: LibraryLoader> DiagramEngine<R, L> {
    pub fn new(loader: L, config: DiagramEngineConfig) -> DiagramResult<Self> {
        config.validate()?;
        let scheduler = DebounceScheduler::new(config.debounce_window());
        Ok(Self {
            config,
            library: LibraryState::Absent { requested: false },
            loader,
            scheduler,
            stats: EngineStats::default(),
            last_render_config: None,
            fences_normalized: false,
        })
    }

    /// Engine whose library is already present at construction, for hosts
    /// that bundle the renderer. [`DiagramEngine::boot`] then renders
    /// immediately instead of requesting a fetch.
    pub fn new_with_library(
        renderer: R,
        loader: L,
        config: DiagramEngineConfig,
    ) -> DiagramResult<Self> {
        let mut engine = Self::new(loader, config)?;
        engine.library = LibraryState::Ready(renderer);
        Ok(engine)
    }

    /// Page-ready entry point. Always normalizes fences first, then renders
    /// immediately when the library is ready, or requests a fetch when it is
    /// absent and none is outstanding.
    ///
    /// Returns whether a render pass ran.
    pub fn boot(
        &mut self,
        page: &mut Document,
        styles: &impl StyleEngine,
    ) -> DiagramResult<bool> {
        self.normalize(page);
        match &mut self.library {
            LibraryState::Ready(_) => self.render(page, styles),
            LibraryState::Absent { requested } if !*requested => {
                *requested = true;
                self.stats.library_requests += 1;
                self.loader.request(&self.config.library_source);
                Ok(false)
            }
            LibraryState::Absent { .. } => Ok(false),
        }
    }

    /// Delivers a successfully loaded library and renders with it.
    pub fn library_loaded(
        &mut self,
        renderer: R,
        page: &mut Document,
        styles: &impl StyleEngine,
    ) -> DiagramResult<()> {
        self.library = LibraryState::Ready(renderer);
        self.render(page, styles).map(|_| ())
    }

    /// Reports a failed library fetch. Diagrams stay unrendered and nothing
    /// is retried automatically; a later explicit [`DiagramEngine::boot`]
    /// may request again.
    pub fn library_load_failed(&mut self, reason: &str) {
        warn!(
            source = %self.config.library_source,
            reason,
            "diagram library failed to load"
        );
        if matches!(self.library, LibraryState::Absent { .. }) {
            self.library = LibraryState::Absent { requested: false };
        }
    }

    /// OS/browser dark-light preference changed.
    pub fn notify_color_scheme_change(&mut self, now: Instant) {
        self.defer(now);
    }

    /// A DOM mutation (attribute, subtree, or child list) was observed.
    pub fn notify_mutation(&mut self, now: Instant) {
        self.defer(now);
    }

    /// Runs the deferred render once its debounce window has elapsed.
    ///
    /// Returns whether a render pass ran.
    pub fn tick(
        &mut self,
        page: &mut Document,
        styles: &impl StyleEngine,
        now: Instant,
    ) -> DiagramResult<bool> {
        if !self.scheduler.fire_if_due(now) {
            return Ok(false);
        }
        self.render(page, styles)
    }

    /// Manual re-render entry point for callers outside the normal trigger
    /// set. Returns whether a render pass ran.
    pub fn force_render(
        &mut self,
        page: &mut Document,
        styles: &impl StyleEngine,
    ) -> DiagramResult<bool> {
        self.render(page, styles)
    }

    #[must_use]
    pub fn stats(&self) -> EngineStats {
        self.stats
    }

    #[must_use]
    pub fn config(&self) -> &DiagramEngineConfig {
        &self.config
    }

    #[must_use]
    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Configuration handed to the backend on the most recent render pass.
    #[must_use]
    pub fn last_render_config(&self) -> Option<&RenderConfig> {
        self.last_render_config.as_ref()
    }

    #[must_use]
    pub fn is_library_ready(&self) -> bool {
        matches!(self.library, LibraryState::Ready(_))
    }

    #[must_use]
    pub fn is_render_scheduled(&self) -> bool {
        self.scheduler.is_armed()
    }

    fn defer(&mut self, now: Instant) {
        self.stats.deferred_triggers += 1;
        self.scheduler.defer(now);
    }

    fn normalize(&mut self, page: &mut Document) {
        normalize_fences(
            page,
            &self.config.fence_language_class,
            &self.config.container_class,
        );
        self.fences_normalized = true;
    }

    fn render(
        &mut self,
        page: &mut Document,
        styles: &impl StyleEngine,
    ) -> DiagramResult<bool> {
        // Normalization must precede the first render attempt, whichever
        // entry point reaches it first.
        if !self.fences_normalized {
            self.normalize(page);
        }
        let LibraryState::Ready(renderer) = &mut self.library else {
            debug!("render skipped: library absent");
            return Ok(false);
        };
        let render_config = render_pass::run_render_pass(renderer, page, styles, &self.config)?;
        self.last_render_config = Some(render_config);
        self.stats.render_passes += 1;
        Ok(true)
    }
}
