//! Application state: one lesson-player session.

use std::time::{Duration, Instant};

use tracing::debug;

use campus_types::ui::{IslandState, MorphEffect, ViewState};
use campus_types::{
    AnimationStep, Course, Dimensions, Lesson, SizePreset, ViewportClass, derive_dimensions,
};

use crate::catalog::{CatalogError, CourseSource};
use crate::config::CampusConfig;
use crate::progress::LessonProgress;

/// Horizontal projection from terminal cells to approximate CSS pixels, used
/// to classify the viewport from the terminal's column count.
pub const CELL_PIXEL_WIDTH: u16 = 8;

/// Lesson grid columns on the dashboard.
pub const GRID_COLUMNS: usize = 4;

/// Duration of the island footprint morph between presets.
const MORPH_DURATION: Duration = Duration::from_millis(300);

/// Delay before the island settles after a lesson change.
const SETTLE_DELAY_MS: u64 = 150;

/// Items in the header dropdown menu, in display order.
pub const NAV_MENU_ITEMS: [&str; 2] = ["Address", "Logout"];

/// Which part of the screen owns key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Lessons,
    NavMenu,
}

/// Current screen, mirroring the platform's routes. The footer renders only
/// on routes outside the explore/dashboard/view/certificate families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    Courses,
    #[default]
    Dashboard,
    Certificate,
}

impl Route {
    #[must_use]
    pub fn footer_visible(self) -> bool {
        matches!(self, Route::Courses)
    }
}

/// Header dropdown state.
#[derive(Debug, Clone, Copy, Default)]
pub struct NavMenu {
    pub open: bool,
    pub selected: usize,
}

impl NavMenu {
    pub fn next(&mut self) {
        self.selected = (self.selected + 1) % NAV_MENU_ITEMS.len();
    }

    pub fn prev(&mut self) {
        self.selected = (self.selected + NAV_MENU_ITEMS.len() - 1) % NAV_MENU_ITEMS.len();
    }
}

/// The whole application state for one run.
#[derive(Debug)]
pub struct App {
    course: Course,
    progress: LessonProgress,
    island: IslandState,
    nav_menu: NavMenu,
    focus: Focus,
    route: Route,
    view: ViewState,
    should_quit: bool,
}

impl App {
    /// Build a session for the configured course.
    pub fn new(source: &dyn CourseSource, config: &CampusConfig) -> Result<Self, CatalogError> {
        let course = source.fetch_course(config.course_id())?;
        let progress = LessonProgress::new(course.lesson_count());
        let island = IslandState::new(config.island_config());
        debug!(course = %course.id, lessons = course.lesson_count(), "session created");

        Ok(Self {
            course,
            progress,
            island,
            nav_menu: NavMenu::default(),
            focus: Focus::default(),
            route: Route::default(),
            view: ViewState::new(config.ui_options()),
            should_quit: false,
        })
    }

    // ------------------------------------------------------------------
    // Read accessors for the view layer
    // ------------------------------------------------------------------

    #[must_use]
    pub fn course(&self) -> &Course {
        &self.course
    }

    #[must_use]
    pub fn progress(&self) -> &LessonProgress {
        &self.progress
    }

    #[must_use]
    pub fn island(&self) -> &IslandState {
        &self.island
    }

    pub fn island_mut(&mut self) -> &mut IslandState {
        &mut self.island
    }

    #[must_use]
    pub fn nav_menu(&self) -> NavMenu {
        self.nav_menu
    }

    #[must_use]
    pub fn focus(&self) -> Focus {
        self.focus
    }

    #[must_use]
    pub fn route(&self) -> Route {
        self.route
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    #[must_use]
    pub fn active_lesson(&self) -> &Lesson {
        &self.course.lessons[self.progress.active()]
    }

    #[must_use]
    pub fn all_lessons_completed(&self) -> bool {
        self.progress.all_completed()
    }

    /// Pixel footprint of the island at its current size and viewport.
    #[must_use]
    pub fn island_dimensions(&self) -> Dimensions {
        derive_dimensions(self.island.size(), self.view.viewport)
    }

    /// Pixel footprint the island is morphing away from.
    #[must_use]
    pub fn island_previous_dimensions(&self) -> Dimensions {
        derive_dimensions(self.island.previous_size(), self.view.viewport)
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Activate a lesson (marking it viewed) and bounce the island through a
    /// compact flash into the now-playing bar. Completing the final lesson
    /// swaps the settle target for the certificate call-out.
    pub fn select_lesson(&mut self, index: usize) {
        if index >= self.course.lesson_count() {
            return;
        }
        let was_complete = self.progress.all_completed();
        self.progress.select(index);

        let settle = if self.progress.all_completed() && !was_complete {
            SizePreset::CompactLong
        } else {
            SizePreset::Large
        };
        self.island.schedule_animation([
            AnimationStep::immediate(SizePreset::Compact),
            AnimationStep::new(settle, SETTLE_DELAY_MS),
        ]);
    }

    pub fn select_next_lesson(&mut self) {
        let next = self.progress.active() + 1;
        if next < self.course.lesson_count() {
            self.select_lesson(next);
        }
    }

    pub fn select_prev_lesson(&mut self) {
        if let Some(prev) = self.progress.active().checked_sub(1) {
            self.select_lesson(prev);
        }
    }

    /// Move one grid row down.
    pub fn select_lesson_below(&mut self) {
        let below = self.progress.active() + GRID_COLUMNS;
        if below < self.course.lesson_count() {
            self.select_lesson(below);
        }
    }

    /// Move one grid row up.
    pub fn select_lesson_above(&mut self) {
        if let Some(above) = self.progress.active().checked_sub(GRID_COLUMNS) {
            self.select_lesson(above);
        }
    }

    /// Direct island assignment, with the render morph restarted.
    pub fn set_island_size(&mut self, size: SizePreset) {
        let from = self.island.size();
        self.island.set_size(size);
        if from != size {
            self.start_morph(from);
        }
    }

    pub fn toggle_menu(&mut self) {
        self.nav_menu.open = !self.nav_menu.open;
        self.nav_menu.selected = 0;
        self.focus = if self.nav_menu.open {
            Focus::NavMenu
        } else {
            Focus::Lessons
        };
    }

    pub fn close_menu(&mut self) {
        self.nav_menu.open = false;
        self.focus = Focus::Lessons;
    }

    pub fn menu_next(&mut self) {
        self.nav_menu.next();
    }

    pub fn menu_prev(&mut self) {
        self.nav_menu.prev();
    }

    /// Act on the highlighted menu item. "Address" is an inert affordance;
    /// "Logout" ends the session.
    pub fn menu_activate(&mut self) {
        let item = NAV_MENU_ITEMS[self.nav_menu.selected];
        debug!(item, "menu item activated");
        self.close_menu();
        if item == "Logout" {
            self.quit();
        }
    }

    /// Open the certificate screen. Only reachable once every lesson has been
    /// viewed.
    pub fn open_certificate(&mut self) {
        if self.all_lessons_completed() {
            self.route = Route::Certificate;
            self.set_island_size(SizePreset::Empty);
        }
    }

    pub fn back_to_dashboard(&mut self) {
        self.route = Route::Dashboard;
    }

    pub fn back_to_courses(&mut self) {
        self.close_menu();
        self.route = Route::Courses;
    }

    /// Reclassify the viewport from the terminal's column count.
    pub fn set_viewport_cols(&mut self, cols: u16) {
        let px = cols.saturating_mul(CELL_PIXEL_WIDTH);
        let class = ViewportClass::from_width(px);
        if class != self.view.viewport {
            debug!(?class, px, "viewport reclassified");
        }
        self.view.viewport_px = px;
        self.view.viewport = class;
    }

    // ------------------------------------------------------------------
    // Frame ticking
    // ------------------------------------------------------------------

    /// Advance animation state by the time since the last frame.
    pub fn tick(&mut self) {
        let delta = self.frame_elapsed();
        self.advance(delta);
    }

    /// Advance animation state by an explicit delta (deterministic path used
    /// by tests; `tick` feeds it the wall-clock frame delta).
    pub fn advance(&mut self, delta: Duration) {
        let before = self.island.size();
        self.island.advance(delta);
        if self.island.size() != before {
            self.start_morph(before);
        }

        if let Some(morph) = &mut self.view.morph {
            morph.advance(delta);
            if morph.is_finished() {
                self.view.morph = None;
            }
        }
    }

    fn frame_elapsed(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.view.last_frame);
        self.view.last_frame = now;
        elapsed
    }

    fn start_morph(&mut self, from: SizePreset) {
        if self.view.ui_options.reduced_motion {
            self.view.morph = None;
            return;
        }
        self.view.morph = Some(MorphEffect::new(from, self.island.size(), MORPH_DURATION));
    }
}
