//! Buttons and forms of the build interface.
//!
//! There is a single [`Button`] type; a [`ButtonRole`] decides what it shows
//! and what a click does. Buttons hold a weak handle to the controller, so
//! once the controller is gone every button renders empty and ignores
//! clicks.

use build_core::components::{DroidId, StructureStatsId};
use build_core::facade::GameFacade;
use tracing::warn;

use crate::controller::{SharedController, WeakController};
use crate::mode::MouseButton;
use crate::settings::BuildMenuSettings;

/// Power points represented by one unit of the cost bar.
pub const POWERPOINTS_DROIDDIV: u32 = 5;

/// Range of the cost bar.
pub const GAME_TICKS_PER_SEC: u32 = 1000;

const OBSOLETE_TIPS: [&str; 2] = ["Hiding Obsolete Tech", "Showing Obsolete Tech"];
const FAVORITE_TIPS: [&str; 2] = [
    "Showing All Tech\nRight-click to add to Favorites",
    "Showing Only Favorite Tech\nRight-click to remove from Favorites",
];

/// What a button stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonRole {
    /// Builder portrait at a builder list position.
    Object(usize),
    /// Current activity of the builder at a builder list position.
    Stats(usize),
    /// Build option at an option list position.
    Option(usize),
}

/// What a button shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonFace {
    /// Nothing.
    Empty,
    /// A droid model.
    Droid(DroidId),
    /// A structure model with its name.
    Structure {
        /// Catalog entry.
        stats: StructureStatsId,
        /// Display name.
        name: String,
    },
}

/// Horizontal bar under a build option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarGraph {
    /// Filled length. Not clamped; the bar draws at most `range`.
    pub major_size: u32,
    /// Full length.
    pub range: u32,
}

/// A button of the build interface.
#[derive(Debug, Clone)]
pub struct Button {
    role: ButtonRole,
    controller: WeakController,
}

impl Button {
    /// Create a button for `role`.
    #[must_use]
    pub fn new(controller: WeakController, role: ButtonRole) -> Self {
        Self { role, controller }
    }

    /// What this button stands for.
    #[must_use]
    pub fn role(&self) -> ButtonRole {
        self.role
    }

    fn controller(&self) -> Option<SharedController> {
        self.controller.upgrade()
    }

    /// What the button currently shows.
    #[must_use]
    pub fn face(&self) -> ButtonFace {
        let Some(controller) = self.controller() else {
            return ButtonFace::Empty;
        };
        let controller = controller.borrow();

        match self.role {
            ButtonRole::Object(index) => {
                let alive = controller
                    .object_at(index)
                    .filter(|&id| controller.game().droid(id).is_some_and(|d| d.is_alive()));
                alive.map_or(ButtonFace::Empty, ButtonFace::Droid)
            }
            ButtonRole::Stats(index) => {
                structure_face(&*controller.game(), controller.object_stats_at(index))
            }
            ButtonRole::Option(index) => {
                structure_face(&*controller.game(), controller.stats_at(index))
            }
        }
    }

    /// Whether the button is drawn highlighted.
    #[must_use]
    pub fn is_selected(&self) -> bool {
        let Some(controller) = self.controller() else {
            return false;
        };
        let controller = controller.borrow();

        match self.role {
            ButtonRole::Object(index) => {
                controller.object_at(index).is_some()
                    && controller.object_at(index) == controller.selected_builder()
            }
            ButtonRole::Stats(index) => {
                let Some(id) = controller.object_at(index) else {
                    return false;
                };
                let flagged = controller.game().droid(id).is_some_and(|d| d.selected);
                flagged || controller.selected_builder() == Some(id)
            }
            ButtonRole::Option(index) => {
                controller.stats_at(index).is_some()
                    && controller.stats_at(index) == controller.highlighted_stats()
            }
        }
    }

    /// Tooltip, for build options.
    #[must_use]
    pub fn tooltip(&self) -> Option<String> {
        let ButtonRole::Option(index) = self.role else {
            return None;
        };
        let controller = self.controller()?;
        let controller = controller.borrow();
        let stats_id = controller.stats_at(index)?;
        let game = controller.game();
        let stats = game.catalog().get(stats_id)?;
        Some(format!("{}\nCost: {}", stats.name, stats.power_to_build))
    }

    /// Cost bar, for build options.
    #[must_use]
    pub fn cost_bar(&self) -> Option<BarGraph> {
        let ButtonRole::Option(index) = self.role else {
            return None;
        };
        let controller = self.controller()?;
        let controller = controller.borrow();
        let stats_id = controller.stats_at(index)?;
        let game = controller.game();
        let power = game.catalog().get(stats_id)?.power_to_build;
        Some(BarGraph {
            major_size: power / POWERPOINTS_DROIDDIV,
            range: GAME_TICKS_PER_SEC,
        })
    }

    /// Handle a click.
    ///
    /// Builder buttons select the builder on a primary click; the portrait
    /// also moves the camera to it. Build options start placement on a
    /// primary click and toggle the favorite flag on a secondary click.
    ///
    /// Must not be called while the host is borrowed: starting placement
    /// borrows it mutably. Hosts hand out clones for this, see
    /// [`HeadlessHost::option_button`](crate::host::HeadlessHost::option_button).
    pub fn clicked(&self, button: MouseButton) {
        let Some(controller) = self.controller() else {
            return;
        };

        match self.role {
            ButtonRole::Object(index) => {
                let droid = controller.borrow().object_at(index);
                if let (Some(droid), MouseButton::Primary) = (droid, button) {
                    let mut controller = controller.borrow_mut();
                    controller.select_builder(droid);
                    controller.jump_to_selected_builder();
                }
            }
            ButtonRole::Stats(index) => {
                let droid = controller.borrow().object_at(index);
                if let (Some(droid), MouseButton::Primary) = (droid, button) {
                    controller.borrow_mut().select_builder(droid);
                }
            }
            ButtonRole::Option(index) => {
                let stats = controller.borrow().stats_at(index);
                let Some(stats) = stats else {
                    warn!("Ignoring click on stale build option {index}");
                    return;
                };
                match button {
                    MouseButton::Primary => controller.borrow_mut().start_build_position(stats),
                    MouseButton::Secondary => controller.borrow_mut().add_to_favorites(stats),
                }
            }
        }
    }
}

fn structure_face(game: &dyn GameFacade, stats: Option<StructureStatsId>) -> ButtonFace {
    stats
        .and_then(|id| game.catalog().get(id))
        .map_or(ButtonFace::Empty, |s| ButtonFace::Structure {
            stats: s.index,
            name: s.name.clone(),
        })
}

/// Two-state toggle with a tooltip per state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipleChoiceButton {
    choice: bool,
    tips: [&'static str; 2],
}

impl MultipleChoiceButton {
    fn new(choice: bool, tips: [&'static str; 2]) -> Self {
        Self { choice, tips }
    }

    /// Current state.
    #[must_use]
    pub fn choice(&self) -> bool {
        self.choice
    }

    /// Set the state.
    pub fn set_choice(&mut self, choice: bool) {
        self.choice = choice;
    }

    /// Tooltip for the current state.
    #[must_use]
    pub fn tip(&self) -> &'static str {
        self.tips[usize::from(self.choice)]
    }
}

/// A builder row: portrait plus activity button.
#[derive(Debug, Clone)]
pub struct ObjectRow {
    /// Builder portrait.
    pub object: Button,
    /// What the builder is working on.
    pub stats: Button,
}

/// The builder list panel.
#[derive(Debug)]
pub struct ObjectsForm {
    controller: WeakController,
    rows: Vec<ObjectRow>,
}

impl ObjectsForm {
    /// Create a form with `count` rows.
    #[must_use]
    pub fn new(controller: WeakController, count: usize) -> Self {
        let mut form = Self {
            controller,
            rows: Vec::new(),
        };
        form.resize(count);
        form
    }

    fn resize(&mut self, count: usize) {
        self.rows.truncate(count);
        for index in self.rows.len()..count {
            self.rows.push(ObjectRow {
                object: Button::new(self.controller.clone(), ButtonRole::Object(index)),
                stats: Button::new(self.controller.clone(), ButtonRole::Stats(index)),
            });
        }
    }

    /// All rows.
    #[must_use]
    pub fn rows(&self) -> &[ObjectRow] {
        &self.rows
    }

    /// One row.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&ObjectRow> {
        self.rows.get(index)
    }

    /// Match the row count to the controller's builder list.
    pub fn sync(&mut self) {
        if let Some(controller) = self.controller.upgrade() {
            let count = controller.borrow().objects_len();
            self.resize(count);
        }
    }
}

/// The build option panel.
#[derive(Debug)]
pub struct StatsForm {
    controller: WeakController,
    options: Vec<Button>,
    obsolete: MultipleChoiceButton,
    favorites: MultipleChoiceButton,
}

impl StatsForm {
    /// Create a form with `count` option buttons and toggles reflecting
    /// `settings`.
    #[must_use]
    pub fn new(controller: WeakController, count: usize, settings: &BuildMenuSettings) -> Self {
        let mut form = Self {
            controller,
            options: Vec::new(),
            obsolete: MultipleChoiceButton::new(settings.show_redundant_designs, OBSOLETE_TIPS),
            favorites: MultipleChoiceButton::new(settings.show_favorites_only, FAVORITE_TIPS),
        };
        form.resize(count);
        form
    }

    fn resize(&mut self, count: usize) {
        self.options.truncate(count);
        for index in self.options.len()..count {
            self.options
                .push(Button::new(self.controller.clone(), ButtonRole::Option(index)));
        }
    }

    /// All option buttons.
    #[must_use]
    pub fn option_buttons(&self) -> &[Button] {
        &self.options
    }

    /// One option button.
    #[must_use]
    pub fn option_button(&self, index: usize) -> Option<&Button> {
        self.options.get(index)
    }

    /// The show/hide obsolete toggle.
    #[must_use]
    pub fn obsolete_toggle(&self) -> &MultipleChoiceButton {
        &self.obsolete
    }

    /// The favorites-only toggle.
    #[must_use]
    pub fn favorites_toggle(&self) -> &MultipleChoiceButton {
        &self.favorites
    }

    /// Flip the obsolete toggle and tell the controller.
    pub fn click_obsolete(&mut self) {
        let Some(controller) = self.controller.upgrade() else {
            return;
        };
        let show = !self.obsolete.choice();
        controller.borrow_mut().set_should_show_redundant_designs(show);
        self.obsolete.set_choice(show);
    }

    /// Flip the favorites toggle and tell the controller.
    pub fn click_favorites(&mut self) {
        let Some(controller) = self.controller.upgrade() else {
            return;
        };
        let show = !self.favorites.choice();
        controller.borrow_mut().set_should_show_favorites(show);
        self.favorites.set_choice(show);
    }

    /// Stats the selected builder is working on.
    #[must_use]
    pub fn selected_stats(&self) -> Option<StructureStatsId> {
        self.controller
            .upgrade()
            .and_then(|controller| controller.borrow().highlighted_stats())
    }

    /// Match the option count to the controller's option list.
    pub fn sync(&mut self) {
        if let Some(controller) = self.controller.upgrade() {
            let count = controller.borrow().stats_len();
            self.resize(count);
        }
    }
}
