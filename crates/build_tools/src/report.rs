//! Headless inspection of the build interface.
//!
//! Opens the interface for a world on a [`HeadlessHost`] and reads back what
//! the panels would show.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use build_core::droid::DroidType;
use build_core::mission::MissionContext;
use build_core::stats::Availability;
use build_core::world::World;
use build_hci::controller::BuildInterfaceController;
use build_hci::host::HeadlessHost;
use build_hci::settings::BuildMenuSettings;
use build_hci::widgets::ButtonFace;
use serde::Serialize;

/// One row of the builder list.
#[derive(Debug, Clone, Serialize)]
pub struct BuilderEntry {
    /// Droid id.
    pub id: u32,
    /// Droid type.
    pub droid_type: DroidType,
    /// Position in whole world units.
    pub position: (i32, i32),
    /// Name of the structure it is working on.
    pub activity: Option<String>,
    /// Whether this is the interface's selected builder.
    pub selected: bool,
}

/// One build option.
#[derive(Debug, Clone, Serialize)]
pub struct OptionEntry {
    /// Catalog id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Power cost.
    pub cost: u32,
    /// Filled length of the cost bar.
    pub cost_bar: u32,
    /// Availability for the local player.
    pub availability: Availability,
    /// Marked as a favorite.
    pub favorite: bool,
    /// The selected builder is working on it.
    pub highlighted: bool,
}

/// What the build interface shows for a world.
#[derive(Debug, Clone, Serialize)]
pub struct InspectReport {
    /// Local player.
    pub player: u8,
    /// Mission flags.
    pub mission: MissionContext,
    /// Whether the interface opened at all.
    pub shown: bool,
    /// Selected builder.
    pub selected: Option<u32>,
    /// Builder list, newest first.
    pub builders: Vec<BuilderEntry>,
    /// Build options, in catalog order.
    pub options: Vec<OptionEntry>,
    /// Saved favorites found in the catalog.
    pub favorites_marked: usize,
}

/// Open the build interface for `world` and report its contents.
#[must_use]
pub fn inspect(world: World, settings: BuildMenuSettings) -> InspectReport {
    let world = Rc::new(RefCell::new(world));
    let favorites_marked = settings.apply_favorites(&mut *world.borrow_mut());

    let host = Rc::new(RefCell::new(HeadlessHost::new()));
    let controller = BuildInterfaceController::new(world.clone(), host.clone(), settings);
    controller.borrow_mut().refresh();
    let shown = controller.borrow_mut().show_interface();
    let selected = controller.borrow().selected_builder().map(|id| id.0);

    let host = host.borrow();
    let world = world.borrow();
    let player = world.selected_player();

    let builders = host
        .objects_form()
        .map(|form| {
            form.rows()
                .iter()
                .filter_map(|row| {
                    let ButtonFace::Droid(id) = row.object.face() else {
                        return None;
                    };
                    let droid = world.droid(id)?;
                    let activity = match row.stats.face() {
                        ButtonFace::Structure { name, .. } => Some(name),
                        _ => None,
                    };
                    Some(BuilderEntry {
                        id: id.0,
                        droid_type: droid.droid_type,
                        position: droid.position.to_units(),
                        activity,
                        selected: row.object.is_selected(),
                    })
                })
                .collect()
        })
        .unwrap_or_default();

    let options = host
        .stats_form()
        .map(|form| {
            form.option_buttons()
                .iter()
                .filter_map(|button| {
                    let ButtonFace::Structure { stats, .. } = button.face() else {
                        return None;
                    };
                    let entry = world.catalog().get(stats)?;
                    Some(OptionEntry {
                        id: entry.id.clone(),
                        name: entry.name.clone(),
                        cost: entry.power_to_build,
                        cost_bar: button.cost_bar().map_or(0, |bar| bar.major_size),
                        availability: entry.availability_for(player),
                        favorite: entry.is_favorite,
                        highlighted: button.is_selected(),
                    })
                })
                .collect()
        })
        .unwrap_or_default();

    InspectReport {
        player: player.0,
        mission: world.mission(),
        shown,
        selected,
        builders,
        options,
        favorites_marked,
    }
}

impl fmt::Display for InspectReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Build interface for player {}", self.player)?;
        if self.mission.offworld {
            write!(f, " (offworld)")?;
        }
        if self.mission.tutorial {
            write!(f, " (tutorial)")?;
        }
        writeln!(f)?;

        if !self.shown {
            return writeln!(f, "  not shown: no builders");
        }

        writeln!(f, "Builders ({}):", self.builders.len())?;
        for builder in &self.builders {
            let marker = if builder.selected { '*' } else { ' ' };
            write!(
                f,
                "  {marker} droid#{} {:?} at ({}, {})",
                builder.id, builder.droid_type, builder.position.0, builder.position.1
            )?;
            match &builder.activity {
                Some(activity) => writeln!(f, " -> {activity}")?,
                None => writeln!(f)?,
            }
        }

        writeln!(f, "Options ({}):", self.options.len())?;
        for option in &self.options {
            let marker = if option.highlighted { '*' } else { ' ' };
            write!(f, "  {marker} {:<32} {:>5}", option.name, option.cost)?;
            if option.availability == Availability::Redundant {
                write!(f, " [obsolete]")?;
            }
            if option.favorite {
                write!(f, " [favorite]")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
