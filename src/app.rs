use crate::error::{Result, StoreError};
use crate::shape::ShapeId;
use crate::store::ShapeStore;
use crate::view::ViewConfig;

/// User input, already decoded from the windowing layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A digit key `0`-`9` was pressed.
    SelectDigit(u8),
    ScaleUp,
    ScaleDown,
    /// Write every shape in the custom format.
    SaveCustom,
    /// Write every shape as OBJ.
    ExportObj,
    Quit,
}

/// Whether the event loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Everything the viewer loop owns.
#[derive(Debug)]
pub struct AppState {
    pub store: ShapeStore,
    pub view: ViewConfig,
    /// The shape Up/Down act on.
    pub selected: Option<ShapeId>,
    /// Last message shown to the user.
    pub status: Option<String>,
}

impl AppState {
    #[must_use]
    pub fn new(store: ShapeStore, view: ViewConfig) -> Self {
        Self {
            store,
            view,
            selected: None,
            status: None,
        }
    }
}

/// Maps a digit key to a shape id.
///
/// `0` selects 10 and `1` selects 12; any value above 10 wraps to
/// `10 + value % 10`. Other digits map to themselves.
#[must_use]
pub fn shape_for_digit(digit: u8) -> ShapeId {
    let mut id = match digit {
        0 => 10,
        1 => 12,
        d => ShapeId::from(d),
    };
    if id > 10 {
        id = 10 + id % 10;
    }
    id
}

/// Applies one event to the application state.
pub fn handle_event(state: &mut AppState, event: Event) -> Control {
    match event {
        Event::Quit => return Control::Quit,
        Event::SelectDigit(digit) => {
            let id = shape_for_digit(digit);
            if state.store.contains(id) {
                state.selected = Some(id);
            }
        }
        Event::ScaleUp => {
            let step = state.view.scale_step;
            rescale_selected(state, |store, id| store.rescale(id, step));
        }
        Event::ScaleDown => {
            let step = state.view.scale_step;
            rescale_selected(state, |store, id| store.rescale_down(id, step));
        }
        Event::SaveCustom => {
            let result = state.store.export_all_custom().into_result();
            report_export(state, result, "All shapes saved with current scales.", "Save");
        }
        Event::ExportObj => {
            let result = state.store.export_all_obj().into_result();
            report_export(
                state,
                result,
                "All shapes exported as OBJ files with current scales.",
                "OBJ export",
            );
        }
    }
    Control::Continue
}

fn report_export(state: &mut AppState, result: Result<usize>, done: &str, action: &str) {
    let message = match result {
        Ok(written) => {
            tracing::info!(written, "{done}");
            done.to_owned()
        }
        Err(err) => format!("{action} failed: {err}"),
    };
    state.status = Some(message);
}

fn rescale_selected(
    state: &mut AppState,
    apply: impl FnOnce(&mut ShapeStore, ShapeId) -> std::result::Result<f64, StoreError>,
) {
    let Some(id) = state.selected else {
        return;
    };
    if let Err(err) = apply(&mut state.store, id) {
        tracing::warn!(%err, "rescale refused");
        state.status = Some(err.to_string());
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::shape::{Edge, Shape};
    use crate::store::StoreConfig;
    use approx::assert_relative_eq;

    fn state_with(ids: &[ShapeId]) -> AppState {
        let mut store = ShapeStore::default();
        for &id in ids {
            store.insert(
                id,
                Shape::new(
                    vec![Point3::new(1.0, 2.0, 3.0), Point3::origin()],
                    [Edge::new(0, 1)].into_iter().collect(),
                ),
            );
        }
        AppState::new(store, ViewConfig::default())
    }

    #[test]
    fn digit_mapping_is_preserved() {
        let table: Vec<ShapeId> = (0..=9).map(shape_for_digit).collect();
        assert_eq!(table, vec![10, 12, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn selects_only_loaded_shapes() {
        let mut state = state_with(&[4, 12]);
        handle_event(&mut state, Event::SelectDigit(1));
        assert_eq!(state.selected, Some(12));
        handle_event(&mut state, Event::SelectDigit(6));
        assert_eq!(state.selected, Some(12));
        handle_event(&mut state, Event::SelectDigit(4));
        assert_eq!(state.selected, Some(4));
    }

    #[test]
    fn scaling_needs_a_selection() {
        let mut state = state_with(&[4]);
        handle_event(&mut state, Event::ScaleUp);
        assert_relative_eq!(state.store.scale(4).unwrap(), 1.0);
    }

    #[test]
    fn up_and_down_scale_selected_shape() {
        let mut state = state_with(&[4, 6]);
        handle_event(&mut state, Event::SelectDigit(6));
        handle_event(&mut state, Event::ScaleUp);
        handle_event(&mut state, Event::ScaleUp);
        assert_relative_eq!(state.store.scale(6).unwrap(), 1.21, epsilon = 1e-12);
        handle_event(&mut state, Event::ScaleDown);
        assert_eq!(
            state.store.scale(6).unwrap().to_bits(),
            (1.1_f64 * 1.1 / 1.1).to_bits()
        );
        assert_relative_eq!(state.store.scale(4).unwrap(), 1.0);
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut state = state_with(&[]);
        assert_eq!(handle_event(&mut state, Event::Quit), Control::Quit);
        assert_eq!(handle_event(&mut state, Event::ScaleDown), Control::Continue);
    }

    #[test]
    fn save_reports_success() {
        let dir = tempfile::tempdir().unwrap();
        let store = ShapeStore::new(StoreConfig {
            dir: dir.path().to_path_buf(),
            ..StoreConfig::default()
        });
        let mut state = AppState::new(store, ViewConfig::default());
        state.store.insert(8, Shape::default());
        handle_event(&mut state, Event::SaveCustom);
        assert_eq!(
            state.status.as_deref(),
            Some("All shapes saved with current scales.")
        );
        assert!(dir.path().join("8").is_file());
    }

    #[test]
    fn export_failure_keeps_session_alive() {
        let dir = tempfile::tempdir().unwrap();
        let store = ShapeStore::new(StoreConfig {
            dir: dir.path().join("gone"),
            ..StoreConfig::default()
        });
        let mut state = AppState::new(store, ViewConfig::default());
        state.store.insert(8, Shape::default());
        let control = handle_event(&mut state, Event::ExportObj);
        assert_eq!(control, Control::Continue);
        assert!(state.status.unwrap().starts_with("OBJ export failed"));
    }
}
