use std::cell::RefCell;

use menno_shared::{ControllerInput, ControllerState, FeatureStore, Transition, Year};

use crate::map::MapSurface;

/// Loaded data plus controller state. Lives outside Leptos because the
/// surface holds JS handles that are not `Send`.
struct Session {
    store: FeatureStore,
    state: ControllerState,
    surface: MapSurface,
}

thread_local! {
    static MAP_SURFACE: RefCell<Option<MapSurface>> = const { RefCell::new(None) };
    static SESSION: RefCell<Option<Session>> = const { RefCell::new(None) };
}

/// Create the base map. Tiles show while the documents are still loading.
pub fn init_map() -> Result<(), String> {
    let surface = MapSurface::new()?;
    MAP_SURFACE.with(|slot| *slot.borrow_mut() = Some(surface));
    Ok(())
}

/// Build feature layers and run the initial filter pass at `default_year`.
pub fn start(
    store: FeatureStore,
    default_year: Year,
    present: impl FnOnce(&Transition),
) -> Result<(), String> {
    let mut surface = MAP_SURFACE
        .with(|slot| slot.borrow_mut().take())
        .ok_or("map was not initialised")?;
    surface.populate(&store)?;

    let (state, transition) = ControllerState::start(&store, default_year);
    present(&transition);
    transition.apply_to(&mut surface);
    SESSION.with(|slot| {
        *slot.borrow_mut() = Some(Session {
            store,
            state,
            surface,
        })
    });
    Ok(())
}

/// Advance the controller and hand the transition to `present` before the
/// layer operations run, so UI writes land ahead of the map update.
/// Returns false while the data has not loaded.
pub fn dispatch(input: ControllerInput, present: impl FnOnce(&Transition)) -> bool {
    SESSION.with(|slot| {
        let mut slot = slot.borrow_mut();
        let Some(session) = slot.as_mut() else {
            return false;
        };
        let (state, transition) = session.state.apply(&session.store, input);
        present(&transition);
        transition.apply_to(&mut session.surface);
        session.state = state;
        true
    })
}
