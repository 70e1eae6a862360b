//! Save/load persistence
//!
//! Features:
//! - JSON wire format shared by LocalStorage and exported files
//! - Board shape validation on load
//! - Pluggable key-value store (LocalStorage in the browser, memory elsewhere)

pub mod codec;
pub mod error;
pub mod store;

pub use codec::{SavedState, deserialize, serialize};
pub use error::PersistError;
pub use store::{KeyValueStore, MemoryStore};

#[cfg(target_arch = "wasm32")]
pub use store::LocalStorage;

use crate::game::GameState;

/// Write the serialized state under `key`, replacing any previous value.
pub fn auto_persist<S: KeyValueStore + ?Sized>(
    store: &mut S,
    key: &str,
    state: &GameState,
) -> Result<(), PersistError> {
    let json = serialize(state)?;
    store.set(key, &json)?;
    log::debug!("State persisted under '{}'", key);
    Ok(())
}

/// Read the state saved under `key`.
///
/// Returns `None` when nothing is saved, the store is unreadable, or the
/// saved text does not decode. The last two are logged and otherwise ignored.
pub fn auto_restore<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Option<GameState> {
    let json = match store.get(key) {
        Ok(Some(json)) => json,
        Ok(None) => {
            log::info!("No saved state, starting fresh");
            return None;
        }
        Err(e) => {
            log::warn!("Could not read saved state: {}", e);
            return None;
        }
    };

    match deserialize(&json) {
        Ok(state) => {
            log::info!("Restored saved state ({} cells filled)", state.board().filled());
            Some(state)
        }
        Err(e) => {
            log::warn!("Ignoring corrupt saved state: {}", e);
            None
        }
    }
}
