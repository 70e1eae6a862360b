//! Game session: one owner for the state, its store, and change observers
//!
//! Every mutation goes through the session. After a change is applied the
//! session writes it to the store and then runs each observer, all before the
//! call returns.

use crate::consts::{EXPORT_FILE_NAME, STORAGE_KEY};
use crate::game::GameState;
use crate::persistence::{self, KeyValueStore, PersistError};

/// Names used for persistence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Key the state is auto-saved under
    pub storage_key: String,
    /// File name offered when exporting
    pub export_file_name: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            export_file_name: EXPORT_FILE_NAME.to_string(),
        }
    }
}

type Observer = Box<dyn FnMut(&GameState)>;

/// A running game bound to a key-value store
pub struct GameSession<S: KeyValueStore> {
    state: GameState,
    store: S,
    config: SessionConfig,
    observers: Vec<Observer>,
}

impl<S: KeyValueStore> GameSession<S> {
    /// Start a session from whatever the store holds, or a fresh game
    pub fn restore(store: S, config: SessionConfig) -> Self {
        let state = persistence::auto_restore(&store, &config.storage_key).unwrap_or_default();
        Self {
            state,
            store,
            config,
            observers: Vec::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Register a callback run after every state change
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&GameState) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Play the next mark at `index`.
    ///
    /// Ignored moves change nothing, so nothing is saved and no observer runs.
    /// An applied move stands even when saving it fails; observers still run
    /// and the save error is returned.
    pub fn click(&mut self, index: usize) -> Result<(), PersistError> {
        if !self.state.apply_move(index) {
            return Ok(());
        }
        log::debug!(
            "{} played cell {}",
            self.state.next_player().opponent().as_str(),
            index
        );
        self.changed(true)
    }

    /// Replace the state with one decoded from `text`.
    ///
    /// On a decode failure the current state and the store are untouched.
    pub fn import(&mut self, text: &str) -> Result<(), PersistError> {
        let state = persistence::deserialize(text)?;
        self.state = state;
        log::info!(
            "Loaded state ({} cells filled, {} to move)",
            state.board().filled(),
            state.next_player().as_str()
        );
        self.changed(true)
    }

    /// Text for the export file
    pub fn export(&self) -> Result<String, PersistError> {
        persistence::serialize(&self.state)
    }

    /// Forget the saved game and start over.
    ///
    /// The board resets and observers run even when the store refuses the
    /// removal; that failure is returned afterwards.
    pub fn clear(&mut self) -> Result<(), PersistError> {
        let removed = self.store.remove(&self.config.storage_key);
        self.state.reset();
        match &removed {
            Ok(()) => log::info!("Saved state cleared"),
            Err(e) => log::warn!("Board reset but saved state not removed: {}", e),
        }
        self.changed(false)?;
        removed
    }

    fn changed(&mut self, persist: bool) -> Result<(), PersistError> {
        let saved = if persist {
            persistence::auto_persist(&mut self.store, &self.config.storage_key, &self.state)
        } else {
            Ok(())
        };
        for observer in &mut self.observers {
            observer(&self.state);
        }
        saved
    }
}
