//! Persisted boolean display modes (dark mode, read mode).
//!
//! Flags live in browser local storage as the strings `"true"` / `"false"`.
//! Anything other than the exact string `"true"` reads back as disabled.

use crate::error::Result;

const FLAG_TRUE: &str = "true";
const FLAG_FALSE: &str = "false";

/// Key-value storage holding the string-encoded flags.
pub trait PreferenceStore {
    /// Read the raw value stored under `key`.
    fn read(&self, key: &str) -> Result<Option<String>>;
    /// Overwrite the raw value stored under `key`.
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// Something carrying a class list, normally `<body>`.
pub trait ClassTarget {
    /// Whether `class` is currently present.
    fn has_class(&self, class: &str) -> bool;
    /// Add (`on == true`) or remove `class`.
    fn set_class(&self, class: &str, on: bool) -> Result<()>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for &T {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value)
    }
}

/// The two independent display modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// `body.dark`, stored under `darkMode`.
    Dark,
    /// `body.read-mode`, stored under `readMode`.
    Read,
}

impl Mode {
    /// Local storage key for this mode's flag.
    pub const fn storage_key(self) -> &'static str {
        match self {
            Mode::Dark => "darkMode",
            Mode::Read => "readMode",
        }
    }

    /// Class toggled on `<body>`.
    pub const fn body_class(self) -> &'static str {
        match self {
            Mode::Dark => "dark",
            Mode::Read => "read-mode",
        }
    }
}

/// Icon shown on the dark-mode toggle: a sun offers the way back to light.
pub const fn dark_mode_icon(dark: bool) -> &'static str {
    if dark {
        "fas fa-sun"
    } else {
        "fas fa-moon"
    }
}

/// Decode a stored flag. Missing or unexpected values are `false`.
pub fn parse_flag(raw: Option<&str>) -> bool {
    raw == Some(FLAG_TRUE)
}

/// Encode a flag the way it is written to storage.
pub const fn encode_flag(enabled: bool) -> &'static str {
    if enabled {
        FLAG_TRUE
    } else {
        FLAG_FALSE
    }
}

/// Binds one [`Mode`] to a storage backend.
#[derive(Debug, Clone)]
pub struct ModeToggle<S> {
    mode: Mode,
    store: S,
}

impl<S: PreferenceStore> ModeToggle<S> {
    /// Create a toggle for `mode` persisted in `store`.
    pub fn new(mode: Mode, store: S) -> Self {
        Self {
            mode,
            store,
        }
    }

    /// The mode this toggle controls.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Stored flag, `false` when unreadable.
    pub fn stored(&self) -> bool {
        match self.store.read(self.mode.storage_key()) {
            Ok(raw) => parse_flag(raw.as_deref()),
            Err(err) => {
                tracing::debug!(key = self.mode.storage_key(), "treating unreadable flag as off: {err}");
                false
            },
        }
    }

    /// Apply the stored flag to `target` and report it.
    ///
    /// Only ever adds the class; markup that already carries it is left alone.
    pub fn restore(&self, target: &impl ClassTarget) -> Result<bool> {
        let enabled = self.stored();
        if enabled {
            target.set_class(self.mode.body_class(), true)?;
        }
        Ok(enabled)
    }

    /// Flip the class on `target` and persist the new state.
    ///
    /// The class flip sticks even when persisting fails; the storage error
    /// is still returned so the caller can log it.
    pub fn toggle(&self, target: &impl ClassTarget) -> Result<bool> {
        let class = self.mode.body_class();
        let enabled = !target.has_class(class);
        target.set_class(class, enabled)?;
        tracing::debug!(mode = ?self.mode, enabled, "mode toggled");
        self.store.write(self.mode.storage_key(), encode_flag(enabled))?;
        Ok(enabled)
    }
}

#[cfg(test)]
mod tests {
    use std::{
        cell::RefCell,
        collections::{BTreeSet, HashMap},
    };

    use super::*;
    use crate::error::ThemeError;

    #[derive(Default)]
    struct MemoryStore {
        values: RefCell<HashMap<String, String>>,
        read_only: bool,
    }

    impl MemoryStore {
        fn with(key: &str, value: &str) -> Self {
            let store = Self::default();
            store.values.borrow_mut().insert(key.to_string(), value.to_string());
            store
        }

        fn get(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }
    }

    impl PreferenceStore for MemoryStore {
        fn read(&self, key: &str) -> Result<Option<String>> {
            Ok(self.get(key))
        }

        fn write(&self, key: &str, value: &str) -> Result<()> {
            if self.read_only {
                return Err(ThemeError::Storage("quota exceeded".into()));
            }
            self.values.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    struct Classes(RefCell<BTreeSet<String>>);

    impl ClassTarget for Classes {
        fn has_class(&self, class: &str) -> bool {
            self.0.borrow().contains(class)
        }

        fn set_class(&self, class: &str, on: bool) -> Result<()> {
            if on {
                self.0.borrow_mut().insert(class.to_string());
            } else {
                self.0.borrow_mut().remove(class);
            }
            Ok(())
        }
    }

    #[test]
    fn parses_only_exact_true() {
        assert!(parse_flag(Some("true")));
        assert!(!parse_flag(Some("false")));
        assert!(!parse_flag(Some("TRUE")));
        assert!(!parse_flag(Some("1")));
        assert!(!parse_flag(None));
    }

    #[test]
    fn toggling_twice_restores_class_and_flag() {
        let store = MemoryStore::with("darkMode", "false");
        let body = Classes::default();
        let toggle = ModeToggle::new(Mode::Dark, &store);

        assert!(toggle.toggle(&body).unwrap());
        assert!(body.has_class("dark"));
        assert_eq!(store.get("darkMode").as_deref(), Some("true"));

        assert!(!toggle.toggle(&body).unwrap());
        assert!(!body.has_class("dark"));
        assert_eq!(store.get("darkMode").as_deref(), Some("false"));
    }

    #[test]
    fn restore_applies_stored_dark_mode_before_any_click() {
        let store = MemoryStore::with("darkMode", "true");
        let body = Classes::default();
        let toggle = ModeToggle::new(Mode::Dark, &store);

        let dark = toggle.restore(&body).unwrap();
        assert!(dark);
        assert!(body.has_class("dark"));
        assert_eq!(dark_mode_icon(dark), "fas fa-sun");
    }

    #[test]
    fn restore_defaults_to_off_for_garbage() {
        let store = MemoryStore::with("readMode", "yes please");
        let body = Classes::default();
        let toggle = ModeToggle::new(Mode::Read, &store);

        assert!(!toggle.restore(&body).unwrap());
        assert!(!body.has_class("read-mode"));
        assert_eq!(dark_mode_icon(false), "fas fa-moon");
    }

    #[test]
    fn modes_are_independent() {
        let store = MemoryStore::default();
        let body = Classes::default();
        let dark = ModeToggle::new(Mode::Dark, &store);
        let read = ModeToggle::new(Mode::Read, &store);

        read.toggle(&body).unwrap();
        assert!(body.has_class("read-mode"));
        assert!(!body.has_class("dark"));
        assert!(!dark.stored());
        assert!(read.stored());
    }

    #[test]
    fn class_flip_survives_storage_failure() {
        let store = MemoryStore {
            read_only: true,
            ..MemoryStore::default()
        };
        let body = Classes::default();
        let toggle = ModeToggle::new(Mode::Dark, &store);

        let err = toggle.toggle(&body).unwrap_err();
        assert!(matches!(err, ThemeError::Storage(_)));
        assert!(body.has_class("dark"));
        assert_eq!(store.get("darkMode"), None);
    }
}
