//! Key-file import from an external file chooser (e.g. a cloud
//! provider's picker). The chooser itself is an opaque capability; this
//! module only owns the import flow around it.

use uuid::Uuid;

use crate::error::CoreError;

/// A key file selected by the user, ready to hand to the open screen.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyFileInfo {
    pub id: Uuid,
    pub name: String,
    pub data: Vec<u8>,
}

/// A file the chooser returned.
#[derive(Debug, Clone)]
pub struct ChosenFile {
    pub name: String,
    pub data: Vec<u8>,
}

/// External file-chooser capability. Implementations block until the
/// user picks a file or dismisses the dialog.
pub trait KeyFileChooser {
    fn choose(&mut self) -> Result<ChosenFile, CoreError>;
}

/// Run the key-file import flow.
///
/// Returns `Ok(None)` when the open screen is busy (the chooser is not
/// even invoked) or when the chooser fails — a dismissed or failed
/// dialog is not an error the caller needs to handle.
pub fn import_key_file(
    chooser: &mut dyn KeyFileChooser,
    busy: bool,
) -> Result<Option<KeyFileInfo>, CoreError> {
    if busy {
        return Ok(None);
    }
    match chooser.choose() {
        Ok(file) => Ok(Some(KeyFileInfo {
            id: Uuid::new_v4(),
            name: file.name,
            data: file.data,
        })),
        Err(e) => {
            tracing::debug!("key file chooser dismissed: {e}");
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubChooser {
        result: Option<ChosenFile>,
        invoked: bool,
    }

    impl KeyFileChooser for StubChooser {
        fn choose(&mut self) -> Result<ChosenFile, CoreError> {
            self.invoked = true;
            self.result
                .take()
                .ok_or_else(|| CoreError::Chooser("dismissed".to_string()))
        }
    }

    #[test]
    fn busy_guard_skips_the_chooser() {
        let mut chooser = StubChooser {
            result: Some(ChosenFile {
                name: "keys.keyx".to_string(),
                data: vec![1, 2, 3],
            }),
            invoked: false,
        };
        let result = import_key_file(&mut chooser, true).unwrap();
        assert!(result.is_none());
        assert!(!chooser.invoked);
    }

    #[test]
    fn chooser_error_is_swallowed() {
        let mut chooser = StubChooser {
            result: None,
            invoked: false,
        };
        let result = import_key_file(&mut chooser, false).unwrap();
        assert!(result.is_none());
        assert!(chooser.invoked);
    }

    #[test]
    fn chosen_file_gets_a_fresh_id() {
        let mut chooser = StubChooser {
            result: Some(ChosenFile {
                name: "keys.keyx".to_string(),
                data: vec![1, 2, 3],
            }),
            invoked: false,
        };
        let info = import_key_file(&mut chooser, false).unwrap().unwrap();
        assert_eq!(info.name, "keys.keyx");
        assert_eq!(info.data, vec![1, 2, 3]);
        assert!(!info.id.is_nil());
    }
}
