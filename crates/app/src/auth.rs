use dioxus::prelude::*;
use services::VaultController;
use shared_types::{AuthState, View};

/// Global handle on the vault controller.
///
/// Screens read snapshots through the accessors and raise intents with
/// [`VaultHandle::update`]; every write re-renders the shell.
#[derive(Clone, Copy)]
pub struct VaultHandle {
    controller: Signal<VaultController>,
}

impl VaultHandle {
    pub fn new(controller: VaultController) -> Self {
        Self {
            controller: Signal::new(controller),
        }
    }

    pub fn auth(&self) -> AuthState {
        self.controller.read().auth().clone()
    }

    pub fn view(&self) -> View {
        self.controller.read().view().clone()
    }

    pub fn error(&self) -> Option<String> {
        self.controller.read().error().map(String::from)
    }

    pub fn is_signing_in(&self) -> bool {
        self.controller.read().is_signing_in()
    }

    /// Borrow the controller for reads that need more than a snapshot.
    pub fn with<R>(&self, f: impl FnOnce(&VaultController) -> R) -> R {
        f(&self.controller.read())
    }

    /// Raise an intent.
    pub fn update<R>(mut self, f: impl FnOnce(&mut VaultController) -> R) -> R {
        f(&mut self.controller.write())
    }

    pub fn navigate(self, view: View) {
        self.update(|c| c.navigate(view));
    }
}

/// Hook to access the vault.
pub fn use_vault() -> VaultHandle {
    use_context::<VaultHandle>()
}
