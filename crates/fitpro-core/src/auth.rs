//! Authentication boundary.
//!
//! Sign-in and sign-up are delegated to an external identity provider; this
//! crate only defines the signals that cross the boundary. The UI owns the
//! modal chrome and forwards open/close/mode-change events through
//! [`IdentityProvider`] — no credential handling happens anywhere in fitpro.

/// Which face of the auth flow the modal is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    SignIn,
    SignUp,
}

impl AuthMode {
    /// The other mode, for toggle controls.
    pub fn toggled(self) -> AuthMode {
        match self {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        }
    }
}

impl std::fmt::Display for AuthMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthMode::SignIn => write!(f, "sign-in"),
            AuthMode::SignUp => write!(f, "sign-up"),
        }
    }
}

/// Capability boundary to the external identity provider.
///
/// Implementations receive UI lifecycle signals and nothing else: the flow's
/// internals (forms, tokens, sessions) belong entirely to the provider.
pub trait IdentityProvider {
    /// The auth surface was opened in the given mode.
    fn open(&mut self, mode: AuthMode);

    /// The auth surface was dismissed without the provider completing.
    fn close(&mut self);

    /// The user switched between sign-in and sign-up.
    fn mode_changed(&mut self, mode: AuthMode);
}

/// Provider used when no real identity backend is wired up: logs each signal
/// and otherwise does nothing.
#[derive(Debug, Default)]
pub struct TracingProvider;

impl IdentityProvider for TracingProvider {
    fn open(&mut self, mode: AuthMode) {
        tracing::info!(%mode, "identity provider opened");
    }

    fn close(&mut self) {
        tracing::info!("identity provider closed");
    }

    fn mode_changed(&mut self, mode: AuthMode) {
        tracing::info!(%mode, "identity provider mode changed");
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggled_flips_between_modes() {
        assert_eq!(AuthMode::SignIn.toggled(), AuthMode::SignUp);
        assert_eq!(AuthMode::SignUp.toggled(), AuthMode::SignIn);
    }
}
