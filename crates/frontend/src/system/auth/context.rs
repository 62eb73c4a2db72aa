use contracts::system::auth::Session;
use leptos::prelude::*;

/// Session opened on the login page. Lives in memory only.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub session: RwSignal<Option<Session>>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(None),
        }
    }

    pub fn login(&self, session: Session) {
        log::info!(
            "session opened for '{}' as {}",
            session.username,
            session.role.display_name()
        );
        self.session.set(Some(session));
    }

    pub fn logout(&self) {
        log::info!("session closed");
        self.session.set(None);
    }

    /// "ravi (Community Volunteer)", or "Guest" without a session
    pub fn display_name(&self) -> String {
        self.session.with(|s| match s {
            Some(s) => format!("{} ({})", s.username, s.role.display_name()),
            None => "Guest".to_string(),
        })
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the session store
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext not found in component tree")
}
