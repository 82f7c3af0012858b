use std::rc::Rc;

use shared::UserProfile;
use yew::Reducible;

use crate::storage::PersistedSession;

/// Authentication state owned by the session provider.
///
/// Login is a two-step transition: the token arrives first together with the
/// submitted username, and the full profile replaces it once fetched. Views
/// that need the profile wait while the state is `Authenticating`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AuthState {
    #[default]
    Anonymous,
    Authenticating {
        username: String,
        token: String,
    },
    Authenticated {
        token: String,
        user: UserProfile,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    TokenAcquired { username: String, token: String },
    ProfileLoaded(UserProfile),
    Restored(PersistedSession),
    SignedOut,
}

impl AuthState {
    pub fn username(&self) -> Option<&str> {
        match self {
            AuthState::Anonymous => None,
            AuthState::Authenticating { username, .. } => Some(username),
            AuthState::Authenticated { user, .. } => Some(&user.username),
        }
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            AuthState::Anonymous => None,
            AuthState::Authenticating { token, .. } | AuthState::Authenticated { token, .. } => {
                Some(token)
            }
        }
    }

    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            AuthState::Authenticated { user, .. } => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        !matches!(self, AuthState::Anonymous)
    }

    pub fn apply(&self, action: SessionAction) -> AuthState {
        match action {
            SessionAction::TokenAcquired { username, token } => {
                AuthState::Authenticating { username, token }
            }
            SessionAction::ProfileLoaded(user) => match self {
                AuthState::Authenticating { username, token } if *username == user.username => {
                    AuthState::Authenticated {
                        token: token.clone(),
                        user,
                    }
                }
                AuthState::Authenticated { token, user: current }
                    if current.username == user.username =>
                {
                    AuthState::Authenticated {
                        token: token.clone(),
                        user,
                    }
                }
                _ => {
                    log::debug!(
                        "Discarding stale profile, username={username}",
                        username = &user.username
                    );
                    self.clone()
                }
            },
            SessionAction::Restored(session) => match self {
                AuthState::Anonymous => AuthState::Authenticated {
                    token: session.token,
                    user: session.user,
                },
                _ => self.clone(),
            },
            SessionAction::SignedOut => AuthState::Anonymous,
        }
    }
}

impl Reducible for AuthState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}
