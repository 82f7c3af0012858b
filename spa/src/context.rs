use yew::{platform::spawn_local, prelude::*};

use crate::{
    api::HttpApi,
    session::AuthState,
    shell::Shell,
    storage::{LocalStorage, SessionStore},
};

pub type AppShell = Shell<HttpApi, LocalStorage>;

/// What views see of the session: the current state plus the shell to act
/// on it.
#[derive(Clone, PartialEq)]
pub struct SessionContext {
    pub state: UseReducerHandle<AuthState>,
    pub api: HttpApi,
}

impl SessionContext {
    pub fn shell(&self) -> AppShell {
        let state = self.state.clone();
        Shell::new(
            self.api.clone(),
            SessionStore::new(LocalStorage),
            Callback::from(move |action| state.dispatch(action)),
        )
    }
}

#[derive(PartialEq, Properties)]
pub struct Props {
    pub api: HttpApi,
    /// Session restored before mounting; read once.
    pub initial: AuthState,
    pub children: Html,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &Props) -> Html {
    let state = {
        let initial = props.initial.clone();
        use_reducer(move || initial)
    };
    let context = SessionContext {
        state: state.clone(),
        api: props.api.clone(),
    };

    {
        let context = context.clone();
        let token = state.token().map(str::to_owned);
        use_effect_with(token, move |token| {
            let username = context.state.username().map(str::to_owned);
            if let (Some(token), Some(username)) = (token.clone(), username) {
                let shell = context.shell();
                spawn_local(async move {
                    shell.refresh_profile(username, token).await;
                });
            }
        });
    }

    html! {
        <ContextProvider<SessionContext> context={context}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionProvider wraps every view")
}
