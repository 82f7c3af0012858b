use jobly_web::{
    api::HttpApi,
    app::{App, Props},
    config,
    session::AuthState,
    shell::restore_session,
    storage::{LocalStorage, SessionStore},
};

fn main() {
    wasm_logger::init(wasm_logger::Config::new(config::log_level()));

    let api = HttpApi::new(config::API_BASE_URL);
    let initial = restore_session(
        &AuthState::Anonymous,
        &api,
        &SessionStore::new(LocalStorage),
    );
    log::info!(
        "Starting Jobly, api={api_url}, authenticated={authenticated}",
        api_url = api.base_url(),
        authenticated = initial.is_authenticated()
    );

    yew::Renderer::<App>::with_props(Props { api, initial }).render();
}
