//! Login page: email + password against the backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! On success the session is stored by the auth service and the router moves
//! to `/`. On failure the backend's `detail` message is shown under the form.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::{ApiError, ApiTransport};
use crate::net::auth_service::AuthService;
use crate::net::types::Credentials;
use crate::state::auth::AuthState;
use crate::state::form::FormState;
use crate::util::storage::KeyValueStorage;

/// Shown when the failure carries no `detail` message.
pub const LOGIN_FALLBACK_ERROR: &str = "Erreur de connexion. Vérifiez vos identifiants.";

/// Where a successful login lands.
pub const LOGIN_SUCCESS_ROUTE: &str = "/";

/// Error text for a failed login: the body's `detail` string, else the fallback.
pub fn login_error_message(err: &ApiError) -> String {
    err.body()
        .and_then(|body| body.get("detail"))
        .and_then(serde_json::Value::as_str)
        .filter(|detail| !detail.is_empty())
        .map_or_else(|| LOGIN_FALLBACK_ERROR.to_owned(), str::to_owned)
}

/// Run one login attempt. `Ok` carries the route to navigate to.
///
/// # Errors
///
/// Returns the message to display under the form.
pub async fn submit_login<T: ApiTransport, S: KeyValueStorage>(
    auth: &AuthService<T, S>,
    credentials: &Credentials,
) -> Result<&'static str, String> {
    match auth.login(credentials).await {
        Ok(_) => Ok(LOGIN_SUCCESS_ROUTE),
        Err(e) => Err(login_error_message(&e)),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let redirect_to = RwSignal::new(None::<&'static str>);

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let form = RwSignal::new(FormState::<String>::default());

    Effect::new(move || {
        if let Some(route) = redirect_to.get() {
            redirect_to.set(None);
            navigate(route, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !form.try_update(FormState::begin).unwrap_or(false) {
            return;
        }
        let credentials = Credentials { email: email.get_untracked(), password: password.get_untracked() };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let service = AuthService::browser();
            match submit_login(&service, &credentials).await {
                Ok(route) => {
                    form.update(FormState::succeed);
                    auth.maybe_update(|a| service.sync_state(a));
                    redirect_to.set(Some(route));
                }
                Err(message) => form.update(|f| f.fail(message)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credentials, auth, redirect_to);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-card__header">
                    <h1>"Connexion"</h1>
                    <p class="auth-card__subtitle">"Accédez à votre espace autoDF"</p>
                </div>

                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-field">
                        <span class="auth-field__label">"Email"</span>
                        <input
                            class="auth-input"
                            type="email"
                            required
                            placeholder="exemple@mail.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="auth-field">
                        <span class="auth-field__label">"Mot de passe / passe phrase"</span>
                        <input
                            class="auth-input"
                            type="password"
                            required
                            placeholder="••••••••"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>

                    <Show when=move || form.with(|f| f.error.is_some())>
                        <p class="auth-error">{move || form.with(|f| f.error.clone().unwrap_or_default())}</p>
                    </Show>

                    <button class="auth-button" type="submit" disabled=move || form.with(FormState::is_submitting)>
                        {move || form.with(|f| f.submit_label("Se connecter", "Connexion..."))}
                    </button>
                </form>

                <p class="auth-card__footer">
                    "Pas encore de compte ? "
                    <a href="/register" class="auth-link">
                        "Inscrivez-vous"
                    </a>
                </p>
            </div>
        </div>
    }
}
