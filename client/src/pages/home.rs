//! Placeholder landing page.
//!
//! Greets the signed-in user by business name once the current user has been
//! fetched. The user list request is kept as a backend connectivity probe.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::net::types::User;
use crate::state::auth::AuthState;

/// Greeting line for a signed-in user, if a name is known.
pub fn greeting(user: Option<&User>) -> Option<String> {
    user.and_then(User::display_name).map(|name| format!("Bienvenue, {name}"))
}

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::net::api::{HttpTransport, fetch_users};
        use crate::net::auth_service::AuthService;

        match fetch_users(&HttpTransport::from_config()).await {
            Ok(users) => log::debug!("user list reachable ({} entries)", users.as_array().map_or(0, Vec::len)),
            Err(e) => log::debug!("user list unavailable: {e}"),
        }

        let service = AuthService::browser();
        if service.is_authenticated() {
            let user = service.current_user().await;
            auth.update(|a| a.user = user);
        }
    });

    let welcome = move || auth.with(|a| greeting(a.user.as_ref()));

    view! {
        <section class="home-page">
            <h1 class="home-page__title">"Page d'acceuil"</h1>
            <Show when=move || welcome().is_some()>
                <p class="home-page__welcome">{move || welcome().unwrap_or_default()}</p>
            </Show>
        </section>
    }
}
