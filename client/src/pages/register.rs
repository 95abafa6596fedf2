//! Registration page: account plus business identity.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend validates every field and answers failures with a map keyed by
//! field name. Each message is rendered under its own input; a top-level
//! `detail` goes under the form.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use serde_json::{Map, Value};

use crate::net::api::{ApiError, ApiTransport};
use crate::net::auth_service::AuthService;
use crate::net::types::RegistrationPayload;
use crate::state::auth::AuthState;
use crate::state::form::FormState;
use crate::util::storage::KeyValueStorage;

/// A SIRET is exactly 14 digits; input beyond that is dropped.
pub const SIRET_MAX_LEN: usize = 14;

/// Shown when the failure carries no body at all.
pub const REGISTER_FALLBACK_ERROR: &str = "Une erreur est survenue lors de l'inscription.";

/// Where a successful registration lands.
pub const REGISTER_SUCCESS_ROUTE: &str = "/";

/// Keep at most [`SIRET_MAX_LEN`] characters.
pub fn truncate_siret(raw: &str) -> String {
    raw.chars().take(SIRET_MAX_LEN).collect()
}

/// Validation messages from a failed registration, keyed by field name.
#[derive(Clone, Debug, PartialEq)]
pub struct RegisterErrors {
    fields: Map<String, Value>,
}

impl RegisterErrors {
    pub fn from_api_error(err: &ApiError) -> Self {
        match err.body() {
            Some(Value::Object(fields)) => Self { fields: fields.clone() },
            _ => Self::fallback(),
        }
    }

    fn fallback() -> Self {
        let mut fields = Map::new();
        fields.insert("detail".to_owned(), Value::String(REGISTER_FALLBACK_ERROR.to_owned()));
        Self { fields }
    }

    /// Message for `name`. List values yield their first element.
    pub fn field(&self, name: &str) -> Option<String> {
        let value = match self.fields.get(name)? {
            Value::Array(items) => items.first()?,
            other => other,
        };
        match value {
            Value::Null => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Form-level message.
    pub fn detail(&self) -> Option<String> {
        self.field("detail")
    }
}

/// Run one registration attempt. The SIRET is truncated before sending.
///
/// # Errors
///
/// Returns the per-field messages to display.
pub async fn submit_register<T: ApiTransport, S: KeyValueStorage>(
    auth: &AuthService<T, S>,
    mut payload: RegistrationPayload,
) -> Result<&'static str, RegisterErrors> {
    payload.siret = truncate_siret(&payload.siret);
    match auth.register(&payload).await {
        Ok(_) => Ok(REGISTER_SUCCESS_ROUTE),
        Err(e) => Err(RegisterErrors::from_api_error(&e)),
    }
}

/// Error line rendered under one input.
#[component]
fn FieldError(form: RwSignal<FormState<RegisterErrors>>, field: &'static str) -> impl IntoView {
    let message = move || form.with(|f| f.error.as_ref().and_then(|e| e.field(field)));
    view! {
        <Show when=move || message().is_some()>
            <p class="auth-field__error">{move || message().unwrap_or_default()}</p>
        </Show>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let redirect_to = RwSignal::new(None::<&'static str>);

    let payload = RwSignal::new(RegistrationPayload::default());
    let form = RwSignal::new(FormState::<RegisterErrors>::default());

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
        let submitted = payload.get_untracked();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let service = AuthService::browser();
            match submit_register(&service, submitted).await {
                Ok(route) => {
                    form.update(FormState::succeed);
                    auth.maybe_update(|a| service.sync_state(a));
                    redirect_to.set(Some(route));
                }
                Err(errors) => form.update(|f| f.fail(errors)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (submitted, auth, redirect_to);
        }
    };

    let detail = move || form.with(|f| f.error.as_ref().and_then(RegisterErrors::detail));

    view! {
        <div class="auth-page">
            <div class="auth-card auth-card--wide">
                <div class="auth-card__header">
                    <h1>"Inscription"</h1>
                    <p class="auth-card__subtitle">"Créez votre compte autoDF en quelques secondes"</p>
                </div>

                <form class="auth-form" on:submit=on_submit>
                    <div class="auth-form__row">
                        <label class="auth-field">
                            <span class="auth-field__label">"Nom de l'entreprise"</span>
                            <input
                                class="auth-input"
                                type="text"
                                required
                                placeholder="Ma Super Entreprise"
                                prop:value=move || payload.with(|p| p.name_business.clone())
                                on:input=move |ev| payload.update(|p| p.name_business = event_target_value(&ev))
                            />
                            <FieldError form=form field="name_business"/>
                        </label>

                        <label class="auth-field">
                            <span class="auth-field__label">"SIRET"</span>
                            <input
                                class="auth-input"
                                type="text"
                                required
                                maxlength={SIRET_MAX_LEN.to_string()}
                                placeholder="12345678901234"
                                prop:value=move || payload.with(|p| p.siret.clone())
                                on:input=move |ev| payload.update(|p| p.siret = truncate_siret(&event_target_value(&ev)))
                            />
                            <FieldError form=form field="siret"/>
                        </label>
                    </div>

                    <label class="auth-field">
                        <span class="auth-field__label">"Email"</span>
                        <input
                            class="auth-input"
                            type="email"
                            required
                            placeholder="contact@entreprise.com"
                            prop:value=move || payload.with(|p| p.email.clone())
                            on:input=move |ev| payload.update(|p| p.email = event_target_value(&ev))
                        />
                        <FieldError form=form field="email"/>
                    </label>

                    <label class="auth-field">
                        <span class="auth-field__label">"Mot de passe"</span>
                        <input
                            class="auth-input"
                            type="password"
                            required
                            placeholder="••••••••"
                            prop:value=move || payload.with(|p| p.password.clone())
                            on:input=move |ev| payload.update(|p| p.password = event_target_value(&ev))
                        />
                        <FieldError form=form field="password"/>
                    </label>

                    <Show when=move || detail().is_some()>
                        <p class="auth-error auth-error--center">{move || detail().unwrap_or_default()}</p>
                    </Show>

                    <button class="auth-button" type="submit" disabled=move || form.with(FormState::is_submitting)>
                        {move || form.with(|f| f.submit_label("S'inscrire", "Création du compte..."))}
                    </button>
                </form>

                <p class="auth-card__footer">
                    "Déjà un compte ? "
                    <a href="/login" class="auth-link">
                        "Connectez-vous"
                    </a>
                </p>
            </div>
        </div>
    }
}
