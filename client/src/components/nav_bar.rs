//! Top navigation bar with auth-aware call-to-action buttons.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once above every route. Authentication is re-read from the session
//! store on every route change, so the CTA area follows logins and logouts
//! done elsewhere in the app as soon as the user navigates.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::api::ApiTransport;
use crate::net::auth_service::{AuthService, LOGIN_ROUTE};
use crate::state::auth::AuthState;
use crate::util::storage::KeyValueStorage;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

/// Links shown in both the desktop bar and the mobile menu.
pub const NAV_LINKS: [NavLink; 7] = [
    NavLink { href: "/", label: "Accueil" },
    NavLink { href: "/estimate", label: "Devis" },
    NavLink { href: "/invoice", label: "Factures" },
    NavLink { href: "/home", label: "Dashboard" },
    NavLink { href: "/login", label: "Se connecter" },
    NavLink { href: "/register", label: "S'inscrire" },
    NavLink { href: "/logout", label: "Se deconnecter" },
];

/// Whether `href` is the link for `pathname`. `/` only matches itself.
pub fn is_active(pathname: &str, href: &str) -> bool {
    let pathname = if pathname.len() > 1 { pathname.trim_end_matches('/') } else { pathname };
    if href == "/" {
        return pathname == "/";
    }
    pathname == href || pathname.strip_prefix(href).is_some_and(|rest| rest.starts_with('/'))
}

pub fn link_class(active: bool) -> &'static str {
    if active { "nav-bar__link nav-bar__link--active" } else { "nav-bar__link" }
}

pub fn menu_toggle_class(open: bool) -> &'static str {
    if open { "nav-bar__menu-toggle nav-bar__menu-toggle--open" } else { "nav-bar__menu-toggle" }
}

/// End the session and reset `auth`. Returns the route to show next.
pub fn sign_out<T: ApiTransport, S: KeyValueStorage>(
    service: &AuthService<T, S>,
    auth: &mut AuthState,
) -> &'static str {
    service.logout();
    auth.signed_out();
    LOGIN_ROUTE
}

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let pathname = use_location().pathname;
    let navigate = use_navigate();
    let menu_open = RwSignal::new(false);

    Effect::new(move || {
        pathname.track();
        let service = AuthService::browser();
        auth.maybe_update(|a| service.sync_state(a));
    });

    let redirect_to = RwSignal::new(None::<&'static str>);
    Effect::new(move || {
        if let Some(route) = redirect_to.get() {
            redirect_to.set(None);
            navigate(route, NavigateOptions::default());
        }
    });

    let logout = move || {
        let service = AuthService::browser();
        let mut route = LOGIN_ROUTE;
        auth.update(|a| route = sign_out(&service, a));
        menu_open.set(false);
        redirect_to.set(Some(route));
    };

    let authenticated = move || auth.with(|a| a.authenticated);

    let links = move |mobile: bool| {
        NAV_LINKS
            .iter()
            .map(|link| {
                let href = link.href;
                view! {
                    <a
                        href=href
                        class=move || {
                            let class = link_class(is_active(&pathname.get(), href));
                            if mobile { format!("{class} nav-bar__link--mobile") } else { class.to_owned() }
                        }
                        on:click=move |_| menu_open.set(false)
                    >
                        {link.label}
                    </a>
                }
            })
            .collect_view()
    };

    let cta = move |mobile: bool| {
        let class = if mobile { "nav-bar__cta nav-bar__cta--mobile" } else { "nav-bar__cta" };
        move || {
            if authenticated() {
                view! {
                    <div class=class>
                        <button class="nav-bar__primary" type="button">
                            "Nouveau document"
                        </button>
                        <button class="nav-bar__logout" type="button" on:click=move |_| logout()>
                            "Déconnexion"
                        </button>
                    </div>
                }
                .into_any()
            } else {
                view! {
                    <div class=class>
                        <a href="/login" class="nav-bar__secondary" on:click=move |_| menu_open.set(false)>
                            "Connexion"
                        </a>
                        <a href="/register" class="nav-bar__primary" on:click=move |_| menu_open.set(false)>
                            "S'inscrire"
                        </a>
                    </div>
                }
                .into_any()
            }
        }
    };

    view! {
        <nav class="nav-bar">
            <div class="nav-bar__inner">
                <a href="/" class="nav-bar__logo">
                    "autoDF"
                </a>
                <div class="nav-bar__links">{links(false)}</div>
                {cta(false)}
                <button
                    class=move || menu_toggle_class(menu_open.get())
                    type="button"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                    title="Menu"
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <div class="nav-bar__mobile-menu">
                    {links(true)}
                    {cta(true)}
                </div>
            </Show>
        </nav>
        <div class="nav-bar__spacer"></div>
    }
}
