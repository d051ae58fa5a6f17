//! Login View
//!
//! Mock sign-in form in front of the session gate.

use feed_core::feed::FeedQuery;
use feed_core::Route;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser::GlooSleeper;
use crate::context::use_app_context;

#[component]
pub fn LoginView() -> impl IntoView {
    let ctx = use_app_context();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (pending, set_pending) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        set_pending.set(true);
        set_error.set(None);

        let username = username.get_untracked();
        let password = password.get_untracked();
        spawn_local(async move {
            let services = ctx.services();
            let result = services.session.login(&GlooSleeper, &username, &password).await;
            set_pending.set(services.session.is_pending());
            match result {
                Ok(()) => {
                    web_sys::console::log_1(&"[LoginView] Signed in".into());
                    ctx.refresh_session();
                    ctx.navigate(Route::Feed(FeedQuery::new()));
                }
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div class="login">
            <div class="login-card">
                <h1>"SocialSphere"</h1>
                <p>"Sign in to your account"</p>
                <form on:submit=on_submit>
                    <label for="username">"Username"</label>
                    <input
                        id="username"
                        type="text"
                        placeholder="Enter your username"
                        prop:value=username
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        placeholder="Enter your password"
                        prop:value=password
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                    {move || error.get().map(|e| view! { <p class="login-error">{e}</p> })}
                    <button type="submit" disabled=move || pending.get()>
                        {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <p class="login-hint">"Demo credentials: froster / hello"</p>
            </div>
        </div>
    }
}
