//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::rc::Rc;

use feed_core::Route;
use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;

use crate::browser;
use crate::services::Services;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current location - read
    pub route: ReadSignal<Route>,
    /// Current location - write
    set_route: WriteSignal<Route>,
    /// Session flag mirrored from the session gate - read
    pub authenticated: ReadSignal<bool>,
    /// Session flag mirrored from the session gate - write
    set_authenticated: WriteSignal<bool>,
    /// Non-Send services live in the local arena
    services: StoredValue<Rc<Services>, LocalStorage>,
}

impl AppContext {
    pub fn new(services: Services) -> Self {
        let (path, query) = browser::current_location();
        let (route, set_route) = signal(Route::parse(&path, &query));
        let (authenticated, set_authenticated) = signal(services.session.is_authenticated());
        Self {
            route,
            set_route,
            authenticated,
            set_authenticated,
            services: StoredValue::new_local(Rc::new(services)),
        }
    }

    pub fn services(&self) -> Rc<Services> {
        self.services.get_value()
    }

    /// Navigate within the app, adding a history entry
    pub fn navigate(&self, route: Route) {
        browser::set_location(&route.to_href(), false);
        self.set_route.set(route);
    }

    /// Rewrite the current location without a history entry
    pub fn redirect(&self, route: Route) {
        browser::set_location(&route.to_href(), true);
        self.set_route.set(route);
    }

    /// Re-read the location after back/forward
    pub fn sync_location(&self) {
        let (path, query) = browser::current_location();
        self.set_route.set(Route::parse(&path, &query));
    }

    /// Copy the session gate's flag into the reactive graph
    pub fn refresh_session(&self) {
        let authenticated = self.services.with_value(|s| s.session.is_authenticated());
        self.set_authenticated.set(authenticated);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
