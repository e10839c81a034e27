//! API route table.
//!
//! Every endpoint is declared once in [`route_table`] with its method, path,
//! published media-type version and access level. [`api_router`] turns the table
//! into an axum [`Router`], wrapping each route in media-type negotiation and the
//! authenticated ones in bearer token authentication.

use axum::{
    Router,
    handler::Handler,
    middleware,
    routing::{MethodFilter, MethodRouter, on},
};

use crate::api::handlers::{
    about_handler, box_codes_handler, clear_cache_handler, convenience_fees_handler,
    denominations_handler, divisions_handler, health_handler, identity_profile_roles_handler,
    miscellaneous_text_handler, office_codes_handler, schools_handler, version_handler,
    work_tasks_handler,
};
use crate::api::middleware::{auth, media_type, media_type::RouteVersion};
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Anonymous,
    Authenticated,
}

pub struct RouteEntry {
    pub name: &'static str,
    pub method: MethodFilter,
    pub path: &'static str,
    pub version: u32,
    pub access: Access,
    pub handler: MethodRouter<AppState>,
}

impl RouteEntry {
    fn new<H, T>(
        name: &'static str,
        method: MethodFilter,
        path: &'static str,
        version: u32,
        access: Access,
        handler: H,
    ) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        Self {
            name,
            method,
            path,
            version,
            access,
            handler: on(method, handler),
        }
    }
}

/// All endpoints served by the API.
///
/// | Method | Path | Access |
/// |---|---|---|
/// | GET | `/about` | token |
/// | GET | `/healthcheck`, `/health` | public |
/// | GET | `/version` | public |
/// | GET | `/denominations` | token |
/// | GET | `/divisions` | token |
/// | GET | `/schools` | token |
/// | GET | `/office-codes` | token |
/// | GET | `/ecommerce/convenience-fees` | token |
/// | GET | `/miscellaneous-text` | token |
/// | GET | `/tax-form-boxcodes` | public |
/// | POST | `/eedm-cache-keys` | token |
/// | GET | `/identity-profile-roles` | token |
/// | GET | `/work-tasks?personId=` | token |
pub fn route_table() -> Vec<RouteEntry> {
    use Access::{Anonymous, Authenticated};
    use MethodFilter as M;

    vec![
        RouteEntry::new("about", M::GET, "/about", 1, Authenticated, about_handler),
        RouteEntry::new("health", M::GET, "/healthcheck", 1, Anonymous, health_handler),
        RouteEntry::new("health", M::GET, "/health", 1, Anonymous, health_handler),
        RouteEntry::new("version", M::GET, "/version", 1, Anonymous, version_handler),
        RouteEntry::new(
            "denominations",
            M::GET,
            "/denominations",
            1,
            Authenticated,
            denominations_handler,
        ),
        RouteEntry::new("divisions", M::GET, "/divisions", 1, Authenticated, divisions_handler),
        RouteEntry::new("schools", M::GET, "/schools", 1, Authenticated, schools_handler),
        RouteEntry::new(
            "office-codes",
            M::GET,
            "/office-codes",
            1,
            Authenticated,
            office_codes_handler,
        ),
        RouteEntry::new(
            "convenience-fees",
            M::GET,
            "/ecommerce/convenience-fees",
            1,
            Authenticated,
            convenience_fees_handler,
        ),
        RouteEntry::new(
            "miscellaneous-text",
            M::GET,
            "/miscellaneous-text",
            1,
            Authenticated,
            miscellaneous_text_handler,
        ),
        RouteEntry::new(
            "tax-form-boxcodes",
            M::GET,
            "/tax-form-boxcodes",
            1,
            Anonymous,
            box_codes_handler,
        ),
        RouteEntry::new(
            "eedm-cache-keys",
            M::POST,
            "/eedm-cache-keys",
            1,
            Authenticated,
            clear_cache_handler,
        ),
        RouteEntry::new(
            "identity-profile-roles",
            M::GET,
            "/identity-profile-roles",
            1,
            Authenticated,
            identity_profile_roles_handler,
        ),
        RouteEntry::new("work-tasks", M::GET, "/work-tasks", 1, Authenticated, work_tasks_handler),
    ]
}

/// Builds the routers for one access level from the table.
///
/// Authentication is a route layer so unknown paths still fall through to 404
/// instead of 401.
pub fn routes_for(state: &AppState, access: Access) -> Router<AppState> {
    route_table()
        .into_iter()
        .filter(|entry| entry.access == access)
        .fold(Router::new(), |router, entry| {
            tracing::debug!(
                name = entry.name,
                path = entry.path,
                method = ?entry.method,
                version = entry.version,
                ?access,
                "Registering route"
            );

            let mut handler = entry.handler.route_layer(middleware::from_fn_with_state(
                RouteVersion(entry.version),
                media_type::layer,
            ));
            if access == Access::Authenticated {
                handler = handler.route_layer(middleware::from_fn_with_state(
                    state.clone(),
                    auth::layer,
                ));
            }

            router.route(entry.path, handler)
        })
}
