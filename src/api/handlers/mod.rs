//! REST endpoint handlers organized by resource.

pub mod bookings;
pub mod events;
pub mod signups;
pub mod site_content;
pub mod system;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes under `/api/v1`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(signups::routes())
        .merge(bookings::routes())
        .merge(site_content::routes())
        .merge(events::routes())
}
