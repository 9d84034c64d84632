// Data modules
pub mod models; // Classes, slots, calendar events, reservations
pub mod seed;   // Fallback data when nothing is stored
pub mod store;  // Key/value persistence (one JSON document per key)
pub mod repository; // Typed access to the store keys

// Planning logic, independent from HTTP
pub mod admin;
pub mod calendar;
pub mod planning;
pub mod reservations;
pub mod stats;

pub mod config;
pub mod error;
pub mod state;

// HTTP handlers
pub mod routes_admin;
pub mod routes_calendar;
pub mod routes_planning;
pub mod routes_reservations;
pub mod routes_stats;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use state::AppState;

/// All JSON endpoints, nested under `/api`.
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        // catalog
        .route("/classes", get(routes_admin::get_classes))
        .route(
            "/admin/classes",
            get(routes_admin::list_classes).post(routes_admin::create_class),
        )
        .route(
            "/admin/classes/:id",
            put(routes_admin::update_class).delete(routes_admin::delete_class),
        )
        // planning
        .route("/planning", get(routes_planning::get_planning))
        .route("/planning/book", post(routes_planning::book))
        // reservations
        .route("/reservations", get(routes_reservations::list_reservations))
        .route(
            "/reservations/:id/cancel",
            post(routes_reservations::cancel_reservation),
        )
        // calendar
        .route("/calendar", get(routes_calendar::get_calendar))
        .route("/calendar/events", post(routes_calendar::create_event))
        .route("/calendar/events/:id", delete(routes_calendar::delete_event))
        // statistics
        .route("/statistics", get(routes_stats::get_statistics))
        .route(
            "/statistics/categories.svg",
            get(routes_stats::get_category_chart),
        )
        .with_state(state);

    Router::new().nest("/api", api)
}
