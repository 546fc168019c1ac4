//! Route definitions for the master list.
//!
//! ```text
//! POST   /                                  create_master_card (admin)
//! GET    /                                  list_master_cards
//! GET    /{pattern_code}                    get_master_card
//! PUT    /{pattern_code}                    update_master_card (admin)
//! GET    /{pattern_code}/specifications     get_specifications (parsed view)
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::master_card;
use crate::state::AppState;

/// Master card routes, nested under `/master-cards`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(master_card::list_master_cards).post(master_card::create_master_card),
        )
        .route(
            "/{pattern_code}",
            get(master_card::get_master_card).put(master_card::update_master_card),
        )
        .route(
            "/{pattern_code}/specifications",
            get(master_card::get_specifications),
        )
}
