//! Route definitions for the seven department inspection forms.
//!
//! Every form mounts the same verb set:
//!
//! ```text
//! POST   /<form>                  create
//! GET    /<form>                  list all
//! GET    /<form>/{trial_id}       get by trial
//! PUT    /<form>/{trial_id}       update (COALESCE partial when is_edit)
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::{
    dimensional, machine_shop, material_correction, metallurgical, mould_correction,
    sand_properties, visual,
};
use crate::state::AppState;

/// Inspection routes, nested under `/inspections`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/sand-properties",
            get(sand_properties::list_sand_properties)
                .post(sand_properties::create_sand_properties),
        )
        .route(
            "/sand-properties/{trial_id}",
            get(sand_properties::get_sand_properties)
                .put(sand_properties::update_sand_properties),
        )
        .route(
            "/mould-corrections",
            get(mould_correction::list_mould_corrections)
                .post(mould_correction::create_mould_correction),
        )
        .route(
            "/mould-corrections/{trial_id}",
            get(mould_correction::get_mould_correction)
                .put(mould_correction::update_mould_correction),
        )
        .route(
            "/metallurgical",
            get(metallurgical::list_metallurgical_inspections)
                .post(metallurgical::create_metallurgical_inspection),
        )
        .route(
            "/metallurgical/{trial_id}",
            get(metallurgical::get_metallurgical_inspection)
                .put(metallurgical::update_metallurgical_inspection),
        )
        .route(
            "/visual",
            get(visual::list_visual_inspections).post(visual::create_visual_inspection),
        )
        .route(
            "/visual/{trial_id}",
            get(visual::get_visual_inspection).put(visual::update_visual_inspection),
        )
        .route(
            "/dimensional",
            get(dimensional::list_dimensional_inspections)
                .post(dimensional::create_dimensional_inspection),
        )
        .route(
            "/dimensional/{trial_id}",
            get(dimensional::get_dimensional_inspection)
                .put(dimensional::update_dimensional_inspection),
        )
        .route(
            "/machine-shop",
            get(machine_shop::list_machine_shop_records)
                .post(machine_shop::create_machine_shop_record),
        )
        .route(
            "/machine-shop/{trial_id}",
            get(machine_shop::get_machine_shop_record)
                .put(machine_shop::update_machine_shop_record),
        )
        .route(
            "/material-corrections",
            get(material_correction::list_material_corrections)
                .post(material_correction::create_material_correction),
        )
        .route(
            "/material-corrections/{trial_id}",
            get(material_correction::get_material_correction)
                .put(material_correction::update_material_correction),
        )
}
