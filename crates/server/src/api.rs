//! HTTP query API.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::config::SearchConfig;
use quadtree::{Boundary, QuadTree};

/// Shared state for request handlers.
#[derive(Clone)]
pub struct AppState {
    pub tree: Arc<QuadTree<u32>>,
    pub search: SearchConfig,
}

#[derive(Debug, Deserialize)]
struct NearbyParams {
    lat: f64,
    lon: f64,
}

/// One driver in a nearby-search response.
#[derive(Debug, Serialize)]
struct DriverResponse {
    id: u32,
    lat: f64,
    lon: f64,
}

/// Build the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/find-nearby", get(find_nearby))
        .with_state(state)
}

/// Find every driver inside the fixed-extent rectangle centered on the
/// requested coordinate. Missing or malformed `lat`/`lon` are rejected by
/// the extractor with a 400.
async fn find_nearby(
    State(state): State<AppState>,
    Query(params): Query<NearbyParams>,
) -> Json<Vec<DriverResponse>> {
    let area = Boundary::new(
        params.lon,
        params.lat,
        state.search.radius_x,
        state.search.radius_y,
    );
    let found = state.tree.query(&area);
    debug!(
        "find-nearby at ({}, {}): {} drivers",
        params.lat,
        params.lon,
        found.len()
    );

    let results = found
        .into_iter()
        .map(|p| DriverResponse {
            id: p.data,
            lat: p.y,
            lon: p.x,
        })
        .collect();

    Json(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadtree::Point;

    fn state_with_drivers(drivers: &[(f64, f64, u32)]) -> AppState {
        let tree = QuadTree::new(Boundary::new(0.0, 0.0, 180.0, 90.0), 4);
        for &(lon, lat, id) in drivers {
            assert!(tree.insert(Point::new(lon, lat, id)));
        }
        AppState {
            tree: Arc::new(tree),
            search: SearchConfig {
                radius_x: 20.0,
                radius_y: 20.0,
            },
        }
    }

    #[tokio::test]
    async fn find_nearby_returns_drivers_in_the_search_area() {
        let state = state_with_drivers(&[
            (10.0, 10.0, 1),
            (15.0, 5.0, 2),
            // Far to the west, outside the 20x20 search box.
            (-120.0, 10.0, 3),
        ]);

        let Json(mut drivers) = find_nearby(
            State(state),
            Query(NearbyParams { lat: 8.0, lon: 12.0 }),
        )
        .await;

        drivers.sort_by_key(|d| d.id);
        assert_eq!(drivers.len(), 2);
        assert_eq!(drivers[0].id, 1);
        assert_eq!((drivers[0].lon, drivers[0].lat), (10.0, 10.0));
        assert_eq!(drivers[1].id, 2);
    }

    #[tokio::test]
    async fn find_nearby_with_no_matches_is_empty() {
        let state = state_with_drivers(&[(100.0, 50.0, 9)]);

        let Json(drivers) = find_nearby(
            State(state),
            Query(NearbyParams { lat: -50.0, lon: -100.0 }),
        )
        .await;

        assert!(drivers.is_empty());
    }

    #[test]
    fn driver_response_serializes_flat() {
        let response = DriverResponse {
            id: 42,
            lat: -12.5,
            lon: 99.25,
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": 42, "lat": -12.5, "lon": 99.25})
        );
    }
}
