//! Loaders for the collaborator data: no-fly zones, landmarks, shops and
//! orders.  Any failure is reported as `UpstreamUnavailable` so the run
//! stops before the world is built.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use ld_core::{CoreError, CoreResult, LngLat, Polygon};
use ld_orders::Order;

// ── GeoJSON subset ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Deserialize)]
struct Feature {
    geometry:   Geometry,
    #[serde(default)]
    properties: Properties,
}

#[derive(Deserialize, Default)]
struct Properties {
    name: Option<String>,
}

#[derive(Deserialize)]
#[serde(tag = "type", content = "coordinates")]
enum Geometry {
    Point([f64; 2]),
    Polygon(Vec<Vec<[f64; 2]>>),
}

fn point([lng, lat]: [f64; 2]) -> LngLat {
    LngLat::new(lng, lat)
}

fn read_json<T: DeserializeOwned>(path: &Path, what: &'static str) -> CoreResult<T> {
    let text = fs::read_to_string(path)
        .map_err(|e| CoreError::upstream(what, format!("{}: {e}", path.display())))?;
    serde_json::from_str(&text)
        .map_err(|e| CoreError::upstream(what, format!("{}: {e}", path.display())))
}

// ── Loaders ───────────────────────────────────────────────────────────────────

/// Outer rings of every polygon feature.
pub fn load_no_fly_zones(path: &Path) -> CoreResult<Vec<Polygon>> {
    const WHAT: &str = "no-fly zones";
    let fc: FeatureCollection = read_json(path, WHAT)?;
    let mut zones = Vec::with_capacity(fc.features.len());
    for feature in fc.features {
        let Geometry::Polygon(rings) = feature.geometry else {
            return Err(CoreError::upstream(WHAT, "expected Polygon features"));
        };
        let Some(outer) = rings.into_iter().next() else {
            return Err(CoreError::upstream(WHAT, "polygon without a ring"));
        };
        let polygon = Polygon::new(outer.into_iter().map(point).collect())
            .map_err(|e| CoreError::upstream(WHAT, e))?;
        zones.push(polygon);
    }
    Ok(zones)
}

/// Named point features.
pub fn load_landmarks(path: &Path) -> CoreResult<Vec<(String, LngLat)>> {
    const WHAT: &str = "landmarks";
    let fc: FeatureCollection = read_json(path, WHAT)?;
    fc.features
        .into_iter()
        .map(|feature| match (feature.properties.name, feature.geometry) {
            (Some(name), Geometry::Point(c)) => Ok((name, point(c))),
            _ => Err(CoreError::upstream(WHAT, "expected named Point features")),
        })
        .collect()
}

#[derive(Deserialize)]
struct ShopRecord {
    name:     String,
    location: LngLat,
}

pub fn load_shops(path: &Path) -> CoreResult<Vec<(String, LngLat)>> {
    let shops: Vec<ShopRecord> = read_json(path, "shops")?;
    Ok(shops.into_iter().map(|s| (s.name, s.location)).collect())
}

pub fn load_orders(path: &Path) -> CoreResult<Vec<Order>> {
    ld_orders::load_orders_csv(path).map_err(|e| CoreError::upstream("orders", e))
}
