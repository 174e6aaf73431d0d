// crates/wayfarer-core/src/map.rs
use crate::model::LatLng;
use crate::traits::MapSurface;
use serde::{Deserialize, Serialize};

/// Axis-aligned lat/lng box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl GeoBounds {
    /// Tightest box around `points`, `None` when there are none.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a LatLng>) -> Option<Self> {
        points.into_iter().fold(None, |acc, p| {
            Some(match acc {
                None => GeoBounds {
                    south: p.lat,
                    west: p.lng,
                    north: p.lat,
                    east: p.lng,
                },
                Some(b) => GeoBounds {
                    south: b.south.min(p.lat),
                    west: b.west.min(p.lng),
                    north: b.north.max(p.lat),
                    east: b.east.max(p.lng),
                },
            })
        })
    }

    /// Extend each side by `ratio` of the box's height (north/south) or
    /// width (east/west). `0.3` adds a 30% margin on every side.
    pub fn padded(&self, ratio: f64) -> Self {
        let dlat = (self.north - self.south).abs() * ratio;
        let dlng = (self.east - self.west).abs() * ratio;
        GeoBounds {
            south: self.south - dlat,
            west: self.west - dlng,
            north: self.north + dlat,
            east: self.east + dlng,
        }
    }

    pub fn contains(&self, p: &LatLng) -> bool {
        (self.south..=self.north).contains(&p.lat) && (self.west..=self.east).contains(&p.lng)
    }

    pub fn center(&self) -> LatLng {
        LatLng::new((self.south + self.north) / 2.0, (self.west + self.east) / 2.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedMarker {
    pub position: LatLng,
    pub popup: String,
}

/// Headless [`MapSurface`]: remembers what a real widget would show.
///
/// Used by the CLI and by tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingMap {
    markers: Vec<PlacedMarker>,
    viewport: Option<GeoBounds>,
    focus: Option<(LatLng, u8)>,
    fit_calls: usize,
    resize_calls: usize,
}

impl RecordingMap {
    pub fn markers(&self) -> &[PlacedMarker] {
        &self.markers
    }

    /// The padded box of the last `fit_to_bounds`.
    pub fn viewport(&self) -> Option<GeoBounds> {
        self.viewport
    }

    /// Target and zoom of the last `fly_to`.
    pub fn focus(&self) -> Option<(LatLng, u8)> {
        self.focus
    }

    pub fn fit_calls(&self) -> usize {
        self.fit_calls
    }

    pub fn resize_calls(&self) -> usize {
        self.resize_calls
    }
}

impl MapSurface for RecordingMap {
    fn place_marker(&mut self, lat: f64, lng: f64, popup: &str) {
        self.markers.push(PlacedMarker {
            position: LatLng::new(lat, lng),
            popup: popup.to_string(),
        });
    }

    fn clear_markers(&mut self) {
        self.markers.clear();
    }

    fn fit_to_bounds(&mut self, bounds: &GeoBounds, padding_factor: f64) {
        self.viewport = Some(bounds.padded(padding_factor));
        self.fit_calls += 1;
    }

    fn fly_to(&mut self, lat: f64, lng: f64, zoom: u8, _duration_secs: f64) {
        self.focus = Some((LatLng::new(lat, lng), zoom));
    }

    fn invalidate_size_after_visibility_change(&mut self) {
        self.resize_calls += 1;
    }
}
