use url::Url;

use crate::{GeoError, LocationRecord};

/// Embeddable map widget the site points its iframe at.
pub const DEFAULT_EMBED_BASE: &str =
    "http://maps.google.com/maps?f=q&source=s_q&hl=en&geocode=&ie=UTF8&iwloc=A&output=embed";

/// What the map should show: a zoom level and a free-text place query.
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    pub zoom: u8,
    pub query: String,
}

impl MapView {
    pub fn new(zoom: u8, query: impl Into<String>) -> Self {
        Self { zoom, query: query.into() }
    }

    /// Picks the most specific view a record supports.
    ///
    /// Ladder: city+region+country (9), region+country (4), then zoom 3 on
    /// coordinates or the bare country. Reserved or empty records are `None`.
    pub fn resolve(record: &LocationRecord) -> Option<MapView> {
        if record.is_reserved() {
            return None;
        }

        let view = match (record.city(), record.region(), record.country()) {
            (Some(city), Some(region), Some(country)) => {
                MapView::new(9, format!("{city}, {region}, {country}"))
            }
            (_, Some(region), Some(country)) => MapView::new(4, format!("{region}, {country}")),
            _ => match (record.coordinates(), record.country()) {
                (Some((lat, lon)), _) => MapView::new(3, format!("{lat:.2} {lon:.2}")),
                (None, Some(country)) => MapView::new(3, country),
                (None, None) => return None,
            },
        };
        Some(view)
    }

    /// World view shown before any lookup succeeds.
    pub fn fallback() -> MapView {
        MapView::new(0, "africa")
    }
}

/// URL template for the map embed: `<base>&z=<zoom>&q=<query>`.
#[derive(Debug, Clone, PartialEq)]
pub struct MapEmbed {
    base: Url,
}

impl Default for MapEmbed {
    fn default() -> Self {
        Self { base: Url::parse(DEFAULT_EMBED_BASE).expect("default embed url is valid") }
    }
}

impl MapEmbed {
    pub fn new(base: &str) -> Result<Self, GeoError> {
        Ok(Self { base: Url::parse(base)? })
    }

    pub fn url(&self, view: &MapView) -> Url {
        let mut url = self.base.clone();
        url.query_pairs_mut()
            .append_pair("z", &view.zoom.to_string())
            .append_pair("q", &view.query);
        url
    }

    /// URL for the record's view, or the fallback view when it has none.
    pub fn url_for(&self, record: &LocationRecord) -> Url {
        let view = MapView::resolve(record).unwrap_or_else(|| {
            log::debug!("location record did not resolve, using fallback view");
            MapView::fallback()
        });
        self.url(&view)
    }
}
