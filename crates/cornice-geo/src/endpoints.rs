use url::Url;

use crate::GeoError;

/// Base URL of the lookup service and the two routes the front end uses.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoints {
    base: Url,
}

impl Endpoints {
    pub fn new(base: &str) -> Result<Self, GeoError> {
        let base = Url::parse(base)?;
        if base.cannot_be_a_base() {
            return Err(GeoError::CannotBeABase(base.into()));
        }
        Ok(Self { base })
    }

    #[inline]
    pub fn base(&self) -> &Url {
        &self.base
    }

    /// `GET <base>/json/<query>`. An empty query looks up the caller's own address.
    pub fn lookup_url(&self, query: &str) -> Url {
        self.route(&["json", query])
    }

    /// `GET <base>/submit?latitude=..&longitude=..`, the crowd-sourced
    /// coordinate submission.
    pub fn submit_url(&self, latitude: f64, longitude: f64) -> Url {
        let mut url = self.route(&["submit"]);
        url.query_pairs_mut()
            .append_pair("latitude", &latitude.to_string())
            .append_pair("longitude", &longitude.to_string());
        url
    }

    fn route(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        url.set_query(None);
        // `new` rejected cannot-be-a-base URLs, so segments are always available.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}
