//! Provider endpoints: URL template, query parameters and the top-level key holding the list.

/// One GET endpoint of the data provider with its parameters substituted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// `admin/location/states`
    States,
    /// `admin/location/districts/{state_id}`
    Districts { state_id: u32 },
    /// `appointment/sessions/public/findByPin?pincode=..&date=..`
    SessionsByPin { pincode: String, date: String },
    /// `appointment/sessions/public/findByDistrict?district_id=..&date=..`
    SessionsByDistrict { district_id: u32, date: String },
}

impl Endpoint {
    /// Path relative to the API base (no leading slash).
    pub fn path(&self) -> String {
        match self {
            Endpoint::States => "admin/location/states".to_string(),
            Endpoint::Districts { state_id } => format!("admin/location/districts/{}", state_id),
            Endpoint::SessionsByPin { .. } => "appointment/sessions/public/findByPin".to_string(),
            Endpoint::SessionsByDistrict { .. } => {
                "appointment/sessions/public/findByDistrict".to_string()
            }
        }
    }

    /// Query parameters, values verbatim.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        match self {
            Endpoint::States | Endpoint::Districts { .. } => Vec::new(),
            Endpoint::SessionsByPin { pincode, date } => {
                vec![("pincode", pincode.clone()), ("date", date.clone())]
            }
            Endpoint::SessionsByDistrict { district_id, date } => {
                vec![("district_id", district_id.to_string()), ("date", date.clone())]
            }
        }
    }

    /// Top-level JSON key expected to hold the record list.
    pub fn list_key(&self) -> &'static str {
        match self {
            Endpoint::States => "states",
            Endpoint::Districts { .. } => "districts",
            Endpoint::SessionsByPin { .. } | Endpoint::SessionsByDistrict { .. } => "sessions",
        }
    }

    /// Full URL for logging: base + path + encoded query.
    pub fn url(&self, base_url: &str) -> String {
        let mut url = format!("{}/{}", base_url.trim_end_matches('/'), self.path());
        let query = self.query();
        if !query.is_empty() {
            let pairs: Vec<String> = query.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
            url.push('?');
            url.push_str(&pairs.join("&"));
        }
        url
    }
}
