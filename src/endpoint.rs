//! REST collections exposed by the backend and the paths built from them.

use std::fmt;

/// One REST collection under `/api/`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Equipment,
    Parts,
    Tasks,
    Schedules,
    Vendors,
    Users,
}

impl Endpoint {
    pub const fn segment(self) -> &'static str {
        match self {
            Endpoint::Equipment => "equipment",
            Endpoint::Parts => "parts",
            Endpoint::Tasks => "tasks",
            Endpoint::Schedules => "schedules",
            Endpoint::Vendors => "vendors",
            Endpoint::Users => "users",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.segment())
    }
}

/// `/api/{endpoint}/` for the collection, `/api/{endpoint}/{id}/` for one record.
/// The backend routes only match with the trailing slash.
pub fn endpoint_path(endpoint: Endpoint, id: Option<i64>) -> String {
    match id {
        Some(id) => format!("/api/{}/{id}/", endpoint.segment()),
        None => format!("/api/{}/", endpoint.segment()),
    }
}
