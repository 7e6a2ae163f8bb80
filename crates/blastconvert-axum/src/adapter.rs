//! Request adapter.
//!
//! Normalizes every inbound shape (axum request, multiplexed serverless
//! event, per-route serverless event) into one [`CanonicalRequest`]. The
//! body is passed through unparsed; decoding happens in the router so a
//! bad body becomes a validation error instead of an adapter failure.

/// Logical routes served by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    Health,
    Models,
    Convert,
}

/// `Allow` value used when no route matched.
pub const ALL_METHODS: &str = "GET, POST, OPTIONS";

impl RouteKind {
    pub const ALL: [Self; 3] = [Self::Health, Self::Models, Self::Convert];

    /// Canonical path of the route.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Health => "/health",
            Self::Models => "/models",
            Self::Convert => "/convert",
        }
    }

    /// Verb assumed when an event dedicated to this route omits one.
    pub const fn default_method(self) -> &'static str {
        match self {
            Self::Health | Self::Models => "GET",
            Self::Convert => "POST",
        }
    }

    /// Verbs advertised in `Allow` and CORS headers.
    pub const fn allowed_methods(self) -> &'static str {
        match self {
            Self::Health | Self::Models => "GET, OPTIONS",
            Self::Convert => "POST, OPTIONS",
        }
    }

    /// Match `path` by suffix, so the service can be mounted under any base path.
    pub fn resolve(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        Self::ALL.into_iter().find(|route| {
            let suffix = route.path();
            trimmed == suffix || trimmed.ends_with(suffix)
        })
    }
}

/// Transport-independent request triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalRequest {
    /// Upper-case HTTP verb.
    pub method: String,
    pub path: String,
    pub raw_body: String,
}

impl CanonicalRequest {
    /// Normalize loosely-typed inbound fields.
    ///
    /// With a `dedicated` route the path is that route's path and a
    /// missing verb defaults to the route's verb. Without one, a missing
    /// verb defaults to `GET` and a missing path to `/`.
    pub fn normalize(
        method: Option<&str>,
        path: Option<&str>,
        raw_body: String,
        dedicated: Option<RouteKind>,
    ) -> Self {
        let method = method
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map_or_else(
                || dedicated.map_or("GET", RouteKind::default_method).to_string(),
                str::to_ascii_uppercase,
            );

        let path = match dedicated {
            Some(route) => route.path().to_string(),
            None => path
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .unwrap_or("/")
                .to_string(),
        };

        Self {
            method,
            path,
            raw_body,
        }
    }

    /// Build from an HTTP request seen by the axum front end.
    pub fn from_http(method: &str, path: &str, body: &[u8]) -> Self {
        Self::normalize(
            Some(method),
            Some(path),
            String::from_utf8_lossy(body).into_owned(),
            None,
        )
    }
}
