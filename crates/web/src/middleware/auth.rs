use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode, header},
    middleware::Next,
    response::Response,
};
use std::collections::HashSet;

/// Bearer API-key check at the boundary. Handlers behind it receive no
/// identity: the aggregation pipeline takes only explicit inputs.
pub async fn require_api_key(
    State(keys): State<ApiKeySet>,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    match bearer_token(request.headers()) {
        Some(token) if keys.contains(token) => Ok(next.run(request).await),
        _ => {
            tracing::warn!("Rejected request with missing or unknown API key");
            Err(StatusCode::UNAUTHORIZED)
        }
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Accepted dashboard keys, parsed from a comma-separated environment
/// value. An empty value accepts nothing.
#[derive(Clone)]
pub struct ApiKeySet {
    keys: HashSet<String>,
}

impl ApiKeySet {
    pub fn parse(raw: &str) -> Self {
        let keys = raw
            .split(',')
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(str::to_owned)
            .collect();

        Self { keys }
    }

    fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_keys() {
        let keys = ApiKeySet::parse("alpha, beta ,,gamma");
        assert!(keys.contains("alpha"));
        assert!(keys.contains("beta"));
        assert!(keys.contains("gamma"));
        assert!(!keys.contains(""));
        assert!(!keys.contains("delta"));
    }

    #[test]
    fn extracts_bearer_token_from_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, "Bearer sesame".parse().unwrap());
        assert_eq!(bearer_token(&headers), Some("sesame"));

        headers.insert(header::AUTHORIZATION, "Basic sesame".parse().unwrap());
        assert_eq!(bearer_token(&headers), None);

        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }
}
