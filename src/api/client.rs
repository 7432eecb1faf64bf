//! Authenticated client for kuwo.cn's undocumented JSON endpoints.
//!
//! The service checks three things on every request: a `secret` header
//! copied from a browser session, the session cookies, and a `Referer`
//! matching the page the request would have come from. Query strings also
//! carry a fixed set of parameters (`httpsStatus`, `reqId`, `plat`, `from`)
//! alongside the endpoint-specific ones.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{
    cookie::Jar,
    header::{self, HeaderMap, HeaderValue},
    Client, StatusCode, Url,
};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::credentials::Credentials;
use crate::error::{KuwoError, Result};
use crate::models::{ApiResponse, PlaylistOrder};

/// Base URL for the Kuwo website and API.
const BASE_URL: &str = "https://kuwo.cn";

/// Fixed user agent; the service rejects obviously non-browser agents.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Every call blocks at most this long before yielding a timeout error.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Well-known chart identifiers.
pub mod chart {
    /// Soaring chart (biggest recent gains).
    pub const SOARING: u32 = 93;
    /// Hot songs chart.
    pub const HOT: u32 = 16;
    /// Popular chart.
    pub const POPULAR: u32 = 17;
}

/// Authenticated Kuwo web API client.
///
/// Holds a single long-lived HTTP session; connections are reused across
/// calls but no state beyond that accumulates.
///
/// # Example
///
/// ```rust,no_run
/// use kuwors::{chart, Credentials, KuwoApi};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let creds = Credentials::new("secret_from_browser", "k1=v1; k2=v2");
///     let api = KuwoApi::new(&creds)?;
///     let response = api.rank(chart::POPULAR, 1, 10).await?;
///     for song in response.songs() {
///         println!("{} - {}", song.name, song.artist);
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct KuwoApi {
    client: Client,
}

impl KuwoApi {
    /// Create a new client from credentials.
    ///
    /// Does not check credential plausibility; call
    /// [`Credentials::validate`] first if the secret came from user input.
    ///
    /// # Errors
    ///
    /// Returns `BadCredentials` if the secret contains bytes that are not
    /// valid in a header, or `ClientBuild` if the HTTP client cannot be
    /// constructed.
    pub fn new(credentials: &Credentials) -> Result<Self> {
        let base = BASE_URL.parse::<Url>().unwrap();

        let jar = Arc::new(Jar::default());
        for (name, value) in credentials.cookie_pairs() {
            jar.add_cookie_str(&format!("{}={}", name, value), &base);
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            HeaderValue::from_static("application/json, text/plain, */*"),
        );
        let secret = HeaderValue::from_str(credentials.secret()).map_err(|_| {
            KuwoError::BadCredentials("secret contains invalid header bytes".to_string())
        })?;
        headers.insert("secret", secret);

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .cookie_provider(jar)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(KuwoError::ClientBuild)?;

        Ok(Self { client })
    }

    /// Perform a GET against one endpoint and decode the envelope.
    ///
    /// Caller parameters are merged with the fixed ones; the referer is
    /// attached per request. No retries.
    async fn send(
        &self,
        endpoint: &str,
        params: Vec<(&'static str, String)>,
        referer: &str,
    ) -> Result<ApiResponse> {
        let url = format!("{}{}", BASE_URL, endpoint);
        let query = with_fixed_params(params);
        debug!("GET {} (referer: {})", url, referer);

        let response = self
            .client
            .get(&url)
            .query(&query)
            .header(header::REFERER, referer)
            .send()
            .await
            .map_err(KuwoError::from_request)?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!("{} answered HTTP {}", endpoint, status);
            return Err(KuwoError::HttpStatus(status.as_u16()));
        }

        response
            .json::<ApiResponse>()
            .await
            .map_err(KuwoError::from_request)
    }

    /// Fetch one page of a chart ranking.
    ///
    /// See [`chart`] for well-known ids; the site's default view is
    /// [`chart::POPULAR`] at 10 songs per page.
    pub async fn rank(&self, chart_id: u32, page: u32, size: u32) -> Result<ApiResponse> {
        self.send(
            "/api/www/bang/bang/musicList",
            rank_params(chart_id, page, size),
            &format!("{}/rankList", BASE_URL),
        )
        .await
    }

    /// Fetch one page of the recommended-playlist listing.
    pub async fn playlist(
        &self,
        page: u32,
        size: u32,
        order: PlaylistOrder,
    ) -> Result<ApiResponse> {
        self.send(
            "/api/www/classify/playlist/getRcmPlayList",
            playlist_params(page, size, order),
            &format!("{}/playlists", BASE_URL),
        )
        .await
    }

    /// Fetch one page of a playlist's track contents.
    ///
    /// The site fetches 100 tracks per page by default.
    pub async fn playlist_detail(&self, pid: &str, page: u32, size: u32) -> Result<ApiResponse> {
        self.send(
            "/api/www/playlist/playListInfo",
            detail_params(pid, page, size),
            &format!("{}/playlist_detail/{}", BASE_URL, pid),
        )
        .await
    }
}

/// Append the parameters the service expects on every request: the protocol
/// flag, a fresh request id, the platform tag and an empty `from`.
fn with_fixed_params(mut params: Vec<(&'static str, String)>) -> Vec<(&'static str, String)> {
    params.push(("httpsStatus", "1".to_string()));
    params.push(("reqId", Uuid::new_v4().to_string()));
    params.push(("plat", "web_www".to_string()));
    params.push(("from", String::new()));
    params
}

fn rank_params(chart_id: u32, page: u32, size: u32) -> Vec<(&'static str, String)> {
    vec![
        ("bangId", chart_id.to_string()),
        ("pn", page.to_string()),
        ("rn", size.to_string()),
    ]
}

fn playlist_params(page: u32, size: u32, order: PlaylistOrder) -> Vec<(&'static str, String)> {
    let mut params = vec![("pn", page.to_string()), ("rn", size.to_string())];
    // The site only ever sends order=hot; "new" relies on the service default.
    if order == PlaylistOrder::Hot {
        params.push(("order", "hot".to_string()));
    }
    params
}

fn detail_params(pid: &str, page: u32, size: u32) -> Vec<(&'static str, String)> {
    vec![
        ("pid", pid.to_string()),
        ("pn", page.to_string()),
        ("rn", size.to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value_of<'a>(params: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_fixed_params_always_present() {
        let query = with_fixed_params(rank_params(93, 1, 5));
        assert_eq!(value_of(&query, "httpsStatus"), Some("1"));
        assert_eq!(value_of(&query, "plat"), Some("web_www"));
        assert_eq!(value_of(&query, "from"), Some(""));
        assert!(value_of(&query, "reqId").is_some());
        // caller params survive the merge
        assert_eq!(value_of(&query, "bangId"), Some("93"));
        assert_eq!(value_of(&query, "pn"), Some("1"));
        assert_eq!(value_of(&query, "rn"), Some("5"));
    }

    #[test]
    fn test_request_id_is_fresh_per_call() {
        let first = with_fixed_params(Vec::new());
        let second = with_fixed_params(Vec::new());
        assert_ne!(value_of(&first, "reqId"), value_of(&second, "reqId"));
    }

    #[test]
    fn test_playlist_params_include_order_only_for_hot() {
        let hot = playlist_params(1, 20, PlaylistOrder::Hot);
        assert_eq!(value_of(&hot, "order"), Some("hot"));

        let new = playlist_params(1, 20, PlaylistOrder::New);
        assert_eq!(value_of(&new, "order"), None);
    }

    #[test]
    fn test_detail_params() {
        let params = detail_params("3134629100", 1, 100);
        assert_eq!(value_of(&params, "pid"), Some("3134629100"));
        assert_eq!(value_of(&params, "pn"), Some("1"));
        assert_eq!(value_of(&params, "rn"), Some("100"));
    }

    #[test]
    fn test_client_construction_with_fake_credentials() {
        let creds = Credentials::new("not-checked-here", "a=1; b=2");
        assert!(KuwoApi::new(&creds).is_ok());
    }

    #[test]
    fn test_client_rejects_unsendable_secret() {
        let creds = Credentials::new("line\nbreak", "");
        assert!(matches!(
            KuwoApi::new(&creds),
            Err(KuwoError::BadCredentials(_))
        ));
    }
}
