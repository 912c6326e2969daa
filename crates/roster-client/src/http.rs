//! Reqwest-backed user directory
//!
//! Owns transport details only: URL building, timeout, HTTP status mapping,
//! and JSON decoding into `roster_core` types.

use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use url::Url;

use roster_core::prelude::*;
use roster_core::{NewUser, PageRequest, UserPage};

use crate::directory::UserDirectory;
use crate::dto::{parse_error_message, RegisterUserRequest, UserPageDto};

/// Collection path, relative to the base URL
pub const USERS_PATH: &str = "admin/users";

/// Registration path, relative to the base URL
pub const REGISTER_PATH: &str = "admin/users/register";

/// Request timeout used when the caller has no preference
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!("roster/", env!("CARGO_PKG_VERSION"));

/// [`UserDirectory`] talking JSON over HTTP to the admin backend
#[derive(Debug, Clone)]
pub struct HttpUserDirectory {
    client: Client,
    base_url: Url,
}

impl HttpUserDirectory {
    /// Build a directory with its own reqwest client and request timeout.
    ///
    /// Fails with [`Error::InvalidUrl`] when `base_url` is not an absolute
    /// http(s) URL.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::http(format!("failed to build HTTP client: {e}")))?;
        Self::with_client(base_url, client)
    }

    /// Build a directory around an existing reqwest client
    pub fn with_client(base_url: &str, client: Client) -> Result<Self> {
        let base_url = parse_base_url(base_url)?;
        Ok(Self { client, base_url })
    }

    /// Normalized base URL (always ends with `/`)
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl UserDirectory for HttpUserDirectory {
    async fn list_users(&self, request: PageRequest) -> Result<UserPage> {
        let url = users_page_url(&self.base_url, request)?;
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        let dto: UserPageDto = serde_json::from_slice(body.as_ref())
            .map_err(|e| Error::decode(format!("invalid user page payload: {e}")))?;
        let page = UserPage::from(dto);
        debug!(
            "Received page {} ({} users, {} pages, {} total)",
            request.page,
            page.content.len(),
            page.total_pages,
            page.total_elements
        );
        Ok(page)
    }

    async fn register_user(&self, user: NewUser) -> Result<()> {
        let url = join_path(&self.base_url, REGISTER_PATH)?;
        debug!("POST {} (email={})", url, user.email);

        let response = self
            .client
            .post(url)
            .header(ACCEPT, "application/json")
            .json(&RegisterUserRequest::from(&user))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.bytes().await.map_err(map_transport_error)?;
        Err(map_status_error(status, body.as_ref()))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// URL helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Parse and normalize a backend base URL.
///
/// The path gets a trailing slash so relative joins append to it
/// (`http://host/api` + `admin/users` = `http://host/api/admin/users`).
/// Query and fragment are dropped.
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    let mut url = Url::parse(trimmed).map_err(|e| Error::invalid_url(trimmed, e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::invalid_url(
            trimmed,
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }
    if url.cannot_be_a_base() || url.host_str().is_none() {
        return Err(Error::invalid_url(trimmed, "URL has no host"));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}

/// URL of one listing page: `{base}admin/users?page={p}&size={s}`
pub fn users_page_url(base: &Url, request: PageRequest) -> Result<Url> {
    let mut url = join_path(base, USERS_PATH)?;
    url.query_pairs_mut()
        .append_pair("page", &request.page.to_string())
        .append_pair("size", &request.size.to_string());
    Ok(url)
}

fn join_path(base: &Url, path: &str) -> Result<Url> {
    base.join(path)
        .map_err(|e| Error::invalid_url(base.as_str(), e.to_string()))
}

// ─────────────────────────────────────────────────────────────────────────────
// Error mapping
// ─────────────────────────────────────────────────────────────────────────────

fn map_transport_error(error: reqwest::Error) -> Error {
    if error.is_timeout() {
        Error::http("request timed out")
    } else if error.is_connect() {
        Error::http(format!("connection failed: {error}"))
    } else {
        Error::http(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> Error {
    let message = parse_error_message(body);
    warn!(
        "Backend responded {} ({})",
        status,
        message.as_deref().unwrap_or("no message")
    );
    Error::http_status(status.as_u16(), message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::Role;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    // ─────────────────────────────────────────────────────────
    // Loopback backend
    // ─────────────────────────────────────────────────────────

    /// Accept one connection, answer it with a canned response, and hand the
    /// raw request text back through the join handle.
    async fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}/api/", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            request
        });

        (base, handle)
    }

    async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
        let mut data = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            data.extend_from_slice(&chunk[..n]);

            let text = String::from_utf8_lossy(&data);
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text[..header_end]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if data.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&data).into_owned()
    }

    fn directory(base: &str) -> HttpUserDirectory {
        let client = Client::builder()
            .no_proxy()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        HttpUserDirectory::with_client(base, client).unwrap()
    }

    fn new_user() -> NewUser {
        NewUser {
            email: "ada@example.com".to_string(),
            password: "secret".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            role: Role::Admin,
        }
    }

    const PAGE_BODY: &str = r#"{"content":[{"id":41,"firstName":"Ada","lastName":"Lovelace","email":"ada@example.com","roles":[{"id":1,"name":"ADMIN"}],"status":"ACTIVE"}],"totalPages":3,"totalElements":41}"#;

    // ─────────────────────────────────────────────────────────
    // URL building
    // ─────────────────────────────────────────────────────────

    #[test]
    fn test_parse_base_url_adds_trailing_slash() {
        let url = parse_base_url("http://localhost:8080/api").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/");

        let url = parse_base_url("  https://admin.example.com  ").unwrap();
        assert_eq!(url.as_str(), "https://admin.example.com/");
    }

    #[test]
    fn test_parse_base_url_drops_query_and_fragment() {
        let url = parse_base_url("http://localhost/api/?debug=1#top").unwrap();
        assert_eq!(url.as_str(), "http://localhost/api/");
    }

    #[test]
    fn test_parse_base_url_rejects_garbage() {
        assert!(matches!(
            parse_base_url("localhost:8080"),
            Err(Error::InvalidUrl { .. })
        ));
        assert!(matches!(
            parse_base_url("ftp://example.com/"),
            Err(Error::InvalidUrl { .. })
        ));
        assert!(matches!(parse_base_url(""), Err(Error::InvalidUrl { .. })));
    }

    #[test]
    fn test_users_page_url() {
        let base = parse_base_url("http://localhost:8080/api").unwrap();
        let url = users_page_url(&base, PageRequest::new(4, 20)).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/api/admin/users?page=4&size=20"
        );
    }

    #[test]
    fn test_users_page_url_at_host_root() {
        let base = parse_base_url("http://localhost:8080").unwrap();
        let url = users_page_url(&base, PageRequest::new(0, 5)).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/admin/users?page=0&size=5");
    }

    #[test]
    fn test_new_rejects_invalid_base_url() {
        let result = HttpUserDirectory::new("not a url", DEFAULT_TIMEOUT);
        assert!(matches!(result, Err(Error::InvalidUrl { .. })));
    }

    // ─────────────────────────────────────────────────────────
    // Listing
    // ─────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_list_users_decodes_page() {
        let (base, server) = serve_once("200 OK", PAGE_BODY).await;

        let page = directory(&base)
            .list_users(PageRequest::new(2, 20))
            .await
            .unwrap();

        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_elements, 41);
        assert_eq!(page.content.len(), 1);
        assert_eq!(page.content[0].id, 41);
        assert_eq!(page.content[0].roles, vec!["ADMIN"]);

        let request = server.await.unwrap();
        assert!(request.starts_with("GET /api/admin/users?page=2&size=20 HTTP/1.1"));
    }

    #[tokio::test]
    async fn test_list_users_maps_non_2xx_to_status_error() {
        let (base, server) = serve_once("500 Internal Server Error", r#"{"message":"boom"}"#).await;

        let err = directory(&base)
            .list_users(PageRequest::new(0, 20))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::HttpStatus { status: 500, ref message } if message.as_deref() == Some("boom")
        ));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_list_users_maps_malformed_body_to_decode_error() {
        let (base, server) = serve_once("200 OK", r#"{"content":"nope"}"#).await;

        let err = directory(&base)
            .list_users(PageRequest::new(0, 20))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Decode { .. }));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_list_users_connection_refused_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}/", listener.local_addr().unwrap());
        drop(listener);

        let err = directory(&base)
            .list_users(PageRequest::new(0, 20))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Http { .. }));
        assert!(err.is_recoverable());
    }

    // ─────────────────────────────────────────────────────────
    // Registration
    // ─────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_register_user_posts_camel_case_body() {
        let (base, server) = serve_once("201 Created", "").await;

        directory(&base).register_user(new_user()).await.unwrap();

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /api/admin/users/register HTTP/1.1"));
        let body = &request[request.find("\r\n\r\n").unwrap() + 4..];
        let json: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(json["email"], "ada@example.com");
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["lastName"], "Lovelace");
        assert_eq!(json["role"], "ADMIN");
    }

    #[tokio::test]
    async fn test_register_user_rejection_carries_server_message() {
        let (base, server) = serve_once("409 Conflict", r#"{"message":"Email taken"}"#).await;

        let err = directory(&base).register_user(new_user()).await.unwrap_err();

        assert_eq!(err.server_message(), Some("Email taken"));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_register_user_rejection_without_message() {
        let (base, server) = serve_once("400 Bad Request", "").await;

        let err = directory(&base).register_user(new_user()).await.unwrap_err();

        assert!(matches!(err, Error::HttpStatus { status: 400, message: None }));
        assert_eq!(err.server_message(), None);
        server.await.unwrap();
    }
}
