pub mod init;
pub mod route;
pub mod status;

/// API endpoint used when `--endpoint` is not given.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:9101";

/// An endpoint on a local port nothing listens on.
#[cfg(test)]
pub(crate) fn closed_endpoint() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}
