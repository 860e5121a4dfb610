// crates/trustybot-widget/src/endpoint.rs
// Static endpoint selection by page host name

/// Hosts that talk to the deployed backend
pub const PRODUCTION_HOSTS: [&str; 3] = [
    "alnowatzki.github.io",
    "alnowatzki.com",
    "www.alnowatzki.com",
];

pub const PRODUCTION_ENDPOINT: &str = "https://trustybot-api.onrender.com/api/chat";

pub const DEVELOPMENT_ENDPOINT: &str = "http://localhost:5001/api/chat";

/// Resolve the chat endpoint for a page host. Exact match only, so
/// `alnowatzki.com.evil.test` stays on the development URL.
pub fn resolve(host: &str) -> &'static str {
    if is_production_host(host) {
        PRODUCTION_ENDPOINT
    } else {
        DEVELOPMENT_ENDPOINT
    }
}

pub fn is_production_host(host: &str) -> bool {
    PRODUCTION_HOSTS.contains(&host)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_hosts_use_remote_backend() {
        for host in PRODUCTION_HOSTS {
            assert_eq!(resolve(host), PRODUCTION_ENDPOINT);
        }
    }

    #[test]
    fn test_everything_else_is_local() {
        assert_eq!(resolve("localhost"), DEVELOPMENT_ENDPOINT);
        assert_eq!(resolve("127.0.0.1"), DEVELOPMENT_ENDPOINT);
        assert_eq!(resolve(""), DEVELOPMENT_ENDPOINT);
        assert_eq!(resolve("alnowatzki.com.evil.test"), DEVELOPMENT_ENDPOINT);
    }
}
