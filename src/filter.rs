use url::Url;

/// Restricts discovered links to the origin of the fetched page.
///
/// The comparison covers the network-location component only, host plus
/// explicit port. Scheme is not compared, so an `https` link on an `http`
/// page with the same host passes the filter.
#[derive(Debug, Clone)]
pub struct OriginFilter {
    base: Url,
}

impl OriginFilter {
    /// Create a filter anchored to the origin of `base`
    pub fn new(base: Url) -> Self {
        Self { base }
    }

    /// Check whether `url` points at the same host[:port] as the base page
    pub fn is_same_origin(&self, url: &Url) -> bool {
        url.host_str() == self.base.host_str() && url.port() == self.base.port()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter_for(base: &str) -> OriginFilter {
        OriginFilter::new(Url::parse(base).unwrap())
    }

    #[test]
    fn test_same_host_is_in_scope() {
        let filter = filter_for("http://example.com/");

        let same = Url::parse("http://example.com/x").unwrap();
        assert!(filter.is_same_origin(&same));

        let other = Url::parse("http://other.com/x").unwrap();
        assert!(!filter.is_same_origin(&other));
    }

    #[test]
    fn test_subdomain_is_a_different_host() {
        let filter = filter_for("http://example.com/");

        let sub = Url::parse("http://www.example.com/x").unwrap();
        assert!(!filter.is_same_origin(&sub));
    }

    #[test]
    fn test_explicit_port_is_part_of_the_origin() {
        let filter = filter_for("http://example.com:8080/");

        let same_port = Url::parse("http://example.com:8080/x").unwrap();
        assert!(filter.is_same_origin(&same_port));

        let no_port = Url::parse("http://example.com/x").unwrap();
        assert!(!filter.is_same_origin(&no_port));
    }

    #[test]
    fn test_scheme_default_port_is_normalized_away() {
        // The url crate strips scheme-default ports while parsing, so an
        // explicit :80 on http compares equal to no port at all.
        let filter = filter_for("http://example.com/");

        let default_port = Url::parse("http://example.com:80/x").unwrap();
        assert!(filter.is_same_origin(&default_port));
    }

    #[test]
    fn test_scheme_is_not_compared() {
        let filter = filter_for("http://example.com/");

        let https = Url::parse("https://example.com/x").unwrap();
        assert!(filter.is_same_origin(&https));
    }
}
