#[cfg(test)]
mod test {

    use crate::cache::token_cache::TokenCache;
    use crate::utils::constants::SAFETY_MARGIN_SECONDS;
    use std::time::Duration;

    #[tokio::test]
    async fn cached_token_reports_remaining_lifetime_not_original_ttl() {
        let cache = TokenCache::new();
        cache.store("abc".into(), 3600).await;

        tokio::time::sleep(Duration::from_secs(1)).await;
        let (value, remaining) = cache.get_valid().await.expect("token should be valid");

        assert_eq!(value, "abc");
        // one second has passed, allow a little scheduling slack
        assert!(remaining < 3600);
        assert!(remaining >= 3597);
    }

    #[tokio::test]
    async fn token_expires_once_inside_safety_margin() {
        let cache = TokenCache::new();
        let ttl = SAFETY_MARGIN_SECONDS + 2;
        cache.store("short-val".into(), ttl).await;

        let got = cache.get_valid().await;
        assert!(got.is_some());
        assert_eq!(got.unwrap().0, "short-val");

        tokio::time::sleep(Duration::from_secs(3)).await;
        assert!(cache.get_valid().await.is_none());
    }

    #[tokio::test]
    async fn clones_share_the_same_single_entry() {
        let cache = TokenCache::new();
        let handle = cache.clone();

        handle.store("shared".into(), 3600).await;
        let (value, _) = cache.get_valid().await.expect("entry visible through clone");
        assert_eq!(value, "shared");
    }
}
