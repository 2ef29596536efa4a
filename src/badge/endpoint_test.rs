use super::*;

#[test]
fn test_build_badge_urls_default_service() {
    let urls = build_badge_urls("854152902511629627");
    assert_eq!(
        urls.installs,
        "https://figma-plugin-badges.vercel.app/api/installs/854152902511629627"
    );
    assert_eq!(
        urls.likes,
        "https://figma-plugin-badges.vercel.app/api/likes/854152902511629627"
    );
}

#[test]
fn test_build_badge_urls_empty_identifier() {
    // 空でも文字列は組み立てる（描画しないのは呼び出し側の責務）
    let urls = build_badge_urls("");
    assert_eq!(urls.installs, "https://figma-plugin-badges.vercel.app/api/installs/");
}

#[test]
fn test_badge_service_trims_trailing_slash() {
    let service = BadgeService::new("http://localhost:3000/");
    assert_eq!(service.base_url(), "http://localhost:3000");
    assert_eq!(
        service.endpoint(BadgeMetric::Likes, "1"),
        "http://localhost:3000/api/likes/1"
    );
}

#[test]
fn test_badge_urls_get() {
    let urls = build_badge_urls("1");
    assert_eq!(urls.get(BadgeMetric::Installs), urls.installs);
    assert_eq!(urls.get(BadgeMetric::Likes), urls.likes);
}

#[test]
fn test_badge_urls_iter_order() {
    let urls = build_badge_urls("1");
    let metrics: Vec<BadgeMetric> = urls.iter().map(|(m, _)| m).collect();
    assert_eq!(metrics, vec![BadgeMetric::Installs, BadgeMetric::Likes]);
}

#[test]
fn test_badge_metric_as_str() {
    assert_eq!(BadgeMetric::Installs.as_str(), "installs");
    assert_eq!(BadgeMetric::Likes.as_str(), "likes");
}

#[test]
fn test_badge_metric_display() {
    assert_eq!(BadgeMetric::Installs.to_string(), "Installs");
    assert_eq!(BadgeMetric::Likes.to_string(), "Likes");
}

#[test]
fn test_badge_urls_json_serialization() {
    let json = serde_json::to_string(&build_badge_urls("7")).unwrap();
    assert!(json.contains("\"installs\":\"https://figma-plugin-badges.vercel.app/api/installs/7\""));
    assert!(json.contains("\"likes\":"));
}
