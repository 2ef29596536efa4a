use super::*;
use proptest::prelude::*;

/// コミュニティURLに現れる識別子（数字列）
fn identifier_strategy() -> impl Strategy<Value = String> {
    "[0-9]{1,20}".prop_map(|s| s)
}

/// スラッグ（英数字とハイフン）
fn slug_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9-]{0,29}".prop_map(|s| s)
}

proptest! {
    /// コミュニティURLからは常に識別子がそのまま取り出せる
    #[test]
    fn prop_extract_identifier_from_community_url(
        id in identifier_strategy(),
        slug in slug_strategy()
    ) {
        let url = format!("https://www.figma.com/community/plugin/{}/{}", id, slug);
        prop_assert_eq!(extract_identifier(&url, DEFAULT_PLUGIN_URL), id);
    }

    /// スキームを持たない入力はパースに失敗し空になる
    #[test]
    fn prop_extract_identifier_schemeless_is_empty(text in "[a-z ]{1,30}") {
        prop_assert_eq!(extract_identifier(&text, DEFAULT_PLUGIN_URL), "");
    }

    /// installs と likes は指標セグメントだけが異なる
    #[test]
    fn prop_badge_urls_differ_only_by_metric(id in identifier_strategy()) {
        let urls = build_badge_urls(&id);
        let suffix = format!("/{id}");
        prop_assert!(urls.installs.ends_with(&suffix));
        prop_assert!(urls.likes.ends_with(&suffix));
        prop_assert_eq!(
            urls.installs.replacen("/api/installs/", "/api/likes/", 1),
            urls.likes
        );
    }

    /// 同じ入力からは常に同じスニペットが得られる
    #[test]
    fn prop_format_snippet_is_pure(
        id in identifier_strategy(),
        slug in slug_strategy(),
        markdown in any::<bool>()
    ) {
        let format = if markdown { OutputFormat::Markdown } else { OutputFormat::Html };
        let plugin_url = format!("https://www.figma.com/community/plugin/{}/{}", id, slug);
        let urls = build_badge_urls(&id);

        let first = format_snippet(format, &urls.installs, &plugin_url);
        let second = format_snippet(format, &urls.installs, &plugin_url);
        prop_assert_eq!(&first, &second);
        prop_assert!(first.contains(&urls.installs));
    }
}
