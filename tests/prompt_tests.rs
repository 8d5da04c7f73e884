use stylecraft::prompt::{
    HUMANIZE_SEPARATOR, HUMANIZE_TEXT_PROMPT, KEYWORDS_PLACEHOLDER,
    build_humanize_prompt, build_mimic_prompt, fill_keywords,
};

#[test]
fn test_fill_keywords_replaces_only_first_placeholder() {
    let template = "A: {keywords} / B: {keywords}";
    assert_eq!(fill_keywords(template, "雨"), "A: 雨 / B: {keywords}");
}

#[test]
fn test_fill_keywords_with_placeholder_in_keywords() {
    // The inserted text is not scanned again
    let template = "K={keywords}";
    assert_eq!(fill_keywords(template, "{keywords}"), "K={keywords}");
}

#[test]
fn test_fill_keywords_without_placeholder() {
    assert_eq!(fill_keywords("no token here", "x"), "no token here");
}

#[test]
fn test_build_mimic_prompt() {
    let prompt = build_mimic_prompt(r#"{"tone":"calm"}"#, "秋天, 故乡");
    assert!(prompt.starts_with("{\"tone\":\"calm\"}\n\n"));
    assert!(prompt.contains("关键词：秋天, 故乡"));
    assert!(!prompt.contains(KEYWORDS_PLACEHOLDER));
    assert!(prompt.ends_with("采用自然段落输出，不使用标题和小标题"));
}

#[test]
fn test_build_humanize_prompt() {
    let prompt = build_humanize_prompt("原稿");
    assert_eq!(
        prompt,
        format!("{HUMANIZE_TEXT_PROMPT}{HUMANIZE_SEPARATOR}原稿")
    );
}
