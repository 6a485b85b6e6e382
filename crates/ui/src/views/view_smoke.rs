use std::sync::Arc;

use services::{Backdrop, MapClick, QuizIntent};
use storage::InMemorySource;

use super::test_harness::{SAMPLE_DOCUMENT, setup_view_harness, setup_view_harness_with_source};

fn click(name: &str) -> QuizIntent {
    QuizIntent::RegionClicked(MapClick::new(name))
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_load_error() {
    let mut harness = setup_view_harness_with_source(
        Arc::new(InMemorySource::unreachable("connection refused")),
        Default::default(),
    );
    harness.start().await;
    let html = harness.render();
    assert!(
        html.contains("加载游戏数据失败，请检查文件路径或网络连接。"),
        "missing error in {html}"
    );
    assert!(!html.contains("map-container"), "map rendered in {html}");
    assert!(!html.contains("danmaku-item"), "danmaku rendered in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_malformed_document_as_error() {
    let mut harness = setup_view_harness(r#"{ "北京": { "question": "?" } }"#);
    harness.start().await;
    let html = harness.render();
    assert!(html.contains("加载游戏数据失败"), "missing error in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_board() {
    let mut harness = setup_view_harness(SAMPLE_DOCUMENT);
    harness.start().await;
    let html = harness.render();
    assert!(html.contains("map-container"), "missing map in {html}");
    assert!(html.contains("已点亮 0 / 2"), "missing progress in {html}");
    assert_eq!(html.matches("danmaku-item").count(), 50);
    assert!(!html.contains("question-modal"), "modal open in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_options_render_in_source_order() {
    let mut harness = setup_view_harness(SAMPLE_DOCUMENT);
    harness.start().await;

    harness.dispatch(click("上海"));
    let html = harness.render();
    assert!(html.contains("选项顺序"), "missing question in {html}");

    let zebra = html.find("zebra").expect("zebra rendered");
    let apple = html.find("apple").expect("apple rendered");
    let mango = html.find("mango").expect("mango rendered");
    assert!(zebra < apple && apple < mango, "options out of order in {html}");
    assert_eq!(html.matches("option-button").count(), 4);
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_wrong_then_right_answer() {
    let mut harness = setup_view_harness(SAMPLE_DOCUMENT);
    harness.start().await;

    harness.dispatch(click("北京"));
    harness.dispatch(QuizIntent::SelectOption("1927".into()));
    let html = harness.render();
    assert!(html.contains("回答错误，请再试一次！"), "missing failure in {html}");
    assert!(html.contains("color: red;"), "missing failure color in {html}");
    assert!(!harness.with_session(|session| session.tracker().is_answered("北京")));

    harness.dispatch(QuizIntent::SelectOption("1949".into()));
    let html = harness.render();
    assert!(html.contains("回答正确！"), "missing success in {html}");
    assert!(html.contains("color: #f0ad4e;"), "missing success color in {html}");
    assert!(html.contains("已点亮 1 / 2"), "missing progress in {html}");

    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(!html.contains("question-modal"), "quiz still open in {html}");
    assert!(html.contains("北京 - 知识背景"), "missing knowledge title in {html}");
    assert!(html.contains("images/beijing.jpg"), "missing image in {html}");
    assert!(html.contains("开国大典"), "missing knowledge text in {html}");

    harness.dispatch(QuizIntent::BackdropClicked(Backdrop::Knowledge));
    harness.dispatch(click("北京"));
    let html = harness.render();
    assert!(!html.contains("knowledge-modal"), "knowledge still open in {html}");
    assert!(!html.contains("question-modal"), "answered region reopened in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_close_before_transition_still_opens_knowledge() {
    let mut harness = setup_view_harness(SAMPLE_DOCUMENT);
    harness.start().await;

    harness.dispatch(click("北京"));
    harness.dispatch(QuizIntent::SelectOption("1949".into()));
    harness.dispatch(QuizIntent::CloseQuiz);
    let html = harness.render();
    assert!(!html.contains("question-modal"), "quiz still open in {html}");
    assert!(!html.contains("knowledge-modal"), "knowledge opened early in {html}");

    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("北京 - 知识背景"), "missing knowledge title in {html}");
    assert!(!html.contains("question-modal"), "quiz reopened in {html}");
    assert!(html.contains("已点亮 1 / 2"), "missing progress in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_unknown_region_opens_nothing() {
    let mut harness = setup_view_harness(SAMPLE_DOCUMENT);
    harness.start().await;

    harness.dispatch(click("南海诸岛"));
    let html = harness.render();
    assert!(!html.contains("question-modal"), "modal open in {html}");
    assert!(html.contains("已点亮 0 / 2"), "progress changed in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_close_button_hides_quiz() {
    let mut harness = setup_view_harness(SAMPLE_DOCUMENT);
    harness.start().await;

    harness.dispatch(click("北京"));
    assert!(harness.render().contains("question-modal"));
    harness.dispatch(QuizIntent::CloseQuiz);
    let html = harness.render();
    assert!(!html.contains("question-modal"), "modal still open in {html}");
    assert!(harness.with_session(|session| session.tracker().eligible_for_question("北京")));
}
