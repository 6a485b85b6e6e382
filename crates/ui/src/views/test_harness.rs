use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::model::QuizSettingsDraft;
use services::{QuizIntent, QuizLoader, QuizSession};
use storage::{InMemorySource, SourceRef};

use crate::context::{MapAssets, UiApp, build_app_context};
use crate::views::QuizView;
use crate::views::quiz::QuizTestHandles;

pub const SAMPLE_DOCUMENT: &str = r#"{
    "北京": {
        "question": "北京是哪一年成为新中国首都的？",
        "options": ["1927", "1949", "1937"],
        "answer": "1949",
        "knowledge": "1949年10月1日，开国大典在北京天安门广场举行。",
        "image": "images/beijing.jpg"
    },
    "上海": {
        "question": "选项顺序",
        "options": ["zebra", "apple", "mango", "apple"],
        "answer": "mango",
        "knowledge": "上海背景",
        "image": "images/shanghai.jpg"
    }
}"#;

#[derive(Clone)]
struct TestApp {
    quiz_loader: Arc<QuizLoader>,
}

impl UiApp for TestApp {
    fn quiz_loader(&self) -> Arc<QuizLoader> {
        Arc::clone(&self.quiz_loader)
    }

    fn map_assets(&self) -> MapAssets {
        MapAssets::default()
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: QuizTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    rsx! { QuizView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: QuizTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Rebuild and let the question load settle.
    pub async fn start(&mut self) {
        self.rebuild();
        self.drive_async().await;
        self.drive_async().await;
    }

    pub fn dispatch(&mut self, intent: QuizIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn with_session<T>(&self, read: impl FnOnce(&QuizSession) -> T) -> T {
        let session = self.handles.session();
        self.dom.in_runtime(|| read(&session.peek()))
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Short enough for `drive_async` to observe, long enough to see the success state first.
pub const TEST_TRANSITION_MS: u64 = 20;

pub fn setup_view_harness(document: &str) -> ViewHarness {
    let settings = QuizSettingsDraft {
        transition_delay_ms: Some(TEST_TRANSITION_MS),
        ..QuizSettingsDraft::default()
    }
    .validate()
    .expect("valid settings");
    setup_view_harness_with_source(Arc::new(InMemorySource::new(document)), settings)
}

pub fn setup_view_harness_with_source(
    source: SourceRef,
    settings: quiz_core::model::QuizSettings,
) -> ViewHarness {
    let handles = QuizTestHandles::default();
    let app = Arc::new(TestApp {
        quiz_loader: Arc::new(QuizLoader::new(source, settings)),
    });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            handles: handles.clone(),
        },
    );

    ViewHarness { dom, handles }
}
