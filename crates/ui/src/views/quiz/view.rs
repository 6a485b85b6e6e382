use std::sync::Arc;

use dioxus::prelude::*;
use tracing::debug;

use quiz_core::model::QuestionStore;
use services::{Backdrop, MapClick, QuizEffect, QuizIntent, QuizSession, ScheduledTransition};

use super::danmaku::Danmaku;
use super::map::{EchartsSurface, MapCanvas};
use super::modals::{KnowledgeModal, QuizModal};
use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{map_knowledge_modal, map_quiz_modal, progress_label};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// Loaded store handed to the board. Equality is identity.
#[derive(Clone)]
pub(super) struct LoadedStore(Arc<QuestionStore>);

impl PartialEq for LoadedStore {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let loader = ctx.quiz_loader();

    let resource = use_resource(move || {
        let loader = Arc::clone(&loader);
        async move {
            loader
                .load_store()
                .await
                .map(LoadedStore)
                .map_err(|_| ViewError::LoadFailed)
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page quiz-page",
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { class: "loading", "Loading..." }
                },
                ViewState::Ready(store) => rsx! {
                    QuizBoard { store }
                },
                ViewState::Error(err) => rsx! {
                    div { class: "map-error",
                        h2 { "{err.message()}" }
                    }
                },
            }
        }
    }
}

/// Owns the session for one loaded store. Handlers exist only from here down.
#[component]
fn QuizBoard(store: LoadedStore) -> Element {
    let ctx = use_context::<AppContext>();
    let assets = ctx.map_assets().clone();
    let map_name = ctx.settings().map_name().to_string();

    let session = use_signal(|| {
        ctx.quiz_loader()
            .session(Arc::clone(&store.0), Box::new(EchartsSurface))
    });

    let dispatch = use_callback(move |intent: QuizIntent| {
        let mut session = session;
        let effect = session.write().dispatch(intent);
        if let QuizEffect::ScheduleTransition(transition) = effect {
            schedule_transition(session, transition);
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch, session);
            }
        }
    }

    let on_region_click =
        use_callback(move |click: MapClick| dispatch.call(QuizIntent::RegionClicked(click)));
    let on_select = use_callback(move |option: String| dispatch.call(QuizIntent::SelectOption(option)));
    let on_quiz_close = use_callback(move |()| dispatch.call(QuizIntent::CloseQuiz));
    let on_quiz_backdrop =
        use_callback(move |()| dispatch.call(QuizIntent::BackdropClicked(Backdrop::Quiz)));
    let on_knowledge_close = use_callback(move |()| dispatch.call(QuizIntent::CloseKnowledge));
    let on_knowledge_backdrop =
        use_callback(move |()| dispatch.call(QuizIntent::BackdropClicked(Backdrop::Knowledge)));

    let (quiz_vm, knowledge_vm, progress) = {
        let session = session.read();
        (
            map_quiz_modal(&session),
            map_knowledge_modal(&session),
            progress_label(session.progress()),
        )
    };

    rsx! {
        div { class: "quiz-board",
            Danmaku {}
            header { class: "quiz-header",
                h1 { "点亮中国地图" }
                span { class: "quiz-progress", "{progress}" }
            }
            MapCanvas { assets, map_name, on_region_click }
            if let Some(vm) = quiz_vm {
                QuizModal {
                    vm,
                    on_select,
                    on_close: on_quiz_close,
                    on_backdrop: on_quiz_backdrop,
                }
            }
            if let Some(vm) = knowledge_vm {
                KnowledgeModal {
                    vm,
                    on_close: on_knowledge_close,
                    on_backdrop: on_knowledge_backdrop,
                }
            }
        }
    }
}

fn schedule_transition(mut session: Signal<QuizSession>, transition: ScheduledTransition) {
    debug!(
        name = transition.name,
        id = transition.id.value(),
        region = %transition.region,
        delay_ms = transition.delay.as_millis(),
        "scheduling transition"
    );
    spawn(async move {
        tokio::time::sleep(transition.delay).await;
        session
            .write()
            .dispatch(QuizIntent::TransitionElapsed(transition.id));
    });
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    session: Rc<RefCell<Option<Signal<QuizSession>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>, session: Signal<QuizSession>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.session.borrow_mut() = Some(session);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn session(&self) -> Signal<QuizSession> {
        (*self.session.borrow()).expect("quiz session registered")
    }
}
