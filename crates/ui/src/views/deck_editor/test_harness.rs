use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use deck_core::model::DeckId;
use deck_core::{DeckEditor, EditTarget};
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::DeckEditorService;
use storage::repository::Storage;

use crate::views::test_harness::test_identity;

use super::actions::{EditorIntent, use_editor_dispatcher};
use super::state::{EditorServices, EditorState, use_editor_state};

#[derive(Clone, Default)]
pub struct HarnessHandles {
    dispatch: Rc<RefCell<Option<Callback<EditorIntent>>>>,
    state: Rc<RefCell<Option<EditorState>>>,
    saved: Rc<RefCell<Vec<DeckId>>>,
}

#[derive(Props, Clone)]
struct HarnessProps {
    target: Option<EditTarget>,
    services: EditorServices,
    handles: HarnessHandles,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for HarnessProps {}

#[component]
fn EditorIntentHarness(props: HarnessProps) -> Element {
    let state = use_editor_state(props.target.clone());
    let saved = props.handles.saved.clone();
    let on_saved = use_callback(move |deck_id: DeckId| saved.borrow_mut().push(deck_id));
    let dispatcher = use_editor_dispatcher(&state, &props.services, on_saved);
    let mut registered = use_signal(|| false);
    if !registered() {
        registered.set(true);
        *props.handles.dispatch.borrow_mut() = Some(dispatcher.dispatch);
        *props.handles.state.borrow_mut() = Some(state);
    }
    rsx! { div {} }
}

pub struct EditorHarness {
    pub dom: VirtualDom,
    handles: HarnessHandles,
}

impl EditorHarness {
    pub fn send(&mut self, intent: EditorIntent) {
        let dispatch = self
            .handles
            .dispatch
            .borrow()
            .expect("dispatch registered");
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    /// Let spawned save/delete tasks run to completion.
    pub async fn settle(&mut self) {
        for _ in 0..3 {
            let _ = tokio::time::timeout(
                std::time::Duration::from_millis(50),
                self.dom.wait_for_work(),
            )
            .await;
            self.dom.render_immediate(&mut NoOpMutations);
            self.dom.process_events();
        }
    }

    pub fn editor(&self) -> DeckEditor {
        let state = self.state();
        self.dom.in_runtime(|| state.editor.read().clone())
    }

    pub fn notice(&self) -> Option<String> {
        let state = self.state();
        self.dom.in_runtime(|| state.notice.read().clone())
    }

    pub fn saved(&self) -> Vec<DeckId> {
        self.handles.saved.borrow().clone()
    }

    fn state(&self) -> EditorState {
        self.handles.state.borrow().expect("state registered")
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_editor_harness(storage: &Storage, target: Option<EditTarget>) -> EditorHarness {
    let services = EditorServices {
        editor_service: Arc::new(DeckEditorService::from_storage(storage)),
        identity: test_identity(),
    };
    let handles = HarnessHandles::default();
    let mut dom = VirtualDom::new_with_props(
        EditorIntentHarness,
        HarnessProps {
            target,
            services,
            handles: handles.clone(),
        },
    );
    dom.rebuild_in_place();
    drive_dom(&mut dom);

    EditorHarness { dom, handles }
}
