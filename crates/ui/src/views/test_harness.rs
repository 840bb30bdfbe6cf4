use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use bagdar_core::time::fixed_clock;
use services::{FormsReporter, GeminiClient, QuizService};
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context};
use crate::views::QuizFlowView;

#[derive(Clone)]
struct TestApp {
    quiz: Arc<QuizService>,
}

impl UiApp for TestApp {
    fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(app));
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
    rsx! { QuizFlowView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
    pub quiz: Arc<QuizService>,
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

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// A quiz view over in-memory storage; the recommendation and report
/// clients are unconfigured and never touch the network.
pub fn setup_view_harness() -> ViewHarness {
    let storage = Storage::in_memory();
    let quiz = Arc::new(QuizService::new(
        Arc::clone(&storage.snapshots),
        Arc::new(GeminiClient::new(None)),
        Arc::new(FormsReporter::new(None)),
        fixed_clock(),
    ));

    let app = Arc::new(TestApp {
        quiz: Arc::clone(&quiz),
    });
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app });

    ViewHarness { dom, storage, quiz }
}
