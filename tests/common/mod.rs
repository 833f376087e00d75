//! Shared test utilities: recording views and listeners.

#![allow(dead_code, unused_imports)]

use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use viewstack::mvp::{View, ViewHandle};
use viewstack::navigation::{
    ControllerId, DefaultNavigationController, NavigationCallback, NavigationController,
    NavigationEvent, NavigationListener, NavigationParams, NavigationRequestBuilder,
    NavigationResult,
};

/// Log of callback invocations shared by several views, in call order.
pub type CallLog = Arc<Mutex<Vec<String>>>;

pub fn call_log() -> CallLog {
    Arc::new(Mutex::new(Vec::new()))
}

/// View that records every navigation callback into a shared log.
pub struct RecordingView {
    name: String,
    log: CallLog,
    allow_detach: AtomicBool,
    with_callback: bool,
    last_params: Mutex<Option<NavigationParams>>,
}

impl RecordingView {
    pub fn new(name: &str, log: &CallLog) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            log: log.clone(),
            allow_detach: AtomicBool::new(true),
            with_callback: true,
            last_params: Mutex::new(None),
        })
    }

    /// A view that does not expose the navigation callback at all.
    pub fn without_callback(name: &str, log: &CallLog) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            log: log.clone(),
            allow_detach: AtomicBool::new(true),
            with_callback: false,
            last_params: Mutex::new(None),
        })
    }

    pub fn deny_detach(&self) {
        self.allow_detach.store(false, Ordering::SeqCst);
    }

    pub fn last_params(&self) -> Option<NavigationParams> {
        self.last_params.lock().clone()
    }

    fn record(&self, entry: String) {
        self.log.lock().push(format!("{}:{}", self.name, entry));
    }
}

impl View for RecordingView {
    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn navigation_callback(&self) -> Option<&dyn NavigationCallback> {
        if self.with_callback {
            Some(self)
        } else {
            None
        }
    }
}

impl NavigationCallback for RecordingView {
    fn attached_to_controller(&self, _controller: ControllerId) {
        self.record("attached".to_string());
    }

    fn detaching_from_controller(&self, _controller: ControllerId) -> bool {
        self.record("detaching".to_string());
        self.allow_detach.load(Ordering::SeqCst)
    }

    fn detached_from_controller(&self, _controller: ControllerId) {
        self.record("detached".to_string());
    }

    fn navigated_to_view(&self, params: &NavigationParams, from_view: Option<&ViewHandle>) {
        *self.last_params.lock() = Some(params.clone());
        self.record(format!("to(from={})", name_of(from_view)));
    }

    fn navigated_from_view(&self, to_view: &ViewHandle) {
        self.record(format!("from(to={})", to_view.display_name()));
    }
}

pub fn handle(view: &Arc<RecordingView>) -> ViewHandle {
    ViewHandle::from(view.clone())
}

pub fn name_of(view: Option<&ViewHandle>) -> String {
    view.map(|v| v.display_name()).unwrap_or_else(|| "-".to_string())
}

/// Listener that keeps every event it receives.
#[derive(Default)]
pub struct EventRecorder {
    events: Mutex<Vec<NavigationEvent>>,
}

impl EventRecorder {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<NavigationEvent> {
        self.events.lock().clone()
    }

    /// Events rendered with their `Display` form, e.g. "detached C".
    pub fn lines(&self) -> Vec<String> {
        self.events.lock().iter().map(|e| e.to_string()).collect()
    }
}

impl NavigationListener for EventRecorder {
    fn handle_navigation_event(&self, event: &NavigationEvent) {
        self.events.lock().push(event.clone());
    }
}

/// Builds a controller whose trail is `views`, then attaches a fresh event
/// recorder and empties the call log so tests only observe their own step.
pub fn controller_with(
    views: &[ViewHandle],
    log: &CallLog,
) -> (DefaultNavigationController, Arc<EventRecorder>) {
    let mut controller = DefaultNavigationController::new();
    if !views.is_empty() {
        let request = NavigationRequestBuilder::new()
            .start_with_empty_path()
            .unwrap()
            .add_views(views.iter().cloned())
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(controller.navigate(&request), NavigationResult::Succeeded);
    }
    log.lock().clear();

    let recorder = EventRecorder::new();
    controller.add_listener(recorder.clone());
    (controller, recorder)
}
