//! Shell behavior against recording fakes.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use connexx_common::{Notification, NotificationLevel, PlatformError, SurfaceError, ToastDuration};
use connexx_platform::{ConnectivityProbe, ExternalOpener, Notifier};
use connexx_webview::{
    BrowserSurface, Capabilities, NavigationDecision, NavigationInterceptor, NavigationPolicy,
    PageLoadState, SurfaceEvent,
};

use super::core::AppShell;
use super::lifecycle::LifecycleState;
use super::navigation::NavigationState;
use super::{CONNECTIVITY_MESSAGE, LOAD_FAILED_PREFIX};

const APP_URL: &str = "https://mvai-connexx.com";

// =============================================================================
// FAKES
// =============================================================================

/// Engine side of the fake surface, shared with the test body so calls
/// stay observable after the shell drops the surface.
#[derive(Default)]
struct Engine {
    loads: Vec<String>,
    history: Vec<String>,
    pending: Vec<SurfaceEvent>,
    go_back_calls: usize,
    pause_calls: usize,
    resume_calls: usize,
    destroy_calls: usize,
    reject_loads: Option<String>,
    interceptor: Option<Arc<dyn NavigationInterceptor>>,
}

impl Engine {
    /// A link clicked inside the page: the engine asks the interceptor.
    fn click(&mut self, url: &str) {
        let interceptor = self.interceptor.clone().expect("surface was built");
        match interceptor.intercept(url) {
            NavigationDecision::OpenExternally => self.pending.push(SurfaceEvent::ExternalNavigation {
                url: url.to_string(),
            }),
            NavigationDecision::LoadInSurface => self.commit(url),
        }
    }

    fn commit(&mut self, url: &str) {
        self.history.push(url.to_string());
        self.pending.push(SurfaceEvent::PageLoad {
            state: PageLoadState::Started,
            url: url.to_string(),
        });
    }

    fn emit(&mut self, event: SurfaceEvent) {
        self.pending.push(event);
    }
}

struct FakeSurface {
    engine: Rc<RefCell<Engine>>,
    capabilities: Capabilities,
}

impl BrowserSurface for FakeSurface {
    fn load_url(&mut self, url: &str) -> Result<(), SurfaceError> {
        let mut engine = self.engine.borrow_mut();
        engine.loads.push(url.to_string());
        if let Some(reason) = engine.reject_loads.clone() {
            return Err(SurfaceError::Load {
                url: url.to_string(),
                reason,
            });
        }
        engine.commit(url);
        Ok(())
    }

    fn can_go_back(&self) -> bool {
        self.engine.borrow().history.len() > 1
    }

    fn go_back(&mut self) {
        let mut engine = self.engine.borrow_mut();
        engine.go_back_calls += 1;
        engine.history.pop();
    }

    fn pause(&mut self) {
        self.engine.borrow_mut().pause_calls += 1;
    }

    fn resume(&mut self) {
        self.engine.borrow_mut().resume_calls += 1;
    }

    fn destroy(&mut self) {
        self.engine.borrow_mut().destroy_calls += 1;
    }

    fn drain_events(&mut self) -> Vec<SurfaceEvent> {
        std::mem::take(&mut self.engine.borrow_mut().pending)
    }

    fn current_url(&self) -> Option<String> {
        self.engine.borrow().history.last().cloned()
    }

    fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }
}

#[derive(Default)]
struct RecordingOpener {
    opened: RefCell<Vec<String>>,
    fail: bool,
}

impl ExternalOpener for RecordingOpener {
    fn open_external(&self, url: &str) -> Result<(), PlatformError> {
        self.opened.borrow_mut().push(url.to_string());
        if self.fail {
            return Err(PlatformError::ExternalHandler("no handler".into()));
        }
        Ok(())
    }
}

#[derive(Default)]
struct RecordingNotifier {
    shown: Vec<Notification>,
}

impl RecordingNotifier {
    fn messages(&self) -> Vec<&str> {
        self.shown.iter().map(|n| n.message.as_str()).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn show(&mut self, notification: Notification) {
        self.shown.push(notification);
    }
}

struct Connectivity(bool);

impl ConnectivityProbe for Connectivity {
    fn is_network_available(&self) -> bool {
        self.0
    }
}

type TestShell = AppShell<FakeSurface, RecordingOpener, RecordingNotifier>;

fn payments() -> Arc<dyn NavigationInterceptor> {
    Arc::new(NavigationPolicy::new(["gumroad.com", "stripe.com", "paypal.com"]))
}

fn create_with(
    url: &str,
    opener: RecordingOpener,
    online: bool,
    engine: &Rc<RefCell<Engine>>,
) -> TestShell {
    let engine = Rc::clone(engine);
    AppShell::create(
        url,
        payments(),
        opener,
        RecordingNotifier::default(),
        &Connectivity(online),
        move |caps, interceptor| {
            engine.borrow_mut().interceptor = Some(interceptor);
            Ok(FakeSurface {
                engine,
                capabilities: caps.clone(),
            })
        },
    )
}

fn create_shell() -> (TestShell, Rc<RefCell<Engine>>) {
    let engine = Rc::new(RefCell::new(Engine::default()));
    let shell = create_with(APP_URL, RecordingOpener::default(), true, &engine);
    (shell, engine)
}

fn create_without_surface() -> TestShell {
    AppShell::create(
        APP_URL,
        payments(),
        RecordingOpener::default(),
        RecordingNotifier::default(),
        &Connectivity(true),
        |_, _| Err(SurfaceError::Creation("no display".into())),
    )
}

// =============================================================================
// INITIALIZATION
// =============================================================================

#[test]
fn creation_loads_initial_url_once() {
    let (shell, engine) = create_shell();
    assert_eq!(engine.borrow().loads, vec![APP_URL]);
    assert_eq!(shell.lifecycle, LifecycleState::Created);
    assert!(shell.notifier.shown.is_empty());
}

#[test]
fn surface_receives_fixed_capabilities() {
    let (shell, _engine) = create_shell();
    let surface = shell.surface().unwrap();
    assert_eq!(surface.capabilities(), &Capabilities::shell());
    assert!(!surface.capabilities().zoom_controls);
}

#[test]
fn offline_launch_warns_once_and_still_loads() {
    let engine = Rc::new(RefCell::new(Engine::default()));
    let shell = create_with(APP_URL, RecordingOpener::default(), false, &engine);

    assert_eq!(shell.notifier.messages(), vec![CONNECTIVITY_MESSAGE]);
    assert_eq!(shell.notifier.shown[0].ttl, ToastDuration::Long.as_duration());
    assert_eq!(engine.borrow().loads, vec![APP_URL]);
}

#[test]
fn initial_url_on_payment_domain_goes_external_only() {
    let engine = Rc::new(RefCell::new(Engine::default()));
    let shell = create_with(
        "https://gumroad.com/l/mvai",
        RecordingOpener::default(),
        true,
        &engine,
    );
    assert!(engine.borrow().loads.is_empty());
    assert_eq!(*shell.opener.opened.borrow(), vec!["https://gumroad.com/l/mvai"]);
}

#[test]
fn surface_creation_failure_is_reported_not_fatal() {
    let mut shell = create_without_surface();
    assert!(shell.surface().is_none());
    assert_eq!(shell.notifier.shown.len(), 1);
    assert_eq!(shell.notifier.shown[0].level, NotificationLevel::Error);

    shell.resume();
    shell.pause();
    shell.pump();
    assert!(!shell.handle_back());
}

#[test]
fn rejected_initial_load_surfaces_as_error() {
    let engine = Rc::new(RefCell::new(Engine {
        reject_loads: Some("engine busy".into()),
        ..Engine::default()
    }));
    let shell = create_with(APP_URL, RecordingOpener::default(), true, &engine);
    assert_eq!(shell.navigation, NavigationState::Errored);
    assert_eq!(
        shell.notifier.messages(),
        vec![format!("{LOAD_FAILED_PREFIX}engine busy").as_str()]
    );
    assert!(!shell.progress.is_visible());
}

// =============================================================================
// NAVIGATION INTERCEPTION
// =============================================================================

#[test]
fn payment_links_open_externally_exactly_once() {
    let (mut shell, engine) = create_shell();
    shell.pump();

    for url in [
        "https://gumroad.com/l/mvai-pro",
        "https://checkout.stripe.com/c/pay/cs_live",
        "https://www.paypal.com/checkoutnow?token=EC-1",
    ] {
        engine.borrow_mut().click(url);
        shell.pump();
    }

    assert_eq!(
        *shell.opener.opened.borrow(),
        vec![
            "https://gumroad.com/l/mvai-pro",
            "https://checkout.stripe.com/c/pay/cs_live",
            "https://www.paypal.com/checkoutnow?token=EC-1",
        ]
    );
    assert_eq!(engine.borrow().history, vec![APP_URL]);
}

#[test]
fn app_links_stay_in_surface() {
    let (mut shell, engine) = create_shell();
    engine.borrow_mut().click("https://mvai-connexx.com/leads");
    engine.borrow_mut().click("https://mvai-connexx.com/?next=stripe.com");
    shell.pump();

    assert!(shell.opener.opened.borrow().is_empty());
    assert_eq!(engine.borrow().history.len(), 3);
}

#[test]
fn new_window_requests_load_in_the_surface() {
    let (mut shell, engine) = create_shell();
    engine.borrow_mut().emit(SurfaceEvent::NewWindowRequested {
        url: "https://mvai-connexx.com/terms".into(),
    });
    shell.pump();

    assert_eq!(
        engine.borrow().loads,
        vec![APP_URL, "https://mvai-connexx.com/terms"]
    );
    assert!(shell.opener.opened.borrow().is_empty());
}

#[test]
fn failed_handoff_shows_error_and_keeps_surface() {
    let engine = Rc::new(RefCell::new(Engine::default()));
    let opener = RecordingOpener {
        fail: true,
        ..RecordingOpener::default()
    };
    let mut shell = create_with(APP_URL, opener, true, &engine);
    engine.borrow_mut().click("https://stripe.com/pay");
    shell.pump();

    assert_eq!(shell.opener.opened.borrow().len(), 1);
    assert_eq!(shell.notifier.shown.len(), 1);
    assert_eq!(shell.notifier.shown[0].level, NotificationLevel::Error);
    assert_eq!(engine.borrow().history, vec![APP_URL]);
}

// =============================================================================
// PROGRESS AND ERRORS
// =============================================================================

#[test]
fn progress_is_monotonic_and_hidden_after_finish() {
    let (mut shell, engine) = create_shell();
    shell.pump();
    assert!(shell.progress.is_visible());
    assert_eq!(shell.progress.percent(), 0);

    let mut shown = Vec::new();
    for percent in [10, 70, 40, 100, 90] {
        engine.borrow_mut().emit(SurfaceEvent::Progress { percent });
        shell.pump();
        shown.push(shell.progress.percent());
    }
    assert!(shown.windows(2).all(|w| w[0] <= w[1]), "{shown:?}");

    engine.borrow_mut().emit(SurfaceEvent::PageLoad {
        state: PageLoadState::Finished,
        url: APP_URL.into(),
    });
    shell.pump();
    assert!(!shell.progress.is_visible());
    assert_eq!(shell.navigation, NavigationState::Loaded);
}

#[test]
fn new_navigation_restarts_progress() {
    let (mut shell, engine) = create_shell();
    engine.borrow_mut().emit(SurfaceEvent::Progress { percent: 70 });
    engine.borrow_mut().click("https://mvai-connexx.com/leads");
    shell.pump();
    assert!(shell.progress.is_visible());
    assert_eq!(shell.progress.percent(), 0);
    assert_eq!(shell.navigation, NavigationState::Loading);
}

#[test]
fn progress_after_finish_is_ignored() {
    let (mut shell, engine) = create_shell();
    engine.borrow_mut().emit(SurfaceEvent::PageLoad {
        state: PageLoadState::Finished,
        url: APP_URL.into(),
    });
    engine.borrow_mut().emit(SurfaceEvent::Progress { percent: 100 });
    shell.pump();
    assert!(!shell.progress.is_visible());
}

#[test]
fn dns_error_shows_description_and_hides_progress() {
    let (mut shell, engine) = create_shell();
    engine.borrow_mut().emit(SurfaceEvent::Progress { percent: 10 });
    engine.borrow_mut().emit(SurfaceEvent::LoadFailed {
        url: APP_URL.into(),
        code: -2,
        description: "net::ERR_NAME_NOT_RESOLVED".into(),
    });
    shell.pump();

    assert!(!shell.progress.is_visible());
    assert_eq!(shell.navigation, NavigationState::Errored);
    assert_eq!(shell.notifier.shown.len(), 1);
    let toast = &shell.notifier.shown[0];
    assert!(toast.message.contains("net::ERR_NAME_NOT_RESOLVED"));
    assert_eq!(toast.ttl, ToastDuration::Short.as_duration());
    // No automatic retry.
    assert_eq!(engine.borrow().loads, vec![APP_URL]);
}

// =============================================================================
// BACK INPUT
// =============================================================================

#[test]
fn back_with_history_is_consumed_once() {
    let (mut shell, engine) = create_shell();
    engine.borrow_mut().click("https://mvai-connexx.com/leads");
    shell.pump();

    assert!(shell.handle_back());
    assert_eq!(engine.borrow().go_back_calls, 1);
}

#[test]
fn back_without_history_is_not_consumed() {
    let (mut shell, engine) = create_shell();
    shell.pump();

    assert!(!shell.handle_back());
    assert_eq!(engine.borrow().go_back_calls, 0);
}

#[test]
fn back_after_destroy_is_not_consumed() {
    let (mut shell, engine) = create_shell();
    engine.borrow_mut().click("https://mvai-connexx.com/leads");
    shell.destroy();

    assert!(!shell.handle_back());
    assert_eq!(engine.borrow().go_back_calls, 0);
}

// =============================================================================
// LIFECYCLE
// =============================================================================

#[test]
fn pause_and_resume_are_forwarded() {
    let (mut shell, engine) = create_shell();
    shell.resume();
    shell.pause();
    shell.resume();

    assert_eq!(shell.lifecycle, LifecycleState::Foreground);
    assert_eq!(engine.borrow().resume_calls, 2);
    assert_eq!(engine.borrow().pause_calls, 1);
}

#[test]
fn repeated_pause_is_forwarded_once() {
    let (mut shell, engine) = create_shell();
    shell.resume();
    shell.pause();
    shell.pause();
    assert_eq!(engine.borrow().pause_calls, 1);
}

#[test]
fn destroy_is_forwarded_exactly_once() {
    let (mut shell, engine) = create_shell();
    shell.resume();
    shell.destroy();
    shell.destroy();

    assert_eq!(engine.borrow().destroy_calls, 1);
    assert_eq!(shell.lifecycle, LifecycleState::Destroyed);
    assert!(shell.surface().is_none());
}

#[test]
fn destroy_without_surface_is_a_no_op() {
    let mut shell = create_without_surface();
    shell.destroy();
    shell.destroy();
    assert_eq!(shell.lifecycle, LifecycleState::Destroyed);
}

#[test]
fn signals_after_destroy_are_ignored() {
    let (mut shell, engine) = create_shell();
    shell.destroy();
    shell.resume();
    shell.pause();
    shell.pump();

    let engine = engine.borrow();
    assert_eq!(engine.resume_calls, 0);
    assert_eq!(engine.pause_calls, 0);
}
