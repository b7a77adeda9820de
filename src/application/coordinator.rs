//! Notification coordinator use case
//!
//! Mediates between caller intent (title + options) and the notification
//! platform, with the alert dialog as fallback.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, info, warn};

use crate::domain::alert::AlertSound;
use crate::domain::config::{NotifierConfig, NotifierSettings};
use crate::domain::notification::{
    resolve_icon, Category, Notification, NotificationEventKind, NotificationHandle,
    NotificationOptions, TagGenerator,
};
use crate::domain::permission::Permission;

use super::favicon::detect_favicon;
use super::permission::{GatePhase, PermissionGate};
use super::ports::{AlertDialog, AudioCue, DocumentMetadata, NotificationPlatform, Visibility};

/// Collaborators the coordinator drives
pub struct CoordinatorPorts {
    pub platform: Arc<dyn NotificationPlatform>,
    pub visibility: Arc<dyn Visibility>,
    pub document: Arc<dyn DocumentMetadata>,
    /// Primary cue for the alert fallback
    pub cue: Arc<dyn AudioCue>,
    /// Tried once when the primary cue fails
    pub last_resort_cue: Arc<dyn AudioCue>,
    pub dialog: Arc<dyn AlertDialog>,
}

/// Coordinates permission, icon selection, visibility and fallback.
///
/// Triggers never fail: they resolve to a handle, or `None` when the
/// notification was suppressed, replaced by the alert fallback, or rejected
/// by the platform.
pub struct NotificationCoordinator {
    ports: CoordinatorPorts,
    config: RwLock<NotifierConfig>,
    initialized: AtomicBool,
    gate: PermissionGate,
    tags: TagGenerator,
}

impl NotificationCoordinator {
    /// Create a coordinator with default configuration. No permission is
    /// requested until [`init`](Self::init) or the first trigger.
    pub fn new(ports: CoordinatorPorts) -> Self {
        let gate = PermissionGate::new(Arc::clone(&ports.platform));
        Self {
            ports,
            config: RwLock::new(NotifierConfig::default()),
            initialized: AtomicBool::new(false),
            gate,
            tags: TagGenerator::new(),
        }
    }

    /// Replace the configuration and start acquiring permission.
    ///
    /// Settings resolve over the defaults only; a second call discards the
    /// first call's configuration entirely.
    pub fn init(&self, settings: NotifierSettings) {
        *self.config.write().unwrap_or_else(PoisonError::into_inner) =
            NotifierConfig::from_settings(settings);
        self.initialized.store(true, Ordering::SeqCst);

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let gate = self.gate.clone();
                handle.spawn(async move {
                    let permission = gate.ensure().await;
                    debug!(%permission, "Permission acquired during init");
                });
            }
            Err(_) => debug!("No async runtime; permission will be requested on first notification"),
        }
    }

    /// Whether [`init`](Self::init) has been called
    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::SeqCst)
    }

    /// Snapshot of the active configuration
    pub fn config(&self) -> NotifierConfig {
        self.config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Acquire permission if needed. Safe to call repeatedly.
    pub async fn ensure_ready(&self) -> Permission {
        self.gate.ensure().await
    }

    /// Phase of the permission state machine
    pub fn permission_phase(&self) -> GatePhase {
        self.gate.phase()
    }

    /// Platform permission flag; `Denied` when notifications are unsupported
    pub fn permission_status(&self) -> Permission {
        if !self.ports.platform.is_supported() {
            return Permission::Denied;
        }
        self.ports.platform.permission()
    }

    /// Whether the platform supports notifications at all
    pub fn is_supported(&self) -> bool {
        self.ports.platform.is_supported()
    }

    /// Show a notification with an explicit or auto-detected icon
    pub async fn notify(
        &self,
        title: &str,
        options: NotificationOptions,
    ) -> Option<NotificationHandle> {
        self.trigger(title, options, None).await
    }

    pub async fn success(
        &self,
        title: &str,
        options: NotificationOptions,
    ) -> Option<NotificationHandle> {
        self.categorized(Category::Success, title, options).await
    }

    pub async fn error(&self, title: &str, options: NotificationOptions) -> Option<NotificationHandle> {
        self.categorized(Category::Error, title, options).await
    }

    pub async fn info(&self, title: &str, options: NotificationOptions) -> Option<NotificationHandle> {
        self.categorized(Category::Info, title, options).await
    }

    pub async fn warning(
        &self,
        title: &str,
        options: NotificationOptions,
    ) -> Option<NotificationHandle> {
        self.categorized(Category::Warning, title, options).await
    }

    /// Plain message; the icon always comes from favicon detection
    pub async fn message(
        &self,
        title: &str,
        options: NotificationOptions,
    ) -> Option<NotificationHandle> {
        self.categorized(Category::Message, title, options).await
    }

    /// Dispatch on a category value
    pub async fn categorized(
        &self,
        category: Category,
        title: &str,
        options: NotificationOptions,
    ) -> Option<NotificationHandle> {
        let icon = self
            .config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .icons
            .for_category(category)
            .map(str::to_string);
        self.trigger(title, options, icon).await
    }

    async fn trigger(
        &self,
        title: &str,
        options: NotificationOptions,
        category_icon: Option<String>,
    ) -> Option<NotificationHandle> {
        let config = self.config();
        let show_on_source_tab = options
            .show_on_source_tab
            .unwrap_or(config.show_on_source_tab);

        if !show_on_source_tab && self.ports.visibility.is_source_active() {
            info!(title, "Source is active; notification suppressed");
            return None;
        }

        let permission = self.ensure_ready().await;
        if permission != Permission::Granted {
            debug!(%permission, "Notifications unavailable; using alert fallback");
            self.fallback(&config, title, &options).await;
            return None;
        }

        let icon = resolve_icon(options.icon.as_deref(), category_icon.as_deref(), || {
            detect_favicon(self.ports.document.as_ref())
        });
        let tag = self.tags.next_tag();
        let hooks = options.hooks.clone();
        let notification = Notification::build(title, options, icon, tag.clone());

        match self.ports.platform.show(notification).await {
            Ok(handle) => {
                debug!(tag = %handle.tag, "Notification shown");
                Some(handle)
            }
            Err(e) => {
                warn!(%tag, "Failed to show notification: {}", e);
                hooks.fire(NotificationEventKind::Error, &tag);
                None
            }
        }
    }

    async fn fallback(&self, config: &NotifierConfig, title: &str, options: &NotificationOptions) {
        if !config.use_alert_fallback {
            debug!("Alert fallback disabled");
            return;
        }

        if !options.is_silent() {
            self.play_cue(&AlertSound::from_config(config.alert_sound.as_ref()))
                .await;
        }

        let text = Notification::alert_text(title, options.body.as_deref());
        if let Err(e) = self.ports.dialog.alert(&text).await {
            warn!("Alert dialog failed: {}", e);
        }
    }

    async fn play_cue(&self, sound: &AlertSound) {
        let Err(e) = self.ports.cue.play(sound).await else {
            return;
        };
        warn!("Alert sound failed: {}", e);

        if let Err(e) = self.ports.last_resort_cue.play(sound).await {
            debug!("Last-resort alert sound failed: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::path::PathBuf;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::application::ports::{AudioCueError, DialogError, NotificationError};
    use crate::domain::notification::{IconOverrides, NotificationEvent, NotificationHooks};

    /// Records the order of side effects across mocks
    #[derive(Default)]
    struct Journal(Mutex<Vec<String>>);

    impl Journal {
        fn push(&self, entry: impl Into<String>) {
            self.0.lock().unwrap().push(entry.into());
        }

        fn entries(&self) -> Vec<String> {
            self.0.lock().unwrap().clone()
        }
    }

    struct MockPlatform {
        supported: bool,
        flag: Permission,
        answer: Permission,
        fail_show: bool,
        requests: AtomicUsize,
        shown: Mutex<Vec<Notification>>,
        journal: Arc<Journal>,
    }

    #[async_trait]
    impl NotificationPlatform for MockPlatform {
        fn is_supported(&self) -> bool {
            self.supported
        }

        fn permission(&self) -> Permission {
            self.flag
        }

        async fn request_permission(&self) -> Result<Permission, NotificationError> {
            self.requests.fetch_add(1, Ordering::SeqCst);
            self.journal.push("request");
            tokio::task::yield_now().await;
            Ok(self.answer)
        }

        async fn show(
            &self,
            notification: Notification,
        ) -> Result<NotificationHandle, NotificationError> {
            self.journal.push("show");
            if self.fail_show {
                return Err(NotificationError::SendFailed("rejected".into()));
            }
            let handle = NotificationHandle {
                tag: notification.tag.clone(),
                title: notification.title.clone(),
                platform_id: None,
            };
            self.shown.lock().unwrap().push(notification);
            Ok(handle)
        }
    }

    struct MockVisibility(bool);

    impl Visibility for MockVisibility {
        fn is_source_active(&self) -> bool {
            self.0
        }
    }

    struct MockDocument(Option<&'static str>);

    impl DocumentMetadata for MockDocument {
        fn link_href(&self, rel: &str, _mime: Option<&str>) -> Option<String> {
            match (rel, self.0) {
                ("icon", Some(href)) => Some(href.to_string()),
                _ => None,
            }
        }

        fn origin(&self) -> Option<String> {
            None
        }
    }

    struct MockCue {
        name: &'static str,
        fail: bool,
        journal: Arc<Journal>,
    }

    #[async_trait]
    impl AudioCue for MockCue {
        async fn play(&self, sound: &AlertSound) -> Result<(), AudioCueError> {
            let kind = match sound {
                AlertSound::Chime(_) => "chime",
                AlertSound::File(_) => "file",
            };
            self.journal.push(format!("{}:{}", self.name, kind));
            if self.fail {
                return Err(AudioCueError::DeviceNotAvailable("no device".into()));
            }
            Ok(())
        }
    }

    struct MockDialog(Arc<Journal>);

    #[async_trait]
    impl AlertDialog for MockDialog {
        async fn alert(&self, text: &str) -> Result<(), DialogError> {
            self.0.push(format!("alert:{}", text));
            Ok(())
        }
    }

    struct Harness {
        supported: bool,
        flag: Permission,
        answer: Permission,
        fail_show: bool,
        fail_cue: bool,
        source_active: bool,
        favicon: Option<&'static str>,
    }

    impl Default for Harness {
        fn default() -> Self {
            Self {
                supported: true,
                flag: Permission::Default,
                answer: Permission::Granted,
                fail_show: false,
                fail_cue: false,
                source_active: false,
                favicon: Some("https://app.test/favicon.png"),
            }
        }
    }

    impl Harness {
        fn build(self) -> (NotificationCoordinator, Arc<MockPlatform>, Arc<Journal>) {
            let journal = Arc::new(Journal::default());
            let platform = Arc::new(MockPlatform {
                supported: self.supported,
                flag: self.flag,
                answer: self.answer,
                fail_show: self.fail_show,
                requests: AtomicUsize::new(0),
                shown: Mutex::new(Vec::new()),
                journal: Arc::clone(&journal),
            });
            let coordinator = NotificationCoordinator::new(CoordinatorPorts {
                platform: platform.clone(),
                visibility: Arc::new(MockVisibility(self.source_active)),
                document: Arc::new(MockDocument(self.favicon)),
                cue: Arc::new(MockCue {
                    name: "cue",
                    fail: self.fail_cue,
                    journal: Arc::clone(&journal),
                }),
                last_resort_cue: Arc::new(MockCue {
                    name: "bell",
                    fail: false,
                    journal: Arc::clone(&journal),
                }),
                dialog: Arc::new(MockDialog(Arc::clone(&journal))),
            });
            (coordinator, platform, journal)
        }
    }

    fn denied() -> Harness {
        Harness {
            answer: Permission::Denied,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn concurrent_triggers_issue_one_request() {
        let (coordinator, platform, _) = Harness::default().build();

        let (a, b, c) = tokio::join!(
            coordinator.info("one", NotificationOptions::default()),
            coordinator.info("two", NotificationOptions::default()),
            coordinator.message("three", NotificationOptions::default()),
        );

        assert!(a.is_some() && b.is_some() && c.is_some());
        assert_eq!(platform.requests.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn active_source_suppresses_without_side_effects() {
        let (coordinator, platform, journal) = Harness {
            source_active: true,
            answer: Permission::Denied,
            ..Default::default()
        }
        .build();

        let handle = coordinator
            .notify("Hidden", NotificationOptions::with_body("body"))
            .await;

        assert!(handle.is_none());
        assert_eq!(platform.requests.load(Ordering::SeqCst), 0);
        assert!(journal.entries().is_empty());
    }

    #[tokio::test]
    async fn show_on_source_tab_overrides_suppression() {
        let (coordinator, _, _) = Harness {
            source_active: true,
            ..Default::default()
        }
        .build();

        let options = NotificationOptions {
            show_on_source_tab: Some(true),
            ..Default::default()
        };
        assert!(coordinator.notify("Visible", options).await.is_some());
    }

    #[tokio::test]
    async fn configured_default_disables_suppression() {
        let (coordinator, _, _) = Harness {
            source_active: true,
            ..Default::default()
        }
        .build();
        coordinator.init(NotifierSettings {
            show_on_source_tab: Some(true),
            ..Default::default()
        });

        assert!(coordinator
            .notify("Visible", NotificationOptions::default())
            .await
            .is_some());
    }

    #[tokio::test]
    async fn denied_plays_cue_then_alerts() {
        let (coordinator, _, journal) = denied().build();

        let handle = coordinator
            .warning("Disk full", NotificationOptions::with_body("Free some space"))
            .await;

        assert!(handle.is_none());
        assert_eq!(
            journal.entries(),
            vec!["request", "cue:chime", "alert:Disk full\n\nFree some space"]
        );
    }

    #[tokio::test]
    async fn silent_fallback_skips_cue() {
        let (coordinator, _, journal) = denied().build();

        let options = NotificationOptions {
            silent: Some(true),
            ..Default::default()
        };
        coordinator.error("Oops", options).await;

        assert_eq!(journal.entries(), vec!["request", "alert:Oops"]);
    }

    #[tokio::test]
    async fn fallback_can_be_disabled() {
        let (coordinator, _, journal) = denied().build();
        coordinator.init(NotifierSettings {
            use_alert_fallback: Some(false),
            ..Default::default()
        });

        assert!(coordinator
            .info("Nobody hears", NotificationOptions::default())
            .await
            .is_none());
        assert!(!journal.entries().iter().any(|e| e.starts_with("alert")));
    }

    #[tokio::test]
    async fn configured_sound_file_is_played() {
        let (coordinator, _, journal) = denied().build();
        coordinator.init(NotifierSettings {
            alert_sound: Some(PathBuf::from("/tmp/ding.ogg")),
            ..Default::default()
        });

        coordinator.info("Ding", NotificationOptions::default()).await;

        assert!(journal.entries().contains(&"cue:file".to_string()));
    }

    #[tokio::test]
    async fn failing_cue_falls_back_and_still_alerts() {
        let (coordinator, _, journal) = Harness {
            answer: Permission::Denied,
            fail_cue: true,
            ..Default::default()
        }
        .build();

        coordinator.info("Hello", NotificationOptions::default()).await;

        assert_eq!(
            journal.entries(),
            vec!["request", "cue:chime", "bell:chime", "alert:Hello"]
        );
    }

    #[tokio::test]
    async fn unsupported_platform_uses_fallback() {
        let (coordinator, platform, journal) = Harness {
            supported: false,
            ..Default::default()
        }
        .build();

        assert!(!coordinator.is_supported());
        assert_eq!(coordinator.permission_status(), Permission::Denied);

        coordinator.success("Done", NotificationOptions::default()).await;
        assert_eq!(platform.requests.load(Ordering::SeqCst), 0);
        assert_eq!(journal.entries(), vec!["cue:chime", "alert:Done"]);

        coordinator.init(NotifierSettings::default());
        assert!(!coordinator.is_supported());
        assert_eq!(coordinator.permission_status(), Permission::Denied);
    }

    #[tokio::test]
    async fn permission_status_reads_platform_flag() {
        let (coordinator, _, _) = Harness {
            flag: Permission::Granted,
            ..Default::default()
        }
        .build();
        assert_eq!(coordinator.permission_status(), Permission::Granted);
    }

    #[tokio::test]
    async fn tags_are_unique_and_replace_caller_tag() {
        let (coordinator, platform, _) = Harness::default().build();

        for _ in 0..20 {
            let options = NotificationOptions {
                tag: Some("same".to_string()),
                ..Default::default()
            };
            coordinator.notify("Tick", options).await;
        }

        let shown = platform.shown.lock().unwrap();
        let tags: HashSet<&str> = shown.iter().map(|n| n.tag.as_str()).collect();
        assert_eq!(tags.len(), 20);
        assert!(!tags.contains("same"));
    }

    #[tokio::test]
    async fn icon_precedence() {
        let (coordinator, platform, _) = Harness::default().build();

        let explicit = NotificationOptions {
            icon: Some("explicit.png".to_string()),
            ..Default::default()
        };
        coordinator.success("a", explicit).await;
        coordinator.success("b", NotificationOptions::default()).await;
        coordinator.message("c", NotificationOptions::default()).await;

        let shown = platform.shown.lock().unwrap();
        assert_eq!(shown[0].icon.as_deref(), Some("explicit.png"));
        assert_eq!(shown[1].icon, Some(coordinator.config().icons.success));
        assert_eq!(shown[2].icon.as_deref(), Some("https://app.test/favicon.png"));
    }

    #[tokio::test]
    async fn icon_omitted_when_nothing_found() {
        let (coordinator, platform, _) = Harness {
            favicon: None,
            ..Default::default()
        }
        .build();

        coordinator.message("plain", NotificationOptions::default()).await;

        assert!(platform.shown.lock().unwrap()[0].icon.is_none());
    }

    #[tokio::test]
    async fn empty_category_icon_uses_favicon() {
        let (coordinator, platform, _) = Harness::default().build();
        coordinator.init(NotifierSettings {
            icons: IconOverrides {
                info: Some(String::new()),
                ..Default::default()
            },
            ..Default::default()
        });

        coordinator.info("i", NotificationOptions::default()).await;

        assert_eq!(
            platform.shown.lock().unwrap()[0].icon.as_deref(),
            Some("https://app.test/favicon.png")
        );
    }

    #[tokio::test]
    async fn second_init_replaces_icons() {
        let (coordinator, platform, _) = Harness::default().build();
        coordinator.init(NotifierSettings {
            icons: IconOverrides {
                success: Some("first-success.png".to_string()),
                error: Some("first-error.png".to_string()),
                ..Default::default()
            },
            ..Default::default()
        });
        coordinator.init(NotifierSettings {
            icons: IconOverrides {
                success: Some("second-success.png".to_string()),
                ..Default::default()
            },
            ..Default::default()
        });

        coordinator.success("s", NotificationOptions::default()).await;
        coordinator.error("e", NotificationOptions::default()).await;

        let shown = platform.shown.lock().unwrap();
        assert_eq!(shown[0].icon.as_deref(), Some("second-success.png"));
        assert_eq!(shown[1].icon, Some(crate::domain::IconSet::builtin().error));
    }

    #[tokio::test]
    async fn construction_failure_returns_none_and_fires_error_hook() {
        let (coordinator, _, _) = Harness {
            fail_show: true,
            ..Default::default()
        }
        .build();
        let errors = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&errors);
        let options = NotificationOptions {
            hooks: NotificationHooks {
                on_error: Some(Arc::new(move |event: &NotificationEvent| {
                    assert_eq!(event.kind, NotificationEventKind::Error);
                    counter.fetch_add(1, Ordering::SeqCst);
                })),
                ..Default::default()
            },
            ..Default::default()
        };

        assert!(coordinator.notify("Broken", options).await.is_none());
        assert_eq!(errors.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn options_are_copied_to_notification() {
        let (coordinator, platform, _) = Harness::default().build();
        let options = NotificationOptions {
            body: Some("Body".to_string()),
            lang: Some("en".to_string()),
            require_interaction: Some(true),
            data: Some(serde_json::json!({"id": 7})),
            ..Default::default()
        };

        coordinator.notify("Copied", options).await;

        let shown = platform.shown.lock().unwrap();
        let n = &shown[0];
        assert_eq!(n.title, "Copied");
        assert_eq!(n.body.as_deref(), Some("Body"));
        assert_eq!(n.lang.as_deref(), Some("en"));
        assert_eq!(n.require_interaction, Some(true));
        assert_eq!(n.data, Some(serde_json::json!({"id": 7})));
        assert!(n.badge.is_none());
        assert!(n.silent.is_none());
        assert!(n.timestamp.is_none());
    }

    #[tokio::test]
    async fn init_starts_permission_request() {
        let (coordinator, platform, _) = Harness::default().build();
        assert!(!coordinator.is_initialized());

        coordinator.init(NotifierSettings::default());
        assert!(coordinator.is_initialized());

        while coordinator.permission_phase() != GatePhase::Resolved(Permission::Granted) {
            tokio::task::yield_now().await;
        }
        assert_eq!(platform.requests.load(Ordering::SeqCst), 1);

        coordinator.info("after init", NotificationOptions::default()).await;
        assert_eq!(platform.requests.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn init_without_runtime_defers_request() {
        let (coordinator, platform, _) = Harness::default().build();
        coordinator.init(NotifierSettings::default());
        assert_eq!(coordinator.permission_phase(), GatePhase::Unrequested);
        assert_eq!(platform.requests.load(Ordering::SeqCst), 0);
    }
}
