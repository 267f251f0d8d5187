use std::future::Future;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::config::Config;
use crate::error::{FetchError, FetchResult, Result};
use crate::models::{AnalysisRecord, InventionName, InventionSummary, Pattern, TimelineEntry};
use crate::query::{search, search_and_sort, SortOrder};
use crate::services::{AnalysisGateway, HttpGateway};
use crate::state::{CollectionView, DetailView, Ticket, TicketIssuer};
use crate::tui::AppAction;
use crate::view::{self, Slice};

const SPINNER_FRAMES: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Completed gateway call, tagged with the view it was issued for
pub enum FetchMessage {
    Inventions(Ticket, FetchResult<Vec<InventionSummary>>),
    Patterns(Ticket, FetchResult<Vec<Pattern>>),
    Timeline(Ticket, FetchResult<Vec<TimelineEntry>>),
    Analysis(Ticket, FetchResult<AnalysisRecord>),
    Created(InventionName, FetchResult<AnalysisRecord>),
}

pub struct HomeScreen {
    pub recent: CollectionView<InventionSummary>,
    pub patterns: CollectionView<Pattern>,
    pub timeline: CollectionView<TimelineEntry>,
}

pub struct BrowseScreen<T> {
    pub view: CollectionView<T>,
    pub query: String,
}

pub enum Screen {
    Home(HomeScreen),
    Inventions(BrowseScreen<InventionSummary>),
    Patterns(BrowseScreen<Pattern>),
    Timeline {
        browse: BrowseScreen<TimelineEntry>,
        order: SortOrder,
    },
    Analysis(DetailView),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Prompt,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub body: String,
}

impl Notice {
    fn new(kind: NoticeKind, title: &str, body: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.to_string(),
            body: body.into(),
        }
    }
}

pub struct App {
    pub screen: Screen,

    // UI State
    pub selected_index: usize,
    pub detail_scroll: u16,
    pub show_help: bool,
    pub input_active: bool,
    pub analyze_input: String,
    pub notice: Option<Notice>,
    pub suggestions: Vec<String>,
    suggestion_index: usize,
    timeline_order: SortOrder,
    spinner_frame: usize,

    // Async state
    pub analyzing: bool,
    tickets: TicketIssuer,
    fetch_tx: mpsc::Sender<FetchMessage>,
    fetch_rx: mpsc::Receiver<FetchMessage>,

    // Services
    gateway: Arc<dyn AnalysisGateway>,
}

impl App {
    pub fn new(config: &Config) -> Result<Self> {
        let gateway = HttpGateway::new(config)?;
        Ok(Self::with_gateway(config, Arc::new(gateway)))
    }

    /// Build the app on the home screen and start its fetches.
    ///
    /// Must be called inside a tokio runtime.
    pub fn with_gateway(config: &Config, gateway: Arc<dyn AnalysisGateway>) -> Self {
        let (fetch_tx, fetch_rx) = mpsc::channel(16);
        let mut tickets = TicketIssuer::default();
        let screen = Screen::Home(HomeScreen {
            recent: CollectionView::new("inventions", tickets.issue()),
            patterns: CollectionView::new("patterns", tickets.issue()),
            timeline: CollectionView::new("timeline", tickets.issue()),
        });

        let mut app = Self {
            screen,
            selected_index: 0,
            detail_scroll: 0,
            show_help: false,
            input_active: false,
            analyze_input: String::new(),
            notice: None,
            suggestions: config.suggested_inventions.clone(),
            suggestion_index: 0,
            timeline_order: config.timeline_order,
            spinner_frame: 0,
            analyzing: false,
            tickets,
            fetch_tx,
            fetch_rx,
            gateway,
        };
        app.fetch_current();
        app
    }

    pub fn handle_action(&mut self, action: AppAction) -> bool {
        match action {
            AppAction::Quit => return true,

            AppAction::MoveUp => {
                if matches!(self.screen, Screen::Analysis(_)) {
                    self.detail_scroll = self.detail_scroll.saturating_sub(1);
                } else if self.selected_index > 0 {
                    self.selected_index -= 1;
                }
            }

            AppAction::MoveDown => {
                if matches!(self.screen, Screen::Analysis(_)) {
                    self.detail_scroll = self.detail_scroll.saturating_add(1);
                } else {
                    let len = self.selectable_len();
                    if len > 0 && self.selected_index < len - 1 {
                        self.selected_index += 1;
                    }
                }
            }

            AppAction::MoveToTop => {
                self.selected_index = 0;
                self.detail_scroll = 0;
            }

            AppAction::MoveToBottom => {
                self.selected_index = self.selectable_len().saturating_sub(1);
            }

            AppAction::Select => self.open_selected(),

            AppAction::GoHome => self.go_home(),
            AppAction::ShowInventions => self.show_inventions(),
            AppAction::ShowPatterns => self.show_patterns(),
            AppAction::ShowTimeline => self.show_timeline(),

            AppAction::ToggleSort => {
                if let Screen::Timeline { order, .. } = &mut self.screen {
                    *order = order.toggle();
                    self.timeline_order = *order;
                    self.selected_index = 0;
                }
            }

            AppAction::StartInput => {
                if !matches!(self.screen, Screen::Analysis(_)) {
                    self.input_active = true;
                    self.notice = None;
                }
            }

            AppAction::InputChar(c) => {
                if let Some(buffer) = self.input_buffer() {
                    buffer.push(c);
                }
                self.on_query_changed();
            }

            AppAction::InputBackspace => {
                if let Some(buffer) = self.input_buffer() {
                    buffer.pop();
                }
                self.on_query_changed();
            }

            AppAction::NextSuggestion => self.next_suggestion(),

            AppAction::InputConfirm => {
                self.input_active = false;
                if matches!(self.screen, Screen::Home(_)) {
                    self.submit_analysis();
                }
            }

            AppAction::InputCancel => {
                if let Some(buffer) = self.input_buffer() {
                    buffer.clear();
                }
                self.input_active = false;
                self.on_query_changed();
            }

            AppAction::ShowHelp => {
                self.show_help = true;
            }

            AppAction::HideHelp => {
                self.show_help = false;
            }
        }

        false
    }

    // Navigation. Every screen change builds fresh views with fresh tickets,
    // so anything still in flight for the old screen is dropped on arrival.

    pub fn go_home(&mut self) {
        if matches!(self.screen, Screen::Home(_)) {
            self.reset_view_state();
            return;
        }
        self.screen = Screen::Home(HomeScreen {
            recent: CollectionView::new("inventions", self.tickets.issue()),
            patterns: CollectionView::new("patterns", self.tickets.issue()),
            timeline: CollectionView::new("timeline", self.tickets.issue()),
        });
        self.reset_view_state();
        self.fetch_current();
    }

    pub fn show_inventions(&mut self) {
        self.screen = Screen::Inventions(BrowseScreen {
            view: CollectionView::new("inventions", self.tickets.issue()),
            query: String::new(),
        });
        self.reset_view_state();
        self.fetch_current();
    }

    pub fn show_patterns(&mut self) {
        self.screen = Screen::Patterns(BrowseScreen {
            view: CollectionView::new("patterns", self.tickets.issue()),
            query: String::new(),
        });
        self.reset_view_state();
        self.fetch_current();
    }

    pub fn show_timeline(&mut self) {
        self.screen = Screen::Timeline {
            browse: BrowseScreen {
                view: CollectionView::new("timeline", self.tickets.issue()),
                query: String::new(),
            },
            order: self.timeline_order,
        };
        self.reset_view_state();
        self.fetch_current();
    }

    /// Open the detail screen. A supplied record is shown as-is and never
    /// re-fetched.
    pub fn open_analysis(&mut self, id: i64, supplied: Option<AnalysisRecord>) {
        self.screen = Screen::Analysis(DetailView::open(id, supplied, self.tickets.issue()));
        self.reset_view_state();
        self.fetch_current();
    }

    fn reset_view_state(&mut self) {
        self.selected_index = 0;
        self.detail_scroll = 0;
        self.input_active = false;
    }

    fn open_selected(&mut self) {
        let id = match &self.screen {
            Screen::Home(_) => self.recent_preview().and_then(|slice| {
                slice.items.get(self.selected_index).map(|i| i.id)
            }),
            Screen::Inventions(_) => self
                .visible_inventions()
                .get(self.selected_index)
                .map(|i| i.id),
            _ => None,
        };

        if let Some(id) = id {
            self.open_analysis(id, None);
        }
    }

    fn selectable_len(&self) -> usize {
        match &self.screen {
            Screen::Home(_) => self.recent_preview().map(|s| s.len()).unwrap_or(0),
            Screen::Inventions(_) => self.visible_inventions().len(),
            Screen::Patterns(_) => self.visible_patterns().len(),
            Screen::Timeline { .. } => self.visible_timeline().len(),
            Screen::Analysis(_) => 0,
        }
    }

    fn input_buffer(&mut self) -> Option<&mut String> {
        if !self.input_active {
            return None;
        }
        match &mut self.screen {
            Screen::Home(_) => Some(&mut self.analyze_input),
            Screen::Inventions(browse) => Some(&mut browse.query),
            Screen::Patterns(browse) => Some(&mut browse.query),
            Screen::Timeline { browse, .. } => Some(&mut browse.query),
            Screen::Analysis(_) => None,
        }
    }

    fn on_query_changed(&mut self) {
        if !matches!(self.screen, Screen::Home(_)) {
            self.selected_index = 0;
        }
    }

    fn next_suggestion(&mut self) {
        if !self.input_active || !matches!(self.screen, Screen::Home(_)) {
            return;
        }
        if let Some(suggestion) = self.suggestions.get(self.suggestion_index) {
            self.analyze_input = suggestion.clone();
            self.suggestion_index = (self.suggestion_index + 1) % self.suggestions.len();
        }
    }

    // Create-analysis flow

    /// Validate the typed name and request a new analysis.
    ///
    /// Blank names never reach the gateway. While a request is in flight
    /// further submits are ignored.
    pub fn submit_analysis(&mut self) {
        if self.analyzing {
            tracing::debug!("Analysis already in flight, ignoring submit");
            return;
        }

        let name = match InventionName::parse(&self.analyze_input) {
            Ok(name) => name,
            Err(_) => {
                self.notice = Some(Notice::new(
                    NoticeKind::Prompt,
                    "Choose your curiosity",
                    "What invention's secret origin intrigues you?",
                ));
                return;
            }
        };

        tracing::debug!("Analyzing invention: {}", name);
        self.analyzing = true;
        self.notice = None;
        self.spawn_request(move |gateway| async move {
            let result = gateway.create_analysis(&name).await;
            FetchMessage::Created(name, result)
        });
    }

    fn finish_analysis(&mut self, name: InventionName, result: FetchResult<AnalysisRecord>) {
        self.analyzing = false;
        match result {
            Ok(record) => {
                tracing::info!("Analysis {} created for {}", record.id, name);
                self.notice = Some(Notice::new(
                    NoticeKind::Info,
                    "Discovery complete!",
                    format!("The secret origin of {name} has been revealed"),
                ));
                self.analyze_input.clear();
                if matches!(self.screen, Screen::Home(_)) {
                    self.open_analysis(record.id, Some(record));
                } else {
                    self.notice = Some(Notice::new(
                        NoticeKind::Info,
                        "Discovery complete!",
                        format!("The secret origin of {name} has been revealed (#{})", record.id),
                    ));
                }
            }
            Err(e) => {
                tracing::error!("Error analyzing {}: {}", name, e);
                self.notice = Some(Notice::new(
                    NoticeKind::Error,
                    "Oops! Even errors lead somewhere",
                    "Let's try uncovering that story again.",
                ));
            }
        }
    }

    // Fetch plumbing

    fn spawn_request<F, Fut>(&self, request: F)
    where
        F: FnOnce(Arc<dyn AnalysisGateway>) -> Fut + Send + 'static,
        Fut: Future<Output = FetchMessage> + Send + 'static,
    {
        let gateway = Arc::clone(&self.gateway);
        let tx = self.fetch_tx.clone();
        tokio::spawn(async move {
            let message = request(gateway).await;
            if tx.send(message).await.is_err() {
                tracing::debug!("App closed before fetch completed");
            }
        });
    }

    /// Issue the fetches the current screen needs, one per view.
    fn fetch_current(&self) {
        match &self.screen {
            Screen::Home(home) => {
                self.fetch_inventions(home.recent.ticket());
                self.fetch_patterns(home.patterns.ticket());
                self.fetch_timeline(home.timeline.ticket());
            }
            Screen::Inventions(browse) => self.fetch_inventions(browse.view.ticket()),
            Screen::Patterns(browse) => self.fetch_patterns(browse.view.ticket()),
            Screen::Timeline { browse, .. } => self.fetch_timeline(browse.view.ticket()),
            Screen::Analysis(detail) => {
                if detail.needs_fetch() {
                    let (id, ticket) = (detail.id(), detail.ticket());
                    self.spawn_request(move |gateway| async move {
                        FetchMessage::Analysis(ticket, gateway.get_analysis(id).await)
                    });
                }
            }
        }
    }

    fn fetch_inventions(&self, ticket: Ticket) {
        self.spawn_request(move |gateway| async move {
            FetchMessage::Inventions(ticket, gateway.list_inventions().await)
        });
    }

    fn fetch_patterns(&self, ticket: Ticket) {
        self.spawn_request(move |gateway| async move {
            FetchMessage::Patterns(ticket, gateway.list_patterns().await)
        });
    }

    fn fetch_timeline(&self, ticket: Ticket) {
        self.spawn_request(move |gateway| async move {
            FetchMessage::Timeline(ticket, gateway.list_timeline().await)
        });
    }

    /// Apply every completed fetch without blocking
    pub fn poll_results(&mut self) {
        while let Ok(message) = self.fetch_rx.try_recv() {
            self.apply(message);
        }
    }

    /// Wait for the next completed fetch and apply it
    #[cfg(test)]
    pub async fn next_result(&mut self) -> bool {
        match self.fetch_rx.recv().await {
            Some(message) => {
                self.apply(message);
                true
            }
            None => false,
        }
    }

    fn apply(&mut self, message: FetchMessage) {
        let message = match message {
            FetchMessage::Created(name, result) => {
                self.finish_analysis(name, result);
                return;
            }
            other => other,
        };

        let applied = match (message, &mut self.screen) {
            (FetchMessage::Inventions(ticket, result), Screen::Home(home)) => {
                home.recent.resolve(ticket, result)
            }
            (FetchMessage::Inventions(ticket, result), Screen::Inventions(browse)) => {
                browse.view.resolve(ticket, result)
            }
            (FetchMessage::Patterns(ticket, result), Screen::Home(home)) => {
                home.patterns.resolve(ticket, result)
            }
            (FetchMessage::Patterns(ticket, result), Screen::Patterns(browse)) => {
                browse.view.resolve(ticket, result)
            }
            (FetchMessage::Timeline(ticket, result), Screen::Home(home)) => {
                home.timeline.resolve(ticket, result)
            }
            (FetchMessage::Timeline(ticket, result), Screen::Timeline { browse, .. }) => {
                browse.view.resolve(ticket, result)
            }
            (FetchMessage::Analysis(ticket, result), Screen::Analysis(detail)) => {
                detail.resolve(ticket, result)
            }
            _ => false,
        };

        if !applied {
            tracing::debug!("Dropped fetch result for a view that is no longer active");
        }
    }

    // Derived projections. Recomputed on every call; collections are small.

    pub fn recent_preview(&self) -> Option<Slice<'_, InventionSummary>> {
        match &self.screen {
            Screen::Home(home) => Some(view::preview_of(
                home.recent.items(),
                view::RECENT_INVENTIONS_PREVIEW,
            )),
            _ => None,
        }
    }

    pub fn visible_inventions(&self) -> Vec<&InventionSummary> {
        match &self.screen {
            Screen::Inventions(browse) => search(browse.view.items(), &browse.query),
            _ => Vec::new(),
        }
    }

    pub fn visible_patterns(&self) -> Vec<&Pattern> {
        match &self.screen {
            Screen::Patterns(browse) => search(browse.view.items(), &browse.query),
            _ => Vec::new(),
        }
    }

    pub fn visible_timeline(&self) -> Vec<&TimelineEntry> {
        match &self.screen {
            Screen::Timeline { browse, order } => {
                search_and_sort(browse.view.items(), &browse.query, *order)
            }
            _ => Vec::new(),
        }
    }

    pub fn tick_spinner(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
    }

    pub fn spinner(&self) -> char {
        SPINNER_FRAMES[self.spinner_frame]
    }

    /// First failed fetch behind the current screen. Rendered as empty, but
    /// surfaced as a hint in the status line.
    pub fn screen_failure(&self) -> Option<&FetchError> {
        match &self.screen {
            Screen::Home(home) => home
                .recent
                .failure()
                .or_else(|| home.patterns.failure())
                .or_else(|| home.timeline.failure()),
            Screen::Inventions(browse) => browse.view.failure(),
            Screen::Patterns(browse) => browse.view.failure(),
            Screen::Timeline { browse, .. } => browse.view.failure(),
            Screen::Analysis(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;
    use std::time::Duration;

    use super::*;
    use crate::query::fixtures::{entry, inventions};
    use crate::services::stub::{analysis_record, StubGateway};
    use crate::state::{DetailState, Presentation, Provenance};

    fn app_with(stub: StubGateway) -> (App, Arc<StubGateway>) {
        let stub = Arc::new(stub);
        let app = App::with_gateway(&Config::default(), stub.clone());
        (app, stub)
    }

    async fn settle(app: &mut App, results: usize) {
        for _ in 0..results {
            let received = tokio::time::timeout(Duration::from_secs(2), app.next_result())
                .await
                .expect("fetch result in time");
            assert!(received);
        }
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_action(AppAction::InputChar(c));
        }
    }

    #[tokio::test]
    async fn test_home_loads_previews() {
        let stub = StubGateway {
            inventions: Ok(vec![
                inventions()[0].clone(),
                inventions()[1].clone(),
                inventions()[0].clone(),
                inventions()[1].clone(),
            ]),
            ..StubGateway::default()
        };
        let (mut app, stub) = app_with(stub);
        settle(&mut app, 3).await;

        let preview = app.recent_preview().unwrap();
        assert_eq!(preview.len(), 3);
        assert_eq!(preview.total, 4);
        assert!(preview.has_more());
        assert_eq!(stub.calls.list_inventions.load(Ordering::SeqCst), 1);
        assert_eq!(stub.calls.list_patterns.load(Ordering::SeqCst), 1);
        assert_eq!(stub.calls.list_timeline.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_supplied_analysis_skips_fetch() {
        let (mut app, stub) = app_with(StubGateway::default());
        settle(&mut app, 3).await;

        app.open_analysis(42, Some(analysis_record(42, "Microwave Oven")));

        let Screen::Analysis(detail) = &app.screen else {
            panic!("expected analysis screen");
        };
        assert_eq!(detail.provenance(), Provenance::Supplied);
        assert!(matches!(detail.state(), DetailState::Ready(_)));
        assert_eq!(stub.calls.get_analysis.load(Ordering::SeqCst), 0);

        tokio::task::yield_now().await;
        assert!(app.fetch_rx.try_recv().is_err());
        assert_eq!(stub.calls.get_analysis.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_missing_analysis_shows_not_found_then_home() {
        let (mut app, stub) = app_with(StubGateway::default());
        settle(&mut app, 3).await;

        app.open_analysis(999, None);
        settle(&mut app, 1).await;

        let Screen::Analysis(detail) = &app.screen else {
            panic!("expected analysis screen");
        };
        assert_eq!(detail.state(), &DetailState::NotFound);
        assert_eq!(stub.calls.get_analysis.load(Ordering::SeqCst), 1);

        app.handle_action(AppAction::GoHome);
        assert!(matches!(app.screen, Screen::Home(_)));
    }

    #[tokio::test]
    async fn test_blank_name_prompts_without_calling_service() {
        let (mut app, stub) = app_with(StubGateway::default());
        settle(&mut app, 3).await;

        app.handle_action(AppAction::StartInput);
        type_text(&mut app, "   ");
        app.handle_action(AppAction::InputConfirm);

        let notice = app.notice.clone().unwrap();
        assert_eq!(notice.kind, NoticeKind::Prompt);
        assert_eq!(notice.title, "Choose your curiosity");
        assert!(!app.analyzing);
        assert_eq!(stub.calls.create_analysis.load(Ordering::SeqCst), 0);
        assert_eq!(stub.calls.total(), 3);
        assert!(matches!(app.screen, Screen::Home(_)));
    }

    #[tokio::test]
    async fn test_create_navigates_with_supplied_record() {
        let (mut app, stub) = app_with(StubGateway::default());
        settle(&mut app, 3).await;

        app.handle_action(AppAction::StartInput);
        type_text(&mut app, " Velcro ");
        app.handle_action(AppAction::InputConfirm);
        assert!(app.analyzing);

        // gated while in flight
        app.analyze_input = "Penicillin".to_string();
        app.submit_analysis();

        settle(&mut app, 1).await;
        assert!(!app.analyzing);
        assert_eq!(stub.calls.create_analysis.load(Ordering::SeqCst), 1);

        let Screen::Analysis(detail) = &app.screen else {
            panic!("expected analysis screen");
        };
        assert_eq!(detail.provenance(), Provenance::Supplied);
        assert_eq!(
            detail.record().map(|r| r.analysis.invention_name.as_str()),
            Some("Velcro")
        );
        assert_eq!(stub.calls.get_analysis.load(Ordering::SeqCst), 0);
        assert_eq!(app.notice.as_ref().map(|n| n.kind), Some(NoticeKind::Info));
    }

    #[tokio::test]
    async fn test_create_finishing_elsewhere_does_not_navigate() {
        let (mut app, stub) = app_with(StubGateway::default());
        settle(&mut app, 3).await;

        app.analyze_input = "Velcro".to_string();
        app.submit_analysis();
        app.handle_action(AppAction::ShowInventions);

        // the created record plus the inventions listing
        settle(&mut app, 2).await;

        assert!(!app.analyzing);
        assert!(matches!(app.screen, Screen::Inventions(_)));
        let notice = app.notice.clone().unwrap();
        assert_eq!(notice.kind, NoticeKind::Info);
        assert_eq!(notice.title, "Discovery complete!");
        assert!(notice.body.contains("#100"));
        assert_eq!(stub.calls.get_analysis.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_go_home_on_home_keeps_loaded_views() {
        let stub = StubGateway {
            inventions: Ok(inventions()),
            ..StubGateway::default()
        };
        let (mut app, stub) = app_with(stub);
        settle(&mut app, 3).await;

        app.selected_index = 1;
        app.handle_action(AppAction::GoHome);
        tokio::task::yield_now().await;

        assert_eq!(app.selected_index, 0);
        assert_eq!(stub.calls.total(), 3);
        assert!(app.fetch_rx.try_recv().is_err());
        let Screen::Home(home) = &app.screen else {
            panic!("expected home screen");
        };
        assert_eq!(home.recent.items().len(), 2);
    }

    #[tokio::test]
    async fn test_create_failure_offers_retry() {
        let (mut app, stub) = app_with(StubGateway::unreachable());
        settle(&mut app, 3).await;

        app.analyze_input = "Pacemaker".to_string();
        app.submit_analysis();
        settle(&mut app, 1).await;

        assert!(!app.analyzing);
        assert!(matches!(app.screen, Screen::Home(_)));
        let notice = app.notice.clone().unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.title, "Oops! Even errors lead somewhere");

        // retry is allowed once the first attempt settled
        app.submit_analysis();
        settle(&mut app, 1).await;
        assert_eq!(stub.calls.create_analysis.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_unreachable_service_renders_empty() {
        let (mut app, _stub) = app_with(StubGateway::unreachable());
        settle(&mut app, 3).await;

        let Screen::Home(home) = &app.screen else {
            panic!("expected home screen");
        };
        assert_eq!(home.recent.presentation(), Presentation::Empty);
        assert_eq!(home.patterns.presentation(), Presentation::Empty);
        assert_eq!(home.timeline.presentation(), Presentation::Empty);
        assert!(matches!(home.recent.failure(), Some(FetchError::Transport(_))));
        assert!(matches!(app.screen_failure(), Some(FetchError::Transport(_))));
    }

    #[tokio::test]
    async fn test_late_result_for_closed_view_is_dropped() {
        let stub = StubGateway {
            inventions: Ok(inventions()),
            ..StubGateway::default()
        };
        let (mut app, _stub) = app_with(stub);
        settle(&mut app, 3).await;

        app.show_inventions();
        app.go_home();
        // one stale inventions result plus three for the new home screen
        settle(&mut app, 4).await;

        let Screen::Home(home) = &app.screen else {
            panic!("expected home screen");
        };
        assert_eq!(home.recent.items().len(), 2);
        assert!(!home.patterns.is_loading());
    }

    #[tokio::test]
    async fn test_select_opens_invention_by_id() {
        let stub = StubGateway {
            inventions: Ok(inventions()),
            ..StubGateway::default()
        }
        .with_analysis(analysis_record(2, "Penicillin"));
        let (mut app, stub) = app_with(stub);
        settle(&mut app, 3).await;

        app.handle_action(AppAction::ShowInventions);
        settle(&mut app, 1).await;

        app.handle_action(AppAction::StartInput);
        type_text(&mut app, "PEN");
        assert_eq!(app.visible_inventions().len(), 1);
        app.handle_action(AppAction::InputConfirm);
        app.handle_action(AppAction::Select);
        settle(&mut app, 1).await;

        let Screen::Analysis(detail) = &app.screen else {
            panic!("expected analysis screen");
        };
        assert_eq!(detail.id(), 2);
        assert_eq!(detail.provenance(), Provenance::MustFetch);
        assert!(detail.record().is_some());
        assert_eq!(stub.calls.get_analysis.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_timeline_search_and_sort_recompute() {
        let stub = StubGateway {
            timeline: Ok(vec![
                entry(1928, "Penicillin", "Mould"),
                entry(1945, "Microwave Oven", "Magnetron"),
                entry(1895, "X-ray", "Glowing screen"),
            ]),
            ..StubGateway::default()
        };
        let (mut app, _stub) = app_with(stub);
        settle(&mut app, 3).await;

        app.handle_action(AppAction::ShowTimeline);
        settle(&mut app, 1).await;

        let years: Vec<_> = app.visible_timeline().iter().map(|e| e.year).collect();
        assert_eq!(years, vec![1945, 1928, 1895]);

        app.handle_action(AppAction::ToggleSort);
        let years: Vec<_> = app.visible_timeline().iter().map(|e| e.year).collect();
        assert_eq!(years, vec![1895, 1928, 1945]);

        app.handle_action(AppAction::StartInput);
        type_text(&mut app, "m");
        let years: Vec<_> = app.visible_timeline().iter().map(|e| e.year).collect();
        assert_eq!(years, vec![1928, 1945]);

        app.handle_action(AppAction::InputCancel);
        assert_eq!(app.visible_timeline().len(), 3);
    }

    #[tokio::test]
    async fn test_suggestions_fill_input() {
        let (mut app, _stub) = app_with(StubGateway::default());
        settle(&mut app, 3).await;

        app.handle_action(AppAction::StartInput);
        app.handle_action(AppAction::NextSuggestion);
        assert_eq!(app.analyze_input, "Microwave Oven");
        app.handle_action(AppAction::NextSuggestion);
        assert_eq!(app.analyze_input, "Post-it Notes");
    }
}
