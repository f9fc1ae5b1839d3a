use crate::ui::detail::{DetailIntent, DetailReducer, DetailState};
use crate::ui::effect::{Effect, Screen};
use crate::ui::events::AppEvent;
use crate::ui::input::handle_key;
use crate::ui::list::{ListIntent, ListReducer, ListState};
use crate::ui::mvi::Reducer;
use crate::ui::navigation::{Navigator, Route};
use crate::ui::worker::{UiCommand, UiCommandSender};

/// Generic MVI dispatch: takes current state, runs reducer, stores result,
/// yields the requested effect.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {{
        let (state, effect) = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
        $self.$field = state;
        effect
    }};
}

pub struct App {
    should_quit: bool,
    navigator: Navigator,
    list: ListState,
    detail: DetailState,
    commands: UiCommandSender,
    server: String,
    ticks: u64,
    /// Number of detail screens opened so far.
    visits: u64,
}

impl App {
    pub fn new(commands: UiCommandSender, server: String) -> Self {
        Self {
            should_quit: false,
            navigator: Navigator::new(),
            list: ListState::default(),
            detail: DetailState::default(),
            commands,
            server,
            ticks: 0,
            visits: 0,
        }
    }

    /// Show the start screen.
    pub fn start(&mut self) {
        self.dispatch_list(ListIntent::Load);
    }

    pub fn route(&self) -> &Route {
        self.navigator.current()
    }

    pub fn list(&self) -> &ListState {
        &self.list
    }

    pub fn detail(&self) -> &DetailState {
        &self.detail
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn on_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => handle_key(self, key),
            AppEvent::Tick => self.ticks = self.ticks.wrapping_add(1),
            AppEvent::Resize(_, _) => {}
            AppEvent::CountersLoaded { screen, counters } => match screen {
                Screen::List => self.dispatch_list(ListIntent::Loaded { counters }),
                Screen::Detail(visit) if self.is_current_visit(visit) => {
                    self.dispatch_detail(DetailIntent::Loaded { counters })
                }
                Screen::Detail(visit) => {
                    tracing::debug!(visit, "Dropping result for a closed detail screen")
                }
            },
            AppEvent::RequestFailed { screen, message } => match screen {
                Screen::List => self.dispatch_list(ListIntent::LoadFailed { message }),
                Screen::Detail(visit) if self.is_current_visit(visit) => {
                    self.dispatch_detail(DetailIntent::RequestFailed { message })
                }
                Screen::Detail(visit) => tracing::debug!(
                    visit,
                    %message,
                    "Dropping failure for a closed detail screen"
                ),
            },
        }
    }

    /// Go to a route path (`list`, `counter/{id}`). Unknown paths are ignored.
    pub fn navigate(&mut self, path: &str) {
        let Some(route) = Route::parse(path) else {
            tracing::warn!(path, "Unknown route");
            return;
        };
        self.navigator.navigate(route.clone());
        match route {
            Route::Counter(id) => {
                self.visits += 1;
                self.detail = DetailState::for_route(id, self.visits);
                self.dispatch_detail(DetailIntent::Load);
            }
            Route::List => self.dispatch_list(ListIntent::Load),
        }
    }

    pub fn dispatch_list(&mut self, intent: ListIntent) {
        if let Some(effect) = dispatch_mvi!(self, list, ListReducer, intent) {
            self.run_effect(effect);
        }
    }

    pub fn dispatch_detail(&mut self, intent: DetailIntent) {
        if let Some(effect) = dispatch_mvi!(self, detail, DetailReducer, intent) {
            self.run_effect(effect);
        }
    }

    /// Leave the current screen; quits from the start screen.
    pub fn go_back(&mut self) {
        if !self.navigator.pop() {
            self.request_quit();
            return;
        }
        if *self.navigator.current() == Route::List {
            // Values may have changed on the detail screen.
            self.dispatch_list(ListIntent::Load);
        }
    }

    fn on_detail(&self) -> bool {
        matches!(self.navigator.current(), Route::Counter(_))
    }

    fn is_current_visit(&self, visit: u64) -> bool {
        self.on_detail() && self.detail.visit == visit
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::FetchCounters { screen } => self.send(UiCommand::FetchCounters { screen }),
            Effect::Increment { id, delta, visit } => {
                self.send(UiCommand::Increment { id, delta, visit })
            }
            Effect::Navigate(path) => self.navigate(&path),
        }
    }

    fn send(&mut self, command: UiCommand) {
        if self.commands.send(command).is_ok() {
            return;
        }
        tracing::error!("Network worker is not running");
        let message = "Network worker stopped".to_string();
        // Detail commands come from the detail screen; everything else is the list.
        if self.on_detail() {
            self.dispatch_detail(DetailIntent::RequestFailed { message });
        } else {
            self.dispatch_list(ListIntent::LoadFailed { message });
        }
    }
}
