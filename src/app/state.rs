/// View state machine
///
/// Everything the view layer renders from lives in one `ViewState` value,
/// mutated only inside `apply`. `apply` consumes an `Action`, updates the
/// state, and returns the side effects the caller must run; I/O completions
/// come back in as further actions. Actions that do not fit the current
/// phase are logged and dropped, never applied half-way.
use crate::models::{CatalogItem, CategorySet};

/// Top-level UI phase. `Loading`, `Ready` and `Searching` are the
/// authenticated phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Unauthenticated,
    Authenticating,
    Loading,
    Ready,
    Searching,
}

/// Messages driving the state machine
#[derive(Debug, Clone)]
pub enum Action {
    Restore,
    SessionRestored { email: String },
    NoStoredSession,
    SignIn { email: String, password: String },
    SignInSucceeded { email: String },
    SignInFailed { message: String },
    SignOut,
    CatalogLoaded {
        featured: CatalogItem,
        categories: CategorySet,
    },
    Search { query: String },
    SearchFinished {
        seq: u64,
        results: Vec<CatalogItem>,
    },
    SelectItem(CatalogItem),
    CloseModal,
}

/// I/O requested by the reducer; the controller runs these and feeds the
/// completions back in as actions
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    CheckStoredSession,
    Authenticate { email: String, password: String },
    ClearSession,
    LoadCatalog,
    RunSearch { seq: u64, query: String },
}

#[derive(Debug, Clone)]
pub struct ViewState {
    pub phase: Phase,
    pub user_email: Option<String>,
    pub sign_in_error: Option<String>,
    pub featured: Option<CatalogItem>,
    pub categories: CategorySet,
    pub search_results: Vec<CatalogItem>,
    /// Monotonic search generation; completions carrying an older value
    /// are stale and discarded
    pub search_seq: u64,
    pub selected: Option<CatalogItem>,
    pub modal_open: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            phase: Phase::Unauthenticated,
            user_email: None,
            sign_in_error: None,
            featured: None,
            categories: CategorySet::default(),
            search_results: Vec::new(),
            search_seq: 0,
            selected: None,
            modal_open: false,
        }
    }
}

impl ViewState {
    pub fn authenticated(&self) -> bool {
        matches!(self.phase, Phase::Loading | Phase::Ready | Phase::Searching)
    }

    pub fn loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn searching(&self) -> bool {
        self.phase == Phase::Searching
    }

    /// Advance the machine with one action, returning the effects to run
    pub fn apply(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::Restore => vec![Effect::CheckStoredSession],

            Action::SessionRestored { email } => {
                self.phase = Phase::Loading;
                self.user_email = Some(email);
                self.sign_in_error = None;
                vec![Effect::LoadCatalog]
            }

            Action::NoStoredSession => {
                self.phase = Phase::Unauthenticated;
                vec![]
            }

            Action::SignIn { email, password } => {
                if self.phase != Phase::Unauthenticated {
                    return self.ignore("SignIn");
                }
                self.phase = Phase::Authenticating;
                self.sign_in_error = None;
                vec![Effect::Authenticate { email, password }]
            }

            Action::SignInSucceeded { email } => {
                if self.phase != Phase::Authenticating {
                    return self.ignore("SignInSucceeded");
                }
                self.phase = Phase::Loading;
                self.user_email = Some(email);
                vec![Effect::LoadCatalog]
            }

            Action::SignInFailed { message } => {
                if self.phase != Phase::Authenticating {
                    return self.ignore("SignInFailed");
                }
                self.phase = Phase::Unauthenticated;
                self.sign_in_error = Some(message);
                vec![]
            }

            Action::CatalogLoaded {
                featured,
                categories,
            } => {
                // A load completing after sign-out must not resurrect content
                if self.phase != Phase::Loading {
                    return self.ignore("CatalogLoaded");
                }
                self.featured = Some(featured);
                self.categories = categories;
                self.phase = Phase::Ready;
                vec![]
            }

            Action::SignOut => {
                if !self.authenticated() {
                    return self.ignore("SignOut");
                }
                self.user_email = None;
                self.featured = None;
                self.categories.clear();
                self.search_results.clear();
                self.selected = None;
                self.modal_open = false;
                // Orphan any in-flight search completion
                self.search_seq += 1;
                self.phase = Phase::Unauthenticated;
                vec![Effect::ClearSession]
            }

            Action::Search { query } => {
                if !matches!(self.phase, Phase::Ready | Phase::Searching) {
                    return self.ignore("Search");
                }
                self.search_seq += 1;
                if query.trim().is_empty() {
                    self.search_results.clear();
                    self.phase = Phase::Ready;
                    vec![]
                } else {
                    self.phase = Phase::Searching;
                    vec![Effect::RunSearch {
                        seq: self.search_seq,
                        query,
                    }]
                }
            }

            Action::SearchFinished { seq, results } => {
                if self.phase != Phase::Searching || seq != self.search_seq {
                    return self.ignore("SearchFinished");
                }
                self.search_results = results;
                vec![]
            }

            Action::SelectItem(item) => {
                if !self.authenticated() {
                    return self.ignore("SelectItem");
                }
                self.selected = Some(item);
                self.modal_open = true;
                vec![]
            }

            Action::CloseModal => {
                self.selected = None;
                self.modal_open = false;
                vec![]
            }
        }
    }

    fn ignore(&self, action: &str) -> Vec<Effect> {
        tracing::debug!(
            action = action,
            phase = ?self.phase,
            "Action does not apply in current phase; dropped"
        );
        vec![]
    }
}
