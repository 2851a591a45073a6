/// Application controller
///
/// Owns the view state, the session gate and the catalog aggregator, and
/// acts as the effect runner for the state machine: each dispatched action
/// is reduced, the returned effects are executed, and their completions are
/// fed back in until the machine is quiescent.
use std::collections::VecDeque;
use std::sync::Arc;

use crate::{
    models::TrailerKey,
    services::{CatalogAggregator, SessionGate},
};

use super::state::{Action, Effect, ViewState};

pub struct AppController {
    state: ViewState,
    gate: SessionGate,
    aggregator: CatalogAggregator,
}

impl AppController {
    pub fn new(gate: SessionGate, aggregator: CatalogAggregator) -> Self {
        Self {
            state: ViewState::default(),
            gate,
            aggregator,
        }
    }

    /// Current view snapshot
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Startup entry point: restore a persisted session if one is honored
    pub async fn start(&mut self) {
        self.dispatch(Action::Restore).await;
    }

    /// Reduce one action and run every effect it requests, feeding the
    /// completions back until no work remains
    pub async fn dispatch(&mut self, action: Action) {
        let mut queue: VecDeque<Action> = VecDeque::new();
        queue.push_back(action);

        while let Some(next) = queue.pop_front() {
            let effects = self.state.apply(next);
            for effect in effects {
                if let Some(completion) = self.run_effect(effect).await {
                    queue.push_back(completion);
                }
            }
        }
    }

    /// Trailer lookup for the detail modal. Modal-local by design: the key
    /// is handed straight to the caller and never stored in the view state.
    pub async fn trailer_for(&self, item_id: u64) -> Option<TrailerKey> {
        self.aggregator.fetch_trailer(item_id).await
    }

    async fn run_effect(&self, effect: Effect) -> Option<Action> {
        match effect {
            Effect::CheckStoredSession => match self.gate.restore() {
                Some(session) => Some(Action::SessionRestored {
                    email: session.email,
                }),
                None => Some(Action::NoStoredSession),
            },

            Effect::Authenticate { email, password } => {
                match self.gate.authenticate(&email, &password) {
                    Ok(session) => Some(Action::SignInSucceeded {
                        email: session.email,
                    }),
                    Err(e) => Some(Action::SignInFailed {
                        message: e.user_message(),
                    }),
                }
            }

            Effect::ClearSession => {
                self.gate.sign_out();
                None
            }

            Effect::LoadCatalog => {
                let (featured, categories) = tokio::join!(
                    self.aggregator.load_featured(),
                    self.aggregator.load_categories(),
                );
                Some(Action::CatalogLoaded {
                    featured,
                    categories,
                })
            }

            Effect::RunSearch { seq, query } => {
                let results = self.aggregator.search(&query).await;
                Some(Action::SearchFinished { seq, results })
            }
        }
    }
}
