use crate::models::{AdminUser, Complaint, Notice, Sclass, Student, Subject, Teacher};

/// Request-lifecycle state for one resource family. An exhaustive enum, so
/// every consumer has to handle all five states.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase<T> {
    Idle,
    Loading,
    Succeeded(T),
    /// Backend accepted the call but rejected the operation; carries the
    /// server-provided message verbatim.
    Failed(String),
    /// The HTTP call itself failed, or the response body was unusable.
    Error(String),
}

impl<T> Phase<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Phase::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Phase::Succeeded(data) => Some(data),
            _ => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Phase::Failed(m) | Phase::Error(m) => Some(m),
            _ => None,
        }
    }
}

/// How a dispatched request settled.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Success(T),
    Rejected(String),
    Transport(String),
}

/// Token minted per dispatched request. A `Resolve` carrying anything other
/// than the most recent token is stale and gets discarded, so two overlapping
/// fetches against one slice settle deterministically on the newer request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

#[derive(Debug, Clone, PartialEq)]
pub enum Action<T> {
    Begin(RequestToken),
    Resolve(RequestToken, Outcome<T>),
}

/// One independent state slice. Every resource family gets its own; slices
/// never interact.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice<T> {
    phase: Phase<T>,
    next_token: u64,
    inflight: Option<u64>,
}

impl<T> Default for Slice<T> {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            next_token: 0,
            inflight: None,
        }
    }
}

impl<T> Slice<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &Phase<T> {
        &self.phase
    }

    /// Mint a token and enter `Loading`. Any prior `Failed`/`Error` message
    /// is dropped here so a new request never renders a stale one.
    pub fn begin(&mut self) -> RequestToken {
        self.next_token += 1;
        let token = RequestToken(self.next_token);
        self.apply(Action::Begin(token));
        token
    }

    pub fn resolve(&mut self, token: RequestToken, outcome: Outcome<T>) {
        self.apply(Action::Resolve(token, outcome));
    }

    /// The reducer. Pure over the slice fields; all transitions funnel
    /// through here.
    pub fn apply(&mut self, action: Action<T>) {
        match action {
            Action::Begin(token) => {
                self.inflight = Some(token.0);
                self.phase = Phase::Loading;
            }
            Action::Resolve(token, outcome) => {
                if self.inflight != Some(token.0) {
                    // Stale or unknown request; a newer begin() superseded it.
                    return;
                }
                self.inflight = None;
                self.phase = match outcome {
                    Outcome::Success(data) => Phase::Succeeded(data),
                    Outcome::Rejected(message) => Phase::Failed(message),
                    Outcome::Transport(message) => Phase::Error(message),
                };
            }
        }
    }
}

/// The full client-side store: one slice per resource family, same shape and
/// transition rules, separate state.
#[derive(Debug, Default)]
pub struct StoreState {
    pub user: Slice<AdminUser>,
    pub students: Slice<Vec<Student>>,
    pub student_detail: Slice<Student>,
    pub teachers: Slice<Vec<Teacher>>,
    pub sclasses: Slice<Vec<Sclass>>,
    pub subjects: Slice<Vec<Subject>>,
    pub notices: Slice<Vec<Notice>>,
    pub complaints: Slice<Vec<Complaint>>,
}

impl StoreState {
    pub fn new() -> Self {
        Self::default()
    }
}
