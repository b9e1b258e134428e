//! View state of a screen bound to one backend resource.
//!
//! A [`FetchStore`] is a small reducer: it only changes through [`FetchAction`]s, and every
//! request cycle is identified by a [`Ticket`]. Only the latest issued ticket may settle the
//! state, so a slow response for stale parameters can never overwrite the result of a newer
//! request, and a cancelled cycle (parameters changed, screen closed) settles nothing.

use std::rc::Rc;

use crate::FetchError;

/// Identifies one request cycle. Tickets are ordered by issuance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

/// Issues strictly increasing tickets.
#[derive(Debug, Default)]
pub struct TicketCounter {
    last: u64,
}

impl TicketCounter {
    pub fn next(&mut self) -> Ticket {
        self.last += 1;
        Ticket(self.last)
    }
}

/// The `{data, loading, error}` triple of a screen, as a closed set of states.
#[derive(Debug)]
pub enum FetchState<T> {
    /// Some required parameter is missing. No request has been issued.
    Waiting,
    Loading,
    Success(Rc<T>),
    Failure(FetchError),
}

// Manual impls, the derives would require `T: Clone`/`T: PartialEq` for the `Rc`.
impl<T> Clone for FetchState<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Waiting => Self::Waiting,
            Self::Loading => Self::Loading,
            Self::Success(data) => Self::Success(Rc::clone(data)),
            Self::Failure(error) => Self::Failure(error.clone()),
        }
    }
}

impl<T: PartialEq> PartialEq for FetchState<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Waiting, Self::Waiting) | (Self::Loading, Self::Loading) => true,
            (Self::Success(a), Self::Success(b)) => a == b,
            (Self::Failure(a), Self::Failure(b)) => a == b,
            _ => false,
        }
    }
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::Waiting
    }
}

impl<T> FetchState<T> {
    pub fn data(&self) -> Option<&Rc<T>> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    /// True until a cycle settles, including while waiting for parameters.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Waiting | Self::Loading)
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            Self::Failure(error) => Some(error),
            _ => None,
        }
    }
}

pub enum FetchAction<T> {
    /// Parameters are incomplete, stop and wait.
    Wait,
    /// A new request cycle was issued.
    Begin(Ticket),
    /// A request cycle finished.
    Settle(Ticket, Result<T, FetchError>),
    /// A request cycle was abandoned, its result must be dropped.
    Cancel(Ticket),
}

impl<T> std::fmt::Debug for FetchAction<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Wait => write!(f, "Wait"),
            Self::Begin(ticket) => write!(f, "Begin({ticket:?})"),
            Self::Settle(ticket, result) => {
                write!(f, "Settle({ticket:?}, ok: {})", result.is_ok())
            }
            Self::Cancel(ticket) => write!(f, "Cancel({ticket:?})"),
        }
    }
}

#[derive(Debug)]
pub struct FetchStore<T> {
    state: FetchState<T>,
    /// Latest ticket seen in a `Begin`.
    current: Option<Ticket>,
    cancelled: bool,
}

impl<T> Clone for FetchStore<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            current: self.current,
            cancelled: self.cancelled,
        }
    }
}

impl<T> Default for FetchStore<T> {
    fn default() -> Self {
        Self {
            state: FetchState::Waiting,
            current: None,
            cancelled: false,
        }
    }
}

impl<T> FetchStore<T> {
    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    pub fn current_ticket(&self) -> Option<Ticket> {
        self.current
    }

    /// Applies an action. Returns whether the store changed; rejected actions leave it untouched.
    pub fn apply(&mut self, action: FetchAction<T>) -> bool {
        match action {
            FetchAction::Wait => {
                self.current = None;
                self.cancelled = false;
                self.state = FetchState::Waiting;
                true
            }
            FetchAction::Begin(ticket) => {
                if self.current.is_some_and(|current| ticket <= current) {
                    log::debug!("Ignoring out of order {ticket:?}");
                    return false;
                }
                self.current = Some(ticket);
                self.cancelled = false;
                self.state = FetchState::Loading;
                true
            }
            FetchAction::Settle(ticket, result) => {
                let accepted = self.current == Some(ticket)
                    && !self.cancelled
                    && matches!(self.state, FetchState::Loading);
                if !accepted {
                    log::debug!("Dropping stale result of {ticket:?}");
                    return false;
                }
                self.state = match result {
                    Ok(data) => FetchState::Success(Rc::new(data)),
                    Err(error) => FetchState::Failure(error),
                };
                true
            }
            FetchAction::Cancel(ticket) => {
                if self.current != Some(ticket) || self.cancelled {
                    return false;
                }
                self.cancelled = true;
                true
            }
        }
    }
}
