//! View routing and the hand-off of submitted data

use crate::state::FormData;
use chrono::{DateTime, Local};

/// Screens the application can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Signup,
    Success,
}

impl View {
    pub fn route(&self) -> &'static str {
        match self {
            Self::Signup => "/",
            Self::Success => "/success",
        }
    }
}

/// Receives control when the signup form submits successfully
#[cfg_attr(test, mockall::automock)]
pub trait Navigator {
    /// Switch to `view`, carrying `payload` as transient route state
    fn navigate_to(&mut self, view: View, payload: FormData);
}

/// Data handed to a view on navigation
#[derive(Debug, Clone, PartialEq)]
pub struct RouteState {
    pub payload: FormData,
    pub received_at: DateTime<Local>,
}

/// Tracks the current view and its transient route state
#[derive(Debug, Default)]
pub struct Router {
    current: View,
    state: Option<RouteState>,
}

impl Router {
    pub fn current(&self) -> View {
        self.current
    }

    pub fn state(&self) -> Option<&RouteState> {
        self.state.as_ref()
    }

    /// Return to the signup form, dropping any carried state
    pub fn reset(&mut self) {
        self.current = View::Signup;
        self.state = None;
    }
}

impl Navigator for Router {
    fn navigate_to(&mut self, view: View, payload: FormData) {
        tracing::info!("Navigating to {}", view.route());
        self.current = view;
        self.state = Some(RouteState {
            payload,
            received_at: Local::now(),
        });
    }
}
