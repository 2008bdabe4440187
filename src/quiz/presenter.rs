//! Tracks the two auxiliary fetches (portrait, oracle) for the result view.
//!
//! Each fetch is an explicit state instead of a pair of loading/error flags,
//! so a result can never be "loading and failed" at the same time. A
//! generation counter guards against a slow response landing after the user
//! has already restarted the quiz: the response is simply dropped.

/// Lifecycle of one asynchronous fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum Fetch<T> {
    #[default]
    Idle,
    Loading,
    Succeeded(T),
    Failed(String),
}

impl<T> Fetch<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            Fetch::Succeeded(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Fetch::Failed(_))
    }
}

/// Fetch state for everything shown alongside one quiz result.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ResultPresenter {
    epoch: u64,
    pub portrait: Fetch<String>,
    pub oracle: Fetch<String>,
}

impl ResultPresenter {
    /// Marks the portrait as loading and hands out the epoch the eventual
    /// completion must present.
    pub fn begin_portrait(&mut self) -> u64 {
        self.portrait = Fetch::Loading;
        return self.epoch;
    }

    /// Applies a finished portrait lookup. Returns false (and changes
    /// nothing) when the session was reset while the lookup was in flight.
    pub fn complete_portrait(&mut self, epoch: u64, outcome: Option<String>, reason: &str) -> bool {
        if epoch != self.epoch {
            log::debug!("dropping stale portrait result from epoch {}", epoch);
            return false;
        }
        self.portrait = match outcome {
            Some(path) => Fetch::Succeeded(path),
            None => Fetch::Failed(reason.to_string()),
        };
        return true;
    }

    pub fn begin_oracle(&mut self) -> u64 {
        self.oracle = Fetch::Loading;
        return self.epoch;
    }

    pub fn complete_oracle(&mut self, epoch: u64, text: String) -> bool {
        if epoch != self.epoch {
            log::debug!("dropping stale oracle result from epoch {}", epoch);
            return false;
        }
        self.oracle = Fetch::Succeeded(text);
        return true;
    }

    /// Records an oracle request that ended in an error instead of text, so
    /// the fetch never stays Loading with nothing in flight.
    pub fn fail_oracle(&mut self, epoch: u64, reason: &str) -> bool {
        if epoch != self.epoch {
            log::debug!("dropping stale oracle failure from epoch {}", epoch);
            return false;
        }
        self.oracle = Fetch::Failed(reason.to_string());
        return true;
    }

    /// Clears both fetches and invalidates any outstanding completions.
    pub fn reset(&mut self) {
        self.epoch += 1;
        self.portrait = Fetch::Idle;
        self.oracle = Fetch::Idle;
    }
}
