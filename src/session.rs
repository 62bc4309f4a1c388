//! Drives a rotation through its lifecycle. A [Session] is opened once the view is ready to
//! receive output; each subsequent [Event] supersedes the previous state and the view is told
//! about the new rotation.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::engine::Engine;
use crate::schedule::Rotation;
use crate::state::{Event, State, StateError};

/// Receives rotations as they are computed.
pub trait View {
    /// Called exactly once, when the session is opened.
    fn ready(&mut self, state: &State, rotation: &Rotation);

    /// Called after every successfully applied event.
    fn update(&mut self, state: &State, rotation: &Rotation);
}

pub struct Session<V: View> {
    engine: Engine,
    state: State,
    today: NaiveDate,
    view: V,
}
impl<V: View> Session<V> {
    /// Restores the state persisted in `query` and hands the first rotation to the view.
    /// `today` anchors rotations that start [Now](crate::schedule::RotationStart::Now) for the
    /// lifetime of the session.
    pub fn open(engine: Engine, query: &str, today: NaiveDate, mut view: V) -> Result<Self, StateError> {
        let state = State::from_query(query)?;
        let rotation = engine.rotation(&state, today)?;
        info!(
            "opened rotation of {} items, randomizer {} of {}",
            state.items().len(),
            state.randomizer(),
            state.max_randomizer()
        );
        view.ready(&state, &rotation);
        Ok(Self {
            engine,
            state,
            today,
            view,
        })
    }

    /// Applies `event` and pushes the resulting rotation to the view. On error the prior state
    /// is kept and the view is not notified.
    pub fn dispatch(&mut self, event: Event) -> Result<(), StateError> {
        debug!("dispatching {event:?}");
        let state = self.state.apply(event)?;
        let rotation = self.engine.rotation(&state, self.today)?;
        self.state = state;
        self.view.update(&self.state, &rotation);
        Ok(())
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// The location to record in history for the current state, as a `?query` suffix.
    pub fn location(&self) -> String {
        format!("?{}", self.state.to_query(self.today))
    }

    pub fn into_view(self) -> V {
        self.view
    }
}
