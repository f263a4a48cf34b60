use std::any::Any;
use std::marker::PhantomData;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::mpsc::{sync_channel, SyncSender};
use std::sync::Arc;

type PanicEventFn<TEvent> = Arc<dyn Fn(String) -> TEvent + Send + Sync>;

/// Elm style runner: a pure `transition` folds events into state, `render`
/// observes every state, and effects run on their own threads and report
/// back through one bounded event channel. The loop owning the receiver is the
/// only place state is written.
pub struct StateMachine<TState, TEvent, TEffect, T, R, E, D>
where
    T: Fn(TState, TEvent) -> (TState, Vec<TEffect>) + Send + Sync,
    R: Fn(&TState) + Send + Sync,
    E: Fn(TEffect, SyncSender<TEvent>) + Send + Sync,
    D: Fn(&TState) -> bool + Send + Sync,
{
    pub init: (TState, Vec<TEffect>),
    pub transition_fn: Arc<T>,
    pub render_fn: Arc<R>,
    pub run_effect_fn: Arc<E>,
    pub is_done_fn: Arc<D>,
    pub event_capacity: usize,
    pub panic_event_fn: Option<PanicEventFn<TEvent>>,
    _event: PhantomData<TEvent>,
}

impl<TState, TEvent, TEffect, T, R, E, D> StateMachine<TState, TEvent, TEffect, T, R, E, D>
where
    TState: Clone + Send + 'static,
    TEvent: Send + 'static,
    TEffect: Clone + Send + 'static,
    T: Fn(TState, TEvent) -> (TState, Vec<TEffect>) + Send + Sync + 'static,
    R: Fn(&TState) + Send + Sync + 'static,
    E: Fn(TEffect, SyncSender<TEvent>) + Send + Sync + 'static,
    D: Fn(&TState) -> bool + Send + Sync + 'static,
{
    pub fn new(
        init: (TState, Vec<TEffect>),
        transition_fn: T,
        render_fn: R,
        run_effect_fn: E,
        is_done_fn: D,
    ) -> Self {
        Self {
            init,
            transition_fn: Arc::new(transition_fn),
            render_fn: Arc::new(render_fn),
            run_effect_fn: Arc::new(run_effect_fn),
            is_done_fn: Arc::new(is_done_fn),
            event_capacity: 1,
            panic_event_fn: None,
            _event: PhantomData,
        }
    }

    /// Turns a panicking effect into an event so the loop is never left
    /// waiting on an effect that will not report back.
    pub fn on_effect_panic(
        mut self,
        panic_event_fn: impl Fn(String) -> TEvent + Send + Sync + 'static,
    ) -> Self {
        self.panic_event_fn = Some(Arc::new(panic_event_fn));
        self
    }

    /// Runs until `is_done_fn` accepts a state and returns that state.
    pub fn run(&self) -> Result<TState, Box<dyn std::error::Error + Send + Sync>> {
        let (event_sender, event_receiver) = sync_channel(self.event_capacity);
        let (mut state, effects) = self.init.clone();

        (self.render_fn)(&state);
        self.spawn_effects(effects, &event_sender);

        while !(self.is_done_fn)(&state) {
            let event = event_receiver.recv()?;
            let (new_state, new_effects) = (self.transition_fn)(state, event);
            state = new_state;

            (self.render_fn)(&state);
            self.spawn_effects(new_effects, &event_sender);
        }

        Ok(state)
    }

    fn spawn_effects(&self, effects: Vec<TEffect>, event_sender: &SyncSender<TEvent>) {
        for effect in effects {
            let effect_sender = event_sender.clone();
            let run_effect_fn = Arc::clone(&self.run_effect_fn);
            let panic_event_fn = self.panic_event_fn.clone();
            std::thread::spawn(move || {
                let sender = effect_sender.clone();
                let outcome = catch_unwind(AssertUnwindSafe(|| run_effect_fn(effect, sender)));
                if let (Err(payload), Some(panic_event_fn)) = (outcome, panic_event_fn) {
                    let _ = effect_sender.send(panic_event_fn(panic_message(payload.as_ref())));
                }
            });
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "effect panicked".to_string()
    }
}
