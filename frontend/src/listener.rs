use log::warn;
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

#[derive(Debug, Error)]
pub enum ListenerError {
    #[error("failed to listen for {event} events: {reason}")]
    Add { event: &'static str, reason: String },
    #[error("failed to remove {event} listener: {reason}")]
    Remove { event: &'static str, reason: String },
}

/// Something that accepts named event listeners and can later drop them again.
pub trait ListenerTarget {
    type Listener;

    fn add(&self, event: &'static str, handler: Box<dyn Fn()>) -> Result<Self::Listener, ListenerError>;

    fn remove(&self, event: &'static str, listener: &Self::Listener) -> Result<(), ListenerError>;
}

impl ListenerTarget for Window {
    type Listener = Closure<dyn Fn()>;

    fn add(&self, event: &'static str, handler: Box<dyn Fn()>) -> Result<Self::Listener, ListenerError> {
        let callback = Closure::wrap(handler);
        self.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|err| ListenerError::Add {
                event,
                reason: format!("{:?}", err),
            })?;
        Ok(callback)
    }

    fn remove(&self, event: &'static str, listener: &Self::Listener) -> Result<(), ListenerError> {
        self.remove_event_listener_with_callback(event, listener.as_ref().unchecked_ref())
            .map_err(|err| ListenerError::Remove {
                event,
                reason: format!("{:?}", err),
            })
    }
}

/// A registered listener. Removed exactly once, when the subscription is dropped.
pub struct Subscription<T: ListenerTarget> {
    target: T,
    event: &'static str,
    listener: T::Listener,
}

impl<T: ListenerTarget> Subscription<T> {
    pub fn new<F>(target: T, event: &'static str, handler: F) -> Result<Self, ListenerError>
    where
        F: Fn() + 'static,
    {
        let listener = target.add(event, Box::new(handler))?;
        Ok(Self {
            target,
            event,
            listener,
        })
    }
}

impl<T: ListenerTarget> Drop for Subscription<T> {
    fn drop(&mut self) {
        if let Err(err) = self.target.remove(self.event, &self.listener) {
            warn!("{}", err);
        }
    }
}
