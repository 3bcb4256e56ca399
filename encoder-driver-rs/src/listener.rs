//! Event sink for [`EncoderPoller`](crate::EncoderPoller).

use core::convert::Infallible;

/// Receives encoder events synchronously from within
/// [`EncoderPoller::update()`](crate::EncoderPoller::update).
///
/// Within one poll, [`on_change`](Self::on_change) is always called before
/// [`on_press`](Self::on_press). Both methods default to doing nothing, so an
/// implementation only overrides the events it cares about.
pub trait EncoderListener {
    /// Error returned from a handler. Propagated out of `update()` as
    /// [`EncoderError::Listener`](crate::EncoderError::Listener).
    type Error;

    /// The encoder moved by `delta` detents since the previous poll.
    fn on_change(&mut self, delta: i32) -> Result<(), Self::Error> {
        let _ = delta;
        Ok(())
    }

    /// The button was pressed (`true`) or released (`false`).
    fn on_press(&mut self, held: bool) -> Result<(), Self::Error> {
        let _ = held;
        Ok(())
    }
}

/// No listener: events are only reflected in the poller's cached state.
impl EncoderListener for () {
    type Error = Infallible;
}

impl<T: EncoderListener + ?Sized> EncoderListener for &mut T {
    type Error = T::Error;

    fn on_change(&mut self, delta: i32) -> Result<(), Self::Error> {
        (**self).on_change(delta)
    }

    fn on_press(&mut self, held: bool) -> Result<(), Self::Error> {
        (**self).on_press(held)
    }
}
