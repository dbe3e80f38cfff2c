use std::sync::{Arc, PoisonError, RwLock};

use super::ColorState;

/// Read accessor for the corner colors.
///
/// The renderer queries this once per frame and never caches the result, so
/// whatever the host wrote last is what gets drawn.
pub trait ColorSource {
    fn current(&self) -> ColorState;
}

/// A fixed palette.
impl ColorSource for ColorState {
    fn current(&self) -> ColorState {
        *self
    }
}

/// A callback reading host state.
impl<F> ColorSource for F
where
    F: Fn() -> ColorState,
{
    fn current(&self) -> ColorState {
        self()
    }
}

/// Colors shared between the host (writer) and the renderer (reader).
///
/// Cloning yields another handle to the same state. Reads and writes go through
/// an `RwLock`, so the host may edit from any thread; the renderer takes one
/// consistent snapshot per frame.
#[derive(Debug, Clone, Default)]
pub struct SharedColors {
    inner: Arc<RwLock<ColorState>>,
}

impl SharedColors {
    pub fn new(initial: ColorState) -> Self {
        Self {
            inner: Arc::new(RwLock::new(initial)),
        }
    }

    /// Copies the current state.
    ///
    /// A writer that panicked mid-update cannot leave a torn `ColorState` (every
    /// field is plain data), so a poisoned lock is read through.
    pub fn snapshot(&self) -> ColorState {
        *self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `f` with exclusive access and returns its result.
    pub fn update<R>(&self, f: impl FnOnce(&mut ColorState) -> R) -> R {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    pub fn replace(&self, state: ColorState) {
        self.update(|s| *s = state);
    }
}

impl ColorSource for SharedColors {
    fn current(&self) -> ColorState {
        self.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::color::{Channel, Corner, Rgb};

    #[test]
    fn static_state_is_its_own_source() {
        let s = ColorState::default();
        assert_eq!(s.current(), s);
    }

    #[test]
    fn closure_is_queried_every_time() {
        let calls = Cell::new(0);
        let source = || {
            calls.set(calls.get() + 1);
            ColorState::default()
        };
        source.current();
        source.current();
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn shared_handles_observe_writes() {
        let host = SharedColors::default();
        let renderer_view = host.clone();

        host.update(|s| s.set(Corner::BottomRight, Channel::Red, 0.5));
        assert!((renderer_view.current().bottom_right.r - 0.5).abs() < 1e-6);

        host.replace(ColorState::new(Rgb::blue(), Rgb::blue(), Rgb::blue()));
        assert_eq!(renderer_view.current().top, Rgb::blue());
    }

    #[test]
    fn shared_colors_accept_writes_from_other_threads() {
        let host = SharedColors::default();
        let writer = host.clone();

        std::thread::spawn(move || {
            writer.update(|s| s.top = Rgb::green());
        })
        .join()
        .expect("writer thread");

        assert_eq!(host.current().top, Rgb::green());
    }

    #[test]
    fn poisoned_lock_is_still_readable() {
        let host = SharedColors::default();
        let writer = host.clone();

        let _ = std::thread::spawn(move || {
            writer.update(|s| {
                s.top = Rgb::blue();
                panic!("writer died");
            });
        })
        .join();

        assert_eq!(host.current().top, Rgb::blue());
    }
}
