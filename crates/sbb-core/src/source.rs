// crates/sbb-core/src/source.rs

use core::cell::Cell;

/// The monitored reading. The buffer never owns the underlying value; it
/// reads through this trait on every `update`.
///
/// Hand the buffer a `&Cell<f32>` (or any other borrow) to keep the value
/// owned by the surrounding firmware loop; the borrow checker then enforces
/// that the reading outlives the buffer.
pub trait Source {
    fn read(&self) -> f32;
}

impl Source for Cell<f32> {
    #[inline]
    fn read(&self) -> f32 {
        self.get()
    }
}

impl<S: Source + ?Sized> Source for &S {
    #[inline]
    fn read(&self) -> f32 {
        (**self).read()
    }
}

/// Adapter for a closure, e.g. a driver read that is cheap to poll.
#[derive(Clone, Copy)]
pub struct FnSource<F>(pub F);

impl<F: Fn() -> f32> Source for FnSource<F> {
    #[inline]
    fn read(&self) -> f32 {
        (self.0)()
    }
}
