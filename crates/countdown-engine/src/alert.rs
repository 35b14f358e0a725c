use crate::Result;

/// Audible notification played once the countdown loop has ended.
///
/// `play` blocks until playback has completed.
pub trait Alert: Send {
    fn play(&mut self) -> Result<()>;
}

impl<A: Alert + ?Sized> Alert for Box<A> {
    fn play(&mut self) -> Result<()> {
        (**self).play()
    }
}
