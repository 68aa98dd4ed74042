use std::sync::mpsc::{Sender, SyncSender};

/// Answer of a sink after accepting a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// More segments are welcome
    Continue,
    /// No more segments are wanted, the run ends right away
    Stop,
}

/// Downstream consumer of the segments pushed by a splitter.
pub trait Sink<T> {
    fn accept(&mut self, segment: Vec<T>) -> Flow;
}

impl<T> Sink<T> for Vec<Vec<T>> {
    fn accept(&mut self, segment: Vec<T>) -> Flow {
        self.push(segment);
        Flow::Continue
    }
}

/// Stops as soon as the receiving side hung up.
impl<T> Sink<T> for Sender<Vec<T>> {
    fn accept(&mut self, segment: Vec<T>) -> Flow {
        match self.send(segment) {
            Ok(()) => Flow::Continue,
            Err(_) => Flow::Stop,
        }
    }
}

impl<T> Sink<T> for SyncSender<Vec<T>> {
    fn accept(&mut self, segment: Vec<T>) -> Flow {
        match self.send(segment) {
            Ok(()) => Flow::Continue,
            Err(_) => Flow::Stop,
        }
    }
}

impl<T, S> Sink<T> for &mut S
where
    S: Sink<T> + ?Sized,
{
    fn accept(&mut self, segment: Vec<T>) -> Flow {
        (**self).accept(segment)
    }
}

pub fn from_fn<T, F>(f: F) -> FromFn<F>
where
    F: FnMut(Vec<T>) -> Flow,
{
    FromFn(f)
}

pub struct FromFn<F>(F);

impl<T, F> Sink<T> for FromFn<F>
where
    F: FnMut(Vec<T>) -> Flow,
{
    #[inline]
    fn accept(&mut self, segment: Vec<T>) -> Flow {
        (self.0)(segment)
    }
}
