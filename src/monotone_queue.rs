use std::{collections::VecDeque, marker::PhantomData};

/// Decides when a stored value can never again be the extremum of the window.
pub trait Dominance<T> {
    /// `back` is dominated by `new`: once `new` is in the window, `back` can not be the front anymore.
    fn dominated(back: &T, new: &T) -> bool;
}

/// Track the minimum: larger preceding values are dominated.
#[derive(Clone, Copy, Debug, Default)]
pub struct Min;

/// Track the maximum: smaller preceding values are dominated.
#[derive(Clone, Copy, Debug, Default)]
pub struct Max;

impl<T: Ord> Dominance<T> for Min {
    #[inline(always)]
    fn dominated(back: &T, new: &T) -> bool {
        back > new
    }
}

impl<T: Ord> Dominance<T> for Max {
    #[inline(always)]
    fn dominated(back: &T, new: &T) -> bool {
        back < new
    }
}

/// A queue of (value, count) runs over a sliding window.
/// No stored value is dominated by a later one, so that the extremum is always at the front.
/// When a value is pushed, the dominated preceding runs are merged into its count.
/// Counts sum to the number of elements pushed and not yet popped.
pub struct MonotoneQueue<T, D> {
    q: VecDeque<(T, usize)>,
    size: usize,
    _d: PhantomData<D>,
}

/// Tracks the minimum of the window.
pub type MinQueue<T> = MonotoneQueue<T, Min>;
/// Tracks the maximum of the window.
pub type MaxQueue<T> = MonotoneQueue<T, Max>;

impl<T, D: Dominance<T>> MonotoneQueue<T, D> {
    /// Initialize a new queue.
    pub fn new() -> Self {
        Self {
            q: VecDeque::new(),
            size: 0,
            _d: PhantomData,
        }
    }

    /// Push `value` at the back of the window.
    /// Dominated preceding runs are removed and counted towards the new run.
    pub fn push(&mut self, value: T) {
        let mut count = 1;
        while let Some(back) = self.q.back() {
            if D::dominated(&back.0, &value) {
                count += back.1;
                self.q.pop_back();
            } else {
                break;
            }
        }
        self.q.push_back((value, count));
        self.size += 1;
    }

    /// Drop the oldest element of the window.
    ///
    /// # Panics
    /// When the queue is empty. Check `size()` first.
    pub fn pop(&mut self) {
        let front = self
            .q
            .front_mut()
            .expect("pop on an empty MonotoneQueue");
        if front.1 > 1 {
            front.1 -= 1;
        } else {
            self.q.pop_front();
        }
        self.size -= 1;
    }

    /// The extremum of the elements currently in the window.
    pub fn front(&self) -> Option<&T> {
        self.q.front().map(|(value, _count)| value)
    }

    /// Number of elements in the window (not the number of runs).
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}

impl<T, D: Dominance<T>> Default for MonotoneQueue<T, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: std::fmt::Debug, D> std::fmt::Debug for MonotoneQueue<T, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MonotoneQueue")
            .field("q", &self.q)
            .field("size", &self.size)
            .finish()
    }
}
