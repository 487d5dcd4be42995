use crate::error::Error;
use rand::Rng;

/// Fixed-capacity reservoir sample over a stream of unknown length.
///
/// Once full, each arriving item displaces a stored one with
/// probability capacity / count, so at any point the stored items are
/// a uniform sample over everything ever seen, not a sliding window.
#[derive(Debug)]
pub struct Reservoir<T> {
    capacity: usize,
    count: usize,
    items: Vec<T>,
}

impl<T: Clone> Reservoir<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            count: 0,
            items: Vec::new(),
        }
    }

    /// stored item count, at most capacity
    pub fn len(&self) -> usize {
        self.items.len()
    }
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
    /// items ever offered, including displaced and discarded ones
    pub fn count(&self) -> usize {
        self.count
    }
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// classic reservoir insertion. the eviction draw spans [0, count)
    /// with count already including this item; the arithmetic here is
    /// what makes stored items a uniform sample, so the bound is exact.
    pub fn add(&mut self, item: T, rng: &mut impl Rng) {
        self.count += 1;
        if self.items.len() < self.capacity {
            self.items.push(item);
        } else {
            let i = rng.random_range(0..self.count);
            if i < self.capacity {
                self.items[i] = item;
            }
        }
    }

    /// n items drawn without replacement from current contents
    pub fn sample(&self, n: usize, rng: &mut impl Rng) -> Result<Vec<T>, Error> {
        if self.items.len() < n {
            return Err(Error::InsufficientData {
                need: n,
                have: self.items.len(),
            });
        }
        Ok(rand::seq::index::sample(rng, self.items.len(), n)
            .iter()
            .map(|i| self.items[i].clone())
            .collect())
    }
}
