//! Lazy enumeration of scattering routes.
//!
//! A route of degree `d` is a sequence of `d` bounce entities with no
//! two consecutive entries equal. Over a pool of `p` entities there are
//! exactly `p · (p − 1)^(d − 1)` of them.
//!
//! Routes are generated by a mixed-radix counter instead of filtering a
//! Cartesian power: digit 0 picks any pool member, every later digit
//! picks one of the `p − 1` members that differ from its predecessor.
//! Nothing is materialised, and every step yields a valid route.

use ricochet_core::EntityId;
use smallvec::SmallVec;

/// One scattering path, in visiting order.
pub type Route = SmallVec<[EntityId; 4]>;

/// Number of routes of `degree` hops over a pool of `pool` entities, or
/// `None` if it does not fit in a `u64`.
pub fn route_count(pool: usize, degree: usize) -> Option<u64> {
    if degree == 0 || pool == 0 {
        return Some(0);
    }
    let p = u64::try_from(pool).ok()?;
    let exp = u32::try_from(degree - 1).ok()?;
    (p - 1).checked_pow(exp)?.checked_mul(p)
}

/// The bounce-entity pool routes are drawn from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteEnumerator {
    pool: Vec<EntityId>,
}

impl RouteEnumerator {
    /// Enumerator over `pool`, which must not contain duplicates.
    pub fn new(pool: Vec<EntityId>) -> Self {
        Self { pool }
    }

    /// Add an entity to the pool. The caller guarantees it is not
    /// already present.
    pub(crate) fn push(&mut self, id: EntityId) {
        self.pool.push(id);
    }

    /// The candidate pool, in registration order.
    pub fn pool(&self) -> &[EntityId] {
        &self.pool
    }

    /// Number of routes of `degree` hops.
    pub fn count(&self, degree: usize) -> Option<u64> {
        route_count(self.pool.len(), degree)
    }

    /// Number of routes of every degree in `1..=max_degree`.
    pub fn count_up_to(&self, max_degree: usize) -> Option<u64> {
        (1..=max_degree).try_fold(0u64, |acc, d| acc.checked_add(self.count(d)?))
    }

    /// Number of routes in `1..=max_degree` whose first hop is not
    /// `source`. When `source` is in the pool this drops
    /// `(p − 1)^(d − 1)` routes per degree, leaving `(p − 1)^d`.
    pub fn count_up_to_from(&self, source: EntityId, max_degree: usize) -> Option<u64> {
        if !self.pool.contains(&source) {
            return self.count_up_to(max_degree);
        }
        let rest = u64::try_from(self.pool.len() - 1).ok()?;
        (1..=max_degree).try_fold(0u64, |acc, d| {
            acc.checked_add(rest.checked_pow(u32::try_from(d).ok()?)?)
        })
    }

    /// Lazily produce every route of `degree` hops.
    ///
    /// Calling this again restarts the sequence from the beginning.
    pub fn routes(&self, degree: usize) -> Routes<'_> {
        Routes {
            pool: &self.pool,
            digits: vec![0; degree],
            remaining: self.count(degree).unwrap_or(u64::MAX),
        }
    }
}

/// Iterator over the routes of one degree. See [`RouteEnumerator::routes`].
#[derive(Clone, Debug)]
pub struct Routes<'a> {
    pool: &'a [EntityId],
    digits: Vec<usize>,
    remaining: u64,
}

impl Routes<'_> {
    fn current(&self) -> Route {
        let mut route = Route::with_capacity(self.digits.len());
        let mut prev = usize::MAX;
        for &d in &self.digits {
            let actual = if prev == usize::MAX || d < prev { d } else { d + 1 };
            route.push(self.pool[actual]);
            prev = actual;
        }
        route
    }

    fn advance(&mut self) {
        let p = self.pool.len();
        for i in (0..self.digits.len()).rev() {
            let radix = if i == 0 { p } else { p - 1 };
            self.digits[i] += 1;
            if self.digits[i] < radix {
                return;
            }
            self.digits[i] = 0;
        }
    }
}

impl Iterator for Routes<'_> {
    type Item = Route;

    fn next(&mut self) -> Option<Route> {
        if self.remaining == 0 {
            return None;
        }
        let route = self.current();
        self.remaining -= 1;
        if self.remaining > 0 {
            self.advance();
        }
        Some(route)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}
