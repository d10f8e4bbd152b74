//! Fixed-capacity territory registry.

use tracing::{debug, warn};

use crate::error::{AllocationError, LookupError, RegistrationError};
use crate::game::Territory;

/// Capacity used when the requested one is missing or not positive.
pub const DEFAULT_CAPACITY: usize = 5;

/// Turn a user-supplied capacity into a usable one.
///
/// Anything that is not a positive integer falls back to [`DEFAULT_CAPACITY`].
#[must_use]
pub fn resolve_capacity(requested: Option<i64>) -> usize {
    match requested.and_then(|n| usize::try_from(n).ok()) {
        Some(capacity) if capacity > 0 => capacity,
        _ => {
            warn!(?requested, default = DEFAULT_CAPACITY, "invalid capacity, using default");
            DEFAULT_CAPACITY
        }
    }
}

/// Ordered, append-only collection of territories with a fixed capacity.
///
/// Territories are never removed or reordered, so an index stays valid for
/// the lifetime of the registry.
#[derive(Debug, Clone)]
pub struct Registry {
    territories: Vec<Territory>,
    capacity: usize,
}

impl Registry {
    /// Reserve storage for exactly `capacity` territories.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationError`] if the storage cannot be obtained.
    pub fn allocate(capacity: usize) -> Result<Self, AllocationError> {
        let mut territories = Vec::new();
        territories
            .try_reserve_exact(capacity)
            .map_err(|_| AllocationError { requested: capacity })?;
        debug!(capacity, "registry allocated");
        Ok(Self {
            territories,
            capacity,
        })
    }

    /// Maximum number of territories.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of registered territories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.territories.len()
    }

    /// Whether nothing has been registered yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.territories.is_empty()
    }

    /// Whether every slot is taken.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.territories.len() >= self.capacity
    }

    /// Append a territory and return its index.
    ///
    /// `name` and `color` are clamped to their field widths.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::Full`] when the registry is at capacity,
    /// or [`RegistrationError::InvalidTroops`] when `troops < 1`. Nothing is
    /// stored on error.
    pub fn register(
        &mut self,
        name: &str,
        color: &str,
        troops: i64,
    ) -> Result<usize, RegistrationError> {
        if self.is_full() {
            return Err(RegistrationError::Full {
                capacity: self.capacity,
            });
        }
        let troops = match u32::try_from(troops) {
            Ok(t) if t >= 1 => t,
            _ => return Err(RegistrationError::InvalidTroops(troops)),
        };

        let territory = Territory::new(name, color, troops);
        debug!(
            name = %territory.name,
            color = %territory.owner_color,
            troops,
            "territory registered"
        );
        self.territories.push(territory);
        Ok(self.territories.len() - 1)
    }

    /// All territories in registration order.
    #[must_use]
    pub fn list(&self) -> &[Territory] {
        &self.territories
    }

    /// Get a territory by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Territory> {
        self.territories.get(index)
    }

    /// Get a mutable reference to a territory.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::OutOfRange`] if `index` is not registered.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut Territory, LookupError> {
        let len = self.territories.len();
        self.territories
            .get_mut(index)
            .ok_or(LookupError::OutOfRange { index, len })
    }

    /// Get two distinct territories mutably, in argument order.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::OutOfRange`] for the first unregistered index,
    /// or [`LookupError::SameIndex`] if both indices are equal.
    pub fn get_pair_mut(
        &mut self,
        first: usize,
        second: usize,
    ) -> Result<(&mut Territory, &mut Territory), LookupError> {
        self.get_mut(first)?;
        self.get_mut(second)?;
        if first == second {
            return Err(LookupError::SameIndex { index: first });
        }
        if first < second {
            let (head, tail) = self.territories.split_at_mut(second);
            Ok((&mut head[first], &mut tail[0]))
        } else {
            let (head, tail) = self.territories.split_at_mut(first);
            Ok((&mut tail[0], &mut head[second]))
        }
    }
}
