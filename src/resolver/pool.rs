// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

use crate::{Error, Result};

/// Pool of resolver endpoints to pick from uniformly at random.
///
/// The endpoints never change after construction; only the random number generator is guarded by a lock, so picking
/// is a short critical section and never includes any I/O.
#[derive(Debug)]
pub struct ResolverPool {
    endpoints: Vec<String>,
    rng: Mutex<StdRng>,
}

impl ResolverPool {
    /// Creates a pool seeded from the operating system's randomness source.
    pub fn new<S: Into<String>, I: IntoIterator<Item = S>>(endpoints: I) -> Result<Self> {
        ResolverPool::with_rng(endpoints, StdRng::from_os_rng())
    }

    /// Creates a pool with a deterministic sequence of picks.
    pub fn with_seed<S: Into<String>, I: IntoIterator<Item = S>>(endpoints: I, seed: u64) -> Result<Self> {
        ResolverPool::with_rng(endpoints, StdRng::seed_from_u64(seed))
    }

    fn with_rng<S: Into<String>, I: IntoIterator<Item = S>>(endpoints: I, rng: StdRng) -> Result<Self> {
        let endpoints: Vec<String> = endpoints.into_iter().map(Into::into).collect();
        if endpoints.is_empty() {
            return Err(Error::EmptyResolverPool);
        }

        Ok(ResolverPool {
            endpoints,
            rng: Mutex::new(rng),
        })
    }

    /// Picks one endpoint; every pick is independent of all previous ones.
    pub fn pick(&self) -> Result<&str> {
        if self.endpoints.is_empty() {
            return Err(Error::EmptyResolverPool);
        }
        let index = {
            // A panic while holding the lock cannot leave the generator in an unusable state
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            rng.random_range(0..self.endpoints.len())
        };
        let endpoint = &self.endpoints[index];
        trace!("Picked resolver endpoint '{}'.", endpoint);

        Ok(endpoint)
    }

    pub fn endpoints(&self) -> &[String] {
        &self.endpoints
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}
