//! A Population is a pool of candidate routes,
//! replaced wholesale by each generation's
//! selection and crossover phases.
use crate::{Route, Waypoint};

use rand::Rng;
use serde::{Deserialize, Serialize};

use std::num::NonZeroUsize;
use std::sync::Arc;

/// An ordered collection of routes.
///
/// Routes need not be unique.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Population {
    routes: Vec<Route>,
}

impl Population {
    /// Creates a population of `size` independently
    /// shuffled routes over `destinations`.
    ///
    /// # Examples
    /// ```
    /// use oxiroute::{Population, Waypoint};
    /// use std::num::NonZeroUsize;
    /// use std::sync::Arc;
    ///
    /// let depot = Arc::new(Waypoint::new(0, "Depot"));
    /// let destinations: Vec<_> = ["Bakery", "Market", "Mill"]
    ///     .iter()
    ///     .enumerate()
    ///     .map(|(i, name)| Arc::new(Waypoint::new(i + 1, *name)))
    ///     .collect();
    ///
    /// let population = Population::random(
    ///     &depot,
    ///     &destinations,
    ///     NonZeroUsize::new(20).unwrap(),
    ///     &mut rand::thread_rng(),
    /// );
    ///
    /// assert_eq!(population.len(), 20);
    /// assert!(population.iter().all(|r| r.is_tour_of(&depot, &destinations)));
    /// ```
    pub fn random<R: Rng + ?Sized>(
        depot: &Arc<Waypoint>,
        destinations: &[Arc<Waypoint>],
        size: NonZeroUsize,
        rng: &mut R,
    ) -> Population {
        (0..size.get())
            .map(|_| Route::random(depot, destinations, rng))
            .collect()
    }

    /// Returns the number of routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Returns the route at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Route> {
        self.routes.get(index)
    }

    /// Returns an iterator over all routes, in order.
    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    /// Returns all routes as a slice.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Route> {
        self.routes.iter_mut()
    }

    /// Overwrites the route at `index`, returning the old one.
    pub(crate) fn replace(&mut self, index: usize, route: Route) -> Route {
        std::mem::replace(&mut self.routes[index], route)
    }

    /// Consumes the population, returning its routes.
    pub fn into_routes(self) -> Vec<Route> {
        self.routes
    }
}

impl FromIterator<Route> for Population {
    fn from_iter<I: IntoIterator<Item = Route>>(iter: I) -> Self {
        Population {
            routes: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Route>> for Population {
    fn from(routes: Vec<Route>) -> Self {
        Population { routes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::catalog;

    #[test]
    fn replace_keeps_size() {
        let (depot, destinations) = catalog(4);
        let mut rng = crate::rng::master(Some(8));
        let mut population =
            Population::random(&depot, &destinations, NonZeroUsize::new(5).unwrap(), &mut rng);
        let newcomer = Route::random(&depot, &destinations, &mut rng);
        let old = population.replace(3, newcomer.clone());
        assert_eq!(population.len(), 5);
        assert_eq!(population.get(3), Some(&newcomer));
        assert!(old.is_tour_of(&depot, &destinations));
    }
}
