//! Text loading of street networks and district maps.
//!
//! - [`parse_undirected`] / [`load_undirected`] — `#Sommets` + `#Aretes`
//! - [`parse_directed`] / [`load_directed`] — `#Sommets` + `#Arcs`
//! - [`parse_with_quantities`] / [`load_with_quantities`] — `id;quantity` vertex rows

mod loader;

pub use loader::{
    load_directed, load_undirected, load_with_quantities, parse_directed, parse_undirected,
    parse_with_quantities,
};
