//! Collection adapter module
//!
//! The paginator never owns or fetches data itself. Anything that can report
//! how many items it holds and hand back a contiguous run of them can be
//! paginated by implementing [`Pageable`].
//!
//! # Provided adapters
//!
//! - `Vec<T>`, `[T]` and `VecDeque<T>` for `T: Clone`
//! - Forwarding impls for `&P`, `Box<P>`, `Rc<P>` and `Arc<P>`, so a caller can
//!   keep ownership of the source and lend it to a paginator

mod adapters;
mod types;

pub use types::Pageable;

#[cfg(test)]
mod tests;
