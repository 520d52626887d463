//! Reader, Writer and State effect monads.
//!
//! Each type carries its own `pure`, `map`, `bind`, `then` and `map2`
//! methods; there is no shared functor or monad trait.
//!
//! - [`Reader`]: computations over a read-only environment
//! - [`Writer`]: a value together with a monoidal log
//! - [`State`]: computations threading a state value
//!
//! `Reader` and `State` are cheap to clone and are not `Send`.

mod reader;
mod state;
mod writer;

pub use reader::Reader;
pub use state::State;
pub use writer::Writer;
