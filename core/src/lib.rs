//! Session core shared by the SampleApp `client` and `server` crates.
//!
//! This crate owns the authentication state machine, the identity-provider
//! seam it drives, the navigation gate policy, request header construction,
//! and the todo resource operations. Nothing here touches the browser or a
//! socket directly: identity and HTTP are reached through traits so the whole
//! flow runs natively under test with fakes.
//!
//! The todo wire types (`Todo`, `NewTodo`) also live here so the server and
//! the client serialize the same shapes.

pub mod gate;
pub mod headers;
pub mod identity;
pub mod state;
pub mod store;
pub mod todos;
pub mod transport;

pub use gate::{GateDecision, LOGIN_PATH};
pub use identity::{IdentityError, IdentityProvider, Session};
pub use state::AuthState;
pub use store::{AuthError, AuthStore, Subscription};
pub use todos::{NewTodo, ResourceError, Todo, TodoResource};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method};
