// Session core: one in-memory state record per browser-tab session.
// All mutation goes through SessionStore's operations. The pure reducer in
// reducer.rs is the only thing that produces a new state; side effects
// (title observer, error auto-clear timer) stay outside it.

pub mod gateway;
pub mod reducer;
pub mod registry;
pub mod state;
pub mod store;

pub use gateway::{SignupGateway, SimulatedSignupGateway};
pub use registry::SessionRegistry;
pub use state::SessionState;
pub use store::{SessionStore, SignupInFlight};
