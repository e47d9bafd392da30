pub mod gate;
pub mod response;
pub mod session;

pub use gate::auth_gate_middleware;
pub use response::{ApiResponse, ApiResult};
pub use session::VerifiedSession;
