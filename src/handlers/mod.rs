pub mod response;
pub mod todo;

pub use response::{build_error_response, build_ok_response, build_response, ApiResponse};
pub use todo::{ApiRequest, TodoHandler};
