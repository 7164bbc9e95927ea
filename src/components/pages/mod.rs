//! Page components, one per route

pub mod create_function;
pub mod function_detail;
pub mod functions;
pub mod invocations;

pub use create_function::CreateFunction;
pub use function_detail::FunctionDetail;
pub use functions::Functions;
pub use invocations::Invocations;
