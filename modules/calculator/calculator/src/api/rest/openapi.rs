//! OpenAPI document for the calculator REST surface.

use utoipa::OpenApi;

use super::dto::{
    AverageRequest, AverageResponse, BinaryOperationRequest, BinaryOperationResponse,
    FactorialResponse, HistoryResponse, MessageResponse, PowerRequest, PowerResponse,
    SquareRootResponse, UnaryOperationRequest,
};
use super::handlers;
use super::problem::Problem;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Calculator API",
        description = "Arithmetic operations with a shared in-memory history"
    ),
    paths(
        handlers::add,
        handlers::subtract,
        handlers::multiply,
        handlers::divide,
        handlers::power,
        handlers::square_root,
        handlers::factorial,
        handlers::average,
        handlers::get_history,
        handlers::clear_history,
    ),
    components(schemas(
        BinaryOperationRequest,
        PowerRequest,
        UnaryOperationRequest,
        AverageRequest,
        BinaryOperationResponse,
        PowerResponse,
        SquareRootResponse,
        FactorialResponse,
        AverageResponse,
        HistoryResponse,
        MessageResponse,
        calculator_sdk::Number,
        Problem,
    )),
    tags(
        (name = "calculator", description = "Arithmetic operations"),
        (name = "history", description = "Calculation history")
    )
)]
pub struct CalculatorApiDoc;
