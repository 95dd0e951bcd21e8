//! REST handlers for calculator module

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::{Extension, Json};
use calculator_sdk::Number;
use serde_json::Value;

use super::context::RequestContext;
use super::dto::{
    AverageRequest, AverageResponse, BinaryOperationRequest, BinaryOperationResponse,
    FactorialResponse, HistoryResponse, MessageResponse, PowerRequest, PowerResponse,
    SquareRootResponse, UnaryOperationRequest,
};
use super::input::{
    InputError, object_body, parse_integer, parse_number, parse_numbers, require,
};
use super::problem::Problem;
use crate::domain::Service;

pub type CalculatorResult<T> = Result<Json<T>, Problem>;

type Body = Result<Json<Value>, JsonRejection>;

const MISSING_A_B: &str = "Missing required parameters: a and b";
const MISSING_BASE_EXPONENT: &str = "Missing required parameters: base and exponent";
const MISSING_NUMBER: &str = "Missing required parameter: number";
const MISSING_NUMBERS: &str = "Missing required parameter: numbers";

fn reject(ctx: &RequestContext, problem: impl Into<Problem>) -> Problem {
    let problem = problem.into().with_request_context(ctx);
    tracing::debug!(
        path = %problem.instance,
        code = %problem.code,
        detail = %problem.detail,
        "request rejected"
    );
    problem
}

fn binary_operands(body: Body) -> Result<(Number, Number), InputError> {
    let req: BinaryOperationRequest = object_body(body, MISSING_A_B)?;
    let a = require(req.a, MISSING_A_B)?;
    let b = require(req.b, MISSING_A_B)?;
    Ok((parse_number("a", &a)?, parse_number("b", &b)?))
}

fn unary_value(body: Body) -> Result<Value, InputError> {
    let req: UnaryOperationRequest = object_body(body, MISSING_NUMBER)?;
    require(req.number, MISSING_NUMBER)
}

/// POST /api/calculate/add
#[utoipa::path(
    post,
    path = "/api/calculate/add",
    tag = "calculator",
    request_body = BinaryOperationRequest,
    responses(
        (status = 200, description = "Sum of a and b", body = BinaryOperationResponse),
        (status = 400, description = "Missing or malformed operands", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn add(
    ctx: RequestContext,
    Extension(service): Extension<Arc<Service>>,
    body: Body,
) -> CalculatorResult<BinaryOperationResponse> {
    let (a, b) = binary_operands(body).map_err(|e| reject(&ctx, e))?;
    let result = service.add(a, b);
    Ok(Json(BinaryOperationResponse::new("add", a, b, result)))
}

/// POST /api/calculate/subtract
#[utoipa::path(
    post,
    path = "/api/calculate/subtract",
    tag = "calculator",
    request_body = BinaryOperationRequest,
    responses(
        (status = 200, description = "Difference a - b", body = BinaryOperationResponse),
        (status = 400, description = "Missing or malformed operands", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn subtract(
    ctx: RequestContext,
    Extension(service): Extension<Arc<Service>>,
    body: Body,
) -> CalculatorResult<BinaryOperationResponse> {
    let (a, b) = binary_operands(body).map_err(|e| reject(&ctx, e))?;
    let result = service.subtract(a, b);
    Ok(Json(BinaryOperationResponse::new("subtract", a, b, result)))
}

/// POST /api/calculate/multiply
#[utoipa::path(
    post,
    path = "/api/calculate/multiply",
    tag = "calculator",
    request_body = BinaryOperationRequest,
    responses(
        (status = 200, description = "Product of a and b", body = BinaryOperationResponse),
        (status = 400, description = "Missing or malformed operands", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn multiply(
    ctx: RequestContext,
    Extension(service): Extension<Arc<Service>>,
    body: Body,
) -> CalculatorResult<BinaryOperationResponse> {
    let (a, b) = binary_operands(body).map_err(|e| reject(&ctx, e))?;
    let result = service.multiply(a, b);
    Ok(Json(BinaryOperationResponse::new("multiply", a, b, result)))
}

/// POST /api/calculate/divide
#[utoipa::path(
    post,
    path = "/api/calculate/divide",
    tag = "calculator",
    request_body = BinaryOperationRequest,
    responses(
        (status = 200, description = "Quotient a / b as a float", body = BinaryOperationResponse),
        (status = 400, description = "Division by zero, missing or malformed operands", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn divide(
    ctx: RequestContext,
    Extension(service): Extension<Arc<Service>>,
    body: Body,
) -> CalculatorResult<BinaryOperationResponse> {
    let (a, b) = binary_operands(body).map_err(|e| reject(&ctx, e))?;
    let result = service.divide(a, b).map_err(|e| reject(&ctx, e))?;
    Ok(Json(BinaryOperationResponse::new(
        "divide",
        a,
        b,
        Number::Float(result),
    )))
}

/// POST /api/calculate/power
#[utoipa::path(
    post,
    path = "/api/calculate/power",
    tag = "calculator",
    request_body = PowerRequest,
    responses(
        (status = 200, description = "base raised to exponent", body = PowerResponse),
        (status = 400, description = "Missing or malformed operands", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn power(
    ctx: RequestContext,
    Extension(service): Extension<Arc<Service>>,
    body: Body,
) -> CalculatorResult<PowerResponse> {
    let operands = || -> Result<(Number, Number), InputError> {
        let req: PowerRequest = object_body(body, MISSING_BASE_EXPONENT)?;
        let base = require(req.base, MISSING_BASE_EXPONENT)?;
        let exponent = require(req.exponent, MISSING_BASE_EXPONENT)?;
        Ok((
            parse_number("base", &base)?,
            parse_number("exponent", &exponent)?,
        ))
    };
    let (base, exponent) = operands().map_err(|e| reject(&ctx, e))?;
    let result = service.power(base, exponent);
    Ok(Json(PowerResponse {
        operation: "power".to_owned(),
        base,
        exponent,
        result,
    }))
}

/// POST /api/calculate/sqrt
#[utoipa::path(
    post,
    path = "/api/calculate/sqrt",
    tag = "calculator",
    request_body = UnaryOperationRequest,
    responses(
        (status = 200, description = "Square root as a float", body = SquareRootResponse),
        (status = 400, description = "Negative, missing or malformed number", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn square_root(
    ctx: RequestContext,
    Extension(service): Extension<Arc<Service>>,
    body: Body,
) -> CalculatorResult<SquareRootResponse> {
    let number = unary_value(body)
        .and_then(|v| parse_number("number", &v))
        .map_err(|e| reject(&ctx, e))?;
    let result = service.square_root(number).map_err(|e| reject(&ctx, e))?;
    Ok(Json(SquareRootResponse {
        operation: "square_root".to_owned(),
        number,
        result,
    }))
}

/// POST /api/calculate/factorial
#[utoipa::path(
    post,
    path = "/api/calculate/factorial",
    tag = "calculator",
    request_body = UnaryOperationRequest,
    responses(
        (status = 200, description = "Exact factorial", body = FactorialResponse),
        (status = 400, description = "Negative, too large, missing or non-integer number", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn factorial(
    ctx: RequestContext,
    Extension(service): Extension<Arc<Service>>,
    body: Body,
) -> CalculatorResult<FactorialResponse> {
    let number = unary_value(body)
        .and_then(|v| parse_integer("number", &v))
        .map_err(|e| reject(&ctx, e))?;
    let result = service.factorial(number).map_err(|e| reject(&ctx, e))?;
    Ok(Json(FactorialResponse {
        operation: "factorial".to_owned(),
        number,
        result,
    }))
}

/// POST /api/calculate/average
#[utoipa::path(
    post,
    path = "/api/calculate/average",
    tag = "calculator",
    request_body = AverageRequest,
    responses(
        (status = 200, description = "Arithmetic mean as a float", body = AverageResponse),
        (status = 400, description = "Empty, missing or malformed list", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn average(
    ctx: RequestContext,
    Extension(service): Extension<Arc<Service>>,
    body: Body,
) -> CalculatorResult<AverageResponse> {
    let numbers = || -> Result<Vec<Number>, InputError> {
        let req: AverageRequest = object_body(body, MISSING_NUMBERS)?;
        let numbers = require(req.numbers, MISSING_NUMBERS)?;
        parse_numbers("numbers", &numbers)
    };
    let numbers = numbers().map_err(|e| reject(&ctx, e))?;
    let result = service.average(&numbers).map_err(|e| reject(&ctx, e))?;
    Ok(Json(AverageResponse {
        operation: "average".to_owned(),
        numbers,
        result,
    }))
}

/// GET /api/history
#[utoipa::path(
    get,
    path = "/api/history",
    tag = "history",
    responses(
        (status = 200, description = "All records, oldest first", body = HistoryResponse)
    )
)]
pub async fn get_history(
    Extension(service): Extension<Arc<Service>>,
) -> CalculatorResult<HistoryResponse> {
    let history = service.history().into_iter().map(String::from).collect();
    Ok(Json(HistoryResponse { history }))
}

/// DELETE /api/history
#[utoipa::path(
    delete,
    path = "/api/history",
    tag = "history",
    responses(
        (status = 200, description = "History emptied", body = MessageResponse)
    )
)]
pub async fn clear_history(
    Extension(service): Extension<Arc<Service>>,
) -> CalculatorResult<MessageResponse> {
    service.clear_history();
    Ok(Json(MessageResponse {
        message: "History cleared successfully".to_owned(),
    }))
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use serde_json::json;

    use super::*;

    fn create_service() -> Arc<Service> {
        Arc::new(Service::new())
    }

    fn ctx(path: &str) -> RequestContext {
        RequestContext {
            path: path.to_owned(),
            trace_id: Some("req-1".to_owned()),
        }
    }

    fn binary(a: Value, b: Value) -> Body {
        Ok(Json(json!({ "a": a, "b": b })))
    }

    #[tokio::test]
    async fn test_add_handler() {
        let service = create_service();
        let Json(resp) = add(
            ctx("/api/calculate/add"),
            Extension(Arc::clone(&service)),
            binary(json!(5), json!(3)),
        )
        .await
        .unwrap();

        assert_eq!(resp.operation, "add");
        assert_eq!(resp.result, Number::Int(8));
        assert_eq!(service.history().len(), 1);
    }

    #[tokio::test]
    async fn test_divide_by_zero_handler() {
        let service = create_service();
        let problem = divide(
            ctx("/api/calculate/divide"),
            Extension(Arc::clone(&service)),
            binary(json!(10), json!(0)),
        )
        .await
        .unwrap_err();

        assert_eq!(problem.status, axum::http::StatusCode::BAD_REQUEST);
        assert_eq!(problem.detail, "Cannot divide by zero");
        assert_eq!(problem.instance, "/api/calculate/divide");
        assert_eq!(problem.trace_id.as_deref(), Some("req-1"));
        assert!(service.history().is_empty());
    }

    #[tokio::test]
    async fn test_missing_operand_handler() {
        let problem = subtract(
            ctx("/api/calculate/subtract"),
            Extension(create_service()),
            Ok(Json(json!({ "a": 5 }))),
        )
        .await
        .unwrap_err();

        assert_eq!(problem.detail, MISSING_A_B);
        assert_eq!(problem.code, "CALCULATOR_INVALID_INPUT");
    }

    #[tokio::test]
    async fn test_array_body_is_missing_parameters() {
        let service = create_service();
        let problem = add(
            ctx("/api/calculate/add"),
            Extension(Arc::clone(&service)),
            Ok(Json(json!([5, 3]))),
        )
        .await
        .unwrap_err();

        assert_eq!(problem.detail, MISSING_A_B);
        assert!(service.history().is_empty());
    }

    #[tokio::test]
    async fn test_clear_history_handler() {
        let service = create_service();
        service.add(Number::Int(1), Number::Int(2));

        let Json(resp) = clear_history(Extension(Arc::clone(&service)))
            .await
            .unwrap();
        assert_eq!(resp.message, "History cleared successfully");

        let Json(history) = get_history(Extension(service)).await.unwrap();
        assert!(history.history.is_empty());
    }
}
