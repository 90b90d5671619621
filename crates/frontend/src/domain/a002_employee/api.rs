use contracts::domain::a002_employee::aggregate::{Employee, EmployeeDto};

use crate::shared::api_utils::encode_segment;
use crate::shared::gateway::{Gateway, GatewayError, HttpRequest, Transport};

/// Fetch all employees
pub async fn fetch_all<T: Transport>(
    gateway: &Gateway<T>,
) -> Result<Vec<Employee>, GatewayError> {
    gateway
        .fetch(HttpRequest::get("/employees/all"))
        .await?
        .ok_or_else(GatewayError::missing_payload)
}

/// Fetch employees of one café
pub async fn fetch_by_cafe<T: Transport>(
    gateway: &Gateway<T>,
    cafe_id: &str,
) -> Result<Vec<Employee>, GatewayError> {
    gateway
        .fetch(HttpRequest::get(format!(
            "/employees?cafeId={}",
            encode_segment(cafe_id)
        )))
        .await?
        .ok_or_else(GatewayError::missing_payload)
}

/// Fetch one employee by id
pub async fn fetch_by_id<T: Transport>(
    gateway: &Gateway<T>,
    id: &str,
) -> Result<Employee, GatewayError> {
    gateway
        .fetch(HttpRequest::get(format!("/employees/{}", encode_segment(id))))
        .await?
        .ok_or(GatewayError::NotFound)
}

/// Create an employee
pub async fn create<T: Transport>(
    gateway: &Gateway<T>,
    dto: &EmployeeDto,
) -> Result<Employee, GatewayError> {
    gateway
        .fetch(HttpRequest::post("/employees", dto)?)
        .await?
        .ok_or_else(GatewayError::missing_payload)
}

/// Replace the editable fields of an employee; returns the updated record
pub async fn update<T: Transport>(
    gateway: &Gateway<T>,
    id: &str,
    dto: &EmployeeDto,
) -> Result<Employee, GatewayError> {
    gateway
        .fetch(HttpRequest::put(
            format!("/employees/{}", encode_segment(id)),
            dto,
        )?)
        .await?
        .ok_or_else(GatewayError::missing_payload)
}

/// Delete an employee
pub async fn delete<T: Transport>(gateway: &Gateway<T>, id: &str) -> Result<(), GatewayError> {
    gateway
        .execute(HttpRequest::delete(format!(
            "/employees/{}",
            encode_segment(id)
        )))
        .await
}
