use reqwest::{Client, Method};
use serde_json::Value;

use crate::{
    client::LsContext,
    functions::{ls_request, params_or_default},
    response::{extract_list, extract_single},
    APIResult,
};

/// Fetches an employee with contact and role loaded; the default filter
/// also pins `employeeID` and excludes archived records.
pub async fn get_employee(
    employee_id: &str,
    params: Option<&[(&str, &str)]>,
    ctx: &LsContext,
    client: &Client,
) -> APIResult<Value> {
    let defaults = [
        ("load_relations", r#"["Contact","EmployeeRole"]"#),
        ("employeeID", employee_id),
        ("archived", "0"),
        ("limit", "1"),
    ];
    let params = params_or_default(ctx, params, &defaults);
    let response = ls_request(
        ctx,
        client,
        Method::GET,
        "Account.Employee",
        Some(employee_id),
        params,
        None::<&Value>,
    )
    .await?;
    Ok(extract_single(&response, "Employee"))
}

pub async fn get_employees(
    params: Option<&[(&str, &str)]>,
    ctx: &LsContext,
    client: &Client,
) -> APIResult<Value> {
    let response = ls_request(
        ctx,
        client,
        Method::GET,
        "Account.Employee",
        None,
        params,
        None::<&Value>,
    )
    .await?;
    Ok(extract_list(&response, "Employee"))
}
