use reqwest::{Client, Method};
use serde_json::Value;

use crate::{
    client::LsContext,
    functions::{ls_request, params_or_default},
    response::{extract_list, extract_single},
    APIResult,
};

/// Relations and ordering the original client loads with every sale.
const SALE_DEFAULT_PARAMS: &[(&str, &str)] = &[
    (
        "load_relations",
        r#"["SaleLines","SaleLines.Item","Customer","Customer.Contact"]"#,
    ),
    ("orderby", "saleLineID"),
    ("orderby_desc", "1"),
];

/// Fetches a single sale with its lines, items and customer loaded
/// unless the caller overrides the query parameters.
pub async fn get_sale(
    sale_id: &str,
    params: Option<&[(&str, &str)]>,
    ctx: &LsContext,
    client: &Client,
) -> APIResult<Value> {
    let params = params_or_default(ctx, params, SALE_DEFAULT_PARAMS);
    let response = ls_request(
        ctx,
        client,
        Method::GET,
        "Account.Sale",
        Some(sale_id),
        params,
        None::<&Value>,
    )
    .await?;
    Ok(extract_single(&response, "Sale"))
}

pub async fn get_sales(
    params: Option<&[(&str, &str)]>,
    ctx: &LsContext,
    client: &Client,
) -> APIResult<Value> {
    let response = ls_request(
        ctx,
        client,
        Method::GET,
        "Account.Sale",
        None,
        params,
        None::<&Value>,
    )
    .await?;
    Ok(extract_list(&response, "Sale"))
}

pub async fn update_sale(
    sale_id: &str,
    sale_data: &Value,
    ctx: &LsContext,
    client: &Client,
) -> APIResult<Value> {
    let response = ls_request(
        ctx,
        client,
        Method::PUT,
        "Account.Sale",
        Some(sale_id),
        None,
        Some(sale_data),
    )
    .await?;
    Ok(extract_single(&response, "Sale"))
}

/// Refunds a sale through the nested `refund` action endpoint.
pub async fn create_sale_refund(
    sale_id: &str,
    data: &Value,
    ctx: &LsContext,
    client: &Client,
) -> APIResult<Value> {
    let control = format!("Account.Sale/{sale_id}/refund");
    let response = ls_request(ctx, client, Method::POST, &control, None, None, Some(data)).await?;
    Ok(extract_single(&response, "Sale"))
}

/// Lines belonging to one sale, via the nested sub-resource path.
pub async fn get_sale_sale_lines(
    sale_id: &str,
    params: Option<&[(&str, &str)]>,
    ctx: &LsContext,
    client: &Client,
) -> APIResult<Value> {
    let control = format!("Account.Sale/{sale_id}/SaleLine");
    let response = ls_request(
        ctx,
        client,
        Method::GET,
        &control,
        None,
        params,
        None::<&Value>,
    )
    .await?;
    Ok(extract_list(&response, "SaleLine"))
}

pub async fn get_sale_lines(
    params: Option<&[(&str, &str)]>,
    ctx: &LsContext,
    client: &Client,
) -> APIResult<Value> {
    let response = ls_request(
        ctx,
        client,
        Method::GET,
        "Account.SaleLine",
        None,
        params,
        None::<&Value>,
    )
    .await?;
    Ok(extract_list(&response, "SaleLine"))
}

pub async fn get_sale_line(
    sale_line_id: &str,
    ctx: &LsContext,
    client: &Client,
) -> APIResult<Value> {
    let response = ls_request(
        ctx,
        client,
        Method::GET,
        "Account.SaleLine",
        Some(sale_line_id),
        None,
        None::<&Value>,
    )
    .await?;
    Ok(extract_single(&response, "SaleLine"))
}

pub async fn create_sale_line(
    sale_id: &str,
    data: &Value,
    ctx: &LsContext,
    client: &Client,
) -> APIResult<Value> {
    let control = format!("Account.Sale/{sale_id}/SaleLine");
    let response = ls_request(ctx, client, Method::POST, &control, None, None, Some(data)).await?;
    Ok(extract_single(&response, "SaleLine"))
}

pub async fn update_sale_line(
    sale_id: &str,
    sale_line_id: &str,
    data: &Value,
    ctx: &LsContext,
    client: &Client,
) -> APIResult<Value> {
    let control = format!("Account.Sale/{sale_id}/SaleLine/{sale_line_id}");
    let response = ls_request(ctx, client, Method::PUT, &control, None, None, Some(data)).await?;
    Ok(extract_single(&response, "SaleLine"))
}

pub async fn delete_sale_line(
    sale_id: &str,
    sale_line_id: &str,
    ctx: &LsContext,
    client: &Client,
) -> APIResult<Value> {
    let control = format!("Account.Sale/{sale_id}/SaleLine/{sale_line_id}");
    let response = ls_request(
        ctx,
        client,
        Method::DELETE,
        &control,
        None,
        None,
        None::<&Value>,
    )
    .await?;
    Ok(extract_single(&response, "SaleLine"))
}
