//! Cart namespace actions.
//!
//! Each mutation fetches the working cart for the session, applies one
//! backend operation and answers with the updated cart, writing the cart
//! id back into the session bag so follow-up requests find it again.

use crate::context::ExtensionContext;
use crate::error::ExtensionError;
use crate::request::{Request, Response};
use serde::Deserialize;
use serde_json::{json, Value};
use storefront_backend::CartService;
use storefront_domain::account::{Account, Address};
use storefront_domain::cart::{Cart, Payment};
use storefront_domain::Locale;
use tracing::debug;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct VariantRef {
    sku: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddToCartBody {
    variant: VariantRef,
    #[serde(default = "default_count")]
    count: i64,
}

fn default_count() -> i64 {
    1
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LineItemRef {
    id: String,
    count: Option<i64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LineItemBody {
    line_item: LineItemRef,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EmailBody {
    email: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddressBody {
    address: Address,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ShippingMethodRef {
    id: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ShippingMethodBody {
    shipping_method: ShippingMethodRef,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PaymentBody {
    payment: Payment,
}

/// Fetch the working cart for a request.
///
/// A session-carried account wins, then an explicit cart id, then an
/// anonymous id; a session with none of these gets a fresh anonymous cart.
async fn fetch_cart(
    request: &Request,
    service: &CartService,
) -> Result<Cart, ExtensionError> {
    if let Some(account) = request.session_value("account") {
        if let Ok(account) = serde_json::from_value::<Account>(account.clone()) {
            return Ok(service.get_for_user(&account).await?);
        }
    }

    if let Some(cart_id) = request.session_value("cartId").and_then(Value::as_str) {
        return Ok(service.get_by_id(cart_id).await?);
    }

    let anonymous_id = match request.session_value("anonymousId").and_then(Value::as_str) {
        Some(anonymous_id) => anonymous_id.to_string(),
        None => generate_anonymous_id(),
    };
    debug!(%anonymous_id, "fetching anonymous cart");
    Ok(service.get_anonymous(&anonymous_id).await?)
}

/// Session bag with the cart id written back.
fn session_with_cart(request: &Request, cart: &Cart) -> Option<Value> {
    let mut session = match request.session_data.clone() {
        Some(Value::Object(map)) => Value::Object(map),
        _ => json!({}),
    };
    session["cartId"] = json!(cart.cart_id);
    Some(session)
}

/// Session bag with the cart id dropped; the cart is consumed once
/// ordered.
fn session_without_cart(request: &Request) -> Option<Value> {
    let mut session = match request.session_data.clone() {
        Some(Value::Object(map)) => Value::Object(map),
        _ => json!({}),
    };
    if let Some(map) = session.as_object_mut() {
        map.remove("cartId");
    }
    Some(session)
}

fn cart_response(request: &Request, cart: Cart) -> Result<Response, ExtensionError> {
    let session = session_with_cart(request, &cart);
    Response::json(200, &cart, session)
}

/// Generate an anonymous session identifier.
fn generate_anonymous_id() -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    let counter = COUNTER.fetch_add(1, Ordering::SeqCst);

    format!("anon-{:x}-{:x}", timestamp, counter)
}

fn service_for(request: &Request, context: &ExtensionContext) -> CartService {
    let locale: Locale = context.resolve_locale(request);
    context.cart_service(locale)
}

/// `cart/getCart`: the session's working cart.
pub async fn get_cart(
    request: Request,
    context: ExtensionContext,
) -> Result<Response, ExtensionError> {
    let service = service_for(&request, &context);
    let cart = fetch_cart(&request, &service).await?;
    cart_response(&request, cart)
}

/// `cart/addToCart`: add a variant by SKU.
pub async fn add_to_cart(
    request: Request,
    context: ExtensionContext,
) -> Result<Response, ExtensionError> {
    let body: AddToCartBody = request.json_body()?;
    let service = service_for(&request, &context);

    let cart = fetch_cart(&request, &service).await?;
    let cart = service
        .add_to_cart(&cart, &body.variant.sku, body.count)
        .await?;
    cart_response(&request, cart)
}

/// `cart/updateLineItem`: change a line item's quantity.
pub async fn update_line_item(
    request: Request,
    context: ExtensionContext,
) -> Result<Response, ExtensionError> {
    let body: LineItemBody = request.json_body()?;
    let service = service_for(&request, &context);

    let cart = fetch_cart(&request, &service).await?;
    let cart = service
        .update_line_item(&cart, &body.line_item.id, body.line_item.count.unwrap_or(1))
        .await?;
    cart_response(&request, cart)
}

/// `cart/removeLineItem`: remove a line item.
pub async fn remove_line_item(
    request: Request,
    context: ExtensionContext,
) -> Result<Response, ExtensionError> {
    let body: LineItemBody = request.json_body()?;
    let service = service_for(&request, &context);

    let cart = fetch_cart(&request, &service).await?;
    let cart = service.remove_line_item(&cart, &body.line_item.id).await?;
    cart_response(&request, cart)
}

/// `cart/setEmail`: set the customer email.
pub async fn set_email(
    request: Request,
    context: ExtensionContext,
) -> Result<Response, ExtensionError> {
    let body: EmailBody = request.json_body()?;
    let service = service_for(&request, &context);

    let cart = fetch_cart(&request, &service).await?;
    let cart = service.set_email(&cart, &body.email).await?;
    cart_response(&request, cart)
}

/// `cart/setShippingAddress`.
pub async fn set_shipping_address(
    request: Request,
    context: ExtensionContext,
) -> Result<Response, ExtensionError> {
    let body: AddressBody = request.json_body()?;
    let service = service_for(&request, &context);

    let cart = fetch_cart(&request, &service).await?;
    let cart = service.set_shipping_address(&cart, &body.address).await?;
    cart_response(&request, cart)
}

/// `cart/setBillingAddress`.
pub async fn set_billing_address(
    request: Request,
    context: ExtensionContext,
) -> Result<Response, ExtensionError> {
    let body: AddressBody = request.json_body()?;
    let service = service_for(&request, &context);

    let cart = fetch_cart(&request, &service).await?;
    let cart = service.set_billing_address(&cart, &body.address).await?;
    cart_response(&request, cart)
}

/// `cart/setShippingMethod`: select a shipping method by id.
pub async fn set_shipping_method(
    request: Request,
    context: ExtensionContext,
) -> Result<Response, ExtensionError> {
    let body: ShippingMethodBody = request.json_body()?;
    let service = service_for(&request, &context);

    let cart = fetch_cart(&request, &service).await?;
    let cart = service
        .set_shipping_method(&cart, &body.shipping_method.id)
        .await?;
    cart_response(&request, cart)
}

/// `cart/checkout`: turn the working cart into an order and drop the cart
/// id from the session.
pub async fn checkout(
    request: Request,
    context: ExtensionContext,
) -> Result<Response, ExtensionError> {
    let service = service_for(&request, &context);

    let cart = fetch_cart(&request, &service).await?;
    let order = service.checkout(&cart).await?;

    let session = session_without_cart(&request);
    Response::json(200, &order, session)
}

/// `cart/getShippingMethods`: all shipping methods, or only those matching
/// the locale's country when `onlyMatching=true`.
pub async fn get_shipping_methods(
    request: Request,
    context: ExtensionContext,
) -> Result<Response, ExtensionError> {
    let only_matching = request.query_param("onlyMatching") == Some("true");
    let service = service_for(&request, &context);

    let methods = service.get_shipping_methods(only_matching).await?;
    Response::json(200, &methods, request.session_data)
}

/// `cart/getAvailableShippingMethods`: methods matching the working cart.
pub async fn get_available_shipping_methods(
    request: Request,
    context: ExtensionContext,
) -> Result<Response, ExtensionError> {
    let service = service_for(&request, &context);

    let cart = fetch_cart(&request, &service).await?;
    let methods = service.get_available_shipping_methods(&cart).await?;
    Response::json(200, &methods, request.session_data)
}

/// `cart/addPayment`: attach a payment to the working cart.
pub async fn add_payment(
    request: Request,
    context: ExtensionContext,
) -> Result<Response, ExtensionError> {
    let body: PaymentBody = request.json_body()?;
    let service = service_for(&request, &context);

    let cart = fetch_cart(&request, &service).await?;
    let cart = service.add_payment(&cart, &body.payment).await?;
    cart_response(&request, cart)
}

/// `cart/updatePayment`: update a payment attached to the working cart.
pub async fn update_payment(
    request: Request,
    context: ExtensionContext,
) -> Result<Response, ExtensionError> {
    let body: PaymentBody = request.json_body()?;
    let service = service_for(&request, &context);

    let cart = fetch_cart(&request, &service).await?;
    let payment = service.update_payment(&cart, &body.payment).await?;
    Response::json(200, &payment, request.session_data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ExtensionConfig;
    use std::sync::Arc;
    use storefront_backend::test_util::MockBackend;
    use storefront_backend::wire;

    fn context_with(backend: Arc<MockBackend>) -> ExtensionContext {
        ExtensionContext::new(backend, ExtensionConfig::default())
    }

    fn wire_cart(id: &str, version: i64) -> wire::Cart {
        wire::Cart {
            id: id.to_string(),
            version,
            total_price: wire::Money::new(2500, "USD"),
            ..wire::Cart::default()
        }
    }

    #[tokio::test]
    async fn test_get_cart_creates_anonymous_cart_and_stores_id() {
        let backend = Arc::new(MockBackend::default());
        let response = get_cart(Request::default(), context_with(backend))
            .await
            .unwrap();

        assert_eq!(response.status_code, 200);
        let session = response.session_data.unwrap();
        assert_eq!(session["cartId"], "cart-new");
    }

    #[tokio::test]
    async fn test_get_cart_prefers_session_cart_id() {
        let backend = Arc::new(MockBackend {
            carts: vec![wire_cart("cart-77", 3)],
            ..MockBackend::default()
        });

        let request = Request {
            session_data: Some(json!({"cartId": "cart-77"})),
            ..Request::default()
        };
        let response = get_cart(request, context_with(backend)).await.unwrap();

        let payload: Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(payload["cartId"], "cart-77");
    }

    #[tokio::test]
    async fn test_add_to_cart_parses_body_and_updates() {
        let backend = Arc::new(MockBackend {
            carts: vec![wire_cart("cart-1", 5)],
            ..MockBackend::default()
        });

        let request = Request {
            body: Some(r#"{"variant": {"sku": "SKU1"}, "count": 2}"#.to_string()),
            session_data: Some(json!({"cartId": "cart-1"})),
            ..Request::default()
        };
        let response = add_to_cart(request, context_with(backend.clone()))
            .await
            .unwrap();
        assert_eq!(response.status_code, 200);

        let update = backend.last_cart_update.lock().unwrap().clone().unwrap();
        assert_eq!(update.version, 5);
        let action_json = serde_json::to_value(&update.actions[0]).unwrap();
        assert_eq!(action_json["action"], "addLineItem");
        assert_eq!(action_json["sku"], "SKU1");
        assert_eq!(action_json["quantity"], 2);
    }

    #[tokio::test]
    async fn test_add_to_cart_without_body_is_an_error() {
        let backend = Arc::new(MockBackend::default());
        let error = add_to_cart(Request::default(), context_with(backend))
            .await
            .unwrap_err();
        assert!(matches!(error, ExtensionError::MissingBody));
    }

    #[tokio::test]
    async fn test_checkout_drops_cart_id_from_session() {
        let backend = Arc::new(MockBackend {
            carts: vec![wire_cart("cart-1", 5)],
            ..MockBackend::default()
        });

        let request = Request {
            session_data: Some(json!({"cartId": "cart-1", "visitor": 9})),
            ..Request::default()
        };
        let response = checkout(request, context_with(backend)).await.unwrap();

        let payload: Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(payload["orderState"], "Open");

        let session = response.session_data.unwrap();
        assert!(session.get("cartId").is_none());
        assert_eq!(session["visitor"], 9);
    }

    #[tokio::test]
    async fn test_get_shipping_methods_honors_only_matching() {
        let backend = Arc::new(MockBackend::default());

        let mut request = Request::default();
        request
            .query
            .insert("onlyMatching".to_string(), "true".to_string());
        get_shipping_methods(request, context_with(backend.clone()))
            .await
            .unwrap();

        assert_eq!(
            *backend.last_shipping_country.lock().unwrap(),
            Some(Some("US".to_string()))
        );
    }

    #[tokio::test]
    async fn test_session_account_wins_over_cart_id() {
        let backend = Arc::new(MockBackend {
            carts: vec![wire_cart("cart-of-user", 1)],
            ..MockBackend::default()
        });

        let request = Request {
            session_data: Some(json!({
                "account": {"accountId": "customer-1"},
                "cartId": "cart-of-user",
            })),
            ..Request::default()
        };
        get_cart(request, context_with(backend.clone())).await.unwrap();

        let query = backend.last_cart_query.lock().unwrap().clone().unwrap();
        assert_eq!(query.customer_id.as_deref(), Some("customer-1"));
    }
}
