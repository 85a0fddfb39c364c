//! Cart, order, shipping and payment mapping.

use crate::mappers::product::{map_money, map_variant};
use crate::wire;
use storefront_domain::account::Address;
use storefront_domain::cart::{Cart, LineItem, Payment, ShippingInfo};
use storefront_domain::order::Order;
use storefront_domain::shipping::{ShippingLocation, ShippingMethod, ShippingRate};
use storefront_domain::Locale;

/// Map a backend cart into a storefront cart.
///
/// `available_shipping_methods` is left unset here; the cart service fills
/// it in when a shipping address with a country is known.
pub fn map_cart(cart: &wire::Cart, locale: &Locale) -> Cart {
    Cart {
        cart_id: cart.id.clone(),
        cart_version: cart.version.to_string(),
        line_items: map_line_items(&cart.line_items, locale),
        email: cart.customer_email.clone(),
        sum: Some(map_money(&cart.total_price)),
        shipping_address: cart.shipping_address.as_ref().map(map_address),
        billing_address: cart.billing_address.as_ref().map(map_address),
        shipping_info: map_shipping_info(cart.shipping_info.as_ref(), locale),
        payments: map_payments(cart.payment_info.as_ref()),
        available_shipping_methods: None,
    }
}

/// Map backend line items, deriving a storefront URL for each.
pub fn map_line_items(line_items: &[wire::LineItem], locale: &Locale) -> Vec<LineItem> {
    line_items
        .iter()
        .map(|line_item| {
            let mut item = LineItem {
                line_item_id: line_item.id.clone(),
                name: line_item
                    .name
                    .get(&locale.language)
                    .cloned()
                    .unwrap_or_default(),
                item_type: "variant".to_string(),
                count: line_item.quantity,
                price: line_item
                    .price
                    .as_ref()
                    .map(|price| map_money(&price.value)),
                discounted_price: line_item
                    .price
                    .as_ref()
                    .and_then(|price| price.discounted.as_ref())
                    .map(|discounted| map_money(&discounted.value)),
                total_price: line_item.total_price.as_ref().map(map_money),
                variant: map_variant(&line_item.variant, locale),
                is_gift: line_item.line_item_mode.as_deref() == Some("GiftLineItem"),
                url: None,
            };
            item.url = Some(item.canonical_url());
            item
        })
        .collect()
}

/// Map a backend address.
pub fn map_address(address: &wire::Address) -> Address {
    Address {
        address_id: address.id.clone(),
        salutation: address.salutation.clone(),
        first_name: address.first_name.clone(),
        last_name: address.last_name.clone(),
        street_name: address.street_name.clone(),
        street_number: address.street_number.clone(),
        additional_street_info: address.additional_street_info.clone(),
        additional_address_info: address.additional_address_info.clone(),
        postal_code: address.postal_code.clone(),
        city: address.city.clone(),
        country: address.country.clone(),
        state: address.state.clone(),
        phone: address.phone.clone(),
    }
}

/// Map a storefront address back into the backend's shape, for cart
/// mutation bodies.
pub fn address_draft(address: &Address) -> wire::Address {
    wire::Address {
        id: address.address_id.clone(),
        salutation: address.salutation.clone(),
        first_name: address.first_name.clone(),
        last_name: address.last_name.clone(),
        street_name: address.street_name.clone(),
        street_number: address.street_number.clone(),
        additional_street_info: address.additional_street_info.clone(),
        additional_address_info: address.additional_address_info.clone(),
        postal_code: address.postal_code.clone(),
        city: address.city.clone(),
        country: address.country.clone(),
        state: address.state.clone(),
        phone: address.phone.clone(),
    }
}

/// Map a placed order. Structurally the cart mapping with the order's
/// identity fields on top.
pub fn map_order(order: &wire::Order, locale: &Locale) -> Order {
    Order {
        cart_id: order.id.clone(),
        order_state: order.order_state.clone(),
        order_id: order.order_number.clone(),
        order_version: order.version.to_string(),
        line_items: map_line_items(&order.line_items, locale),
        email: order.customer_email.clone(),
        shipping_address: order.shipping_address.as_ref().map(map_address),
        billing_address: order.billing_address.as_ref().map(map_address),
        sum: Some(map_money(&order.total_price)),
    }
}

/// Map a cart's shipping info.
///
/// The shipping method object is only recursed into when the backend
/// expanded it; otherwise just the method id is retained. Partial data is
/// acceptable and never raises.
pub fn map_shipping_info(
    shipping_info: Option<&wire::ShippingInfo>,
    locale: &Locale,
) -> Option<ShippingInfo> {
    let shipping_info = shipping_info?;

    let method = match &shipping_info.shipping_method.obj {
        Some(method) => map_shipping_method(method, locale),
        None => ShippingMethod::reference(&shipping_info.shipping_method.id),
    };

    Some(ShippingInfo {
        method,
        price: Some(map_money(&shipping_info.price)),
    })
}

/// Map an expanded shipping method.
pub fn map_shipping_method(method: &wire::ShippingMethod, locale: &Locale) -> ShippingMethod {
    ShippingMethod {
        shipping_method_id: method.id.clone(),
        name: method
            .localized_name
            .as_ref()
            .and_then(|name| name.get(&locale.language).cloned())
            .or_else(|| method.name.clone()),
        description: method
            .localized_description
            .as_ref()
            .and_then(|description| description.get(&locale.language).cloned())
            .or_else(|| method.description.clone()),
        rates: map_zone_rates(method.zone_rates.as_deref()),
    }
}

/// Flatten zone rates into shipping rates.
///
/// When the backend was asked for location-matching rates only, each rate
/// carries an `isMatching` flag; rates explicitly flagged `false` are
/// dropped, unflagged rates are kept. The same function therefore serves
/// both query modes.
pub fn map_zone_rates(zone_rates: Option<&[wire::ZoneRate]>) -> Option<Vec<ShippingRate>> {
    let zone_rates = zone_rates?;

    let mut shipping_rates = Vec::new();

    for zone_rate in zone_rates {
        let shipping_rate_id = zone_rate.zone.id.clone();
        let name = zone_rate
            .zone
            .obj
            .as_ref()
            .and_then(|zone| zone.name.clone());
        let locations = zone_rate.zone.obj.as_ref().and_then(|zone| {
            zone.locations.as_ref().map(|locations| {
                locations
                    .iter()
                    .map(|location| ShippingLocation {
                        country: location.country.clone(),
                        state: location.state.clone(),
                    })
                    .collect::<Vec<_>>()
            })
        });

        for rate in zone_rate
            .shipping_rates
            .iter()
            .filter(|rate| rate.is_matching != Some(false))
        {
            shipping_rates.push(ShippingRate {
                shipping_rate_id: shipping_rate_id.clone(),
                name: name.clone(),
                locations: locations.clone(),
                price: Some(map_money(&rate.price)),
            });
        }
    }

    Some(shipping_rates)
}

/// Map the payments attached to a cart.
pub fn map_payments(payment_info: Option<&wire::PaymentInfo>) -> Vec<Payment> {
    payment_info
        .map(|info| info.payments.iter().map(map_payment).collect())
        .unwrap_or_default()
}

/// Map one payment reference; unexpanded references yield an empty record
/// except for the raw debug payload.
pub fn map_payment(reference: &wire::Reference<wire::Payment>) -> Payment {
    let mut payment = reference
        .obj
        .as_ref()
        .map(map_payment_resource)
        .unwrap_or_default();
    payment.debug = serde_json::to_string(reference).ok();
    payment
}

/// Map a bare payment resource.
pub fn map_payment_resource(payment: &wire::Payment) -> Payment {
    Payment {
        id: payment.key.clone(),
        payment_id: payment.interface_id.clone(),
        payment_provider: payment.payment_method_info.payment_interface.clone(),
        payment_method: payment.payment_method_info.method.clone(),
        amount_planned: Some(map_money(&payment.amount_planned)),
        debug: serde_json::to_string(payment).ok(),
        payment_status: payment.payment_status.interface_code.clone(),
        version: payment.version,
    }
}

/// Map a storefront money value back into the backend's draft shape.
pub fn money_draft(money: &storefront_domain::Money) -> wire::Money {
    wire::Money {
        cent_amount: money.cent_amount,
        currency_code: money.currency_code.clone(),
        fraction_digits: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locale() -> Locale {
        Locale::new("en", "US", "USD")
    }

    fn base_cart() -> wire::Cart {
        wire::Cart {
            id: "cart-1".to_string(),
            version: 7,
            total_price: wire::Money::new(12340, "USD"),
            ..wire::Cart::default()
        }
    }

    #[test]
    fn test_cart_version_is_threaded_as_string() {
        let cart = map_cart(&base_cart(), &locale());
        assert_eq!(cart.cart_id, "cart-1");
        assert_eq!(cart.cart_version, "7");
        assert_eq!(cart.sum.unwrap().cent_amount, 12340);
    }

    #[test]
    fn test_gift_line_items_are_flagged() {
        let mut wire_cart = base_cart();
        wire_cart.line_items = vec![
            wire::LineItem {
                id: "li-1".to_string(),
                name: [("en".to_string(), "Red Shoes".to_string())].into(),
                quantity: 2,
                line_item_mode: Some("GiftLineItem".to_string()),
                variant: wire::ProductVariant {
                    id: 1,
                    sku: Some("SKU1".to_string()),
                    ..wire::ProductVariant::default()
                },
                ..wire::LineItem::default()
            },
            wire::LineItem {
                id: "li-2".to_string(),
                quantity: 1,
                line_item_mode: Some("Standard".to_string()),
                ..wire::LineItem::default()
            },
        ];

        let cart = map_cart(&wire_cart, &locale());
        assert!(cart.line_items[0].is_gift);
        assert!(!cart.line_items[1].is_gift);
        assert_eq!(cart.line_items[0].name, "Red Shoes");
        assert_eq!(cart.line_items[0].url.as_deref(), Some("/slug/p/SKU1"));
    }

    #[test]
    fn test_unexpanded_shipping_method_keeps_only_id() {
        let mut wire_cart = base_cart();
        wire_cart.shipping_info = Some(wire::ShippingInfo {
            shipping_method: wire::Reference::new("method-1"),
            price: wire::Money::new(499, "USD"),
        });

        let cart = map_cart(&wire_cart, &locale());
        let info = cart.shipping_info.unwrap();
        assert_eq!(info.method.shipping_method_id, "method-1");
        assert!(info.method.name.is_none());
        assert!(info.method.rates.is_none());
        assert_eq!(info.price.unwrap().cent_amount, 499);
    }

    #[test]
    fn test_expanded_shipping_method_resolves_localized_name() {
        let method = wire::ShippingMethod {
            id: "method-1".to_string(),
            name: Some("Standard".to_string()),
            localized_name: Some([("en".to_string(), "Standard Delivery".to_string())].into()),
            ..wire::ShippingMethod::default()
        };
        let mapped = map_shipping_method(&method, &locale());
        assert_eq!(mapped.name.as_deref(), Some("Standard Delivery"));
    }

    #[test]
    fn test_shipping_method_falls_back_to_plain_name() {
        let method = wire::ShippingMethod {
            id: "method-1".to_string(),
            name: Some("Standard".to_string()),
            localized_name: Some([("de".to_string(), "Standardversand".to_string())].into()),
            ..wire::ShippingMethod::default()
        };
        let mapped = map_shipping_method(&method, &locale());
        assert_eq!(mapped.name.as_deref(), Some("Standard"));
    }

    #[test]
    fn test_zone_rate_filter_drops_only_explicit_non_matching() {
        let zone_rates = vec![wire::ZoneRate {
            zone: wire::Reference::new("zone-1").with_obj(wire::Zone {
                name: Some("Europe".to_string()),
                locations: Some(vec![wire::ZoneLocation {
                    country: "DE".to_string(),
                    state: None,
                }]),
            }),
            shipping_rates: vec![
                wire::ShippingRate {
                    price: wire::Money::new(500, "EUR"),
                    is_matching: Some(false),
                },
                wire::ShippingRate {
                    price: wire::Money::new(300, "EUR"),
                    is_matching: None,
                },
                wire::ShippingRate {
                    price: wire::Money::new(200, "EUR"),
                    is_matching: Some(true),
                },
            ],
        }];

        let rates = map_zone_rates(Some(&zone_rates)).unwrap();
        let amounts: Vec<_> = rates
            .iter()
            .map(|rate| rate.price.as_ref().unwrap().cent_amount)
            .collect();
        assert_eq!(amounts, vec![300, 200]);
        assert_eq!(rates[0].shipping_rate_id, "zone-1");
        assert_eq!(rates[0].name.as_deref(), Some("Europe"));
    }

    #[test]
    fn test_order_mapping_carries_order_identity() {
        let order = wire::Order {
            id: "cart-1".to_string(),
            version: 2,
            order_number: Some("ORDER-42".to_string()),
            order_state: Some("Open".to_string()),
            customer_email: Some("jo@example.com".to_string()),
            total_price: wire::Money::new(9900, "USD"),
            ..wire::Order::default()
        };

        let mapped = map_order(&order, &locale());
        assert_eq!(mapped.cart_id, "cart-1");
        assert_eq!(mapped.order_id.as_deref(), Some("ORDER-42"));
        assert_eq!(mapped.order_state.as_deref(), Some("Open"));
        assert_eq!(mapped.order_version, "2");
        assert_eq!(mapped.sum.unwrap().cent_amount, 9900);
    }

    #[test]
    fn test_expanded_payment_mapping() {
        let reference = wire::Reference::new("pay-ref").with_obj(wire::Payment {
            id: None,
            key: Some("pay-1".to_string()),
            interface_id: Some("psp-123".to_string()),
            payment_method_info: wire::PaymentMethodInfo {
                payment_interface: Some("stripe".to_string()),
                method: Some("creditcard".to_string()),
            },
            amount_planned: wire::Money::new(9900, "USD"),
            payment_status: wire::PaymentStatus {
                interface_code: Some("paid".to_string()),
                interface_text: None,
            },
            version: 4,
        });

        let payment = map_payment(&reference);
        assert_eq!(payment.id.as_deref(), Some("pay-1"));
        assert_eq!(payment.payment_provider.as_deref(), Some("stripe"));
        assert_eq!(payment.payment_status.as_deref(), Some("paid"));
        assert_eq!(payment.version, 4);
        assert!(payment.debug.unwrap().contains("pay-ref"));
    }
}
