//! # Receipt Composer
//!
//! Deterministically maps an [`Order`] into an ordered sequence of styled
//! receipt lines followed by a cut instruction. No hidden state is carried
//! across requests; both output modes serialize the same composition.
//!
//! Section order is fixed: header, order info, customer details, order
//! items, price summary, payment status, footer. Each section ends with a
//! horizontal rule (items get one rule per item).

use chrono::DateTime;

use crate::compose::{ReceiptWriter, RenderedReceipt};
use crate::order::{LineItem, Order};

/// en-US locale shape, e.g. `3/15/2025, 6:30:00 PM`.
const DATE_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Compose the full receipt for an order.
pub fn compose(order: &Order) -> RenderedReceipt {
    let mut writer = ReceiptWriter::new();

    header(&mut writer, order);
    order_info(&mut writer, order);
    customer_details(&mut writer, order);
    order_items(&mut writer, order);
    price_summary(&mut writer, order);
    payment_status(&mut writer, order);
    footer(&mut writer, order);

    writer.finish()
}

fn header(writer: &mut ReceiptWriter, order: &Order) {
    writer
        .align_center()
        .bold(true)
        .println(&order.business_name)
        .bold(false)
        .println(&order.business_address.google_formatted_address)
        .println(format!(
            "Tel: {}",
            order.business_phone_number.as_deref().unwrap_or("N/A")
        ))
        .draw_line();
}

fn order_info(writer: &mut ReceiptWriter, order: &Order) {
    writer
        .align_left()
        .println(format!("Order #: {}", order.order_number))
        .println(format!("Date: {}", format_order_date(&order.created_date)))
        .println(format!("Status: {}", order.fulfillment_status))
        .println(format!("Fulfillment: {}", order.fulfillment_method))
        .draw_line();
}

fn customer_details(writer: &mut ReceiptWriter, order: &Order) {
    let customer = &order.customer_details;
    writer
        .bold(true)
        .println("CUSTOMER DETAILS")
        .bold(false)
        .println(format!("{} {}", customer.first_name, customer.last_name))
        .println(format!("Phone: {}", customer.phone))
        .println(format!("Email: {}", customer.email));

    // The delivery sub-block needs both the method and an address; a
    // delivery order without one still renders, just without the block.
    if order.is_delivery()
        && let Some(address) = &order.pickup_address
    {
        writer
            .println("Delivery Address:")
            .println(&address.address_line)
            .println(format!(
                "{}, {} {}",
                address.city, address.subdivision, address.postal_code
            ));
    }
    writer.draw_line();
}

fn order_items(writer: &mut ReceiptWriter, order: &Order) {
    writer.bold(true).println("ORDER ITEMS").bold(false);

    for item in &order.line_items {
        line_item(writer, item);
    }
}

fn line_item(writer: &mut ReceiptWriter, item: &LineItem) {
    writer
        .println(format!("{}x {} ({})", item.quantity, item.name, item.variant))
        .println(format!("  {}", item.price));

    if let Some(requests) = non_empty(&item.special_requests) {
        writer.println(format!("  Special Requests: {requests}"));
    }
    if let Some(modifiers) = non_empty(&item.modifiers) {
        writer.println(format!("  Modifiers: {modifiers}"));
    }

    writer.draw_line();
}

fn price_summary(writer: &mut ReceiptWriter, order: &Order) {
    let summary = &order.price_summary;
    writer
        .bold(true)
        .println("PRICE SUMMARY")
        .bold(false)
        .println(format!("Subtotal: {}", summary.subtotal_formatted_amount))
        .println(format!("Tax: {}", summary.tax_formatted_amount));

    // Numeric amounts gate their formatted counterparts; the formatted
    // strings are shown verbatim.
    if summary.shipping_amount > 0.0 {
        writer.println(format!("Delivery: {}", summary.shipping_formatted_amount));
    }
    if summary.discount_amount > 0.0 {
        writer.println(format!("Discount: -{}", summary.discount_formatted_amount));
    }

    writer
        .bold(true)
        .println(format!("TOTAL: {}", summary.total_formatted_amount))
        .bold(false)
        .draw_line();
}

fn payment_status(writer: &mut ReceiptWriter, order: &Order) {
    let status = if order.is_paid() { "PAID" } else { "NOT PAID" };
    writer
        .println(format!("Payment Status: {status}"))
        .draw_line();
}

fn footer(writer: &mut ReceiptWriter, order: &Order) {
    writer
        .align_center()
        .println("Thank you for your order!")
        .println(&order.website_url)
        .cut();
}

/// Format an order timestamp for display.
///
/// Accepts RFC 3339 (formatted in the timestamp's own UTC offset) or
/// epoch milliseconds (formatted in UTC). Anything else renders as the
/// literal `Invalid Date` rather than failing the request.
pub fn format_order_date(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format(DATE_FORMAT).to_string();
    }
    if let Ok(millis) = raw.parse::<i64>()
        && let Some(parsed) = DateTime::from_timestamp_millis(millis)
    {
        return parsed.format(DATE_FORMAT).to_string();
    }
    "Invalid Date".to_string()
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}
