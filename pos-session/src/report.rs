//! Renders the three normalization views of a finished order. The
//! normal forms are views over the same rows, not schema constraints.

use std::io::{self, Write};

use pos_core::models::OrderReport;
use pos_core::money::format_php;

pub fn render<W: Write>(output: &mut W, report: &OrderReport) -> io::Result<()> {
    writeln!(output, "\n=== 1NF ===")?;
    writeln!(
        output,
        "{:<15}{:<10}{:<10}{:<10}{:<10}",
        "OrderDetailID", "OrderID", "MenuID", "Quantity", "Subtotal"
    )?;
    for line in &report.lines {
        writeln!(
            output,
            "{:<15}{:<10}{:<10}{:<10}{:<10}",
            line.id,
            line.order_id,
            line.menu_id,
            line.quantity,
            format_php(line.subtotal)
        )?;
    }

    writeln!(output, "\n=== 2NF (Grouped by MenuID) ===")?;
    writeln!(output, "{:<10}{:<10}", "MenuID", "TotalQty")?;
    for group in &report.groups {
        writeln!(output, "{:<10}{:<10}", group.menu_id, group.total_quantity)?;
    }

    writeln!(output, "\n=== 3NF (Separate Entities) ===")?;

    writeln!(output, "\nOrder Info:")?;
    if let Some(order) = &report.order {
        writeln!(
            output,
            "OrderID: {}, TotalAmount: PHP {}",
            order.id,
            format_php(order.total)
        )?;
    }

    writeln!(output, "\nMenu Info:")?;
    for item in &report.items {
        writeln!(
            output,
            "MenuID: {}, ItemName: {}, Price: PHP {}",
            item.id,
            item.name,
            format_php(item.price)
        )?;
    }

    writeln!(output, "\nPayment Info:")?;
    for payment in &report.payments {
        writeln!(
            output,
            "MethodID: {}, AmountPaid: PHP {}, Change: PHP {}, Date: {}",
            payment.method.code(),
            format_php(payment.amount_paid),
            format_php(payment.change),
            payment.paid_at.to_rfc3339()
        )?;
    }

    Ok(())
}
